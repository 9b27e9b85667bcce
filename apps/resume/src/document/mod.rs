//! Résumé document model and its LaTeX rendering.
//!
//! The tree is built bottom-up by the caller (values → items → sections →
//! document) and rendered with one call to [`Document::render`]. Rendering reads
//! the tree and never mutates it.

pub mod items;
pub mod render;
pub mod section;
pub mod title;
pub mod values;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::latex::PREAMBLE;

pub use items::{EducationItem, ExperienceItem, ProjectItem, TechnicalSkillItem};
pub use render::{ItemKind, Renderable, SectionItem, SectionLayout};
pub use section::Section;
pub use title::TitleBlock;
pub use values::{format_date, Link, Location, Temporal};

pub const BEGIN_DOCUMENT: &str = "\\begin{document}";
pub const END_DOCUMENT: &str = "\\end{document}";

/// Separator between consecutive top-level elements.
const ELEMENT_SEPARATOR: &str = "\n\n";

// ────────────────────────────────────────────────────────────────────────────
// Elements
// ────────────────────────────────────────────────────────────────────────────

/// Anything placeable at the top level of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentElement {
    Title(TitleBlock),
    Education(Section<EducationItem>),
    Experience(Section<ExperienceItem>),
    Projects(Section<ProjectItem>),
    TechnicalSkills(Section<TechnicalSkillItem>),
}

impl DocumentElement {
    /// The item kind held by a section element; `None` for the title block.
    pub fn item_kind(&self) -> Option<ItemKind> {
        match self {
            DocumentElement::Title(_) => None,
            DocumentElement::Education(_) => Some(ItemKind::Education),
            DocumentElement::Experience(_) => Some(ItemKind::Experience),
            DocumentElement::Projects(_) => Some(ItemKind::Project),
            DocumentElement::TechnicalSkills(_) => Some(ItemKind::TechnicalSkill),
        }
    }
}

impl Renderable for DocumentElement {
    fn render(&self) -> String {
        match self {
            DocumentElement::Title(title) => title.render(),
            DocumentElement::Education(section) => section.render(),
            DocumentElement::Experience(section) => section.render(),
            DocumentElement::Projects(section) => section.render(),
            DocumentElement::TechnicalSkills(section) => section.render(),
        }
    }
}

impl From<TitleBlock> for DocumentElement {
    fn from(title: TitleBlock) -> Self {
        DocumentElement::Title(title)
    }
}

impl From<Section<EducationItem>> for DocumentElement {
    fn from(section: Section<EducationItem>) -> Self {
        DocumentElement::Education(section)
    }
}

impl From<Section<ExperienceItem>> for DocumentElement {
    fn from(section: Section<ExperienceItem>) -> Self {
        DocumentElement::Experience(section)
    }
}

impl From<Section<ProjectItem>> for DocumentElement {
    fn from(section: Section<ProjectItem>) -> Self {
        DocumentElement::Projects(section)
    }
}

impl From<Section<TechnicalSkillItem>> for DocumentElement {
    fn from(section: Section<TechnicalSkillItem>) -> Self {
        DocumentElement::TechnicalSkills(section)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// Root of the tree: title block and sections, in the order they print.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    elements: Vec<DocumentElement>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn push(&mut self, element: impl Into<DocumentElement>) {
        self.elements.push(element.into());
    }

    pub fn with(mut self, element: impl Into<DocumentElement>) -> Self {
        self.push(element);
        self
    }

    pub fn elements(&self) -> &[DocumentElement] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<DocumentElement> {
        self.elements
    }

    /// Preamble, `\begin{document}`, each element separated by a blank line,
    /// `\end{document}`.
    pub fn render(&self) -> String {
        let body = self
            .elements
            .iter()
            .map(Renderable::render)
            .collect::<Vec<_>>()
            .join(ELEMENT_SEPARATOR);

        let mut out = String::with_capacity(PREAMBLE.len() + body.len() + 64);
        out.push_str(PREAMBLE);
        out.push_str(BEGIN_DOCUMENT);
        out.push_str(ELEMENT_SEPARATOR);
        if !body.is_empty() {
            out.push_str(&body);
            out.push_str(ELEMENT_SEPARATOR);
        }
        out.push_str(END_DOCUMENT);
        out.push('\n');

        debug!(
            elements = self.elements.len(),
            bytes = out.len(),
            "Rendered document"
        );
        out
    }
}

impl Renderable for Document {
    fn render(&self) -> String {
        Document::render(self)
    }
}

impl FromIterator<DocumentElement> for Document {
    fn from_iter<I: IntoIterator<Item = DocumentElement>>(iter: I) -> Self {
        Document {
            elements: iter.into_iter().collect(),
        }
    }
}
