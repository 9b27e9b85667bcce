//! Rendering capabilities shared by every node in the document tree.

/// Anything that can turn itself into LaTeX source.
pub trait Renderable {
    fn render(&self) -> String;
}

/// An entry that only lives inside a [`Section`](super::Section).
///
/// The heading and layout belong to the item *type*: every `Section<T>` of the
/// same `T` gets the same `\section{...}` title without looking at an instance.
pub trait SectionItem: Renderable {
    const KIND: ItemKind;
    const TITLE: &'static str = Self::KIND.title();
}

/// Closed set of item variants a section can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Education,
    Experience,
    Project,
    TechnicalSkill,
}

/// How a section wraps its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// `\resumeSubHeadingListStart` … `\resumeSubHeadingListEnd`, one item per heading.
    Subheadings,
    /// One small paragraph inside a label-less itemize; used for skill lines.
    Compact,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Education,
        ItemKind::Experience,
        ItemKind::Project,
        ItemKind::TechnicalSkill,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            ItemKind::Education => "Education",
            ItemKind::Experience => "Experience",
            ItemKind::Project => "Projects",
            ItemKind::TechnicalSkill => "Technical Skills",
        }
    }

    pub const fn layout(self) -> SectionLayout {
        match self {
            ItemKind::TechnicalSkill => SectionLayout::Compact,
            ItemKind::Education | ItemKind::Experience | ItemKind::Project => {
                SectionLayout::Subheadings
            }
        }
    }
}
