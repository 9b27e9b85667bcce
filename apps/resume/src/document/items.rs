//! The four entry kinds a résumé section can hold.
//!
//! Every `render()` fills a fixed template. Absent optional fields become an
//! empty argument (`{}`) so the surrounding command keeps its arity. Bullet and
//! keyword lists emit one line per element, in input order.

use serde::{Deserialize, Serialize};

use crate::document::render::{ItemKind, Renderable, SectionItem};
use crate::document::values::{Location, Temporal};

const ITEM_LIST_START: &str = "      \\resumeItemListStart";
const ITEM_LIST_END: &str = "      \\resumeItemListEnd";

/// Renders bullets as `\resumeItem{...}` lines wrapped in an item list.
///
/// An empty slice yields an empty string: LaTeX rejects an itemize with no `\item`.
fn render_bullets(bullets: &[String]) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    out.push('\n');
    out.push_str(ITEM_LIST_START);
    for bullet in bullets {
        out.push_str("\n        \\resumeItem{");
        out.push_str(bullet);
        out.push('}');
    }
    out.push('\n');
    out.push_str(ITEM_LIST_END);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub school: String,
    pub location: Location,
    #[serde(default)]
    pub degree: Option<String>,
    pub dates: Temporal,
}

impl EducationItem {
    pub fn new(
        school: impl Into<String>,
        location: Location,
        degree: Option<String>,
        dates: Temporal,
    ) -> Self {
        EducationItem {
            school: school.into(),
            location,
            degree,
            dates,
        }
    }
}

impl Renderable for EducationItem {
    fn render(&self) -> String {
        format!(
            "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}",
            self.school,
            self.location.render(),
            self.degree.as_deref().unwrap_or_default(),
            self.dates.render()
        )
    }
}

impl SectionItem for EducationItem {
    const KIND: ItemKind = ItemKind::Education;
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub position: String,
    pub dates: Temporal,
    #[serde(default)]
    pub organization: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl ExperienceItem {
    pub fn new(
        position: impl Into<String>,
        dates: Temporal,
        organization: Option<String>,
        location: Location,
    ) -> Self {
        ExperienceItem {
            position: position.into(),
            dates,
            organization,
            location,
            bullets: Vec::new(),
        }
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }
}

impl Renderable for ExperienceItem {
    fn render(&self) -> String {
        format!(
            "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}{}",
            self.position,
            self.dates.render(),
            self.organization.as_deref().unwrap_or_default(),
            self.location.render(),
            render_bullets(&self.bullets)
        )
    }
}

impl SectionItem for ExperienceItem {
    const KIND: ItemKind = ItemKind::Experience;
}

// ────────────────────────────────────────────────────────────────────────────
// Project
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub dates: Temporal,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl ProjectItem {
    pub fn new(title: impl Into<String>, dates: Temporal) -> Self {
        ProjectItem {
            title: title.into(),
            keywords: Vec::new(),
            dates,
            bullets: Vec::new(),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    /// Keywords one per line inside `\emph{}`, comma-terminated except the last.
    fn render_keywords(&self) -> String {
        let last = self.keywords.len().saturating_sub(1);
        let mut out = String::new();
        for (i, keyword) in self.keywords.iter().enumerate() {
            out.push_str("\n            ");
            out.push_str(keyword);
            if i < last {
                out.push(',');
            }
        }
        out
    }
}

impl Renderable for ProjectItem {
    fn render(&self) -> String {
        format!(
            "    \\resumeProjectHeading\n      {{\\textbf{{{}}} $|$ \\emph{{{}\n          }}}}{{{}}}{}",
            self.title,
            self.render_keywords(),
            self.dates.render(),
            render_bullets(&self.bullets)
        )
    }
}

impl SectionItem for ProjectItem {
    const KIND: ItemKind = ItemKind::Project;
}

// ────────────────────────────────────────────────────────────────────────────
// Technical skills
// ────────────────────────────────────────────────────────────────────────────

/// One labelled line of skills, e.g. `Languages: Rust, Go, SQL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSkillItem {
    pub label: String,
    #[serde(default)]
    pub list: Vec<String>,
}

impl TechnicalSkillItem {
    pub fn new<I, S>(label: impl Into<String>, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TechnicalSkillItem {
            label: label.into(),
            list: list.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for TechnicalSkillItem {
    fn render(&self) -> String {
        format!(
            "     \\textbf{{{}}}{{: {}}}",
            self.label,
            self.list.join(", ")
        )
    }
}

impl SectionItem for TechnicalSkillItem {
    const KIND: ItemKind = ItemKind::TechnicalSkill;
}
