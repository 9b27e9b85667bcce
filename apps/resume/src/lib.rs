//! Builds a résumé as a tree of typed entries and renders it to LaTeX.
//!
//! ```text
//! Document
//! ├── TitleBlock
//! ├── Section<EducationItem>
//! ├── Section<ExperienceItem>
//! ├── Section<ProjectItem>
//! └── Section<TechnicalSkillItem>
//! ```
//!
//! Rendering is pure: [`Document::render`] walks the tree and concatenates
//! LaTeX bottom-up. User text is inserted verbatim unless the model has been
//! passed through [`latex::EscapeText`] first.

pub mod config;
pub mod document;
pub mod errors;
pub mod input;
pub mod latex;

pub use document::{
    Document, DocumentElement, EducationItem, ExperienceItem, ItemKind, Link, Location,
    ProjectItem, Renderable, Section, SectionItem, TechnicalSkillItem, Temporal, TitleBlock,
};
pub use errors::ResumeError;
