//! Escaping of LaTeX special characters in user-supplied text.
//!
//! Rendering itself is verbatim. Callers that take text from outside (forms,
//! JSON files) run the model through [`EscapeText`] once before rendering, so
//! every string lands in the markup already escaped.

use crate::document::{
    Document, DocumentElement, EducationItem, ExperienceItem, Link, Location, ProjectItem,
    Section, SectionItem, TechnicalSkillItem, Temporal, TitleBlock,
};

/// Escapes the ten LaTeX specials so the text typesets literally.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes only what breaks the url argument of `\href`.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '%' | '#') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Returns a copy of a model value with all of its display text escaped.
pub trait EscapeText: Sized {
    fn escape_text(self) -> Self;
}

fn escape_all(items: Vec<String>) -> Vec<String> {
    items.iter().map(|s| escape_latex(s)).collect()
}

impl EscapeText for Location {
    fn escape_text(self) -> Self {
        match self {
            Location::InPerson { city, state } => Location::InPerson {
                city: escape_latex(&city),
                state: escape_latex(&state),
            },
            Location::Hybrid { city, state } => Location::Hybrid {
                city: escape_latex(&city),
                state: escape_latex(&state),
            },
            Location::Remote => Location::Remote,
        }
    }
}

impl EscapeText for Temporal {
    fn escape_text(self) -> Self {
        self
    }
}

impl EscapeText for Link {
    fn escape_text(self) -> Self {
        Link {
            url: escape_url(&self.url),
            text: escape_latex(&self.text),
        }
    }
}

impl EscapeText for EducationItem {
    fn escape_text(self) -> Self {
        EducationItem {
            school: escape_latex(&self.school),
            location: self.location.escape_text(),
            degree: self.degree.as_deref().map(escape_latex),
            dates: self.dates,
        }
    }
}

impl EscapeText for ExperienceItem {
    fn escape_text(self) -> Self {
        ExperienceItem {
            position: escape_latex(&self.position),
            dates: self.dates,
            organization: self.organization.as_deref().map(escape_latex),
            location: self.location.escape_text(),
            bullets: escape_all(self.bullets),
        }
    }
}

impl EscapeText for ProjectItem {
    fn escape_text(self) -> Self {
        ProjectItem {
            title: escape_latex(&self.title),
            keywords: escape_all(self.keywords),
            dates: self.dates,
            bullets: escape_all(self.bullets),
        }
    }
}

impl EscapeText for TechnicalSkillItem {
    fn escape_text(self) -> Self {
        TechnicalSkillItem {
            label: escape_latex(&self.label),
            list: escape_all(self.list),
        }
    }
}

impl<T: SectionItem + EscapeText> EscapeText for Section<T> {
    fn escape_text(self) -> Self {
        self.map_items(EscapeText::escape_text)
    }
}

impl EscapeText for TitleBlock {
    fn escape_text(self) -> Self {
        // The address feeds the `mailto:` url; only the shown text gets full escaping.
        let email_display = escape_latex(self.email_display.as_deref().unwrap_or(&self.email));
        TitleBlock {
            first_name: escape_latex(&self.first_name),
            middle_initial: self.middle_initial.as_deref().map(escape_latex),
            last_name: escape_latex(&self.last_name),
            phone_number: escape_latex(&self.phone_number),
            email: escape_url(&self.email),
            email_display: Some(email_display),
            urls: self.urls.into_iter().map(EscapeText::escape_text).collect(),
        }
    }
}

impl EscapeText for DocumentElement {
    fn escape_text(self) -> Self {
        match self {
            DocumentElement::Title(t) => DocumentElement::Title(t.escape_text()),
            DocumentElement::Education(s) => DocumentElement::Education(s.escape_text()),
            DocumentElement::Experience(s) => DocumentElement::Experience(s.escape_text()),
            DocumentElement::Projects(s) => DocumentElement::Projects(s.escape_text()),
            DocumentElement::TechnicalSkills(s) => {
                DocumentElement::TechnicalSkills(s.escape_text())
            }
        }
    }
}

impl EscapeText for Document {
    fn escape_text(self) -> Self {
        self.into_elements()
            .into_iter()
            .map(EscapeText::escape_text)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Renderable;
    use chrono::NaiveDate;

    // ── escape_latex ────────────────────────────────────────────────────────

    #[test]
    fn test_escape_latex_specials() {
        assert_eq!(escape_latex("R&D"), "R\\&D");
        assert_eq!(escape_latex("40%"), "40\\%");
        assert_eq!(escape_latex("$5M"), "\\$5M");
        assert_eq!(escape_latex("C#"), "C\\#");
        assert_eq!(escape_latex("snake_case"), "snake\\_case");
        assert_eq!(escape_latex("{x}"), "\\{x\\}");
        assert_eq!(escape_latex("a~b"), "a\\textasciitilde{}b");
        assert_eq!(escape_latex("x^2"), "x\\textasciicircum{}2");
        assert_eq!(escape_latex("C:\\"), "C:\\textbackslash{}");
    }

    #[test]
    fn test_escape_latex_leaves_plain_text() {
        assert_eq!(escape_latex("Jane Doe, Ph.D."), "Jane Doe, Ph.D.");
        assert_eq!(escape_latex("Zürich"), "Zürich");
    }

    #[test]
    fn test_escape_url_only_touches_percent_and_hash() {
        assert_eq!(
            escape_url("https://x.com/a_b?q=1%20#top"),
            "https://x.com/a_b?q=1\\%20\\#top"
        );
    }

    // ── EscapeText ──────────────────────────────────────────────────────────

    #[test]
    fn test_link_escapes_url_and_text_differently() {
        let link = Link::new("https://x.com/my_page#a", "my_page").escape_text();
        assert_eq!(link.url, "https://x.com/my_page\\#a");
        assert_eq!(link.text, "my\\_page");
    }

    #[test]
    fn test_title_email_keeps_mailto_target_raw() {
        let rendered = TitleBlock::new("Jane", "Doe", "1", "jane_doe~x@x.com")
            .escape_text()
            .render();
        assert!(rendered.contains(
            "\\href{mailto:jane_doe~x@x.com}{\\underline{jane\\_doe\\textasciitilde{}x@x.com}}"
        ));
    }

    #[test]
    fn test_title_middle_initial_escaped() {
        let rendered = TitleBlock::new("Jane", "Doe", "1", "jane@x.com")
            .with_middle_initial('%')
            .escape_text()
            .render();
        assert!(rendered.contains("\\textbf{\\Huge \\scshape Jane \\%. Doe}"));
    }

    #[test]
    fn test_experience_bullets_escaped() {
        let item = ExperienceItem::new(
            "R&D Engineer",
            Temporal::moment(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap()),
            Some("AT&T".to_string()),
            Location::Remote,
        )
        .with_bullet("Grew revenue 30%")
        .escape_text();

        let rendered = item.render();
        assert!(rendered.contains("{R\\&D Engineer}"));
        assert!(rendered.contains("{AT\\&T}"));
        assert!(rendered.contains("\\resumeItem{Grew revenue 30\\%}"));
    }

    #[test]
    fn test_document_escape_keeps_element_order() {
        let doc: Document = vec![
            DocumentElement::from(TitleBlock::new("A&B", "C", "1", "a@b.c")),
            DocumentElement::from(
                Section::new().with_item(TechnicalSkillItem::new("Languages", ["C#", "F#"])),
            ),
        ]
        .into_iter()
        .collect();

        let escaped = doc.escape_text();
        let elements = escaped.elements();
        assert!(matches!(elements[0], DocumentElement::Title(_)));
        assert!(matches!(elements[1], DocumentElement::TechnicalSkills(_)));
        assert!(escaped.render().contains("{: C\\#, F\\#}"));
    }
}
