use serde::{Deserialize, Serialize};

use crate::document::{
    Document, DocumentElement, EducationItem, ExperienceItem, Link, Location, ProjectItem,
    Section, SectionItem, TechnicalSkillItem, Temporal, TitleBlock,
};

/// One problem found in a résumé description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, e.g. `elements[1].items[0].location`.
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Issues joined into a single line for error messages.
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.path, i.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Checks a document for input that would render oddly.
///
/// FAIL conditions:
/// - A required string is blank (name, school, position, project title, skill label)
/// - A middle initial is not a single letter
/// - A link has an empty url
/// - An in-person or hybrid location is missing its city or state
/// - A date range ends before it starts
///
/// The document is never modified; rendering it anyway is always possible.
pub fn validate_document(document: &Document) -> ValidationReport {
    let mut issues = Vec::new();

    for (i, element) in document.elements().iter().enumerate() {
        let path = format!("elements[{i}]");
        match element {
            DocumentElement::Title(title) => check_title(title, &path, &mut issues),
            DocumentElement::Education(section) => {
                check_section(section, &path, &mut issues, check_education)
            }
            DocumentElement::Experience(section) => {
                check_section(section, &path, &mut issues, check_experience)
            }
            DocumentElement::Projects(section) => {
                check_section(section, &path, &mut issues, check_project)
            }
            DocumentElement::TechnicalSkills(section) => {
                check_section(section, &path, &mut issues, check_skill)
            }
        }
    }

    ValidationReport {
        passed: issues.is_empty(),
        issues,
    }
}

fn check_section<T: SectionItem>(
    section: &Section<T>,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
    check_item: fn(&T, &str, &mut Vec<ValidationIssue>),
) {
    for (i, item) in section.items().iter().enumerate() {
        check_item(item, &format!("{path}.items[{i}]"), issues);
    }
}

fn require(value: &str, path: String, field: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue {
            path,
            reason: format!("{field} must not be empty"),
        });
    }
}

fn check_title(title: &TitleBlock, path: &str, issues: &mut Vec<ValidationIssue>) {
    require(&title.first_name, format!("{path}.first_name"), "first name", issues);
    require(&title.last_name, format!("{path}.last_name"), "last name", issues);
    if let Some(initial) = &title.middle_initial {
        let mut chars = initial.chars();
        let single_letter =
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        if !single_letter {
            issues.push(ValidationIssue {
                path: format!("{path}.middle_initial"),
                reason: format!("middle initial must be a single letter (got {initial:?})"),
            });
        }
    }
    for (i, link) in title.urls.iter().enumerate() {
        check_link(link, &format!("{path}.urls[{i}]"), issues);
    }
}

fn check_link(link: &Link, path: &str, issues: &mut Vec<ValidationIssue>) {
    require(&link.url, format!("{path}.url"), "link url", issues);
}

fn check_location(location: &Location, path: String, issues: &mut Vec<ValidationIssue>) {
    let (city, state) = match location {
        Location::InPerson { city, state } | Location::Hybrid { city, state } => (city, state),
        Location::Remote => return,
    };
    if city.trim().is_empty() || state.trim().is_empty() {
        issues.push(ValidationIssue {
            path,
            reason: format!(
                "city and state are required together (got city={city:?}, state={state:?})"
            ),
        });
    }
}

fn check_dates(dates: &Temporal, path: String, issues: &mut Vec<ValidationIssue>) {
    if let Temporal::Range { start, end } = dates {
        if start > end {
            issues.push(ValidationIssue {
                path,
                reason: format!("range starts ({start}) after it ends ({end})"),
            });
        }
    }
}

fn check_education(item: &EducationItem, path: &str, issues: &mut Vec<ValidationIssue>) {
    require(&item.school, format!("{path}.school"), "school", issues);
    check_location(&item.location, format!("{path}.location"), issues);
    check_dates(&item.dates, format!("{path}.dates"), issues);
}

fn check_experience(item: &ExperienceItem, path: &str, issues: &mut Vec<ValidationIssue>) {
    require(&item.position, format!("{path}.position"), "position", issues);
    check_location(&item.location, format!("{path}.location"), issues);
    check_dates(&item.dates, format!("{path}.dates"), issues);
}

fn check_project(item: &ProjectItem, path: &str, issues: &mut Vec<ValidationIssue>) {
    require(&item.title, format!("{path}.title"), "project title", issues);
    check_dates(&item.dates, format!("{path}.dates"), issues);
}

fn check_skill(item: &TechnicalSkillItem, path: &str, issues: &mut Vec<ValidationIssue>) {
    require(&item.label, format!("{path}.label"), "skill label", issues);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_valid() -> Document {
        Document::new()
            .with(
                TitleBlock::new("Jane", "Doe", "555-1234", "jane@x.com")
                    .with_link(Link::bare("https://github.com/jdoe")),
            )
            .with(Section::new().with_item(EducationItem::new(
                "MIT",
                Location::in_person("Cambridge", "MA"),
                None,
                Temporal::range(date(2016, 9, 1), date(2020, 5, 1)),
            )))
    }

    #[test]
    fn test_valid_document_passes() {
        let report = validate_document(&make_valid());
        assert!(report.passed, "unexpected issues: {}", report.summary());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_link_url_flagged() {
        let doc = Document::new()
            .with(TitleBlock::new("Jane", "Doe", "", "").with_link(Link::new("", "nothing")));
        let report = validate_document(&doc);
        assert!(!report.passed);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].path, "elements[0].urls[0].url");
    }

    #[test]
    fn test_half_empty_location_flagged() {
        let doc = Document::new().with(Section::new().with_item(ExperienceItem::new(
            "Engineer",
            Temporal::moment(date(2021, 1, 1)),
            None,
            Location::hybrid("Austin", " "),
        )));
        let report = validate_document(&doc);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].path, "elements[0].items[0].location");
    }

    #[test]
    fn test_remote_location_needs_nothing() {
        let doc = Document::new().with(Section::new().with_item(ExperienceItem::new(
            "Engineer",
            Temporal::moment(date(2021, 1, 1)),
            None,
            Location::Remote,
        )));
        assert!(validate_document(&doc).passed);
    }

    #[test]
    fn test_reversed_range_flagged() {
        let doc = Document::new().with(Section::new().with_item(ProjectItem::new(
            "Backwards",
            Temporal::range(date(2022, 1, 1), date(2021, 1, 1)),
        )));
        let report = validate_document(&doc);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].reason.contains("after it ends"));
    }

    #[test]
    fn test_blank_skill_label_flagged_and_document_untouched() {
        let doc = Document::new()
            .with(Section::new().with_item(TechnicalSkillItem::new("  ", ["Rust"])));
        let before = doc.clone();
        let report = validate_document(&doc);
        assert_eq!(report.issues[0].path, "elements[0].items[0].label");
        assert_eq!(doc, before);
    }

    #[test]
    fn test_middle_initial_must_be_single_letter() {
        let ok = Document::new()
            .with(TitleBlock::new("Jane", "Doe", "1", "a@b.c").with_middle_initial('Q'));
        assert!(validate_document(&ok).passed);

        for bad in ['%', '7'] {
            let doc = Document::new()
                .with(TitleBlock::new("Jane", "Doe", "1", "a@b.c").with_middle_initial(bad));
            let report = validate_document(&doc);
            assert_eq!(report.issues.len(), 1, "{bad}");
            assert_eq!(report.issues[0].path, "elements[0].middle_initial");
        }

        let mut long = TitleBlock::new("Jane", "Doe", "1", "a@b.c");
        long.middle_initial = Some("QR".to_string());
        assert!(!validate_document(&Document::new().with(long)).passed);
    }

    #[test]
    fn test_summary_joins_issues() {
        let doc = Document::new().with(TitleBlock::new("", "", "", ""));
        let report = validate_document(&doc);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(
            report.summary(),
            "elements[0].first_name: first name must not be empty; \
             elements[0].last_name: last name must not be empty"
        );
    }
}
