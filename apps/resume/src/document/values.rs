//! Value types shared by résumé entries: where, when, and links.
//!
//! Each type exposes a pure `render()` that returns a LaTeX fragment. None of
//! them can fail; whatever text was supplied at construction is emitted as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `strftime` pattern for every date on the page: abbreviated month + 4-digit year.
pub const DATE_FORMAT: &str = "%b %Y";

/// Separator placed between the two ends of a date range.
pub const RANGE_SEPARATOR: &str = " -- ";

/// Formats a date as `"Mon YYYY"` (e.g. `May 2020`).
///
/// chrono's `%b` uses English month abbreviations regardless of the process
/// locale, so output is stable across machines.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

/// Where a role or school was based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Location {
    InPerson { city: String, state: String },
    Hybrid { city: String, state: String },
    Remote,
}

impl Location {
    pub fn in_person(city: impl Into<String>, state: impl Into<String>) -> Self {
        Location::InPerson {
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn hybrid(city: impl Into<String>, state: impl Into<String>) -> Self {
        Location::Hybrid {
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Location::InPerson { city, state } => format!("{city}, {state}"),
            Location::Hybrid { city, state } => format!("{city}, {state} (Hybrid)"),
            Location::Remote => "Remote".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Temporal
// ────────────────────────────────────────────────────────────────────────────

/// A single date or a span of dates.
///
/// Callers are expected to keep `start <= end` for ranges; it is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Temporal {
    Range { start: NaiveDate, end: NaiveDate },
    Moment { date: NaiveDate },
    /// A range that has not ended yet; renders its end as `Present`.
    Ongoing { start: NaiveDate },
}

impl Temporal {
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Temporal::Range { start, end }
    }

    pub fn moment(date: NaiveDate) -> Self {
        Temporal::Moment { date }
    }

    pub fn ongoing(start: NaiveDate) -> Self {
        Temporal::Ongoing { start }
    }

    pub fn render(&self) -> String {
        match self {
            Temporal::Range { start, end } => format!(
                "{}{RANGE_SEPARATOR}{}",
                format_date(*start),
                format_date(*end)
            ),
            Temporal::Moment { date } => format_date(*date),
            Temporal::Ongoing { start } => {
                format!("{}{RANGE_SEPARATOR}Present", format_date(*start))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Link
// ────────────────────────────────────────────────────────────────────────────

/// A hyperlink shown in the title block. `text` may simply repeat the url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

impl Link {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Link {
            url: url.into(),
            text: text.into(),
        }
    }

    /// A link whose display text is its own url.
    pub fn bare(url: impl Into<String>) -> Self {
        let url = url.into();
        Link {
            text: url.clone(),
            url,
        }
    }

    pub fn render(&self) -> String {
        format!("\\href{{{}}}{{\\underline{{{}}}}}", self.url, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── format_date ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_date_abbreviated_month_and_year() {
        assert_eq!(format_date(date(2020, 5, 1)), "May 2020");
        assert_eq!(format_date(date(2019, 9, 30)), "Sep 2019");
        assert_eq!(format_date(date(2024, 12, 31)), "Dec 2024");
    }

    #[test]
    fn test_format_date_pads_year_to_four_digits() {
        assert_eq!(format_date(date(999, 1, 1)), "Jan 0999");
    }

    // ── Location ────────────────────────────────────────────────────────────

    #[test]
    fn test_location_variants_render() {
        assert_eq!(Location::in_person("Austin", "TX").render(), "Austin, TX");
        assert_eq!(
            Location::hybrid("Seattle", "WA").render(),
            "Seattle, WA (Hybrid)"
        );
        assert_eq!(Location::Remote.render(), "Remote");
    }

    #[test]
    fn test_location_deserializes_tagged() {
        let loc: Location =
            serde_json::from_str(r#"{"type":"hybrid","city":"Boston","state":"MA"}"#).unwrap();
        assert_eq!(loc, Location::hybrid("Boston", "MA"));

        let remote: Location = serde_json::from_str(r#"{"type":"remote"}"#).unwrap();
        assert_eq!(remote, Location::Remote);
    }

    // ── Temporal ────────────────────────────────────────────────────────────

    #[test]
    fn test_temporal_range_uses_double_dash() {
        let t = Temporal::range(date(2018, 8, 15), date(2021, 5, 20));
        assert_eq!(t.render(), "Aug 2018 -- May 2021");
    }

    #[test]
    fn test_temporal_moment_has_no_separator() {
        let rendered = Temporal::moment(date(2020, 5, 1)).render();
        assert_eq!(rendered, "May 2020");
        assert!(!rendered.contains("--"));
    }

    #[test]
    fn test_temporal_ongoing_ends_in_present() {
        let t = Temporal::ongoing(date(2022, 1, 10));
        assert_eq!(t.render(), "Jan 2022 -- Present");
    }

    #[test]
    fn test_temporal_reversed_range_rendered_as_given() {
        let t = Temporal::range(date(2021, 1, 1), date(2019, 1, 1));
        assert_eq!(t.render(), "Jan 2021 -- Jan 2019");
    }

    // ── Link ────────────────────────────────────────────────────────────────

    #[test]
    fn test_link_contains_url_then_text() {
        let rendered = Link::new("https://x.com", "X").render();
        assert_eq!(rendered, "\\href{https://x.com}{\\underline{X}}");
        let url_at = rendered.find("https://x.com").unwrap();
        let text_at = rendered.find("{X}").unwrap();
        assert!(url_at < text_at);
    }

    #[test]
    fn test_bare_link_repeats_url() {
        let link = Link::bare("github.com/jdoe");
        assert_eq!(link.text, link.url);
    }
}
