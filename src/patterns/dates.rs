//! Date-range patterns, tried in a fixed order.

use super::{NamedPattern, first_of};

const MONTH_FULL: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";
const MONTH_ABBR: &str = r"Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";
const DASH: &str = r"\s*[-–—]\s*";
const OPEN_END: &str = "Present|Current|Now";

/// A start/end pair; `end == None` means the range is ongoing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: Option<String>,
}

/// Ordered date-range patterns: full month, abbreviated month, bare year,
/// "X to Y", MM/YYYY, then a lone start date followed by Present/Current.
#[derive(Debug, Clone)]
pub struct DatePatterns {
    patterns: Vec<NamedPattern>,
}

impl DatePatterns {
    pub fn new() -> Self {
        let any_month = format!("(?:{MONTH_FULL}|{MONTH_ABBR})");
        let month_year = format!(r"{any_month}\.?\s+\d{{4}}");
        let optional_month_year = format!(r"(?:{any_month}\.?\s+)?\d{{4}}");

        let patterns = vec![
            NamedPattern::new(
                "full_month_range",
                &format!(
                    r"(?i)\b((?:{MONTH_FULL})\s+\d{{4}}){DASH}({month_year}|{OPEN_END})\b"
                ),
            ),
            NamedPattern::new(
                "abbreviated_month_range",
                &format!(
                    r"(?i)\b((?:{MONTH_ABBR})\.?\s+\d{{4}}){DASH}({month_year}|{OPEN_END})\b"
                ),
            ),
            NamedPattern::new(
                "year_range",
                &format!(r"(?i)\b(\d{{4}}){DASH}(\d{{4}}|{OPEN_END})\b"),
            ),
            NamedPattern::new(
                "to_range",
                &format!(
                    r"(?i)\b({optional_month_year})\s+to\s+({optional_month_year}|{OPEN_END})\b"
                ),
            ),
            NamedPattern::new(
                "numeric_range",
                &format!(r"(?i)\b(\d{{1,2}}/\d{{4}}){DASH}(\d{{1,2}}/\d{{4}}|{OPEN_END})\b"),
            ),
            NamedPattern::new(
                "open_ended",
                &format!(
                    r"(?i)\b({optional_month_year}|\d{{1,2}}/\d{{4}})\s*(?:[-–—,:]|to|since)?\s*\(?({OPEN_END})\b"
                ),
            ),
        ];

        Self { patterns }
    }

    /// First date range in `text`, using the first pattern in the list that matches
    pub fn extract(&self, text: &str) -> Option<DateRange> {
        let (pattern, caps) = first_of(&self.patterns, text)?;
        let start = caps.get(1)?.as_str().trim().to_string();
        let end = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|end| !is_open_end(end))
            .map(str::to_string);

        tracing::trace!(pattern = pattern.name, %start, ?end, "matched date range");
        Some(DateRange { start, end })
    }
}

impl Default for DatePatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn is_open_end(token: &str) -> bool {
    OPEN_END
        .split('|')
        .any(|marker| marker.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<DateRange> {
        DatePatterns::new().extract(text)
    }

    fn range(start: &str, end: Option<&str>) -> Option<DateRange> {
        Some(DateRange {
            start: start.to_string(),
            end: end.map(str::to_string),
        })
    }

    #[test]
    fn test_full_month_range() {
        assert_eq!(
            extract("Engineer, January 2019 - December 2021"),
            range("January 2019", Some("December 2021"))
        );
    }

    #[test]
    fn test_full_month_to_abbreviated_end() {
        assert_eq!(
            extract("March 2019 – Jan 2021"),
            range("March 2019", Some("Jan 2021"))
        );
    }

    #[test]
    fn test_abbreviated_month_present_is_ongoing() {
        assert_eq!(extract("Jan 2020 - Present"), range("Jan 2020", None));
        assert_eq!(extract("Sept. 2018 — current"), range("Sept. 2018", None));
    }

    #[test]
    fn test_year_range() {
        assert_eq!(extract("Acme (2015-2018)"), range("2015", Some("2018")));
        assert_eq!(extract("2021 - Now"), range("2021", None));
    }

    #[test]
    fn test_to_phrasing() {
        assert_eq!(
            extract("March 2019 to June 2021"),
            range("March 2019", Some("June 2021"))
        );
        assert_eq!(extract("2016 to present"), range("2016", None));
    }

    #[test]
    fn test_numeric_range() {
        assert_eq!(extract("03/2017 - 11/2019"), range("03/2017", Some("11/2019")));
    }

    #[test]
    fn test_open_ended_single_start() {
        assert_eq!(extract("Since 06/2022, Present"), range("06/2022", None));
        assert_eq!(extract("May 2023 (Current)"), range("May 2023", None));
    }

    #[test]
    fn test_month_range_beats_bare_year_range() {
        // Both the abbreviated-month and the year-range patterns could match;
        // the earlier pattern in the list decides.
        assert_eq!(
            extract("2010 - 2012 then Feb 2013 - Mar 2015"),
            range("Feb 2013", Some("Mar 2015"))
        );
    }

    #[test]
    fn test_no_dates() {
        assert_eq!(extract("Built the thing."), None);
        assert_eq!(extract("Managed 12 people"), None);
    }

    #[test]
    fn test_is_open_end() {
        assert!(is_open_end("PRESENT"));
        assert!(is_open_end("current"));
        assert!(!is_open_end("2021"));
    }
}
