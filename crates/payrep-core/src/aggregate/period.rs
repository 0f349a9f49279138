use chrono::NaiveDate;
use regex::Regex;

/// Parses the start date out of `DD.MM.YYYY - DD.MM.YYYY` period strings.
#[derive(Debug, Clone)]
pub struct PeriodParser {
    range: Regex,
}

impl Default for PeriodParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodParser {
    pub fn new() -> Self {
        PeriodParser {
            range: Regex::new(r"(\d{2}\.\d{2}\.\d{4})\s*-\s*(\d{2}\.\d{2}\.\d{4})")
                .expect("period range pattern is valid"),
        }
    }

    /// First day of the period, or `None` when the string holds no range or
    /// its start is not a calendar date.
    pub fn start(&self, period: &str) -> Option<NaiveDate> {
        let caps = self.range.captures(period)?;
        NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%d.%m.%Y").ok()
    }

    /// Ordering key: the start date, with malformed periods after every real date.
    pub fn sort_key(&self, period: &str) -> NaiveDate {
        self.start(period).unwrap_or(NaiveDate::MAX)
    }
}
