use crate::error::PayrepError;
use crate::layout::schema::MetadataLabels;
use regex::Regex;

/// Document-level fields found in the report header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub region: String,
    pub report_date: String,
    pub period: String,
}

/// Finds region, report timestamp and period after their labels.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    region: Regex,
    report_date: Regex,
    period: Regex,
}

impl MetadataExtractor {
    pub fn new(labels: &MetadataLabels) -> Result<Self, PayrepError> {
        let compile = |field: &'static str, pattern: String| {
            Regex::new(&pattern).map_err(|source| PayrepError::InvalidPattern { field, source })
        };

        Ok(MetadataExtractor {
            region: compile(
                "metadata.region",
                format!(r"{}\s*(.+)", regex::escape(&labels.region)),
            )?,
            report_date: compile(
                "metadata.report_date",
                format!(
                    r"{}\s*(\d{{2}}\.\d{{2}}\.\d{{4}}\s+\d{{2}}:\d{{2}}:\d{{2}})",
                    regex::escape(&labels.report_date)
                ),
            )?,
            period: compile(
                "metadata.period",
                format!(
                    r"{}\s*(\d{{2}}\.\d{{2}}\.\d{{4}}\s*-\s*\d{{2}}\.\d{{2}}\.\d{{4}})",
                    regex::escape(&labels.period)
                ),
            )?,
        })
    }

    /// Extract metadata from normalized document text. Missing fields are
    /// returned as empty strings.
    pub fn extract(&self, text: &str) -> Metadata {
        let find = |re: &Regex| {
            re.captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };

        Metadata {
            region: find(&self.region),
            report_date: find(&self.report_date),
            period: find(&self.period),
        }
    }
}

/// Replace non-breaking spaces, collapse runs of spaces and tabs, and trim.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;

    for c in text.chars() {
        let c = if c == '\u{00A0}' { ' ' } else { c };
        if c == ' ' || c == '\t' {
            if !in_gap {
                out.push(' ');
            }
            in_gap = true;
        } else {
            out.push(c);
            in_gap = false;
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> MetadataExtractor {
        MetadataExtractor::new(&MetadataLabels {
            region: "Регион:".into(),
            report_date: "Отчет произведен:".into(),
            period: "Период:".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_extract_all_fields() {
        let text = normalize_text(
            "Отчет о поступлениях\n\
             Регион: г. Алматы\n\
             Отчет произведен: 05.02.2023 10:15:42\n\
             Период: 01.01.2023 - 31.01.2023\n",
        );
        let meta = extractor().extract(&text);
        assert_eq!(meta.region, "г. Алматы");
        assert_eq!(meta.report_date, "05.02.2023 10:15:42");
        assert_eq!(meta.period, "01.01.2023 - 31.01.2023");
    }

    #[test]
    fn test_missing_labels_yield_empty_strings() {
        let meta = extractor().extract("nothing to see here");
        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn test_malformed_timestamp_not_captured() {
        let meta = extractor().extract("Отчет произведен: 05.02.2023");
        assert_eq!(meta.report_date, "");
    }

    #[test]
    fn test_period_without_spaces_kept_verbatim() {
        let meta = extractor().extract("Период:01.01.2023-31.01.2023");
        assert_eq!(meta.period, "01.01.2023-31.01.2023");
    }

    #[test]
    fn test_non_breaking_spaces_normalized() {
        let text = normalize_text("Регион:\u{00A0}\u{00A0}Астана\t\tобласть ");
        assert_eq!(text, "Регион: Астана область");
        assert_eq!(extractor().extract(&text).region, "Астана область");
    }

    #[test]
    fn test_normalize_keeps_newlines() {
        assert_eq!(normalize_text("  a  \n\t b "), "a \n b");
    }
}
