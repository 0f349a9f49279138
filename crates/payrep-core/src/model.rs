use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A single word on a rendered page, positioned by its left edge and top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub x0: f32,
    pub top: f32,
}

impl Token {
    pub fn new(text: impl Into<String>, x0: f32, top: f32) -> Self {
        Token {
            text: text.into(),
            x0,
            top,
        }
    }
}

/// One transaction row. Fields keep their original formatting; anything the
/// classifier could not find stays an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub payment_no: String,
    pub id_number: String,
    pub bank_code: String,
    pub account_number: String,
    pub budget_code: String,
    pub amount: String,
}

/// Structured result of parsing one payment report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub region: String,
    /// Report production timestamp, `DD.MM.YYYY HH:MM:SS`.
    pub report_date: String,
    /// Reporting period, `DD.MM.YYYY - DD.MM.YYYY`.
    pub period: String,
    pub records: Vec<Record>,
}

/// A parsed document together with the file it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedDocument {
    pub path: PathBuf,
    pub document: Document,
}

/// A line of the merged report: either a period header or a data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportLine {
    Period { period: String },
    Data(Record),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedReport {
    pub lines: Vec<ReportLine>,
    pub document_count: usize,
}

impl AggregatedReport {
    pub fn data_records(&self) -> impl Iterator<Item = &Record> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Data(record) => Some(record),
            ReportLine::Period { .. } => None,
        })
    }
}

/// A record with its amount interpreted as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    #[serde(flatten)]
    pub record: Record,
    pub amount_numeric: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDocument {
    pub period: String,
    /// First day of the period, `None` when the period string is malformed.
    pub period_start: Option<NaiveDate>,
    pub region: String,
    pub report_date: String,
    pub records: Vec<AnalyticsRecord>,
}

/// Numeric view of the merged documents, used for charts and filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub documents: Vec<AnalyticsDocument>,
    pub total_documents: usize,
    pub available_regions: BTreeSet<String>,
    pub available_periods: BTreeSet<String>,
    pub available_budget_codes: BTreeSet<String>,
}
