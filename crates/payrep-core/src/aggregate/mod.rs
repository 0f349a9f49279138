pub mod analytics;
pub mod period;

use crate::model::{AggregatedReport, Document, Record, ReportLine, SourcedDocument};
use crate::storage::FileStore;
use chrono::NaiveDate;
use period::PeriodParser;
use std::collections::HashSet;

pub use analytics::aggregate_for_analytics;

/// Identity of a data line across a merged report: the record's six fields
/// qualified by the metadata of the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub period: String,
    pub region: String,
    pub report_date: String,
    pub payment_no: String,
    pub id_number: String,
    pub bank_code: String,
    pub account_number: String,
    pub budget_code: String,
    pub amount: String,
}

impl DedupKey {
    pub fn new(document: &Document, record: &Record) -> Self {
        DedupKey {
            period: document.period.clone(),
            region: document.region.clone(),
            report_date: document.report_date.clone(),
            payment_no: record.payment_no.clone(),
            id_number: record.id_number.clone(),
            bank_code: record.bank_code.clone(),
            account_number: record.account_number.clone(),
            budget_code: record.budget_code.clone(),
            amount: record.amount.clone(),
        }
    }
}

/// Keys emitted so far in one aggregation pass. Created per call, never shared.
#[derive(Debug, Default)]
struct SeenKeys {
    keys: HashSet<DedupKey>,
}

impl SeenKeys {
    /// Record a key, returning `false` if it was already emitted.
    fn insert(&mut self, key: DedupKey) -> bool {
        self.keys.insert(key)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Merge parsed documents into one chronological report.
///
/// Documents whose backing file is gone are skipped. The rest are ordered by
/// period start (malformed periods last, ties in input order); each
/// contributes a period header followed by its records, minus any record
/// already emitted earlier in the report.
pub fn aggregate<S>(documents: &[SourcedDocument], store: &S) -> AggregatedReport
where
    S: FileStore + ?Sized,
{
    let periods = PeriodParser::new();
    let ordered = available_in_period_order(documents, store, &periods);

    let mut seen = SeenKeys::default();
    let mut lines = Vec::new();
    for (document, _) in &ordered {
        emit_document(document, &mut seen, &mut lines);
    }

    tracing::debug!(
        documents = ordered.len(),
        lines = lines.len(),
        unique_records = seen.len(),
        "aggregated report"
    );

    AggregatedReport {
        lines,
        document_count: ordered.len(),
    }
}

/// Append one document's header and its not-yet-seen records.
fn emit_document(document: &Document, seen: &mut SeenKeys, lines: &mut Vec<ReportLine>) {
    lines.push(ReportLine::Period {
        period: document.period.clone(),
    });

    for record in &document.records {
        if seen.insert(DedupKey::new(document, record)) {
            lines.push(ReportLine::Data(record.clone()));
        }
    }
}

/// Available documents with their period start, stably sorted by it.
pub(crate) fn available_in_period_order<'a, S>(
    documents: &'a [SourcedDocument],
    store: &S,
    periods: &PeriodParser,
) -> Vec<(&'a Document, Option<NaiveDate>)>
where
    S: FileStore + ?Sized,
{
    let mut ordered: Vec<(&Document, Option<NaiveDate>)> = documents
        .iter()
        .filter(|d| {
            let available = store.exists(&d.path);
            if !available {
                tracing::debug!(path = %d.path.display(), "skipping document, file no longer available");
            }
            available
        })
        .map(|d| (&d.document, periods.start(&d.document.period)))
        .collect();

    ordered.sort_by_key(|(_, start)| start.unwrap_or(NaiveDate::MAX));
    ordered
}
