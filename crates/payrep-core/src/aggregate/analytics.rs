use crate::aggregate::available_in_period_order;
use crate::aggregate::period::PeriodParser;
use crate::model::{AnalyticsDocument, AnalyticsRecord, AnalyticsReport, SourcedDocument};
use crate::storage::FileStore;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Build the numeric view used for charts and filters.
///
/// Documents are filtered and ordered exactly as in [`super::aggregate`].
/// Every record carries its amount as a decimal, and the report lists the
/// distinct non-empty regions, periods and budget codes seen.
pub fn aggregate_for_analytics<S>(documents: &[SourcedDocument], store: &S) -> AnalyticsReport
where
    S: FileStore + ?Sized,
{
    let periods = PeriodParser::new();
    let ordered = available_in_period_order(documents, store, &periods);

    let mut report = AnalyticsReport {
        total_documents: ordered.len(),
        ..Default::default()
    };

    for (document, period_start) in ordered {
        if !document.region.is_empty() {
            report.available_regions.insert(document.region.clone());
        }
        if !document.period.is_empty() {
            report.available_periods.insert(document.period.clone());
        }

        let records = document
            .records
            .iter()
            .map(|record| {
                if !record.budget_code.is_empty() {
                    report
                        .available_budget_codes
                        .insert(record.budget_code.clone());
                }
                AnalyticsRecord {
                    record: record.clone(),
                    amount_numeric: parse_amount(&record.amount),
                }
            })
            .collect();

        report.documents.push(AnalyticsDocument {
            period: document.period.clone(),
            period_start,
            region: document.region.clone(),
            report_date: document.report_date.clone(),
            records,
        });
    }

    report
}

/// Parse an amount like `1,234,567.89`. Anything unparsable counts as zero.
pub fn parse_amount(amount: &str) -> Decimal {
    Decimal::from_str(amount.replace(',', "").trim()).unwrap_or(Decimal::ZERO)
}
