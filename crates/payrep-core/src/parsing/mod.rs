pub mod columns;
pub mod continuation;
pub mod dedup;
pub mod metadata;
pub mod segment;

use crate::error::PayrepError;
use crate::extraction::PageContent;
use crate::layout::schema::ColumnLayout;
use crate::layout::CompiledLayout;
use crate::model::{Document, Record};
use columns::classify_core;
use continuation::merge_continuation;
use dedup::dedup_records;
use metadata::{normalize_text, MetadataExtractor};
use segment::segment_rows;

/// Turns the positioned tokens of one payment report into a [`Document`].
///
/// Holds the compiled layout and metadata patterns, so one parser can be
/// shared by any number of threads.
#[derive(Debug, Clone)]
pub struct DocumentParser {
    layout: CompiledLayout,
    metadata: MetadataExtractor,
}

impl DocumentParser {
    pub fn new(layout: &ColumnLayout) -> Result<Self, PayrepError> {
        Self::from_compiled(CompiledLayout::compile(layout)?)
    }

    pub fn from_compiled(layout: CompiledLayout) -> Result<Self, PayrepError> {
        let metadata = MetadataExtractor::new(&layout.metadata)?;
        Ok(DocumentParser { layout, metadata })
    }

    /// Parse all pages of one document.
    ///
    /// Never fails: unrecognized cells become empty strings and missing
    /// metadata becomes empty fields. Records repeated anywhere in the
    /// document are kept once.
    pub fn parse(&self, pages: &[PageContent]) -> Document {
        if pages.iter().all(|p| p.tokens.is_empty()) {
            tracing::debug!("no tokens supplied, returning empty document");
            return Document::default();
        }

        let records: Vec<Record> = pages.iter().flat_map(|p| self.parse_page(p)).collect();
        let total = records.len();
        let records = dedup_records(records);

        let full_text = pages
            .iter()
            .map(|p| p.text(self.layout.row_tolerance))
            .collect::<Vec<_>>()
            .join("\n");
        let meta = self.metadata.extract(&normalize_text(&full_text));

        tracing::debug!(
            pages = pages.len(),
            records = records.len(),
            duplicates = total - records.len(),
            period = %meta.period,
            "parsed document"
        );

        Document {
            region: meta.region,
            report_date: meta.report_date,
            period: meta.period,
            records,
        }
    }

    /// Parse the table rows on one page, in top-to-bottom order.
    pub fn parse_page(&self, page: &PageContent) -> Vec<Record> {
        segment_rows(&page.tokens, &self.layout)
            .into_iter()
            .map(|row| {
                let core = classify_core(&row.core, &self.layout);
                let merged = merge_continuation(
                    &core.bank_base,
                    &core.account_prefix,
                    &row.continuation,
                    &self.layout,
                );
                Record {
                    payment_no: core.payment_no,
                    id_number: row.anchor.text.clone(),
                    bank_code: merged.bank_code,
                    account_number: merged.account_number,
                    budget_code: core.budget_code,
                    amount: core.amount,
                }
            })
            .collect()
    }
}
