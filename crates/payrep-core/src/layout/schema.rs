use serde::{Deserialize, Serialize};

/// Column layout of one payment-report template.
///
/// Coordinates are in PDF points, measured from the left edge (`x_min`,
/// `x_max`) and from the top of the page (row tolerance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Half-height of a row's core band around its anchor token.
    pub row_tolerance: f32,
    /// Shape of the identifier token that anchors every row.
    pub anchor: FieldRule,
    pub payment_no: FieldRule,
    pub bank_code: FieldRule,
    /// Single-letter tail of a bank code wrapped onto the next visual line.
    pub bank_suffix: FieldRule,
    pub account: FieldRule,
    /// Fragments of an account number wrapped onto following lines.
    pub account_continuation: FieldRule,
    pub budget_code: FieldRule,
    pub amount: FieldRule,
    /// A bank suffix is only appended to a base of exactly this length.
    pub bank_code_base_len: usize,
    /// Merged account numbers are cut to this many characters.
    pub account_max_len: usize,
    pub metadata: MetadataLabels,
}

/// Horizontal band plus textual shape for one field.
///
/// A missing bound leaves that side of the band open. `pattern` must match
/// the whole token text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    #[serde(default)]
    pub x_min: Option<f32>,
    #[serde(default)]
    pub x_max: Option<f32>,
    pub pattern: String,
}

/// Labels preceding the document-level metadata values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataLabels {
    pub region: String,
    pub report_date: String,
    pub period: String,
}
