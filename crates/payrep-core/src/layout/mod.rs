pub mod builtin;
pub mod schema;

use crate::error::PayrepError;
use crate::model::Token;
use regex::Regex;
use schema::{ColumnLayout, FieldRule, MetadataLabels};
use std::path::Path;

/// Load a column layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<ColumnLayout, PayrepError> {
    let content = std::fs::read_to_string(path).map_err(|e| PayrepError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_layout(&content, path)
}

/// Parse a column layout from a JSON string.
pub fn parse_layout(json: &str, source: &Path) -> Result<ColumnLayout, PayrepError> {
    let layout: ColumnLayout = serde_json::from_str(json).map_err(|e| PayrepError::LayoutLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Parse a column layout from a JSON string (no file path context).
pub fn parse_layout_str(json: &str) -> Result<ColumnLayout, PayrepError> {
    let layout: ColumnLayout = serde_json::from_str(json).map_err(PayrepError::Json)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout is well-formed and all of its patterns compile.
pub fn validate_layout(layout: &ColumnLayout) -> Result<(), PayrepError> {
    CompiledLayout::compile(layout).map(|_| ())
}

/// Band and shape test for one field, ready to run against tokens.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    x_min: Option<f32>,
    x_max: Option<f32>,
    shape: Regex,
}

impl FieldMatcher {
    fn compile(field: &'static str, rule: &FieldRule) -> Result<Self, PayrepError> {
        if rule.pattern.trim().is_empty() {
            return Err(PayrepError::LayoutInvalid(format!(
                "field '{}' has an empty pattern",
                field
            )));
        }
        if let (Some(min), Some(max)) = (rule.x_min, rule.x_max) {
            if min > max {
                return Err(PayrepError::LayoutInvalid(format!(
                    "field '{}' has x_min {} greater than x_max {}",
                    field, min, max
                )));
            }
        }
        let shape = Regex::new(&format!("^(?:{})$", rule.pattern))
            .map_err(|source| PayrepError::InvalidPattern { field, source })?;
        Ok(FieldMatcher {
            x_min: rule.x_min,
            x_max: rule.x_max,
            shape,
        })
    }

    /// Whether a horizontal position falls inside this field's band (bounds inclusive).
    pub fn in_band(&self, x0: f32) -> bool {
        self.x_min.map_or(true, |min| x0 >= min) && self.x_max.map_or(true, |max| x0 <= max)
    }

    /// Whether the whole text has this field's shape, regardless of position.
    pub fn has_shape(&self, text: &str) -> bool {
        self.shape.is_match(text)
    }

    pub fn matches(&self, token: &Token) -> bool {
        self.in_band(token.x0) && self.has_shape(&token.text)
    }
}

/// A validated layout with every pattern compiled once.
#[derive(Debug, Clone)]
pub struct CompiledLayout {
    pub name: String,
    pub row_tolerance: f32,
    pub anchor: FieldMatcher,
    pub payment_no: FieldMatcher,
    pub bank_code: FieldMatcher,
    pub bank_suffix: FieldMatcher,
    pub account: FieldMatcher,
    pub account_continuation: FieldMatcher,
    pub budget_code: FieldMatcher,
    pub amount: FieldMatcher,
    pub bank_code_base_len: usize,
    pub account_max_len: usize,
    pub metadata: MetadataLabels,
}

impl CompiledLayout {
    pub fn compile(layout: &ColumnLayout) -> Result<Self, PayrepError> {
        if layout.name.trim().is_empty() {
            return Err(PayrepError::LayoutInvalid("name must not be empty".into()));
        }

        if !layout.row_tolerance.is_finite() || layout.row_tolerance <= 0.0 {
            return Err(PayrepError::LayoutInvalid(format!(
                "row_tolerance must be a positive number, got {}",
                layout.row_tolerance
            )));
        }

        if layout.bank_code_base_len == 0 {
            return Err(PayrepError::LayoutInvalid(
                "bank_code_base_len must be greater than zero".into(),
            ));
        }

        if layout.account_max_len == 0 {
            return Err(PayrepError::LayoutInvalid(
                "account_max_len must be greater than zero".into(),
            ));
        }

        let labels = &layout.metadata;
        for (what, label) in [
            ("region", &labels.region),
            ("report_date", &labels.report_date),
            ("period", &labels.period),
        ] {
            if label.trim().is_empty() {
                return Err(PayrepError::LayoutInvalid(format!(
                    "metadata label '{}' must not be empty",
                    what
                )));
            }
        }

        Ok(CompiledLayout {
            name: layout.name.clone(),
            row_tolerance: layout.row_tolerance,
            anchor: FieldMatcher::compile("anchor", &layout.anchor)?,
            payment_no: FieldMatcher::compile("payment_no", &layout.payment_no)?,
            bank_code: FieldMatcher::compile("bank_code", &layout.bank_code)?,
            bank_suffix: FieldMatcher::compile("bank_suffix", &layout.bank_suffix)?,
            account: FieldMatcher::compile("account", &layout.account)?,
            account_continuation: FieldMatcher::compile(
                "account_continuation",
                &layout.account_continuation,
            )?,
            budget_code: FieldMatcher::compile("budget_code", &layout.budget_code)?,
            amount: FieldMatcher::compile("amount", &layout.amount)?,
            bank_code_base_len: layout.bank_code_base_len,
            account_max_len: layout.account_max_len,
            metadata: layout.metadata.clone(),
        })
    }
}
