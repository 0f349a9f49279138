use crate::layout::CompiledLayout;
use crate::model::Token;

/// Bank code and account number after wrapped fragments were stitched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedFields {
    pub bank_code: String,
    pub account_number: String,
}

/// Stitch wrapped fragments from a row's continuation region onto the bank
/// code and account number read from the row's own line.
///
/// The first single-letter fragment in the bank band completes a base of
/// exactly `bank_code_base_len` characters. Every fragment in the account
/// band is appended to the account prefix in reading order, and the result is
/// cut to `account_max_len` characters.
pub fn merge_continuation(
    bank_base: &str,
    account_prefix: &str,
    continuation: &[&Token],
    layout: &CompiledLayout,
) -> MergedFields {
    let suffix = continuation
        .iter()
        .find(|t| layout.bank_suffix.matches(t))
        .map(|t| t.text.as_str());

    let bank_code = match suffix {
        Some(suffix) if bank_base.chars().count() == layout.bank_code_base_len => {
            format!("{bank_base}{suffix}")
        }
        _ => bank_base.to_string(),
    };

    let mut account_number = account_prefix.to_string();
    for token in continuation {
        if layout.account_continuation.matches(token) {
            account_number.push_str(&token.text);
        }
    }

    if account_number.chars().count() > layout.account_max_len {
        tracing::debug!(
            account = %account_number,
            max_len = layout.account_max_len,
            "truncating overlong account number"
        );
        account_number = account_number.chars().take(layout.account_max_len).collect();
    }

    MergedFields {
        bank_code,
        account_number,
    }
}
