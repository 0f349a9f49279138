use crate::layout::CompiledLayout;
use crate::model::Token;

/// Field values read from a row's own visual line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreFields {
    pub payment_no: String,
    pub bank_base: String,
    pub account_prefix: String,
    pub budget_code: String,
    pub amount: String,
}

/// Assign core-band tokens (sorted by `x0`) to fields by band and shape.
///
/// Every token is tested against every banded field; a later match in the
/// row replaces an earlier one. The payment number has no band: the first
/// token of the right shape wins, which means an unnumbered row picks up the
/// next numeric token instead.
pub fn classify_core(core: &[&Token], layout: &CompiledLayout) -> CoreFields {
    let mut fields = CoreFields::default();

    for token in core {
        if layout.bank_code.matches(token) {
            fields.bank_base = token.text.clone();
        }
        if layout.account.matches(token) {
            fields.account_prefix = token.text.clone();
        }
        if layout.budget_code.matches(token) {
            fields.budget_code = token.text.clone();
        }
        if layout.amount.matches(token) {
            fields.amount = token.text.clone();
        }
    }

    if let Some(token) = core.iter().find(|t| layout.payment_no.matches(t)) {
        fields.payment_no = token.text.clone();
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builtin::load_preset;

    fn layout() -> CompiledLayout {
        CompiledLayout::compile(&load_preset("kz-budget").unwrap()).unwrap()
    }

    fn classify(tokens: &[Token]) -> CoreFields {
        let refs: Vec<&Token> = tokens.iter().collect();
        classify_core(&refs, &layout())
    }

    #[test]
    fn test_full_row() {
        let fields = classify(&[
            Token::new("226*", 40.0, 100.0),
            Token::new("960101300123", 100.0, 100.0),
            Token::new("HSBKKZK", 330.0, 100.0),
            Token::new("KZ12601", 395.0, 100.0),
            Token::new("105102", 442.0, 100.0),
            Token::new("1,234,567.89", 528.0, 100.0),
        ]);
        assert_eq!(
            fields,
            CoreFields {
                payment_no: "226*".into(),
                bank_base: "HSBKKZK".into(),
                account_prefix: "KZ12601".into(),
                budget_code: "105102".into(),
                amount: "1,234,567.89".into(),
            }
        );
    }

    #[test]
    fn test_shape_outside_band_is_ignored() {
        let fields = classify(&[
            Token::new("17", 40.0, 100.0),
            Token::new("105102", 300.0, 100.0),
            Token::new("HSBKKZK", 200.0, 100.0),
            Token::new("1,000.00", 480.0, 100.0),
        ]);
        assert_eq!(fields.budget_code, "");
        assert_eq!(fields.bank_base, "");
        assert_eq!(fields.amount, "");
    }

    #[test]
    fn test_amount_needs_two_decimals() {
        let fields = classify(&[Token::new("1,000.5", 528.0, 100.0)]);
        assert_eq!(fields.amount, "");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let fields = classify(&[Token::new("17", 40.0, 100.0)]);
        assert_eq!(fields.payment_no, "17");
        assert_eq!(fields.account_prefix, "");
    }

    #[test]
    fn test_payment_number_first_match_wins() {
        let fields = classify(&[
            Token::new("17", 40.0, 100.0),
            Token::new("18", 60.0, 100.0),
        ]);
        assert_eq!(fields.payment_no, "17");
    }

    #[test]
    fn test_payment_number_without_band_captures_identifier() {
        // No payment-number column on this row: the identifier is the first
        // token of the payment-number shape and gets picked up instead.
        let fields = classify(&[
            Token::new("960101300123", 100.0, 100.0),
            Token::new("105102", 442.0, 100.0),
        ]);
        assert_eq!(fields.payment_no, "960101300123");
    }
}
