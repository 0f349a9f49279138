use crate::error::PayrepError;
use crate::layout::schema::ColumnLayout;

const KZ_BUDGET_JSON: &str = include_str!("../../../../layouts/kz-budget.json");

/// Available predefined layouts.
pub const PRESETS: &[&str] = &["kz-budget"];

/// Preset used when neither a preset nor a layout file is given.
pub const DEFAULT_PRESET: &str = "kz-budget";

/// Load a predefined layout by name.
pub fn load_preset(name: &str) -> Result<ColumnLayout, PayrepError> {
    match name {
        "kz-budget" => {
            let layout: ColumnLayout = serde_json::from_str(KZ_BUDGET_JSON)?;
            Ok(layout)
        }
        _ => Err(PayrepError::LayoutInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::validate_layout;

    #[test]
    fn test_load_kz_budget_preset() {
        let layout = load_preset("kz-budget").unwrap();
        assert_eq!(layout.row_tolerance, 2.5);
        assert_eq!(layout.account_max_len, 20);
        assert_eq!(layout.bank_code.x_min, Some(320.0));
        assert_eq!(layout.metadata.period, "Период:");
    }

    #[test]
    fn test_all_presets_validate() {
        for name in PRESETS {
            let layout = load_preset(name).unwrap();
            validate_layout(&layout).unwrap();
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
