use payrep_core::error::PayrepError;
use payrep_core::layout::builtin;
use payrep_core::layout::schema::{ColumnLayout, FieldRule};
use std::path::Path;

pub fn list() -> Result<(), PayrepError> {
    println!("Available predefined layouts:\n");
    for name in builtin::PRESETS {
        let layout = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<10} {} (v{}){}",
            name, layout.name, layout.version, default_marker
        );
        if let Some(ref desc) = layout.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), PayrepError> {
    let layout = builtin::load_preset(preset)?;
    print_summary(&layout);
    println!();
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), PayrepError> {
    let layout = payrep_core::layout::load_layout(file)?;
    println!("Layout '{}' (v{}) is valid.\n", layout.name, layout.version);
    print_summary(&layout);
    Ok(())
}

fn print_summary(layout: &ColumnLayout) {
    println!("{} (version {})\n", layout.name, layout.version);
    println!("  Row tolerance: {}", layout.row_tolerance);
    println!("  Bank code base length: {}", layout.bank_code_base_len);
    println!("  Account max length: {}\n", layout.account_max_len);

    println!("  {:<22}  {:<14}  Pattern", "Field", "Band (x)");
    let fields: [(&str, &FieldRule); 8] = [
        ("anchor", &layout.anchor),
        ("payment_no", &layout.payment_no),
        ("bank_code", &layout.bank_code),
        ("bank_suffix", &layout.bank_suffix),
        ("account", &layout.account),
        ("account_continuation", &layout.account_continuation),
        ("budget_code", &layout.budget_code),
        ("amount", &layout.amount),
    ];
    for (name, rule) in fields {
        println!("  {:<22}  {:<14}  {}", name, band(rule), rule.pattern);
    }

    println!();
    println!("  Metadata labels:");
    println!("    region:      {}", layout.metadata.region);
    println!("    report date: {}", layout.metadata.report_date);
    println!("    period:      {}", layout.metadata.period);
}

fn band(rule: &FieldRule) -> String {
    match (rule.x_min, rule.x_max) {
        (None, None) => "any".to_string(),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (Some(min), Some(max)) => format!("{min}..{max}"),
    }
}
