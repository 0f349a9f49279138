use payrep_core::error::PayrepError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), PayrepError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
