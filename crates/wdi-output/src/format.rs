//! Cell formatting for CSV output and summaries.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its CSV field text.
///
/// Null becomes an empty field. Floats use the shortest representation that
/// parses back to the same value.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use wdi_output::any_to_field;
///
/// assert_eq!(any_to_field(AnyValue::Null), "");
/// assert_eq!(any_to_field(AnyValue::Int32(2015)), "2015");
/// assert_eq!(any_to_field(AnyValue::Float64(5.23)), "5.23");
/// ```
pub fn any_to_field(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Shortest round-trip decimal form of a float.
pub fn format_float(v: f64) -> String {
    format!("{v}")
}

/// Formats a summary statistic for display.
///
/// Large and tiny magnitudes switch to scientific notation so GDP levels and
/// percentage indicators fit the same table.
pub fn format_stat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if !(1e-4..1e9).contains(&magnitude) {
        format!("{v:.6e}")
    } else {
        format!("{v:.6}")
    }
}
