//! Status and records helpers

use interviewer_core::error::Result;
use interviewer_core::format::quote_record;
use serde::Serialize;
use serde_json::json;

/// Print a JSON status message with optional fields
///
/// ```ignore
/// print_json_status("ok", Some("Workspace initialized"), &[("workspace", json!(path))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a records header line
///
/// ```ignore
/// print_records_header("tracks", &[("count", "3")]);
/// // H interviewer=1 records=1 mode=tracks count=3
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec![
        "H interviewer=1 records=1".to_string(),
        format!("mode={}", mode),
    ];
    parts.extend(
        extra_fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value)),
    );
    println!("{}", parts.join(" "));
}

/// Print a records data line with a quoted value
pub fn print_records_data(key: &str, value: &str) {
    println!("D {} {}", key, quote_record(value));
}
