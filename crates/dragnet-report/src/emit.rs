use anyhow::{Context, Result};
use serde::Serialize;

/// Emit a value as JCS (RFC 8785) canonical JSON.
///
/// Canonical emission makes report generation idempotent at the byte level:
/// the same final state always serializes to the same bytes, on every
/// platform.
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize report to JSON value")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize report JSON")?;
    let json_content = String::from_utf8(json_bytes)
        .with_context(|| "Failed to convert canonical JSON to UTF-8 string")?;

    Ok(json_content)
}
