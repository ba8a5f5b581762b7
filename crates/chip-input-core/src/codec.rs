//! Clipboard interchange format for chips.
//!
//! Structured payloads look like
//! `__CHIPINPUT__:{"version":1,"chips":[{"id":"..","label":"..","value":".."}]}`.
//! Text without the marker is read as a comma-separated list of labels, so
//! chips can be pasted from any plain-text source.
//!
//! Decoded tokens always get fresh ids from the supplied [`IdGenerator`]; ids
//! carried in a payload are never reused, which keeps pasted chips from
//! colliding with ones already in the destination list.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::token::{IdGenerator, Token};

/// Prefix identifying a structured chip payload.
pub const MARKER: &str = "__CHIPINPUT__:";

/// The only payload version this codec reads and writes.
pub const FORMAT_VERSION: u64 = 1;

/// Why a clipboard string could not be turned into tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Marker present but the payload is not valid JSON of the expected shape.
    #[error("malformed chip payload: {0}")]
    Malformed(String),
    /// Marker present, payload well-formed, but written by another format version.
    #[error("unsupported chip payload version {0} (expected {expected})", expected = FORMAT_VERSION)]
    UnsupportedVersion(Number),
    /// Plain text without a single non-blank comma-separated segment.
    #[error("nothing to paste")]
    Empty,
}

impl DecodeError {
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion(_))
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    version: u64,
    chips: Vec<WireChip<'a>>,
}

#[derive(Serialize)]
struct WireChip<'a> {
    id: &'a str,
    label: &'a str,
    value: &'a str,
}

/// Encodes tokens as a marker-prefixed JSON payload.
///
/// Only `id`, `label` and `value` travel; selection and disabled state are
/// dropped. Output is byte-for-byte deterministic and keeps input order.
pub fn encode(tokens: &[Token]) -> String {
    let payload = Payload {
        version: FORMAT_VERSION,
        chips: tokens
            .iter()
            .map(|t| WireChip {
                id: t.id.as_str(),
                label: &t.label,
                value: &t.value,
            })
            .collect(),
    };
    // Serializing plain string fields into a String cannot fail.
    let json = serde_json::to_string(&payload).unwrap_or_default();
    format!("{MARKER}{json}")
}

/// Decodes a clipboard string into fresh, unselected, enabled tokens.
pub fn decode(text: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Token>, DecodeError> {
    let result = match text.strip_prefix(MARKER) {
        Some(json) => decode_payload(json, ids),
        None => decode_plain(text, ids),
    };
    match &result {
        Err(e @ DecodeError::UnsupportedVersion(_)) => tracing::warn!("Ignoring paste: {e}"),
        Err(e @ DecodeError::Malformed(_)) => tracing::debug!("Ignoring paste: {e}"),
        Err(DecodeError::Empty) => tracing::debug!("Ignoring paste: no usable text"),
        Ok(tokens) => tracing::debug!("Decoded {} chip(s) from clipboard text", tokens.len()),
    }
    result
}

/// Joins labels with `", "` for display or plain-text export.
pub fn to_display_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns true when `text` carries the structured chip marker.
pub fn is_recognized_format(text: &str) -> bool {
    text.starts_with(MARKER)
}

fn decode_payload(json: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Token>, DecodeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    let Value::Object(root) = value else {
        return Err(malformed("payload is not an object"));
    };

    let version = match root.get("version") {
        Some(Value::Number(n)) => n,
        _ => return Err(malformed("missing numeric `version`")),
    };
    if version.as_f64() != Some(FORMAT_VERSION as f64) {
        return Err(DecodeError::UnsupportedVersion(version.clone()));
    }

    let Some(Value::Array(chips)) = root.get("chips") else {
        return Err(malformed("`chips` is not a list"));
    };

    chips
        .iter()
        .enumerate()
        .map(|(i, chip)| match chip {
            Value::Object(fields) => decode_chip(i, fields, ids),
            _ => Err(malformed(format!("chip {i} is not an object"))),
        })
        .collect()
}

fn decode_chip(
    index: usize,
    fields: &Map<String, Value>,
    ids: &mut dyn IdGenerator,
) -> Result<Token, DecodeError> {
    let Some(Value::String(label)) = fields.get("label") else {
        return Err(malformed(format!("chip {index} has no string `label`")));
    };
    let value = match fields.get("value") {
        None | Some(Value::Null) => None,
        Some(Value::String(v)) => Some(v.clone()),
        Some(_) => return Err(malformed(format!("chip {index} has a non-string `value`"))),
    };
    Ok(Token::with_value(ids.next_id(), label.clone(), value))
}

fn decode_plain(text: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Token>, DecodeError> {
    let tokens: Vec<Token> = text
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| Token::new(ids.next_id(), segment))
        .collect();
    if tokens.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(tokens)
}

fn malformed(reason: impl Into<String>) -> DecodeError {
    DecodeError::Malformed(reason.into())
}
