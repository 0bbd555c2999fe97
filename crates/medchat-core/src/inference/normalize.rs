//! Response normalization.
//!
//! The endpoint answers with either a list of result objects or a single
//! result object. The reply is looked up in strict priority order:
//! `generated_text`, then `answer`, then `error`, then the rephrase fallback.

use serde_json::{Map, Value};

use medchat_types::inference::{FailureKind, InferenceResult};

/// Reply used when a well-formed response carries none of the expected fields.
pub const FALLBACK_REPLY: &str =
    "I'm not sure, could you please rephrase or ask a different question?";

/// Top-level shape of a decoded response body.
#[derive(Debug)]
pub enum ResponseShape<'a> {
    /// `[ {...}, ... ]` -- only the first element is considered.
    Batch(&'a [Value]),
    /// `{ ... }`
    Single(&'a Map<String, Value>),
    /// Anything else (string, number, null, ...).
    Other,
}

impl<'a> ResponseShape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => ResponseShape::Batch(items),
            Value::Object(map) => ResponseShape::Single(map),
            _ => ResponseShape::Other,
        }
    }

    /// The result object the reply is read from, if any.
    pub fn result_object(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            ResponseShape::Batch(items) => items.first().and_then(Value::as_object),
            ResponseShape::Single(map) => Some(map),
            ResponseShape::Other => None,
        }
    }
}

/// What a result object carried, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    GeneratedText(String),
    Answer(String),
    ServiceError(String),
    Empty,
}

/// Classify a decoded response body.
pub fn normalize(body: &Value) -> Normalized {
    let Some(object) = ResponseShape::of(body).result_object() else {
        return Normalized::Empty;
    };

    if let Some(text) = text_field(object, "generated_text") {
        return Normalized::GeneratedText(text);
    }
    if let Some(text) = text_field(object, "answer") {
        return Normalized::Answer(text);
    }
    match object.get("error") {
        None | Some(Value::Null) => Normalized::Empty,
        Some(Value::String(message)) if message.trim().is_empty() => {
            Normalized::ServiceError("unknown error".to_string())
        }
        Some(Value::String(message)) => Normalized::ServiceError(message.trim().to_string()),
        Some(other) => Normalized::ServiceError(other.to_string()),
    }
}

/// A field counts as present only when it is a non-blank string.
fn text_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    object
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

impl From<Normalized> for InferenceResult {
    fn from(normalized: Normalized) -> Self {
        match normalized {
            Normalized::GeneratedText(text) | Normalized::Answer(text) => {
                InferenceResult::Reply(text)
            }
            Normalized::ServiceError(message) => {
                InferenceResult::failure(FailureKind::ServiceError, message)
            }
            Normalized::Empty => InferenceResult::Reply(FALLBACK_REPLY.to_string()),
        }
    }
}
