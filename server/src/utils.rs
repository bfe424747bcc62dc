use serde_json::Value;

use crate::error::ApiError;

/// Longest accepted text, counted in characters rather than bytes.
pub const MAX_TEXT_CHARS: usize = 1000;

/// Largest accepted batch.
pub const MAX_BATCH_TEXTS: usize = 100;

pub fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::MalformedPayload)
}

/// Pulls the text for a single prediction out of the payload.
///
/// Length is checked after the emptiness guard, so whitespace-only input
/// reads as empty rather than too long.
pub fn extract_text(payload: &Value) -> Result<&str, ApiError> {
    let text = payload
        .get("text")
        .ok_or(ApiError::MissingText)?
        .as_str()
        .ok_or(ApiError::InvalidText)?;

    check_text(text)?;

    Ok(text)
}

/// Collection-level checks for a batch; element checks happen per item.
pub fn extract_texts(payload: &Value) -> Result<&[Value], ApiError> {
    let texts = payload
        .get("texts")
        .ok_or(ApiError::MissingTexts)?
        .as_array()
        .ok_or(ApiError::TextsNotAList)?;

    if texts.is_empty() {
        return Err(ApiError::EmptyTexts);
    }
    if texts.len() > MAX_BATCH_TEXTS {
        return Err(ApiError::TooManyTexts);
    }

    Ok(texts)
}

/// Element rules for a batch. A failure here marks only that element, never
/// the whole batch.
pub fn check_batch_text(value: &Value) -> Result<&str, ApiError> {
    let text = value.as_str().ok_or(ApiError::TextNotAString)?;

    check_text(text)?;

    Ok(text)
}

fn check_text(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::InvalidText);
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::TextTooLong);
    }

    Ok(())
}
