//! JSON payload extraction for the provider's two response shapes.
//!
//! The success shape buries the coordinate string deep inside
//! `response.GeoObjectCollection.featureMember[0].GeoObject.Point.pos`;
//! the error shape is a flat `{statusCode, error, message}` object.
//! Both extractors degrade to a fixed fallback message instead of
//! erroring - a malformed payload is a normal outcome here.

use serde::Deserialize;
use serde_json::Value;

/// Fallback shown when a success payload carries no usable coordinates.
pub const ADDRESS_NOT_FOUND_MESSAGE: &str = "Address not found";

/// Prefix for failure payloads that could not be parsed.
pub const UNKNOWN_ERROR_PREFIX: &str = "Unknown error";

/// Pull the coordinate string out of a success payload.
///
/// Returns the `pos` value only if every step of the path exists and the
/// leaf is a string; any missing element, type mismatch, or JSON parse
/// failure yields `None`.
pub fn extract_coordinates(body: &str) -> Option<String> {
    let document: Value = serde_json::from_str(body).ok()?;

    document
        .get("response")?
        .get("GeoObjectCollection")?
        .get("featureMember")?
        .get(0)?
        .get("GeoObject")?
        .get("Point")?
        .get("pos")?
        .as_str()
        .map(str::to_owned)
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    #[serde(rename = "statusCode")]
    status_code: u16,
    error: String,
    message: String,
}

/// Describe a failure payload in one displayable line.
///
/// A well-formed `{statusCode, error, message}` body becomes
/// `"Error {statusCode}: {error} - {message}"`; anything else becomes
/// `"Unknown error - {parse failure}"`.
pub fn extract_error(body: &str) -> String {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(parsed) => format!(
            "Error {}: {} - {}",
            parsed.status_code, parsed.error, parsed.message
        ),
        Err(reason) => format!("{UNKNOWN_ERROR_PREFIX} - {reason}"),
    }
}
