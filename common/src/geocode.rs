//! Geocoding request and result types.

use crate::{ErrorLocation, RedactedApiKey};

use std::panic::Location;

use serde::Serialize;
use thiserror::Error as ThisError;

/// A validated geocoding request.
///
/// Construction enforces that both the API key and the address are
/// non-empty, so a locator handed a `GeocodeRequest` never has to
/// re-check its inputs. Whitespace-only values count as empty.
///
/// The address is kept exactly as the user typed it - it is transmitted
/// to the provider unmodified.
#[derive(Debug, Clone)]
pub struct GeocodeRequest {
    api_key: RedactedApiKey,
    address: String,
}

impl GeocodeRequest {
    /// Build a request from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError`] naming the first empty field.
    pub fn new(api_key: String, address: String) -> Result<Self, RequestValidationError> {
        if api_key.trim().is_empty() {
            return Err(RequestValidationError::MissingApiKey {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if address.trim().is_empty() {
            return Err(RequestValidationError::MissingAddress {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            api_key: RedactedApiKey::new(api_key),
            address,
        })
    }

    /// The API key, still redacted for logging purposes.
    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    /// The address text exactly as supplied.
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Rejected user input - a required field was empty.
#[derive(Debug, ThisError)]
pub enum RequestValidationError {
    #[error("Validation Error: API-key is required {location}")]
    MissingApiKey { location: ErrorLocation },

    #[error("Validation Error: Address is required {location}")]
    MissingAddress { location: ErrorLocation },
}

/// Outcome of a single geocoding call.
///
/// Every call produces one of these - transport failures, provider
/// errors, and unresolvable addresses are all folded into `Failure`
/// with a human-readable message, never the raw provider payload.
///
/// Serialized with a tagged layout for Tauri IPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum GeocodeResult {
    /// The provider resolved the address; `coordinates` is its
    /// "longitude latitude" string passed through verbatim.
    Success { coordinates: String },

    /// The address could not be resolved.
    Failure { message: String },
}
