use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in Tauri commands.
///
/// These cross the IPC boundary as tagged JSON, but we maintain
/// structured error information and location tracking internally.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum GeolocateError {
    /// Error from this app's own wiring (logging, window setup)
    #[error("Geolocate Error: {message} {location}")]
    Geolocate {
        message: String,
        location: ErrorLocation,
    },

    /// Error from geocoder-core operations
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// A required input field was empty
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}
