use crate::error::GeolocateError;

use geocoder_core::GEOCODER_ENDPOINT;
use geocoder_core::locator::AddressLocator;

use common::{ErrorLocation, GeocodeRequest, GeocodeResult};

use std::panic::Location;

use log::{debug, error, info, warn};
use tauri::command as TauriCommand;

/// Resolve a street address to geographic coordinates.
///
/// Validates that both fields are non-empty, then performs a single GET
/// against the geocoding provider. The returned [`GeocodeResult`] always
/// carries displayable text - unresolvable addresses, provider errors,
/// and network failures are data, not command errors.
///
/// Each invocation is independent; nothing is shared between calls and
/// an earlier in-flight lookup is never cancelled.
///
/// # Returns
///
/// * `Ok(GeocodeResult::Success)` - Coordinates found
/// * `Ok(GeocodeResult::Failure)` - Lookup failed, message is displayable
/// * `Err(GeolocateError)` - A required field was empty, or the locator
///   could not be constructed
#[TauriCommand]
pub async fn locate_address(
    api_key: String,
    address: String,
) -> Result<GeocodeResult, GeolocateError> {
    debug!(
        "Locate requested (key length: {}, address length: {})",
        api_key.len(),
        address.len()
    );

    let request = GeocodeRequest::new(api_key, address).map_err(|e| {
        warn!("Rejected locate request: {e}");
        GeolocateError::Validation {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let locator = AddressLocator::new(GEOCODER_ENDPOINT).map_err(|e| {
        error!("Failed to construct locator: {e}");
        GeolocateError::Core {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let result = locator.locate(&request).await;

    match &result {
        GeocodeResult::Success { coordinates } => {
            info!("Lookup succeeded: {coordinates}");
        }
        GeocodeResult::Failure { message } => {
            info!("Lookup failed: {message}");
        }
    }

    Ok(result)
}
