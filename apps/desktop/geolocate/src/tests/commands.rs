// Unit tests for the locate_address command
// Tests the empty-field guard that keeps the locator from being invoked

use crate::commands::geocode::locate_address;
use crate::error::GeolocateError;

/// **VALUE**: Verifies an empty API key is rejected before any network work.
///
/// **WHY THIS MATTERS**: The locator's contract assumes validated input;
/// this guard is what upholds that contract at the IPC boundary even if
/// the frontend's own check is bypassed.
///
/// **BUG THIS CATCHES**: Would catch the validation being moved after
/// locator construction, or the wrong field being reported.
#[tokio::test]
async fn given_empty_api_key_when_locating_then_validation_error() {
    // GIVEN/WHEN: A locate call with a blank key
    let result = locate_address(String::from("   "), String::from("some address")).await;

    // THEN: Rejected as a validation error naming the key field
    match result {
        Err(GeolocateError::Validation { message, .. }) => {
            assert!(
                message.contains("API-key is required"),
                "got {message:?}"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies an empty address is rejected the same way.
#[tokio::test]
async fn given_empty_address_when_locating_then_validation_error() {
    let result = locate_address(String::from("test-key"), String::new()).await;

    match result {
        Err(GeolocateError::Validation { message, .. }) => {
            assert!(
                message.contains("Address is required"),
                "got {message:?}"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
