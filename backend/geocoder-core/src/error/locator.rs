use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures building an [`AddressLocator`](crate::locator::AddressLocator).
///
/// Note these cover construction only. Once built, `locate` folds every
/// failure into a displayable [`GeocodeResult::Failure`](common::GeocodeResult)
/// instead of returning an error.
#[derive(Debug, ThisError)]
pub enum LocatorError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for LocatorError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LocatorError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LocatorError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        LocatorError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
