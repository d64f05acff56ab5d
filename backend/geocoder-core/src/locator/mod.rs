use crate::error::locator::LocatorError;
use crate::response;

use common::{GeocodeRequest, GeocodeResult, HttpStatusCode};

use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const API_KEY_PARAM: &str = "apikey";
const GEOCODE_PARAM: &str = "geocode";
const FORMAT_PARAM: &str = "format";
const JSON_FORMAT: &str = "json";

/// Prefix for failures where no response arrived at all.
pub const NETWORK_ERROR_PREFIX: &str = "Network error";

#[derive(Clone)]
pub struct AddressLocator {
    endpoint: Url,
    client: Client,
}

impl AddressLocator {
    pub fn new(endpoint_str: &str) -> Result<Self, LocatorError> {
        let endpoint = Url::parse(endpoint_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { endpoint, client })
    }

    fn request_url(&self, request: &GeocodeRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, request.api_key().as_str())
            .append_pair(GEOCODE_PARAM, request.address())
            .append_pair(FORMAT_PARAM, JSON_FORMAT);
        url
    }

    /// Resolve an address to coordinates with a single GET request.
    ///
    /// This never fails from the caller's point of view: transport
    /// errors, provider rejections, and unresolvable addresses all come
    /// back as [`GeocodeResult::Failure`] carrying a displayable message.
    ///
    /// The call suspends until headers and body have been received; this
    /// is the only suspension point in the system. No retries are made.
    pub async fn locate(&self, request: &GeocodeRequest) -> GeocodeResult {
        debug!(
            "Geocoding \"{}\" (key length: {})",
            request.address(),
            request.api_key().len()
        );

        let url = self.request_url(request);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Geocoding request failed in transit: {e}");
                return GeocodeResult::Failure {
                    message: format!("{NETWORK_ERROR_PREFIX} - {e}"),
                };
            }
        };

        let status = HttpStatusCode::from(response.status().as_u16());

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read geocoding response body: {e}");
                return GeocodeResult::Failure {
                    message: format!("{NETWORK_ERROR_PREFIX} - {e}"),
                };
            }
        };

        if status.is_success() {
            match response::extract_coordinates(&body) {
                Some(coordinates) => {
                    info!("Resolved \"{}\" to {coordinates}", request.address());
                    GeocodeResult::Success { coordinates }
                }
                None => {
                    debug!(
                        "Success response carried no coordinates for \"{}\"",
                        request.address()
                    );
                    GeocodeResult::Failure {
                        message: String::from(response::ADDRESS_NOT_FOUND_MESSAGE),
                    }
                }
            }
        } else {
            if status.is_client_error() {
                warn!("Provider rejected the request: status={status}");
            } else {
                error!("Provider failure: status={status}");
            }

            GeocodeResult::Failure {
                message: response::extract_error(&body),
            }
        }
    }
}
