use geocoder_core::locator::AddressLocator;

use common::{GeocodeRequest, GeocodeResult};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for AddressLocator against a mocked provider
// These exercise the full request/response cycle over real HTTP
// ============================================================================

const TEST_API_KEY: &str = "test-key";
const TEST_ADDRESS: &str = "Москва, Тверская улица, 7";

const SUCCESS_BODY: &str = r#"{
    "response": {
        "GeoObjectCollection": {
            "featureMember": [
                {
                    "GeoObject": {
                        "Point": { "pos": "37.617635 55.755814" }
                    }
                }
            ]
        }
    }
}"#;

fn request() -> GeocodeRequest {
    GeocodeRequest::new(String::from(TEST_API_KEY), String::from(TEST_ADDRESS))
        .expect("test inputs are non-empty")
}

fn locator_for(server: &MockServer) -> AddressLocator {
    AddressLocator::new(&format!("{}/1.x/", server.uri()))
        .expect("mock server URI should parse")
}

/// **VALUE**: End-to-end happy path - the provider's `pos` string comes back
/// verbatim as a `Success`.
///
/// **WHY THIS MATTERS**: This is the one flow users actually care about.
/// It also pins the query contract: the literal API key and address must
/// reach the provider as the `apikey`/`geocode` parameters, with
/// `format=json`, on a GET.
///
/// **BUG THIS CATCHES**: Would catch renamed query parameters, a mangled
/// address (the Cyrillic text must survive the trip), or the coordinates
/// being reformatted instead of passed through.
#[tokio::test]
async fn given_resolvable_address_when_locating_then_success_with_verbatim_pos() {
    // GIVEN: A provider that recognizes the exact query we promise to send
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .and(query_param("apikey", TEST_API_KEY))
        .and(query_param("geocode", TEST_ADDRESS))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS_BODY))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Locating
    let result = locator_for(&server).locate(&request()).await;

    // THEN: The pos string is returned untouched
    assert_eq!(
        result,
        GeocodeResult::Success {
            coordinates: String::from("37.617635 55.755814"),
        }
    );
    // Mock expectations (exactly one matching request) verify on drop
}

/// **VALUE**: An empty `featureMember` array reads as "Address not found".
///
/// **WHY THIS MATTERS**: This is the provider's normal answer for an
/// unknown address - it must surface as a friendly failure, not an error.
#[tokio::test]
async fn given_no_feature_members_when_locating_then_address_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"response":{"GeoObjectCollection":{"featureMember":[]}}}"#,
        ))
        .mount(&server)
        .await;

    let result = locator_for(&server).locate(&request()).await;

    assert_eq!(
        result,
        GeocodeResult::Failure {
            message: String::from("Address not found"),
        }
    );
}

/// **VALUE**: A success status with an unparseable body still reads as
/// "Address not found" rather than surfacing a parse error.
///
/// **BUG THIS CATCHES**: Would catch the JSON parse failure escaping as a
/// panic or as a different failure message.
#[tokio::test]
async fn given_non_json_success_body_when_locating_then_address_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
        .mount(&server)
        .await;

    let result = locator_for(&server).locate(&request()).await;

    assert_eq!(
        result,
        GeocodeResult::Failure {
            message: String::from("Address not found"),
        }
    );
}

/// **VALUE**: A well-formed provider error body becomes the documented
/// "Error {code}: {error} - {message}" wording.
///
/// **WHY THIS MATTERS**: Invalid API keys are the most common real-world
/// failure; the user needs the provider's own explanation on screen.
#[tokio::test]
async fn given_forbidden_with_error_body_when_locating_then_provider_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"{"statusCode":403,"error":"Forbidden","message":"Invalid key"}"#,
        ))
        .mount(&server)
        .await;

    let result = locator_for(&server).locate(&request()).await;

    assert_eq!(
        result,
        GeocodeResult::Failure {
            message: String::from("Error 403: Forbidden - Invalid key"),
        }
    );
}

/// **VALUE**: A failure status with a malformed body falls back to the
/// "Unknown error - " wording with the parse detail appended.
#[tokio::test]
async fn given_malformed_failure_body_when_locating_then_unknown_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.x/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let result = locator_for(&server).locate(&request()).await;

    match result {
        GeocodeResult::Failure { message } => {
            assert!(
                message.starts_with("Unknown error - "),
                "got {message:?}"
            );
        }
        GeocodeResult::Success { .. } => panic!("a 500 must not produce coordinates"),
    }
}

/// **VALUE**: Transport-level failures (nothing listening at all) fold into
/// a `Failure` instead of propagating an error.
///
/// **WHY THIS MATTERS**: The display contract is that *some* text always
/// appears after a lookup; a connection-refused must not crash the caller.
///
/// **BUG THIS CATCHES**: Would catch `locate` regaining a `Result` return
/// or panicking on `send()` errors.
#[tokio::test]
async fn given_unreachable_provider_when_locating_then_network_failure_message() {
    // GIVEN: An endpoint with no listener (the mock server is dropped first)
    let endpoint = {
        let server = MockServer::start().await;
        format!("{}/1.x/", server.uri())
    };

    let locator = AddressLocator::new(&endpoint).expect("endpoint should parse");

    // WHEN: Locating against the now-closed port
    let result = locator.locate(&request()).await;

    // THEN: A network failure message comes back
    match result {
        GeocodeResult::Failure { message } => {
            assert!(
                message.starts_with("Network error - "),
                "got {message:?}"
            );
        }
        GeocodeResult::Success { .. } => panic!("nothing was listening"),
    }
}
