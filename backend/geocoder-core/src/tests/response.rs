// Unit tests for response payload extraction
// Tests the success path walk and the error body formatting

use crate::response::{extract_coordinates, extract_error};

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

/// **VALUE**: Verifies the happy-path walk down the provider's nested shape.
///
/// **WHY THIS MATTERS**: The coordinate string lives six levels deep; a
/// typo in any key name would turn every successful lookup into
/// "Address not found" without a single compiler complaint.
///
/// **BUG THIS CATCHES**: Would catch a misspelled path segment or an
/// accidental index change in `featureMember[0]`.
#[test]
fn given_success_body_when_extracting_then_pos_is_returned_verbatim() {
    let result = extract_coordinates(SUCCESS_BODY);

    assert_eq!(result.as_deref(), Some("37.617635 55.755814"));
}

/// **VALUE**: Verifies the extractor declines gracefully at every broken rung.
///
/// **WHY THIS MATTERS**: The provider legitimately returns an empty
/// `featureMember` for unknown addresses - that case must read as
/// "not found", not as a parse crash.
///
/// **BUG THIS CATCHES**: Would catch an indexing panic on the empty array
/// or an `unwrap` sneaking into the walk.
#[test]
fn given_defective_success_bodies_when_extracting_then_none_is_returned() {
    let empty_members =
        r#"{"response":{"GeoObjectCollection":{"featureMember":[]}}}"#;
    let missing_collection = r#"{"response":{}}"#;
    let pos_is_a_number = r#"{"response":{"GeoObjectCollection":{"featureMember":[
        {"GeoObject":{"Point":{"pos":37.6}}}]}}}"#;
    let not_json = "<html>502 Bad Gateway</html>";

    assert_eq!(extract_coordinates(empty_members), None);
    assert_eq!(extract_coordinates(missing_collection), None);
    assert_eq!(extract_coordinates(pos_is_a_number), None);
    assert_eq!(extract_coordinates(not_json), None);
    assert_eq!(extract_coordinates(""), None);
}

/// **VALUE**: Verifies the exact wording of a well-formed provider error.
///
/// **WHY THIS MATTERS**: This string is shown to the user as-is; the
/// "Error {code}: {error} - {message}" layout is part of the display
/// contract.
#[test]
fn given_error_body_when_extracting_then_fields_are_formatted() {
    let body = r#"{"statusCode":403,"error":"Forbidden","message":"Invalid key"}"#;

    assert_eq!(
        extract_error(body),
        "Error 403: Forbidden - Invalid key"
    );
}

/// **VALUE**: Verifies malformed failure bodies fall back to the unknown-error
/// wording with the parse failure appended.
///
/// **BUG THIS CATCHES**: Would catch the fallback losing its detail suffix,
/// which is the only diagnostic a user can report when the provider
/// misbehaves.
#[test]
fn given_malformed_error_bodies_when_extracting_then_unknown_error_with_details() {
    let not_json = "gateway timeout";
    let missing_field = r#"{"statusCode":403,"error":"Forbidden"}"#;
    let wrong_type = r#"{"statusCode":"403","error":"Forbidden","message":"Invalid key"}"#;

    for body in [not_json, missing_field, wrong_type] {
        let message = extract_error(body);

        assert!(
            message.starts_with("Unknown error - "),
            "expected unknown-error fallback for {body:?}, got {message:?}"
        );
        assert!(
            message.len() > "Unknown error - ".len(),
            "fallback should carry the parse failure detail"
        );
    }
}
