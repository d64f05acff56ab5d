// Unit tests for HttpStatusCode categorization

use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_categorized_then_ranges_are_correct() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(301).is_success());

    assert!(HttpStatusCode(403).is_client_error());
    assert!(!HttpStatusCode(403).is_server_error());

    assert!(HttpStatusCode(502).is_server_error());
    assert!(!HttpStatusCode(502).is_client_error());
}

#[test]
fn given_u16_when_converted_then_displays_bare_code() {
    let status = HttpStatusCode::from(403u16);

    assert_eq!(status, HttpStatusCode(403));
    assert_eq!(format!("{status}"), "403");
}
