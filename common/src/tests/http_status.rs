use crate::HttpStatusCode;

/// **VALUE**: Verifies the success range is exactly [200, 300).
///
/// **WHY THIS MATTERS**: Only 2xx bodies are handed to reply extraction. Everything else
/// must surface as an HTTP error carrying the raw body.
///
/// **BUG THIS CATCHES**: Off-by-one at 199/300 boundaries.
#[test]
fn given_boundary_codes_when_is_success_checked_then_only_2xx_pass() {
    // GIVEN / WHEN / THEN
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(500).is_success());
}

/// **VALUE**: Verifies client/server classification used for error categories.
///
/// **WHY THIS MATTERS**: Log lines label failures as client_error or server_error.
///
/// **BUG THIS CATCHES**: A 401 labelled as a server error would send people to the wrong place.
#[test]
fn given_error_codes_when_classified_then_client_and_server_ranges_are_disjoint() {
    // GIVEN: A client and a server error
    let unauthorized = HttpStatusCode::from(401);
    let internal = HttpStatusCode::from(500);

    // WHEN / THEN
    assert!(unauthorized.is_client_error());
    assert!(!unauthorized.is_server_error());
    assert!(internal.is_server_error());
    assert!(!internal.is_client_error());
    assert_eq!(internal.to_string(), "500");
}
