use api_client::{ClientError, CONNECTION_ERROR};
use reqwest::StatusCode;

#[test]
fn test_login_rejection_shows_the_server_text() {
    let err = ClientError::from_response_parts(
        StatusCode::UNAUTHORIZED,
        r#"{"error": "Invalid username or password"}"#,
    );

    assert!(!err.is_not_found());
    assert_eq!(err.user_message("Login failed"), "Invalid username or password");
}

#[test]
fn test_blank_credentials_rejection_passes_through() {
    let err = ClientError::from_response_parts(
        StatusCode::BAD_REQUEST,
        r#"{"error": "Username and password are required"}"#,
    );

    assert_eq!(
        err.user_message("Login failed"),
        "Username and password are required"
    );
}

#[test]
fn test_missing_profile_is_distinguished_from_other_failures() {
    let err = ClientError::from_response_parts(
        StatusCode::NOT_FOUND,
        r#"{"error": "Employee not found"}"#,
    );

    assert!(err.is_not_found());
    assert_eq!(err.user_message("Failed to fetch employee profile"), "Employee not found");
}

#[test]
fn test_creation_validation_errors_pass_through() {
    let err = ClientError::from_response_parts(
        StatusCode::BAD_REQUEST,
        r#"{"error": "Missing required field: salary"}"#,
    );

    assert_eq!(
        err.user_message("Failed to add employee"),
        "Missing required field: salary"
    );
}

#[test]
fn test_delete_failure_prefers_server_detail() {
    let err = ClientError::from_response_parts(
        StatusCode::BAD_REQUEST,
        r#"{"error": "Invalid employee ID"}"#,
    );

    assert_eq!(err.user_message("Failed to delete employee"), "Invalid employee ID");
}

#[test]
fn test_failure_without_detail_falls_back_per_action() {
    let err = ClientError::from_response_parts(StatusCode::INTERNAL_SERVER_ERROR, r#"{}"#);

    assert_eq!(
        err.user_message("Failed to update profile"),
        "Failed to update profile"
    );
}

#[test]
fn test_html_error_pages_read_as_connection_trouble() {
    let err = ClientError::from_response_parts(
        StatusCode::BAD_GATEWAY,
        "<html><body>502 Bad Gateway</body></html>",
    );

    assert_eq!(err.user_message("anything"), CONNECTION_ERROR);
}

#[test]
fn test_bodyless_not_found_keeps_its_category() {
    let err = ClientError::from_response_parts(StatusCode::NOT_FOUND, "");

    assert!(err.is_not_found());
    assert_eq!(err.user_message("Employee not found"), "Employee not found");
}
