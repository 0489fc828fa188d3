use crate::ScimErrorResponse;

use serde_json::json;

#[test]
fn test_scim_error_summary_prefers_detail() {
    let body = json!({
        "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
        "status": "409",
        "scimType": "uniqueness",
        "detail": "User already exists"
    });

    let error: ScimErrorResponse = serde_json::from_value(body).unwrap();

    assert_eq!(
        error.schemas,
        vec!["urn:ietf:params:scim:api:messages:2.0:Error"]
    );
    assert_eq!(
        error.summary().as_deref(),
        Some("User already exists (uniqueness)")
    );
}

#[test]
fn test_scim_error_accepts_numeric_status_and_message() {
    let body = json!({"status": 401, "message": "Bad credentials"});

    let error: ScimErrorResponse = serde_json::from_value(body).unwrap();

    assert_eq!(error.summary().as_deref(), Some("Bad credentials"));
    assert_eq!(error.status, Some(json!(401)));
}

#[test]
fn test_scim_error_without_text_has_no_summary() {
    let error: ScimErrorResponse = serde_json::from_value(json!({})).unwrap();

    assert!(error.summary().is_none());
}
