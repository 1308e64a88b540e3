use serde_json::json;
use shared_types::EmployeeDraft;

use crate::common;

#[test]
fn test_valid_credentials_draft_produces_the_full_wire_body() {
    let draft = common::form_draft();
    assert!(draft.validate(true).is_empty());

    let body = serde_json::to_value(draft.to_request(true)).expect("request should serialize");
    assert_eq!(
        body,
        json!({
            "name": "Dana Lee",
            "email": "dana@company.com",
            "position": "Designer",
            "department": "Design",
            "salary": 72500.5,
            "hire_date": "2024-02-01",
            "username": "dlee",
            "password": "changeme1",
        })
    );
}

#[test]
fn test_base_variant_omits_credentials_from_the_wire_body() {
    let body = serde_json::to_value(common::form_draft().to_request(false))
        .expect("request should serialize");

    assert!(body.get("username").is_none(), "username must not be sent");
    assert!(body.get("password").is_none(), "password must not be sent");
    assert_eq!(body["name"], "Dana Lee");
}

#[test]
fn test_salary_text_reaches_the_wire_as_a_number() {
    let body = serde_json::to_value(common::form_draft().to_request(false))
        .expect("request should serialize");

    assert!(body["salary"].is_f64(), "salary must be numeric, not text");
    assert_eq!(body["salary"], 72500.5);
}

#[test]
fn test_all_violations_surface_in_one_pass() {
    let errors = EmployeeDraft::default().validate(true);

    assert_eq!(errors.len(), 8, "every field should report at once");
    assert_eq!(errors["name"], "Name is required");
    assert_eq!(errors["salary"], "Salary is required");
    assert_eq!(errors["username"], "Username is required");
}

#[test]
fn test_corrected_field_drops_out_on_revalidation() {
    let mut draft = common::form_draft();
    draft.email = "dana-at-company".to_string();
    draft.salary = "-10".to_string();

    let first = draft.validate(true);
    assert_eq!(first.len(), 2);
    assert_eq!(first["email"], "Email is invalid");
    assert_eq!(first["salary"], "Salary must be a positive number");

    draft.email = "dana@company.com".to_string();
    let second = draft.validate(true);
    assert_eq!(second.len(), 1, "only the still-broken field remains");
    assert!(second.contains_key("salary"));
}
