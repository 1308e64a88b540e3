use serde_json::{json, Value};
use shared_types::{Employee, EmployeeDraft, Session};

/// One employee object exactly as the backend's `to_dict` emits it.
/// `salary` is taken as a raw JSON value because the backend serializes
/// a zero salary as `null` and older rows have been seen as strings.
pub fn wire_employee(
    id: i64,
    name: &str,
    email: &str,
    position: &str,
    department: &str,
    salary: Value,
    hire_date: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "position": position,
        "department": department,
        "salary": salary,
        "hire_date": hire_date,
        "created_at": "2023-01-15 09:30:00",
        "updated_at": "2023-06-01 14:00:00",
    })
}

/// Three-person roster covering the salary encodings the backend actually
/// produces: a plain number, a numeric string, and a zero row sent as null.
pub fn sample_roster() -> Vec<Employee> {
    let payload = json!([
        wire_employee(
            1,
            "Alice Johnson",
            "alice@company.com",
            "Senior Engineer",
            "Engineering",
            json!(95000.0),
            "2021-03-15",
        ),
        wire_employee(
            2,
            "Bob Martinez",
            "bob@company.com",
            "Account Manager",
            "Sales",
            json!("62500.50"),
            "2022-07-01",
        ),
        wire_employee(
            3,
            "Carol White",
            "carol@company.com",
            "Recruiter",
            "Human Resources",
            json!(null),
            "2023-11-20",
        ),
    ]);

    serde_json::from_value(payload).expect("sample roster should deserialize")
}

/// The admin login payload. Admins have no employee row, so `employee_id`
/// comes back null.
pub fn admin_session() -> Session {
    serde_json::from_value(json!({
        "id": 1,
        "username": "admin",
        "role": "admin",
        "employee_id": null,
        "created_at": "2023-01-01 08:00:00",
        "updated_at": null,
    }))
    .expect("admin session should deserialize")
}

/// A login payload for an employee account linked to the given record.
pub fn employee_session(employee_id: i64) -> Session {
    serde_json::from_value(json!({
        "id": 5,
        "username": "alice",
        "role": "employee",
        "employee_id": employee_id,
        "created_at": "2023-02-10 10:15:00",
        "updated_at": "2023-02-10 10:15:00",
    }))
    .expect("employee session should deserialize")
}

/// Creation form values as a user would type them, valid for both variants.
pub fn form_draft() -> EmployeeDraft {
    EmployeeDraft {
        name: "Dana Lee".to_string(),
        email: "dana@company.com".to_string(),
        position: "Designer".to_string(),
        department: "Design".to_string(),
        salary: "72500.50".to_string(),
        hire_date: "2024-02-01".to_string(),
        username: "dlee".to_string(),
        password: "changeme1".to_string(),
    }
}
