use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::requests::CreateEmployeeRequest;

/// Field values of the employee creation form, kept in raw input form until
/// validation passes. Credentials are only meaningful in the
/// account-creating variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
    pub username: String,
    pub password: String,
}

impl EmployeeDraft {
    /// Runs every field rule and returns the violations keyed by field name.
    /// All rules run, so the form surfaces every problem at once.
    pub fn validate(&self, require_credentials: bool) -> HashMap<String, String> {
        let mut errors = HashMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.insert("email".to_string(), "Email is required".to_string());
        } else if !looks_like_email(&self.email) {
            errors.insert("email".to_string(), "Email is invalid".to_string());
        }
        if self.position.trim().is_empty() {
            errors.insert("position".to_string(), "Position is required".to_string());
        }
        if self.department.trim().is_empty() {
            errors.insert("department".to_string(), "Department is required".to_string());
        }
        if self.salary.trim().is_empty() {
            errors.insert("salary".to_string(), "Salary is required".to_string());
        } else if !parses_positive(&self.salary) {
            errors.insert(
                "salary".to_string(),
                "Salary must be a positive number".to_string(),
            );
        }
        if self.hire_date.trim().is_empty() {
            errors.insert("hire_date".to_string(), "Hire date is required".to_string());
        }
        if require_credentials {
            if self.username.trim().is_empty() {
                errors.insert("username".to_string(), "Username is required".to_string());
            }
            if self.password.trim().is_empty() {
                errors.insert("password".to_string(), "Password is required".to_string());
            }
        }

        errors
    }

    /// Builds the creation request body. Meant to run after [`validate`]
    /// passed; an unparseable salary falls back to zero rather than
    /// panicking.
    ///
    /// [`validate`]: EmployeeDraft::validate
    pub fn to_request(&self, include_credentials: bool) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary.trim().parse().unwrap_or(0.0),
            hire_date: self.hire_date.clone(),
            username: include_credentials.then(|| self.username.clone()),
            password: include_credentials.then(|| self.password.clone()),
        }
    }
}

fn parses_positive(raw: &str) -> bool {
    raw.trim().parse::<f64>().map(|v| v > 0.0).unwrap_or(false)
}

/// Permissive `local@domain.tld` shape check: some non-space characters, `@`,
/// some more, a dot, some more, appearing anywhere in the value.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let rest = &token[at + 1..];
            rest.char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < rest.len())
        })
    })
}
