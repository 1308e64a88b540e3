use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success payload of `POST /api/login`. Failures arrive as a non-2xx status
/// with an `{"error": ...}` body and never reach this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<Session>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `POST /api/employees`. Credentials ride along only when the form
/// also provisions a login account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Success payload of `POST /api/employees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedEmployee {
    pub id: i64,
    #[serde(default)]
    pub message: String,
}

/// Body for `PUT /api/profile/{id}`; the server accepts name and email only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}
