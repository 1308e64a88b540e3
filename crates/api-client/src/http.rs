//! HTTP client for the employee management REST API

use crate::{ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared_types::{
    CreateEmployeeRequest, CreatedEmployee, Employee, LoginRequest, LoginResponse, Session,
    UpdateProfileRequest,
};

/// HTTP client for making requests to the employee API server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client rooted at the given origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body, discarding the response body
    async fn put<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_empty_response(response).await
    }

    /// Make a DELETE request, discarding the response body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_empty_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(%status, "request rejected: {body}");
            return Err(ClientError::from_response_parts(status, &body));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a response whose success body carries nothing the caller needs
    async fn handle_empty_response(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(%status, "request rejected: {body}");
            return Err(ClientError::from_response_parts(status, &body));
        }

        Ok(())
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("api/login", &request).await?;
        response
            .user
            .filter(|_| response.success)
            .ok_or_else(|| ClientError::Request(String::new()))
    }

    // ========== Employee API ==========

    /// Fetch the full employee roster
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("api/employees").await
    }

    /// Create a new employee record, optionally with login credentials
    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> ClientResult<CreatedEmployee> {
        self.post("api/employees", request).await
    }

    /// Delete an employee record by id
    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("api/employees/{id}")).await
    }

    // ========== Profile API ==========

    /// Fetch a single employee profile by id
    pub async fn fetch_profile(&self, id: i64) -> ClientResult<Employee> {
        self.get(&format!("api/profile/{id}")).await
    }

    /// Update the name and email of an employee profile
    pub async fn update_profile(&self, id: i64, request: &UpdateProfileRequest) -> ClientResult<()> {
        self.put(&format!("api/profile/{id}"), request).await
    }
}
