/*
 * Responsibility
 * - Login request/response DTOs
 * - A structurally incomplete login attempt is just an invalid credential,
 *   so both fields are Option and the handler maps absence to 401
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}
