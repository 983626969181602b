/*
 * Responsibility
 * - Users request/response DTOs
 * - The password never appears in any response type; neither does its hash
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        // absent and too-short report the same way
        match &self.password {
            Some(password) if password.len() >= 3 => {}
            _ => return Err("password required"),
        }
        match &self.username {
            Some(username) if !username.trim().is_empty() => {}
            _ => return Err("unique username required"),
        }
        match &self.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => return Err("name is required"),
        }

        Ok(())
    }
}

/// Blog projection embedded in a user listing.
#[derive(Debug, Serialize)]
pub struct OwnedBlog {
    pub id: String, // encoded public id
    pub url: String,
    pub title: String,
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<OwnedBlog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(
        username: Option<&str>,
        name: Option<&str>,
        password: Option<&str>,
    ) -> CreateUserRequest {
        CreateUserRequest {
            username: username.map(String::from),
            name: name.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn short_or_absent_password_is_rejected() {
        assert_eq!(
            payload(Some("erik"), Some("Erik"), None).validate(),
            Err("password required")
        );
        assert_eq!(
            payload(Some("erik"), Some("Erik"), Some("ab")).validate(),
            Err("password required")
        );
        assert!(
            payload(Some("erik"), Some("Erik"), Some("abc"))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn username_and_name_are_required() {
        assert_eq!(
            payload(None, Some("Erik"), Some("salainen")).validate(),
            Err("unique username required")
        );
        assert_eq!(
            payload(Some("erik"), None, Some("salainen")).validate(),
            Err("name is required")
        );
    }
}
