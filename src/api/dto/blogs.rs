/*
 * Responsibility
 * - Blogs request/response DTOs
 * - Required-but-absent fields are Option here so their absence is our 400,
 *   not a deserialization rejection
 * - Responses carry the encoded public id, never the internal one
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i32>,
}

impl CreateBlogRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        match &self.title {
            Some(title) if !title.trim().is_empty() => {}
            _ => return Err("title is required"),
        }
        match &self.url {
            Some(url) if !url.trim().is_empty() => {}
            _ => return Err("url is required"),
        }
        if let Some(likes) = self.likes
            && likes < 0
        {
            return Err("likes must be non-negative");
        }

        Ok(())
    }

    /// Like count defaults to zero when the payload omits it.
    pub fn likes_or_default(&self) -> i32 {
        self.likes.unwrap_or(0)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateLikesRequest {
    pub likes: Option<i32>,
}

impl UpdateLikesRequest {
    pub fn validate(&self) -> Result<i32, &'static str> {
        match self.likes {
            Some(likes) if likes >= 0 => Ok(likes),
            Some(_) => Err("likes must be non-negative"),
            None => Err("likes is required"),
        }
    }
}

/// Minimal projection of the owning principal.
#[derive(Debug, Serialize)]
pub struct BlogOwner {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: String, // encoded public id
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user: Option<BlogOwner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>, url: Option<&str>, likes: Option<i32>) -> CreateBlogRequest {
        CreateBlogRequest {
            title: title.map(String::from),
            author: None,
            url: url.map(String::from),
            likes,
        }
    }

    #[test]
    fn title_and_url_are_required() {
        assert_eq!(
            payload(None, Some("U"), None).validate(),
            Err("title is required")
        );
        assert_eq!(
            payload(Some("  "), Some("U"), None).validate(),
            Err("title is required")
        );
        assert_eq!(
            payload(Some("T"), None, None).validate(),
            Err("url is required")
        );
        assert!(payload(Some("T"), Some("U"), None).validate().is_ok());
    }

    #[test]
    fn absent_likes_default_to_zero() {
        assert_eq!(payload(Some("T"), Some("U"), None).likes_or_default(), 0);
        assert_eq!(payload(Some("T"), Some("U"), Some(7)).likes_or_default(), 7);
    }

    #[test]
    fn negative_likes_are_invalid() {
        assert_eq!(
            payload(Some("T"), Some("U"), Some(-1)).validate(),
            Err("likes must be non-negative")
        );
        assert_eq!(
            UpdateLikesRequest { likes: Some(-5) }.validate(),
            Err("likes must be non-negative")
        );
    }

    #[test]
    fn likes_update_requires_the_field() {
        assert_eq!(
            UpdateLikesRequest { likes: None }.validate(),
            Err("likes is required")
        );
        assert_eq!(UpdateLikesRequest { likes: Some(3) }.validate(), Ok(3));
    }
}
