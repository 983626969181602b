/*
 * Responsibility
 * - /users registration and listing
 * - Registration validates the payload, hashes the password, and lets the
 *   unique index report duplicate usernames (RepoError::Conflict -> 400)
 * - The listing expands each principal's owned blogs to a small projection
 */
use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    api::dto::users::{CreateUserRequest, OwnedBlog, UserResponse},
    error::AppError,
    repos::{blog_repo, user_repo},
    services::auth::password,
    state::AppState,
};

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate().map_err(AppError::validation)?;
    let (Some(username), Some(name), Some(password_plain)) =
        (&req.username, &req.name, &req.password)
    else {
        return Err(AppError::validation("invalid payload"));
    };

    let password_hash = password::hash_password(password_plain)?;

    let row = user_repo::create(&state.db, username, name, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: row.id,
            username: row.username,
            name: row.name,
            blogs: Vec::new(),
        }),
    ))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user_repo::list(&state.db).await?;
    let blogs = blog_repo::list(&state.db).await?;

    // group owned blogs by owner
    let mut owned: HashMap<Uuid, Vec<OwnedBlog>> = HashMap::new();
    for blog in blogs {
        let Some(owner_id) = blog.user_id else {
            continue;
        };
        let public_id = state.id_codec.encode(blog.blog_id).map_err(AppError::from)?;
        owned.entry(owner_id).or_default().push(OwnedBlog {
            id: public_id,
            url: blog.url,
            title: blog.title,
            author: blog.author,
        });
    }

    let res = users
        .into_iter()
        .map(|u| UserResponse {
            blogs: owned.remove(&u.id).unwrap_or_default(),
            id: u.id,
            username: u.username,
            name: u.name,
        })
        .collect();

    Ok(Json(res))
}
