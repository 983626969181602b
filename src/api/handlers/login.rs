/*
 * Responsibility
 * - POST /login: username+password -> signed bearer token
 * - Unknown username, wrong password, and an incomplete payload all answer
 *   with the same 401 (no hint which part was wrong)
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::login::{LoginRequest, LoginResponse},
    error::AppError,
    repos::user_repo,
    services::auth::password,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (Some(username), Some(pass)) = (req.username.as_deref(), req.password.as_deref()) else {
        return Err(AppError::InvalidCredentials);
    };

    let user = user_repo::find_by_username(&state.db, username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify_password(pass, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.auth.sign(user.id, &user.username)?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        display_name: user.name,
    }))
}
