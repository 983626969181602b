/*
 * Responsibility
 * - /blogs CRUD handlers
 * - The path {blog_id} is a public id; the extractor decodes it to the
 *   internal id (malformed -> 400 before the handler runs)
 * - Mutations consult the authorization guard before touching the store;
 *   the likes-only PUT is deliberately unauthenticated
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::blogs::{BlogOwner, BlogResponse, CreateBlogRequest, UpdateLikesRequest},
        extractors::{auth_ctx::MaybeAuthCtx, public_id::PublicBlogId},
    },
    error::AppError,
    repos::{blog_repo, user_repo},
    services::auth::guard::{self, Decision, DeleteDecision},
    state::AppState,
};

fn row_to_response(
    state: &AppState,
    row: blog_repo::BlogWithOwnerRow,
) -> Result<BlogResponse, AppError> {
    let public_id = state.id_codec.encode(row.blog_id).map_err(AppError::from)?;

    let user = match (row.user_id, row.owner_username) {
        (Some(id), Some(username)) => Some(BlogOwner { id, username }),
        _ => None,
    };

    Ok(BlogResponse {
        id: public_id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user,
    })
}

pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let rows = blog_repo::list(&state.db).await?;

    let mut res = Vec::with_capacity(rows.len());
    for row in rows {
        res.push(row_to_response(&state, row)?);
    }

    Ok(Json(res))
}

pub async fn get_blog(
    State(state): State<AppState>,
    blog_id: PublicBlogId,
) -> Result<Json<BlogResponse>, AppError> {
    let row = blog_repo::get(&state.db, blog_id.id)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    Ok(Json(row_to_response(&state, row)?))
}

pub async fn create_blog(
    State(state): State<AppState>,
    MaybeAuthCtx(ctx): MaybeAuthCtx,
    Json(req): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    // guard first: an unauthenticated create is 401 regardless of payload
    let ctx = match guard::authorize_create(ctx.as_ref()) {
        Decision::Allow => ctx.ok_or(AppError::Unauthenticated)?,
        Decision::Deny(reason) => return Err(reason.into()),
    };

    req.validate().map_err(AppError::validation)?;
    let (Some(title), Some(url)) = (&req.title, &req.url) else {
        return Err(AppError::validation("invalid payload"));
    };

    let row = blog_repo::create(
        &state.db,
        title,
        req.author.as_deref(),
        url,
        req.likes_or_default(),
        ctx.user_id,
    )
    .await?;

    let public_id = state.id_codec.encode(row.blog_id).map_err(AppError::from)?;
    let res = BlogResponse {
        id: public_id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user: Some(BlogOwner {
            id: ctx.user_id,
            username: ctx.username,
        }),
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_likes(
    State(state): State<AppState>,
    blog_id: PublicBlogId,
    Json(req): Json<UpdateLikesRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    let likes = req.validate().map_err(AppError::validation)?;

    let row = blog_repo::update_likes(&state.db, blog_id.id, likes)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    let user = match row.user_id {
        Some(owner_id) => user_repo::get(&state.db, owner_id).await?.map(|u| BlogOwner {
            id: u.id,
            username: u.username,
        }),
        None => None,
    };

    let public_id = state.id_codec.encode(row.blog_id).map_err(AppError::from)?;
    Ok(Json(BlogResponse {
        id: public_id,
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        user,
    }))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    MaybeAuthCtx(ctx): MaybeAuthCtx,
    blog_id: PublicBlogId,
) -> Result<StatusCode, AppError> {
    let target_owner = blog_repo::get(&state.db, blog_id.id)
        .await?
        .map(|row| row.user_id);

    match guard::authorize_delete(ctx.as_ref(), target_owner) {
        DeleteDecision::Allow => {
            blog_repo::delete(&state.db, blog_id.id).await?;
            Ok(StatusCode::NO_CONTENT)
        }
        // already gone: idempotent success
        DeleteDecision::NoOp => Ok(StatusCode::NO_CONTENT),
        DeleteDecision::Deny(reason) => Err(reason.into()),
    }
}
