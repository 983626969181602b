/*
 * Responsibility
 * - URL structure under /api
 * - /blogs, /users, /login; the identity middleware is layered over this
 *   router in app.rs, so every route sees the (optional) AuthCtx
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{
    blogs::{create_blog, delete_blog, get_blog, list_blogs, update_likes},
    login::login,
    users::{create_user, list_users},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route(
            "/blogs/{blog_id}",
            get(get_blog).put(update_likes).delete(delete_blog),
        )
        .route("/login", post(login))
        .route("/users", get(list_users).post(create_user))
}
