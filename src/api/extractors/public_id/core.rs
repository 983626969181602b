/*
 * Responsibility
 * - Take the path String as a public id and decode it to the internal id
 * - A public id that fails to decode is MALFORMED_ID (400) -- a different
 *   failure than a well-formed id with no matching row (404)
 * - Generic over a resource tag so every resource shares one implementation
 */
use std::marker::PhantomData;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Clone, Copy)]
pub struct PublicId<T> {
    pub id: i64,
    _marker: PhantomData<T>,
}

impl<T> PublicId<T> {
    fn new(id: i64) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }
}

impl<T> FromRequestParts<AppState> for PublicId<T>
where
    T: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(public_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("MALFORMED_ID", "malformatted id"))?;
        let id = state.id_codec.decode(&public_id).map_err(AppError::from)?;
        Ok(Self::new(id))
    }
}

impl<T> std::fmt::Debug for PublicId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicId").field("id", &self.id).finish()
    }
}
