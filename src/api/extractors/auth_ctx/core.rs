use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;

use super::AuthCtx;

/// Extractor handing the handler whatever identity the middleware resolved.
///
/// Infallible on purpose: identity is optional per route, and the
/// authorization guard (not the extractor) decides whether an absent
/// identity is acceptable for the operation at hand.
pub struct MaybeAuthCtx(pub Option<AuthCtx>);

impl FromRequestParts<AppState> for MaybeAuthCtx
where
    AppState: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthCtx(parts.extensions.get::<AuthCtx>().cloned()))
    }
}
