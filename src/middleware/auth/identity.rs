//! Identity pipeline: extract bearer token -> verify -> resolve principal ->
//! attach `AuthCtx` to the request extensions.
//!
//! The stages run strictly in that order, once per request. The pipeline
//! never rejects a request on its own: a missing, unverifiable, or unknown
//! credential simply means no `AuthCtx` is attached, and the authorization
//! guard decides per operation whether that is acceptable. Only a store
//! failure during resolution aborts the request (500).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::auth_ctx::AuthCtx;
use crate::error::AppError;
use crate::repos::user_repo;
use crate::state::AppState;

/// Apply the identity pipeline to a router (typically the `/api` subtree).
///
/// Example:
/// ```ignore
/// let api = middleware::auth::identity::apply(api::routes(), state.clone());
/// app = app.nest("/api", api);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // from_fn cannot take a State extractor in axum 0.8; pass state explicitly
    router.layer(middleware::from_fn_with_state(state, identity_middleware))
}

/// Credential extractor: pull the bearer token out of the Authorization
/// header. The scheme label is matched case-insensitively; the token itself
/// is returned verbatim. Absence is a normal outcome, not an error.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_at_checked(7)?;
    if !scheme.eq_ignore_ascii_case("bearer ") {
        return None;
    }
    Some(token)
}

async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(token) = extract_bearer(req.headers()) {
        match state.auth.verify(token) {
            Ok(verified) => {
                // Resolve the principal; a claim pointing at no stored user
                // is the same as an unverifiable credential downstream.
                match user_repo::get(&state.db, verified.user_id).await {
                    Ok(Some(user)) => {
                        req.extensions_mut()
                            .insert(AuthCtx::new(user.id, user.username));
                    }
                    Ok(None) => {
                        tracing::warn!(
                            user_id = %verified.user_id,
                            username = %verified.username,
                            "token for unknown principal"
                        );
                    }
                    Err(e) => {
                        return Err(AppError::from(e));
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "token verification failed");
            }
        }
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn scheme_label_is_case_insensitive() {
        for scheme in ["bearer", "Bearer", "BEARER", "BeArEr"] {
            let headers = headers_with(&format!("{scheme} abc.def.ghi"));
            assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
        }
    }

    #[test]
    fn token_case_is_preserved() {
        let headers = headers_with("bearer MixedCase");
        assert_eq!(extract_bearer(&headers), Some("MixedCase"));
    }

    #[test]
    fn missing_header_is_absent() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn other_schemes_are_absent() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn bare_scheme_without_token_is_absent() {
        assert_eq!(extract_bearer(&headers_with("bearer")), None);
        assert_eq!(extract_bearer(&headers_with("bear")), None);
    }
}
