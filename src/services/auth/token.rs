//! Credential verification and token issuing (HS256).
//!
//! One `AuthService` holds both directions: this service signs the tokens it
//! later verifies, using a single server-held secret handed in at
//! construction. The algorithm is pinned in `Validation`, so a token signed
//! with anything other than HS256 under our secret never verifies.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt};
use uuid::Uuid;

use crate::error::AppError;

/// Claims carried by a login token.
///
/// No `exp`: tokens do not expire in this design (revocation/refresh is an
/// explicit non-goal).
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    id: Uuid,
    username: String,
    iat: i64,
}

/// Verified, application-facing identity claim.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub user_id: Uuid,
    pub username: String,
}

/// Errors returned by token verification.
///
/// An explicit result type by design: a failed verification is a distinct
/// outcome, never a falsy value.
#[derive(Debug)]
pub enum TokenError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for TokenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// HS256 token signer/verifier.
///
/// - Key material is intentionally not printable via Debug.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp; do not demand one.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for an authenticated principal.
    pub fn sign(&self, user_id: Uuid, username: &str) -> Result<String, AppError> {
        let claims = TokenClaims {
            id: user_id,
            username: username.to_string(),
            iat: chrono::Utc::now().timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign token");
            AppError::Internal
        })
    }

    /// Verify signature + structure, then convert the claims into the
    /// application-facing type. The recommended entry point for middleware.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        let data =
            jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;

        let claims = data.claims;
        if claims.username.trim().is_empty() {
            return Err(TokenError::EmptyClaim("username"));
        }

        Ok(VerifiedToken {
            user_id: claims.id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_round_trip() {
        let auth = AuthService::new("sekret");
        let user_id = Uuid::new_v4();

        let token = auth.sign(user_id, "root").expect("sign");
        let verified = auth.verify(&token).expect("verify");

        assert_eq!(verified.user_id, user_id);
        assert_eq!(verified.username, "root");
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let ours = AuthService::new("sekret");
        let theirs = AuthService::new("other-secret");

        let token = theirs.sign(Uuid::new_v4(), "root").expect("sign");
        assert!(matches!(ours.verify(&token), Err(TokenError::Jwt(_))));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let auth = AuthService::new("sekret");
        let mut token = auth.sign(Uuid::new_v4(), "root").expect("sign");

        // flip a character in the payload segment
        let dot = token.find('.').expect("jwt has segments") + 1;
        let original = token.as_bytes()[dot];
        let replacement = if original == b'A' { 'B' } else { 'A' };
        token.replace_range(dot..dot + 1, &replacement.to_string());

        assert!(auth.verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let auth = AuthService::new("sekret");
        assert!(matches!(
            auth.verify("not-a-token"),
            Err(TokenError::Jwt(_))
        ));
    }

    #[test]
    fn empty_username_claim_is_rejected() {
        let auth = AuthService::new("sekret");
        let claims = TokenClaims {
            id: Uuid::new_v4(),
            username: "  ".to_string(),
            iat: chrono::Utc::now().timestamp(),
        };
        let token =
            jsonwebtoken::encode(&Header::default(), &claims, &auth.encoding_key).expect("encode");

        assert!(matches!(
            auth.verify(&token),
            Err(TokenError::EmptyClaim("username"))
        ));
    }
}
