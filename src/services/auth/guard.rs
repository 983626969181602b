//! Authorization guard: per-operation policy decisions.
//!
//! Handlers hand in the (optional) authenticated context and, for delete,
//! what they found in the store; the guard returns an explicit decision.
//! Like-count updates never come through here: likes are a public counter
//! and a likes-only PUT bypasses authentication by design.

use uuid::Uuid;

use crate::api::extractors::auth_ctx::AuthCtx;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No usable identity (credential absent, unverifiable, or unknown).
    Unauthenticated,
    /// Identity present but the resource's recorded owner does not match
    /// (or the resource has no recorded owner).
    NotOwner,
}

impl From<DenyReason> for AppError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::Unauthenticated => AppError::Unauthenticated,
            DenyReason::NotOwner => AppError::Unauthorized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Allow,
    /// Target already gone: idempotent success, nothing to do.
    NoOp,
    Deny(DenyReason),
}

/// create: allowed only for a resolved principal.
pub fn authorize_create(principal: Option<&AuthCtx>) -> Decision {
    match principal {
        Some(_) => Decision::Allow,
        None => Decision::Deny(DenyReason::Unauthenticated),
    }
}

/// delete: requires a principal, and ownership when the target exists.
///
/// `target_owner` encodes what the store returned:
/// - `None`                -> target does not exist
/// - `Some(None)`          -> target exists with no recorded owner
/// - `Some(Some(user_id))` -> target exists, owned by `user_id`
///
/// Principal presence is checked before existence, so an unauthenticated
/// delete is denied even when the target is already gone.
pub fn authorize_delete(
    principal: Option<&AuthCtx>,
    target_owner: Option<Option<Uuid>>,
) -> DeleteDecision {
    let Some(principal) = principal else {
        return DeleteDecision::Deny(DenyReason::Unauthenticated);
    };

    match target_owner {
        None => DeleteDecision::NoOp,
        Some(Some(owner)) if owner == principal.user_id => DeleteDecision::Allow,
        // ownerless legacy rows and foreign rows look the same to the caller
        Some(_) => DeleteDecision::Deny(DenyReason::NotOwner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AuthCtx {
        AuthCtx::new(Uuid::new_v4(), "root".to_string())
    }

    #[test]
    fn create_requires_a_principal() {
        assert_eq!(
            authorize_create(None),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(authorize_create(Some(&ctx())), Decision::Allow);
    }

    #[test]
    fn delete_without_identity_is_denied_even_for_missing_targets() {
        assert_eq!(
            authorize_delete(None, Some(Some(Uuid::new_v4()))),
            DeleteDecision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            authorize_delete(None, None),
            DeleteDecision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn delete_of_missing_target_is_a_no_op() {
        assert_eq!(authorize_delete(Some(&ctx()), None), DeleteDecision::NoOp);
    }

    #[test]
    fn owner_may_delete() {
        let ctx = ctx();
        assert_eq!(
            authorize_delete(Some(&ctx), Some(Some(ctx.user_id))),
            DeleteDecision::Allow
        );
    }

    #[test]
    fn non_owner_is_denied() {
        let ctx = ctx();
        assert_eq!(
            authorize_delete(Some(&ctx), Some(Some(Uuid::new_v4()))),
            DeleteDecision::Deny(DenyReason::NotOwner)
        );
    }

    #[test]
    fn ownerless_target_is_denied() {
        assert_eq!(
            authorize_delete(Some(&ctx()), Some(None)),
            DeleteDecision::Deny(DenyReason::NotOwner)
        );
    }

    #[test]
    fn deny_reasons_classify_as_401() {
        assert!(matches!(
            AppError::from(DenyReason::Unauthenticated),
            AppError::Unauthenticated
        ));
        assert!(matches!(
            AppError::from(DenyReason::NotOwner),
            AppError::Unauthorized
        ));
    }
}
