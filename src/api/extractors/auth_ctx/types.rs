/*
 * Responsibility
 * - The "authenticated context" type as seen by handlers
 * - The identity middleware verifies + resolves and stores this in request
 *   extensions; handlers only ever see this type
 *
 * Notes
 * - Token verification and principal lookup are the middleware/services
 *   side's responsibility; this is the contract type only
 */

use uuid::Uuid;

/// Identity attached to a request whose full pipeline
/// (extract -> verify -> resolve) succeeded.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: Uuid,
    pub username: String,
}

impl AuthCtx {
    pub fn new(user_id: Uuid, username: String) -> Self {
        Self { user_id, username }
    }
}
