/*!
 * Authenticated request context
 *
 * Responsibility:
 * - Provide handlers with the identity the middleware resolved (if any)
 * - HTTP / axum wiring stays in core; the type itself lives in types
 *
 * Public API:
 * - AuthCtx
 * - MaybeAuthCtx
 */

mod core;
mod types;

pub use core::MaybeAuthCtx;
pub use types::AuthCtx;
