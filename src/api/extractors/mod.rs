pub mod auth_ctx;
pub mod public_id;
