/*
 * Responsibility
 * - Public interface for the middleware layers (re-export)
 */
pub mod auth;
pub mod cors;
pub mod http;
