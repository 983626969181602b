/**
 * Responsibility
 *  - Declare the per-resource "meaningful id" types
 *  - Tag types + aliases only; no decode logic, no extractor impl
 */
use super::core::PublicId;

// blogs
pub enum BlogTag {}
pub type PublicBlogId = PublicId<BlogTag>;
