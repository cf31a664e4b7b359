//! Middleware for identity extraction and request tracing.

pub mod identity;
pub mod tracing;
