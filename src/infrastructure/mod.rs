//! Infrastructure layer: database and external integrations.

pub mod media;
pub mod persistence;
