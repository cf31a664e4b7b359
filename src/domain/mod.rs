//! Domain layer: business entities, caller identity, and repository traits.

pub mod auth;
pub mod entities;
pub mod repositories;
