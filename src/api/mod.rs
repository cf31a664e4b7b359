//! API layer: REST handlers, DTOs, middleware, and routes.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
