//! TU PERMISO HTTP server library.
//!
//! One binary serves any of the nine services; [`config::ServerConfig::service`]
//! decides which routes are mounted. The building blocks live here so the
//! binary and the integration tests share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
