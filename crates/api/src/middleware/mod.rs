//! Request extractors for the dashboard endpoints of `back`.

pub mod auth;
