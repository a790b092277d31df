//! Handlers for the `back` aggregator.
//!
//! - [`lookups`] -- read-through queries to the registries.
//! - [`permits`] -- permit fee quote and issuance.
//! - [`portal`] -- owners' saved vehicles and paid permits.
//! - [`logs`] -- append-only audit logs from the front ends.
//! - [`admin`] -- dashboard login and metrics.
//! - [`chatbot`] -- Gemini-backed assistant.

pub mod admin;
pub mod chatbot;
pub mod logs;
pub mod lookups;
pub mod permits;
pub mod portal;
