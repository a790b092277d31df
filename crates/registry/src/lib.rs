//! HTTP clients used by the `back` aggregator.
//!
//! [`RegistryClients`] wraps one [`ServiceClient`] per downstream registry
//! (SRCEI, TGR, SII, ...) and exposes a typed method per endpoint the
//! aggregator consumes. [`GeminiClient`] talks to the Gemini
//! `generateContent` API for the chatbot.

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod registry;
pub mod types;

pub use client::ServiceClient;
pub use config::{DeployMode, GeminiConfig, UpstreamConfig};
pub use error::RegistryError;
pub use gemini::GeminiClient;
pub use registry::RegistryClients;
