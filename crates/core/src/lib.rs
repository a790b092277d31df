//! Pure domain logic for the TU PERMISO services.
//!
//! Nothing in this crate performs I/O: validators, the permit fee schedule,
//! document validity rules and dashboard metric windows are all plain
//! functions so they can be unit tested without a database or network.

pub mod error;
pub mod metrics;
pub mod permit_fee;
pub mod ppu;
pub mod rut;
pub mod service;
pub mod types;
pub mod vigencia;
