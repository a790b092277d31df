//! Request handlers, one module per service.

pub mod aach;
pub mod back;
pub mod carabineros;
pub mod mtt;
pub mod prt;
pub mod sgd;
pub mod sii;
pub mod srcei;
pub mod tgr;
