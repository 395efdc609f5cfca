//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `sensors`, `alerts`, `toast`) so
//! individual components can depend on small focused models.

pub mod alerts;
pub mod sensors;
pub mod session;
pub mod toast;
