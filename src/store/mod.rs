//! Client-side persistence.
//!
//! DESIGN
//! ======
//! `kv` abstracts the raw string storage so `session_store` can be exercised
//! against an in-memory backend in tests and against localStorage in the
//! browser.

pub mod kv;
pub mod session_store;
