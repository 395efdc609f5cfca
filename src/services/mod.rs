//! Application services that own side effects on client-side storage.
//!
//! ARCHITECTURE
//! ============
//! Services are plain synchronous Rust so they can be unit tested without a
//! browser. Reactive wrappers in `state` adapt them for the UI.

pub mod session;
