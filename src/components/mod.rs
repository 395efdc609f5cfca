//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render guards, dashboard tiles, and notifications while
//! reading shared state from Leptos context providers.

pub mod alert_banner;
pub mod control_toggle;
pub mod route_guard;
pub mod sensor_card;
pub mod toaster;
