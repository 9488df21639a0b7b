//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome (navbar, sidebar, notification surfaces)
//! and the route guard, reading shared state from Leptos context providers.

pub mod alert_banner;
pub mod navbar;
pub mod protected;
pub mod sidebar;
pub mod toast_stack;
