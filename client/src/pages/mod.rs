//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data loading and form state and delegates shared chrome
//! (sidebar, notifications, guards) to `components`.

pub mod announcements;
pub mod appointments;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod pets;
