//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` mirrors the stored identity into a signal; `notify` owns the
//! banner and toast surfaces.

pub mod notify;
pub mod session;
