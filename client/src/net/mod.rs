//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls; the wire types and path builders live in the
//! `adoptocare` crate so they are tested natively.

pub mod api;
