//! Wire types and HTTP helpers for the moderation backend.

pub mod api;
pub mod types;
