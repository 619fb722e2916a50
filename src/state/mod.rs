//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `menu`, `sort`, etc.) so individual
//! components can depend on small focused models. Everything here is plain
//! Rust — components wrap these in `RwSignal`s provided via context — which
//! keeps the transition logic unit-testable on the host.

pub mod menu;
pub mod nav;
pub mod session;
pub mod sort;
pub mod subjects;
pub mod ui;
