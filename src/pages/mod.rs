//! Route views.

pub mod configure;
pub mod queue;
