//! Browser glue and small pure helpers shared across components.

pub mod dark_mode;
pub mod query;
pub mod relative_time;
