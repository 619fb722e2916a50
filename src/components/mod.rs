//! View components, one file per component.

pub mod icons;
pub mod load_more;
pub mod loader;
pub mod mobile_menu;
pub mod profile_menu;
pub mod review_state_icon;
pub mod shell;
pub mod sidebar_nav;
pub mod subject_overview;
pub mod subject_table;
