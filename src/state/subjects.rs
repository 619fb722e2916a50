#[cfg(test)]
#[path = "subjects_test.rs"]
mod subjects_test;

use crate::net::types::{SubjectStatus, SubjectStatusPage};

/// Page-level holder for the moderation queue.
///
/// The table renders whatever ordered sequence it is handed; this state
/// owns pagination. Load-more appends a fresh page rather than mutating
/// rows in place, so render order always matches fetch order.
#[derive(Clone, Debug, Default)]
pub struct SubjectListState {
    pub items: Vec<SubjectStatus>,
    pub cursor: Option<String>,
    /// True only while the first page for the current term/sort is in
    /// flight: drives the table's loading row.
    pub initial_loading: bool,
    /// True while a load-more fetch is in flight.
    pub load_pending: bool,
}

impl SubjectListState {
    /// Drop current rows and mark the first page as in flight. Called
    /// whenever the term or sort parameters change.
    pub fn begin_reload(&mut self) {
        self.items.clear();
        self.cursor = None;
        self.initial_loading = true;
        self.load_pending = false;
    }

    /// Install the first page for the current parameters.
    pub fn apply_page(&mut self, page: SubjectStatusPage) {
        self.items = page.subject_statuses;
        self.cursor = page.cursor;
        self.initial_loading = false;
    }

    /// Append a load-more page, preserving existing row order.
    pub fn apply_more(&mut self, page: SubjectStatusPage) {
        self.items.extend(page.subject_statuses);
        self.cursor = page.cursor;
        self.load_pending = false;
    }

    /// The initial fetch failed or returned nothing; settle into the
    /// empty state instead of spinning forever.
    pub fn finish_without_page(&mut self) {
        self.initial_loading = false;
        self.load_pending = false;
    }

    /// Whether the load-more trigger should render.
    pub fn show_load_more(&self) -> bool {
        self.cursor.is_some() && !self.initial_loading
    }
}
