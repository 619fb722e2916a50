#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::query;

pub const SORT_FIELD_KEY: &str = "sortField";
pub const SORT_DIRECTION_KEY: &str = "sortDirection";

/// Sort direction carried in the `sortDirection` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse the query-parameter value. Anything but the two known tokens
    /// is treated as absent, which renders no sort indicator.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort state derived from the current URL. Pure value type: building one
/// never touches the document, so it is safe to construct during render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOrder {
    pathname: String,
    pairs: Vec<(String, String)>,
    pub field: Option<String>,
    pub direction: Option<SortDirection>,
}

impl SortOrder {
    /// Derive sort state from a pathname and a raw query string
    /// (with or without the leading `?`).
    pub fn from_parts(pathname: &str, search: &str) -> Self {
        let pairs = query::parse_raw(search);
        let field = pairs
            .iter()
            .find(|(k, _)| k == SORT_FIELD_KEY)
            .map(|(_, v)| v.clone());
        let direction = pairs
            .iter()
            .find(|(k, _)| k == SORT_DIRECTION_KEY)
            .and_then(|(_, v)| SortDirection::parse(v));
        Self {
            pathname: pathname.to_owned(),
            pairs,
            field,
            direction,
        }
    }

    /// Whether the header for `field` should show a direction indicator.
    pub fn indicator_for(&self, field: &str) -> Option<SortDirection> {
        if self.field.as_deref() == Some(field) {
            self.direction
        } else {
            None
        }
    }

    /// Build the href for a column header: same URL, `sortDirection`
    /// flipped (`asc` -> `desc`, anything else -> `asc`) and `sortField`
    /// set to `field`. All other query parameters pass through untouched.
    ///
    /// Deliberately does not compare `field` against the current sort
    /// field, so clicking a different column inherits the flipped
    /// direction instead of resetting to a default. That reproduces the
    /// shipped behavior the queue pages rely on.
    pub fn toggle_reverse_order_link(&self, field: &str) -> String {
        let next = match self.direction {
            Some(SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        let mut pairs = self.pairs.clone();
        query::set_raw(&mut pairs, SORT_DIRECTION_KEY, next.as_str());
        query::set_raw(&mut pairs, SORT_FIELD_KEY, field);
        format!("{}?{}", self.pathname, query::build_raw(&pairs))
    }
}

/// Reactive wrapper deriving [`SortOrder`] from the router location.
pub fn use_sort_order() -> Memo<SortOrder> {
    let location = use_location();
    Memo::new(move |_| SortOrder::from_parts(&location.pathname.get(), &location.search.get()))
}
