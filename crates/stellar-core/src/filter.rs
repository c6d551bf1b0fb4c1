// Filter/sort view-model
//
// Derives the visible subset of a fetched month from the free-text query and
// the category selector. Pure function of its inputs; recomputed by callers
// whenever any input changes.

use crate::event::{Event, EventType};

/// Category selector: everything, or one specific event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventType),
}

impl CategoryFilter {
    /// Whether an event of the given type passes the selector
    pub fn admits(&self, kind: EventType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == kind,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(kind) => kind.fmt(f),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<EventType>().map(CategoryFilter::Only)
    }
}

/// Compute the visible subset and order of `events`.
///
/// An event is visible when the query is a case-insensitive substring of its
/// title, description, or location (an absent location never matches; the
/// empty query matches everything) AND the category selector admits its type.
/// The result is ordered ascending by parsed date; entries whose date does
/// not parse sort after all parseable ones, keeping their relative order.
pub fn visible_events<'a>(
    events: &'a [Event],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Event> {
    let needle = query.to_lowercase();

    let mut visible: Vec<&Event> = events
        .iter()
        .filter(|event| matches_query(event, &needle) && category.admits(event.kind))
        .collect();

    visible.sort_by(|a, b| match (a.occurs_at(), b.occurs_at()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    visible
}

fn matches_query(event: &Event, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    event.title.to_lowercase().contains(needle)
        || event.description.to_lowercase().contains(needle)
        || event
            .location
            .as_ref()
            .is_some_and(|location| location.to_lowercase().contains(needle))
}
