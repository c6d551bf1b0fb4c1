// EventSource trait
//
// The seam between the controller and whatever produces events. Both
// operations are fail-soft: the controller never observes an error value,
// only a possibly-empty list or a placeholder narrative. Providers log the
// swallowed cause for diagnostics.

use async_trait::async_trait;

use crate::event::Event;

/// Placeholder narrative when the service answers with no text at all
pub const EMPTY_BRIEFING_FALLBACK: &str = "Telemetry link severed.";

/// Placeholder narrative when the briefing request fails outright
pub const FAILED_BRIEFING_FALLBACK: &str = "Error retrieving data stream.";

/// A producer of calendar events and per-event narratives
#[async_trait]
pub trait EventSource: Send + Sync {
    /// List the events of one month.
    ///
    /// `month` is a zero-based index; neither it nor `year` is range-checked.
    /// Any failure resolves to an empty list, never an error.
    async fn list_events(&self, month: u32, year: i32) -> Vec<Event>;

    /// Produce the long-form narrative for one event.
    ///
    /// Always resolves to a non-empty string: real content, or one of the two
    /// fallback sentinels above.
    async fn deep_dive(&self, event: &Event) -> String;
}
