// Stellar Core
//
// Transport-agnostic heart of the Stellar event concierge: the domain types,
// the upstream-payload decode, the filter/sort view-model, the calendar
// controller state machine, and the detail panel.
//
// Key design decisions:
// - The gateway sits behind the EventSource trait so the controller and the
//   tests never depend on a live service
// - Controller transitions are a pure reducer over an explicit CalendarState,
//   with a generation counter so a superseded fetch is dropped instead of
//   racing the current one
// - Upstream payloads are validated and defaulted once at decode time; every
//   Event past that point is complete
// - Failures fold to inert values at the source boundary (empty list,
//   placeholder narrative) - the user-visible surface stays quiet

pub mod briefing;
pub mod calendar;
pub mod decode;
pub mod error;
pub mod event;
pub mod filter;
pub mod images;
pub mod source;

// In-memory implementations for examples and testing
pub mod memory;

// Re-exports for convenience
pub use briefing::{BriefingPanel, BriefingPhase, SubscriptionForm, SUBSCRIBE_DELAY};
pub use calendar::{
    apply, CalendarAction, CalendarState, Controller, LoadPhase, MonthCursor,
};
pub use decode::decode_events;
pub use error::{Result, StellarError};
pub use event::{Event, EventMetadata, EventType, Host};
pub use filter::{visible_events, CategoryFilter};
pub use memory::StaticEventSource;
pub use source::{EventSource, EMPTY_BRIEFING_FALLBACK, FAILED_BRIEFING_FALLBACK};
