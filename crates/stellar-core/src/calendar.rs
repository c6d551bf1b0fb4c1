// Calendar controller
//
// The owned state record for one browsing session and its transitions. The
// reducer is a pure function so fetch supersession is reproducible in tests;
// `Controller` wires it to an `EventSource` for the async fetch cycle.
//
// Supersession rule: every month change bumps `generation`, and a completed
// fetch is applied only if its generation still matches - the most recent
// request wins, a superseded response is dropped.

use crate::event::Event;
use crate::filter::{visible_events, CategoryFilter};
use crate::source::EventSource;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based month index plus year. Neither field is range-validated; the
/// shift arithmetic wraps across year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthCursor {
    pub month: u32,
    pub year: i32,
}

impl MonthCursor {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// The cursor `delta` months away
    pub fn shifted(&self, delta: i32) -> Self {
        let total = self.year * 12 + self.month as i32 + delta;
        Self {
            month: total.rem_euclid(12) as u32,
            year: total.div_euclid(12),
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month % 12) as usize]
    }
}

impl std::fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Fetch lifecycle of the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Everything a browsing session owns: the month cursor, the fetched list,
/// the load phase, the selection, and the filter inputs.
///
/// The list is replaced wholesale when a month fetch completes; entries are
/// never mutated in place and never outlive their fetch. The selection holds
/// its own copy of the chosen event, so it survives the replacement (the
/// detail view keeps showing what was opened).
#[derive(Debug, Clone, Default)]
pub struct CalendarState {
    pub cursor: MonthCursor,
    pub phase: LoadPhase,
    pub events: Vec<Event>,
    pub selected: Option<Event>,
    pub query: String,
    pub category: CategoryFilter,
    pub generation: u64,
}

impl CalendarState {
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// The visible subset under the current query and category
    pub fn visible(&self) -> Vec<&Event> {
        visible_events(&self.events, &self.query, self.category)
    }
}

/// State transitions
#[derive(Debug, Clone)]
pub enum CalendarAction {
    /// Move the cursor by a number of months and start a new fetch cycle
    ShiftMonth(i32),
    /// A fetch resolved; applied only when `generation` is still current
    EventsLoaded { generation: u64, events: Vec<Event> },
    Select(Event),
    ClearSelection,
    SetQuery(String),
    SetCategory(CategoryFilter),
}

/// Apply one action to the state.
///
/// Entering Loading keeps the previous list on screen until the replacement
/// arrives. A completed fetch always lands in Ready whether the list is full
/// or empty - failures were already folded to an empty list at the source.
pub fn apply(state: CalendarState, action: CalendarAction) -> CalendarState {
    match action {
        CalendarAction::ShiftMonth(delta) => CalendarState {
            cursor: state.cursor.shifted(delta),
            phase: LoadPhase::Loading,
            generation: state.generation + 1,
            ..state
        },
        CalendarAction::EventsLoaded { generation, events } => {
            if generation != state.generation {
                return state;
            }
            CalendarState {
                phase: LoadPhase::Ready,
                events,
                ..state
            }
        }
        CalendarAction::Select(event) => CalendarState {
            selected: Some(event),
            ..state
        },
        CalendarAction::ClearSelection => CalendarState {
            selected: None,
            ..state
        },
        CalendarAction::SetQuery(query) => CalendarState { query, ..state },
        CalendarAction::SetCategory(category) => CalendarState { category, ..state },
    }
}

/// Drives the reducer against an `EventSource`
pub struct Controller<S: EventSource> {
    state: CalendarState,
    source: S,
}

impl<S: EventSource> Controller<S> {
    pub fn new(source: S, cursor: MonthCursor) -> Self {
        Self {
            state: CalendarState::new(cursor),
            source,
        }
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The visible subset under the current filters
    pub fn visible(&self) -> Vec<&Event> {
        self.state.visible()
    }

    pub fn dispatch(&mut self, action: CalendarAction) {
        let state = std::mem::take(&mut self.state);
        self.state = apply(state, action);
    }

    /// Fetch the current month without moving the cursor
    pub async fn refresh(&mut self) {
        self.shift_month(0).await;
    }

    /// Move the cursor and run the fetch cycle for the new month
    pub async fn shift_month(&mut self, delta: i32) {
        self.dispatch(CalendarAction::ShiftMonth(delta));
        let generation = self.state.generation;
        let cursor = self.state.cursor;
        let events = self.source.list_events(cursor.month, cursor.year).await;
        self.dispatch(CalendarAction::EventsLoaded { generation, events });
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(CalendarAction::SetQuery(query.into()));
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.dispatch(CalendarAction::SetCategory(category));
    }

    /// Select an event from the current list by id
    ///
    /// Returns the selected event's own copy, or `None` when no event in the
    /// fetched list carries the id.
    pub fn select(&mut self, id: &str) -> Option<Event> {
        let event = self.state.events.iter().find(|e| e.id == id).cloned()?;
        self.dispatch(CalendarAction::Select(event.clone()));
        Some(event)
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(CalendarAction::ClearSelection);
    }
}
