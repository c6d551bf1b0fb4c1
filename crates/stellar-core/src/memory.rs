// In-memory event source for examples and testing
//
// Returns a fixed batch for every month and a fixed narrative for every
// event, and keeps a log of the list calls it served.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::event::Event;
use crate::source::{EventSource, EMPTY_BRIEFING_FALLBACK};

/// Event source backed by a fixed in-memory batch
#[derive(Debug, Default, Clone)]
pub struct StaticEventSource {
    events: Vec<Event>,
    briefing: String,
    list_calls: Arc<RwLock<Vec<(u32, i32)>>>,
}

impl StaticEventSource {
    /// Create a source that serves the given batch for every month
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            briefing: String::new(),
            list_calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the narrative served for every deep dive
    pub fn with_briefing(mut self, briefing: impl Into<String>) -> Self {
        self.briefing = briefing.into();
        self
    }

    /// The (month, year) pairs this source has been asked for
    pub async fn list_calls(&self) -> Vec<(u32, i32)> {
        self.list_calls.read().await.clone()
    }
}

#[async_trait]
impl EventSource for StaticEventSource {
    async fn list_events(&self, month: u32, year: i32) -> Vec<Event> {
        self.list_calls.write().await.push((month, year));
        self.events.clone()
    }

    async fn deep_dive(&self, _event: &Event) -> String {
        if self.briefing.is_empty() {
            EMPTY_BRIEFING_FALLBACK.to_string()
        } else {
            self.briefing.clone()
        }
    }
}
