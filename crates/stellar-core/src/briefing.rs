// Detail panel
//
// State for one opened event: the narrative fetch cycle and the local-only
// subscription form. Scoped to the lifetime of a selection - opening a
// different event builds a fresh panel, which is how the previous narrative
// and form state get discarded.

use std::time::Duration;

use crate::event::Event;
use crate::source::{EventSource, EMPTY_BRIEFING_FALLBACK};

/// The artificial confirmation delay of the mock subscription flow
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1200);

/// Narrative fetch lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BriefingPhase {
    Loading,
    /// Holds the narrative text, never empty: real content or one of the
    /// fallback sentinels.
    Ready(String),
}

/// The opened-event panel: narrative plus subscription form
#[derive(Debug, Clone)]
pub struct BriefingPanel {
    pub event: Event,
    pub phase: BriefingPhase,
    pub form: SubscriptionForm,
}

impl BriefingPanel {
    /// Start a panel in Loading with a cleared form
    pub fn begin(event: Event) -> Self {
        Self {
            event,
            phase: BriefingPhase::Loading,
            form: SubscriptionForm::default(),
        }
    }

    /// Fetch the narrative and move to Ready
    pub async fn resolve<S: EventSource + ?Sized>(&mut self, source: &S) {
        let text = source.deep_dive(&self.event).await;
        let text = if text.trim().is_empty() {
            EMPTY_BRIEFING_FALLBACK.to_string()
        } else {
            text
        };
        self.phase = BriefingPhase::Ready(text);
    }

    /// Begin and resolve in one step
    pub async fn open<S: EventSource + ?Sized>(event: Event, source: &S) -> Self {
        let mut panel = Self::begin(event);
        panel.resolve(source).await;
        panel
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, BriefingPhase::Loading)
    }

    /// The narrative text once Ready
    pub fn narrative(&self) -> Option<&str> {
        match &self.phase {
            BriefingPhase::Loading => None,
            BriefingPhase::Ready(text) => Some(text),
        }
    }
}

/// Local-only subscription form. Never persisted, never sent anywhere;
/// submission only waits out the artificial delay and flips the flag.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionForm {
    pub email: String,
    pub subscribed: bool,
}

impl SubscriptionForm {
    /// Submit the form. Rejects an empty email; otherwise records it,
    /// waits the confirmation delay, and marks the form subscribed.
    pub async fn submit(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() {
            return false;
        }

        self.email = email.to_string();
        tokio::time::sleep(SUBSCRIBE_DELAY).await;
        self.subscribed = true;
        true
    }
}
