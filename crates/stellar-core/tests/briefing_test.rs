// Detail panel tests: narrative lifecycle, fallback sentinels, and the mock
// subscription flow

use async_trait::async_trait;

use stellar_core::{
    BriefingPanel, Event, EventMetadata, EventSource, EventType, Host, StaticEventSource,
    SubscriptionForm, EMPTY_BRIEFING_FALLBACK, SUBSCRIBE_DELAY,
};

fn event(id: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        date: "2025-06-14T21:00:00Z".to_string(),
        kind: EventType::Phenomenon,
        description: "beamed radiation".to_string(),
        location: Some("Vela Sector".to_string()),
        agency: None,
        host: Host {
            name: "Dr. Iris Vale".to_string(),
            bio: "High-Energy Spectral Analysis".to_string(),
            avatar_id: "1472099645785-5658abf4ff4e".to_string(),
            is_superhost: true,
            reviews_count: 120,
            rating: 4.9,
            years_experience: 10,
        },
        metadata: EventMetadata {
            rarity: 4.5,
            visibility: "Championship Grade".to_string(),
            photo_id: "1446776811953-b23d57bd21aa".to_string(),
            search_keyword: None,
        },
    }
}

/// Source whose deep dive violates the non-empty contract, for exercising
/// the panel's own guard
struct BlankSource;

#[async_trait]
impl EventSource for BlankSource {
    async fn list_events(&self, _month: u32, _year: i32) -> Vec<Event> {
        Vec::new()
    }

    async fn deep_dive(&self, _event: &Event) -> String {
        "   ".to_string()
    }
}

#[tokio::test]
async fn a_panel_starts_loading_and_lands_ready_with_the_narrative() {
    let source = StaticEventSource::new(Vec::new()).with_briefing("Coordinates locked.");

    let mut panel = BriefingPanel::begin(event("a"));
    assert!(panel.is_loading());
    assert_eq!(panel.narrative(), None);

    panel.resolve(&source).await;
    assert!(!panel.is_loading());
    assert_eq!(panel.narrative(), Some("Coordinates locked."));
}

#[tokio::test]
async fn a_blank_narrative_is_replaced_by_the_severed_sentinel() {
    let panel = BriefingPanel::open(event("a"), &BlankSource).await;
    assert_eq!(panel.narrative(), Some(EMPTY_BRIEFING_FALLBACK));
}

#[tokio::test]
async fn opening_a_new_event_discards_the_previous_form_state() {
    let source = StaticEventSource::new(Vec::new()).with_briefing("n");

    let mut panel = BriefingPanel::open(event("a"), &source).await;
    panel.form.submit("scout@stellar.team").await;
    assert!(panel.form.subscribed);

    let panel = BriefingPanel::open(event("b"), &source).await;
    assert!(!panel.form.subscribed);
    assert!(panel.form.email.is_empty());
}

#[tokio::test(start_paused = true)]
async fn submission_waits_out_the_confirmation_delay() {
    let start = tokio::time::Instant::now();
    let mut form = SubscriptionForm::default();

    assert!(form.submit("scout@stellar.team").await);

    assert!(form.subscribed);
    assert_eq!(form.email, "scout@stellar.team");
    assert_eq!(start.elapsed(), SUBSCRIBE_DELAY);
}

#[tokio::test(start_paused = true)]
async fn an_empty_email_is_rejected_without_waiting() {
    let start = tokio::time::Instant::now();
    let mut form = SubscriptionForm::default();

    assert!(!form.submit("   ").await);

    assert!(!form.subscribed);
    assert!(form.email.is_empty());
    assert_eq!(start.elapsed().as_millis(), 0);
}
