// View-model tests: visibility predicates and ordering

use stellar_core::{visible_events, CategoryFilter, Event, EventMetadata, EventType, Host};

fn event(id: &str, title: &str, date: &str, kind: EventType, description: &str) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        kind,
        description: description.to_string(),
        location: None,
        agency: None,
        host: Host {
            name: "Dr. Iris Vale".to_string(),
            bio: "Chandra Legacy Data".to_string(),
            avatar_id: "1472099645785-5658abf4ff4e".to_string(),
            is_superhost: false,
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

fn located(mut e: Event, location: &str) -> Event {
    e.location = Some(location.to_string());
    e
}

#[test]
fn default_filters_show_the_full_list_in_date_order() {
    let events = vec![
        event("c", "Gamma Burst", "2025-06-20T04:00:00Z", EventType::Phenomenon, "burst"),
        event("a", "Transit", "2025-06-02T10:00:00Z", EventType::Planet, "transit"),
        event("b", "Occultation", "2025-06-14T21:00:00Z", EventType::Moon, "occultation"),
    ];

    let visible = visible_events(&events, "", CategoryFilter::All);

    let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn query_matching_is_case_insensitive_across_fields() {
    let events = vec![
        event("title", "Crab NEBULA Watch", "2025-06-01", EventType::Nebula, "x"),
        event("desc", "Evening Session", "2025-06-02", EventType::Station, "A dense Nebula core"),
        located(
            event("loc", "Deep Scan", "2025-06-03", EventType::Planet, "y"),
            "Nebula Rim Sector",
        ),
        event("none", "Lunar Pass", "2025-06-04", EventType::Moon, "quiet night"),
    ];

    for query in ["nebula", "NEBULA", "NeBuLa"] {
        let visible = visible_events(&events, query, CategoryFilter::All);
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["title", "desc", "loc"], "query {query:?}");
    }
}

#[test]
fn absent_location_never_matches() {
    let events = vec![event("a", "Scan", "2025-06-01", EventType::Planet, "routine")];

    let visible = visible_events(&events, "sector", CategoryFilter::All);
    assert!(visible.is_empty());
}

#[test]
fn category_selection_is_exact() {
    let mut events = Vec::new();
    for i in 0..3 {
        events.push(event(
            &format!("s{i}"),
            "Relay Station",
            &format!("2025-06-0{}", i + 1),
            EventType::Station,
            "orbital platform",
        ));
    }
    for i in 0..9 {
        events.push(event(
            &format!("o{i}"),
            "Other",
            &format!("2025-06-1{}", i),
            EventType::Nebula,
            "background",
        ));
    }

    let visible = visible_events(&events, "", CategoryFilter::Only(EventType::Station));

    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|e| e.kind == EventType::Station));
}

#[test]
fn both_predicates_must_pass() {
    let events = vec![
        event("a", "Station Alpha", "2025-06-01", EventType::Station, "x"),
        event("b", "Station Beta", "2025-06-02", EventType::Nebula, "x"),
    ];

    let visible = visible_events(&events, "station", CategoryFilter::Only(EventType::Station));
    let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn unparseable_dates_sort_after_parseable_ones() {
    let events = vec![
        event("bad1", "Unknown A", "whenever", EventType::Planet, "x"),
        event("late", "Late", "2025-06-30T23:00:00Z", EventType::Planet, "x"),
        event("bad2", "Unknown B", "", EventType::Planet, "x"),
        event("early", "Early", "2025-06-01T01:00:00Z", EventType::Planet, "x"),
    ];

    let visible = visible_events(&events, "", CategoryFilter::All);

    let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "late", "bad1", "bad2"]);
}

#[test]
fn derivation_is_idempotent() {
    let events = vec![
        event("a", "Transit", "2025-06-02", EventType::Planet, "transit"),
        event("b", "Occultation", "not-a-date", EventType::Moon, "occultation"),
    ];

    let first: Vec<String> = visible_events(&events, "t", CategoryFilter::All)
        .iter()
        .map(|e| e.id.clone())
        .collect();
    let second: Vec<String> = visible_events(&events, "t", CategoryFilter::All)
        .iter()
        .map(|e| e.id.clone())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn bare_dates_and_timestamps_order_together() {
    let events = vec![
        event("b", "Midday", "2025-06-02T12:00:00Z", EventType::Planet, "x"),
        event("a", "Day Start", "2025-06-02", EventType::Planet, "x"),
    ];

    let visible = visible_events(&events, "", CategoryFilter::All);
    let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}
