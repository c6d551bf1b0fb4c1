// Event domain types
//
// These are the complete entity types the rest of the system works with.
// They are produced by the decode step (see `decode`), which fills every
// display default exactly once - downstream code never handles absent
// host/metadata records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of event categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    Planet,
    Moon,
    Nebula,
    Station,
    Phenomenon,
}

impl EventType {
    /// All members of the closed set, in declaration order
    pub const ALL: [EventType; 5] = [
        EventType::Planet,
        EventType::Moon,
        EventType::Nebula,
        EventType::Station,
        EventType::Phenomenon,
    ];

    /// The wire spelling of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Planet => "Planet",
            EventType::Moon => "Moon",
            EventType::Nebula => "Nebula",
            EventType::Station => "Station",
            EventType::Phenomenon => "Phenomenon",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        for kind in EventType::ALL {
            if s.eq_ignore_ascii_case(kind.as_str()) {
                return Ok(kind);
            }
        }
        Err(format!(
            "unknown event type '{}' (expected one of Planet, Moon, Nebula, Station, Phenomenon)",
            s
        ))
    }
}

/// One calendar entry
///
/// `id` is an opaque identifier assigned by the upstream batch; uniqueness is
/// only expected within a single fetch and is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO-8601 date-time string, parsed on demand via `occurs_at`.
    /// No timezone normalization is performed.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    pub host: Host,
    pub metadata: EventMetadata,
}

impl Event {
    /// Parse the event's date for display and sort ordering.
    ///
    /// Accepts RFC 3339, a naive date-time, or a bare date; naive values are
    /// taken as UTC. Returns `None` for anything else - the view-model sorts
    /// those entries last.
    pub fn occurs_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
        None
    }
}

/// The investigator presented as an event's narrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub name: String,
    pub bio: String,
    #[serde(rename = "avatarId")]
    pub avatar_id: String,
    #[serde(rename = "isSuperhost")]
    pub is_superhost: bool,
    #[serde(rename = "reviewsCount")]
    pub reviews_count: u32,
    pub rating: f64,
    #[serde(rename = "yearsExperience")]
    pub years_experience: u32,
}

/// Auxiliary display attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventMetadata {
    /// Numeric score, displayed with one fixed decimal digit
    pub rarity: f64,
    pub visibility: String,
    #[serde(rename = "photoId")]
    pub photo_id: String,
    /// Carried from upstream but unused in matching logic
    #[serde(rename = "searchKeyword", skip_serializing_if = "Option::is_none")]
    pub search_keyword: Option<String>,
}
