// Upstream payload decode
//
// The gateway declares a strict output schema to the generative service, but
// the completion text is still untrusted. `decode_events` re-validates the
// parsed JSON against that shape and rejects violations as
// `MalformedUpstreamData` instead of letting mistyped fields leak into the
// view layer. Display defaults are filled here, once, so every `Event` that
// leaves this module is complete.

use serde::Deserialize;

use crate::error::{Result, StellarError};
use crate::event::{Event, EventMetadata, EventType, Host};

const DEFAULT_PHOTO_ID: &str = "1446776811953-b23d57bd21aa";
const DEFAULT_AVATAR_ID: &str = "1472099645785-5658abf4ff4e";
const DEFAULT_VISIBILITY: &str = "Championship Grade";
const DEFAULT_BIO: &str =
    "Dedicated to winning. Every dark matter filament holds a championship key.";
const DEFAULT_REVIEWS: u32 = 120;
const DEFAULT_RATING: f64 = 4.9;
const DEFAULT_YEARS: u32 = 10;
const DEFAULT_RARITY: f64 = 4.5;

/// Parse a completion text into complete events.
///
/// The payload must be a JSON array of objects carrying `id`, `title`,
/// `date`, `description` as strings and `type` as a member of the closed
/// category set. Anything else is `MalformedUpstreamData`. Host and metadata
/// records are optional; their fields fall back to fixed display defaults,
/// which also replace zero or blank values the way the original falsy
/// coalescing did.
pub fn decode_events(text: &str) -> Result<Vec<Event>> {
    let raw: Vec<RawEvent> = serde_json::from_str(text).map_err(|e| {
        StellarError::malformed(format!("event batch did not match the declared shape: {e}"))
    })?;

    Ok(raw.into_iter().map(complete).collect())
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    title: String,
    date: String,
    #[serde(rename = "type")]
    kind: EventType,
    description: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    agency: Option<String>,
    #[serde(default)]
    host: Option<RawHost>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct RawHost {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default, rename = "avatarId")]
    avatar_id: Option<String>,
    #[serde(default, rename = "isSuperhost")]
    is_superhost: Option<bool>,
    #[serde(default, rename = "reviewsCount")]
    reviews_count: Option<f64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default, rename = "yearsExperience")]
    years_experience: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    rarity: Option<f64>,
    #[serde(default)]
    visibility: Option<String>,
    #[serde(default, rename = "photoId")]
    photo_id: Option<String>,
    #[serde(default, rename = "searchKeyword")]
    search_keyword: Option<String>,
}

fn complete(raw: RawEvent) -> Event {
    let host = raw.host.unwrap_or_default();
    let metadata = raw.metadata.unwrap_or_default();

    Event {
        id: raw.id,
        title: raw.title,
        date: raw.date,
        kind: raw.kind,
        description: raw.description,
        location: raw.location,
        agency: raw.agency,
        host: Host {
            name: host.name.unwrap_or_default(),
            bio: text_or(host.bio, DEFAULT_BIO),
            avatar_id: text_or(host.avatar_id, DEFAULT_AVATAR_ID),
            is_superhost: host.is_superhost.unwrap_or(false),
            reviews_count: count_or(host.reviews_count, DEFAULT_REVIEWS),
            rating: score_or(host.rating, DEFAULT_RATING),
            years_experience: count_or(host.years_experience, DEFAULT_YEARS),
        },
        metadata: EventMetadata {
            rarity: score_or(metadata.rarity, DEFAULT_RARITY),
            visibility: text_or(metadata.visibility, DEFAULT_VISIBILITY),
            photo_id: text_or(metadata.photo_id, DEFAULT_PHOTO_ID),
            search_keyword: metadata.search_keyword,
        },
    }
}

fn text_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn score_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(default)
}

fn count_or(value: Option<f64>, default: u32) -> u32 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.round() as u32)
        .unwrap_or(default)
}
