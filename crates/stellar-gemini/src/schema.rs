// Structured-output schema for the event batch
//
// Declared to the service alongside the list prompt. The Gemini API takes an
// OpenAPI-style schema with uppercase type tags; field names here are the
// wire spellings the decode step expects back.

use serde_json::{json, Value};

use stellar_core::EventType;

/// Schema constraining the list completion to an array of event objects
pub fn event_batch_schema() -> Value {
    let categories: Vec<&str> = EventType::ALL.iter().map(|kind| kind.as_str()).collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "date": { "type": "STRING" },
                "type": { "type": "STRING", "enum": categories },
                "description": { "type": "STRING" },
                "location": { "type": "STRING" },
                "agency": { "type": "STRING" },
                "host": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "avatarId": { "type": "STRING" },
                        "isSuperhost": { "type": "BOOLEAN" },
                        "reviewsCount": { "type": "NUMBER" },
                        "rating": { "type": "NUMBER" },
                        "yearsExperience": { "type": "NUMBER" },
                        "bio": { "type": "STRING" }
                    }
                },
                "metadata": {
                    "type": "OBJECT",
                    "properties": {
                        "rarity": { "type": "NUMBER" },
                        "visibility": { "type": "STRING" },
                        "photoId": { "type": "STRING" }
                    }
                }
            },
            "required": ["id", "title", "date", "type", "description", "location", "metadata", "host"]
        }
    })
}
