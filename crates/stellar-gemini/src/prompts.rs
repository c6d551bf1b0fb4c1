// Prompt builders
//
// The natural-language briefs sent alongside each request. The list brief
// pins the count, the thematic focus areas, and the photo-id hints; the
// briefing brief asks for the four-part narrative structure.

use stellar_core::{Event, MonthCursor};

const CATEGORY_PHOTO_HINTS: &str = "\
- NEBULA/INTERSTELLAR: 1462331940025-496dfbfc7564, 1464802686167-b939a67e06a1, 1506318137071-a8e063b4bcc0
- PLANET/ORBITAL: 1614732138822-fd42d6c32a39, 1614730321146-b6fa6a46bcb4, 1614728263952-84ea252f92f8
- STATION/DEEP MISSION: 1517976487492-5750f3195933, 1516849841032-87cbac4d88f7, 1446776811953-b23d57bd21aa
- HIGH ENERGY/GALAXY: 1446776811953-b23d57bd21aa, 1501862700950-efb218298ffa";

/// The month-calendar brief for the structured list request
pub fn list_events_prompt(month: u32, year: i32) -> String {
    let cursor = MonthCursor::new(month, year);
    format!(
        "Generate 12 distinct \"Investigative Events\" for {cursor}.\n\
         Brand: Stellar - Elite Scientific Concierge.\n\
         \n\
         Themes to focus on:\n\
         1. Invisible Universe: Dark Matter filaments, Dark Energy expansion anomalies.\n\
         2. High-Energy Universe: Black Hole accretion disks, Supernova Remnants, Pulsar radiation.\n\
         3. Stellar Evolution: Protostars in Nebulae, Galaxy Cluster dynamics.\n\
         4. Orbital Dynamics: Planetary transits and lunar occultations.\n\
         \n\
         Imagery: Use these Unsplash IDs:\n\
         {CATEGORY_PHOTO_HINTS}\n\
         \n\
         Host: Generate an 'Investigator' for each. Tone: Scientific, precise, atmospheric.\n\
         Bios should mention focus areas like \"Chandra Legacy Data\" or \"High-Energy Spectral Analysis\"."
    )
}

/// The four-part narrative brief for one selected event
pub fn briefing_prompt(event: &Event) -> String {
    let location = event.location.as_deref().unwrap_or("an uncharted sector");
    format!(
        "Provide a detailed \"Investigation Briefing\" for the cosmic event: {title}.\n\
         Include:\n\
         1. Precise Orbital Coordinates in {location}.\n\
         2. Spectral Significance (UV, X-Ray, or Gamma).\n\
         3. Impact on the 'Invisible Universe' (Dark Matter/Energy context).\n\
         4. Scientific Observation Precautions.\n\
         Tone: High-end scientific analysis. Avoid flowery language, use evocative scientific terms.",
        title = event.title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_core::{EventMetadata, EventType, Host};

    fn event(location: Option<&str>) -> Event {
        Event {
            id: "ev-1".to_string(),
            title: "Pulsar Sweep".to_string(),
            date: "2025-06-14T21:00:00Z".to_string(),
            kind: EventType::Phenomenon,
            description: "Beamed radiation".to_string(),
            location: location.map(str::to_string),
            agency: None,
            host: Host {
                name: "Dr. Iris Vale".to_string(),
                bio: "High-Energy Spectral Analysis".to_string(),
                avatar_id: "a".to_string(),
                is_superhost: false,
                reviews_count: 120,
                rating: 4.9,
                years_experience: 10,
            },
            metadata: EventMetadata {
                rarity: 4.5,
                visibility: "Championship Grade".to_string(),
                photo_id: "p".to_string(),
                search_keyword: None,
            },
        }
    }

    #[test]
    fn list_prompt_names_the_month_and_the_count() {
        let prompt = list_events_prompt(5, 2025);
        assert!(prompt.contains("June 2025"));
        assert!(prompt.contains("12 distinct"));
        assert!(prompt.contains("1462331940025-496dfbfc7564"));
    }

    #[test]
    fn briefing_prompt_references_title_and_location() {
        let prompt = briefing_prompt(&event(Some("Vela Sector")));
        assert!(prompt.contains("Pulsar Sweep"));
        assert!(prompt.contains("Coordinates in Vela Sector"));
    }

    #[test]
    fn briefing_prompt_covers_an_absent_location() {
        let prompt = briefing_prompt(&event(None));
        assert!(prompt.contains("an uncharted sector"));
    }
}
