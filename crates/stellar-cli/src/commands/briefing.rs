// Briefing command - fetch one event and print its investigation briefing

use anyhow::Result;
use serde::Serialize;

use stellar_core::{images, Event, EventSource};
use stellar_gemini::GeminiClient;

use crate::output::{print_field, OutputFormat};

#[derive(Serialize)]
struct BriefingReport<'a> {
    event: &'a Event,
    narrative: &'a str,
}

pub async fn run(
    client: &GeminiClient,
    output: OutputFormat,
    quiet: bool,
    month: u32,
    year: i32,
    event_id: &str,
) -> Result<()> {
    let events = client.list_events(month, year).await;
    let event = events
        .iter()
        .find(|e| e.id == event_id)
        .ok_or_else(|| anyhow::anyhow!("Event not found: {}", event_id))?;

    let narrative = client.deep_dive(event).await;

    if output.is_text() {
        if !quiet {
            print_field("Title", &event.title);
            print_field("Date", &event.date);
            print_field("Type", event.kind.as_str());
            if let Some(location) = &event.location {
                print_field("Location", location);
            }
            if let Some(agency) = &event.agency {
                print_field("Agency", agency);
            }
            print_field("Rarity", &format!("{:.1}", event.metadata.rarity));
            print_field("Visibility", &event.metadata.visibility);
            print_field("Cover", &images::cover_photo_url(&event.metadata.photo_id));
            println!();
            let investigator = if event.host.is_superhost {
                format!("{} (Superhost)", event.host.name)
            } else {
                event.host.name.clone()
            };
            print_field("Investigator", &investigator);
            print_field("Bio", &event.host.bio);
            print_field(
                "Stats",
                &format!(
                    "{} reviews, {:.1} rating, {} years",
                    event.host.reviews_count, event.host.rating, event.host.years_experience
                ),
            );
            print_field("Avatar", &images::avatar_url(&event.host.avatar_id));
            println!();
        }
        println!("{}", narrative);
    } else {
        output.print_value(&BriefingReport {
            event,
            narrative: &narrative,
        });
    }

    Ok(())
}
