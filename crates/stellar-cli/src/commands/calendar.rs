// Calendar command - fetch one month and render the visible set

use anyhow::Result;

use stellar_core::{visible_events, CategoryFilter, EventSource};
use stellar_gemini::GeminiClient;

use crate::output::{OutputFormat, Table};

pub async fn run(
    client: &GeminiClient,
    output: OutputFormat,
    quiet: bool,
    month: u32,
    year: i32,
    query: &str,
    category: Option<&str>,
) -> Result<()> {
    let category = match category {
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => CategoryFilter::All,
    };

    let events = client.list_events(month, year).await;
    let visible = visible_events(&events, query, category);

    if output.is_text() {
        if visible.is_empty() {
            // A failed fetch and a genuinely empty month read the same
            if !quiet {
                println!("No events this month");
            }
            return Ok(());
        }

        let table = Table::new(vec![
            ("ID", 10),
            ("DATE", 22),
            ("TITLE", 32),
            ("TYPE", 12),
            ("LOCATION", 24),
            ("RARITY", 6),
        ]);
        table.header();

        for event in &visible {
            let rarity = format!("{:.1}", event.metadata.rarity);
            table.row(&[
                &event.id,
                &event.date,
                &event.title,
                event.kind.as_str(),
                event.location.as_deref().unwrap_or("-"),
                &rarity,
            ]);
        }
    } else {
        output.print_value(&visible);
    }

    Ok(())
}
