// Browse command - interactive calendar session
//
// Drives the calendar controller and the briefing panel from stdin. This is
// the command-line rendition of the original browsing surface: month
// navigation, search, category filter, opening an event, and the mock
// subscription flow.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use stellar_core::{BriefingPanel, CategoryFilter, Controller, EventSource, MonthCursor};
use stellar_gemini::GeminiClient;

const HELP: &str = "\
Commands:
  next                 show the next month
  prev                 show the previous month
  search <text>        filter by free text (empty to clear)
  filter <category>    planet, moon, nebula, station, phenomenon or all
  open <id>            open an event and fetch its briefing
  close                close the open event
  subscribe <email>    subscribe to updates for the open event
  help                 show this message
  quit                 exit";

pub async fn run(client: GeminiClient, month: u32, year: i32) -> Result<()> {
    let mut controller = Controller::new(client, MonthCursor::new(month, year));
    let mut panel: Option<BriefingPanel> = None;

    println!("Stellar - Elite Scientific Concierge");
    println!("{HELP}");

    controller.refresh().await;
    render(&controller);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "next" => {
                controller.shift_month(1).await;
                render(&controller);
            }
            "prev" => {
                controller.shift_month(-1).await;
                render(&controller);
            }
            "search" => {
                controller.set_query(rest);
                render(&controller);
            }
            "filter" => match rest.parse::<CategoryFilter>() {
                Ok(category) => {
                    controller.set_category(category);
                    render(&controller);
                }
                Err(message) => println!("{message}"),
            },
            "open" => match controller.select(rest) {
                Some(event) => {
                    println!("Fetching briefing for {}...", event.title);
                    let opened = BriefingPanel::open(event, controller.source()).await;
                    if let Some(text) = opened.narrative() {
                        println!("\n{text}\n");
                    }
                    panel = Some(opened);
                }
                None => println!("No event with id {rest}"),
            },
            "close" => {
                controller.clear_selection();
                panel = None;
            }
            "subscribe" => match panel.as_mut() {
                Some(panel) => {
                    if panel.form.submit(rest).await {
                        println!("Subscribed {} to mission updates", panel.form.email);
                    } else {
                        println!("An email address is required");
                    }
                }
                None => println!("Open an event first"),
            },
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("Unknown command: {other} (try help)"),
        }
    }

    Ok(())
}

fn render<S: EventSource>(controller: &Controller<S>) {
    let state = controller.state();
    let visible = controller.visible();

    println!("\n{} - {} event(s)", state.cursor, visible.len());
    for event in visible {
        println!(
            "  [{}] {}  {}  {}  {}",
            event.id,
            event.date,
            event.title,
            event.kind,
            event.location.as_deref().unwrap_or("-"),
        );
    }
    println!();
}
