// Stellar CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: Month flags are human 1-12; the gateway takes the
// zero-based index, so the conversion happens at this edge.

mod commands;
mod output;

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stellar_gemini::GeminiClient;

#[derive(Parser)]
#[command(name = "stellar")]
#[command(about = "Stellar CLI - Browse the investigative event calendar")]
#[command(version)]
pub struct Cli {
    /// Gemini API base URL
    #[arg(
        long,
        env = "GEMINI_API_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one month of events and render the visible set
    Calendar {
        /// Month (1-12, defaults to the current month)
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (defaults to the current year)
        #[arg(long, short)]
        year: Option<i32>,

        /// Free-text search over title, description and location
        #[arg(long)]
        query: Option<String>,

        /// Category filter (planet, moon, nebula, station, phenomenon or all)
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Print the investigation briefing for one event
    Briefing {
        /// Event ID within the fetched month
        event_id: String,

        /// Month (1-12, defaults to the current month)
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (defaults to the current year)
        #[arg(long, short)]
        year: Option<i32>,
    },

    /// Browse the calendar interactively
    Browse {
        /// Month (1-12, defaults to the current month)
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (defaults to the current year)
        #[arg(long, short)]
        year: Option<i32>,
    },
}

/// Resolve the optional 1-12 month flag and year to the zero-based cursor
fn resolve_cursor(month: Option<u32>, year: Option<i32>) -> (u32, i32) {
    let now = chrono::Utc::now();
    let month = month.map(|m| m - 1).unwrap_or_else(|| now.month0());
    let year = year.unwrap_or_else(|| now.year());
    (month, year)
}

fn gateway(api_url: &str) -> anyhow::Result<GeminiClient> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY environment variable not set")?;
    Ok(GeminiClient::with_base_url(api_key, api_url))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = gateway(&cli.api_url)?;
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Calendar {
            month,
            year,
            query,
            category,
        } => {
            let (month, year) = resolve_cursor(month, year);
            commands::calendar::run(
                &client,
                output_format,
                cli.quiet,
                month,
                year,
                query.as_deref().unwrap_or(""),
                category.as_deref(),
            )
            .await
        }
        Commands::Briefing {
            event_id,
            month,
            year,
        } => {
            let (month, year) = resolve_cursor(month, year);
            commands::briefing::run(&client, output_format, cli.quiet, month, year, &event_id)
                .await
        }
        Commands::Browse { month, year } => {
            let (month, year) = resolve_cursor(month, year);
            commands::browse::run(client, month, year).await
        }
    }
}
