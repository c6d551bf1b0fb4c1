// Output formatting for CLI

use serde::Serialize;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        }
    }

    pub fn print_value<T: Serialize>(&self, value: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value).unwrap());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(value).unwrap());
            }
            OutputFormat::Text => {
                // Text format is handled by each command
            }
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Print a simple key-value pair for text output
pub fn print_field(label: &str, value: &str) {
    println!("{:<14} {}", format!("{}:", label), value);
}

/// Fixed-width column layout for text output
pub struct Table {
    columns: Vec<(&'static str, usize)>,
}

impl Table {
    pub fn new(columns: Vec<(&'static str, usize)>) -> Self {
        Self { columns }
    }

    pub fn header(&self) {
        let line: Vec<String> = self
            .columns
            .iter()
            .map(|(name, width)| format!("{:<width$}", name, width = width))
            .collect();
        println!("{}", line.join("  "));
    }

    /// Print one row; values align with the declared columns and overlong
    /// cells are clipped with an ellipsis
    pub fn row(&self, values: &[&str]) {
        let line: Vec<String> = self
            .columns
            .iter()
            .zip(values)
            .map(|((_, width), value)| format!("{:<width$}", clip(value, *width), width = width))
            .collect();
        println!("{}", line.join("  "));
    }
}

// Clips on character boundaries, not bytes; generated titles are not
// guaranteed to be ASCII
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}
