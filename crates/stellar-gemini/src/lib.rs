// Stellar Gemini Provider
//
// This crate provides the Gemini-backed event source implementation.
// It implements the EventSource trait from stellar-core, pairing a
// structured-output generateContent call for the month calendar with a
// free-text call for the per-event briefing.

pub mod prompts;
pub mod provider;
pub mod schema;
pub mod types;

pub use provider::{GeminiClient, BRIEFING_MODEL, LIST_MODEL};

// Re-export the core trait for convenience
pub use stellar_core::EventSource;
