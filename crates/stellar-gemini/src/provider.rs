// Gemini Gateway Client
//
// Implements EventSource against the generateContent API. The raw fetch
// operations return Result so the failure kinds stay observable in tests;
// the trait impl is the terminal catch point that folds every failure to
// the inert value the rest of the system expects.

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use stellar_core::{
    decode_events, Event, EventSource, Result, StellarError, EMPTY_BRIEFING_FALLBACK,
    FAILED_BRIEFING_FALLBACK,
};

use crate::prompts::{briefing_prompt, list_events_prompt};
use crate::schema::event_batch_schema;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model serving the structured month-calendar request
pub const LIST_MODEL: &str = "gemini-3-flash-preview";

/// Model serving the free-text briefing request
pub const BRIEFING_MODEL: &str = "gemini-3-pro-preview";

/// Gemini generateContent client
///
/// # Example
///
/// ```ignore
/// use stellar_gemini::GeminiClient;
///
/// let client = GeminiClient::from_env()?;
/// // or
/// let client = GeminiClient::new("your-api-key");
/// // or with a custom endpoint
/// let client = GeminiClient::with_base_url("your-api-key", "http://localhost:9000/v1beta");
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Create a new client from the GEMINI_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| StellarError::config("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key))
    }

    /// Create a new client with a custom API URL (for tests and proxies)
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Fetch one month's event batch.
    ///
    /// `month` is zero-based and, like `year`, is passed through without
    /// range validation. The completion is decoded and validated against the
    /// declared shape; every failure kind surfaces here as an error.
    pub async fn fetch_events(&self, month: u32, year: i32) -> Result<Vec<Event>> {
        let request = GenerateContentRequest::from_prompt(list_events_prompt(month, year))
            .with_response_schema(event_batch_schema());

        let text = self.generate(LIST_MODEL, &request).await?;
        decode_events(&text)
    }

    /// Fetch the long-form briefing for one event.
    ///
    /// No output schema is imposed; the completion text comes back as-is and
    /// may be empty.
    pub async fn fetch_briefing(&self, event: &Event) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(briefing_prompt(event));
        self.generate(BRIEFING_MODEL, &request).await
    }

    async fn generate(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| StellarError::upstream(format!("failed to send request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(StellarError::upstream(format!(
                "Gemini API error ({status}): {error_text}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| StellarError::upstream(format!("failed to parse response body: {e}")))?;

        Ok(body.completion_text())
    }
}

#[async_trait]
impl EventSource for GeminiClient {
    async fn list_events(&self, month: u32, year: i32) -> Vec<Event> {
        match self.fetch_events(month, year).await {
            Ok(events) => events,
            Err(error) => {
                warn!(month, year, %error, "event fetch failed, serving an empty calendar");
                Vec::new()
            }
        }
    }

    async fn deep_dive(&self, event: &Event) -> String {
        match self.fetch_briefing(event).await {
            Ok(text) if text.trim().is_empty() => EMPTY_BRIEFING_FALLBACK.to_string(),
            Ok(text) => text,
            Err(error) => {
                warn!(event_id = %event.id, %error, "briefing fetch failed");
                FAILED_BRIEFING_FALLBACK.to_string()
            }
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
