//! Text-generation boundary
//!
//! The provider is external. This module fixes the contract it is consumed
//! through and the one flow built on it: suggesting a menu item for a
//! themed restaurant.

mod stream;

pub use stream::{TextStream, TextStreamSender};

use std::fmt;
use std::future::Future;
use thiserror::Error;

/// Environment variable the provider credential is injected through
pub const API_KEY_ENV: &str = "GOOGLE_GENAI_API_KEY";

/// Theme used when the caller supplies none
pub const DEFAULT_SUBJECT: &str = "seafood";

pub const DEFAULT_TEMPERATURE: f32 = 1.0;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("generation stream closed before a final response")]
    StreamClosed,
}

/// Provider credential; never printed
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_env() -> Result<Self, FlowError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(Self(key)),
            _ => Err(FlowError::MissingCredential(API_KEY_ENV)),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub temperature: f32,
}

/// A hosted text-generation service
pub trait TextGenerator {
    /// Request/response call returning the final text
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<String, FlowError>> + Send;

    /// Incremental call; fragments arrive on the returned stream as they are produced
    fn generate_stream(&self, request: GenerateRequest) -> Result<TextStream, FlowError>;
}

/// Prompt for a restaurant theme
pub fn menu_prompt(subject: &str) -> String {
    format!("Suggest an item for the menu of a {subject} themed restaurant")
}

fn menu_request(subject: Option<&str>) -> GenerateRequest {
    GenerateRequest {
        prompt: menu_prompt(subject.unwrap_or(DEFAULT_SUBJECT)),
        temperature: DEFAULT_TEMPERATURE,
    }
}

/// Suggest a menu item, forwarding each fragment to `on_chunk` as it arrives.
///
/// Returns the provider's final text once the stream is exhausted.
pub async fn menu_suggestion<G, F>(
    generator: &G,
    subject: Option<&str>,
    mut on_chunk: F,
) -> Result<String, FlowError>
where
    G: TextGenerator,
    F: FnMut(&str),
{
    let mut stream = generator.generate_stream(menu_request(subject))?;
    while let Some(chunk) = stream.next_chunk().await {
        on_chunk(&chunk?);
    }
    stream.response().await
}

/// Suggest a menu item without streaming
pub async fn menu_suggestion_text<G: TextGenerator>(
    generator: &G,
    subject: Option<&str>,
) -> Result<String, FlowError> {
    generator.generate(&menu_request(subject)).await
}
