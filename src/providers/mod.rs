//! Completion provider boundary and implementations

pub mod openai;

// Re-export for convenience
pub use openai::OpenAiClient;

/// A hosted text-completion service: ordered messages in, text out.
///
/// Implementations return failures as `Err` values and never panic on
/// provider errors; turning them into display text is the caller's job.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync
{   async fn complete(
      &self
    , request: crate::request::CompletionRequest
    ) -> crate::CompletionResult;
}
