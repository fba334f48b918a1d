use std::sync::Arc;
use log::{debug, info, warn};

use crate::composer::SessionComposer;
use crate::journal::{JournalPrompts, PromptRequestBuilder};
use crate::request::CompletionRequest;

/// Prefix for chat failures shown to the user
pub const CHAT_ERROR_PREFIX: &str = "Error generating response";
/// Prefix for journal prompt failures shown to the user
pub const PROMPT_ERROR_PREFIX: &str = "Error generating prompt";

/// Caller-facing chat and journal API.
///
/// Holds only read-only configuration and the provider client, so one
/// instance can serve any number of independent sessions. Callers own the
/// history and pass it in full on every turn.
pub struct Companion
{   config: crate::config::CompanionConfig
  , client: Arc<dyn crate::providers::CompletionClient>
  , instructions: String
}

impl Companion
{   /// Wire a companion to an existing completion client
    pub fn new(
      config: crate::config::CompanionConfig
    , client: Arc<dyn crate::providers::CompletionClient>
    ) -> Self
    {   Companion
        {   config
          , client
          , instructions: crate::instructions::COMPANION_INSTRUCTIONS
              .to_string()
        }
    }

    /// Build the OpenAI-compatible client from configuration
    pub fn from_config(
      config: crate::config::CompanionConfig
    ) -> Result<Self, crate::error::Error>
    {   let client = crate::providers::OpenAiClient::new(&config.provider)?;
        info!(
          "Companion ready (chat: {}, journal: {})",
          config.chat.model, config.journal.model
        );
        Ok(Companion::new(config, Arc::new(client)))
    }

    /// Replace the system instructions used for chat
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self
    {   self.instructions = instructions.into();
        self
    }

    pub fn config(&self) -> &crate::config::CompanionConfig
    {   &self.config
    }

    /// One chat turn. Blank input is refused without calling the provider.
    pub async fn chat(
      &self
    , input: &str
    , history: &[crate::Message]
    , location: Option<&str>
    ) -> crate::CompletionResult
    {   if input.trim().is_empty()
        {   return Err(crate::error::Error::InvalidInput(
              "message is empty".to_string()
            ));
        }

        let messages = SessionComposer::compose(
          &self.instructions, history, input, location
        );
        let request = CompletionRequest::new(
          messages, &self.config.chat, false
        );
        self.client.complete(request).await
    }

    /// Chat turn collapsed to display text; failures become
    /// `"Error generating response: ..."`
    pub async fn chat_text(
      &self
    , input: &str
    , history: &[crate::Message]
    , location: Option<&str>
    ) -> String
    {   match self.chat(input, history, location).await
        {   Ok(reply) => reply
          , Err(e) => {
              warn!("Chat failed: {}", e);
              format!("{}: {}", CHAT_ERROR_PREFIX, e)
            }
        }
    }

    /// Generate 6-8 journal questions for `mood`
    pub async fn journal_prompts(&self, mood: &str)
      -> Result<JournalPrompts, crate::error::Error>
    {   let messages = PromptRequestBuilder::build(mood).compose();
        let request = CompletionRequest::new(
          messages, &self.config.journal, true
        );

        let raw = self.client.complete(request).await?;
        let prompts = crate::journal::parse_prompts(&raw)?;
        if !prompts.mood.trim().eq_ignore_ascii_case(mood.trim())
        {   debug!(
              "Provider echoed mood '{}' for requested '{}'",
              prompts.mood, mood
            );
        }
        Ok(prompts)
    }

    /// Journal prompts as JSON text; failures become
    /// `"Error generating prompt: ..."`
    pub async fn journal_prompts_text(&self, mood: &str) -> String
    {   let result = self.journal_prompts(mood).await
          .and_then(|prompts| {
            serde_json::to_string(&prompts).map_err(|e| {
              crate::error::Error::Other(e.to_string())
            })
          });
        match result
        {   Ok(json) => json
          , Err(e) => {
              warn!("Journal prompts failed: {}", e);
              format!("{}: {}", PROMPT_ERROR_PREFIX, e)
            }
        }
    }
}
