//! Configuration for the completion provider, models and web server

use std::fmt;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Environment variable holding the provider secret
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Provider connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// Secret for bearer auth; never serialized
    #[serde(skip_serializing, default)]
    pub api_key: String
  , /// API base URL, without trailing `/chat/completions`
    pub api_base: String
  , /// Request timeout in seconds
    pub timeout_secs: Option<u64>
}

impl fmt::Debug for ProviderConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ProviderConfig")
          .field("api_key", &"<redacted>")
          .field("api_base", &self.api_base)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

impl Default for ProviderConfig
{   fn default() -> Self
    {   ProviderConfig
        {   api_key: String::new()
          , api_base: DEFAULT_API_BASE.to_string()
          , timeout_secs: None
        }
    }
}

/// Generation parameters for one use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig
{   /// Model identifier
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: usize
  , /// Sampling temperature; provider default when absent
    pub temperature: Option<f32>
}

impl ModelConfig
{   /// Open chat: short, conversational replies
    pub fn chat() -> Self
    {   ModelConfig
        {   model: "gpt-4o-search-preview".to_string()
          , max_tokens: 300
          , temperature: None
        }
    }

    /// Journal prompts: JSON mode
    pub fn journal() -> Self
    {   ModelConfig
        {   model: "gpt-4o".to_string()
          , max_tokens: 500
          , temperature: Some(0.7)
        }
    }
}

/// Companion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionConfig
{   pub provider: ProviderConfig
  , pub chat: ModelConfig
  , pub journal: ModelConfig
  , /// Address the web UI listens on
    pub bind_addr: String
}

impl Default for CompanionConfig
{   fn default() -> Self
    {   CompanionConfig
        {   provider: ProviderConfig::default()
          , chat: ModelConfig::chat()
          , journal: ModelConfig::journal()
          , bind_addr: DEFAULT_BIND_ADDR.to_string()
        }
    }
}

impl CompanionConfig
{   /// Read configuration from the process environment.
    /// Fails when the API key is absent so callers can stop at startup.
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   let var = |key: &str| {
          lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };

        let api_key = var(API_KEY_VAR)
          .ok_or_else(|| {
            crate::error::Error::MissingApiKey(
              API_KEY_VAR.to_string()
            )
          })?;

        let mut config = CompanionConfig::default();
        config.provider.api_key = api_key;

        if let Some(base) = var("OPENAI_BASE_URL")
        {   config.provider.api_base
              = base.trim_end_matches('/').to_string();
        }
        if let Some(model) = var("MOODMATE_CHAT_MODEL")
        {   config.chat.model = model;
        }
        if let Some(model) = var("MOODMATE_JOURNAL_MODEL")
        {   config.journal.model = model;
        }
        if let Some(secs) = var("MOODMATE_TIMEOUT_SECS")
        {   let parsed = secs.parse::<u64>()
              .map_err(|_| {
                crate::error::Error::InvalidConfiguration(
                  format!("MOODMATE_TIMEOUT_SECS={}", secs)
                )
              })?;
            config.provider.timeout_secs = Some(parsed);
        }
        if let Some(bind) = var("MOODMATE_BIND")
        {   config.bind_addr = bind;
        }

        debug!(
          "Loaded config: chat model {}, journal model {}",
          config.chat.model, config.journal.model
        );
        Ok(config)
    }
}
