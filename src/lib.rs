pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod composer;
pub mod instructions;
pub mod journal;
pub mod companion;
pub mod web;
use serde::{Deserialize, Serialize};

pub use companion::Companion;
pub use composer::SessionComposer;
pub use config::CompanionConfig;
pub use error::Error;
pub use journal::{JournalPrompts, PromptRequestBuilder};
pub use providers::{CompletionClient, OpenAiClient};
pub use request::{CompletionRequest, SessionRequest};

/*

moodmate is a wellbeing companion: a chat wrapper around a hosted
chat-completions API plus a mood-based journal prompt generator.

moodmate/
├── src/
│   ├── lib.rs          # Shared message types and re-exports
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # Provider/model configuration, env loading
│   ├── request.rs      # SessionRequest and CompletionRequest
│   ├── composer.rs     # system + history window + input assembly
│   ├── instructions.rs # Companion system prompt
│   ├── journal.rs      # Mood -> structured journal prompts
│   ├── companion.rs    # Caller-facing chat / journal API
│   ├── web.rs          # Minimal web UI and JSON API
│   ├── main.rs         # CLI
│   └── providers/      # CompletionClient trait and implementations
│       ├── mod.rs
│       └── openai.rs
└── tests/

*/

/// Outcome of a single completion call.
/// Failures stay typed until the outermost UI layer turns them into text.
pub type CompletionResult = Result<String, crate::error::Error>;

/// Author of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
  , Assistant
}

/// A single chat message. Ordering within a sequence is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message
{   pub role: Role
  , pub content: String
}

impl Message
{   pub fn new(role: Role, content: impl Into<String>) -> Self
    {   Message
        {   role
          , content: content.into()
        }
    }

    pub fn system(content: impl Into<String>) -> Self
    {   Message::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self
    {   Message::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self
    {   Message::new(Role::Assistant, content)
    }
}
