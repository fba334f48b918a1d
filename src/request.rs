//! Request types flowing from the caller to a completion provider

use serde::{Deserialize, Serialize};

/// One conversational turn to be composed into a message sequence.
/// Built fresh per call and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRequest
{   /// System instructions prepended to every call
    pub instructions: String
  , /// Prior turns, oldest first
    pub history: Vec<crate::Message>
  , /// The new user input
    pub new_input: String
  , /// Optional free-form location of the user
    pub location: Option<String>
}

impl SessionRequest
{   /// Assemble the ordered message sequence for this turn
    pub fn compose(&self) -> Vec<crate::Message>
    {   crate::composer::SessionComposer::compose(
          &self.instructions
        , &self.history
        , &self.new_input
        , self.location.as_deref()
        )
    }
}

/// Everything a completion provider needs for one call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest
{   /// Model name
    pub model: String
  , /// Ordered messages
    pub messages: Vec<crate::Message>
  , /// Max tokens to generate
    pub max_tokens: Option<usize>
  , /// Temperature for sampling
    pub temperature: Option<f32>
  , /// Ask the provider for a JSON-only reply
    pub structured_output: bool
}

impl CompletionRequest
{   /// Pair a composed message sequence with a model's parameters
    pub fn new(
      messages: Vec<crate::Message>
    , model: &crate::config::ModelConfig
    , structured_output: bool
    ) -> Self
    {   CompletionRequest
        {   model: model.model.clone()
          , messages
          , max_tokens: Some(model.max_tokens)
          , temperature: model.temperature
          , structured_output
        }
    }
}
