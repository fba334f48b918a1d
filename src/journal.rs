//! Mood-based journal prompt generation.
//!
//! The provider is asked for a single bare JSON object:
//!
//! ```json
//! {"mood": "<mood>", "questions": ["<question>", "..."]}
//! ```
//!
//! with 6 to 8 plain-string questions. The older one-element array wrapper
//! and `{"question": ...}` entries are rejected rather than accepted.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: usize = 6;
pub const MAX_QUESTIONS: usize = 8;

/// Moods the UI offers. Other values are accepted; this list only drives
/// diagnostics.
pub const KNOWN_MOODS: [&str; 10] =
[   "excellent"
  , "very good"
  , "good"
  , "okay"
  , "neutral"
  , "slightly off"
  , "low"
  , "stressed"
  , "sad"
  , "awful"
];

/// System instructions for journal prompt generation
pub const JOURNAL_INSTRUCTIONS: &str = concat!(
  "You are a helpful mental health journaling assistant. ",
  "Your goal is to generate a list of 6 to 8 thoughtful and open-ended journal prompt questions ",
  "based on the user's current mood. ",
  "The questions should encourage the user to explore their feelings, daily happenings, ",
  "and gain perspective. ",
  "Keep the tone supportive and appropriate for the mood. ",
  "You MUST output the result as a single valid JSON object with exactly this structure:\n",
  "{\n",
  "  \"mood\": \"<current_mood>\",\n",
  "  \"questions\": [\n",
  "    \"<Question 1>\",\n",
  "    \"<Question 2>\",\n",
  "    ...\n",
  "  ]\n",
  "}\n",
  "Each question is a plain string. Do not wrap the object in an array.\n",
  "Do NOT include any markdown formatting (like ```json). Just the raw JSON string."
);

/// Validated journal prompts for one mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPrompts
{   pub mood: String
  , pub questions: Vec<String>
}

/// Whether `mood` is one of `KNOWN_MOODS`, ignoring case and surrounding
/// whitespace
pub fn is_known_mood(mood: &str) -> bool
{   let cleaned = mood.trim().to_lowercase();
    KNOWN_MOODS.iter().any(|m| *m == cleaned)
}

/// User message asking for prompts for `mood`
pub fn mood_message(mood: &str) -> String
{   format!(
      "The user's mood is '{}'. Please suggest 6-8 journal prompt questions.",
      mood
    )
}

/// Turns a mood into a session request for structured generation
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptRequestBuilder;

impl PromptRequestBuilder
{   /// Build the request for `mood`. The mood is used as given.
    pub fn build(mood: &str) -> crate::request::SessionRequest
    {   if !is_known_mood(mood)
        {   debug!("Mood '{}' is not in the known list; using as-is", mood);
        }
        crate::request::SessionRequest
        {   instructions: JOURNAL_INSTRUCTIONS.to_string()
          , history: Vec::new()
          , new_input: mood_message(mood)
          , location: None
        }
    }
}

/// Validate a provider reply against the journal prompt shape.
/// No repair is attempted.
pub fn parse_prompts(raw: &str)
  -> Result<JournalPrompts, crate::error::Error>
{   let malformed = |msg: String| {
      warn!("Rejecting journal prompts: {}", msg);
      crate::error::Error::MalformedPrompts(msg)
    };

    let value: serde_json::Value = serde_json::from_str(raw.trim())
      .map_err(|e| malformed(format!("not valid JSON: {}", e)))?;

    if value.is_array()
    {   return Err(malformed(
          "top-level array wrapper is a deprecated shape; \
           expected a bare object".to_string()
        ));
    }

    let uses_question_objects = value
      .get("questions")
      .and_then(|q| q.as_array())
      .map(|qs| qs.iter().any(|q| q.is_object()))
      .unwrap_or(false);
    if uses_question_objects
    {   return Err(malformed(
          "question objects are a deprecated shape; \
           expected plain strings".to_string()
        ));
    }

    let prompts: JournalPrompts = serde_json::from_value(value)
      .map_err(|e| malformed(format!("unexpected structure: {}", e)))?;

    let count = prompts.questions.len();
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count)
    {   return Err(malformed(format!(
          "expected {} to {} questions, got {}",
          MIN_QUESTIONS, MAX_QUESTIONS, count
        )));
    }
    if prompts.questions.iter().any(|q| q.trim().is_empty())
    {   return Err(malformed("blank question".to_string()));
    }

    Ok(prompts)
}
