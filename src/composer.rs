//! Assembles the message sequence sent to a completion provider:
//! `[system] + history window + [user]`.

use log::{debug, trace};

/// Maximum number of prior messages forwarded on each call
pub const HISTORY_WINDOW: usize = 20;

/// Marker that opens the location clause in the system message
pub const LOCATION_MARKER: &str = "USER LOCATION INFO:";

/// Builds bounded, ordered message sequences. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionComposer;

impl SessionComposer
{   /// Compose `[system] + last 20 history entries + [user]`.
    ///
    /// A non-blank `location` appends the crisis location clause to the
    /// instructions. Older history is dropped silently; the caller's
    /// history is only read.
    pub fn compose(
      instructions: &str
    , history: &[crate::Message]
    , new_input: &str
    , location: Option<&str>
    ) -> Vec<crate::Message>
    {   let mut system = instructions.to_string();
        if let Some(clause) = location.and_then(location_clause)
        {   system.push_str(&clause);
        }

        let window = history_window(history);
        if window.len() < history.len()
        {   trace!(
              "Dropping {} oldest history messages",
              history.len() - window.len()
            );
        }

        let mut messages = Vec::with_capacity(window.len() + 2);
        messages.push(crate::Message::system(system));
        messages.extend_from_slice(window);
        messages.push(crate::Message::user(new_input));

        debug!("Composed {} messages", messages.len());
        messages
    }
}

/// The most recent `HISTORY_WINDOW` entries, in original order
pub fn history_window(history: &[crate::Message]) -> &[crate::Message]
{   let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}

/// Clause appended to the instructions when the user shared a location.
/// The location is substituted exactly as given. Returns `None` for a blank
/// location.
pub fn location_clause(location: &str) -> Option<String>
{   if location.trim().is_empty()
    {   return None;
    }
    Some(format!(
      "\n\n{}\nThe user is located in: {}.\n\
       If the user expresses a crisis (self-harm, suicide, etc.), \
       you MUST explicitly mention this location and suggest searching \
       for or contacting emergency services in {}.",
      LOCATION_MARKER, location, location
    ))
}
