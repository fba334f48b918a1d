use std::fmt;

/// Error type for companion operations
/// Implements Clone so results can be handed across tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing from the environment
    MissingApiKey(String)
  , /// HTTP transport error
    HttpError(String)
  , /// Provider returned a non-success status
    ApiError(String)
  , /// Failed to decode the provider's response body
    ParseError(String)
  , /// No choices in provider response
    NoChoicesInResponse
  , /// First choice carried no message content
    NoContentInResponse
  , /// Provider rejected the call with 429
    RateLimitExceeded
  , /// Request timed out
    Timeout
  , /// Journal prompt reply did not match the declared shape
    MalformedPrompts(String)
  , /// Caller supplied unusable input
    InvalidInput(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Web server could not bind or serve
    Server(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Missing API key: {} is not set", var)
            }
          , Error::HttpError(msg) => {
              write!(f, "Could not reach provider: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "Provider rejected request: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Unreadable provider response: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "Provider response contained no choices")
            }
          , Error::NoContentInResponse => {
              write!(f, "Provider response had no message content")
            }
          , Error::RateLimitExceeded => {
              write!(f, "Provider rate limit exceeded")
            }
          , Error::Timeout => {
              write!(f, "Provider request timed out")
            }
          , Error::MalformedPrompts(msg) => {
              write!(f, "Malformed journal prompts: {}", msg)
            }
          , Error::InvalidInput(msg) => {
              write!(f, "Invalid input: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Server(msg) => {
              write!(f, "Server error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Unexpected error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn display_names_the_failure()
    {   assert_eq!(
          Error::ApiError("401: invalid key".to_string()).to_string()
        , "Provider rejected request: 401: invalid key"
        );
        assert_eq!(
          Error::NoContentInResponse.to_string()
        , "Provider response had no message content"
        );
        assert_eq!(
          Error::HttpError("connection refused".to_string()).to_string()
        , "Could not reach provider: connection refused"
        );
        assert_eq!(Error::Timeout.to_string(), "Provider request timed out");
    }
}
