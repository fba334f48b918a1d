use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a>
{   pub model: &'a str
  , pub messages: &'a [crate::Message]
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat
{   #[serde(rename = "type")]
    pub kind: &'static str
}

impl ResponseFormat
{   pub fn json_object() -> Self
    {   ResponseFormat { kind: "json_object" }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage
{   pub role: Option<String>
  , pub content: Option<String>
}

impl<'a> ChatCompletionRequest<'a>
{   pub fn from_request(
      request: &'a crate::request::CompletionRequest
    ) -> Self
    {   ChatCompletionRequest
        {   model: &request.model
          , messages: &request.messages
          , max_tokens: request.max_tokens
          , temperature: request.temperature
          , response_format: request.structured_output
              .then(ResponseFormat::json_object)
        }
    }
}

// ===== Client =====

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct OpenAiClient
{   api_key: String
  , api_base: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Build a client from provider configuration.
    /// An empty key is rejected here rather than on the first call.
    pub fn new(
      config: &crate::config::ProviderConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating OpenAiClient for {}", config.api_base);
        if config.api_key.trim().is_empty()
        {   error!("No API key configured");
            return Err(crate::error::Error::MissingApiKey(
              crate::config::API_KEY_VAR.to_string()
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(OpenAiClient
        {   api_key: config.api_key.clone()
          , api_base: config.api_base.trim_end_matches('/').to_string()
          , http_client
        })
    }

    fn endpoint(&self) -> String
    {   format!("{}/chat/completions", self.api_base)
    }

    async fn handle_complete(
      &self
    , request: &crate::request::CompletionRequest
    ) -> Result<String, crate::error::Error>
    {   debug!(
          "Requesting completion from {} ({} messages, json: {})",
          request.model,
          request.messages.len(),
          request.structured_output
        );

        let body = ChatCompletionRequest::from_request(request);
        trace!("Chat request: {:?}", body);

        let response = self.http_client
          .post(self.endpoint())
          .bearer_auth(&self.api_key)
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            if e.is_timeout()
            {   crate::error::Error::Timeout
            } else
            {   crate::error::Error::HttpError(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("Chat response status: {}", status);

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {   error!("Rate limited by provider");
            return Err(crate::error::Error::RateLimitExceeded);
        }

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Provider error {}: {}", status, error_text);
            return Err(crate::error::Error::ApiError(
              format!("{}: {}", status, error_text)
            ));
        }

        let chat_response: ChatCompletionResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            if e.is_timeout()
            {   crate::error::Error::Timeout
            } else
            {   crate::error::Error::ParseError(e.to_string())
            }
          })?;

        let choice = chat_response.choices.into_iter().next()
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })?;
        trace!("Finish reason: {:?}", choice.finish_reason);

        choice.message.content
          .map(|content| content.trim().to_string())
          .ok_or_else(|| {
            error!("No content in first choice");
            crate::error::Error::NoContentInResponse
          })
    }
}

#[async_trait::async_trait]
impl crate::providers::CompletionClient for OpenAiClient
{   async fn complete(
      &self
    , request: crate::request::CompletionRequest
    ) -> crate::CompletionResult
    {   self.handle_complete(&request).await
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::request::CompletionRequest;

    fn request(structured_output: bool) -> CompletionRequest
    {   CompletionRequest
        {   model: "gpt-4o".to_string()
          , messages: vec![crate::Message::user("hi")]
          , max_tokens: Some(500)
          , temperature: None
          , structured_output
        }
    }

    #[test]
    fn json_mode_sets_response_format()
    {   let req = request(true);
        let value = serde_json::to_value(
          ChatCompletionRequest::from_request(&req)
        ).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["max_tokens"], 500);
        assert!(value.get("temperature").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn chat_mode_omits_response_format()
    {   let req = request(false);
        let value = serde_json::to_value(
          ChatCompletionRequest::from_request(&req)
        ).unwrap();
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn empty_key_is_rejected()
    {   let config = crate::config::ProviderConfig::default();
        assert!(matches!(
          OpenAiClient::new(&config),
          Err(crate::error::Error::MissingApiKey(_))
        ));
    }
}
