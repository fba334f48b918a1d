//! Minimal web UI and JSON API

use std::sync::Arc;

use axum::{
  extract::{rejection::JsonRejection, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  routing::{get, post},
  Json, Router,
};
use log::{debug, info, error};
use serde::{Deserialize, Serialize};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest
{   pub message: String
  , #[serde(default)]
    pub history: Option<Vec<crate::Message>>
  , #[serde(default)]
    pub location: Option<String>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse
{   pub reply: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalRequest
{   pub mood: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub error: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodsResponse
{   pub moods: Vec<String>
}

#[derive(Serialize)]
pub struct HealthResponse
{   pub status: &'static str
  , pub version: &'static str
}

/// Build the router for a shared companion
pub fn router(companion: Arc<crate::Companion>) -> Router
{   Router::new()
      .route("/", get(index))
      .route("/health", get(health))
      .route("/api/moods", get(moods))
      .route("/api/chat", post(chat))
      .route("/api/journal", post(journal))
      .with_state(companion)
}

/// Bind and serve until the process is stopped
pub async fn serve(
  companion: Arc<crate::Companion>
, addr: &str
) -> Result<(), crate::error::Error>
{   let listener = tokio::net::TcpListener::bind(addr).await
      .map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        crate::error::Error::Server(format!("bind {}: {}", addr, e))
      })?;
    info!("Web UI listening on http://{}", addr);

    axum::serve(listener, router(companion)).await
      .map_err(|e| crate::error::Error::Server(e.to_string()))
}

async fn index() -> Html<&'static str>
{   Html(INDEX_HTML)
}

async fn health() -> Json<HealthResponse>
{   Json(HealthResponse
    {   status: "ok"
      , version: env!("CARGO_PKG_VERSION")
    })
}

async fn moods() -> Json<MoodsResponse>
{   Json(MoodsResponse
    {   moods: crate::journal::KNOWN_MOODS
          .iter()
          .map(|m| m.to_string())
          .collect()
    })
}

/// Answers 200 with text, provider failures included.
/// An unreadable body gets the rejection status with the same JSON shape.
async fn chat(
  State(companion): State<Arc<crate::Companion>>
, payload: Result<Json<ChatRequest>, JsonRejection>
) -> Response
{   let req = match payload
    {   Ok(Json(req)) => req
      , Err(rejection) => {
          let err = rejected_body(&rejection);
          let body = ChatResponse
          {   reply: format!("{}: {}", crate::companion::CHAT_ERROR_PREFIX, err)
          };
          return (rejection.status(), Json(body)).into_response();
        }
    };

    let history = req.history.unwrap_or_default();
    debug!("POST /api/chat with {} history messages", history.len());
    let reply = companion
      .chat_text(&req.message, &history, req.location.as_deref())
      .await;
    Json(ChatResponse { reply }).into_response()
}

async fn journal(
  State(companion): State<Arc<crate::Companion>>
, payload: Result<Json<JournalRequest>, JsonRejection>
) -> Response
{   let req = match payload
    {   Ok(Json(req)) => req
      , Err(rejection) => {
          let body = ErrorResponse
          {   error: format!(
                "{}: {}",
                crate::companion::PROMPT_ERROR_PREFIX,
                rejected_body(&rejection)
              )
          };
          return (rejection.status(), Json(body)).into_response();
        }
    };

    debug!("POST /api/journal for mood '{}'", req.mood);
    match companion.journal_prompts(&req.mood).await
    {   Ok(prompts) => Json(prompts).into_response()
      , Err(e) => {
          let body = ErrorResponse
          {   error: format!(
                "{}: {}", crate::companion::PROMPT_ERROR_PREFIX, e
              )
          };
          (status_for(&e), Json(body)).into_response()
        }
    }
}

fn rejected_body(rejection: &JsonRejection) -> crate::error::Error
{   debug!("Rejected request body: {}", rejection.body_text());
    crate::error::Error::InvalidInput(rejection.body_text())
}

fn status_for(err: &crate::error::Error) -> StatusCode
{   use crate::error::Error;
    match err
    {   Error::InvalidInput(_) => StatusCode::BAD_REQUEST
      , Error::MissingApiKey(_)
      | Error::InvalidConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR
      , Error::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS
      , Error::Timeout => StatusCode::GATEWAY_TIMEOUT
      , _ => StatusCode::BAD_GATEWAY
    }
}
