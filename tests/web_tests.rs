use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use moodmate::config::CompanionConfig;
use moodmate::request::CompletionRequest;
use moodmate::{Companion, CompletionClient, Error};
use tower::ServiceExt;

/// Replays one canned result for every call
struct CannedClient
{   reply: moodmate::CompletionResult
}

#[async_trait::async_trait]
impl CompletionClient for CannedClient
{   async fn complete(&self, _request: CompletionRequest)
      -> moodmate::CompletionResult
    {   self.reply.clone()
    }
}

fn app(reply: moodmate::CompletionResult) -> axum::Router
{   let companion = Companion::new(
      CompanionConfig::default()
    , Arc::new(CannedClient { reply })
    );
    moodmate::web::router(Arc::new(companion))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body>
{   Request::builder()
      .method("POST")
      .uri(uri)
      .header("content-type", "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value
{   let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn prompts_json(n: usize) -> String
{   let questions: Vec<String> = (1..=n)
      .map(|i| format!("Question {}?", i))
      .collect();
    serde_json::json!({ "mood": "calm", "questions": questions }).to_string()
}

#[tokio::test]
async fn test_index_serves_ui()
{   let response = app(Ok(String::new()))
      .oneshot(Request::get("/").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/chat"));
    assert!(html.contains("/api/journal"));
}

#[tokio::test]
async fn test_health()
{   let response = app(Ok(String::new()))
      .oneshot(Request::get("/health").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_moods_lists_known_moods()
{   let response = app(Ok(String::new()))
      .oneshot(Request::get("/api/moods").body(Body::empty()).unwrap())
      .await
      .unwrap();
    let json = body_json(response).await;
    let moods = json["moods"].as_array().unwrap();
    assert_eq!(moods.len(), moodmate::journal::KNOWN_MOODS.len());
    assert_eq!(moods[0], "excellent");
}

#[tokio::test]
async fn test_chat_returns_reply()
{   let request = post_json("/api/chat", serde_json::json!({
      "message": "Hello",
      "history": [
        { "role": "user", "content": "Hi" },
        { "role": "assistant", "content": "Hello, how are you?" }
      ],
      "location": "Test City"
    }));
    let response = app(Ok("Chat response".to_string()))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["reply"], "Chat response");
}

#[tokio::test]
async fn test_chat_failure_is_still_text()
{   let request = post_json("/api/chat", serde_json::json!({
      "message": "Hello",
      "history": null
    }));
    let response = app(Err(Error::Timeout))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
      body_json(response).await["reply"],
      "Error generating response: Provider request timed out"
    );
}

#[tokio::test]
async fn test_journal_returns_prompts()
{   let request = post_json("/api/journal", serde_json::json!({ "mood": "calm" }));
    let response = app(Ok(prompts_json(7)))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mood"], "calm");
    assert_eq!(json["questions"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_journal_malformed_reply_is_bad_gateway()
{   let request = post_json("/api/journal", serde_json::json!({ "mood": "calm" }));
    let response = app(Ok("not json".to_string()))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let error = body_json(response).await["error"]
      .as_str()
      .unwrap()
      .to_string();
    assert!(error.starts_with("Error generating prompt: Malformed journal prompts"));
}

#[tokio::test]
async fn test_journal_rate_limit_maps_to_429()
{   let request = post_json("/api/journal", serde_json::json!({ "mood": "sad" }));
    let response = app(Err(Error::RateLimitExceeded))
      .oneshot(request)
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

fn post_raw(uri: &str, body: &'static str) -> Request<Body>
{   Request::builder()
      .method("POST")
      .uri(uri)
      .header("content-type", "application/json")
      .body(Body::from(body))
      .unwrap()
}

#[tokio::test]
async fn test_chat_unreadable_body_answers_json()
{   let response = app(Ok("unused".to_string()))
      .oneshot(post_raw("/api/chat", "{not json"))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let reply = body_json(response).await["reply"]
      .as_str()
      .unwrap()
      .to_string();
    assert!(reply.starts_with("Error generating response: Invalid input"));
}

#[tokio::test]
async fn test_chat_missing_message_answers_json()
{   let request = post_json("/api/chat", serde_json::json!({ "msg": 1 }));
    let response = app(Ok("unused".to_string()))
      .oneshot(request)
      .await
      .unwrap();
    assert!(response.status().is_client_error());
    let reply = body_json(response).await["reply"]
      .as_str()
      .unwrap()
      .to_string();
    assert!(reply.starts_with("Error generating response: Invalid input"));
}

#[tokio::test]
async fn test_journal_unreadable_body_answers_json()
{   let response = app(Ok(prompts_json(6)))
      .oneshot(post_raw("/api/journal", "mood=calm"))
      .await
      .unwrap();
    assert!(response.status().is_client_error());
    let error = body_json(response).await["error"]
      .as_str()
      .unwrap()
      .to_string();
    assert!(error.starts_with("Error generating prompt: Invalid input"));
}

#[tokio::test]
async fn test_index_checks_status_before_rendering_reply()
{   let response = app(Ok(String::new()))
      .oneshot(Request::get("/").body(Body::empty()).unwrap())
      .await
      .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("readJson(res, 'reply')"));
    assert!(html.contains("if (!res.ok)"));
}
