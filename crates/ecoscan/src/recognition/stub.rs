//! Local chat-completions server for exercising `VisionClient` in tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::config::VisionConfig;

pub(crate) const STUB_API_KEY: &str = "sk-stub";

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Value,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub(crate) struct ChatCompletionsStub {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ChatCompletionsStub {
    /// Serves `reply` with `status` at `/v1/chat/completions`.
    pub async fn spawn(status: StatusCode, reply: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            reply,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub binds");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub serves");
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            requests,
        }
    }

    /// Replies with a single choice whose message content is `content`.
    pub async fn replying_with(content: &str) -> Self {
        Self::spawn(
            StatusCode::OK,
            json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] }),
        )
        .await
    }

    pub fn config(&self) -> VisionConfig {
        VisionConfig {
            api_key: Some(STUB_API_KEY.to_string()),
            model: "gpt-4-vision-preview".to_string(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub lock").clone()
    }
}

async fn chat_completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .expect("stub lock")
        .push(RecordedRequest {
            authorization,
            body,
        });

    (state.status, Json(state.reply))
}
