use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use tracing::{debug, warn};

use super::mock::FALLBACK_LABEL;
use super::RecognitionError;
use crate::config::VisionConfig;
use crate::footprint::CarbonTable;

const MAX_REPLY_TOKENS: u32 = 300;

/// Instruction sent alongside every image.
pub(crate) fn detection_prompt() -> String {
    let vocabulary: Vec<&str> = CarbonTable::standard().labels().collect();
    format!(
        "Analyze this image and identify all clothing items visible. Return ONLY a JSON array \
         of clothing item names. Use these exact categories when possible: {}. If you see items \
         not in this list, use the closest match or generic term. Example response: \
         [\"T-shirt\", \"Jeans\"]",
        vocabulary.join(", ")
    )
}

/// Client for an OpenAI-compatible chat-completions endpoint with image input.
#[derive(Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl VisionClient {
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_config(config: &VisionConfig) -> Result<Option<Self>, RecognitionError> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Some(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
        }))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn detect_labels(&self, image: &[u8]) -> Result<Vec<String>, RecognitionError> {
        let body = json!({
            "model": self.model,
            "max_tokens": MAX_REPLY_TOKENS,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": detection_prompt() },
                    {
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:image/jpeg;base64,{}", BASE64.encode(image)),
                        },
                    },
                ],
            }],
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionError::Status {
                status: status.as_u16(),
            });
        }

        let completion: ChatCompletion = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(RecognitionError::EmptyReply)?;

        debug!(model = %self.model, reply_len = content.len(), "vision reply received");
        Ok(parse_vision_reply(&content))
    }
}

impl fmt::Debug for VisionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Turns a model reply into labels.
///
/// A non-empty JSON array wins; its non-blank strings are kept as-is. Any
/// other reply is scanned for vocabulary labels, and a reply mentioning none
/// of them yields a single t-shirt.
pub fn parse_vision_reply(content: &str) -> Vec<String> {
    let content = content.trim();

    match serde_json::from_str::<Vec<serde_json::Value>>(content) {
        Ok(values) if !values.is_empty() => {
            let labels: Vec<String> = values
                .into_iter()
                .filter_map(|value| match value {
                    serde_json::Value::String(label) if !label.trim().is_empty() => Some(label),
                    _ => None,
                })
                .collect();
            if !labels.is_empty() {
                return labels;
            }
        }
        Ok(_) => {}
        Err(_) => warn!(reply = content, "vision reply was not a JSON array"),
    }

    let found = extract_labels_from_text(content);
    if found.is_empty() {
        vec![FALLBACK_LABEL.to_string()]
    } else {
        found
    }
}

/// Vocabulary labels mentioned anywhere in `text`, in table order.
///
/// Matching is a case-insensitive substring test, so "T-shirt" also counts as
/// a mention of "Shirt".
pub fn extract_labels_from_text(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    CarbonTable::standard()
        .labels()
        .filter(|label| haystack.contains(&label.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::stub::{ChatCompletionsStub, STUB_API_KEY};
    use axum::http::StatusCode;
    use std::time::Duration;

    #[test]
    fn json_array_reply_is_taken_verbatim() {
        let labels = parse_vision_reply(" [\"Jeans\", \"\", 4, \"Leather Boots\"] ");
        assert_eq!(labels, vec!["Jeans", "Leather Boots"]);
    }

    #[test]
    fn prose_reply_falls_back_to_vocabulary_scan() {
        let labels = parse_vision_reply("I can see a blue t-shirt and a wool coat.");
        assert_eq!(labels, vec!["T-shirt", "Shirt", "Coat"]);
    }

    #[test]
    fn reply_without_known_items_defaults_to_t_shirt() {
        assert_eq!(parse_vision_reply("no garments here"), vec!["T-shirt"]);
        assert_eq!(parse_vision_reply("[]"), vec!["T-shirt"]);
        assert_eq!(parse_vision_reply("[1, 2]"), vec!["T-shirt"]);
    }

    #[test]
    fn prompt_lists_every_table_label() {
        let prompt = detection_prompt();
        for label in CarbonTable::standard().labels() {
            assert!(prompt.contains(label), "prompt missing {label}");
        }
    }

    #[test]
    fn client_requires_api_key() {
        let mut config = VisionConfig {
            api_key: None,
            model: "gpt-4-vision-preview".to_string(),
            base_url: "https://api.openai.com/v1/".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert!(VisionClient::from_config(&config)
            .expect("builder succeeds")
            .is_none());

        config.api_key = Some("sk-test".to_string());
        let client = VisionClient::from_config(&config)
            .expect("builder succeeds")
            .expect("client configured");
        assert_eq!(client.endpoint, "https://api.openai.com/v1/chat/completions");
        assert_eq!(client.model(), "gpt-4-vision-preview");
    }

    #[tokio::test]
    async fn detect_labels_posts_prompt_and_image_with_bearer_auth() {
        let stub = ChatCompletionsStub::replying_with("[\"T-shirt\", \"Jeans\"]").await;
        let client = VisionClient::from_config(&stub.config())
            .expect("builder succeeds")
            .expect("client configured");
        let image = [0xff, 0xd8, 0xff, 0xe0];

        let labels = client.detect_labels(&image).await.expect("labels detected");
        assert_eq!(labels, vec!["T-shirt", "Jeans"]);

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(
            request.authorization.as_deref(),
            Some(format!("Bearer {STUB_API_KEY}").as_str())
        );

        let body = &request.body;
        assert_eq!(body["model"], "gpt-4-vision-preview");
        assert_eq!(body["max_tokens"], MAX_REPLY_TOKENS);
        let message = &body["messages"][0];
        assert_eq!(message["role"], "user");
        assert_eq!(message["content"][0]["type"], "text");
        assert_eq!(message["content"][0]["text"], detection_prompt());
        assert_eq!(message["content"][1]["type"], "image_url");
        assert_eq!(
            message["content"][1]["image_url"]["url"],
            format!("data:image/jpeg;base64,{}", BASE64.encode(image))
        );
    }

    #[tokio::test]
    async fn prose_reply_is_scanned_for_labels() {
        let stub = ChatCompletionsStub::replying_with("A denim jacket over a hoodie.").await;
        let client = VisionClient::from_config(&stub.config())
            .expect("builder succeeds")
            .expect("client configured");

        let labels = client.detect_labels(b"jpeg").await.expect("labels detected");
        assert_eq!(labels, vec!["Jacket", "Hoodie"]);
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let stub = ChatCompletionsStub::spawn(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "error": { "message": "overloaded" } }),
        )
        .await;
        let client = VisionClient::from_config(&stub.config())
            .expect("builder succeeds")
            .expect("client configured");

        let err = client.detect_labels(b"jpeg").await.expect_err("status error");
        assert!(matches!(err, RecognitionError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn missing_or_blank_content_is_an_empty_reply() {
        for reply in [
            serde_json::json!({ "choices": [] }),
            serde_json::json!({ "choices": [{ "message": { "content": null } }] }),
            serde_json::json!({ "choices": [{ "message": { "content": "   " } }] }),
        ] {
            let stub = ChatCompletionsStub::spawn(StatusCode::OK, reply).await;
            let client = VisionClient::from_config(&stub.config())
                .expect("builder succeeds")
                .expect("client configured");

            let err = client.detect_labels(b"jpeg").await.expect_err("empty reply");
            assert!(matches!(err, RecognitionError::EmptyReply));
        }
    }
}
