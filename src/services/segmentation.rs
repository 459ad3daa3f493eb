//! Client for the external word-segmentation / entity-extraction API
//!
//! Sends the text as a UTF-8 JSON body `{"str": <text>}` and decodes the
//! JSON response into a [`SegmentationResult`]. Transport failures,
//! malformed JSON, and unexpected responses are caught and converted
//! into an explicit error marker rather than propagated; downstream
//! pipeline stages then see an all-empty result set instead of aborting.

use crate::types::{SegmentationResult, SegmentedEntity, SegmentedToken};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Abstraction over the segmentation backend, so analysis pipelines can
/// run against a stub in tests.
#[async_trait]
pub trait Segmenter: Send + Sync {
    /// Segment `text` into words, phrases, and entities.
    async fn segment(&self, text: &str) -> SegmentationReply;
}

/// Outcome of one segmentation call: either a normalized result or a
/// distinguishable error marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentationReply {
    Parsed(SegmentationResult),
    Error { reason: String },
}

impl SegmentationReply {
    /// Collapse the reply into a result set, treating the error marker
    /// as empty. The error has already been logged at the call site.
    pub fn into_result(self) -> SegmentationResult {
        match self {
            SegmentationReply::Parsed(result) => result,
            SegmentationReply::Error { .. } => SegmentationResult::default(),
        }
    }
}

#[derive(Serialize)]
struct SegmentationRequest<'a> {
    #[serde(rename = "str")]
    text: &'a str,
}

// Raw wire shapes. Every field defaults to empty so partial responses
// never fail to decode.

#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    word_list: Vec<RawToken>,
    #[serde(default)]
    phrase_list: Vec<RawToken>,
    #[serde(default)]
    entity_list: Vec<RawEntity>,
}

#[derive(Debug, Default, Deserialize)]
struct RawToken {
    #[serde(rename = "str", default)]
    text: String,
    #[serde(default)]
    tag: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawEntity {
    #[serde(rename = "str", default)]
    text: String,
    #[serde(default)]
    tag: String,
    #[serde(rename = "type", default)]
    entity_type: RawEntityType,
    #[serde(default)]
    meaning: RawMeaning,
}

#[derive(Debug, Default, Deserialize)]
struct RawEntityType {
    #[serde(default)]
    i18n: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawMeaning {
    #[serde(default)]
    related: Vec<String>,
}

impl From<RawResponse> for SegmentationResult {
    fn from(raw: RawResponse) -> Self {
        let token = |t: RawToken| SegmentedToken {
            text: t.text,
            tag: t.tag,
        };

        SegmentationResult {
            words: raw.word_list.into_iter().map(token).collect(),
            phrases: raw.phrase_list.into_iter().map(token).collect(),
            entities: raw
                .entity_list
                .into_iter()
                .map(|e| SegmentedEntity {
                    text: e.text,
                    tag: e.tag,
                    type_label: e.entity_type.i18n,
                    related: e.meaning.related,
                })
                .collect(),
        }
    }
}

/// HTTP client for the segmentation API.
///
/// Uses the HTTP client's default timeout behavior; no explicit timeout
/// or cancellation is threaded through.
pub struct HttpSegmentationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSegmentationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Segmenter for HttpSegmentationClient {
    async fn segment(&self, text: &str) -> SegmentationReply {
        debug!("Calling segmentation API ({} chars)", text.chars().count());

        let request = SegmentationRequest { text };

        let response = match self.client.post(&self.endpoint).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Segmentation request failed: {}", e);
                return SegmentationReply::Error {
                    reason: "Request failed".to_string(),
                };
            }
        };

        if !response.status().is_success() {
            warn!(
                "Segmentation API returned unexpected status {}",
                response.status()
            );
            return SegmentationReply::Error {
                reason: "An unexpected error occurred".to_string(),
            };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read segmentation response body: {}", e);
                return SegmentationReply::Error {
                    reason: "Request failed".to_string(),
                };
            }
        };

        match serde_json::from_str::<RawResponse>(&body) {
            Ok(raw) => SegmentationReply::Parsed(raw.into()),
            Err(e) => {
                warn!("Segmentation JSON decode failed: {}", e);
                SegmentationReply::Error {
                    reason: "JSON decode failed".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_str_key() {
        let body = serde_json::to_string(&SegmentationRequest { text: "你好" }).unwrap();
        assert_eq!(body, r#"{"str":"你好"}"#);
    }

    #[test]
    fn test_full_response_normalization() {
        let body = r#"{
            "word_list": [{"str": "大熊猫", "tag": "NN"}, {"str": "。", "tag": "PU"}],
            "phrase_list": [{"str": "大熊猫", "tag": "NN"}],
            "entity_list": [{
                "str": "大熊猫",
                "tag": "animal.generic",
                "type": {"name": "animal.generic", "i18n": "动物"},
                "meaning": {"related": ["熊猫", "竹子"]}
            }]
        }"#;
        let raw: RawResponse = serde_json::from_str(body).unwrap();
        let result = SegmentationResult::from(raw);

        assert_eq!(result.words.len(), 2);
        assert_eq!(result.words[0].text, "大熊猫");
        assert_eq!(result.words[0].tag, "NN");
        assert_eq!(result.phrases.len(), 1);
        assert_eq!(result.entities[0].type_label, "动物");
        assert_eq!(result.entities[0].related, ["熊猫", "竹子"]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw: RawResponse = serde_json::from_str(r#"{"word_list": [{"str": "hi"}]}"#).unwrap();
        let result = SegmentationResult::from(raw);

        assert_eq!(result.words[0].tag, "");
        assert!(result.phrases.is_empty());
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_entity_without_meaning_or_type() {
        let raw: RawResponse =
            serde_json::from_str(r#"{"entity_list": [{"str": "x", "tag": "t"}]}"#).unwrap();
        let result = SegmentationResult::from(raw);

        assert_eq!(result.entities[0].type_label, "");
        assert!(result.entities[0].related.is_empty());
    }

    #[test]
    fn test_error_reply_collapses_to_empty() {
        let reply = SegmentationReply::Error {
            reason: "Request failed".to_string(),
        };
        assert_eq!(reply.into_result(), SegmentationResult::default());
    }

    #[tokio::test]
    async fn test_transport_failure_yields_error_marker() {
        // Port 9 (discard) is not listening; connection is refused.
        let client = HttpSegmentationClient::new("http://127.0.0.1:9/api");
        let reply = client.segment("some text").await;
        assert!(matches!(reply, SegmentationReply::Error { .. }));
    }
}
