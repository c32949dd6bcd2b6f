//! Label sources that turn an uploaded photo into garment labels.

mod mock;
#[cfg(test)]
mod stub;
mod vision;

pub use mock::{MockLabelSource, MOCK_VOCABULARY};
pub use vision::{extract_labels_from_text, parse_vision_reply, VisionClient};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::VisionConfig;

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("vision request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("vision API responded with status {status}")]
    Status { status: u16 },
    #[error("vision API returned an empty reply")]
    EmptyReply,
}

/// Which source produced a set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSourceKind {
    Vision,
    Mock,
}

/// Labels for one image plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub labels: Vec<String>,
    pub source: LabelSourceKind,
    /// A vision model was configured, whether or not it answered.
    pub ai_configured: bool,
}

/// Prefers the vision model and falls back to the mock on any failure.
#[derive(Debug, Clone, Default)]
pub struct LabelDetector {
    vision: Option<VisionClient>,
    mock: MockLabelSource,
}

impl LabelDetector {
    pub fn new(vision: Option<VisionClient>) -> Self {
        Self {
            vision,
            mock: MockLabelSource,
        }
    }

    pub fn mock_only() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &VisionConfig) -> Result<Self, RecognitionError> {
        Ok(Self::new(VisionClient::from_config(config)?))
    }

    pub fn vision_enabled(&self) -> bool {
        self.vision.is_some()
    }

    pub async fn detect(&self, image: &[u8]) -> Detection {
        let Some(client) = &self.vision else {
            info!("no vision model configured, using mock recognition");
            return self.mock_detection(false);
        };

        match client.detect_labels(image).await {
            Ok(labels) => Detection {
                labels,
                source: LabelSourceKind::Vision,
                ai_configured: true,
            },
            Err(error) => {
                warn!(
                    %error,
                    model = client.model(),
                    "vision analysis failed, falling back to mock recognition"
                );
                self.mock_detection(true)
            }
        }
    }

    fn mock_detection(&self, ai_configured: bool) -> Detection {
        Detection {
            labels: self.mock.detect(),
            source: LabelSourceKind::Mock,
            ai_configured,
        }
    }
}
