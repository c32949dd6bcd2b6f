use crate::config::ConfigError;
use crate::recognition::RecognitionError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Problems with an image upload, reported back to the client.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no image file uploaded")]
    Missing,
    #[error("content type '{content_type}' is not an image")]
    InvalidType { content_type: String },
    #[error("upload exceeds the {limit_bytes} byte limit")]
    TooLarge { limit_bytes: usize },
    #[error("malformed multipart body: {0}")]
    Malformed(String),
}

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Recognition(RecognitionError),
    Upload(UploadError),
    InvalidPoints,
}

impl AppError {
    /// Short title used as the `error` field of JSON error bodies.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Upload(UploadError::Missing) => "No image file uploaded",
            AppError::Upload(UploadError::InvalidType { .. }) => "Invalid file type",
            AppError::Upload(UploadError::TooLarge { .. }) => "File too large",
            AppError::Upload(UploadError::Malformed(_)) => "Invalid upload",
            AppError::InvalidPoints => "Invalid eco-points",
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Recognition(_) => "Internal server error",
        }
    }

    /// Human-facing guidance used as the `message` field of JSON error bodies.
    pub fn guidance(&self) -> String {
        match self {
            AppError::Upload(UploadError::Missing) => "Please upload an image file".to_string(),
            AppError::Upload(UploadError::InvalidType { .. }) => {
                "Please upload a valid image file".to_string()
            }
            AppError::Upload(UploadError::TooLarge { limit_bytes }) => format!(
                "Please upload an image smaller than {}MB",
                limit_bytes / (1024 * 1024)
            ),
            AppError::InvalidPoints => {
                "Please provide valid eco-points as a query parameter".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upload(UploadError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upload(_) | AppError::InvalidPoints => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Recognition(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Recognition(err) => write!(f, "recognition error: {}", err),
            AppError::Upload(err) => write!(f, "upload rejected: {}", err),
            AppError::InvalidPoints => write!(f, "points must be a number"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Recognition(err) => Some(err),
            AppError::Upload(err) => Some(err),
            AppError::InvalidPoints => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": self.title(),
            "message": self.guidance(),
        }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RecognitionError> for AppError {
    fn from(value: RecognitionError) -> Self {
        Self::Recognition(value)
    }
}

impl From<UploadError> for AppError {
    fn from(value: UploadError) -> Self {
        Self::Upload(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_map_to_client_statuses() {
        let too_large = AppError::from(UploadError::TooLarge {
            limit_bytes: 10 * 1024 * 1024,
        });
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(too_large.title(), "File too large");
        assert_eq!(
            too_large.guidance(),
            "Please upload an image smaller than 10MB"
        );

        let wrong_type = AppError::from(UploadError::InvalidType {
            content_type: "text/plain".to_string(),
        });
        assert_eq!(wrong_type.status(), StatusCode::BAD_REQUEST);
        assert_eq!(wrong_type.title(), "Invalid file type");
    }

    #[test]
    fn invalid_points_is_a_bad_request() {
        let err = AppError::InvalidPoints;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.title(), "Invalid eco-points");
    }

    #[test]
    fn serve_failures_surface_as_io_errors() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.title(), "Internal server error");
        assert_eq!(err.to_string(), "io error: address in use");
    }
}
