use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::error::UploadError;

/// Multipart field that carries the photo.
pub const IMAGE_FIELD: &str = "image";

/// An accepted image upload held in memory.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Reads the first `image` field, ignoring any other parts.
pub(crate) async fn read_image_upload(
    multipart: Result<Multipart, MultipartRejection>,
    max_bytes: usize,
) -> Result<ImageUpload, UploadError> {
    let mut multipart = multipart.map_err(|_| UploadError::Missing)?;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|err| map_multipart_error(err, max_bytes))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = resolve_content_type(field.content_type(), &file_name);
        if !is_image(&content_type) {
            return Err(UploadError::InvalidType { content_type });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|err| map_multipart_error(err, max_bytes))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(UploadError::TooLarge {
                    limit_bytes: max_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(ImageUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(UploadError::Missing)
}

/// The request body limit surfaces as a stream error wherever it is hit.
fn map_multipart_error(err: MultipartError, max_bytes: usize) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge {
            limit_bytes: max_bytes,
        }
    } else {
        UploadError::Malformed(err.body_text())
    }
}

/// Declared part type, or a guess from the file extension when absent.
pub(crate) fn resolve_content_type(declared: Option<&str>, file_name: &str) -> String {
    match declared {
        Some(declared) if !declared.trim().is_empty() => declared.trim().to_string(),
        _ => mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

pub(crate) fn is_image(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|parsed| parsed.type_() == mime::IMAGE)
        .unwrap_or(false)
}
