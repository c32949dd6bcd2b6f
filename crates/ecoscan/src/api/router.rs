use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::upload::read_image_upload;
use crate::error::AppError;
use crate::footprint::{FootprintAnalysis, FootprintEngine};
use crate::offers::{find_eligible_offers, Offer};
use crate::recognition::LabelDetector;

/// Room for multipart boundaries and part headers above the image itself.
const MULTIPART_ENVELOPE_BYTES: usize = 64 * 1024;

/// Shared handles for the scan endpoints.
#[derive(Clone)]
pub struct ScanState {
    detector: Arc<LabelDetector>,
    engine: FootprintEngine,
    max_upload_bytes: usize,
}

impl ScanState {
    pub fn new(detector: Arc<LabelDetector>, max_upload_bytes: usize) -> Self {
        Self {
            detector,
            engine: FootprintEngine,
            max_upload_bytes,
        }
    }
}

/// Router builder exposing image analysis and offer lookup.
pub fn scan_router(state: ScanState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_ENVELOPE_BYTES);

    Router::new()
        .route("/api/analyze-image", post(analyze_image_handler))
        .route("/api/offers", get(offers_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageResponse {
    pub success: bool,
    pub analysis: ImageAnalysisView,
    pub uploaded_file: UploadedFileView,
    pub ai_used: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisView {
    pub detected_items: Vec<String>,
    #[serde(flatten)]
    pub footprint: FootprintAnalysis,
}

#[derive(Debug, Serialize)]
pub struct UploadedFileView {
    pub name: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub content_type: String,
}

#[derive(Debug, Deserialize)]
pub struct OffersQuery {
    #[serde(default)]
    pub points: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffersResponse {
    pub success: bool,
    pub eco_points: i64,
    pub available_offers: Vec<Offer>,
    pub total_offers: usize,
}

pub(crate) async fn analyze_image_handler(
    State(state): State<ScanState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeImageResponse>, AppError> {
    let upload = read_image_upload(multipart, state.max_upload_bytes).await?;
    let detection = state.detector.detect(&upload.bytes).await;
    let footprint = state.engine.analyze(&detection.labels);

    info!(
        file = %upload.file_name,
        size = upload.size(),
        source = ?detection.source,
        items = detection.labels.len(),
        total_carbon = footprint.total_carbon,
        eco_points = footprint.eco_points,
        "image analyzed"
    );

    Ok(Json(AnalyzeImageResponse {
        success: true,
        uploaded_file: UploadedFileView {
            size: upload.size(),
            name: upload.file_name,
            content_type: upload.content_type,
        },
        analysis: ImageAnalysisView {
            detected_items: detection.labels,
            footprint,
        },
        ai_used: detection.ai_configured,
    }))
}

pub(crate) async fn offers_handler(
    query: Result<Query<OffersQuery>, QueryRejection>,
) -> Result<Json<OffersResponse>, AppError> {
    let Query(query) = query.map_err(|_| AppError::InvalidPoints)?;
    let points = query
        .points
        .as_deref()
        .and_then(parse_points)
        .ok_or(AppError::InvalidPoints)?;

    let available_offers = find_eligible_offers(points);
    info!(points, eligible = available_offers.len(), "offers matched");

    Ok(Json(OffersResponse {
        success: true,
        eco_points: points,
        total_offers: available_offers.len(),
        available_offers,
    }))
}

/// Parses a points query value.
///
/// The value must read as a number: a decimal literal (`"1e400"` included),
/// `Infinity`, or an unsigned `0x`, `0o` or `0b` literal. Its leading integer
/// is then taken the way `parseInt` does, so `"12.7"` becomes 12, `"1e3"`
/// becomes 1 and `"0x10"` becomes 16. A value with no leading digits such as
/// `".5"` or `"0b101"` counts as zero.
pub fn parse_points(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if !is_numeric(trimmed) {
        return None;
    }
    Some(leading_integer(trimmed))
}

fn is_numeric(value: &str) -> bool {
    if matches!(value, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some((radix, digits)) = split_radix_prefix(value) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    value.parse::<f64>().is_ok()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

fn split_radix_prefix(value: &str) -> Option<(u32, &str)> {
    let radix = match value.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &value[2..]))
}

fn leading_integer(value: &str) -> i64 {
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let (radix, digits) = match split_radix_prefix(unsigned) {
        Some((16, rest)) => (16, rest),
        _ => (10, unsigned),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());

    let magnitude = match i64::from_str_radix(&digits[..end], radix) {
        Ok(value) => value,
        Err(_) if end == 0 => 0,
        Err(_) => i64::MAX,
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
