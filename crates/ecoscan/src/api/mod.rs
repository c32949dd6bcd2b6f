//! HTTP endpoints for photo analysis and reward lookup.

mod router;
mod upload;

pub use router::{
    parse_points, scan_router, AnalyzeImageResponse, ImageAnalysisView, OffersQuery,
    OffersResponse, ScanState, UploadedFileView,
};
pub use upload::{ImageUpload, IMAGE_FIELD};
