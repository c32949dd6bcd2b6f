//! Carbon scoring for detected clothing labels.
//!
//! Every function here is pure: the same labels always produce the same
//! analysis, and no input (unknown or empty included) is rejected.

mod engine;
mod impact;
mod recommendations;
mod table;

pub use engine::{
    compute_footprint, eco_points, sustainability_score, FootprintAnalysis, FootprintEngine,
    ItemAnalysis, ECO_POINTS_BUDGET, SUSTAINABILITY_REFERENCE_KG,
};
pub use impact::ImpactLevel;
pub use recommendations::{RecommendationTier, JEANS_TIP, T_SHIRT_TIP};
pub use table::{CarbonTable, DEFAULT_ITEM_CARBON};
