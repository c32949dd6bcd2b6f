use serde::{Deserialize, Serialize};

use super::impact::ImpactLevel;
use super::recommendations::build_recommendations;
use super::table::CarbonTable;

/// Eco-points start from this budget and lose one point per kilogram.
pub const ECO_POINTS_BUDGET: u32 = 50;

/// Footprint that maps to a sustainability score of zero.
pub const SUSTAINABILITY_REFERENCE_KG: f64 = 50.0;

/// Carbon cost and impact bucket for one detected label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAnalysis {
    #[serde(rename = "item")]
    pub label: String,
    pub carbon: u32,
    pub impact: ImpactLevel,
}

/// Aggregate result for a scan, in the order the labels were detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintAnalysis {
    pub items: Vec<ItemAnalysis>,
    pub total_carbon: u32,
    pub eco_points: u32,
    pub impact_level: ImpactLevel,
    pub recommendations: Vec<String>,
    pub sustainability_score: u8,
}

/// Stateless scorer over the standard carbon table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FootprintEngine;

impl FootprintEngine {
    pub fn analyze<S: AsRef<str>>(&self, labels: &[S]) -> FootprintAnalysis {
        let table = CarbonTable::standard();
        let items: Vec<ItemAnalysis> = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                let carbon = table.carbon_for(label);
                ItemAnalysis {
                    label: label.to_string(),
                    carbon,
                    impact: ImpactLevel::classify(carbon),
                }
            })
            .collect();

        let total_carbon = items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.carbon));

        FootprintAnalysis {
            items,
            total_carbon,
            eco_points: eco_points(total_carbon),
            impact_level: ImpactLevel::classify(total_carbon),
            recommendations: build_recommendations(total_carbon, labels),
            sustainability_score: sustainability_score(total_carbon),
        }
    }
}

/// Scores `labels` against the standard carbon table.
pub fn compute_footprint<S: AsRef<str>>(labels: &[S]) -> FootprintAnalysis {
    FootprintEngine.analyze(labels)
}

pub fn eco_points(total_carbon: u32) -> u32 {
    ECO_POINTS_BUDGET.saturating_sub(total_carbon)
}

pub fn sustainability_score(total_carbon: u32) -> u8 {
    let score = 100.0 - (f64::from(total_carbon) / SUSTAINABILITY_REFERENCE_KG) * 100.0;
    score.clamp(0.0, 100.0).round() as u8
}
