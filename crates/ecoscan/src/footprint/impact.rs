use serde::{Deserialize, Serialize};

/// Coarse bucket for a carbon value, shared by single items and totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ImpactLevel {
    /// Upper bounds are inclusive: 5 is still `Low`, 6 is `Medium`.
    pub fn classify(carbon: u32) -> Self {
        match carbon {
            0..=5 => Self::Low,
            6..=10 => Self::Medium,
            11..=15 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}
