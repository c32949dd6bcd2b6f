const REDUCE_TIER: [&str; 3] = [
    "Consider buying fewer items or choosing sustainable alternatives",
    "Look for items made from recycled or organic materials",
    "Try thrift shopping or clothing swaps to reduce environmental impact",
];

const GOOD_CHOICE_TIER: [&str; 3] = [
    "Good choice! Consider sustainable brands for future purchases",
    "Try to extend the lifespan of your clothing items with proper care",
    "Look for certifications like GOTS or OEKO-TEX when shopping",
];

const EXCELLENT_TIER: [&str; 3] = [
    "Excellent eco-friendly choices!",
    "You're making a positive impact on the environment",
    "Share your sustainable fashion choices to inspire others",
];

pub const JEANS_TIP: &str =
    "Tip: Wash jeans less frequently to reduce water usage and extend their life";
pub const T_SHIRT_TIP: &str = "Tip: Choose organic cotton t-shirts for lower environmental impact";

/// Message bracket selected by the total footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationTier {
    /// Total above 20 kg.
    Reduce,
    /// Total above 10 kg and at most 20 kg.
    GoodChoice,
    Excellent,
}

impl RecommendationTier {
    pub fn for_total(total_carbon: u32) -> Self {
        if total_carbon > 20 {
            Self::Reduce
        } else if total_carbon > 10 {
            Self::GoodChoice
        } else {
            Self::Excellent
        }
    }

    pub fn messages(&self) -> &'static [&'static str; 3] {
        match self {
            Self::Reduce => &REDUCE_TIER,
            Self::GoodChoice => &GOOD_CHOICE_TIER,
            Self::Excellent => &EXCELLENT_TIER,
        }
    }
}

/// Tier messages first, then the jeans tip, then the t-shirt tip. Tips match
/// the literal label only, whatever position it has in `labels`.
pub(crate) fn build_recommendations<S: AsRef<str>>(
    total_carbon: u32,
    labels: &[S],
) -> Vec<String> {
    let mut recommendations: Vec<String> = RecommendationTier::for_total(total_carbon)
        .messages()
        .iter()
        .map(|message| message.to_string())
        .collect();

    let has_label = |wanted: &str| labels.iter().any(|label| label.as_ref() == wanted);

    if has_label("Jeans") {
        recommendations.push(JEANS_TIP.to_string());
    }
    if has_label("T-shirt") {
        recommendations.push(T_SHIRT_TIP.to_string());
    }

    recommendations
}
