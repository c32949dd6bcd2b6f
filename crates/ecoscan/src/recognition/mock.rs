use rand::seq::SliceRandom;
use rand::Rng;

/// Garments the mock recognizer can report.
pub const MOCK_VOCABULARY: [&str; 12] = [
    "T-shirt", "Jeans", "Sweater", "Jacket", "Dress", "Shirt", "Pants", "Skirt", "Hoodie",
    "Shorts", "Shoes", "Socks",
];

pub(crate) const FALLBACK_LABEL: &str = "T-shirt";

/// Stand-in recognizer used when no vision model is configured or reachable.
///
/// Each call draws between one and three labels; repeated draws are dropped,
/// so a call may return fewer labels than it drew.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLabelSource;

impl MockLabelSource {
    pub fn detect(&self) -> Vec<String> {
        self.detect_with(&mut rand::thread_rng())
    }

    pub fn detect_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let draws = rng.gen_range(1..=3);
        let mut labels: Vec<String> = Vec::with_capacity(draws);

        for _ in 0..draws {
            if let Some(label) = MOCK_VOCABULARY.choose(&mut *rng) {
                if !labels.iter().any(|existing| existing == label) {
                    labels.push((*label).to_string());
                }
            }
        }

        if labels.is_empty() {
            labels.push(FALLBACK_LABEL.to_string());
        }
        labels
    }
}
