/// Carbon cost assumed for labels missing from the table.
pub const DEFAULT_ITEM_CARBON: u32 = 5;

const STANDARD_ENTRIES: &[(&str, u32)] = &[
    ("T-shirt", 5),
    ("Jeans", 10),
    ("Sweater", 7),
    ("Jacket", 12),
    ("Dress", 8),
    ("Shirt", 4),
    ("Pants", 9),
    ("Skirt", 6),
    ("Hoodie", 8),
    ("Shorts", 3),
    ("Shoes", 8),
    ("Socks", 2),
    ("Hat", 3),
    ("Scarf", 4),
    ("Belt", 2),
    ("Blazer", 10),
    ("Coat", 15),
    ("Cardigan", 6),
    ("Tank Top", 3),
    ("Polo Shirt", 4),
];

/// Read-only mapping from garment label to kilograms of CO₂-equivalent.
///
/// Lookups are case-sensitive and never fail: labels outside the table are
/// charged [`DEFAULT_ITEM_CARBON`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarbonTable {
    entries: &'static [(&'static str, u32)],
}

impl CarbonTable {
    /// The twenty garment categories the recognizer is asked to report.
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES,
        }
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, carbon)| *carbon)
    }

    pub fn carbon_for(&self, label: &str) -> u32 {
        self.get(label).unwrap_or(DEFAULT_ITEM_CARBON)
    }

    /// Labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn entries(&self) -> &'static [(&'static str, u32)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CarbonTable {
    fn default() -> Self {
        Self::standard()
    }
}
