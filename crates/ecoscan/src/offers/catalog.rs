use serde::Serialize;

/// Kind of reward an offer grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferCategory {
    Discount,
    Freebie,
    Certificate,
}

impl OfferCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::Freebie => "freebie",
            Self::Certificate => "certificate",
        }
    }
}

/// A redeemable reward gated by a minimum eco-points balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub points_required: i64,
    pub category: OfferCategory,
    /// Inclusive expiry as `YYYY-MM-DD`.
    pub valid_until: &'static str,
    pub brand: &'static str,
    pub value: &'static str,
}

const VALID_UNTIL: &str = "2024-12-31";

static CATALOG: [Offer; 8] = [
    Offer {
        id: 1,
        title: "5% Off Sustainable Clothing",
        description: "Get 5% off on eco-friendly clothing brands like Patagonia and Eileen Fisher",
        points_required: 10,
        category: OfferCategory::Discount,
        valid_until: VALID_UNTIL,
        brand: "EcoFashion",
        value: "5%",
    },
    Offer {
        id: 2,
        title: "10% Off Organic Cotton Items",
        description: "Exclusive discount on organic cotton products from sustainable brands",
        points_required: 20,
        category: OfferCategory::Discount,
        valid_until: VALID_UNTIL,
        brand: "GreenThreads",
        value: "10%",
    },
    Offer {
        id: 3,
        title: "Free Eco-Friendly Tote Bag",
        description: "Get a free reusable tote bag made from recycled ocean plastic",
        points_required: 15,
        category: OfferCategory::Freebie,
        valid_until: VALID_UNTIL,
        brand: "OceanSaver",
        value: "Free",
    },
    Offer {
        id: 4,
        title: "15% Off Recycled Clothing",
        description: "Save on clothing made from recycled materials and plastic bottles",
        points_required: 30,
        category: OfferCategory::Discount,
        valid_until: VALID_UNTIL,
        brand: "RecycleWear",
        value: "15%",
    },
    Offer {
        id: 5,
        title: "Free Carbon Offset Certificate",
        description: "Offset 10kg of CO₂ emissions with a verified carbon offset certificate",
        points_required: 25,
        category: OfferCategory::Certificate,
        valid_until: VALID_UNTIL,
        brand: "CarbonNeutral",
        value: "10kg CO₂",
    },
    Offer {
        id: 6,
        title: "20% Off Sustainable Fashion Bundle",
        description: "Biggest discount on sustainable fashion collections and eco-accessories",
        points_required: 40,
        category: OfferCategory::Discount,
        valid_until: VALID_UNTIL,
        brand: "EcoLux",
        value: "20%",
    },
    Offer {
        id: 7,
        title: "Free Clothing Repair Kit",
        description: "Extend your clothes' life with a professional repair and mending kit",
        points_required: 18,
        category: OfferCategory::Freebie,
        valid_until: VALID_UNTIL,
        brand: "RepairCo",
        value: "Free",
    },
    Offer {
        id: 8,
        title: "25% Off Vintage Collection",
        description: "Huge savings on curated vintage and pre-loved designer pieces",
        points_required: 35,
        category: OfferCategory::Discount,
        valid_until: VALID_UNTIL,
        brand: "VintageVault",
        value: "25%",
    },
];

/// The full offer list in publication order.
pub fn catalog() -> &'static [Offer] {
    &CATALOG
}

pub fn offer_by_id(id: u32) -> Option<&'static Offer> {
    CATALOG.iter().find(|offer| offer.id == id)
}
