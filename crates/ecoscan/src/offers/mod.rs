//! Static reward catalog and points-based eligibility.

mod catalog;
mod eligibility;

pub use catalog::{catalog, offer_by_id, Offer, OfferCategory};
pub use eligibility::find_eligible_offers;
