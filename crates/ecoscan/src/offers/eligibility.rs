use super::catalog::{catalog, Offer};

/// Offers whose requirement fits within `points`, most demanding first.
///
/// The sort is stable, so offers sharing a requirement keep catalog order.
pub fn find_eligible_offers(points: i64) -> Vec<Offer> {
    eligible_from(catalog(), points)
}

pub(crate) fn eligible_from(offers: &[Offer], points: i64) -> Vec<Offer> {
    let mut eligible: Vec<Offer> = offers
        .iter()
        .filter(|offer| offer.points_required <= points)
        .copied()
        .collect();
    eligible.sort_by(|left, right| right.points_required.cmp(&left.points_required));
    eligible
}
