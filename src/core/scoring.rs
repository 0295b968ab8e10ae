use crate::core::weights::{AvailabilityScores, RatingScale, MAX_SCORE};
use crate::models::Developer;

/// Availability score (0-100)
///
/// The availability flag dominates: a developer who is not taking work
/// scores zero even when online.
#[inline]
pub fn score_availability(developer: &Developer, scores: &AvailabilityScores) -> u32 {
    match (developer.availability, developer.online) {
        (false, _) => scores.unavailable,
        (true, true) => scores.online,
        (true, false) => scores.offline,
    }
}

/// Rating score (0-100)
///
/// A missing rating gets the neutral score. A rating of zero is a real
/// rating and scores zero.
#[inline]
pub fn score_rating(developer: &Developer, scale: &RatingScale) -> u32 {
    match developer.rating {
        None => scale.neutral,
        Some(rating) if rating.is_nan() => scale.neutral,
        Some(rating) => (rating * scale.multiplier).round().clamp(0.0, MAX_SCORE as f64) as u32,
    }
}
