use crate::models::MatchStrength;

/// Map an overall score (0-100) to its match tier
///
/// A score belongs to the tier whose inclusive integer range
/// `[min_score, max_score]` contains it. Scores that land in no range,
/// such as 89.5 between VERY_GOOD and EXCELLENT, negatives and NaN, are
/// `Poor`.
pub fn classify(overall_score: f64) -> MatchStrength {
    MatchStrength::ALL
        .into_iter()
        .find(|tier| {
            tier.min_score() as f64 <= overall_score && overall_score <= tier.max_score() as f64
        })
        .unwrap_or(MatchStrength::Poor)
}
