use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::models::{Match, MatchStrength};

/// Aggregate statistics over a set of matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalytics {
    pub total_matches: usize,
    /// Matches where the user recorded whether they liked the neighborhood
    pub matches_with_feedback: usize,
    pub matches_with_ratings: usize,
    pub average_overall_score: f64,
    pub average_lifestyle_score: f64,
    pub average_demographic_score: f64,
    pub average_location_score: f64,
    pub strength_distribution: BTreeMap<MatchStrength, usize>,
}

impl MatchAnalytics {
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut strength_distribution = BTreeMap::new();
        for m in matches {
            *strength_distribution.entry(m.match_strength).or_insert(0) += 1;
        }

        Self {
            total_matches: matches.len(),
            matches_with_feedback: matches.iter().filter(|m| m.feedback.liked.is_some()).count(),
            matches_with_ratings: matches.iter().filter(|m| m.feedback.rating.is_some()).count(),
            average_overall_score: average(matches, |m| m.overall_score),
            average_lifestyle_score: average(matches, |m| m.lifestyle_score),
            average_demographic_score: average(matches, |m| m.demographic_score),
            average_location_score: average(matches, |m| m.location_score),
            strength_distribution,
        }
    }
}

fn average(matches: &[Match], field: impl Fn(&Match) -> f64) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    matches.iter().map(field).sum::<f64>() / matches.len() as f64
}
