//! NeighborFit - neighborhood matching engine
//!
//! Scores how well a neighborhood suits a person across lifestyle,
//! demographic, location, budget and amenity dimensions, classifies and
//! narrates each result, and ranks candidate neighborhoods for a user.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, MatchAnalytics, MatchResult, Matcher};
pub use models::{Match, MatchStrength, NeighborhoodProfile, ScoringWeights, UserProfile};
pub use services::{MatchingError, MatchingService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        let m = matcher.calculate_match(&UserProfile::new("u"), &NeighborhoodProfile::new("n", "Elm"));
        assert_eq!(classify(m.overall_score), m.match_strength);
    }
}
