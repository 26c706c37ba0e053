use rayon::prelude::*;
use crate::core::{
    classifier::classify,
    narrative::{generate_reasoning, generate_recommendations},
    scoring::{calculate_component_scores, calculate_overall_score},
};
use crate::models::{
    ComponentScores, Match, MatchFeedback, NeighborhoodProfile, ScoringWeights, UserProfile,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Match>,
    pub total_candidates: usize,
    /// Candidates whose records could not be scored and were ranked at zero
    pub skipped_malformed: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Component scoring (lifestyle, demographic, location, budget, amenity)
/// 2. Weighted aggregation and tier classification
/// 3. Narrative generation
/// 4. Ranking and truncation
///
/// Holds nothing but its weights, so one instance can be shared across
/// threads and every call is reproducible.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one neighborhood for a user
    ///
    /// A malformed neighborhood record yields a zero-score match rather than
    /// an error so a batch can always be ranked.
    pub fn calculate_match(&self, user: &UserProfile, neighborhood: &NeighborhoodProfile) -> Match {
        self.score_candidate(user, neighborhood).0
    }

    /// Find the best matching neighborhoods for a user
    ///
    /// # Arguments
    /// * `user` - The user's profile
    /// * `candidates` - Neighborhoods to evaluate
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted by overall score, descending. Equal
    /// scores keep their candidate order.
    pub fn find_matches(
        &self,
        user: &UserProfile,
        candidates: &[NeighborhoodProfile],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        // Order is preserved by collect, so the stable sort below sees input order
        let scored: Vec<(Match, bool)> = candidates
            .par_iter()
            .map(|neighborhood| self.score_candidate(user, neighborhood))
            .collect();

        let skipped_malformed = scored.iter().filter(|(_, malformed)| *malformed).count();
        let mut matches: Vec<Match> = scored.into_iter().map(|(m, _)| m).collect();

        matches.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        matches.truncate(limit);

        tracing::debug!(
            "Scored {} candidates for user {} ({} malformed), keeping {}",
            total_candidates,
            user.id,
            skipped_malformed,
            matches.len()
        );

        MatchResult {
            matches,
            total_candidates,
            skipped_malformed,
        }
    }

    fn score_candidate(&self, user: &UserProfile, neighborhood: &NeighborhoodProfile) -> (Match, bool) {
        match calculate_component_scores(user, neighborhood) {
            Ok(scores) => (self.build_match(user, neighborhood, scores), false),
            Err(e) => {
                tracing::warn!("Scoring {} as zero for user {}: {}", neighborhood.id, user.id, e);
                (self.build_match(user, neighborhood, ComponentScores::zero()), true)
            }
        }
    }

    fn build_match(
        &self,
        user: &UserProfile,
        neighborhood: &NeighborhoodProfile,
        scores: ComponentScores,
    ) -> Match {
        let overall_score = calculate_overall_score(&scores, &self.weights);

        Match {
            id: uuid::Uuid::new_v4(),
            user_id: user.id.clone(),
            neighborhood_id: neighborhood.id.clone(),
            neighborhood_name: neighborhood.name.clone(),
            overall_score,
            lifestyle_score: scores.lifestyle * 100.0,
            demographic_score: scores.demographic * 100.0,
            location_score: scores.location * 100.0,
            budget_score: scores.budget * 100.0,
            amenity_score: scores.amenity * 100.0,
            match_strength: classify(overall_score),
            match_reasoning: generate_reasoning(neighborhood, &scores),
            recommendations: generate_recommendations(neighborhood, overall_score),
            feedback: MatchFeedback::default(),
            created_at: chrono::Utc::now(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
