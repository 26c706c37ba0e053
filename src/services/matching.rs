use std::sync::Arc;
use thiserror::Error;
use validator::Validate;
use crate::core::{
    filters::{build_candidate_query, needs_relaxation},
    MatchResult, Matcher,
};
use crate::models::{FilterSettings, Match, NeighborhoodProfile, UserProfile};
use crate::services::store::{MatchSink, NeighborhoodSource, StoreError};

/// Errors that can occur while producing matches for a user
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("User profile incomplete for matching: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Data store error: {0}")]
    Store(#[from] StoreError),

    #[error("Scoring task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Coordinates the data collaborators around the matcher
///
/// Reads candidates in, runs the CPU-bound matcher off the async runtime and
/// hands the ranked matches to the sink.
#[derive(Clone)]
pub struct MatchingService {
    neighborhoods: Arc<dyn NeighborhoodSource>,
    sink: Arc<dyn MatchSink>,
    matcher: Matcher,
    filter: FilterSettings,
}

impl MatchingService {
    pub fn new(
        neighborhoods: Arc<dyn NeighborhoodSource>,
        sink: Arc<dyn MatchSink>,
        matcher: Matcher,
        filter: FilterSettings,
    ) -> Self {
        Self {
            neighborhoods,
            sink,
            matcher,
            filter,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Neighborhoods worth scoring for a user
    ///
    /// Narrows the universe by income bracket, budget and the fixed
    /// crime/safety bounds. When that leaves fewer than `min_candidates`, the
    /// filter is dropped and the whole universe is returned instead.
    pub async fn candidate_neighborhoods(
        &self,
        user: &UserProfile,
    ) -> Result<Vec<NeighborhoodProfile>, MatchingError> {
        let query = build_candidate_query(user, &self.filter);
        let candidates = self.neighborhoods.neighborhoods_for_matching(&query).await?;

        if needs_relaxation(candidates.len(), &self.filter) {
            tracing::info!(
                "Only {} filtered candidates for user {} (floor {}), using all neighborhoods",
                candidates.len(),
                user.id,
                self.filter.min_candidates
            );
            return Ok(self.neighborhoods.all_neighborhoods().await?);
        }

        Ok(candidates)
    }

    /// Find, rank and save the best neighborhoods for a user
    pub async fn find_matches_for_user(
        &self,
        user: &UserProfile,
        limit: usize,
    ) -> Result<MatchResult, MatchingError> {
        tracing::info!("Finding matches for user: {}, limit: {}", user.id, limit);

        user.validate()?;

        let candidates = self.candidate_neighborhoods(user).await?;
        self.rank_and_save(user, candidates, limit).await
    }

    /// Like [`find_matches_for_user`](Self::find_matches_for_user) but scores
    /// the whole universe without the candidate filter
    pub async fn find_matches_across_all(
        &self,
        user: &UserProfile,
        limit: usize,
    ) -> Result<MatchResult, MatchingError> {
        tracing::info!("Finding unfiltered matches for user: {}, limit: {}", user.id, limit);

        user.validate()?;

        let candidates = self.neighborhoods.all_neighborhoods().await?;
        self.rank_and_save(user, candidates, limit).await
    }

    /// Match every eligible user; ineligible profiles are skipped
    pub async fn find_matches_for_users(
        &self,
        users: &[UserProfile],
        limit_per_user: usize,
    ) -> Result<Vec<Match>, MatchingError> {
        let mut all_matches = Vec::new();

        for user in users {
            if let Err(e) = user.validate() {
                tracing::warn!("Skipping user {} with incomplete profile: {}", user.id, e);
                continue;
            }

            let result = self.find_matches_for_user(user, limit_per_user).await?;
            all_matches.extend(result.matches);
        }

        tracing::info!("Found {} total matches for {} users", all_matches.len(), users.len());
        Ok(all_matches)
    }

    async fn rank_and_save(
        &self,
        user: &UserProfile,
        candidates: Vec<NeighborhoodProfile>,
        limit: usize,
    ) -> Result<MatchResult, MatchingError> {
        let matcher = self.matcher.clone();
        let owned_user = user.clone();
        let result = tokio::task::spawn_blocking(move || {
            matcher.find_matches(&owned_user, &candidates, limit)
        })
        .await?;

        self.sink.save_matches(&result.matches).await?;

        tracing::info!(
            "Returning {} matches for user {} (from {} candidates)",
            result.matches.len(),
            user.id,
            result.total_candidates
        );

        Ok(result)
    }
}
