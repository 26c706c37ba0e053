use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;
use crate::core::filters::matches_candidate_query;
use crate::models::{CandidateQuery, Match, MatchFeedback, MatchStrength, NeighborhoodProfile};

/// Errors reported by the data collaborators
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate neighborhood id: {0}")]
    DuplicateId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Source of candidate neighborhoods
#[async_trait]
pub trait NeighborhoodSource: Send + Sync {
    /// Neighborhoods satisfying the coarse candidate bounds
    async fn neighborhoods_for_matching(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<NeighborhoodProfile>, StoreError>;

    /// The whole neighborhood universe
    async fn all_neighborhoods(&self) -> Result<Vec<NeighborhoodProfile>, StoreError>;
}

/// Destination for computed matches
#[async_trait]
pub trait MatchSink: Send + Sync {
    async fn save_matches(&self, matches: &[Match]) -> Result<(), StoreError>;
}

/// Neighborhood source backed by a vector held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryNeighborhoodStore {
    neighborhoods: Arc<RwLock<Vec<NeighborhoodProfile>>>,
}

impl InMemoryNeighborhoodStore {
    pub fn new(neighborhoods: Vec<NeighborhoodProfile>) -> Self {
        Self {
            neighborhoods: Arc::new(RwLock::new(neighborhoods)),
        }
    }

    /// Like [`new`](Self::new) but refuses a universe with repeated ids
    pub fn try_new(neighborhoods: Vec<NeighborhoodProfile>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(neighborhoods.len());
        for n in &neighborhoods {
            if !seen.insert(n.id.as_str()) {
                return Err(StoreError::DuplicateId(n.id.clone()));
            }
        }
        Ok(Self::new(neighborhoods))
    }

    pub async fn get(&self, id: &str) -> Option<NeighborhoodProfile> {
        self.neighborhoods
            .read()
            .await
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    /// Highest safety scores first; neighborhoods without one are left out
    pub async fn top_by_safety(&self, limit: usize) -> Vec<NeighborhoodProfile> {
        self.top_by(limit, |n| n.safety_score).await
    }

    /// Highest walk scores first; neighborhoods without one are left out
    pub async fn top_by_walkability(&self, limit: usize) -> Vec<NeighborhoodProfile> {
        self.top_by(limit, |n| n.walk_score).await
    }

    async fn top_by(
        &self,
        limit: usize,
        key: impl Fn(&NeighborhoodProfile) -> Option<f64>,
    ) -> Vec<NeighborhoodProfile> {
        let neighborhoods = self.neighborhoods.read().await;
        let mut ranked: Vec<(f64, &NeighborhoodProfile)> = neighborhoods
            .iter()
            .filter_map(|n| key(n).map(|value| (value, n)))
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().take(limit).map(|(_, n)| n.clone()).collect()
    }
}

#[async_trait]
impl NeighborhoodSource for InMemoryNeighborhoodStore {
    async fn neighborhoods_for_matching(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<NeighborhoodProfile>, StoreError> {
        let neighborhoods = self.neighborhoods.read().await;
        Ok(neighborhoods
            .iter()
            .filter(|n| matches_candidate_query(n, query))
            .cloned()
            .collect())
    }

    async fn all_neighborhoods(&self) -> Result<Vec<NeighborhoodProfile>, StoreError> {
        Ok(self.neighborhoods.read().await.clone())
    }
}

/// Match store held in memory
///
/// Keeps every saved match and serves history and feedback updates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchStore {
    matches: Arc<RwLock<Vec<Match>>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Match> {
        self.matches.read().await.clone()
    }

    /// Saved matches for a user, best first
    pub async fn history_for_user(&self, user_id: &str) -> Vec<Match> {
        let mut history: Vec<Match> = self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();

        history.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        history
    }

    /// A user's `limit` best saved matches
    pub async fn top_for_user(&self, user_id: &str, limit: usize) -> Vec<Match> {
        let mut history = self.history_for_user(user_id).await;
        history.truncate(limit);
        history
    }

    /// The `limit` most recently created matches across all users
    pub async fn recent(&self, limit: usize) -> Vec<Match> {
        let mut matches = self.matches.read().await.clone();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matches.truncate(limit);
        matches
    }

    /// Saved matches of one tier, best first
    pub async fn by_strength(&self, strength: MatchStrength) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.match_strength == strength)
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        matches
    }

    /// Replace the feedback recorded on a saved match
    pub async fn record_feedback(
        &self,
        match_id: uuid::Uuid,
        feedback: MatchFeedback,
    ) -> Result<Match, StoreError> {
        feedback.validate()?;

        let mut matches = self.matches.write().await;
        let stored = matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| StoreError::NotFound(format!("Match {}", match_id)))?;

        stored.feedback = feedback;
        tracing::info!("Match feedback updated for match {}", match_id);

        Ok(stored.clone())
    }
}

#[async_trait]
impl MatchSink for InMemoryMatchStore {
    async fn save_matches(&self, matches: &[Match]) -> Result<(), StoreError> {
        self.matches.write().await.extend_from_slice(matches);
        tracing::debug!("Saved {} matches", matches.len());
        Ok(())
    }
}
