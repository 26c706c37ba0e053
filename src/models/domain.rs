use serde::{Deserialize, Serialize};
use validator::Validate;

/// Scored outcome of evaluating one user against one neighborhood
///
/// Component and overall scores are on the 0-100 scale. The engine builds a
/// `Match` once and never mutates it; feedback is attached later by whoever
/// persists matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: uuid::Uuid,
    pub user_id: String,
    pub neighborhood_id: String,
    pub neighborhood_name: String,
    pub overall_score: f64,
    pub lifestyle_score: f64,
    pub demographic_score: f64,
    pub location_score: f64,
    pub budget_score: f64,
    pub amenity_score: f64,
    pub match_strength: MatchStrength,
    pub match_reasoning: String,
    pub recommendations: String,
    #[serde(default)]
    pub feedback: MatchFeedback,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Feedback a user leaves on a match after the fact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchFeedback {
    pub liked: Option<bool>,
    pub visited: Option<bool>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

impl MatchFeedback {
    pub fn is_empty(&self) -> bool {
        self.liked.is_none() && self.visited.is_none() && self.rating.is_none() && self.comment.is_none()
    }
}

/// Discrete match tiers, keyed by inclusive integer score ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStrength {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl MatchStrength {
    /// Tiers from strongest to weakest
    pub const ALL: [MatchStrength; 5] = [
        MatchStrength::Excellent,
        MatchStrength::VeryGood,
        MatchStrength::Good,
        MatchStrength::Fair,
        MatchStrength::Poor,
    ];

    pub fn min_score(self) -> u8 {
        match self {
            MatchStrength::Excellent => 90,
            MatchStrength::VeryGood => 80,
            MatchStrength::Good => 70,
            MatchStrength::Fair => 60,
            MatchStrength::Poor => 0,
        }
    }

    pub fn max_score(self) -> u8 {
        match self {
            MatchStrength::Excellent => 100,
            MatchStrength::VeryGood => 89,
            MatchStrength::Good => 79,
            MatchStrength::Fair => 69,
            MatchStrength::Poor => 59,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MatchStrength::Excellent => "Excellent match - Highly recommended",
            MatchStrength::VeryGood => "Very good match - Strongly recommended",
            MatchStrength::Good => "Good match - Recommended",
            MatchStrength::Fair => "Fair match - Consider with caution",
            MatchStrength::Poor => "Poor match - Not recommended",
        }
    }
}

/// The five dimension scores, each normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentScores {
    pub lifestyle: f64,
    pub demographic: f64,
    pub location: f64,
    pub budget: f64,
    pub amenity: f64,
}

impl ComponentScores {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Weights of the three ranked dimensions
///
/// They should sum to 1.0; nothing enforces it, the overall score is clamped
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub lifestyle: f64,
    pub demographic: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lifestyle: 0.4,
            demographic: 0.3,
            location: 0.3,
        }
    }
}

/// Fixed bounds and fallback floor of the candidate filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub max_crime_rate: f64,
    pub min_safety_score: f64,
    /// Fewer filtered candidates than this and the whole universe is scored
    pub min_candidates: usize,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            max_crime_rate: 0.1,
            min_safety_score: 6.0,
            min_candidates: 10,
        }
    }
}

/// Bounds handed to the neighborhood collaborator when narrowing candidates
///
/// Income bounds are half-open (`min <= income < max`); the other bounds are
/// inclusive. Unbounded maxima are `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateQuery {
    pub min_income: f64,
    pub max_income: f64,
    pub min_home_value: f64,
    pub max_home_value: f64,
    pub max_crime_rate: f64,
    pub min_safety_score: f64,
}
