// Core algorithm exports
pub mod analytics;
pub mod classifier;
pub mod filters;
pub mod matcher;
pub mod narrative;
pub mod scoring;

pub use analytics::MatchAnalytics;
pub use classifier::classify;
pub use filters::{build_candidate_query, matches_candidate_query, needs_relaxation};
pub use matcher::{MatchResult, Matcher};
pub use narrative::{generate_reasoning, generate_recommendations};
pub use scoring::{calculate_component_scores, calculate_overall_score, ScoringError};
