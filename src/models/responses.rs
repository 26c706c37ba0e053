use serde::{Deserialize, Serialize};
use crate::core::analytics::MatchAnalytics;
use crate::models::domain::{Match, MatchStrength};
use crate::models::neighborhood::NeighborhoodProfile;

/// A match flattened together with the neighborhood details a caller shows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: uuid::Uuid,
    pub neighborhood_id: String,
    pub neighborhood_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    pub overall_score: f64,
    pub lifestyle_score: f64,
    pub demographic_score: f64,
    pub location_score: f64,
    pub budget_score: f64,
    pub amenity_score: f64,

    pub match_strength: MatchStrength,
    pub strength_description: String,
    pub match_reasoning: String,
    pub recommendations: String,

    pub median_income: Option<f64>,
    pub median_home_value: Option<f64>,
    pub median_rent: Option<f64>,
    pub crime_rate: Option<f64>,
    pub safety_score: Option<f64>,
    pub walk_score: Option<f64>,
    pub transit_score: Option<f64>,
    pub number_of_restaurants: Option<u32>,
    pub number_of_parks: Option<u32>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MatchSummary {
    pub fn new(m: &Match, neighborhood: &NeighborhoodProfile) -> Self {
        Self {
            match_id: m.id,
            neighborhood_id: m.neighborhood_id.clone(),
            neighborhood_name: m.neighborhood_name.clone(),
            city: neighborhood.city.clone(),
            state: neighborhood.state.clone(),
            zip_code: neighborhood.zip_code.clone(),
            overall_score: m.overall_score,
            lifestyle_score: m.lifestyle_score,
            demographic_score: m.demographic_score,
            location_score: m.location_score,
            budget_score: m.budget_score,
            amenity_score: m.amenity_score,
            match_strength: m.match_strength,
            strength_description: m.match_strength.description().to_string(),
            match_reasoning: m.match_reasoning.clone(),
            recommendations: m.recommendations.clone(),
            median_income: neighborhood.median_income,
            median_home_value: neighborhood.median_home_value,
            median_rent: neighborhood.median_rent,
            crime_rate: neighborhood.crime_rate,
            safety_score: neighborhood.safety_score,
            walk_score: neighborhood.walk_score,
            transit_score: neighborhood.transit_score,
            number_of_restaurants: neighborhood.number_of_restaurants,
            number_of_parks: neighborhood.number_of_parks,
            created_at: m.created_at,
        }
    }
}

/// Output of a match request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub user_id: String,
    pub matches: Vec<MatchSummary>,
    pub total_candidates: usize,
    pub analytics: MatchAnalytics,
}
