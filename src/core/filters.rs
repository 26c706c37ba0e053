use crate::models::{CandidateQuery, FilterSettings, IncomeLevel, NeighborhoodProfile, UserProfile};

/// Median-income window `[min, max)` for an income bracket
///
/// These breakpoints are the bracket edges, which differ from the reference
/// incomes used when scoring income compatibility.
#[inline]
pub fn income_window(level: Option<IncomeLevel>) -> (f64, f64) {
    match level {
        Some(IncomeLevel::Low) => (0.0, 50_000.0),
        Some(IncomeLevel::Medium) => (50_000.0, 75_000.0),
        Some(IncomeLevel::High) => (75_000.0, 100_000.0),
        Some(IncomeLevel::VeryHigh) => (100_000.0, f64::INFINITY),
        None => (0.0, f64::INFINITY),
    }
}

/// Home-value window `[0.8 * min_budget, 1.2 * max_budget]`
///
/// Each side opens up independently when its budget is unknown.
#[inline]
pub fn home_value_window(min_budget: Option<u32>, max_budget: Option<u32>) -> (f64, f64) {
    let min = min_budget.map_or(0.0, |b| b as f64 * 0.8);
    let max = max_budget.map_or(f64::INFINITY, |b| b as f64 * 1.2);
    (min, max)
}

/// Derive the coarse bounds used to narrow the neighborhood universe for a user
pub fn build_candidate_query(user: &UserProfile, settings: &FilterSettings) -> CandidateQuery {
    let (min_income, max_income) = income_window(user.income_level);
    let (min_home_value, max_home_value) = home_value_window(user.min_budget, user.max_budget);

    CandidateQuery {
        min_income,
        max_income,
        min_home_value,
        max_home_value,
        max_crime_rate: settings.max_crime_rate,
        min_safety_score: settings.min_safety_score,
    }
}

/// Check if a neighborhood satisfies the candidate query
///
/// A field that is not recorded never satisfies its bound, the same way a
/// NULL column fails a range predicate.
#[inline]
pub fn matches_candidate_query(neighborhood: &NeighborhoodProfile, query: &CandidateQuery) -> bool {
    let (Some(income), Some(home_value), Some(crime), Some(safety)) = (
        neighborhood.median_income,
        neighborhood.median_home_value,
        neighborhood.crime_rate,
        neighborhood.safety_score,
    ) else {
        return false;
    };

    // Income bracket
    if income < query.min_income || income >= query.max_income {
        return false;
    }

    // Affordability
    if home_value < query.min_home_value || home_value > query.max_home_value {
        return false;
    }

    crime <= query.max_crime_rate && safety >= query.min_safety_score
}

/// Whether the filtered pool is too small and the full universe should be used
#[inline]
pub fn needs_relaxation(filtered_count: usize, settings: &FilterSettings) -> bool {
    filtered_count < settings.min_candidates
}
