use thiserror::Error;
use crate::models::{
    Amenity, ComponentScores, EducationLevel, FamilyStatus, Hobby, IncomeLevel,
    LifestyleCharacteristic, LocationType, NeighborhoodProfile, PetPreference, ScoringWeights,
    TransportationPreference, UserProfile,
};

/// Errors raised while scoring a single candidate
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Neighborhood {neighborhood_id} has a non-finite value in {field}")]
    MalformedNeighborhood {
        neighborhood_id: String,
        field: &'static str,
    },
}

/// Running average over the sub-checks that could actually be evaluated.
///
/// Each sub-check yields `Some(score)` when its inputs are present and `None`
/// otherwise; only the former count towards the divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FactorAverage {
    sum: f64,
    count: u32,
}

impl FactorAverage {
    #[inline]
    fn with(self, factor: Option<f64>) -> Self {
        match factor {
            Some(score) => Self {
                sum: self.sum + score,
                count: self.count + 1,
            },
            None => self,
        }
    }

    #[inline]
    fn average(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        clamp_unit(self.sum / self.count as f64)
    }
}

/// Score all five dimensions for one pair (each 0-1)
pub fn calculate_component_scores(
    user: &UserProfile,
    neighborhood: &NeighborhoodProfile,
) -> Result<ComponentScores, ScoringError> {
    if let Some(field) = neighborhood.first_non_finite_field() {
        return Err(ScoringError::MalformedNeighborhood {
            neighborhood_id: neighborhood.id.clone(),
            field,
        });
    }

    Ok(ComponentScores {
        lifestyle: lifestyle_score(user, neighborhood),
        demographic: demographic_score(user, neighborhood),
        location: location_score(user, neighborhood),
        budget: budget_score(user, neighborhood),
        amenity: amenity_score(user, neighborhood),
    })
}

/// Combine the ranked dimensions into the 0-100 overall score
///
/// overall = 100 * (lifestyle * w_l + demographic * w_d + location * w_loc)
///
/// Budget and amenity are reported separately and never folded in.
pub fn calculate_overall_score(scores: &ComponentScores, weights: &ScoringWeights) -> f64 {
    let weighted = scores.lifestyle * weights.lifestyle
        + scores.demographic * weights.demographic
        + scores.location * weights.location;

    clamp(weighted * 100.0, 0.0, 100.0)
}

/// Lifestyle compatibility (0-1): family status, pets, transportation
pub fn lifestyle_score(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> f64 {
    FactorAverage::default()
        .with(family_status_factor(user, neighborhood))
        .with(pet_factor(user, neighborhood))
        .with(transportation_factor(user, neighborhood))
        .average()
}

/// Demographic alignment (0-1): age, income, education
pub fn demographic_score(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> f64 {
    let age = match (user.age, neighborhood.median_age) {
        (Some(age), Some(median)) => Some(age_compatibility((age as f64 - median).abs())),
        _ => None,
    };

    let income = match (user.income_level, neighborhood.median_income) {
        (Some(level), Some(median)) => Some(income_compatibility(level, median)),
        _ => None,
    };

    let education = match (user.education_level, neighborhood.college_graduate_rate) {
        (Some(level), Some(rate)) => Some(education_compatibility(level, rate)),
        _ => None,
    };

    FactorAverage::default()
        .with(age)
        .with(income)
        .with(education)
        .average()
}

/// Location and transportation fit (0-1): location type, commute, walkability, transit
pub fn location_score(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> f64 {
    let location_type = match (
        user.preferred_location_type,
        neighborhood.lifestyle_characteristics.as_deref(),
    ) {
        (Some(preferred), Some(characteristics)) => {
            Some(location_type_compatibility(preferred, characteristics))
        }
        _ => None,
    };

    let commute = match (user.max_commute_minutes, neighborhood.commute_time_minutes) {
        (Some(max), Some(actual)) => Some(commute_compatibility(actual, max as f64)),
        _ => None,
    };

    // Walk and transit count whenever recorded, whatever the user prefers
    let walk = neighborhood.walk_score.map(|s| clamp_unit(s / 100.0));
    let transit = neighborhood.transit_score.map(|s| clamp_unit(s / 100.0));

    FactorAverage::default()
        .with(location_type)
        .with(commute)
        .with(walk)
        .with(transit)
        .average()
}

/// Budget fit (0-1); neutral 0.5 when either side is unknown
pub fn budget_score(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> f64 {
    let (Some(max_budget), Some(home_value)) = (user.max_budget, neighborhood.median_home_value)
    else {
        return 0.5;
    };

    let ratio = home_value / max_budget as f64;

    if ratio <= 0.8 {
        1.0
    } else if ratio <= 1.0 {
        0.8
    } else if ratio <= 1.2 {
        0.6
    } else {
        0.2
    }
}

/// Amenity richness (0-1); neutral 0.5 when no amenities are recorded
pub fn amenity_score(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> f64 {
    let count = neighborhood.amenity_count();
    if count == 0 {
        return 0.5;
    }

    let mut score = (count as f64 / 10.0).min(1.0);

    if user.has_hobby(Hobby::Fitness) && neighborhood.has_amenity(Amenity::Gyms) {
        score += 0.2;
    }
    if user.has_hobby(Hobby::Gardening) && neighborhood.has_amenity(Amenity::Parks) {
        score += 0.2;
    }

    clamp_unit(score)
}

#[inline]
fn family_status_factor(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> Option<f64> {
    let status = user.family_status?;
    neighborhood.lifestyle_characteristics.as_ref()?;

    let fits = match status {
        FamilyStatus::WithChildren => {
            neighborhood.has_characteristic(LifestyleCharacteristic::FamilyFriendly)
        }
        FamilyStatus::Single => {
            neighborhood.has_characteristic(LifestyleCharacteristic::YoungProfessional)
        }
        FamilyStatus::Couple | FamilyStatus::EmptyNester => false,
    };

    Some(if fits { 1.0 } else { 0.0 })
}

#[inline]
fn pet_factor(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> Option<f64> {
    let score = match user.pet_preference? {
        PetPreference::Dogs if neighborhood.has_amenity(Amenity::Parks) => 0.8,
        PetPreference::Dogs | PetPreference::Cats | PetPreference::NoPets | PetPreference::AnyPets => 0.0,
    };
    Some(score)
}

#[inline]
fn transportation_factor(user: &UserProfile, neighborhood: &NeighborhoodProfile) -> Option<f64> {
    let preference = user.transportation_preference?;
    neighborhood.transportation_options.as_ref()?;

    let satisfied = match preference {
        TransportationPreference::PublicTransit => exceeds(neighborhood.transit_score, 70.0),
        TransportationPreference::Walking => exceeds(neighborhood.walk_score, 80.0),
        TransportationPreference::Biking => exceeds(neighborhood.bike_score, 70.0),
        TransportationPreference::Car => false,
    };

    Some(if satisfied { 1.0 } else { 0.0 })
}

#[inline]
fn exceeds(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

/// Step function over |user age - median age|; never zero
#[inline]
fn age_compatibility(difference: f64) -> f64 {
    if difference <= 5.0 {
        1.0
    } else if difference <= 10.0 {
        0.8
    } else if difference <= 15.0 {
        0.6
    } else {
        0.4
    }
}

/// Reference household income for an income bracket
#[inline]
pub fn income_threshold(level: IncomeLevel) -> f64 {
    match level {
        IncomeLevel::Low => 50_000.0,
        IncomeLevel::Medium => 75_000.0,
        IncomeLevel::High => 100_000.0,
        IncomeLevel::VeryHigh => 150_000.0,
    }
}

/// Compare a neighborhood's median income against the user's bracket
pub fn income_compatibility(level: IncomeLevel, median_income: f64) -> f64 {
    let ratio = median_income / income_threshold(level);

    if (0.8..=1.2).contains(&ratio) {
        1.0
    } else if (0.6..=1.4).contains(&ratio) {
        0.7
    } else {
        0.3
    }
}

/// College-graduate share a user of this education level would expect
#[inline]
fn expected_college_rate(level: EducationLevel) -> Option<f64> {
    match level {
        EducationLevel::HighSchool => Some(0.3),
        EducationLevel::Bachelors => Some(0.5),
        EducationLevel::Masters | EducationLevel::Phd => Some(0.7),
        EducationLevel::Other => None,
    }
}

/// Compare the neighborhood's college-graduate rate against the expectation
pub fn education_compatibility(level: EducationLevel, college_graduate_rate: f64) -> f64 {
    let Some(expected) = expected_college_rate(level) else {
        return 0.5;
    };

    let difference = (college_graduate_rate - expected).abs();
    if difference <= 0.1 {
        1.0
    } else if difference <= 0.2 {
        0.7
    } else {
        0.4
    }
}

/// Neighborhood characteristic that satisfies a location type
#[inline]
fn characteristic_for(location: LocationType) -> LifestyleCharacteristic {
    match location {
        LocationType::CityCenter => LifestyleCharacteristic::Urban,
        LocationType::Suburb => LifestyleCharacteristic::Suburban,
        LocationType::Rural => LifestyleCharacteristic::Rural,
        LocationType::UniversityArea => LifestyleCharacteristic::UniversityTown,
    }
}

pub fn location_type_compatibility(
    preferred: LocationType,
    characteristics: &[LifestyleCharacteristic],
) -> f64 {
    if characteristics.is_empty() {
        return 0.5;
    }

    if characteristics.contains(&characteristic_for(preferred)) {
        1.0
    } else {
        0.3
    }
}

/// Full marks within the limit, then linear decay to zero over an hour
#[inline]
fn commute_compatibility(actual_minutes: f64, max_minutes: f64) -> f64 {
    if actual_minutes <= max_minutes {
        1.0
    } else {
        (1.0 - (actual_minutes - max_minutes) / 60.0).max(0.0)
    }
}

/// Clamp into [min, max], mapping NaN to `min`
#[inline]
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}
