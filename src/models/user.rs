use serde::{Deserialize, Serialize};
use validator::Validate;

/// A person looking for a neighborhood.
///
/// Every attribute except the identity is optional: scorers skip the
/// sub-checks whose inputs are missing. `Validate` only checks that the
/// fields matching depends on are present; values are taken as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    #[validate(required)]
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub education_level: Option<EducationLevel>,
    #[validate(required)]
    pub income_level: Option<IncomeLevel>,
    pub occupation_type: Option<OccupationType>,
    #[serde(default)]
    pub lifestyle_preferences: Vec<LifestylePreference>,
    #[serde(default)]
    pub hobbies: Vec<Hobby>,
    #[validate(required)]
    pub family_status: Option<FamilyStatus>,
    pub pet_preference: Option<PetPreference>,
    pub transportation_preference: Option<TransportationPreference>,
    pub preferred_location_type: Option<LocationType>,
    pub max_commute_minutes: Option<u32>,
    #[validate(required)]
    pub max_distance_miles: Option<u32>,
    pub min_budget: Option<u32>,
    #[validate(required)]
    pub max_budget: Option<u32>,
}

impl UserProfile {
    /// Create a profile carrying only its identity
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn has_hobby(&self, hobby: Hobby) -> bool {
        self.hobbies.contains(&hobby)
    }

    /// Display name, falling back to the identity
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Partnered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
    Other,
}

/// Ordinal income bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccupationType {
    Technology,
    Healthcare,
    Education,
    Finance,
    Manufacturing,
    Retail,
    Government,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifestylePreference {
    Urban,
    Suburban,
    Rural,
    Active,
    Quiet,
    FamilyOriented,
    YoungProfessional,
    Retirement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hobby {
    Sports,
    Reading,
    Cooking,
    Travel,
    Music,
    Art,
    Gardening,
    Gaming,
    Fitness,
    Photography,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyStatus {
    Single,
    Couple,
    WithChildren,
    EmptyNester,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetPreference {
    Dogs,
    Cats,
    NoPets,
    AnyPets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportationPreference {
    Car,
    PublicTransit,
    Walking,
    Biking,
}

/// Kind of place a user wants to live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    CityCenter,
    Suburb,
    Rural,
    UniversityArea,
}
