use serde::{Deserialize, Serialize};

/// A neighborhood and the statistics used to score it.
///
/// Read-only to the engine. Collections are `Option` so that "not recorded"
/// stays distinguishable from "recorded as empty"; several sub-checks only
/// run when the collection was recorded at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Demographics
    pub total_population: Option<u32>,
    pub median_age: Option<f64>,
    pub median_income: Option<f64>,
    pub home_ownership_rate: Option<f64>,
    pub college_graduate_rate: Option<f64>,

    // Housing
    pub median_home_value: Option<f64>,
    pub median_rent: Option<f64>,
    pub vacancy_rate: Option<f64>,

    pub lifestyle_characteristics: Option<Vec<LifestyleCharacteristic>>,
    pub amenities: Option<Vec<Amenity>>,
    pub transportation_options: Option<Vec<TransportationOption>>,

    // Safety and services
    pub crime_rate: Option<f64>,
    pub safety_score: Option<f64>,
    pub school_rating: Option<f64>,
    pub number_of_schools: Option<u32>,
    pub unemployment_rate: Option<f64>,
    pub commute_time_minutes: Option<f64>,
    pub air_quality_index: Option<f64>,

    // Mobility, 0-100
    pub walk_score: Option<f64>,
    pub bike_score: Option<f64>,
    pub transit_score: Option<f64>,

    pub diversity_index: Option<f64>,
    pub number_of_restaurants: Option<u32>,
    pub number_of_parks: Option<u32>,
    pub number_of_libraries: Option<u32>,
}

impl NeighborhoodProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_characteristic(&self, characteristic: LifestyleCharacteristic) -> bool {
        self.lifestyle_characteristics
            .as_ref()
            .is_some_and(|c| c.contains(&characteristic))
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities
            .as_ref()
            .is_some_and(|a| a.contains(&amenity))
    }

    /// Number of recorded amenities (zero when none were recorded)
    pub fn amenity_count(&self) -> usize {
        self.amenities.as_ref().map_or(0, Vec::len)
    }

    /// Fields the candidate filter needs to place this record
    pub fn is_eligible_for_matching(&self) -> bool {
        self.median_income.is_some()
            && self.median_home_value.is_some()
            && self.crime_rate.is_some()
            && self.safety_score.is_some()
    }

    /// Name of the first recorded numeric field holding NaN or infinity
    pub fn first_non_finite_field(&self) -> Option<&'static str> {
        let fields = [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("medianAge", self.median_age),
            ("medianIncome", self.median_income),
            ("homeOwnershipRate", self.home_ownership_rate),
            ("collegeGraduateRate", self.college_graduate_rate),
            ("medianHomeValue", self.median_home_value),
            ("medianRent", self.median_rent),
            ("vacancyRate", self.vacancy_rate),
            ("crimeRate", self.crime_rate),
            ("safetyScore", self.safety_score),
            ("schoolRating", self.school_rating),
            ("unemploymentRate", self.unemployment_rate),
            ("commuteTimeMinutes", self.commute_time_minutes),
            ("airQualityIndex", self.air_quality_index),
            ("walkScore", self.walk_score),
            ("bikeScore", self.bike_score),
            ("transitScore", self.transit_score),
            ("diversityIndex", self.diversity_index),
        ];

        fields
            .into_iter()
            .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
            .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifestyleCharacteristic {
    Urban,
    Suburban,
    Rural,
    FamilyFriendly,
    YoungProfessional,
    RetirementCommunity,
    UniversityTown,
    TouristDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Amenity {
    GroceryStores,
    Restaurants,
    ShoppingCenters,
    Hospitals,
    Libraries,
    Parks,
    Gyms,
    MovieTheaters,
    Bars,
    CoffeeShops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportationOption {
    Bus,
    Train,
    Subway,
    LightRail,
    BikeLanes,
    WalkingTrails,
    Parking,
}
