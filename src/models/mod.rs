// Model exports
pub mod domain;
pub mod neighborhood;
pub mod responses;
pub mod user;

pub use domain::{
    CandidateQuery, ComponentScores, FilterSettings, Match, MatchFeedback, MatchStrength, ScoringWeights,
};
pub use neighborhood::{Amenity, LifestyleCharacteristic, NeighborhoodProfile, TransportationOption};
pub use responses::{FindMatchesResponse, MatchSummary};
pub use user::{
    EducationLevel, FamilyStatus, Gender, Hobby, IncomeLevel, LifestylePreference, LocationType,
    MaritalStatus, OccupationType, PetPreference, TransportationPreference, UserProfile,
};
