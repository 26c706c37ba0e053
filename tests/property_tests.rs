use neighborfit::core::{
    classify,
    scoring::{calculate_component_scores, calculate_overall_score},
    Matcher,
};
use neighborfit::models::{
    Amenity, ComponentScores, EducationLevel, FamilyStatus, Hobby, IncomeLevel,
    LifestyleCharacteristic, LocationType, MatchStrength, NeighborhoodProfile, PetPreference,
    ScoringWeights, TransportationOption, TransportationPreference, UserProfile,
};
use proptest::prelude::*;
use proptest::option;
use proptest::sample::select;

fn arb_user() -> impl Strategy<Value = UserProfile> {
    let identity = (
        option::of(18u8..=90),
        option::of(select(vec![
            IncomeLevel::Low,
            IncomeLevel::Medium,
            IncomeLevel::High,
            IncomeLevel::VeryHigh,
        ])),
        option::of(select(vec![
            EducationLevel::HighSchool,
            EducationLevel::Bachelors,
            EducationLevel::Masters,
            EducationLevel::Phd,
            EducationLevel::Other,
        ])),
        option::of(select(vec![
            FamilyStatus::Single,
            FamilyStatus::Couple,
            FamilyStatus::WithChildren,
            FamilyStatus::EmptyNester,
        ])),
    );
    let preferences = (
        option::of(select(vec![
            PetPreference::Dogs,
            PetPreference::Cats,
            PetPreference::NoPets,
            PetPreference::AnyPets,
        ])),
        option::of(select(vec![
            TransportationPreference::Car,
            TransportationPreference::PublicTransit,
            TransportationPreference::Walking,
            TransportationPreference::Biking,
        ])),
        option::of(select(vec![
            LocationType::CityCenter,
            LocationType::Suburb,
            LocationType::Rural,
            LocationType::UniversityArea,
        ])),
        prop::collection::vec(
            select(vec![Hobby::Fitness, Hobby::Gardening, Hobby::Reading, Hobby::Music]),
            0..3,
        ),
    );
    let limits = (
        option::of(0u32..=120),
        option::of(1u32..=3_000_000),
        option::of(1u32..=3_000_000),
    );

    (identity, preferences, limits).prop_map(
        |(
            (age, income_level, education_level, family_status),
            (pet_preference, transportation_preference, preferred_location_type, hobbies),
            (max_commute_minutes, min_budget, max_budget),
        )| UserProfile {
            id: "prop_user".to_string(),
            age,
            income_level,
            education_level,
            family_status,
            pet_preference,
            transportation_preference,
            preferred_location_type,
            hobbies,
            max_commute_minutes,
            max_distance_miles: Some(25),
            min_budget,
            max_budget,
            ..Default::default()
        },
    )
}

/// Finite but unconstrained numbers, including out-of-range mobility scores
fn arb_neighborhood() -> impl Strategy<Value = NeighborhoodProfile> {
    let demographics = (
        option::of(0.0f64..100.0),
        option::of(0.0f64..400_000.0),
        option::of(0.0f64..1.0),
        option::of(0.0f64..5_000_000.0),
    );
    let collections = (
        option::of(prop::collection::vec(
            select(vec![
                LifestyleCharacteristic::Urban,
                LifestyleCharacteristic::Suburban,
                LifestyleCharacteristic::Rural,
                LifestyleCharacteristic::FamilyFriendly,
                LifestyleCharacteristic::YoungProfessional,
                LifestyleCharacteristic::UniversityTown,
            ]),
            0..4,
        )),
        option::of(prop::collection::vec(
            select(vec![Amenity::Parks, Amenity::Gyms, Amenity::Libraries, Amenity::Bars]),
            0..12,
        )),
        option::of(prop::collection::vec(
            select(vec![TransportationOption::Bus, TransportationOption::BikeLanes]),
            0..3,
        )),
    );
    let mobility = (
        option::of(0.0f64..180.0),
        option::of(-50.0f64..150.0),
        option::of(-50.0f64..150.0),
        option::of(-50.0f64..150.0),
        option::of(0.0f64..10.0),
        option::of(0u32..20),
    );

    (demographics, collections, mobility).prop_map(
        |(
            (median_age, median_income, college_graduate_rate, median_home_value),
            (lifestyle_characteristics, amenities, transportation_options),
            (commute_time_minutes, walk_score, transit_score, bike_score, safety_score, number_of_parks),
        )| NeighborhoodProfile {
            median_age,
            median_income,
            college_graduate_rate,
            median_home_value,
            lifestyle_characteristics,
            amenities,
            transportation_options,
            commute_time_minutes,
            walk_score,
            transit_score,
            bike_score,
            safety_score,
            number_of_parks,
            ..NeighborhoodProfile::new("prop_nb", "Prop")
        },
    )
}

fn in_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

proptest! {
    #[test]
    fn component_scores_stay_in_unit_range(user in arb_user(), n in arb_neighborhood()) {
        let scores = calculate_component_scores(&user, &n).unwrap();

        prop_assert!(in_unit(scores.lifestyle), "lifestyle {}", scores.lifestyle);
        prop_assert!(in_unit(scores.demographic), "demographic {}", scores.demographic);
        prop_assert!(in_unit(scores.location), "location {}", scores.location);
        prop_assert!(in_unit(scores.budget), "budget {}", scores.budget);
        prop_assert!(in_unit(scores.amenity), "amenity {}", scores.amenity);
    }

    #[test]
    fn match_scores_stay_in_percent_range(user in arb_user(), n in arb_neighborhood()) {
        let m = Matcher::with_default_weights().calculate_match(&user, &n);

        for score in [
            m.overall_score,
            m.lifestyle_score,
            m.demographic_score,
            m.location_score,
            m.budget_score,
            m.amenity_score,
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "score {}", score);
        }
        prop_assert_eq!(m.match_strength, classify(m.overall_score));
    }

    #[test]
    fn overall_clamped_for_any_weights(
        lifestyle in 0.0f64..=1.0,
        demographic in 0.0f64..=1.0,
        location in 0.0f64..=1.0,
        w_l in any::<f64>(),
        w_d in any::<f64>(),
        w_loc in any::<f64>(),
    ) {
        let scores = ComponentScores { lifestyle, demographic, location, ..Default::default() };
        let weights = ScoringWeights { lifestyle: w_l, demographic: w_d, location: w_loc };

        let overall = calculate_overall_score(&scores, &weights);
        prop_assert!((0.0..=100.0).contains(&overall), "overall {}", overall);
    }

    #[test]
    fn classifier_is_total(score in any::<f64>()) {
        let tier = classify(score);

        if score.is_nan() || score < 60.0 || score > 100.0 {
            prop_assert_eq!(tier, MatchStrength::Poor);
        }
        if tier != MatchStrength::Poor {
            prop_assert!(tier.min_score() as f64 <= score && score <= tier.max_score() as f64);
        }
    }

    #[test]
    fn classifier_gaps_between_ranges_are_poor(whole in 60u8..90, fraction in 0.01f64..0.99) {
        // 69.5, 79.5 and 89.5 sit between two tiers; 60.5 sits inside FAIR
        let score = whole as f64 + fraction;
        let tier = classify(score);

        if whole % 10 == 9 {
            prop_assert_eq!(tier, MatchStrength::Poor);
        } else {
            prop_assert_eq!(tier, classify(whole as f64));
        }
    }

    #[test]
    fn classifier_agrees_with_integer_ranges(score in 0u8..=100) {
        let tier = classify(score as f64);
        prop_assert!(tier.min_score() <= score && score <= tier.max_score());
    }

    #[test]
    fn scoring_is_idempotent(user in arb_user(), n in arb_neighborhood()) {
        let first = calculate_component_scores(&user, &n).unwrap();
        let second = calculate_component_scores(&user, &n).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ranking_is_sorted_and_stable(
        user in arb_user(),
        candidates in prop::collection::vec(arb_neighborhood(), 0..30),
        limit in 0usize..40,
    ) {
        let candidates: Vec<NeighborhoodProfile> = candidates
            .into_iter()
            .enumerate()
            .map(|(i, n)| NeighborhoodProfile { id: format!("{:03}", i), ..n })
            .collect();

        let result = Matcher::with_default_weights().find_matches(&user, &candidates, limit);

        prop_assert_eq!(result.total_candidates, candidates.len());
        prop_assert_eq!(result.matches.len(), limit.min(candidates.len()));
        prop_assert_eq!(result.skipped_malformed, 0);

        for pair in result.matches.windows(2) {
            prop_assert!(pair[0].overall_score >= pair[1].overall_score);
            if pair[0].overall_score == pair[1].overall_score {
                // zero-padded ids compare like their input positions
                prop_assert!(pair[0].neighborhood_id < pair[1].neighborhood_id);
            }
        }
    }

    #[test]
    fn non_finite_record_scores_zero(
        user in arb_user(),
        n in arb_neighborhood(),
        bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let broken = NeighborhoodProfile { walk_score: Some(bad), ..n };

        prop_assert!(calculate_component_scores(&user, &broken).is_err());

        let result = Matcher::with_default_weights().find_matches(&user, &[broken], 1);
        prop_assert_eq!(result.skipped_malformed, 1);
        prop_assert_eq!(result.matches[0].overall_score, 0.0);
    }
}
