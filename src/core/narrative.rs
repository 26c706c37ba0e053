use crate::models::{ComponentScores, NeighborhoodProfile};

/// Explain a match from its lifestyle, demographic and location scores
///
/// Each dimension picks one of three fixed clauses (>0.8, >0.6, otherwise).
pub fn generate_reasoning(neighborhood: &NeighborhoodProfile, scores: &ComponentScores) -> String {
    let subject = if neighborhood.name.trim().is_empty() {
        "this neighborhood"
    } else {
        neighborhood.name.as_str()
    };

    let lifestyle = tiered(
        scores.lifestyle,
        "excellent lifestyle compatibility with your interests and family situation.",
        "good lifestyle compatibility.",
        "some lifestyle differences to consider.",
    );
    let demographic = tiered(
        scores.demographic,
        "The neighborhood demographics closely match your profile.",
        "The neighborhood demographics are reasonably compatible.",
        "There are some demographic differences to consider.",
    );
    let location = tiered(
        scores.location,
        "The location and transportation options align well with your preferences.",
        "The location offers acceptable transportation options.",
        "The location may not fully meet your transportation needs.",
    );

    format!("Based on your preferences, {subject} offers {lifestyle} {demographic} {location}")
}

/// Suggest a next step from the overall score, plus standout features
pub fn generate_recommendations(neighborhood: &NeighborhoodProfile, overall_score: f64) -> String {
    let headline = if overall_score > 80.0 {
        "This is an excellent match! Consider scheduling a visit to explore the area."
    } else if overall_score > 70.0 {
        "This is a good match worth exploring further."
    } else if overall_score > 60.0 {
        "This match has potential but consider your priorities carefully."
    } else {
        "This match may not be ideal for your needs."
    };

    let mut recommendations = String::from(headline);

    if neighborhood.walk_score.is_some_and(|s| s > 80.0) {
        recommendations.push_str(" The area is highly walkable with many amenities within walking distance.");
    }
    if neighborhood.safety_score.is_some_and(|s| s > 8.0) {
        recommendations.push_str(" The neighborhood has excellent safety ratings.");
    }
    if neighborhood.number_of_parks.is_some_and(|p| p > 5) {
        recommendations.push_str(" There are many parks and green spaces in the area.");
    }

    recommendations
}

#[inline]
fn tiered(score: f64, high: &'static str, mid: &'static str, low: &'static str) -> &'static str {
    if score > 0.8 {
        high
    } else if score > 0.6 {
        mid
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(lifestyle: f64, demographic: f64, location: f64) -> ComponentScores {
        ComponentScores {
            lifestyle,
            demographic,
            location,
            ..Default::default()
        }
    }

    #[test]
    fn test_reasoning_tiers() {
        let n = NeighborhoodProfile::new("n1", "Riverside");
        let text = generate_reasoning(&n, &scores(0.9, 0.7, 0.2));

        assert!(text.starts_with("Based on your preferences, Riverside offers excellent lifestyle"));
        assert!(text.contains("reasonably compatible"));
        assert!(text.contains("may not fully meet your transportation needs"));
    }

    #[test]
    fn test_reasoning_thresholds_are_strict() {
        let n = NeighborhoodProfile::new("n1", "Riverside");
        let text = generate_reasoning(&n, &scores(0.8, 0.6, 0.0));

        assert!(text.contains("good lifestyle compatibility."));
        assert!(text.contains("some demographic differences"));
    }

    #[test]
    fn test_reasoning_without_name() {
        let n = NeighborhoodProfile::new("n1", "");
        let text = generate_reasoning(&n, &scores(0.0, 0.0, 0.0));
        assert!(text.starts_with("Based on your preferences, this neighborhood offers some lifestyle"));
    }

    #[test]
    fn test_recommendation_headlines() {
        let n = NeighborhoodProfile::new("n1", "Riverside");
        assert!(generate_recommendations(&n, 85.0).starts_with("This is an excellent match!"));
        assert!(generate_recommendations(&n, 80.0).starts_with("This is a good match"));
        assert!(generate_recommendations(&n, 65.0).starts_with("This match has potential"));
        assert!(generate_recommendations(&n, 60.0).starts_with("This match may not be ideal"));
    }

    #[test]
    fn test_recommendation_bonus_clauses() {
        let mut n = NeighborhoodProfile::new("n1", "Riverside");
        assert!(!generate_recommendations(&n, 50.0).contains("walkable"));

        n.walk_score = Some(92.0);
        n.safety_score = Some(8.5);
        n.number_of_parks = Some(6);
        let text = generate_recommendations(&n, 50.0);

        assert!(text.contains("highly walkable"));
        assert!(text.contains("excellent safety ratings"));
        assert!(text.contains("many parks"));
    }
}
