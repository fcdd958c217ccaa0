use std::collections::HashMap;

/// Cosine similarity restricted to the shared trait keys, against the full
/// vector norms. Returns `None` when the comparison is not applicable
/// (either side empty, no shared keys, or a zero norm) - distinct from a
/// genuine zero similarity.
///
/// The result stays a unit fraction in [0, 1]; the aggregator consumes it as
/// a multiplicative boost, not as a weighted sub-score.
pub fn score_personality(
    volunteer_traits: &HashMap<String, f64>,
    opportunity_traits: &HashMap<String, f64>,
) -> Option<f64> {
    if volunteer_traits.is_empty() || opportunity_traits.is_empty() {
        return None;
    }

    let shared: Vec<&String> = volunteer_traits
        .keys()
        .filter(|key| opportunity_traits.contains_key(*key))
        .collect();
    if shared.is_empty() {
        return None;
    }

    let dot: f64 = shared
        .iter()
        .map(|key| volunteer_traits[*key] * opportunity_traits[*key])
        .sum();

    let norm = |traits: &HashMap<String, f64>| -> f64 {
        traits.values().map(|v| v * v).sum::<f64>().sqrt()
    };
    let norm_volunteer = norm(volunteer_traits);
    let norm_opportunity = norm(opportunity_traits);
    if norm_volunteer == 0.0 || norm_opportunity == 0.0 {
        return None;
    }

    Some((dot / (norm_volunteer * norm_opportunity)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn empty_side_is_not_applicable() {
        assert_eq!(score_personality(&traits(&[]), &traits(&[("a", 1.0)])), None);
        assert_eq!(score_personality(&traits(&[("a", 1.0)]), &traits(&[])), None);
    }

    #[test]
    fn disjoint_trait_keys_are_not_applicable() {
        let result = score_personality(&traits(&[("empathy", 1.0)]), &traits(&[("rigor", 1.0)]));
        assert_eq!(result, None);
    }

    #[test]
    fn identical_single_trait_vectors_score_one() {
        let result = score_personality(&traits(&[("empathy", 0.8)]), &traits(&[("empathy", 0.4)]))
            .expect("applicable");
        assert!((result - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_norm_is_not_applicable() {
        let result = score_personality(&traits(&[("empathy", 0.0)]), &traits(&[("empathy", 1.0)]));
        assert_eq!(result, None);
    }

    #[test]
    fn unshared_traits_dilute_the_similarity() {
        let volunteer = traits(&[("empathy", 1.0), ("rigor", 1.0)]);
        let opportunity = traits(&[("empathy", 1.0)]);
        let result = score_personality(&volunteer, &opportunity).unwrap();
        // dot over shared keys = 1.0, norms = sqrt(2) * 1
        assert!((result - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
