use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::normalize::normalize_token;
use crate::synonyms::are_equivalent;

lazy_static! {
    /// Hand-curated city adjacency (commuting distance). Consulted
    /// symmetrically; entries list one direction only.
    static ref NEARBY_CITIES: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("tirane", vec!["durres", "kamez", "vore", "kavaje"]);
        m.insert("durres", vec!["shijak", "kavaje"]);
        m.insert("kamez", vec!["vore"]);
        m.insert("shkoder", vec!["lezhe", "koplik"]);
        m.insert("lezhe", vec!["lac", "mamurras"]);
        m.insert("vlore", vec!["fier", "orikum", "selenice"]);
        m.insert("fier", vec!["lushnje", "patos", "roskovec"]);
        m.insert("lushnje", vec!["divjake"]);
        m.insert("berat", vec!["kucove", "polican"]);
        m.insert("elbasan", vec!["librazhd", "peqin", "cerrik", "belsh"]);
        m.insert("korce", vec!["pogradec", "maliq"]);
        m.insert("pogradec", vec!["librazhd"]);
        m.insert("gjirokaster", vec!["tepelene", "libohove"]);
        m.insert("kukes", vec!["has", "tropoje"]);
        m
    };
}

fn are_nearby(a: &str, b: &str) -> bool {
    NEARBY_CITIES.get(a).is_some_and(|list| list.contains(&b))
        || NEARBY_CITIES.get(b).is_some_and(|list| list.contains(&a))
}

/// Proximity score over two free-text location strings.
///
/// Exact normalized match 100, containment 85, known-nearby city 75,
/// resolver equivalence (spelling/language variants) 70, unknown
/// relationship 35. A candidate without a location is not penalized (70);
/// any other missing side is neutral (50).
pub fn score_location(volunteer_location: Option<&str>, opportunity_location: Option<&str>) -> f64 {
    let volunteer = volunteer_location
        .map(normalize_token)
        .filter(|s| !s.is_empty());
    let opportunity = opportunity_location
        .map(normalize_token)
        .filter(|s| !s.is_empty());

    match (volunteer, opportunity) {
        (Some(vol), Some(opp)) => {
            if vol == opp {
                100.0
            } else if vol.contains(&opp) || opp.contains(&vol) {
                85.0
            } else if are_nearby(&vol, &opp) {
                75.0
            } else if are_equivalent(&vol, &opp) {
                70.0
            } else {
                35.0
            }
        }
        (Some(_), None) => 70.0,
        _ => 50.0,
    }
}
