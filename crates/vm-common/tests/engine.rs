use std::collections::HashMap;
use std::sync::Arc;

use vm_common::matching::{
    MatchQuality, MatchingConfig, MatchingEngine, BASE_WEIGHTS, SEMANTIC_WEIGHTS,
};
use vm_common::recommend::{attach_organization_names, RecommendationEngine};
use vm_common::repository::{JsonFileStore, OpportunityRepository, VolunteerRepository};
use vm_common::semantic::{HashEmbedder, SemanticConfig, SemanticScorer};
use vm_common::{Opportunity, TimeRequirements, Volunteer};

fn engine() -> MatchingEngine {
    MatchingEngine::new(MatchingConfig {
        weights: BASE_WEIGHTS,
        personality_boost: 0.05,
    })
    .expect("base weights are valid")
}

fn teaching_volunteer() -> Volunteer {
    Volunteer {
        id: Some(1),
        name: Some("Arta".into()),
        skills: vec!["teaching".into()],
        interests: vec!["education".into()],
        availability: HashMap::from([("weekday".to_string(), true)]),
        location: Some("tirane".into()),
        ..Volunteer::default()
    }
}

fn teaching_opportunity() -> Opportunity {
    Opportunity {
        id: Some(10),
        title: Some("Mentor leximi".into()),
        skills_required: vec!["teaching".into()],
        interests: vec!["education".into()],
        time_requirements: TimeRequirements::Slots(HashMap::from([(
            "weekday".to_string(),
            true,
        )])),
        location: Some("Tirane".into()),
        ..Opportunity::default()
    }
}

#[test]
fn end_to_end_teaching_example_scores_one_hundred() {
    let results = engine().rank_opportunities_for_volunteer(
        &teaching_volunteer(),
        &[teaching_opportunity()],
        0.0,
    );

    assert_eq!(results.len(), 1);
    let top = &results[0];
    assert_eq!(top.details.skill_score, 100.0);
    assert_eq!(top.details.interest_score, 100.0);
    assert_eq!(top.details.availability_score, 100.0);
    assert_eq!(top.details.location_score, 100.0);
    assert_eq!(top.score, 100.0);
    assert_eq!(top.quality, MatchQuality::PerfectMatch);
}

#[test]
fn ranking_is_stable_for_tied_scores() {
    // A and B tie; C is weaker. Input order A, B, C must survive.
    let a = Opportunity {
        id: Some(1),
        ..teaching_opportunity()
    };
    let b = Opportunity {
        id: Some(2),
        ..teaching_opportunity()
    };
    let c = Opportunity {
        id: Some(3),
        location: Some("berat".into()),
        ..teaching_opportunity()
    };

    let results =
        engine().rank_opportunities_for_volunteer(&teaching_volunteer(), &[a, b, c], 0.0);

    let ids: Vec<Option<i64>> = results.iter().map(|m| m.opportunity.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn min_score_threshold_is_inclusive() {
    let perfect = teaching_opportunity();
    let below = Opportunity {
        location: Some("berat".into()),
        ..teaching_opportunity()
    };

    let results = engine().rank_opportunities_for_volunteer(
        &teaching_volunteer(),
        &[perfect, below],
        100.0,
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 100.0);
}

#[test]
fn personality_boost_caps_at_the_documented_ceiling() {
    let volunteer = Volunteer {
        personality_traits: HashMap::from([
            ("empathy".to_string(), 0.9),
            ("patience".to_string(), 0.7),
        ]),
        ..teaching_volunteer()
    };
    let opportunity = Opportunity {
        personality_traits: HashMap::from([
            ("empathy".to_string(), 0.9),
            ("patience".to_string(), 0.7),
        ]),
        ..teaching_opportunity()
    };

    let results = engine().rank_opportunities_for_volunteer(&volunteer, &[opportunity], 0.0);

    let top = &results[0];
    // identical trait vectors: similarity 1.0, boosted exactly to 105
    assert_eq!(top.details.personality_score, Some(1.0));
    assert_eq!(top.score, 105.0);
    assert!(top.score <= 100.0 * (1.0 + 0.05));
}

#[test]
fn semantic_engine_reports_the_extra_factor() {
    let scorer = SemanticScorer::new(Arc::new(HashEmbedder::new(SemanticConfig::default())));
    let engine = MatchingEngine::with_semantic(
        MatchingConfig {
            weights: SEMANTIC_WEIGHTS,
            personality_boost: 0.05,
        },
        scorer,
    )
    .expect("semantic weights are valid");

    let results = engine.rank_opportunities_for_volunteer(
        &teaching_volunteer(),
        &[teaching_opportunity()],
        0.0,
    );

    let semantic = results[0].details.semantic_score.expect("factor attached");
    assert!((0.0..=100.0).contains(&semantic));
    // the four lexical factors are all perfect; the final score moves with
    // the semantic factor only (tolerance covers display rounding)
    let expected = 85.0 + 0.15 * semantic;
    assert!((results[0].score - expected).abs() < 0.2);
}

#[test]
fn flat_file_store_feeds_the_recommender() {
    let raw = r#"{
        "volunteers": [
            {"id": 1, "name": "Arta", "skills": ["teaching"],
             "interests": ["education"],
             "availability": {"weekday": true},
             "location": "tirane"}
        ],
        "opportunities": [
            {"id": 10, "title": "Mentor leximi", "organization_id": 5,
             "skills_required": ["teaching"], "interests": ["education"],
             "time_requirements": {"weekday": true}, "location": "Tirane"},
            {"id": 11, "title": "Ndihmë në strehëz", "organization_id": 9,
             "skills_required": ["veterinari"], "interests": ["kafshë"],
             "time_requirements": "vetëm fundjavë", "location": "Vlore"}
        ],
        "organizations": [
            {"id": 5, "name": "Shoqata Edu"}
        ]
    }"#;
    let store = JsonFileStore::from_document(serde_json::from_str(raw).unwrap());

    let volunteer = VolunteerRepository::get_by_id(&store, 1).unwrap().unwrap();
    let opportunities = OpportunityRepository::list_all(&store).unwrap();

    let recommender = RecommendationEngine::new(engine());
    let mut top = recommender.recommend_opportunities(&volunteer, &opportunities, 5, 50.0);
    attach_organization_names(&mut top, &store);

    assert_eq!(top.len(), 1, "the shelter shift scores below the floor");
    assert_eq!(top[0].opportunity.id, Some(10));
    assert_eq!(
        top[0].opportunity.organization_name.as_deref(),
        Some("Shoqata Edu")
    );
}

#[test]
fn scores_and_subscores_stay_in_range() {
    let volunteers = [
        Volunteer::default(),
        teaching_volunteer(),
        Volunteer {
            skills: vec!["gatim".into(), "fotografi".into()],
            interests: vec!["kafshë".into(), "mjedis".into()],
            location: Some("durres".into()),
            ..Volunteer::default()
        },
    ];
    let opportunities = [
        Opportunity::default(),
        teaching_opportunity(),
        Opportunity {
            skills_required: vec!["programim".into()],
            recommended_skills: vec!["dizajn".into()],
            interests: vec!["teknologji".into()],
            time_requirements: TimeRequirements::FreeText("fundjavë, orar fleksibël".into()),
            location: Some("Shkoder".into()),
            ..Opportunity::default()
        },
    ];

    let engine = engine();
    for volunteer in &volunteers {
        let results = engine.rank_opportunities_for_volunteer(volunteer, &opportunities, 0.0);
        assert_eq!(results.len(), opportunities.len());
        for item in results {
            assert!((0.0..=105.0).contains(&item.score));
            let d = &item.details;
            for sub in [
                d.skill_score,
                d.interest_score,
                d.availability_score,
                d.location_score,
            ] {
                assert!((0.0..=100.0).contains(&sub), "sub-score out of range: {sub}");
            }
        }
    }
}
