use lovematch_core::{
    aggregate, canonicalize, name_breakdown, score_names_with, validate_name, Band, MetricName,
    ScoreSource, ValidationError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLE_NAMES: &[&str] = &[
    "Alice",
    "Bob",
    "O'Brian-Smith",
    "Zoë",
    "Mary Jane",
    "Ἀθηνᾶ",
    "Мария",
    "محمد",
    "प्रिया",
    "สมชาย",
    "さくら",
    "김민준",
    "愛子",
    "Łukasz",
];

fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

#[test]
fn scores_and_breakdowns_stay_in_range_across_scripts() {
    for first in SAMPLE_NAMES {
        for second in SAMPLE_NAMES {
            let result = score_names_with(first, second, &mut rng()).unwrap();
            assert!(result.score <= 100);
            for (metric, value) in result.breakdown.iter() {
                assert!(
                    (0.0..=100.0).contains(&value),
                    "{metric:?}={value} for {first}/{second}"
                );
            }
        }
    }
}

#[test]
fn metric_results_obey_aggregation_law() {
    for first in SAMPLE_NAMES {
        for second in SAMPLE_NAMES {
            let result = score_names_with(first, second, &mut rng()).unwrap();
            if result.source == ScoreSource::Metrics {
                assert_eq!(result.breakdown.len(), 5);
                assert_eq!(result.score, aggregate(&result.breakdown.values()));
                assert_eq!(result.band, Band::from_score(result.score));
            }
        }
    }
}

#[test]
fn breakdown_is_deterministic() {
    let a = canonicalize("Romeo");
    let b = canonicalize("Juliet");
    let first = name_breakdown(&a, &b).unwrap();
    let second = name_breakdown(&a, &b).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get(MetricName::InitialSimilarity), Some(38.5));
    assert_eq!(first.get(MetricName::VowelBalance), Some(90.0));
    assert_eq!(first.get(MetricName::CosmicHash), Some(88.0));
}

#[test]
fn score_ignores_case_spacing_and_width() {
    let plain = score_names_with("anna", "bob", &mut rng()).unwrap();
    let noisy = score_names_with("  ＡＮＮＡ ", "BOB", &mut rng()).unwrap();
    assert_eq!(plain.score, noisy.score);
    assert_eq!(plain.breakdown, noisy.breakdown);
}

#[test]
fn argument_order_can_change_the_hash_metric() {
    let forward = score_names_with("Romeo", "Juliet", &mut rng()).unwrap();
    let reverse = score_names_with("Juliet", "Romeo", &mut rng()).unwrap();
    assert_eq!(forward.breakdown.get(MetricName::CosmicHash), Some(88.0));
    assert_eq!(reverse.breakdown.get(MetricName::CosmicHash), Some(79.0));
    assert_eq!(forward.score, 63);
    assert_eq!(reverse.score, 62);
}

#[test]
fn validation_matches_documented_examples() {
    assert!(validate_name("O'Brian-Smith"));
    assert!(!validate_name("John123"));
    assert!(!validate_name(""));
    assert!(!validate_name("   "));
    assert!(!validate_name("Dr. Who"));
}

#[test]
fn rejected_names_never_reach_scoring() {
    let err = score_names_with("", "Bob", &mut rng()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyName { position: 1 });
    let err = score_names_with("Bob", "R2-D2", &mut rng()).unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(err.code(), "invalid_name");
}
