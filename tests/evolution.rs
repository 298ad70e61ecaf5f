//! End-to-end runs of the generation loop.

use binary_ga::{
    Candidate, ConsoleReporter, Evolution, EvolutionConfig, GaError, Reporter, RngSource,
    SequenceSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_four_bit_run_terminates() {
    let config = EvolutionConfig::default()
        .with_capacity(4)
        .with_target("1111".parse::<Candidate>().unwrap());

    let mut evolution = Evolution::new(&config, RngSource::thread()).unwrap();
    let report = evolution.run().unwrap();

    assert!(report.generations >= 1);
    assert_eq!(report.fitness, 4);
    assert_eq!(report.found_genes, "1111");
    assert_eq!(evolution.population().best().unwrap().fitness(), 4);
}

#[test]
fn test_default_run_reaches_all_ones() {
    let config = EvolutionConfig::default();
    let mut evolution =
        Evolution::new(&config, RngSource::new(StdRng::seed_from_u64(2024))).unwrap();
    let report = evolution.run().unwrap();

    assert_eq!(report.target_genes, "1".repeat(33));
    assert_eq!(report.found_genes, "1".repeat(33));
    assert!(evolution.population().len() <= config.capacity);
}

#[test]
fn test_found_genes_may_differ_from_target_pattern() {
    // Initial genes are all zeros except as scripted; target fitness 1.
    let rng = SequenceSource::new()
        .with_bits([false, false, false, true])
        .with_units([0.99]);
    let config = EvolutionConfig::default()
        .with_capacity(3)
        .with_target("1000".parse::<Candidate>().unwrap());

    let report = Evolution::new(&config, rng).unwrap().run().unwrap();

    assert_eq!(report.generations, 1);
    assert_eq!(report.fitness, 1);
    assert_eq!(report.found_genes, "0001");
    assert_ne!(report.found_genes, report.target_genes);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EvolutionConfig::default().with_all_ones_target(0);
    let err = Evolution::new(&config, RngSource::thread()).unwrap_err();
    assert!(matches!(err, GaError::InvalidConfig(_)));
}

#[test]
fn test_report_sink_receives_summary() {
    let config = EvolutionConfig::default()
        .with_capacity(10)
        .with_all_ones_target(6);
    let report = Evolution::new(&config, RngSource::new(StdRng::seed_from_u64(3)))
        .unwrap()
        .run()
        .unwrap();

    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.report(&report).unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(text.contains(&format!("NUMBER OF GENERATION: {}", report.generations)));
    assert!(text.contains("SOLUTION GENES: 111111"));
    assert!(text.contains("FOUND INDIVIDUAL GENES: 111111"));
}
