//! Concurrent use of one calculator from many threads.

mod common;

use rayon::prelude::*;

use neo_impact::perturbation::{RandomCorrection, UniformProbability};
use neo_impact::prediction::ImpactCalculator;
use neo_impact::types::{Composition, Projectile};

#[test]
fn test_parallel_predictions_match_sequential() {
    let calc = ImpactCalculator::default();
    let requests: Vec<_> = (1..=64)
        .map(|i| {
            let p = Projectile::from_composition(f64::from(i) * 25.0, 15.0, Composition::Rocky)
                .unwrap();
            common::request(p, common::new_york())
        })
        .collect();

    let sequential: Vec<_> = requests
        .iter()
        .map(|r| calc.predict_deterministic(r, "seq").unwrap())
        .collect();
    let parallel: Vec<_> = requests
        .par_iter()
        .map(|r| calc.predict_deterministic(r, "seq").unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_per_caller_seeded_sources_are_independent() {
    let calc = ImpactCalculator::default();
    let request = common::request(common::one_km_rocky(), common::new_york());

    let run = |seed: u64| {
        let mut probability = UniformProbability::seeded(seed);
        let mut correction = RandomCorrection::seeded(seed);
        (0..10)
            .map(|_| {
                calc.predict(&request, "mc", &mut probability, &mut correction)
                    .unwrap()
                    .impact_probability
            })
            .collect::<Vec<_>>()
    };

    let parallel: Vec<_> = (0..8u64).into_par_iter().map(run).collect();
    let sequential: Vec<_> = (0..8u64).map(run).collect();
    assert_eq!(parallel, sequential);
}
