//! Integration tests for the preset scenarios.

mod common;

use neo_impact::prediction::ImpactCalculator;
use neo_impact::scenarios::{SCENARIOS, default_location, get_scenario};
use neo_impact::types::Composition;

#[test]
fn test_all_scenarios_exist() {
    assert!(!SCENARIOS.is_empty(), "Should have at least one scenario defined");
}

#[test]
fn test_scenario_unique_names() {
    let mut names: Vec<&str> = SCENARIOS.iter().map(|s| s.name).collect();
    names.sort();
    for i in 1..names.len() {
        assert_ne!(names[i - 1], names[i], "Duplicate scenario name: {}", names[i]);
    }
}

#[test]
fn test_all_scenarios_predict() {
    let calc = ImpactCalculator::default();
    for scenario in SCENARIOS {
        let request = scenario.request(default_location()).unwrap();
        let prediction = calc
            .predict_deterministic(&request, scenario.id)
            .unwrap_or_else(|e| panic!("Scenario '{}' failed: {e}", scenario.id));
        assert!(prediction.kinetic_energy_mt > 0.0);
        assert_eq!(prediction.mitigation_scenarios.len(), 4);
    }
}

#[test]
fn test_casualties_increase_across_scenarios() {
    let calc = ImpactCalculator::default();
    let casualties: Vec<f64> = SCENARIOS
        .iter()
        .map(|s| {
            let p = s.projectile().unwrap();
            calc.simulate(&p, &default_location()).unwrap().casualties
        })
        .collect();
    for pair in casualties.windows(2) {
        assert!(pair[1] >= pair[0], "Casualties should not drop: {casualties:?}");
    }
}

#[test]
fn test_icy_comet_uses_low_density() {
    let comet = get_scenario("giant-icy").unwrap();
    assert_eq!(comet.composition, Composition::Icy);
    assert_eq!(comet.projectile().unwrap().density_kg_m3(), 1000.0);
}

#[test]
fn test_extinction_level_energy() {
    let calc = ImpactCalculator::default();
    let scenario = get_scenario("extinction-level").unwrap();
    let sim = calc
        .simulate(&scenario.projectile().unwrap(), &default_location())
        .unwrap();
    // Chicxulub range: ~10^7 - 10^8 MT
    assert!(sim.impact_energy_mt > 1e7 && sim.impact_energy_mt < 1e9);
}
