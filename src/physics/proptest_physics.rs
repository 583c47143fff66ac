//! Property-based tests for the impact physics using proptest.
//!
//! These tests verify monotonicity and scaling invariants across the whole
//! range of plausible impactors.

use approx::relative_eq;
use proptest::prelude::*;

use super::{crater_diameter_meters, damage_zones, kinetic_energy_megatons, seismic_magnitude};
use crate::consequences::{estimate_casualties, estimate_economic_damage, heuristic_estimate};
use crate::features::FeatureVector;
use crate::perturbation::Correction;
use crate::physics::ZoneAreaModel;
use crate::test_utils::{assertions, fixtures};
use crate::types::{Composition, DEFAULT_TARGET_DENSITY, ImpactRequest, Projectile};

fn area_model() -> impl Strategy<Value = ZoneAreaModel> {
    prop_oneof![
        Just(ZoneAreaModel::OverlappingDisks),
        Just(ZoneAreaModel::Rings),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Larger bodies carry more energy at the same speed and density.
    #[test]
    fn prop_energy_increases_with_diameter(
        diameter_km in 0.001f64..100.0,
        growth in 1.01f64..3.0,
        velocity in 1.0f64..80.0,
        density in 500.0f64..8000.0,
    ) {
        let small = kinetic_energy_megatons(diameter_km, velocity, density).unwrap();
        let large = kinetic_energy_megatons(diameter_km * growth, velocity, density).unwrap();
        prop_assert!(large > small, "E({}) = {} not > E({}) = {}", diameter_km * growth, large, diameter_km, small);
    }

    /// Faster bodies carry more energy at the same size and density.
    #[test]
    fn prop_energy_increases_with_velocity(
        diameter_km in 0.001f64..100.0,
        velocity in 1.0f64..80.0,
        growth in 1.01f64..3.0,
    ) {
        let slow = kinetic_energy_megatons(diameter_km, velocity, 2600.0).unwrap();
        let fast = kinetic_energy_megatons(diameter_km, velocity * growth, 2600.0).unwrap();
        prop_assert!(fast > slow);
    }

    /// Crater size and seismic magnitude never shrink as energy grows.
    #[test]
    fn prop_crater_and_magnitude_monotonic(
        energy in 1e-6f64..1e9,
        growth in 1.0f64..100.0,
    ) {
        let crater = crater_diameter_meters(energy, DEFAULT_TARGET_DENSITY).unwrap();
        let bigger = crater_diameter_meters(energy * growth, DEFAULT_TARGET_DENSITY).unwrap();
        prop_assert!(bigger >= crater);
        prop_assert!(seismic_magnitude(energy * growth) >= seismic_magnitude(energy));
        prop_assert!(seismic_magnitude(energy) >= 0.0);
    }

    /// Zones are strictly nested for every positive energy.
    #[test]
    fn prop_zones_nested(energy in 1e-9f64..1e10) {
        assertions::assert_zones_nested(&damage_zones(energy));
    }

    /// Zone radii scale with the cube root of the energy ratio.
    #[test]
    fn prop_zone_radius_cube_root_scaling(
        energy in 1e-3f64..1e8,
        ratio in 1.0f64..1000.0,
    ) {
        let base = damage_zones(energy);
        let scaled = damage_zones(energy * ratio);
        for (a, b) in base.iter().zip(scaled.iter()) {
            prop_assert!(relative_eq!(
                b.radius_km / a.radius_km,
                ratio.cbrt(),
                max_relative = 1e-9
            ));
        }
    }

    /// Consequences are finite and non-negative for any valid density.
    #[test]
    fn prop_consequences_non_negative(
        energy in 0.0f64..1e9,
        population in 0.0f64..50_000.0,
        gdp in 0.0f64..10.0,
        model in area_model(),
    ) {
        let zones = damage_zones(energy);
        let casualties = estimate_casualties(&zones, population, model).unwrap();
        let economic = estimate_economic_damage(&zones, gdp, model).unwrap();
        assertions::assert_non_negative("casualties", casualties);
        assertions::assert_non_negative("economic damage", economic);
    }

    /// Ring areas never count more people than overlapping disks.
    #[test]
    fn prop_rings_bounded_by_disks(
        energy in 1e-3f64..1e9,
        population in 0.0f64..50_000.0,
    ) {
        let zones = damage_zones(energy);
        let rings = estimate_casualties(&zones, population, ZoneAreaModel::Rings).unwrap();
        let disks = estimate_casualties(&zones, population, ZoneAreaModel::OverlappingDisks).unwrap();
        prop_assert!(rings <= disks);
    }

    /// The heuristic grows with diameter and population density.
    #[test]
    fn prop_heuristic_monotonic(
        diameter_m in 1.0f64..20_000.0,
        growth in 1.01f64..3.0,
        population in 0.0f64..20_000.0,
        factor in 0.0f64..1.0,
    ) {
        let features = |d: f64, pop: f64| {
            let request = ImpactRequest::new(
                Projectile::new(d, 20.0, 2600.0, Composition::Rocky).unwrap(),
                fixtures::with_population(pop),
                45.0,
            )
            .unwrap();
            FeatureVector::from_request(&request, 0.0)
        };
        let correction = Correction::new(factor, factor, factor);

        let base = heuristic_estimate(&features(diameter_m, population), correction);
        let wider = heuristic_estimate(&features(diameter_m * growth, population), correction);
        let denser = heuristic_estimate(&features(diameter_m, population * growth), correction);

        prop_assert!(wider.casualties >= base.casualties);
        prop_assert!(wider.economic_damage_usd >= base.economic_damage_usd);
        prop_assert!(denser.casualties >= base.casualties);
        prop_assert!(base.displacement >= 0.0);
    }
}
