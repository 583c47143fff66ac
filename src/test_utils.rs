//! Test utilities for impact consequence tests.
//!
//! Provides fixtures for standard impactors and targets, and assertions for
//! invariants every result must satisfy.

use crate::types::{
    Composition, Geology, ImpactRequest, Projectile, RockType, SoilType, TargetLocation,
};

/// Fixtures for creating test inputs.
pub mod fixtures {
    use super::*;

    /// A 1 km rocky asteroid at 20 km/s.
    pub fn one_km_rocky() -> Projectile {
        Projectile::new(1000.0, 20.0, 2600.0, Composition::Rocky).unwrap()
    }

    /// A 50 m stony body at 18 km/s (airburst class).
    pub fn chelyabinsk() -> Projectile {
        Projectile::new(50.0, 18.0, 2500.0, Composition::Rocky).unwrap()
    }

    /// New York City with no geology attached.
    pub fn new_york() -> TargetLocation {
        TargetLocation::new(40.7128, -74.006)
            .unwrap()
            .with_name("New York")
    }

    /// A granite site at the origin with the given population density.
    pub fn with_population(population_density: f64) -> TargetLocation {
        TargetLocation::new(0.0, 0.0)
            .unwrap()
            .with_geology(Geology {
                rock_type: RockType::Granite,
                soil: SoilType::Rocky,
                population_density,
                recent_earthquakes: 0,
            })
            .unwrap()
    }

    /// The 1 km asteroid striking New York at 45°.
    pub fn one_km_request() -> ImpactRequest {
        ImpactRequest::new(one_km_rocky(), new_york(), 45.0).unwrap()
    }
}

/// Assertions for verifying result invariants.
pub mod assertions {
    use crate::physics::DamageZone;

    /// Assert zone radii strictly increase from crater to light damage.
    ///
    /// # Panics
    /// Panics if any zone is not larger than the one inside it.
    pub fn assert_zones_nested(zones: &[DamageZone]) {
        for pair in zones.windows(2) {
            assert!(
                pair[0].radius_km < pair[1].radius_km,
                "Zones not nested: {:?} ({}) >= {:?} ({})",
                pair[0].kind,
                pair[0].radius_km,
                pair[1].kind,
                pair[1].radius_km
            );
        }
    }

    /// Assert a quantity is finite and non-negative.
    pub fn assert_non_negative(name: &str, value: f64) {
        assert!(
            value.is_finite() && value >= 0.0,
            "{name} should be finite and >= 0, got {value}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::damage_zones;

    #[test]
    fn test_fixtures_are_valid() {
        assert_eq!(fixtures::one_km_rocky().diameter_km(), 1.0);
        assert_eq!(fixtures::chelyabinsk().diameter_m(), 50.0);
        assert!(fixtures::new_york().geology().is_none());
        assert_eq!(
            fixtures::with_population(42.0)
                .geology()
                .map(|g| g.population_density),
            Some(42.0)
        );
        assert_eq!(fixtures::one_km_request().angle_deg, 45.0);
    }

    #[test]
    fn test_zone_assertion_accepts_real_zones() {
        assertions::assert_zones_nested(&damage_zones(10.0));
    }

    #[test]
    #[should_panic(expected = "should be finite")]
    fn test_non_negative_rejects_nan() {
        assertions::assert_non_negative("casualties", f64::NAN);
    }
}
