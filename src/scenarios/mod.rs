//! Preset impact scenarios.
//!
//! A fixed set of test impactors spanning five orders of magnitude in
//! energy, from a Tunguska-class airburst to an extinction-level strike:
//! - Small rocky asteroid (50 m)
//! - Medium metallic asteroid (200 m)
//! - Large rocky asteroid (1 km)
//! - Giant icy comet (5 km)
//! - Extinction-level asteroid (10 km)

pub mod presets;

use crate::types::{Composition, ImpactError, ImpactRequest, Projectile, TargetLocation};

pub use presets::{DEFAULT_ENTRY_ANGLE_DEG, SCENARIOS};

/// A predefined impactor.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Diameter (m).
    pub diameter_m: f64,
    /// Impact velocity (km/s).
    pub velocity_km_s: f64,
    pub composition: Composition,
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
}

impl Scenario {
    pub fn projectile(&self) -> Result<Projectile, ImpactError> {
        Projectile::new(
            self.diameter_m,
            self.velocity_km_s,
            self.density_kg_m3,
            self.composition,
        )
    }

    /// Request for this impactor striking `target` at the default entry angle.
    pub fn request(&self, target: TargetLocation) -> Result<ImpactRequest, ImpactError> {
        ImpactRequest::new(self.projectile()?, target, DEFAULT_ENTRY_ANGLE_DEG)
    }
}

/// Default impact site: New York City.
pub fn default_location() -> TargetLocation {
    presets::NEW_YORK.with_name("New York")
}

/// Get a scenario by ID.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
