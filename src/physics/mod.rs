//! Closed-form impact physics.
//!
//! Converts an impactor's size, speed and density into an energy scalar,
//! then derives crater size, seismic magnitude and blast damage zones from it.
//! Everything here is a pure function of its arguments.

mod energy;
mod zones;

#[cfg(test)]
mod proptest_physics;

pub use energy::{crater_diameter_meters, kinetic_energy_megatons, projectile_energy, seismic_magnitude};
pub use zones::{DamageZone, ZoneAreaModel, ZoneKind, damage_scale_factor, damage_zones, zone_areas};
