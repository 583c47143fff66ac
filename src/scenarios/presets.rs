//! Preset impactor definitions.

use crate::types::{Composition, TargetLocation};

use super::Scenario;

/// Entry angle used for preset requests (degrees above the horizon).
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

pub(super) const NEW_YORK: TargetLocation = TargetLocation::preset(40.7128, -74.006);

/// All available preset scenarios, smallest to largest.
pub static SCENARIOS: &[Scenario] = &[
    SMALL_ROCKY,
    MEDIUM_METALLIC,
    LARGE_ROCKY,
    GIANT_ICY,
    EXTINCTION_LEVEL,
];

/// Tunguska-class stony asteroid.
pub static SMALL_ROCKY: Scenario = Scenario {
    id: "small-rocky",
    name: "Small Rocky Asteroid",
    diameter_m: 50.0,
    velocity_km_s: 18.0,
    composition: Composition::Rocky,
    density_kg_m3: 2500.0,
};

/// Iron-nickel body.
pub static MEDIUM_METALLIC: Scenario = Scenario {
    id: "medium-metallic",
    name: "Medium Metallic Asteroid",
    diameter_m: 200.0,
    velocity_km_s: 25.0,
    composition: Composition::Metallic,
    density_kg_m3: 7800.0,
};

/// Regional catastrophe.
pub static LARGE_ROCKY: Scenario = Scenario {
    id: "large-rocky",
    name: "Large Rocky Asteroid",
    diameter_m: 1000.0,
    velocity_km_s: 20.0,
    composition: Composition::Rocky,
    density_kg_m3: 2200.0,
};

/// Low-density long-period comet arriving fast.
pub static GIANT_ICY: Scenario = Scenario {
    id: "giant-icy",
    name: "Giant Icy Comet",
    diameter_m: 5000.0,
    velocity_km_s: 30.0,
    composition: Composition::Icy,
    density_kg_m3: 1000.0,
};

/// Chicxulub-class.
pub static EXTINCTION_LEVEL: Scenario = Scenario {
    id: "extinction-level",
    name: "Extinction Level Asteroid",
    diameter_m: 10_000.0,
    velocity_km_s: 25.0,
    composition: Composition::Rocky,
    density_kg_m3: 2500.0,
};
