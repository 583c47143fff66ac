//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use neo_impact::types::{
    Composition, Geology, ImpactRequest, Projectile, RockType, SoilType, TargetLocation,
};

/// A 1 km rocky asteroid at 20 km/s.
pub fn one_km_rocky() -> Projectile {
    Projectile::new(1000.0, 20.0, 2600.0, Composition::Rocky).unwrap()
}

/// A 50 m stony body at 18 km/s.
pub fn fifty_m_stony() -> Projectile {
    Projectile::new(50.0, 18.0, 2500.0, Composition::Rocky).unwrap()
}

/// New York City without geology.
pub fn new_york() -> TargetLocation {
    TargetLocation::new(40.7128, -74.006).unwrap()
}

/// A site with the given population density.
pub fn site_with_population(latitude: f64, longitude: f64, density: f64) -> TargetLocation {
    TargetLocation::new(latitude, longitude)
        .unwrap()
        .with_geology(Geology {
            rock_type: RockType::Basalt,
            soil: SoilType::Loam,
            population_density: density,
            recent_earthquakes: 12,
        })
        .unwrap()
}

/// Request at 45° against `target`.
pub fn request(projectile: Projectile, target: TargetLocation) -> ImpactRequest {
    ImpactRequest::new(projectile, target, 45.0).unwrap()
}

/// Write `contents` to a uniquely named file in the temp directory.
pub fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "neo-impact-{}-{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).unwrap();
    path
}
