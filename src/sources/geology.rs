//! Site geology: rock, soil, population density and recent seismicity.
//!
//! Rock, soil and population are rough deterministic estimates keyed on
//! coordinates. Seismicity comes from a USGS GeoJSON earthquake catalog when
//! one is available.

use std::path::{Path, PathBuf};

use bevy::log::warn;
use bevy::math::{DVec2, DVec3};
use serde::Deserialize;

use super::{Sourced, UpstreamError};
use crate::types::{Geology, RockType, SoilType, TargetLocation};

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius around the target searched for earthquakes (km).
pub const EARTHQUAKE_SEARCH_RADIUS_KM: f64 = 200.0;

/// Lower bound on estimated population density (people/km²).
pub const MIN_POPULATION_DENSITY: f64 = 100.0;

/// Major population centres: (latitude, longitude) and density (people/km²).
const MAJOR_CITIES: [(DVec2, f64); 4] = [
    (DVec2::new(40.7128, -74.006), 10_000.0),  // New York
    (DVec2::new(34.0522, -118.2437), 8_000.0), // Los Angeles
    (DVec2::new(51.5074, -0.1278), 5_500.0),   // London
    (DVec2::new(35.6762, 139.6503), 6_000.0),  // Tokyo
];

/// Supplies geology for a target location.
pub trait GeologySource {
    fn geology(&self, location: &TargetLocation) -> Result<Geology, UpstreamError>;
}

fn cyclic_index(value: f64) -> usize {
    (value.floor().abs() as usize) % 5
}

/// Rock type estimate: |floor(lat + lon)| mod 5 over [`RockType::INDEXED`].
pub fn estimate_rock_type(lat_lon: DVec2) -> RockType {
    RockType::INDEXED[cyclic_index(lat_lon.x + lat_lon.y)]
}

/// Soil estimate: |floor(2·lat + lon)| mod 5 over [`SoilType::ALL`].
pub fn estimate_soil(lat_lon: DVec2) -> SoilType {
    SoilType::ALL[cyclic_index(lat_lon.x * 2.0 + lat_lon.y)]
}

/// Population density decaying with degree distance from the nearest major city.
pub fn estimate_population_density(lat_lon: DVec2) -> f64 {
    // Distance in degrees, not km
    let (distance, density) = MAJOR_CITIES
        .iter()
        .map(|(city, density)| (lat_lon.distance(*city), *density))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((f64::INFINITY, 0.0));

    (density * (-distance).exp()).max(MIN_POPULATION_DENSITY)
}

/// A recorded earthquake epicentre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Earthquake {
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: Option<f64>,
}

impl Earthquake {
    fn unit_vector(latitude: f64, longitude: f64) -> DVec3 {
        let (lat, lon) = (latitude.to_radians(), longitude.to_radians());
        DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    /// Great-circle distance to a point (km).
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        let a = Self::unit_vector(self.latitude, self.longitude);
        let b = Self::unit_vector(latitude, longitude);
        a.angle_between(b) * EARTH_RADIUS_KM
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Properties,
    geometry: Option<Geometry>,
}

#[derive(Deserialize, Default)]
struct Properties {
    mag: Option<f64>,
}

#[derive(Deserialize)]
struct Geometry {
    /// [longitude, latitude, depth]
    coordinates: Vec<f64>,
}

/// Parse a USGS GeoJSON feature collection. Features without a point are skipped.
pub fn parse_earthquakes(json: &str) -> Result<Vec<Earthquake>, UpstreamError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    Ok(collection
        .features
        .into_iter()
        .filter_map(|f| {
            let coords = f.geometry?.coordinates;
            // GeoJSON order is longitude first
            match coords.as_slice() {
                [lon, lat, ..] => Some(Earthquake {
                    latitude: *lat,
                    longitude: *lon,
                    magnitude: f.properties.mag,
                }),
                _ => None,
            }
        })
        .collect())
}

/// Number of earthquakes within `radius_km` of the location.
pub fn count_within(quakes: &[Earthquake], location: &TargetLocation, radius_km: f64) -> u32 {
    let n = quakes
        .iter()
        .filter(|q| q.distance_km(location.latitude(), location.longitude()) <= radius_km)
        .count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Deterministic geology built only from coordinates and an optional quake list.
#[derive(Clone, Debug, Default)]
pub struct EstimatedGeology {
    quakes: Vec<Earthquake>,
}

impl EstimatedGeology {
    pub fn with_earthquakes(quakes: Vec<Earthquake>) -> Self {
        Self { quakes }
    }

    pub fn estimate(&self, location: &TargetLocation) -> Geology {
        let lat_lon = location.lat_lon();
        Geology {
            rock_type: estimate_rock_type(lat_lon),
            soil: estimate_soil(lat_lon),
            population_density: estimate_population_density(lat_lon),
            recent_earthquakes: count_within(&self.quakes, location, EARTHQUAKE_SEARCH_RADIUS_KM),
        }
    }
}

impl GeologySource for EstimatedGeology {
    fn geology(&self, location: &TargetLocation) -> Result<Geology, UpstreamError> {
        Ok(self.estimate(location))
    }
}

/// Geology whose seismicity comes from a USGS GeoJSON file on disk.
#[derive(Clone, Debug)]
pub struct GeoJsonQuakeSource {
    path: PathBuf,
}

impl GeoJsonQuakeSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl GeologySource for GeoJsonQuakeSource {
    fn geology(&self, location: &TargetLocation) -> Result<Geology, UpstreamError> {
        let json = std::fs::read_to_string(&self.path)?;
        let quakes = parse_earthquakes(&json)?;
        Ok(EstimatedGeology::with_earthquakes(quakes).estimate(location))
    }
}

/// Geology from `source`, or the coordinate estimate when the source fails.
pub fn geology_or_estimate<S: GeologySource + ?Sized>(
    source: &S,
    location: &TargetLocation,
) -> Sourced<Geology> {
    match source.geology(location) {
        Ok(geology) => Sourced::live(geology),
        Err(err) => {
            warn!(
                "Geology lookup at ({:.3}, {:.3}) failed ({err}), using estimate",
                location.latitude(),
                location.longitude()
            );
            Sourced::fallback(EstimatedGeology::default().estimate(location))
        }
    }
}
