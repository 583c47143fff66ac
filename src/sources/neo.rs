//! Near-Earth-object records in the NASA NeoWs JSON shape.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bevy::log::warn;
use serde::{Deserialize, Serialize};

use super::fallback::fallback_catalog;
use super::{Sourced, UpstreamError};
use crate::types::{Composition, ImpactError, Projectile};

/// Number of records scanned when filtering for hazardous objects.
pub const HAZARD_SCAN_SIZE: usize = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

/// One close approach of the object to a planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: String,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    pub orbiting_body: String,
}

/// Orbit summary. NeoWs encodes the numbers as strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalData {
    pub orbit_determination_date: String,
    pub orbital_period: String,
    pub perihelion_distance: String,
    pub aphelion_distance: String,
    pub eccentricity: String,
    pub inclination: String,
}

/// A near-Earth object as reported by the NEO source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    #[serde(default)]
    pub orbital_data: Option<OrbitalData>,
}

impl NeoRecord {
    /// Midpoint of the estimated diameter range (km).
    pub fn mean_diameter_km(&self) -> f64 {
        let range = &self.estimated_diameter.kilometers;
        (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0
    }

    /// Relative velocity at the first listed close approach (km/s).
    pub fn approach_velocity_km_s(&self) -> Option<f64> {
        self.close_approach_data
            .first()?
            .relative_velocity
            .kilometers_per_second
            .trim()
            .parse()
            .ok()
    }

    /// Impactor built from the mean diameter and first approach velocity.
    pub fn to_projectile(&self, composition: Composition) -> Result<Projectile, ImpactError> {
        let velocity = self
            .approach_velocity_km_s()
            .ok_or_else(|| ImpactError::MissingField {
                id: self.id.clone(),
                field: "close approach velocity",
            })?;
        Projectile::from_composition(self.mean_diameter_km() * 1000.0, velocity, composition)
    }
}

/// One page of browse results.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NeoPage {
    pub asteroids: Vec<NeoRecord>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Slice `records` into pages of `size`. A zero size yields an empty page.
pub fn paginate(records: &[NeoRecord], page: usize, size: usize) -> NeoPage {
    if size == 0 {
        return NeoPage {
            asteroids: Vec::new(),
            total_pages: 0,
            current_page: page,
        };
    }
    // Pages past the end come back empty
    let start = page.saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());
    NeoPage {
        asteroids: records[start..end].to_vec(),
        total_pages: records.len().div_ceil(size),
        current_page: page,
    }
}

/// Supplies NEO records.
pub trait NeoSource {
    fn browse(&self, page: usize, size: usize) -> Result<NeoPage, UpstreamError>;
    fn find(&self, id: &str) -> Result<Option<NeoRecord>, UpstreamError>;
}

/// Top level of a NeoWs document: either a browse listing or a date-grouped feed.
#[derive(Deserialize)]
#[serde(untagged)]
enum NeoDocument {
    Browse {
        near_earth_objects: Vec<NeoRecord>,
    },
    Feed {
        near_earth_objects: BTreeMap<String, Vec<NeoRecord>>,
    },
}

/// Parse a NeoWs browse or feed document. Feed entries are flattened in date order.
pub fn parse_neo_document(json: &str) -> Result<Vec<NeoRecord>, UpstreamError> {
    let records = match serde_json::from_str(json)? {
        NeoDocument::Browse { near_earth_objects } => near_earth_objects,
        NeoDocument::Feed { near_earth_objects } => {
            near_earth_objects.into_values().flatten().collect()
        }
    };
    Ok(records)
}

/// NEO source backed by a NeoWs JSON document on disk.
///
/// The file is read on every call, so replacing it takes effect immediately.
#[derive(Clone, Debug)]
pub struct JsonNeoSource {
    path: PathBuf,
}

impl JsonNeoSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<NeoRecord>, UpstreamError> {
        let json = std::fs::read_to_string(&self.path)?;
        parse_neo_document(&json)
    }
}

impl NeoSource for JsonNeoSource {
    fn browse(&self, page: usize, size: usize) -> Result<NeoPage, UpstreamError> {
        Ok(paginate(&self.load()?, page, size))
    }

    fn find(&self, id: &str) -> Result<Option<NeoRecord>, UpstreamError> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }
}

/// NEO lookups that fall back to the built-in catalog when the source fails.
pub struct NeoCatalog<S> {
    source: S,
}

impl<S: NeoSource> NeoCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn browse(&self, page: usize, size: usize) -> Sourced<NeoPage> {
        match self.source.browse(page, size) {
            Ok(result) => Sourced::live(result),
            Err(err) => {
                warn!("NEO browse failed ({err}), serving fallback catalog");
                Sourced::fallback(paginate(&fallback_catalog(), page, size))
            }
        }
    }

    pub fn find(&self, id: &str) -> Sourced<Option<NeoRecord>> {
        match self.source.find(id) {
            Ok(record) => Sourced::live(record),
            Err(err) => {
                warn!("NEO lookup for {id} failed ({err}), serving fallback catalog");
                Sourced::fallback(fallback_catalog().into_iter().find(|r| r.id == id))
            }
        }
    }

    /// Potentially hazardous objects among the first [`HAZARD_SCAN_SIZE`] records.
    pub fn hazardous(&self, limit: usize) -> Sourced<Vec<NeoRecord>> {
        self.browse(0, HAZARD_SCAN_SIZE).map(|page| {
            page.asteroids
                .into_iter()
                .filter(|r| r.is_potentially_hazardous_asteroid)
                .take(limit)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSE_JSON: &str = r#"{
        "page": { "size": 20, "total_elements": 1, "total_pages": 1, "number": 0 },
        "near_earth_objects": [{
            "id": "2000433",
            "name": "433 Eros (A898 PA)",
            "absolute_magnitude_h": 10.38,
            "estimated_diameter": {
                "kilometers": { "estimated_diameter_min": 22.0, "estimated_diameter_max": 49.0 },
                "meters": { "estimated_diameter_min": 22000.0, "estimated_diameter_max": 49000.0 }
            },
            "is_potentially_hazardous_asteroid": false,
            "close_approach_data": [{
                "close_approach_date": "1900-12-27",
                "relative_velocity": { "kilometers_per_second": "5.5786",
                                       "kilometers_per_hour": "20083.0" },
                "miss_distance": { "kilometers": "47112732.928149391" },
                "orbiting_body": "Earth"
            }]
        }]
    }"#;

    const FEED_JSON: &str = r#"{
        "element_count": 2,
        "near_earth_objects": {
            "2025-01-02": [{
                "id": "b", "name": "B", "absolute_magnitude_h": 20.0,
                "estimated_diameter": { "kilometers": { "estimated_diameter_min": 0.1, "estimated_diameter_max": 0.3 } },
                "is_potentially_hazardous_asteroid": true
            }],
            "2025-01-01": [{
                "id": "a", "name": "A", "absolute_magnitude_h": 21.0,
                "estimated_diameter": { "kilometers": { "estimated_diameter_min": 0.2, "estimated_diameter_max": 0.4 } },
                "is_potentially_hazardous_asteroid": false
            }]
        }
    }"#;

    struct Unreachable;

    impl NeoSource for Unreachable {
        fn browse(&self, _page: usize, _size: usize) -> Result<NeoPage, UpstreamError> {
            Err(UpstreamError::Unavailable("timeout".into()))
        }

        fn find(&self, _id: &str) -> Result<Option<NeoRecord>, UpstreamError> {
            Err(UpstreamError::Unavailable("HTTP 503".into()))
        }
    }

    #[test]
    fn test_parse_browse() {
        let records = parse_neo_document(BROWSE_JSON).unwrap();
        assert_eq!(records.len(), 1);
        let eros = &records[0];
        assert_eq!(eros.mean_diameter_km(), 35.5);
        assert_eq!(eros.approach_velocity_km_s(), Some(5.5786));
        assert!(eros.orbital_data.is_none());
    }

    #[test]
    fn test_parse_feed_in_date_order() {
        let records = parse_neo_document(FEED_JSON).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_neo_document("not json"),
            Err(UpstreamError::Json(_))
        ));
    }

    #[test]
    fn test_to_projectile() {
        let records = parse_neo_document(BROWSE_JSON).unwrap();
        let p = records[0].to_projectile(Composition::Rocky).unwrap();
        assert_eq!(p.diameter_m(), 35_500.0);
        assert_eq!(p.velocity_km_s(), 5.5786);
    }

    #[test]
    fn test_to_projectile_without_approach() {
        let records = parse_neo_document(FEED_JSON).unwrap();
        let err = records[0].to_projectile(Composition::Rocky).unwrap_err();
        assert!(matches!(err, ImpactError::MissingField { .. }));
    }

    #[test]
    fn test_paginate() {
        let catalog = fallback_catalog();
        let first = paginate(&catalog, 0, 4);
        assert_eq!(first.asteroids.len(), 4);
        assert_eq!(first.total_pages, 2);

        let second = paginate(&catalog, 1, 4);
        assert_eq!(second.asteroids.len(), 2);
        assert_eq!(second.current_page, 1);

        assert!(paginate(&catalog, 10, 4).asteroids.is_empty());
        assert_eq!(paginate(&catalog, 0, 0).total_pages, 0);
    }

    #[test]
    fn test_catalog_falls_back() {
        let catalog = NeoCatalog::new(Unreachable);

        let page = catalog.browse(0, 20);
        assert!(page.is_fallback());
        assert_eq!(page.value.asteroids.len(), 6);

        let apophis = catalog.find("99942");
        assert!(apophis.is_fallback());
        assert_eq!(apophis.value.unwrap().name, "99942 Apophis");

        assert!(catalog.find("nope").value.is_none());
    }

    #[test]
    fn test_hazardous_filter() {
        let catalog = NeoCatalog::new(Unreachable);
        let hazardous = catalog.hazardous(10);
        assert!(hazardous.is_fallback());
        assert_eq!(hazardous.value.len(), 4);
        assert!(hazardous.value.iter().all(|r| r.is_potentially_hazardous_asteroid));
        assert_eq!(catalog.hazardous(2).value.len(), 2);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let catalog = NeoCatalog::new(JsonNeoSource::new("does/not/exist.json"));
        assert!(catalog.browse(0, 3).is_fallback());
    }
}
