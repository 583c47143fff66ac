//! Built-in NEO catalog served when the upstream source is unreachable.

use super::neo::{
    CloseApproach, DiameterRange, EstimatedDiameter, MissDistance, NeoRecord, OrbitalData,
    RelativeVelocity,
};

struct FallbackEntry {
    id: &'static str,
    name: &'static str,
    absolute_magnitude_h: f64,
    diameter_km: (f64, f64),
    hazardous: bool,
    approach_date: &'static str,
    velocity_km_s: &'static str,
    miss_distance_km: &'static str,
    orbit_determination_date: &'static str,
    orbital_period: &'static str,
    perihelion: &'static str,
    aphelion: &'static str,
    eccentricity: &'static str,
    inclination: &'static str,
}

static FALLBACK: &[FallbackEntry] = &[
    FallbackEntry {
        id: "2054",
        name: "54 Alexandra",
        absolute_magnitude_h: 7.57,
        diameter_km: (147.3404906829, 329.4445142292),
        hazardous: true,
        approach_date: "2025-03-15",
        velocity_km_s: "15.7434821043",
        miss_distance_km: "7458963.485738643",
        orbit_determination_date: "2021-04-11",
        orbital_period: "1681.76",
        perihelion: "1.644",
        aphelion: "4.367",
        eccentricity: "0.4539",
        inclination: "11.85",
    },
    FallbackEntry {
        id: "3122",
        name: "3122 Florence",
        absolute_magnitude_h: 14.1,
        diameter_km: (4.35, 9.73),
        hazardous: true,
        approach_date: "2025-09-01",
        velocity_km_s: "13.5221",
        miss_distance_km: "7035095.385738643",
        orbit_determination_date: "2021-05-30",
        orbital_period: "859.50",
        perihelion: "1.017",
        aphelion: "2.521",
        eccentricity: "0.4227",
        inclination: "22.15",
    },
    FallbackEntry {
        id: "99942",
        name: "99942 Apophis",
        absolute_magnitude_h: 19.7,
        diameter_km: (0.31, 0.68),
        hazardous: true,
        approach_date: "2029-04-13",
        velocity_km_s: "7.42",
        miss_distance_km: "31895.377",
        orbit_determination_date: "2021-04-11",
        orbital_period: "323.60",
        perihelion: "0.746",
        aphelion: "1.099",
        eccentricity: "0.191",
        inclination: "3.34",
    },
    FallbackEntry {
        id: "1566",
        name: "1566 Icarus",
        absolute_magnitude_h: 16.9,
        diameter_km: (1.0, 2.3),
        hazardous: false,
        approach_date: "2025-06-16",
        velocity_km_s: "27.71",
        miss_distance_km: "16726695.23",
        orbit_determination_date: "2021-04-11",
        orbital_period: "408.78",
        perihelion: "0.187",
        aphelion: "1.078",
        eccentricity: "0.827",
        inclination: "22.83",
    },
    FallbackEntry {
        id: "2101",
        name: "2101 Adonis",
        absolute_magnitude_h: 18.7,
        diameter_km: (0.5, 1.1),
        hazardous: false,
        approach_date: "2025-07-10",
        velocity_km_s: "12.84",
        miss_distance_km: "3284759.12",
        orbit_determination_date: "2021-04-11",
        orbital_period: "930.95",
        perihelion: "0.441",
        aphelion: "3.302",
        eccentricity: "0.764",
        inclination: "1.33",
    },
    FallbackEntry {
        id: "4179",
        name: "4179 Toutatis",
        absolute_magnitude_h: 15.3,
        diameter_km: (2.44, 5.46),
        hazardous: true,
        approach_date: "2025-11-29",
        velocity_km_s: "11.02",
        miss_distance_km: "7053662.477",
        orbit_determination_date: "2021-04-11",
        orbital_period: "1470.09",
        perihelion: "0.924",
        aphelion: "4.132",
        eccentricity: "0.635",
        inclination: "0.47",
    },
];

impl FallbackEntry {
    fn to_record(&self) -> NeoRecord {
        NeoRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            absolute_magnitude_h: self.absolute_magnitude_h,
            estimated_diameter: EstimatedDiameter {
                kilometers: DiameterRange {
                    estimated_diameter_min: self.diameter_km.0,
                    estimated_diameter_max: self.diameter_km.1,
                },
            },
            is_potentially_hazardous_asteroid: self.hazardous,
            close_approach_data: vec![CloseApproach {
                close_approach_date: self.approach_date.to_string(),
                relative_velocity: RelativeVelocity {
                    kilometers_per_second: self.velocity_km_s.to_string(),
                },
                miss_distance: MissDistance {
                    kilometers: self.miss_distance_km.to_string(),
                },
                orbiting_body: "Earth".to_string(),
            }],
            orbital_data: Some(OrbitalData {
                orbit_determination_date: self.orbit_determination_date.to_string(),
                orbital_period: self.orbital_period.to_string(),
                perihelion_distance: self.perihelion.to_string(),
                aphelion_distance: self.aphelion.to_string(),
                eccentricity: self.eccentricity.to_string(),
                inclination: self.inclination.to_string(),
            }),
        }
    }
}

/// The six well-known objects used when no live catalog is available.
pub fn fallback_catalog() -> Vec<NeoRecord> {
    FALLBACK.iter().map(FallbackEntry::to_record).collect()
}
