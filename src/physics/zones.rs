//! Concentric blast damage zones.
//!
//! Four nested bands whose outer radii all scale with the cube root of the
//! impact energy, roughly following overpressure scaling.

use serde::{Deserialize, Serialize};

/// Severity class of a damage band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    TotalDestruction,
    SevereDamage,
    ModerateDamage,
    LightDamage,
}

impl ZoneKind {
    /// All zone kinds, innermost first.
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::TotalDestruction,
        ZoneKind::SevereDamage,
        ZoneKind::ModerateDamage,
        ZoneKind::LightDamage,
    ];

    /// Outer radius per unit of scale factor (km / MT^⅓).
    pub fn radius_multiplier(&self) -> f64 {
        match self {
            ZoneKind::TotalDestruction => 2.0,
            ZoneKind::SevereDamage => 5.0,
            ZoneKind::ModerateDamage => 12.0,
            ZoneKind::LightDamage => 25.0,
        }
    }

    /// Fraction of the population in the zone that becomes a casualty.
    pub fn casualty_rate(&self) -> f64 {
        match self {
            ZoneKind::TotalDestruction => 0.95,
            ZoneKind::SevereDamage => 0.50,
            ZoneKind::ModerateDamage => 0.10,
            ZoneKind::LightDamage => 0.01,
        }
    }

    /// Fraction of the zone's economic value destroyed.
    pub fn economic_damage_rate(&self) -> f64 {
        match self {
            ZoneKind::TotalDestruction => 1.0,
            ZoneKind::SevereDamage => 0.7,
            ZoneKind::ModerateDamage => 0.3,
            ZoneKind::LightDamage => 0.05,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ZoneKind::TotalDestruction => "Total destruction - nothing survives",
            ZoneKind::SevereDamage => "Severe structural damage, high casualties",
            ZoneKind::ModerateDamage => "Moderate damage, broken windows, injuries",
            ZoneKind::LightDamage => "Light damage, felt strongly",
        }
    }

    /// Display color as a hex string, for map overlays.
    pub fn color(&self) -> &'static str {
        match self {
            ZoneKind::TotalDestruction => "#ff0000",
            ZoneKind::SevereDamage => "#ff6600",
            ZoneKind::ModerateDamage => "#ffaa00",
            ZoneKind::LightDamage => "#ffdd00",
        }
    }
}

/// One damage band with its outer radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DamageZone {
    pub kind: ZoneKind,
    /// Outer radius (km).
    pub radius_km: f64,
}

impl DamageZone {
    /// Area of the full disk bounded by this zone (km²).
    pub fn disk_area_km2(&self) -> f64 {
        std::f64::consts::PI * self.radius_km * self.radius_km
    }
}

/// Which area the per-zone rates are applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneAreaModel {
    /// Each zone's full disk, independently. Inner populations are counted
    /// again in every enclosing zone.
    #[default]
    OverlappingDisks,
    /// Only the annulus between this zone and the next-inner one.
    Rings,
}

/// Scale factor shared by all zone radii: E^⅓ (E in megatons).
pub fn damage_scale_factor(energy_megatons: f64) -> f64 {
    energy_megatons.max(0.0).cbrt()
}

/// Damage zones for a given energy, innermost first.
///
/// For any positive energy the radii are strictly increasing.
pub fn damage_zones(energy_megatons: f64) -> [DamageZone; 4] {
    let scale = damage_scale_factor(energy_megatons);
    ZoneKind::ALL.map(|kind| DamageZone {
        kind,
        radius_km: scale * kind.radius_multiplier(),
    })
}

/// Area each zone's rates apply to under `model` (km²), in input order.
///
/// `zones` must be ordered innermost first, as returned by [`damage_zones`].
pub fn zone_areas(zones: &[DamageZone], model: ZoneAreaModel) -> Vec<f64> {
    match model {
        ZoneAreaModel::OverlappingDisks => zones.iter().map(DamageZone::disk_area_km2).collect(),
        ZoneAreaModel::Rings => {
            let mut inner = 0.0;
            zones
                .iter()
                .map(|zone| {
                    let disk = zone.disk_area_km2();
                    let ring = (disk - inner).max(0.0);
                    inner = disk;
                    ring
                })
                .collect()
        }
    }
}
