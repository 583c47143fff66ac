//! Core value types and constants for impact consequence modelling.

use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

/// Physical constants (SI units unless noted)

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Typical target rock density used for crater scaling (kg/m³).
pub const DEFAULT_TARGET_DENSITY: f64 = 2600.0;

/// Rough global GDP density (billion USD per km²).
pub const DEFAULT_GDP_PER_KM2_BILLION: f64 = 1.5;

/// Population density assumed when no geology is known (people per km², suburban).
pub const DEFAULT_POPULATION_DENSITY: f64 = 500.0;

/// USD per billion USD.
pub const USD_PER_BILLION: f64 = 1e9;

/// Errors raised for inputs the calculator refuses to coerce.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("invalid {field}: {value} (expected {expected})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("record {id} has no usable {field}")]
    MissingField { id: String, field: &'static str },
}

impl ImpactError {
    pub(crate) fn invalid(field: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidInput {
            field,
            value,
            expected,
        }
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::invalid(field, value, "a finite value > 0"))
    }
}

/// Reject negative or non-finite values; zero is allowed.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::invalid(field, value, "a finite value >= 0"))
    }
}

/// Bulk composition of an impactor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    #[default]
    Rocky,
    Metallic,
    Icy,
}

impl Composition {
    /// Typical bulk density (kg/m³).
    pub fn typical_density(&self) -> f64 {
        match self {
            Composition::Rocky => 2600.0,
            Composition::Metallic => 7800.0,
            Composition::Icy => 1000.0,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Composition::Rocky => "rocky",
            Composition::Metallic => "metallic",
            Composition::Icy => "icy",
        }
    }
}

/// Physical description of an impactor.
///
/// Diameter is stored in meters; the energy model works in kilometers,
/// see [`Projectile::diameter_km`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projectile {
    diameter_m: f64,
    velocity_km_s: f64,
    density_kg_m3: f64,
    composition: Composition,
}

impl Projectile {
    /// Create a projectile, rejecting non-positive diameter, velocity or density.
    pub fn new(
        diameter_m: f64,
        velocity_km_s: f64,
        density_kg_m3: f64,
        composition: Composition,
    ) -> Result<Self, ImpactError> {
        Ok(Self {
            diameter_m: require_positive("diameter", diameter_m)?,
            velocity_km_s: require_positive("velocity", velocity_km_s)?,
            density_kg_m3: require_positive("density", density_kg_m3)?,
            composition,
        })
    }

    /// Create a projectile using the composition's typical density.
    pub fn from_composition(
        diameter_m: f64,
        velocity_km_s: f64,
        composition: Composition,
    ) -> Result<Self, ImpactError> {
        Self::new(
            diameter_m,
            velocity_km_s,
            composition.typical_density(),
            composition,
        )
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    pub fn diameter_km(&self) -> f64 {
        self.diameter_m / 1000.0
    }

    pub fn velocity_km_s(&self) -> f64 {
        self.velocity_km_s
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density_kg_m3
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    /// Mass in kg, assuming a sphere.
    pub fn mass_kg(&self) -> f64 {
        let radius_m = self.diameter_m / 2.0;
        4.0 / 3.0 * std::f64::consts::PI * radius_m.powi(3) * self.density_kg_m3
    }
}

/// Dominant bedrock at the impact site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockType {
    Granite,
    Basalt,
    Limestone,
    Sandstone,
    Shale,
    #[default]
    Unknown,
}

impl RockType {
    /// Rock types with a known index, in feature order.
    pub const INDEXED: [RockType; 5] = [
        RockType::Granite,
        RockType::Basalt,
        RockType::Limestone,
        RockType::Sandstone,
        RockType::Shale,
    ];

    /// Position in [`RockType::INDEXED`], if any.
    pub fn index(&self) -> Option<usize> {
        Self::INDEXED.iter().position(|r| r == self)
    }
}

/// Dominant surface soil at the impact site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    Sand,
    Loam,
    Silt,
    Rocky,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Clay,
        SoilType::Sand,
        SoilType::Loam,
        SoilType::Silt,
        SoilType::Rocky,
    ];
}

/// Geology and population around a target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geology {
    pub rock_type: RockType,
    pub soil: SoilType,
    /// People per km².
    pub population_density: f64,
    /// Earthquakes recorded near the site in the last decade.
    pub recent_earthquakes: u32,
}

/// Impact point on Earth's surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TargetLocation {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
    geology: Option<Geology>,
}

impl TargetLocation {
    /// Create a location, rejecting coordinates outside [-90, 90] / [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ImpactError> {
        if !(latitude.is_finite() && (-90.0..=90.0).contains(&latitude)) {
            return Err(ImpactError::invalid("latitude", latitude, "a value in [-90, 90]"));
        }
        if !(longitude.is_finite() && (-180.0..=180.0).contains(&longitude)) {
            return Err(ImpactError::invalid(
                "longitude",
                longitude,
                "a value in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
            name: None,
            geology: None,
        })
    }

    /// Location from coordinates known to be in range, for built-in presets.
    pub(crate) const fn preset(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
            geology: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach geology, rejecting a negative population density.
    pub fn with_geology(mut self, geology: Geology) -> Result<Self, ImpactError> {
        require_non_negative("population density", geology.population_density)?;
        self.geology = Some(geology);
        Ok(self)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn geology(&self) -> Option<&Geology> {
        self.geology.as_ref()
    }

    /// Coordinates as (latitude, longitude) in degrees.
    pub fn lat_lon(&self) -> DVec2 {
        DVec2::new(self.latitude, self.longitude)
    }
}

/// One simulation request: what hits, where, and at what entry angle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactRequest {
    pub projectile: Projectile,
    pub target: TargetLocation,
    /// Entry angle above the horizon (degrees, 0-90).
    pub angle_deg: f64,
}

impl ImpactRequest {
    pub fn new(
        projectile: Projectile,
        target: TargetLocation,
        angle_deg: f64,
    ) -> Result<Self, ImpactError> {
        let request = Self {
            projectile,
            target,
            angle_deg,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the entry angle; projectile and target are validated on construction.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !(self.angle_deg.is_finite() && (0.0..=90.0).contains(&self.angle_deg)) {
            return Err(ImpactError::invalid(
                "angle",
                self.angle_deg,
                "a value in [0, 90]",
            ));
        }
        Ok(())
    }
}
