//! Mitigation scenario catalog.
//!
//! Four fixed strategies: three deflection missions and an evacuation.
//! Only the evacuation cost depends on the request: it doubles when a target
//! location is known.

use serde::Serialize;

use crate::types::TargetLocation;

/// Evacuation cost without a known target (USD).
pub const EVACUATION_COST_UNTARGETED: f64 = 1_000_000_000.0;

/// Evacuation cost with a known target (USD).
pub const EVACUATION_COST_TARGETED: f64 = 2_000_000_000.0;

/// How a scenario averts or reduces the impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MitigationMethod {
    /// Spacecraft collision transfers momentum (DART-style).
    KineticImpactor,
    /// Hovering spacecraft pulls the object off course over years.
    GravityTractor,
    /// Standoff detonation ablates surface material.
    NuclearDeflection,
    /// Clear the predicted impact zone.
    Evacuation,
}

impl MitigationMethod {
    /// Whether the method changes the trajectory rather than the consequences.
    pub fn is_deflection(&self) -> bool {
        !matches!(self, MitigationMethod::Evacuation)
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MitigationScenario {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub method: MitigationMethod,
    /// Probability the method succeeds, in (0, 1].
    pub success_probability: f64,
    pub cost_usd: f64,
    /// Lead time required (years).
    pub time_required_years: f64,
    /// Relative effectiveness, 0-100.
    pub effectiveness_score: f64,
}

const KINETIC_IMPACTOR: MitigationScenario = MitigationScenario {
    id: "kinetic-impactor",
    name: "Kinetic Impactor",
    description: "Use a spacecraft to collide with the asteroid and alter its trajectory",
    method: MitigationMethod::KineticImpactor,
    success_probability: 0.75,
    cost_usd: 500_000_000.0,
    time_required_years: 5.0,
    effectiveness_score: 85.0,
};

const GRAVITY_TRACTOR: MitigationScenario = MitigationScenario {
    id: "gravity-tractor",
    name: "Gravity Tractor",
    description: "Use spacecraft gravity to slowly pull the asteroid off course",
    method: MitigationMethod::GravityTractor,
    success_probability: 0.65,
    cost_usd: 800_000_000.0,
    time_required_years: 10.0,
    effectiveness_score: 70.0,
};

const NUCLEAR_DEFLECTION: MitigationScenario = MitigationScenario {
    id: "nuclear-deflection",
    name: "Nuclear Deflection",
    description: "Detonate nuclear device near asteroid to vaporize surface material and change trajectory",
    method: MitigationMethod::NuclearDeflection,
    success_probability: 0.85,
    cost_usd: 1_200_000_000.0,
    time_required_years: 3.0,
    effectiveness_score: 90.0,
};

const EVACUATION: MitigationScenario = MitigationScenario {
    id: "evacuation",
    name: "Mass Evacuation",
    description: "Evacuate population from predicted impact zone",
    method: MitigationMethod::Evacuation,
    success_probability: 0.95,
    cost_usd: EVACUATION_COST_UNTARGETED,
    time_required_years: 1.0,
    effectiveness_score: 60.0,
};

/// The mitigation catalog for a prediction.
///
/// Always four scenarios in the same order; only the evacuation cost varies.
pub fn mitigation_scenarios(target: Option<&TargetLocation>) -> Vec<MitigationScenario> {
    let evacuation_cost = if target.is_some() {
        EVACUATION_COST_TARGETED
    } else {
        EVACUATION_COST_UNTARGETED
    };

    vec![
        KINETIC_IMPACTOR,
        GRAVITY_TRACTOR,
        NUCLEAR_DEFLECTION,
        MitigationScenario {
            cost_usd: evacuation_cost,
            ..EVACUATION
        },
    ]
}

/// Scenario with the highest effectiveness score.
pub fn most_effective(scenarios: &[MitigationScenario]) -> Option<&MitigationScenario> {
    scenarios
        .iter()
        .max_by(|a, b| a.effectiveness_score.total_cmp(&b.effectiveness_score))
}
