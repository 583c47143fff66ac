//! Injectable sources for the non-deterministic parts of a prediction.
//!
//! The impact probability and the correction factor applied to heuristic
//! consequence estimates are not physically modelled. They are supplied by
//! strategy objects so that everything else in the pipeline stays a pure
//! function of its inputs. The deterministic strategies are the defaults;
//! the random ones draw from a seedable ChaCha stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::features::FeatureVector;
use crate::types::ImpactRequest;

/// Lower bound of the placeholder probability range.
pub const PROBABILITY_FLOOR: f64 = 0.001;

/// Width of the placeholder probability range (0.1% to 1.1%).
pub const PROBABILITY_SPAN: f64 = 0.01;

/// Probability that the object actually strikes the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum ImpactProbability {
    /// No orbital model backs this number.
    #[default]
    NotModeled,
    /// Probability in [0, 1].
    Estimated(f64),
}

impl ImpactProbability {
    pub fn value(&self) -> Option<f64> {
        match self {
            ImpactProbability::NotModeled => None,
            ImpactProbability::Estimated(p) => Some(*p),
        }
    }
}

/// Supplies the impact probability for a request.
pub trait ImpactProbabilitySource {
    fn impact_probability(&mut self, request: &ImpactRequest) -> ImpactProbability;
}

/// Always reports [`ImpactProbability::NotModeled`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NotModeled;

impl ImpactProbabilitySource for NotModeled {
    fn impact_probability(&mut self, _request: &ImpactRequest) -> ImpactProbability {
        ImpactProbability::NotModeled
    }
}

/// Reports the same probability for every request.
#[derive(Clone, Copy, Debug)]
pub struct FixedProbability(f64);

impl FixedProbability {
    /// Clamped into [0, 1]; NaN becomes 0.
    pub fn new(p: f64) -> Self {
        Self(if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) })
    }
}

impl ImpactProbabilitySource for FixedProbability {
    fn impact_probability(&mut self, _request: &ImpactRequest) -> ImpactProbability {
        ImpactProbability::Estimated(self.0)
    }
}

/// Placeholder probability drawn uniformly from [0.001, 0.011).
#[derive(Clone, Debug)]
pub struct UniformProbability {
    rng: ChaCha8Rng,
}

impl UniformProbability {
    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl ImpactProbabilitySource for UniformProbability {
    fn impact_probability(&mut self, _request: &ImpactRequest) -> ImpactProbability {
        let p = PROBABILITY_FLOOR + self.rng.gen_range(0.0..PROBABILITY_SPAN);
        ImpactProbability::Estimated(p)
    }
}

/// Multiplicative corrections applied to heuristic estimates.
///
/// Each factor is in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Correction {
    pub casualties: f64,
    pub economic: f64,
    pub displacement: f64,
}

impl Correction {
    pub const UNIT: Correction = Correction {
        casualties: 1.0,
        economic: 1.0,
        displacement: 1.0,
    };

    /// Build from signed raw factors: takes the absolute value and caps at 1.
    pub fn new(casualties: f64, economic: f64, displacement: f64) -> Self {
        Self {
            casualties: bound_factor(casualties),
            economic: bound_factor(economic),
            displacement: bound_factor(displacement),
        }
    }
}

fn bound_factor(raw: f64) -> f64 {
    if raw.is_nan() { 0.0 } else { raw.abs().min(1.0) }
}

/// Supplies the correction applied to heuristic estimates.
pub trait CorrectionSource {
    fn correction(&mut self, features: &FeatureVector) -> Correction;
}

/// No correction: every factor is 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitCorrection;

impl CorrectionSource for UnitCorrection {
    fn correction(&mut self, _features: &FeatureVector) -> Correction {
        Correction::UNIT
    }
}

/// Independent uniform factors in [-1, 1], folded to [0, 1].
#[derive(Clone, Debug)]
pub struct RandomCorrection {
    rng: ChaCha8Rng,
}

impl RandomCorrection {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl CorrectionSource for RandomCorrection {
    fn correction(&mut self, _features: &FeatureVector) -> Correction {
        Correction::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        )
    }
}
