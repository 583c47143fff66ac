//! Bevy integration for the impact calculator.
//!
//! Requests arrive as [`SimulationRequest`] messages and are answered in the
//! same frame with [`PredictionReady`] or [`PredictionFailed`]. Every request
//! carries a generation number; results older than the newest generation
//! seen are dropped, so a consumer that re-submits while the user edits
//! inputs only ever sees the latest answer in [`LatestPrediction`].

use std::sync::Arc;

use bevy::prelude::*;

use crate::perturbation::{CorrectionSource, ImpactProbabilitySource, NotModeled, UnitCorrection};
use crate::prediction::{CalculatorConfig, ImpactCalculator, ImpactPrediction};
use crate::types::{ImpactError, ImpactRequest};

/// Plugin providing impact predictions to the ECS.
///
/// A [`CalculatorConfig`] inserted before the plugin is kept; otherwise the
/// default configuration is used.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CalculatorConfig>()
            .init_resource::<Perturbations>()
            .init_resource::<LatestPrediction>()
            .add_message::<SimulationRequest>()
            .add_message::<PredictionReady>()
            .add_message::<PredictionFailed>()
            .add_systems(Update, handle_simulation_requests);
    }
}

/// Ask for a prediction.
#[derive(Message, Clone, Debug)]
pub struct SimulationRequest {
    /// Monotonic request counter chosen by the sender.
    pub generation: u64,
    pub asteroid_id: String,
    pub request: ImpactRequest,
}

/// A prediction for a request that was still current when it finished.
#[derive(Message, Clone, Debug)]
pub struct PredictionReady {
    pub generation: u64,
    pub prediction: Arc<ImpactPrediction>,
}

/// A request rejected by validation.
#[derive(Message, Clone, Debug)]
pub struct PredictionFailed {
    pub generation: u64,
    pub error: ImpactError,
}

/// Result of the newest request.
#[derive(Resource, Default, Debug)]
pub struct LatestPrediction {
    /// Highest generation seen so far, including failed requests.
    pub generation: Option<u64>,
    /// `None` until a request succeeds, and again after the newest one failed.
    pub prediction: Option<Arc<ImpactPrediction>>,
    /// Why the newest request failed, if it did.
    pub last_error: Option<ImpactError>,
}

impl LatestPrediction {
    /// Whether a result for `generation` is out of date.
    pub fn is_stale(&self, generation: u64) -> bool {
        self.generation.is_some_and(|newest| generation < newest)
    }
}

/// Stochastic collaborators used by the plugin.
///
/// Defaults are deterministic: no probability estimate and a unit correction.
#[derive(Resource)]
pub struct Perturbations {
    pub probability: Box<dyn ImpactProbabilitySource + Send + Sync>,
    pub correction: Box<dyn CorrectionSource + Send + Sync>,
}

impl Default for Perturbations {
    fn default() -> Self {
        Self {
            probability: Box::new(NotModeled),
            correction: Box::new(UnitCorrection),
        }
    }
}

fn handle_simulation_requests(
    mut requests: MessageReader<SimulationRequest>,
    config: Res<CalculatorConfig>,
    mut perturbations: ResMut<Perturbations>,
    mut latest: ResMut<LatestPrediction>,
    mut ready: MessageWriter<PredictionReady>,
    mut failed: MessageWriter<PredictionFailed>,
) {
    if requests.is_empty() {
        return;
    }

    let calculator = match ImpactCalculator::new(config.clone()) {
        Ok(calculator) => calculator,
        Err(error) => {
            warn!("Calculator configuration rejected: {error}");
            for msg in requests.read() {
                if latest.is_stale(msg.generation) {
                    continue;
                }
                // A rejected config still supersedes the previous result
                latest.generation = Some(msg.generation);
                latest.prediction = None;
                latest.last_error = Some(error.clone());
                failed.write(PredictionFailed {
                    generation: msg.generation,
                    error: error.clone(),
                });
            }
            return;
        }
    };

    let perturbations = &mut *perturbations;
    for msg in requests.read() {
        // Requests may arrive out of order; only newer generations replace the result
        if latest.is_stale(msg.generation) {
            debug!(
                "Dropping stale request {} for {} (newest is {:?})",
                msg.generation, msg.asteroid_id, latest.generation
            );
            continue;
        }
        latest.generation = Some(msg.generation);

        match calculator.predict(
            &msg.request,
            &msg.asteroid_id,
            perturbations.probability.as_mut(),
            perturbations.correction.as_mut(),
        ) {
            Ok(prediction) => {
                info!(
                    "Prediction {} for {}: {:.1} MT, {} casualties",
                    msg.generation,
                    msg.asteroid_id,
                    prediction.kinetic_energy_mt,
                    prediction.impact_zone.estimated_casualties
                );
                let prediction = Arc::new(prediction);
                latest.prediction = Some(Arc::clone(&prediction));
                latest.last_error = None;
                ready.write(PredictionReady {
                    generation: msg.generation,
                    prediction,
                });
            }
            Err(error) => {
                warn!("Prediction {} for {} failed: {error}", msg.generation, msg.asteroid_id);
                latest.prediction = None;
                latest.last_error = Some(error.clone());
                failed.write(PredictionFailed {
                    generation: msg.generation,
                    error,
                });
            }
        }
    }
}
