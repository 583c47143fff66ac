//! Neo-impact - headless demo
//!
//! Runs the preset impactors and the most hazardous catalogued objects
//! against the default target through the Bevy plugin and logs the results.
//!
//! Usage: `neo-impact [NEO_JSON] [QUAKES_GEOJSON]`

use bevy::log::LogPlugin;
use bevy::prelude::*;

use neo_impact::scenarios::{self, SCENARIOS};
use neo_impact::simulation::{ImpactPlugin, LatestPrediction, SimulationRequest};
use neo_impact::sources::{
    EstimatedGeology, GeoJsonQuakeSource, GeologySource, JsonNeoSource, NeoCatalog,
    geology_or_estimate,
};
use neo_impact::types::{Composition, ImpactRequest, TargetLocation};

const DEFAULT_NEO_PATH: &str = "neo_browse.json";

/// Number of hazardous catalogue objects to run after the presets.
const HAZARDOUS_LIMIT: usize = 3;

fn main() {
    let mut args = std::env::args().skip(1);
    let neo_path = args.next().unwrap_or_else(|| DEFAULT_NEO_PATH.to_string());
    let geology_source: Box<dyn GeologySource> = match args.next() {
        Some(path) => Box::new(GeoJsonQuakeSource::new(path)),
        None => Box::new(EstimatedGeology::default()),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(ImpactPlugin);

    let geology = geology_or_estimate(geology_source.as_ref(), &scenarios::default_location());
    let target = match scenarios::default_location().with_geology(geology.value) {
        Ok(target) => target,
        Err(err) => {
            error!("Default target rejected: {err}");
            return;
        }
    };
    info!(
        "Target {} ({:?} geology)",
        target.name().unwrap_or("unnamed"),
        geology.origin
    );

    let mut requests: Vec<(String, ImpactRequest)> = Vec::new();
    for scenario in SCENARIOS {
        match scenario.request(target.clone()) {
            Ok(request) => {
                debug!(
                    "Queued {} ({}, {:.0} m)",
                    scenario.name,
                    scenario.composition.label(),
                    scenario.diameter_m
                );
                requests.push((scenario.id.to_string(), request));
            }
            Err(err) => warn!("Skipping scenario {}: {err}", scenario.id),
        }
    }

    let catalog = NeoCatalog::new(JsonNeoSource::new(&neo_path));
    let hazardous = catalog.hazardous(HAZARDOUS_LIMIT);
    info!(
        "{} hazardous objects from {} ({:?})",
        hazardous.value.len(),
        neo_path,
        hazardous.origin
    );
    for record in &hazardous.value {
        match catalog_request(record, &target) {
            Ok(request) => requests.push((record.name.clone(), request)),
            Err(err) => warn!("Skipping {}: {err}", record.name),
        }
    }

    for (generation, (asteroid_id, request)) in (1u64..).zip(requests) {
        app.world_mut().write_message(SimulationRequest {
            generation,
            asteroid_id,
            request,
        });
        app.update();

        let latest = app.world().resource::<LatestPrediction>();
        if let Some(prediction) = &latest.prediction {
            let zone = &prediction.impact_zone;
            info!(
                "{}: {:.3e} MT, radius {:.1} km, {} casualties, ${:.2}B damage, magnitude {:.1}",
                prediction.asteroid_id,
                prediction.kinetic_energy_mt,
                zone.radius_km,
                zone.estimated_casualties,
                zone.economic_damage_usd / 1e9,
                prediction.secondary_effects.environmental.seismic_magnitude
            );
        }
    }
}

fn catalog_request(
    record: &neo_impact::sources::NeoRecord,
    target: &TargetLocation,
) -> Result<ImpactRequest, neo_impact::types::ImpactError> {
    let projectile = record.to_projectile(Composition::Rocky)?;
    ImpactRequest::new(
        projectile,
        target.clone(),
        scenarios::DEFAULT_ENTRY_ANGLE_DEG,
    )
}
