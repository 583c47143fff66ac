//! Neo-impact - Asteroid Impact Consequence Calculator
//!
//! A library crate estimating what happens when a near-Earth object hits
//! the ground: impact energy, crater size, nested damage zones, casualties,
//! economic loss, secondary effects and a mitigation catalog.

pub mod consequences;
pub mod features;
pub mod mitigation;
pub mod perturbation;
pub mod physics;
pub mod prediction;
pub mod scenarios;
pub mod simulation;
pub mod sources;
pub mod types;

#[cfg(test)]
pub mod test_utils;
