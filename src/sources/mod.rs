//! Boundary to the external data sources that feed the calculator.
//!
//! Near-Earth-object records and site geology come from collaborators that
//! may be unreachable. Every lookup here recovers locally: on an upstream
//! error the fixed fallback data is substituted and the result is tagged
//! [`DataOrigin::Fallback`], so callers never have to guess from the shape
//! of the output.

pub mod fallback;
pub mod geology;
pub mod neo;

use serde::Serialize;

pub use fallback::fallback_catalog;
pub use geology::{
    EstimatedGeology, GeoJsonQuakeSource, GeologySource, geology_or_estimate,
};
pub use neo::{JsonNeoSource, NeoCatalog, NeoPage, NeoRecord, NeoSource};

/// Failure talking to an external data source.
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

/// Where a piece of data came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DataOrigin {
    /// Served by the upstream source.
    #[default]
    Live,
    /// Substituted locally after an upstream failure.
    Fallback,
}

/// Data tagged with its origin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Live,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DataOrigin::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            origin: self.origin,
        }
    }
}
