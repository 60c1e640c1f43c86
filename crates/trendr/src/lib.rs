#![forbid(unsafe_code)]

//! Headless `react-trend` sparkline path helpers.
//!
//! Design goals:
//! - 1:1 parity with the upstream helper module (`react-trend@1.2.5`)
//! - deterministic, testable outputs (exact path-data strings)
//! - runtime-agnostic: no DOM required; host capabilities sit behind seams

use serde::{Deserialize, Serialize};

pub mod geom;
pub mod host;
pub mod svg;

pub use host::{HostStyleProbe, NoDocument, supported_animation_end_name};
pub use svg::css::{StyleElement, StyleRegistry, shared_style_registry};
pub use svg::path::{build_linear_path, build_smooth_path};

/// Upstream release the emitted path data is pinned against.
pub const UPSTREAM_REACT_TREND_VERSION: &str = "1.2.5";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("point sequence is empty")]
    EmptySequence,
    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    InvalidCoordinate { index: usize, x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Options for [`build_smooth_path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothPathOptions {
    /// Requested corner radius. A ceiling, not a guarantee: each vertex
    /// clamps it against half the smaller neighbor distance.
    pub radius: f64,
}

impl Default for SmoothPathOptions {
    fn default() -> Self {
        // Upstream component default.
        Self { radius: 10.0 }
    }
}
