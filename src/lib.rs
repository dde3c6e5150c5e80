//! # quakegen
//!
//! A synthetic earthquake-catalogue generator for exercising downstream
//! ingestion, validation, and quality-assessment logic.
//!
//! ## Overview
//!
//! The engine synthesizes structured seismic event records with physically
//! plausible magnitude, depth, location, timing, and focal-mechanism
//! attributes, then deliberately corrupts a configurable fraction of them
//! into known categories of bad data:
//!
//! - **Invalid cases**: missing fields, out-of-range values, malformed or
//!   future timestamps, wrong-typed placeholders
//! - **Cross-field anomalies**: well-typed records whose values are jointly
//!   implausible (very shallow, very large magnitude)
//!
//! ## Architecture
//!
//! - **Types** (`types.rs`): Event, FieldValue, Catalogue, Statistics
//! - **Samplers** (`samplers.rs`): Gutenberg-Richter magnitudes, regime-based
//!   depths, conjugate nodal-plane pairs
//! - **Synthesis** (`synthesis.rs`): one well-formed event per call
//! - **Inject** (`inject.rs`): invalid-case and anomaly mutation
//! - **Catalogue** (`catalogue.rs`): assembly, sorting, statistics
//! - **Scenarios** (`scenarios.rs`): the canonical New Zealand presets
//!
//! ## Example
//!
//! ```rust
//! use quakegen::{CatalogueConfig, generate_catalogue};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = CatalogueConfig {
//!     num_events: 100,
//!     invalid_ratio: Some(0.25),
//!     ..Default::default()
//! };
//!
//! // One seeded stream makes the run fully reproducible.
//! let mut rng = StdRng::seed_from_u64(42);
//! let catalogue = generate_catalogue(&config, &mut rng);
//!
//! assert_eq!(catalogue.statistics.total_events, 100);
//! assert_eq!(catalogue.statistics.invalid_events, 25);
//! ```

pub mod catalogue;
pub mod error;
pub mod inject;
pub mod samplers;
pub mod scenarios;
pub mod synthesis;
pub mod types;

#[cfg(test)]
mod integration_scenarios;

// Re-export main types
pub use types::{
    Catalogue, DepthRegime, Event, FieldValue, FocalMechanism, GeographicBounds, MagnitudeRange,
    NodalPlane, Statistics, TectonicRegime, TimeRange,
};

pub use catalogue::{
    CatalogueConfig, DEFAULT_ANOMALY_RATIO, DEFAULT_INVALID_RATIO_RANGE, generate_catalogue,
};

pub use error::QuakegenError;
pub use inject::InvalidCase;
pub use synthesis::{SynthesisContext, synthesize_event};
