//! Event synthesizer
//!
//! Composes the attribute samplers with temporal and spatial sampling to
//! produce one well-formed event per call. Fault injection happens later and
//! never here: synthesis output always carries every required field.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::samplers;
use crate::types::{DepthRegime, Event, GeographicBounds, TectonicRegime};

/// Magnitude model parameters, chosen empirically to yield a realistic mix
/// including occasional large events.
const MIN_MAGNITUDE: f64 = 1.0;
const MAX_MAGNITUDE: f64 = 7.5;
const B_VALUE: f64 = 2.5;

/// Fraction of events treated as belonging to a temporal cluster.
const CLUSTER_PROBABILITY: f64 = 0.3;
/// Cluster member perturbation around the anchor, in seconds (one day).
const CLUSTER_SPREAD_SECS: f64 = 86_400.0;

/// Magnitude threshold above which a resolved focal mechanism is attached.
pub const FOCAL_MECHANISM_THRESHOLD: f64 = 5.0;

/// Inputs shared by every event of one catalogue run.
#[derive(Debug, Clone)]
pub struct SynthesisContext {
    pub region: String,
    pub bounds: GeographicBounds,
    pub window_start: NaiveDateTime,
    pub window_secs: f64,
    pub tectonic: TectonicRegime,
    pub depth_regime: DepthRegime,
}

impl SynthesisContext {
    /// Derive the publicID prefix slug: lowercased region, spaces replaced
    /// with underscores.
    pub fn region_slug(&self) -> String {
        self.region.to_lowercase().replace(' ', "_")
    }
}

/// Format an origin time with millisecond precision and a UTC suffix.
pub fn format_origin_time(dt: NaiveDateTime) -> String {
    format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S%.3f"))
}

/// Uniform draw over one bounding-box axis.
///
/// Bounds may arrive inverted or collapsed from free-form configuration;
/// the axis is reordered and a collapsed axis yields its single value
/// instead of panicking on an empty sampling range.
fn sample_axis(rng: &mut impl Rng, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi { lo } else { rng.random_range(lo..hi) }
}

/// Synthesize one well-formed event for the given 0-based sequence index.
///
/// Returns the event together with its origin datetime; the injector needs
/// the parsed datetime to build future timestamps.
pub fn synthesize_event(
    rng: &mut impl Rng,
    ctx: &SynthesisContext,
    index: usize,
) -> (Event, NaiveDateTime) {
    let magnitude = samplers::magnitude(rng, MIN_MAGNITUDE, MAX_MAGNITUDE, B_VALUE);

    // Aftershock-like bunching: some events scatter around a shared anchor
    // instead of landing uniformly in the window.
    let offset_secs = if rng.random::<f64>() < CLUSTER_PROBABILITY {
        let anchor = rng.random_range(0.0..ctx.window_secs);
        anchor + rng.random_range(-CLUSTER_SPREAD_SECS..CLUSTER_SPREAD_SECS)
    } else {
        rng.random_range(0.0..ctx.window_secs)
    };
    let origin = ctx.window_start + Duration::microseconds((offset_secs * 1e6) as i64);

    let latitude = sample_axis(rng, ctx.bounds.min_latitude, ctx.bounds.max_latitude);
    let longitude = sample_axis(rng, ctx.bounds.min_longitude, ctx.bounds.max_longitude);

    let depth = samplers::depth(rng, ctx.depth_regime, magnitude);

    let focal_mechanisms = if magnitude >= FOCAL_MECHANISM_THRESHOLD {
        Some(vec![samplers::focal_mechanism(rng, ctx.tectonic)])
    } else {
        None
    };

    let event = Event {
        public_id: format!(
            "{}_{}p{:06}",
            ctx.region_slug(),
            ctx.window_start.date().format("%Y"),
            index + 1
        ),
        time: Some(format_origin_time(origin).into()),
        latitude: Some(samplers::round4(latitude).into()),
        longitude: Some(samplers::round4(longitude).into()),
        depth: Some(depth.into()),
        magnitude: Some(magnitude.into()),
        focal_mechanisms,
        validation_note: None,
    };

    (event, origin)
}
