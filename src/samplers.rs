//! Statistical samplers for event attributes
//!
//! Every sampler takes the random generator explicitly so a catalogue run is
//! fully determined by one seed and the per-event call order.

use rand::Rng;

use crate::types::{DepthRegime, FocalMechanism, TectonicRegime};

/// Round to one decimal place, matching the precision of emitted records.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to four decimal places (coordinates).
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Draw a magnitude from a Gutenberg-Richter-like power law.
///
/// A uniform draw `u` is transformed via
/// `min + (max - min) * (1 - u^(1/b))`, which concentrates mass near
/// `min_mag` and thins toward `max_mag` without unbounded-tail sampling.
/// Higher `b_value` steepens the falloff.
pub fn magnitude(rng: &mut impl Rng, min_mag: f64, max_mag: f64, b_value: f64) -> f64 {
    let u: f64 = rng.random();
    let mag = min_mag + (max_mag - min_mag) * (1.0 - u.powf(1.0 / b_value));
    round1(mag)
}

/// Draw a depth in kilometers for the given regime.
///
/// Shallow events nucleate slightly deeper on average once magnitude reaches
/// 4.0; intermediate and deep bands are magnitude-independent.
pub fn depth(rng: &mut impl Rng, regime: DepthRegime, magnitude: f64) -> f64 {
    let km = match regime {
        DepthRegime::Shallow if magnitude < 4.0 => rng.random_range(5.0..25.0),
        DepthRegime::Shallow => rng.random_range(10.0..40.0),
        DepthRegime::Intermediate => rng.random_range(20.0..150.0),
        DepthRegime::Deep => rng.random_range(100.0..600.0),
    };
    round1(km)
}

/// Draw a conjugate nodal-plane pair biased by tectonic regime.
pub fn focal_mechanism(rng: &mut impl Rng, regime: TectonicRegime) -> FocalMechanism {
    let strike = rng.random_range(0..360);
    let (dip, rake) = match regime {
        TectonicRegime::Subduction => {
            // Reverse/thrust sense
            (rng.random_range(20..=50), rng.random_range(70..=110))
        }
        TectonicRegime::StrikeSlip => {
            // Two senses of lateral motion, equally likely
            let rake = if rng.random_bool(0.5) {
                rng.random_range(-20..=20)
            } else {
                rng.random_range(160..=200)
            };
            (rng.random_range(70..=90), rake)
        }
        TectonicRegime::Normal => (rng.random_range(40..=70), rng.random_range(-110..=-70)),
    };
    FocalMechanism::from_plane1(strike, dip, rake)
}
