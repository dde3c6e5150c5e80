//! Fault injection
//!
//! Turns well-formed events into known categories of bad data. Two mutually
//! exclusive paths: invalid-case injection breaks the record's shape or
//! ranges outright, while anomaly injection keeps every field present and
//! well-typed but writes a jointly implausible depth/magnitude pairing.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::synthesis::format_origin_time;
use crate::types::{Event, FieldValue};

/// The fixed catalog of invalid-case defects, selected uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCase {
    MissingTime,
    MissingLatitude,
    MissingLongitude,
    MissingMagnitude,
    OutOfRangeCoords,
    OutOfRangeMagnitude,
    OutOfRangeDepth,
    InvalidTimestamp,
    InvalidTypes,
    FutureTimestamp,
}

impl InvalidCase {
    pub const ALL: [InvalidCase; 10] = [
        InvalidCase::MissingTime,
        InvalidCase::MissingLatitude,
        InvalidCase::MissingLongitude,
        InvalidCase::MissingMagnitude,
        InvalidCase::OutOfRangeCoords,
        InvalidCase::OutOfRangeMagnitude,
        InvalidCase::OutOfRangeDepth,
        InvalidCase::InvalidTimestamp,
        InvalidCase::InvalidTypes,
        InvalidCase::FutureTimestamp,
    ];

    /// Case name as it appears in `validation_note` tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidCase::MissingTime => "missing_time",
            InvalidCase::MissingLatitude => "missing_latitude",
            InvalidCase::MissingLongitude => "missing_longitude",
            InvalidCase::MissingMagnitude => "missing_magnitude",
            InvalidCase::OutOfRangeCoords => "out_of_range_coords",
            InvalidCase::OutOfRangeMagnitude => "out_of_range_magnitude",
            InvalidCase::OutOfRangeDepth => "out_of_range_depth",
            InvalidCase::InvalidTimestamp => "invalid_timestamp",
            InvalidCase::InvalidTypes => "invalid_types",
            InvalidCase::FutureTimestamp => "future_timestamp",
        }
    }
}

const OUT_OF_RANGE_LATITUDES: [f64; 3] = [95.0, -95.0, 120.0];
const OUT_OF_RANGE_LONGITUDES: [f64; 3] = [190.0, -190.0, 250.0];
const OUT_OF_RANGE_MAGNITUDES: [f64; 3] = [11.5, -4.0, 12.0];
const OUT_OF_RANGE_DEPTHS: [f64; 3] = [-10.0, -50.0, 1500.0];
const MALFORMED_TIMESTAMPS: [&str; 3] = ["not-a-date", "2024-13-40T25:61:00Z", "2024/99/99"];

/// Mutate a well-formed event into one of the invalid-case variants and tag
/// it. The origin datetime feeds the future-timestamp case.
pub fn corrupt(rng: &mut impl Rng, event: &mut Event, origin: NaiveDateTime) {
    let case = InvalidCase::ALL[rng.random_range(0..InvalidCase::ALL.len())];
    apply_case(rng, event, origin, case);
}

/// Apply one specific invalid case; exposed separately so tests can exercise
/// each defect deterministically.
pub fn apply_case(rng: &mut impl Rng, event: &mut Event, origin: NaiveDateTime, case: InvalidCase) {
    match case {
        InvalidCase::MissingTime => event.time = None,
        InvalidCase::MissingLatitude => event.latitude = None,
        InvalidCase::MissingLongitude => event.longitude = None,
        InvalidCase::MissingMagnitude => event.magnitude = None,
        InvalidCase::OutOfRangeCoords => {
            event.latitude = OUT_OF_RANGE_LATITUDES.choose(rng).copied().map(Into::into);
            event.longitude = OUT_OF_RANGE_LONGITUDES.choose(rng).copied().map(Into::into);
        }
        InvalidCase::OutOfRangeMagnitude => {
            event.magnitude = OUT_OF_RANGE_MAGNITUDES.choose(rng).copied().map(Into::into);
        }
        InvalidCase::OutOfRangeDepth => {
            event.depth = OUT_OF_RANGE_DEPTHS.choose(rng).copied().map(Into::into);
        }
        InvalidCase::InvalidTimestamp => {
            event.time = MALFORMED_TIMESTAMPS.choose(rng).copied().map(Into::into);
        }
        InvalidCase::InvalidTypes => {
            let value = wrong_typed_placeholder(rng);
            match rng.random_range(0..5) {
                0 => event.latitude = Some(value),
                1 => event.longitude = Some(value),
                2 => event.magnitude = Some(value),
                3 => event.depth = Some(value),
                _ => event.time = Some(value),
            }
        }
        InvalidCase::FutureTimestamp => {
            let future = origin + Duration::days(rng.random_range(365..=3650));
            event.time = Some(format_origin_time(future).into());
        }
    }
    event.validation_note = Some(format!("invalid:{}", case.as_str()));
}

fn wrong_typed_placeholder(rng: &mut impl Rng) -> FieldValue {
    match rng.random_range(0..3) {
        0 => "invalid".into(),
        1 => "NaN".into(),
        _ => FieldValue::Nested(serde_json::json!({"bad": true})),
    }
}

/// Overwrite depth and magnitude with a shallow-but-giant pairing.
///
/// Every field stays present and well-typed; only the cross-field
/// plausibility is broken, which exercises QA logic that single-field range
/// checks cannot catch.
pub fn inject_anomaly(rng: &mut impl Rng, event: &mut Event) {
    event.depth = Some(crate::samplers::round1(rng.random_range(0.1..4.9)).into());
    event.magnitude = Some(crate::samplers::round1(rng.random_range(8.1..9.6)).into());
    event.validation_note = Some("anomaly:shallow_large_magnitude".to_string());
}
