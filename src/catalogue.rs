//! Catalogue assembly
//!
//! Drives event synthesis, selects and applies fault injection, sorts the
//! result, and computes the summary statistics block. The whole run is one
//! non-interruptible batch computation determined by the configuration and
//! the seeded random stream.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use tracing::{debug, info};

use crate::inject;
use crate::synthesis::{self, SynthesisContext};
use crate::types::{
    Catalogue, DepthRegime, Event, GeographicBounds, MagnitudeRange, Statistics, TectonicRegime,
    TimeRange,
};

/// Default range the invalid ratio is drawn from when not given explicitly.
pub const DEFAULT_INVALID_RATIO_RANGE: (f64, f64) = (0.6, 0.8);
/// Default probability of anomaly injection for non-invalid events.
pub const DEFAULT_ANOMALY_RATIO: f64 = 0.15;

/// Configuration for one catalogue generation run.
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    pub name: String,
    pub region: String,
    pub bounds: GeographicBounds,
    pub num_events: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tectonic: TectonicRegime,
    pub depth_regime: DepthRegime,
    /// Explicit invalid fraction; when `None`, drawn from `invalid_ratio_range`.
    pub invalid_ratio: Option<f64>,
    pub invalid_ratio_range: (f64, f64),
    pub anomaly_ratio: f64,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            name: "Synthetic Seismic Events".to_string(),
            region: "Synthetic Region".to_string(),
            bounds: GeographicBounds {
                min_latitude: -47.0,
                max_latitude: -34.0,
                min_longitude: 166.0,
                max_longitude: 179.0,
            },
            num_events: 1000,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 10, 29).unwrap(),
            tectonic: TectonicRegime::Subduction,
            depth_regime: DepthRegime::Shallow,
            invalid_ratio: None,
            invalid_ratio_range: DEFAULT_INVALID_RATIO_RANGE,
            anomaly_ratio: DEFAULT_ANOMALY_RATIO,
        }
    }
}

impl CatalogueConfig {
    fn window_start(&self) -> NaiveDateTime {
        self.start_date.and_time(NaiveTime::MIN)
    }

    /// Window span in seconds, clamped to a minimum of one second so an
    /// inverted date range cannot produce an empty sampling interval.
    fn window_secs(&self) -> f64 {
        let end = self.end_date.and_time(NaiveTime::MIN);
        ((end - self.window_start()).num_seconds().max(1)) as f64
    }
}

/// Choose `count` distinct indices from `0..n` via a partial Fisher-Yates
/// shuffle: after `count` swap steps the prefix holds a uniform sample
/// without replacement.
fn sample_indices(rng: &mut impl Rng, n: usize, count: usize) -> Vec<usize> {
    let count = count.min(n);
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..count {
        let j = rng.random_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

/// Resolve the effective invalid ratio for one run, clamped to [0, 1].
fn resolve_invalid_ratio(rng: &mut impl Rng, config: &CatalogueConfig) -> f64 {
    let ratio = match config.invalid_ratio {
        Some(r) => r,
        None => {
            let (lo, hi) = config.invalid_ratio_range;
            if lo < hi { rng.random_range(lo..hi) } else { lo }
        }
    };
    ratio.clamp(0.0, 1.0)
}

/// Compute the statistics block over the assembled event list.
///
/// Non-numeric magnitudes (removed or retyped by injection) are excluded
/// from the min/max aggregate rather than defaulted.
fn compute_statistics(events: &[Event], invalid_ratio: f64) -> Statistics {
    let magnitudes: Vec<f64> = events.iter().filter_map(Event::numeric_magnitude).collect();
    Statistics {
        total_events: events.len(),
        invalid_events: events.iter().filter(|e| e.is_invalid()).count(),
        invalid_ratio: (invalid_ratio * 100.0).round() / 100.0,
        events_with_focal_mechanisms: events
            .iter()
            .filter(|e| e.focal_mechanisms.is_some())
            .count(),
        magnitude_range: MagnitudeRange {
            min: magnitudes.iter().copied().reduce(f64::min),
            max: magnitudes.iter().copied().reduce(f64::max),
        },
    }
}

/// Generate a complete catalogue from the configuration.
///
/// Always returns a structurally valid catalogue; the contained events may
/// individually be invalid by design.
pub fn generate_catalogue(config: &CatalogueConfig, rng: &mut impl Rng) -> Catalogue {
    let invalid_ratio = resolve_invalid_ratio(rng, config);
    let invalid_count = (config.num_events as f64 * invalid_ratio).floor() as usize;
    let invalid_indices = sample_indices(rng, config.num_events, invalid_count);
    let invalid_set: std::collections::HashSet<usize> = invalid_indices.into_iter().collect();

    info!(
        name = %config.name,
        events = config.num_events,
        invalid = invalid_count,
        anomaly_ratio = config.anomaly_ratio,
        "generating catalogue"
    );

    let ctx = SynthesisContext {
        region: config.region.clone(),
        bounds: config.bounds,
        window_start: config.window_start(),
        window_secs: config.window_secs(),
        tectonic: config.tectonic,
        depth_regime: config.depth_regime,
    };

    let mut events = Vec::with_capacity(config.num_events);
    for i in 0..config.num_events {
        let (mut event, origin) = synthesis::synthesize_event(rng, &ctx, i);
        if invalid_set.contains(&i) {
            inject::corrupt(rng, &mut event, origin);
            debug!(id = %event.public_id, note = ?event.validation_note, "corrupted event");
        } else if rng.random::<f64>() < config.anomaly_ratio {
            inject::inject_anomaly(rng, &mut event);
            debug!(id = %event.public_id, "anomaly injected");
        }
        events.push(event);
    }

    // Stable sort on the fallback key: events with missing or non-string
    // time land first, in synthesis order.
    events.sort_by(|a, b| a.time_sort_key().cmp(b.time_sort_key()));

    let statistics = compute_statistics(&events, invalid_ratio);

    Catalogue {
        catalogue_name: config.name.clone(),
        region: config.region.clone(),
        description: format!(
            "Realistic earthquake catalogue for {} with {} events",
            config.region, config.num_events
        ),
        geographic_bounds: config.bounds,
        time_range: TimeRange {
            start: config.window_start().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            end: config
                .end_date
                .and_time(NaiveTime::MIN)
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
        },
        statistics,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(num_events: usize, invalid: Option<f64>, anomaly: f64) -> CatalogueConfig {
        CatalogueConfig {
            num_events,
            invalid_ratio: invalid,
            anomaly_ratio: anomaly,
            ..Default::default()
        }
    }

    #[test]
    fn test_sample_indices_distinct_and_sized() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let picked = sample_indices(&mut rng, 50, 20);
            assert_eq!(picked.len(), 20);
            let set: std::collections::HashSet<usize> = picked.iter().copied().collect();
            assert_eq!(set.len(), 20);
            assert!(picked.iter().all(|&i| i < 50));
        }
        // Degenerate bounds
        assert_eq!(sample_indices(&mut rng, 10, 10).len(), 10);
        assert_eq!(sample_indices(&mut rng, 10, 0).len(), 0);
        assert_eq!(sample_indices(&mut rng, 5, 99).len(), 5);
    }

    #[test]
    fn test_invalid_ratio_resolution_and_clamping() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut cfg = config(100, Some(1.7), 0.0);
        assert_eq!(resolve_invalid_ratio(&mut rng, &cfg), 1.0);
        cfg.invalid_ratio = Some(-0.5);
        assert_eq!(resolve_invalid_ratio(&mut rng, &cfg), 0.0);
        cfg.invalid_ratio = None;
        for _ in 0..100 {
            let r = resolve_invalid_ratio(&mut rng, &cfg);
            assert!((0.6..=0.8).contains(&r));
        }
    }

    #[test]
    fn test_invalid_count_is_floor_of_ratio() {
        let mut rng = StdRng::seed_from_u64(3);
        let catalogue = generate_catalogue(&config(100, Some(0.37), 0.0), &mut rng);
        let invalid = catalogue.events.iter().filter(|e| e.is_invalid()).count();
        assert_eq!(invalid, 37);
        assert_eq!(catalogue.statistics.invalid_events, 37);
        assert_eq!(catalogue.statistics.invalid_ratio, 0.37);
    }

    #[test]
    fn test_clean_catalogue_has_no_notes() {
        let mut rng = StdRng::seed_from_u64(4);
        let catalogue = generate_catalogue(&config(100, Some(0.0), 0.0), &mut rng);
        assert_eq!(catalogue.events.len(), 100);
        for event in &catalogue.events {
            assert!(event.validation_note.is_none());
            assert!(event.time.is_some());
            assert!(event.latitude.is_some());
            assert!(event.longitude.is_some());
            assert!(event.numeric_magnitude().is_some());
            assert!(event.depth.is_some());
        }
    }

    #[test]
    fn test_fully_invalid_catalogue() {
        let mut rng = StdRng::seed_from_u64(5);
        let catalogue = generate_catalogue(&config(100, Some(1.0), 0.5), &mut rng);
        assert!(catalogue.events.iter().all(|e| e.is_invalid()));
        assert_eq!(catalogue.statistics.invalid_events, 100);
        // Anomaly never composes with invalid-case injection
        assert!(catalogue.events.iter().all(|e| !e.is_anomaly()));
    }

    #[test]
    fn test_degenerate_bounds_still_produce_a_catalogue() {
        let mut rng = StdRng::seed_from_u64(11);
        let cfg = CatalogueConfig {
            bounds: GeographicBounds {
                min_latitude: -40.0,
                max_latitude: -40.0,
                min_longitude: 174.0,
                max_longitude: 170.0,
            },
            num_events: 5,
            invalid_ratio: Some(0.0),
            anomaly_ratio: 0.0,
            ..Default::default()
        };
        let catalogue = generate_catalogue(&cfg, &mut rng);
        assert_eq!(catalogue.events.len(), 5);
        for event in &catalogue.events {
            let lat = event.latitude.as_ref().and_then(crate::types::FieldValue::as_number);
            assert_eq!(lat, Some(-40.0));
        }
    }

    #[test]
    fn test_events_sorted_by_time_key() {
        let mut rng = StdRng::seed_from_u64(6);
        let catalogue = generate_catalogue(&config(500, None, 0.1), &mut rng);
        for pair in catalogue.events.windows(2) {
            assert!(pair[0].time_sort_key() <= pair[1].time_sort_key());
        }
    }

    #[test]
    fn test_statistics_aggregate_numeric_magnitudes_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalogue = generate_catalogue(&config(400, Some(0.8), 0.0), &mut rng);
        let numeric: Vec<f64> = catalogue
            .events
            .iter()
            .filter_map(Event::numeric_magnitude)
            .collect();
        let stats = &catalogue.statistics;
        assert_eq!(stats.magnitude_range.min, numeric.iter().copied().reduce(f64::min));
        assert_eq!(stats.magnitude_range.max, numeric.iter().copied().reduce(f64::max));
        assert_eq!(stats.total_events, 400);
        assert_eq!(
            stats.events_with_focal_mechanisms,
            catalogue.events.iter().filter(|e| e.focal_mechanisms.is_some()).count()
        );
    }

    #[test]
    fn test_public_ids_unique() {
        let mut rng = StdRng::seed_from_u64(8);
        let catalogue = generate_catalogue(&config(300, None, 0.15), &mut rng);
        let ids: std::collections::HashSet<&str> = catalogue
            .events
            .iter()
            .map(|e| e.public_id.as_str())
            .collect();
        assert_eq!(ids.len(), 300);
    }

    #[test]
    fn test_same_seed_same_catalogue() {
        let cfg = config(200, None, 0.15);
        let a = generate_catalogue(&cfg, &mut StdRng::seed_from_u64(42));
        let b = generate_catalogue(&cfg, &mut StdRng::seed_from_u64(42));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );

        let c = generate_catalogue(&cfg, &mut StdRng::seed_from_u64(43));
        assert_ne!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&c).unwrap()
        );
    }
}
