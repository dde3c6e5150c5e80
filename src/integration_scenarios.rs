//! End-to-end scenario tests spanning synthesis, injection, assembly, and
//! the serialized catalogue shape.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalogue::{CatalogueConfig, generate_catalogue};
use crate::scenarios;
use crate::types::{Catalogue, Event, FieldValue};

fn generate(seed: u64, config: &CatalogueConfig) -> Catalogue {
    generate_catalogue(config, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn presets_are_deterministic_per_seed() {
    for (_, config) in scenarios::preset_configs() {
        let a = generate(42, &config);
        let b = generate(42, &config);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn default_presets_stress_validation() {
    let catalogue = generate(42, &scenarios::north_island_config());
    let stats = &catalogue.statistics;
    assert_eq!(stats.total_events, 1000);
    // Default invalid ratio is drawn from 0.6-0.8
    assert!((600..=800).contains(&stats.invalid_events));
    assert!((0.6..=0.8).contains(&stats.invalid_ratio));

    // With 1000 draws every defect category should show up
    for case in crate::inject::InvalidCase::ALL {
        let tag = format!("invalid:{}", case.as_str());
        assert!(
            catalogue
                .events
                .iter()
                .any(|e| e.validation_note.as_deref() == Some(tag.as_str())),
            "no event tagged {tag}"
        );
    }

    // Anomalies only appear on events not selected as invalid
    let anomalies = catalogue.events.iter().filter(|e| e.is_anomaly()).count();
    assert!(anomalies > 0);
    assert!(anomalies <= stats.total_events - stats.invalid_events);
}

#[test]
fn corrupted_events_sort_first_on_empty_key() {
    let catalogue = generate(
        7,
        &CatalogueConfig {
            num_events: 300,
            invalid_ratio: Some(0.5),
            anomaly_ratio: 0.0,
            ..Default::default()
        },
    );

    // All empty-key events (missing or non-string time) form a prefix
    let first_timed = catalogue
        .events
        .iter()
        .position(|e| !e.time_sort_key().is_empty())
        .unwrap_or(catalogue.events.len());
    assert!(
        catalogue.events[first_timed..]
            .iter()
            .all(|e| !e.time_sort_key().is_empty())
    );
    for pair in catalogue.events.windows(2) {
        assert!(pair[0].time_sort_key() <= pair[1].time_sort_key());
    }
}

#[test]
fn serialized_catalogue_matches_persisted_shape() {
    let catalogue = generate(42, &scenarios::south_island_config());
    let json = serde_json::to_value(&catalogue).unwrap();

    for key in [
        "catalogue_name",
        "region",
        "description",
        "geographic_bounds",
        "time_range",
        "statistics",
        "events",
    ] {
        assert!(json.get(key).is_some(), "missing top-level key {key}");
    }
    assert_eq!(
        json["description"],
        "Realistic earthquake catalogue for New Zealand - South Island with 1000 events"
    );
    assert_eq!(json["time_range"]["start"], "2024-01-01T00:00:00Z");
    assert_eq!(json["time_range"]["end"], "2024-10-29T00:00:00Z");
    assert!(json["geographic_bounds"]["minLatitude"].is_f64());

    let stats = &json["statistics"];
    for key in [
        "total_events",
        "invalid_events",
        "invalid_ratio",
        "events_with_focal_mechanisms",
        "magnitude_range",
    ] {
        assert!(stats.get(key).is_some(), "missing statistics key {key}");
    }

    // Round-trips through the persisted representation
    let parsed: Catalogue = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, catalogue);
}

#[test]
fn valid_events_in_mixed_catalogue_stay_well_formed() {
    let catalogue = generate(
        13,
        &CatalogueConfig {
            num_events: 500,
            invalid_ratio: Some(0.4),
            anomaly_ratio: 0.2,
            ..Default::default()
        },
    );

    for event in catalogue.events.iter().filter(|e| !e.is_invalid()) {
        // Untouched and anomaly events keep every required field well-typed
        assert!(event.time.as_ref().and_then(FieldValue::as_text).is_some());
        for field in [&event.latitude, &event.longitude, &event.depth, &event.magnitude] {
            assert!(field.as_ref().and_then(FieldValue::as_number).is_some());
        }
        if let Some(mag) = event.numeric_magnitude()
            && !event.is_anomaly()
        {
            assert!((1.0..=7.5).contains(&mag));
        }
    }
}

#[test]
fn anomaly_ratio_governs_anomaly_frequency() {
    let catalogue = generate(
        21,
        &CatalogueConfig {
            num_events: 2000,
            invalid_ratio: Some(0.0),
            anomaly_ratio: 0.15,
            ..Default::default()
        },
    );
    let anomalies = catalogue.events.iter().filter(|e| e.is_anomaly()).count();
    // Binomial(2000, 0.15): stay within a generous band
    assert!((200..=400).contains(&anomalies), "anomalies = {anomalies}");
}

#[test]
fn focal_mechanism_statistics_match_event_list() {
    let catalogue = generate(5, &scenarios::deep_events_config());
    let with_mechanism = catalogue
        .events
        .iter()
        .filter(|e| e.focal_mechanisms.is_some())
        .count();
    assert_eq!(
        catalogue.statistics.events_with_focal_mechanisms,
        with_mechanism
    );
    // Valid events carry mechanisms exactly when magnitude >= 5.0
    for event in catalogue.events.iter().filter(|e| e.validation_note.is_none()) {
        let mag = event.numeric_magnitude().unwrap();
        assert_eq!(event.focal_mechanisms.is_some(), mag >= 5.0);
    }
}

#[test]
fn invalid_set_has_exact_size_across_ratios() {
    for (n, ratio, expected) in [(100, 0.0, 0), (100, 1.0, 100), (250, 0.33, 82), (7, 0.5, 3)] {
        let catalogue = generate(
            99,
            &CatalogueConfig {
                num_events: n,
                invalid_ratio: Some(ratio),
                anomaly_ratio: 0.0,
                ..Default::default()
            },
        );
        let invalid: Vec<&Event> = catalogue.events.iter().filter(|e| e.is_invalid()).collect();
        assert_eq!(invalid.len(), expected, "n={n} ratio={ratio}");
        assert_eq!(catalogue.statistics.invalid_events, expected);
    }
}
