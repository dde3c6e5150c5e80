//! Pre-defined catalogue scenarios
//!
//! The three canonical New Zealand catalogues used to exercise downstream
//! validation: North Island (shallow subduction), South Island (shallow
//! strike-slip), and deep subduction events. Also hosts the persistence
//! driver that writes catalogues to disk and prints their summaries.

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::catalogue::{CatalogueConfig, generate_catalogue};
use crate::error::QuakegenError;
use crate::types::{Catalogue, DepthRegime, GeographicBounds, TectonicRegime};

/// North Island: shallow subduction-zone seismicity.
pub fn north_island_config() -> CatalogueConfig {
    CatalogueConfig {
        name: "North Island Seismic Events".to_string(),
        region: "New Zealand - North Island".to_string(),
        bounds: GeographicBounds {
            min_latitude: -41.5,
            max_latitude: -34.0,
            min_longitude: 172.0,
            max_longitude: 179.0,
        },
        tectonic: TectonicRegime::Subduction,
        depth_regime: DepthRegime::Shallow,
        ..Default::default()
    }
}

/// South Island: shallow strike-slip seismicity along the Alpine Fault.
pub fn south_island_config() -> CatalogueConfig {
    CatalogueConfig {
        name: "South Island Seismic Events".to_string(),
        region: "New Zealand - South Island".to_string(),
        bounds: GeographicBounds {
            min_latitude: -47.0,
            max_latitude: -40.5,
            min_longitude: 166.0,
            max_longitude: 174.5,
        },
        tectonic: TectonicRegime::StrikeSlip,
        depth_regime: DepthRegime::Shallow,
        ..Default::default()
    }
}

/// Deep subducted-slab events spanning the whole country.
pub fn deep_events_config() -> CatalogueConfig {
    CatalogueConfig {
        name: "NZ Deep Seismic Events".to_string(),
        region: "New Zealand - Deep Events".to_string(),
        bounds: GeographicBounds {
            min_latitude: -47.0,
            max_latitude: -34.0,
            min_longitude: 166.0,
            max_longitude: 179.0,
        },
        tectonic: TectonicRegime::Subduction,
        depth_regime: DepthRegime::Deep,
        ..Default::default()
    }
}

/// The preset catalogues with their output file stems.
pub fn preset_configs() -> Vec<(&'static str, CatalogueConfig)> {
    vec![
        ("north-island-catalogue", north_island_config()),
        ("south-island-catalogue", south_island_config()),
        ("deep-events-catalogue", deep_events_config()),
    ]
}

/// Serialize a catalogue to indented JSON at the given path.
pub fn write_catalogue(catalogue: &Catalogue, path: &Path) -> Result<(), QuakegenError> {
    let json = serde_json::to_string_pretty(catalogue)?;
    fs::write(path, json).map_err(|source| QuakegenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "catalogue written");
    Ok(())
}

/// Generate all preset catalogues with one seeded stream, write them under
/// `out_dir`, and return them for summary printing.
pub fn run_presets(seed: u64, out_dir: &Path) -> Result<Vec<Catalogue>, QuakegenError> {
    let mut rng = StdRng::seed_from_u64(seed);
    fs::create_dir_all(out_dir).map_err(|source| QuakegenError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut catalogues = Vec::new();
    for (stem, config) in preset_configs() {
        info!(name = %config.name, "generating preset catalogue");
        let catalogue = generate_catalogue(&config, &mut rng);
        write_catalogue(&catalogue, &out_dir.join(format!("{stem}.json")))?;
        catalogues.push(catalogue);
    }
    Ok(catalogues)
}

/// Print the human-readable summary block for one catalogue.
pub fn print_summary(catalogue: &Catalogue) {
    let stats = &catalogue.statistics;
    println!("\n{}:", catalogue.catalogue_name);
    println!("  Region: {}", catalogue.region);
    println!("  Total events: {}", stats.total_events);
    println!(
        "  Invalid events: {} ({:.0}%)",
        stats.invalid_events,
        stats.invalid_ratio * 100.0
    );
    println!(
        "  Events with focal mechanisms: {}",
        stats.events_with_focal_mechanisms
    );
    match (stats.magnitude_range.min, stats.magnitude_range.max) {
        (Some(min), Some(max)) => println!("  Magnitude range: {min} - {max}"),
        _ => println!("  Magnitude range: n/a"),
    }
    println!("  Geographic bounds:");
    println!(
        "    Latitude: {} to {}",
        catalogue.geographic_bounds.min_latitude, catalogue.geographic_bounds.max_latitude
    );
    println!(
        "    Longitude: {} to {}",
        catalogue.geographic_bounds.min_longitude, catalogue.geographic_bounds.max_longitude
    );
}
