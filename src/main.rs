//! quakegen - Synthetic Earthquake Catalogue Generator
//!
//! Thin CLI wrapper around the generation engine: parses a configuration,
//! runs the engine with one seeded random stream, persists the catalogue as
//! indented JSON, and prints a human-readable summary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use quakegen::catalogue::{
    CatalogueConfig, DEFAULT_ANOMALY_RATIO, DEFAULT_INVALID_RATIO_RANGE, generate_catalogue,
};
use quakegen::scenarios;
use quakegen::types::{DepthRegime, GeographicBounds, TectonicRegime};

#[derive(Parser)]
#[command(
    name = "quakegen",
    about = "Synthetic earthquake catalogue generator with deliberate fault injection",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for the random stream (same seed + config = same catalogue)
    #[arg(short, long, global = true, default_value = "42")]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single catalogue from explicit parameters
    Generate {
        /// Catalogue name
        #[arg(long, default_value = "Synthetic Seismic Events")]
        name: String,

        /// Region label (also drives the publicID prefix)
        #[arg(long, default_value = "Synthetic Region")]
        region: String,

        /// Number of events
        #[arg(short, long, default_value = "1000")]
        events: usize,

        /// Window start date (YYYY-MM-DD)
        #[arg(long, default_value = "2024-01-01")]
        start_date: NaiveDate,

        /// Window end date (YYYY-MM-DD)
        #[arg(long, default_value = "2024-10-29")]
        end_date: NaiveDate,

        /// Bounding box, degrees
        #[arg(long, default_value = "-47.0")]
        min_lat: f64,
        #[arg(long, default_value = "-34.0")]
        max_lat: f64,
        #[arg(long, default_value = "166.0")]
        min_lon: f64,
        #[arg(long, default_value = "179.0")]
        max_lon: f64,

        /// Tectonic regime biasing focal mechanisms
        #[arg(long, value_enum, default_value = "subduction")]
        tectonic: TectonicRegime,

        /// Depth regime
        #[arg(long, value_enum, default_value = "shallow")]
        depth_regime: DepthRegime,

        /// Explicit invalid fraction in [0,1]; drawn from the default
        /// 0.6-0.8 range when omitted
        #[arg(long)]
        invalid_ratio: Option<f64>,

        /// Probability of cross-field anomaly injection per valid event
        #[arg(long, default_value_t = DEFAULT_ANOMALY_RATIO)]
        anomaly_ratio: f64,

        /// Output file
        #[arg(short, long, default_value = "catalogue.json")]
        output: PathBuf,
    },

    /// Generate the three canonical New Zealand test catalogues
    Presets {
        /// Output directory
        #[arg(short, long, default_value = "test-data")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Generate {
            name,
            region,
            events,
            start_date,
            end_date,
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            tectonic,
            depth_regime,
            invalid_ratio,
            anomaly_ratio,
            output,
        } => {
            let config = CatalogueConfig {
                name,
                region,
                bounds: GeographicBounds {
                    min_latitude: min_lat,
                    max_latitude: max_lat,
                    min_longitude: min_lon,
                    max_longitude: max_lon,
                },
                num_events: events,
                start_date,
                end_date,
                tectonic,
                depth_regime,
                invalid_ratio,
                invalid_ratio_range: DEFAULT_INVALID_RATIO_RANGE,
                anomaly_ratio,
            };

            let mut rng = StdRng::seed_from_u64(cli.seed);
            let catalogue = generate_catalogue(&config, &mut rng);
            scenarios::write_catalogue(&catalogue, &output)?;
            scenarios::print_summary(&catalogue);
            println!("\nSaved: {}", output.display());
        }

        Commands::Presets { out_dir } => {
            let catalogues = scenarios::run_presets(cli.seed, &out_dir)?;

            println!("\n{}", "=".repeat(60));
            println!("SUMMARY");
            println!("{}", "=".repeat(60));
            for catalogue in &catalogues {
                scenarios::print_summary(catalogue);
            }
            println!("\n{}", "=".repeat(60));
            println!("{} catalogues generated successfully!", catalogues.len());
            println!("{}", "=".repeat(60));
        }
    }

    Ok(())
}
