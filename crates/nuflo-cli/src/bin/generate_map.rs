//! Generate a demo deployment of well sensors and LoRa gateways.
//!
//! Writes a GeoJSON scene (markers, popups, links, legend) or a plain-text
//! summary. Defaults come from `NUFLO_*` environment variables and are
//! overridden by flags.
//!
//! Usage:
//!   cargo run -p nuflo-cli --bin generate_map -- --seed 42 --pretty

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nuflo_cli::config::{parse_max_attempts, Overrides};
use nuflo_cli::{render, Config};
use nuflo_core::Deployment;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Geojson,
    Summary,
}

/// Generate a NuFlo demo deployment map
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of wells (env: NUFLO_WELLS)
    #[arg(long)]
    wells: Option<usize>,

    /// Number of gateways (env: NUFLO_GATEWAYS)
    #[arg(long)]
    gateways: Option<usize>,

    /// Number of alerted wells (env: NUFLO_ALERTS)
    #[arg(long)]
    alerts: Option<usize>,

    /// RNG seed; random when omitted (env: NUFLO_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Draws allowed per accepted coordinate, at least 1 (env: NUFLO_MAX_ATTEMPTS)
    #[arg(long, value_parser = parse_max_attempts)]
    max_attempts: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Geojson)]
    format: Format,

    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            wells: self.wells,
            gateways: self.gateways,
            alerts: self.alerts,
            max_attempts: self.max_attempts,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the document
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nuflo=info".parse()?)
                .add_directive("generate_map=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env().with_overrides(&args.overrides());

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(
        seed,
        wells = config.well_count,
        gateways = config.gateway_count,
        alerts = config.alert_count,
        "generating deployment"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let deployment = Deployment::generate(&mut rng, &config.deployment())
        .context("Failed to generate deployment")?;

    let coverage = deployment.coverage();
    tracing::info!(
        links = deployment.links.len(),
        mean_km = coverage.mean_distance_km,
        max_km = coverage.max_distance_km,
        "deployment ready"
    );

    let body = match args.format {
        Format::Geojson => {
            let scene = render::feature_collection(&deployment, chrono::Utc::now());
            let mut text = if args.pretty {
                serde_json::to_string_pretty(&scene)
            } else {
                serde_json::to_string(&scene)
            }
            .context("Failed to serialize GeoJSON")?;
            text.push('\n');
            text
        }
        Format::Summary => render::summary_text(&deployment),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(body.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
