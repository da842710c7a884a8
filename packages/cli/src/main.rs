#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line quoting tool.
//!
//! Exercises the full quoting flow from the terminal: measure a
//! hand-traced boundary, auto-estimate one from a geocoded address
//! point, price an area against a tier configuration, and validate tier
//! tables. The pricing configuration stands in for the account-settings
//! store; quotes print the same immutable snapshot a quote record would
//! persist.

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::PricingConfig;
use lawnquote_estimator_models::{EstimatorConfig, PropertyClass};
use lawnquote_geometry::session::ServiceAreaSession;
use lawnquote_geometry_models::{GeoPoint, Polygon};
use lawnquote_pricing::{
    calc::{compare_to_flat, flat_snapshot, tiered_snapshot},
    validate::validate_tier_set,
};
use lawnquote_pricing_models::{PricingMode, PricingSnapshot};

#[derive(Parser)]
#[command(name = "lawnquote", about = "Lawn service quoting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure a traced boundary's square footage
    Measure {
        /// Boundary vertices as "lat,lng;lat,lng;..." (at least 3 pairs)
        #[arg(long)]
        points: String,
    },
    /// Auto-estimate a lawn boundary from a geocoded address point
    Estimate {
        /// Geocoded latitude
        #[arg(long)]
        lat: f64,
        /// Geocoded longitude
        #[arg(long)]
        lng: f64,
        /// Street name, used only for the road-direction heuristic
        #[arg(long)]
        street: Option<String>,
        /// Property classification (residential or commercial)
        #[arg(long, default_value = "residential")]
        property_type: PropertyClass,
    },
    /// Price an area and print the itemized quote plus its snapshot
    Quote {
        /// Area to price, in square feet; omit to auto-estimate from
        /// --lat/--lng
        #[arg(long)]
        area: Option<f64>,
        /// Geocoded latitude (required without --area)
        #[arg(long)]
        lat: Option<f64>,
        /// Geocoded longitude (required without --area)
        #[arg(long)]
        lng: Option<f64>,
        /// Street name, used only for the road-direction heuristic
        #[arg(long)]
        street: Option<String>,
        /// Property classification (residential or commercial)
        #[arg(long, default_value = "residential")]
        property_type: PropertyClass,
        /// Pricing configuration TOML (defaults to the embedded config)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a pricing tier configuration
    ValidateTiers {
        /// Pricing configuration TOML (defaults to the embedded config)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Measure { points } => {
            let polygon = parse_points(&points)?;
            let mut session = ServiceAreaSession::new();
            let summary = session.add_polygon(polygon)?;
            println!("{} sq ft", summary.total_square_feet);
        }
        Commands::Estimate {
            lat,
            lng,
            street,
            property_type,
        } => {
            let estimate = lawnquote_estimator::estimate(
                Some(GeoPoint::new(lat, lng)),
                property_type,
                street.as_deref(),
                &EstimatorConfig::default(),
            )?;

            println!(
                "Estimated {} polygon(s) for a {} property (road bearing {}\u{b0}):",
                estimate.polygons.len(),
                estimate.property_class,
                estimate.road_orientation.degrees()
            );
            for (index, square_feet) in estimate.measured.polygon_square_feet.iter().enumerate() {
                println!("  polygon {index}: {square_feet} sq ft");
            }
            println!(
                "Total: {} sq ft (target {} sq ft)",
                estimate.measured.total_square_feet, estimate.target_square_feet
            );
        }
        Commands::Quote {
            area,
            lat,
            lng,
            street,
            property_type,
            config,
        } => {
            let pricing = PricingConfig::load(config.as_deref())?;

            let area = match area {
                Some(area) => area,
                None => {
                    let (Some(lat), Some(lng)) = (lat, lng) else {
                        return Err("either --area or both --lat and --lng are required".into());
                    };
                    let estimate = lawnquote_estimator::estimate(
                        Some(GeoPoint::new(lat, lng)),
                        property_type,
                        street.as_deref(),
                        &EstimatorConfig::default(),
                    )?;
                    log::info!(
                        "Auto-estimated {} sq ft across {} polygon(s)",
                        estimate.measured.total_square_feet,
                        estimate.polygons.len()
                    );
                    #[allow(clippy::cast_precision_loss)]
                    let measured = estimate.measured.total_square_feet as f64;
                    measured
                }
            };

            let tiers = pricing.pricing_tiers();
            let snapshot = if pricing.use_tiered && !tiers.is_empty() {
                tiered_snapshot(area, &tiers, pricing.minimum)?
            } else {
                flat_snapshot(area, pricing.flat_rate.unwrap_or_default(), pricing.minimum)
            };

            print_quote(&snapshot)?;

            // Volume-discount note, informational only.
            if snapshot.mode == PricingMode::Tiered
                && let Some(flat_rate) = pricing.flat_rate
            {
                let comparison = compare_to_flat(area, &tiers, flat_rate)?;
                if comparison.savings > 0.0 {
                    println!(
                        "Tiered pricing saves ${:.2} ({:.1}%) vs a flat ${flat_rate}/sq ft",
                        comparison.savings, comparison.savings_percent
                    );
                }
            }
        }
        Commands::ValidateTiers { config } => {
            let pricing = PricingConfig::load(config.as_deref())?;
            let report = validate_tier_set(&pricing.pricing_tiers());

            if report.is_valid() {
                println!("Pricing configuration is valid.");
            } else {
                for message in report.messages() {
                    println!("- {message}");
                }
                return Err("pricing configuration failed validation".into());
            }
        }
    }

    Ok(())
}

/// Parses a "lat,lng;lat,lng;..." vertex list.
fn parse_points(raw: &str) -> Result<Polygon, Box<dyn std::error::Error>> {
    let mut points = Vec::new();
    for pair in raw.split(';').filter(|pair| !pair.trim().is_empty()) {
        let Some((lat, lng)) = pair.split_once(',') else {
            return Err(format!("expected \"lat,lng\" but got \"{pair}\"").into());
        };
        points.push(GeoPoint::new(lat.trim().parse()?, lng.trim().parse()?));
    }
    Ok(Polygon::new(points))
}

/// Prints the itemized quote table followed by the snapshot JSON a
/// quote record would persist.
fn print_quote(snapshot: &PricingSnapshot) -> Result<(), serde_json::Error> {
    println!("{:<44} {:>10}", "LINE", "AMOUNT");
    println!("{}", "-".repeat(55));
    for line in &snapshot.result.breakdown {
        println!("{:<44} {:>10}", line.label, format!("${:.2}", line.subtotal));
    }
    println!("{}", "-".repeat(55));
    println!(
        "{:<44} {:>10}",
        "Total",
        format!("${:.2}", snapshot.result.total_price)
    );
    if snapshot.result.minimum_applied {
        println!("(per-visit minimum applied)");
    }
    println!();
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}
