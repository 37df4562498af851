use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jeepway_core::Destination;

/// Find jeepney routes passing near a destination
#[derive(Debug, Parser)]
#[command(name = "jeepway", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GeoJSON FeatureCollection with route geometries (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank routes passing within a threshold of one or more destinations
    Nearby {
        /// Destination as LAT,LNG; repeat to match several destinations in parallel
        #[arg(
            long = "dest",
            value_name = "LAT,LNG",
            required = true,
            allow_hyphen_values = true
        )]
        destinations: Vec<Destination>,

        /// Search radius in meters (overrides config)
        #[arg(long, value_name = "METERS")]
        threshold: Option<f64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the GeoJSON geometry of a route by its code
    Geometry {
        /// Route code, matched case-insensitively
        route_code: String,
    },
    /// List the route codes in the dataset
    Routes,
}
