use jeepway_core::prelude::*;
use tracing::{info, warn};

use crate::cli::Command;
use crate::config::{AppConfig, AppError};

/// Runs a subcommand and returns the text to print on stdout
pub fn run(command: &Command, config: &AppConfig) -> Result<String, AppError> {
    let network = RouteNetwork::from_path(&config.data_path)?;
    if network.is_empty() {
        warn!(
            "No usable routes in {} ({} features skipped)",
            config.data_path.display(),
            network.skipped()
        );
    }

    match command {
        Command::Nearby {
            destinations,
            pretty,
            ..
        } => {
            let matcher = RouteProximityMatcher::new(config.threshold_meters)?;
            nearby(&network, &matcher, destinations, *pretty)
        }
        Command::Geometry { route_code } => geometry(&network, route_code),
        Command::Routes => Ok(network.route_refs().join("\n")),
    }
}

/// One destination prints a flat list, several print one list per destination
pub fn nearby(
    network: &RouteNetwork,
    matcher: &RouteProximityMatcher,
    destinations: &[Destination],
    pretty: bool,
) -> Result<String, AppError> {
    let value = match destinations {
        [destination] => {
            let matches = matcher.find_nearby_routes(network, *destination);
            info!(
                "{} routes within {} m of {destination}",
                matches.len(),
                matcher.threshold_meters()
            );
            serde_json::to_value(matches)?
        }
        _ => {
            let results = matcher.find_nearby_routes_bulk(network, destinations);
            info!("Matched {} destinations", results.len());
            serde_json::to_value(results)?
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}

pub fn geometry(network: &RouteNetwork, route_code: &str) -> Result<String, AppError> {
    let geometry = network
        .find_route_geometry(route_code)
        .ok_or_else(|| AppError::RouteNotFound(route_code.to_string()))?;
    Ok(serde_json::to_string(geometry)?)
}
