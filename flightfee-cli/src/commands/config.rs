//! Config command - show the effective configuration

use std::path::Path;

use flightfee_core::Config;

/// Print the effective configuration and where it was loaded from
pub fn show(config: &Config, explicit: Option<&Path>) {
    println!("Flightfee Configuration");
    println!("=======================");
    println!();
    println!("Route:");
    println!("  origin: {}", config.route.origin);
    println!("  destination: {}", config.route.destination);
    println!();
    println!("Output:");
    println!("  currency_symbol: {}", config.output.currency_symbol);
    println!();

    let path = explicit
        .map(Path::to_path_buf)
        .or_else(Config::default_config_path);
    if let Some(path) = path {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
}
