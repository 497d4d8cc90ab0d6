//! Kfz API CLI
//!
//! Starts the HTTP server for chat-to-XML generation.

use kfz_api::{config::ApiConfig, start_server, ServerError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ApiConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else if let Ok(path) = env::var("KFZ_API_CONFIG") {
        ApiConfig::from_file(path)?
    } else {
        eprintln!("No config file specified, using defaults");
        eprintln!("Usage: kfz-api --config <path-to-config.toml>");
        eprintln!();
        ApiConfig::default_config()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    start_server(config).await
}

fn print_help() {
    println!("Kfz API - Chat-to-XML generation for vehicle contracts");
    println!();
    println!("USAGE:");
    println!("    kfz-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    KFZ_API_CONFIG     Config file used when --config is not given");
    println!("    RUST_LOG           Overrides log_level from the config file");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 3001)");
    println!("    - log_level: Default tracing filter (default: 'info')");
    println!("    - [extractor]: base_confidence, mileage_weight, tariff_class_weight,");
    println!("      brand_weight, max_text_length");
    println!();
}
