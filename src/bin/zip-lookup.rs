//! # ZIP Lookup
//!
//! Resolves the ZIP codes given on the command line to a city and state.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin zip-lookup -- 78701 90210-1234
//! cargo run --bin zip-lookup -- --config lookup.json 78701
//! ```
//!
//! The optional configuration file is a JSON [`LookupConfig`] document; any
//! field it omits keeps its default. Set `RUST_LOG=debug` to see each request.
//!
//! ## Output
//!
//! ```text
//! 78701       Austin, TX
//! 00000       error: lookup failed with HTTP status 404
//! ```
//!
//! The exit status is 1 when any lookup failed.

use applicant_core::{LookupClient, LookupConfig, LookupResult};
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("zip-lookup");

    let (config_path, zip_codes) = match parse_args(args.get(1..).unwrap_or_default()) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: {} [--config <file>] <zip-code>...", program);
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} 78701 90210", program);
            eprintln!("  {} --config lookup.json 78701-1234", program);
            process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => match fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| LookupConfig::from_json_str(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => LookupConfig::default(),
    };

    // The blocking HTTP client must be created outside the async runtime.
    let client = match LookupClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating lookup client: {}", e);
            process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            process::exit(1);
        }
    };

    let results = runtime.block_on(client.lookup_many(&zip_codes));

    let mut failed = false;
    for (zip_code, result) in zip_codes.iter().zip(results) {
        match result {
            LookupResult::Success(city_state) => println!("{:<11} {}", zip_code, city_state),
            LookupResult::Failure(message) => {
                failed = true;
                println!("{:<11} error: {}", zip_code, message);
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Split the arguments into an optional config path and the ZIP codes.
fn parse_args(args: &[String]) -> Option<(Option<String>, Vec<String>)> {
    let mut config_path = None;
    let mut zip_codes = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => config_path = Some(iter.next()?.clone()),
            "--help" | "-h" => return None,
            _ => zip_codes.push(arg.clone()),
        }
    }

    if zip_codes.is_empty() {
        None
    } else {
        Some((config_path, zip_codes))
    }
}
