//! Command-line geocoder.
//!
//! Geocodes an address, or reverse geocodes a coordinate pair given as
//! `lat,lng` (comma-separated, no space), and prints the matches.
//!
//! Usage:
//!   geocode "1600 amphitheatre mountain view ca" -k YOUR_API_KEY
//!   geocode 37.4219720,-122.0841430 --client-id gme-xxx --private-key KEY

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use geocoder::config::{Config, CredentialsConfig};
use geocoder::{AddressLookup, GeocoderError, Query};

#[derive(Parser, Debug)]
#[command(name = "geocode")]
#[command(version, about = "Geocode an address or reverse geocode a lat,lng pair")]
struct Args {
    /// Address, or "lat,lng" for reverse geocoding
    query: String,

    /// TOML config file with endpoint, credentials and defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key
    #[arg(short = 'k', long)]
    key: Option<String>,

    /// Business client ID (requires --private-key)
    #[arg(long, requires = "private_key")]
    client_id: Option<String>,

    /// Business private key, URL-safe base64 (requires --client-id)
    #[arg(long, requires = "client_id")]
    private_key: Option<String>,

    /// Result language, e.g. "en"
    #[arg(long)]
    language: Option<String>,

    /// Region bias as a ccTLD, e.g. "us"
    #[arg(long)]
    region: Option<String>,

    /// Print all candidates as JSON
    #[arg(long)]
    json: bool,

    /// Print the request URL (signed if applicable) and exit
    #[arg(long)]
    sign_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays parseable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args);

    let geocoder = config.geocoder()?;
    let request = geocoder.request(Query::from_input(&args.query));
    debug!("Request: {:?}", request);

    if args.sign_only {
        println!("{}", geocoder.request_url(&request)?);
        return Ok(());
    }

    let results = match geocoder.geocode_with(&request).await {
        Ok(results) => results,
        Err(GeocoderError::Service {
            status,
            url,
            response,
        }) => {
            eprintln!("{}\nError {}\nResponse:", url, status);
            if let Some(body) = response {
                eprintln!("{}", serde_json::to_string_pretty(&body)?);
            }
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Geocoding request failed"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, candidate) in results.iter().enumerate() {
        println!("{}. {}", i + 1, candidate.formatted_address());
    }

    let (lat, lng) = results.coordinates();
    println!();
    println!("Coordinates: {}, {}", lat, lng);
    for (label, value) in [
        ("City", results.city()),
        ("State", results.get("state__short_name")),
        ("Postal code", results.postal_code()),
        ("Country", results.country()),
    ] {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }
    println!("Valid address: {}", results.valid_address());

    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let (Some(client_id), Some(private_key)) = (&args.client_id, &args.private_key) {
        config.credentials = CredentialsConfig {
            api_key: None,
            client_id: Some(client_id.clone()),
            private_key: Some(private_key.clone()),
        };
    } else if let Some(ref key) = args.key {
        config.credentials = CredentialsConfig {
            api_key: Some(key.clone()),
            ..Default::default()
        };
    }

    if args.language.is_some() {
        config.defaults.language = args.language.clone();
    }
    if args.region.is_some() {
        config.defaults.region = args.region.clone();
    }
}
