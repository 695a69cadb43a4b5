//! CLI for roomlet
//!
//! Parses arguments, initializes logging and dispatches. All subsystem
//! wiring happens here so `main` stays a thin shell.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::rest_api::{serve, ServerConfig};
use crate::store::MemoryStore;

#[derive(Parser)]
#[command(name = "roomlet", version, about = "Room listing backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Allowed CORS origin; repeatable, `*` allows any
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,

        /// Default page size for search results
        #[arg(long, default_value_t = 10)]
        page_size: u32,

        /// Hard cap on caller-requested page sizes
        #[arg(long, default_value_t = 50)]
        max_page_size: u32,

        /// Seed a demo location with a few listings on startup
        #[arg(long)]
        seed: bool,
    },
}

/// Entry point called from `main`.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            cors_origins,
            page_size,
            max_page_size,
            seed,
        } => {
            let mut config = ServerConfig {
                host,
                port,
                default_page_size: page_size,
                max_page_size,
                ..Default::default()
            };
            if !cors_origins.is_empty() {
                config.cors_origins = cors_origins;
            }

            let store = Arc::new(MemoryStore::new());
            if seed {
                seed_demo_data(&store).await?;
            }
            serve(store, config).await?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("roomlet=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One location with a handful of listings, enough to exercise every
/// filter from a fresh checkout.
async fn seed_demo_data(store: &Arc<MemoryStore>) -> Result<(), Box<dyn std::error::Error>> {
    use crate::rest_api::{CreateListing, CreateLocation};
    use crate::store::ListingStore;
    use serde_json::json;

    let location: CreateLocation = serde_json::from_value(json!({
        "name": "Kakkanad",
        "city": "Kochi",
        "description": "IT corridor, close to Infopark"
    }))?;
    let location = store.insert_location(location.into_location()).await?;

    let listings = [
        json!({
            "locationId": location.id,
            "title": "Single room near Infopark",
            "size": "Single Room",
            "propertyType": "Room",
            "furnishingStatus": "Semi-furnished",
            "rent": 6000,
            "securityDeposit": 12000,
            "facilities": ["Fridge"],
            "parking": ["Bike"],
            "allowedFor": ["Bachelors"],
            "tags": ["Near Infopark"]
        }),
        json!({
            "locationId": location.id,
            "title": "Furnished 1 RK",
            "size": "1 RK",
            "propertyType": "Flat",
            "furnishingStatus": "Furnished",
            "rent": 11000,
            "securityDeposit": 25000,
            "facilities": ["AC", "Washing Machine"],
            "parking": ["Car", "Bike"],
            "allowedFor": ["Family"],
            "petAllowed": true
        }),
        json!({
            "locationId": location.id,
            "title": "PG bed, ladies only",
            "size": "Shared Room",
            "propertyType": "PG",
            "furnishingStatus": "Furnished",
            "rent": 4500,
            "securityDeposit": 4500,
            "facilities": ["WiFi", "Washing Machine"],
            "suitableFor": ["Students", "Working Professionals"],
            "additionalInfo": "two minutes from infopark road"
        }),
    ];

    for body in listings {
        let listing: CreateListing = serde_json::from_value(body)?;
        store.insert_listing(listing.into_listing()).await?;
    }
    tracing::info!(location_id = %location.id, "seeded demo data");
    Ok(())
}
