use clap::Parser;
use csms_api::{ApiConfig, AppState, DEFAULT_PAGE_SIZE, create_app};
use csms_core::{Station, StationStore};
use std::path::PathBuf;

/// Command line arguments for the voltra-csms server
#[derive(Parser, Debug)]
#[command(name = "voltra-csms")]
#[command(about = "Voltra Charging Station Management Service")]
struct Args {
    /// Path to a JSON file with the initial station fleet
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Page size used when a list request omits `limit`
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    default_page_size: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    // Build the station store, from the seed file when one is given
    let store = match &args.seed {
        Some(path) => {
            let seed_content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| format!("Failed to read seed file '{}': {}", path.display(), e))?;

            let stations: Vec<Station> = serde_json::from_str(&seed_content)
                .map_err(|e| format!("Failed to parse seed file '{}': {}", path.display(), e))?;

            tracing::info!(
                "Loaded {} stations from {}",
                stations.len(),
                path.display()
            );
            StationStore::with_stations(stations)
        }
        None => StationStore::seeded(),
    };

    let config = ApiConfig {
        default_page_size: args.default_page_size,
    };

    // Build our application with routes
    let app = create_app(AppState::new(store, config));

    // Run our app with hyper
    let bind_addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
