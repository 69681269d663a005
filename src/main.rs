use anyhow::{Context, Result};
use carverse::{AppState, config::Settings, routes, store::Inventory};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn load_inventory(settings: &Settings) -> Result<Inventory> {
    match &settings.inventory_path {
        Some(path) => Inventory::from_file(path),
        None => {
            tracing::info!("No inventory_path configured, using built-in listings.");
            Inventory::seeded().context("Built-in listings violate store invariants")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "carverse=info,tower_http=info".into())) // Default to info if RUST_LOG not set
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing CarVerse server...");

    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!(
                rental_price_divisor = s.rental_price_divisor,
                session_ttl_minutes = s.session_ttl_minutes,
                "Configuration loaded successfully."
            );
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    let inventory = load_inventory(&settings)?;
    tracing::info!(
        sale = inventory.store(carverse::models::ListingDomain::Sale).get_all().len(),
        rental = inventory.store(carverse::models::ListingDomain::Rental).get_all().len(),
        "Inventory ready."
    );

    let addr: SocketAddr = settings
        .server_address
        .parse()
        .with_context(|| format!("Invalid server address format: {}", settings.server_address))?;

    let app_state = AppState::new(settings, inventory);
    let app = routes::create_router(app_state);

    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
