//! # cityinfod — cityinfo daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the in-memory store and its repository handles (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use cityinfo_adapter_http_axum::router;
use cityinfo_adapter_http_axum::state::AppState;
use cityinfo_adapter_storage_memory::MemoryStore;
use cityinfo_app::services::city_service::CityService;
use cityinfo_app::services::point_of_interest_service::PointOfInterestService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Store & repositories
    let store = if config.store.seed_demo_data {
        MemoryStore::seeded()
    } else {
        MemoryStore::empty()
    };
    let city_repo = store.city_repository();
    let poi_repo = store.point_of_interest_repository();

    // Services
    let city_service = CityService::new(city_repo.clone());
    let poi_service = PointOfInterestService::new(city_repo, poi_repo);

    // HTTP
    let state = AppState::new(city_service, poi_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("cityinfod listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
