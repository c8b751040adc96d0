use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::airports::{AirportClient, AirportConfig};
use trip_server::geocode::{GeocodeClient, GeocodeConfig};
use trip_server::planner::{TripConfig, TripPlanner};
use trip_server::routing::{RoutingClient, RoutingConfig};
use trip_server::web::{AppState, create_router};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trip_server=info,tower_http=info")),
        )
        .init();

    // Collaborator endpoints, overridable for self-hosted instances
    let mut routing_config = RoutingConfig::new();
    if let Ok(url) = std::env::var("OSRM_URL") {
        routing_config = routing_config.with_base_url(url);
    }
    let mut airport_config = AirportConfig::new();
    if let Ok(url) = std::env::var("OVERPASS_URL") {
        airport_config = airport_config.with_base_url(url);
    }
    let mut geocode_config = GeocodeConfig::new();
    if let Ok(url) = std::env::var("NOMINATIM_URL") {
        geocode_config = geocode_config.with_base_url(url);
    }

    let router = RoutingClient::new(routing_config).expect("Failed to create routing client");
    let airports = AirportClient::new(airport_config).expect("Failed to create airport client");
    let geocoder = GeocodeClient::new(geocode_config).expect("Failed to create geocode client");

    let planner = TripPlanner::new(router, airports, TripConfig::default());
    let state = AppState::new(planner, geocoder);

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("PORT={raw} is not a port number, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("HOST must be an IP address");

    info!("Trip planner listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health                   - Health check");
    info!("  GET  /buscar_lugar, /api/places - Find a place by name");
    info!("  POST /calcular_ruta, /api/trips - Plan a trip");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
