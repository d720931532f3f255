use std::net::SocketAddr;

use neighborhood::{
    app,
    clients::{get_reqwest_client, init_reqwest_client},
    config::{load_places, Config, Settings},
    gateway::ProviderGateway,
    AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env()?;
    let config = Config::load(&settings.config_path)?;
    let places = load_places(&settings.places_path)?;
    info!("Loaded {} places", places.len());

    init_reqwest_client()?;
    let gateway = ProviderGateway::new(get_reqwest_client()?.clone(), config.api)
        .with_base_urls(&settings.openweather_url, &settings.foursquare_url);

    let app = app(AppState::new(places, gateway), &settings.assets);

    info!("Running on port {}", settings.port);

    axum::Server::bind(&SocketAddr::from(([0, 0, 0, 0], settings.port)))
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
