//! Weather Outfit Recommender - Backend Server

use std::{net::SocketAddr, path::Path, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outfit_recommender_backend::{
    config::Config,
    create_app,
    external::WeatherClient,
    inference::{FeatureSchema, ModelRegistry},
    services::{RecommendationService, WeatherService},
    AppState, DEFAULT_LOG_DIRECTIVES,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVES.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Weather Outfit Recommender Server");
    tracing::info!("Environment: {}", config.environment);

    // Load model artifacts; missing artifacts are non-fatal
    let registry = ModelRegistry::load(Path::new(&config.models.dir));
    if registry.is_empty() {
        tracing::warn!("No model assets loaded, recommendations will use rule-based fallback");
    } else {
        tracing::info!("Loaded {} model asset(s)", registry.len());
    }
    let schema = FeatureSchema::load(Path::new(&config.models.features_file));

    let engine = RecommendationService::new(Arc::new(registry), Arc::new(schema));
    let weather = WeatherService::new(WeatherClient::new(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
    ));

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        engine,
        weather,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
