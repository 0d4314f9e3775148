//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use platform::credentials::BasicCredentials;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use stock::{GatewayConfig, SapGateway, stock_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                //.unwrap_or_else(|_| "api=debug,stock=debug,tower_http=debug".into()),
                .unwrap_or_else(|_| "api=info,stock=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Backend connection settings
    let gateway_config = if cfg!(debug_assertions) {
        GatewayConfig::development()
    } else {
        // In production, the backend endpoint comes from the environment
        let host = env::var("SAP_HOST").expect("SAP_HOST must be set in production");
        let port = env::var("SAP_PORT")
            .expect("SAP_PORT must be set in production")
            .parse()?;
        let username = env::var("SAP_USERNAME").expect("SAP_USERNAME must be set in production");
        let password = env::var("SAP_PASSWORD").expect("SAP_PASSWORD must be set in production");
        let token_timeout = match env::var("SAP_TOKEN_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(secs.parse()?),
            Err(_) => GatewayConfig::DEFAULT_TOKEN_TIMEOUT,
        };

        GatewayConfig {
            host,
            port,
            credentials: BasicCredentials::new(username, password),
            token_timeout,
        }
    };

    tracing::info!(backend = %gateway_config.base_url(), "Loading stock gateway");
    let gateway = SapGateway::new(gateway_config);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", stock_router(gateway))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
