/**
 * UserHub Server Entry Point
 *
 * Initializes tracing, loads configuration, builds the Axum app, and serves
 * it. A missing signing secret aborts startup; a missing database does not
 * (login degrades to a service error until it comes back).
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = userhub::server::ServerConfig::from_env()?;
    let port = config.port;

    let app = userhub::server::create_app(config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
