use std::sync::Arc;

use mergington_server::{app, errors::ServerError, seed, AppState};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "mergington_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Activity roster: built-in default, or a JSON file when ACTIVITIES_PATH is set
    let registry = match std::env::var("ACTIVITIES_PATH") {
        Ok(path) => {
            tracing::info!(path = %path, "Loading activity roster from file");
            seed::load_roster(&path)?
        }
        Err(_) => seed::default_registry(),
    };
    tracing::info!("Seeded {} activities", registry.len());

    let state = Arc::new(AppState { registry });
    let app = app(state);

    let addr = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!("Starting activity signup server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
