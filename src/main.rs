use money_manager_api::app_state::AppState;
use money_manager_api::config::load_config;
use money_manager_api::http;
use money_manager_api::infra::postgres;
use money_manager_api::parser::DraftParser;
use money_manager_api::telemetry::init_telemetry;

use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if exists
    let _ = dotenvy::dotenv();

    // Load configuration
    let config = load_config().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize telemetry
    init_telemetry(&config.telemetry);

    // Compile the text parser once; it is shared read-only across workers
    let parser = DraftParser::new().unwrap_or_else(|e| {
        eprintln!("Failed to compile parser patterns: {}", e);
        std::process::exit(1);
    });

    tracing::info!("Initializing integrations...");

    let pg_pool = postgres::init_postgres(&config.integrations, &config.db).await;

    // Create AppState
    let app_state = AppState::new(config.service.clone(), pg_pool.clone(), Arc::new(parser));

    // Setup graceful shutdown
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        let _ = tx.send(());
    });

    // Start HTTP server
    let server = http::start_server(config, app_state);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Server error");
                return Err(e);
            }
        }
        _ = rx => {
            tracing::info!("Shutting down gracefully");
        }
    }

    if let Some(pool) = pg_pool {
        tracing::info!("Closing PostgreSQL connection pool");
        pool.close().await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
