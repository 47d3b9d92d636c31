//! Filegate server.
//!
//! Main entry point that wires all crates together and starts the server.
//! Every component is constructed explicitly here and handed its
//! collaborators; nothing is wired up anywhere else.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use filegate_api::{AppState, build_router};
use filegate_auth::jwt::{JwtDecoder, JwtEncoder};
use filegate_auth::password::{PasswordHasher, PasswordValidator};
use filegate_core::config::AppConfig;
use filegate_core::error::AppError;
use filegate_core::traits::blob::BlobStore;
use filegate_database::DatabasePool;
use filegate_database::migration::run_migrations;
use filegate_database::repositories::file::FileRepository;
use filegate_database::repositories::user::UserRepository;
use filegate_service::{
    AccessEngine, DownloadService, FileService, LinkGenerator, UserService,
};
use filegate_storage::LocalBlobStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("FILEGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Filegate v{}", env!("CARGO_PKG_VERSION"));

    create_data_directories(&config).await?;

    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    let blobs: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::new(&config.storage.root).await?);

    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let file_repo = Arc::new(FileRepository::new(db.pool().clone()));

    let hasher = Arc::new(PasswordHasher::new());
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let access = Arc::new(AccessEngine::new(Arc::clone(&hasher)));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&hasher),
        Arc::clone(&validator),
        Arc::clone(&jwt_encoder),
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&blobs),
        LinkGenerator::new(),
        Arc::clone(&access),
    ));
    let download_service = Arc::new(DownloadService::new(
        Arc::clone(&file_repo),
        Arc::clone(&blobs),
        Arc::clone(&access),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        jwt_decoder,
        user_service,
        file_service,
        download_service,
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Filegate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("Filegate server shut down gracefully");
    Ok(())
}

/// Create the database parent directory and the blob storage root
async fn create_data_directories(config: &AppConfig) -> Result<(), AppError> {
    let mut dirs = vec![config.storage.root.clone()];
    if let Some(parent) = Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            dirs.push(parent.display().to_string());
        }
    }

    for dir in &dirs {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create dir '{}': {}", dir, e)))?;
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
