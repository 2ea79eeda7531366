pub mod config;
pub mod error;
pub mod store;

pub use config::{Config, PanelsConfig, ValidationResult};
pub use error::{AppError, ConfigError, NetworkError};
pub use store::{MemoryStore, SessionStore};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Glance core initialized");
    Ok(())
}
