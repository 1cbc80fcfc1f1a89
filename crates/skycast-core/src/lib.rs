pub mod config;
pub mod error;

pub use config::{Config, DisplayUnit, ValidationResult, WeatherConfig};
pub use error::{config_user_message, ConfigError, NetworkError, ReqwestErrorExt};

use anyhow::Result;

/// Initialize logging.
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn init(verbosity: u8) -> Result<()> {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("SkyCast core initialized");
    Ok(())
}
