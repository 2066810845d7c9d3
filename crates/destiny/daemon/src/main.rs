//! Destiny Matrix daemon
//!
//! Serves the correlation engine over a small REST API:
//! - catalog metadata per locale
//! - computation of public summaries from trait input
//! - health and status

use clap::Parser;
use destiny_daemon::{DaemonConfig, DaemonError, DaemonResult, Server};
use destiny_types::Locale;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Destiny Matrix daemon CLI
#[derive(Parser)]
#[command(name = "destinyd")]
#[command(about = "Destiny Matrix - Cross-system correlation service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "DESTINY_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration file
    #[arg(short, long, env = "DESTINY_LISTEN_ADDR")]
    listen: Option<String>,

    /// Default locale (ko or en)
    #[arg(long, env = "DESTINY_DEFAULT_LOCALE")]
    locale: Option<String>,

    /// Log level
    #[arg(long, env = "DESTINY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "DESTINY_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(locale) = &cli.locale {
        config.default_locale = locale
            .parse::<Locale>()
            .map_err(|e| DaemonError::Config(e.to_string()))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Print startup banner
    println!(
        r#"
  Destiny Matrix - Cross-system correlation service
  Version: {}
  Default locale: {}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.default_locale,
        config.server.listen_addr
    );

    // Create and run server
    let server = Server::new(config)?;
    server.run().await
}
