//! # LiveWidget Main Entry Point
//!
//! Mounts the dashboard widgets and paints them to the terminal.

use anyhow::Result;
use livewidget::cmd_args::CommandLineArgs;
use livewidget::config::{self, WidgetConfig};
use livewidget::{AppController, TerminalRenderer};
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose());

    let config_path = args
        .config()
        .cloned()
        .unwrap_or_else(config::get_config_path);
    let mut widget_config = WidgetConfig::load(&config_path)?;
    widget_config.apply_args(&args)?;
    tracing::debug!("Resolved config: {:?}", widget_config);

    let mut app = AppController::new(&widget_config, TerminalRenderer::stdout())?;
    app.run().await
}

/// Logs go to stderr.
/// `RUST_LOG` wins over `LIVEWIDGET_LOG_LEVEL` when both are set.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "error" };
    let log_level = std::env::var(config::LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| fallback.to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        _ => Level::ERROR,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
