//! sheetform
//!
//! Resolves a payment form configuration file into the settings a form
//! builder would read, printed as JSON.

mod config;

use clap::Parser;
use config::ConfigLoader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// sheetform - resolve payment form settings from a configuration file
#[derive(Parser, Debug)]
#[command(name = "sheetform")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "SHEETFORM_CONFIG", default_value = "./sheetform.toml")]
    config: PathBuf,

    /// Pretty-print the resolved settings
    #[arg(long, default_value = "false")]
    pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long, default_value = "false")]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.json_logs);

    tracing::info!("Starting sheetform v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = ConfigLoader::new(&args.config).load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!(flow = %config.flow(), "Configuration loaded from {:?}", args.config);

    let resolved = config.resolve();
    tracing::debug!(
        consent = %resolved.save_payment_method_consent_behavior,
        opt_in = %resolved.save_payment_method_opt_in_behavior,
        "Form settings resolved"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };
    println!("{output}");

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout carries only the resolved settings.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
