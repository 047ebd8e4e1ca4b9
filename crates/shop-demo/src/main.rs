//! # Mini-Shop RS
//!
//! Runs the catalog walkthrough and prints its report.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export SHOP_LOG_FORMAT=json
//! export RUST_LOG=debug
//!
//! shop-demo
//! ```

use shop_demo::{scenario, DemoConfig, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();

    init_tracing(config.log_format);

    if config.show_banner {
        print_banner();
    }

    let report = scenario::run()?;
    print!("{report}");

    info!(
        products = report.products.len(),
        receipts = report.receipts.len(),
        caught_errors = report.errors.len(),
        "walkthrough finished"
    );

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    // Logs go to stderr so the report on stdout stays clean
    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

fn print_banner() {
    println!(
        r#"
  🛒 Mini-Shop RS 🛒
  ━━━━━━━━━━━━━━━━━━━━━━━
  In-memory catalog walkthrough
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
