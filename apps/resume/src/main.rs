use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume::config::Config;
use resume::input::load_document;

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the LaTeX source.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume renderer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Input: {} (escape_latex={}, strict={})",
        config.input_path.display(),
        config.escape_latex,
        config.strict
    );

    let document = load_document(&config.input_path, &config.load_options())
        .with_context(|| format!("Could not load {}", config.input_path.display()))?;

    print!("{}", document.render());
    Ok(())
}
