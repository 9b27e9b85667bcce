use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::input::LoadOptions;

/// Renderer configuration loaded from environment variables.
/// Fails at startup if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub escape_latex: bool,
    pub strict: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            input_path: PathBuf::from(require_env("RESUME_INPUT")?),
            escape_latex: bool_env("RESUME_ESCAPE_LATEX")?,
            strict: bool_env("RESUME_STRICT")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            escape_latex: self.escape_latex,
            strict: self.strict,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional boolean flag; unset means `false`.
fn bool_env(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(value) => parse_bool(&value).with_context(|| format!("{key} must be a boolean")),
        Err(_) => Ok(false),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}
