use std::time::Duration;

use anyhow::{Context, Result};

use crate::latex::{CompilerConfig, TemplateId};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent means analysis and chat run on their canned fallbacks.
    pub anthropic_api_key: Option<String>,
    pub latex_compiler: String,
    pub latex_timeout: Duration,
    pub template: TemplateId,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = var("LATEX_TIMEOUT_SECS")
            .unwrap_or_else(|| "120".to_string())
            .parse::<u64>()
            .context("LATEX_TIMEOUT_SECS must be a whole number of seconds")?;

        let template = match var("RESUME_TEMPLATE") {
            Some(name) => name
                .parse::<TemplateId>()
                .map_err(anyhow::Error::msg)
                .context("RESUME_TEMPLATE is invalid")?,
            None => TemplateId::default(),
        };

        Ok(Config {
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            latex_compiler: var("LATEX_COMPILER").unwrap_or_else(|| "pdflatex".to_string()),
            latex_timeout: Duration::from_secs(timeout_secs),
            template,
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn compiler(&self) -> CompilerConfig {
        CompilerConfig {
            program: self.latex_compiler.clone(),
            timeout: self.latex_timeout,
            ..CompilerConfig::default()
        }
    }
}
