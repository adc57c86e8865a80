mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable that overrides `tmdb.api_token`.
pub const TMDB_TOKEN_ENV: &str = "TMDB_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./movietracker.toml",
        "~/.config/movietracker/config.toml",
        "/etc/movietracker/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(token) = std::env::var(TMDB_TOKEN_ENV) {
        if !token.trim().is_empty() {
            config.tmdb.api_token = token.trim().to_string();
        }
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.tmdb.base_url.trim().is_empty() {
        anyhow::bail!("TMDB base URL cannot be empty");
    }

    if config.tmdb.request_timeout_secs == 0 {
        anyhow::bail!("TMDB request timeout must be greater than 0");
    }

    if config.curation.locale.trim().is_empty() {
        anyhow::bail!("Curation locale cannot be empty");
    }

    if !(0.0..=10.0).contains(&config.curation.min_vote_average) {
        anyhow::bail!(
            "Curation min_vote_average must be between 0 and 10, got {}",
            config.curation.min_vote_average
        );
    }

    if config.tmdb.api_token.is_empty() {
        tracing::warn!(
            "No TMDB API token configured; set tmdb.api_token or {}",
            TMDB_TOKEN_ENV
        );
    }

    Ok(())
}

/// Fail unless a TMDB API token is configured.
pub fn require_api_token(config: &Config) -> Result<()> {
    if config.tmdb.api_token.is_empty() {
        anyhow::bail!(
            "TMDB API token is required; set tmdb.api_token or {}",
            TMDB_TOKEN_ENV
        );
    }
    Ok(())
}
