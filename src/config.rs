//! Configuration loader: merges defaults, an optional config.toml, and
//! environment variables.

use std::path::Path;

use common::config::WatchConfig;
use common::Error;

fn validate_config(config: &WatchConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    if config.base_url.trim().is_empty() {
        issues.push("base_url must not be empty".into());
    } else if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        issues.push("base_url must start with http:// or https://".into());
    }
    if config.timing.refresh_interval_secs == 0 {
        issues.push("timing.refresh_interval_secs must be > 0".into());
    }
    if config.timing.heartbeat_interval_secs == 0 {
        issues.push("timing.heartbeat_interval_secs must be > 0".into());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Load watcher configuration from defaults, optional config file, and
/// environment (highest priority).
pub fn load_config() -> Result<WatchConfig, Error> {
    // 1. Load .env file if present.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    // 2. Start with defaults.
    let mut config = WatchConfig::default();

    // 3. Try loading config.toml if it exists.
    let config_path = Path::new("config.toml");
    if config_path.exists() {
        let contents = std::fs::read_to_string(config_path)
            .map_err(|e| Error::Config(format!("Failed to read config.toml: {}", e)))?;
        config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config.toml: {}", e)))?;
    }

    // 4. Override with environment variables.
    if let Ok(url) = std::env::var("PREDICT_API_BASE_URL") {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            config.base_url = trimmed.trim_end_matches('/').to_string();
        }
    }
    if let Ok(raw) = std::env::var("REFRESH_INTERVAL_SECS") {
        let parsed = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::Config("REFRESH_INTERVAL_SECS must be an integer > 0".into()))?;
        if parsed == 0 {
            return Err(Error::Config(
                "REFRESH_INTERVAL_SECS must be an integer > 0".into(),
            ));
        }
        config.timing.refresh_interval_secs = parsed;
    }

    validate_config(&config)?;

    Ok(config)
}
