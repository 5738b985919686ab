use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Catalog API endpoints. Read once at startup; the poster base URL is
/// immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the movie catalog/favourites API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL posters are served from
    #[serde(default = "default_images_base_url")]
    pub images_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            images_base_url: default_images_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_images_base_url() -> String {
    "http://localhost:4000".to_string()
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "marquee", "Marquee")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, writing defaults");
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Full URL a movie's poster is served from.
    pub fn poster_url(&self, poster: &str) -> String {
        format!(
            "{}/images/{}",
            self.api.images_base_url.trim_end_matches('/'),
            poster
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        let config = Config::default();
        assert_eq!(
            config.poster_url("dune.jpg"),
            "http://localhost:4000/images/dune.jpg"
        );

        let mut config = Config::default();
        config.api.images_base_url = "https://cdn.example.com/".to_string();
        assert_eq!(
            config.poster_url("dune.jpg"),
            "https://cdn.example.com/images/dune.jpg"
        );
    }
}
