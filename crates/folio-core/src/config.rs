//! Site configuration management.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    theme::Theme,
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Contact form relay settings.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Theme persistence settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Static file server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used for the document title suffix.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    #[serde(default)]
    pub base_url: String,
}

/// Contact form relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Endpoint the contact form POSTs to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// How long the success banner stays up after a submission, in milliseconds.
    #[serde(default = "default_success_window_ms")]
    pub success_window_ms: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Display time for notifications that do not set their own.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,

    /// Maximum number of notifications visible at once.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Local storage key holding the preference.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Theme used when nothing is stored.
    #[serde(default)]
    pub default: Theme,
}

/// Static server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory holding the built site.
    #[serde(default = "default_root")]
    pub root: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_endpoint() -> String {
    "https://formspree.io/f/xjkodypy".to_string()
}

fn default_success_window_ms() -> u64 {
    5000
}

fn default_duration_ms() -> u64 {
    4000
}

fn default_max_visible() -> usize {
    5
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_root() -> String {
    "target/site".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            success_window_ms: default_success_window_ms(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            max_visible: default_max_visible(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default: Theme::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            port: default_port(),
        }
    }
}

impl ContactConfig {
    /// The success window as a duration.
    pub fn success_window(&self) -> Duration {
        Duration::from_millis(self.success_window_ms)
    }
}

impl NotificationConfig {
    /// The default display time as a duration.
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO__SECTION__KEY` environment overrides.
    #[cfg(feature = "env")]
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.contact.endpoint.trim().is_empty() {
            return Err(CoreError::config("contact.endpoint cannot be empty"));
        }

        if self.notifications.max_visible == 0 {
            return Err(CoreError::config(
                "notifications.max_visible must be at least 1",
            ));
        }

        if !self.contact.endpoint.starts_with("https://") {
            tracing::warn!(
                endpoint = %self.contact.endpoint,
                "contact.endpoint is not served over https"
            );
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Folio"
base_url = "https://example.com"

[contact]
endpoint = "https://relay.example.com/f/abc"
success_window_ms = 3000

[notifications]
default_duration_ms = 2500
max_visible = 3

[theme]
storage_key = "folio-theme"
default = "dark"

[server]
root = "dist"
port = 8080
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Folio");
        assert_eq!(config.contact.endpoint, "https://relay.example.com/f/abc");
        assert_eq!(config.contact.success_window(), Duration::from_millis(3000));
        assert_eq!(
            config.notifications.default_duration(),
            Duration::from_millis(2500)
        );
        assert_eq!(config.notifications.max_visible, 3);
        assert_eq!(config.theme.storage_key, "folio-theme");
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.server.root, "dist");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Minimal"
"#,
        )
        .expect("parse config");

        assert_eq!(config.contact.endpoint, "https://formspree.io/f/xjkodypy");
        assert_eq!(config.contact.success_window_ms, 5000);
        assert_eq!(config.notifications.default_duration_ms, 4000);
        assert_eq!(config.notifications.max_visible, 5);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_url_for() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Test"
base_url = "https://example.com/"
"#,
        )
        .expect("parse config");

        assert_eq!(config.url_for("/blogs/1"), "https://example.com/blogs/1");
        assert_eq!(config.url_for("contact"), "https://example.com/contact");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml_str(
            r#"
[site]
title = "  "
"#,
        );
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_zero_cap() {
        let result = Config::from_toml_str(
            r#"
[site]
title = "Test"

[notifications]
max_visible = 0
"#,
        );
        assert!(result.unwrap_err().to_string().contains("max_visible"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/folio.toml"));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
