//! Configuration management for the Nikolaus Tours site

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// A layout slot filled with a shared markup fragment on every page
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FragmentConfig {
    /// Identifier of the element receiving the fragment
    pub slot: String,
    /// Resource path, relative to the site root
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory holding pages, components and locale dictionaries
    pub root: PathBuf,
    pub fragments: Vec<FragmentConfig>,
    pub locales_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocaleConfig {
    pub default_language: String,
    pub languages: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (with prefix NIKOLAUS_)
            .add_source(
                Environment::with_prefix("NIKOLAUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("site.root", env::var("SITE_ROOT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl SiteConfig {
    /// Path of the dictionary for a language, relative to the site root
    pub fn locale_path(&self, lang: &str) -> String {
        format!("{}/{}.json", self.locales_dir.trim_end_matches('/'), lang)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            fragments: vec![
                FragmentConfig {
                    slot: "site-header".to_string(),
                    path: "components/header.html".to_string(),
                },
                FragmentConfig {
                    slot: "site-footer".to_string(),
                    path: "components/footer.html".to_string(),
                },
            ],
            locales_dir: "locales".to_string(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            languages: vec!["en".to_string(), "de".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fragments() {
        let site = SiteConfig::default();
        let slots: Vec<&str> = site.fragments.iter().map(|f| f.slot.as_str()).collect();
        assert_eq!(slots, vec!["site-header", "site-footer"]);
    }

    #[test]
    fn test_locale_path() {
        let mut site = SiteConfig::default();
        assert_eq!(site.locale_path("en"), "locales/en.json");

        site.locales_dir = "i18n/".to_string();
        assert_eq!(site.locale_path("de"), "i18n/de.json");
    }
}
