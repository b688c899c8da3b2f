// src/config.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::SlugFieldOptions;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug_populate_from: Vec<String>,
    slug_separator: String,
    slug_overwrite: bool,
    slug_max_length: Option<usize>,
    slug_max_save_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://autoslug.db?mode=rwc".into()
}

fn default_populate_from() -> Vec<String> {
    vec!["title".into()]
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got `{value}`")))
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; missing keys fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .map(|v| parse_number::<u32>("DATABASE_MAX_CONNECTIONS", &v))
            .transpose()?
            .unwrap_or(16);

        let slug_populate_from = lookup("SLUG_POPULATE_FROM")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|fields| !fields.is_empty())
            .unwrap_or_else(default_populate_from);

        let slug_separator = lookup("SLUG_SEPARATOR").unwrap_or_else(|| "-".into());

        let slug_overwrite = lookup("SLUG_OVERWRITE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        // 0 disables truncation.
        let slug_max_length = match lookup("SLUG_MAX_LENGTH") {
            Some(v) => match parse_number::<usize>("SLUG_MAX_LENGTH", &v)? {
                0 => None,
                n => Some(n),
            },
            None => Some(50),
        };

        let slug_max_save_attempts = lookup("SLUG_MAX_SAVE_ATTEMPTS")
            .map(|v| parse_number::<u32>("SLUG_MAX_SAVE_ATTEMPTS", &v))
            .transpose()?
            .unwrap_or(3);
        if slug_max_save_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_SAVE_ATTEMPTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            database_max_connections,
            slug_populate_from,
            slug_separator,
            slug_overwrite,
            slug_max_length,
            slug_max_save_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn slug_max_save_attempts(&self) -> u32 {
        self.slug_max_save_attempts
    }

    /// The configured slug field definition, validated.
    pub fn slug_field_options(&self) -> DomainResult<SlugFieldOptions> {
        SlugFieldOptions::new(self.slug_populate_from.iter().cloned())?
            .with_separator(self.slug_separator.clone())?
            .with_overwrite(self.slug_overwrite)
            .with_max_length(self.slug_max_length)
    }
}
