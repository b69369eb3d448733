// ABOUTME: Environment configuration management for the recipe browser
// ABOUTME: Parses API base URL, data directory, HTTP timeouts, and view limits from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{env_vars, http, mealdb, storage, views};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: http::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote API base `URL`, always ending in `/`
    pub api_base_url: Url,
    /// Directory holding durable storage slots
    pub data_dir: PathBuf,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
    /// TTL for cached recipe details in seconds
    pub detail_cache_ttl_secs: u64,
    /// Number of recipes in the trending view
    pub trending_limit: usize,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparseable or
    /// out-of-range value
    pub fn from_env() -> AppResult<Self> {
        let api_base_url = match env::var(env_vars::API_BASE_URL) {
            Ok(raw) => parse_base_url(&raw)?,
            Err(_) => parse_base_url(mealdb::DEFAULT_BASE_URL)?,
        };

        let data_dir = env::var(env_vars::DATA_DIR)
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let http = HttpClientConfig {
            timeout_secs: parse_positive(env_vars::HTTP_TIMEOUT_SECS, http::DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_positive(
                env_vars::HTTP_CONNECT_TIMEOUT_SECS,
                http::DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let config = Self {
            api_base_url,
            data_dir,
            http,
            detail_cache_ttl_secs: parse_env(
                env_vars::DETAIL_CACHE_TTL_SECS,
                http::DEFAULT_DETAIL_CACHE_TTL_SECS,
            )?,
            trending_limit: parse_positive(
                env_vars::TRENDING_LIMIT,
                views::DEFAULT_TRENDING_LIMIT,
            )?,
        };

        config.log_summary();
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the API `URL` override is not a valid http(s) `URL`
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        data_dir: Option<&Path>,
    ) -> AppResult<Self> {
        if let Some(raw) = api_base_url {
            self.api_base_url = parse_base_url(raw)?;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir.to_path_buf();
        }
        Ok(self)
    }

    fn log_summary(&self) {
        info!(
            api.base_url = %self.api_base_url,
            storage.data_dir = %self.data_dir.display(),
            http.timeout_secs = self.http.timeout_secs,
            http.connect_timeout_secs = self.http.connect_timeout_secs,
            "Configuration loaded"
        );
    }
}

/// Parse and normalize the API base `URL`
///
/// A trailing `/` is appended when missing so endpoint paths join beneath it.
///
/// # Errors
///
/// Returns `ConfigInvalid` for unparseable `URL`s or non-http(s) schemes
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&normalized).map_err(|e| {
        AppError::config_invalid(format!("{}: invalid URL '{raw}': {e}", env_vars::API_BASE_URL))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::config_invalid(format!(
            "{}: unsupported scheme '{other}'",
            env_vars::API_BASE_URL
        ))),
    }
}

/// Platform data directory for Mealdeck, or `./data` when there is none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(storage::FALLBACK_DATA_DIR),
        |dir| dir.join(storage::DATA_DIR_NAME),
    )
}

fn parse_env<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config_invalid(format!("{name}: cannot parse '{raw}'"))
        }),
        Err(_) => {
            debug!("{name} not set, using default");
            Ok(default)
        }
    }
}

fn parse_positive<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr + PartialEq + Default,
{
    let value = parse_env(name, default)?;
    if value == T::default() {
        return Err(AppError::config_invalid(format!(
            "{name}: must be greater than zero"
        )));
    }
    Ok(value)
}
