// ABOUTME: Shared HTTP client with connection pooling for remote recipe API calls
// ABOUTME: Singleton pattern with configurable timeouts initialized at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpClientConfig;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<HttpClientConfig> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before the first remote client is built.
/// If not called, the defaults from [`HttpClientConfig::default`] are used.
pub fn initialize_shared_client(config: HttpClientConfig) {
    if CLIENT_TIMEOUTS.set(config).is_err() {
        debug!("Shared HTTP client timeouts already initialized");
    }
}

/// Get the shared HTTP client for remote API calls
///
/// Falls back to default timeouts if `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let config = CLIENT_TIMEOUTS.get().copied().unwrap_or_default();
        build_client(config)
    })
}

/// Build a dedicated client with the given timeouts
#[must_use]
pub fn build_client(config: HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(concat!("mealdeck/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
