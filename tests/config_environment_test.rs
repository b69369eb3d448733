// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates defaults, overrides, URL normalization, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealdeck::config::environment::{default_data_dir, parse_base_url};
use mealdeck::config::AppConfig;
use mealdeck::constants::env_vars;
use mealdeck::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::Path;

const ALL_VARS: [&str; 6] = [
    env_vars::API_BASE_URL,
    env_vars::DATA_DIR,
    env_vars::HTTP_TIMEOUT_SECS,
    env_vars::HTTP_CONNECT_TIMEOUT_SECS,
    env_vars::DETAIL_CACHE_TTL_SECS,
    env_vars::TRENDING_LIMIT,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(
        config.api_base_url.as_str(),
        "https://www.themealdb.com/api/json/v1/1/"
    );
    assert_eq!(config.data_dir, default_data_dir());
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.http.connect_timeout_secs, 10);
    assert_eq!(config.detail_cache_ttl_secs, 3600);
    assert_eq!(config.trending_limit, 8);
}

#[test]
#[serial]
fn test_environment_values_are_used() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "http://localhost:9000/api");
    env::set_var(env_vars::DATA_DIR, "/tmp/mealdeck-test");
    env::set_var(env_vars::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_vars::DETAIL_CACHE_TTL_SECS, "0");
    env::set_var(env_vars::TRENDING_LIMIT, " 4 ");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_base_url.as_str(), "http://localhost:9000/api/");
    assert_eq!(config.data_dir, Path::new("/tmp/mealdeck-test"));
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.detail_cache_ttl_secs, 0);
    assert_eq!(config.trending_limit, 4);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    for (name, value) in [
        (env_vars::HTTP_TIMEOUT_SECS, "0"),
        (env_vars::HTTP_CONNECT_TIMEOUT_SECS, "soon"),
        (env_vars::TRENDING_LIMIT, "-1"),
        (env_vars::API_BASE_URL, "ftp://example.test/"),
        (env_vars::API_BASE_URL, "not a url"),
    ] {
        clear_env();
        env::set_var(name, value);
        let err = AppConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{name}={value}");
        assert!(err.message.contains(name), "{}", err.message);
    }
    clear_env();
}

#[test]
#[serial]
fn test_overrides_win_over_environment() {
    clear_env();
    env::set_var(env_vars::DATA_DIR, "/tmp/from-env");

    let config = AppConfig::from_env()
        .unwrap()
        .with_overrides(Some("http://127.0.0.1:8080"), Some(Path::new("/tmp/from-flag")))
        .unwrap();
    clear_env();

    assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:8080/");
    assert_eq!(config.data_dir, Path::new("/tmp/from-flag"));

    let unchanged = config.clone().with_overrides(None, None).unwrap();
    assert_eq!(unchanged.data_dir, config.data_dir);
}

#[test]
fn test_base_url_normalization() {
    let url = parse_base_url("https://www.themealdb.com/api/json/v1/1").unwrap();
    assert_eq!(url.as_str(), "https://www.themealdb.com/api/json/v1/1/");
    assert_eq!(
        url.join("search.php").unwrap().as_str(),
        "https://www.themealdb.com/api/json/v1/1/search.php"
    );

    let url = parse_base_url("  http://localhost:3000/  ").unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/");
}
