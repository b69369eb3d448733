// ABOUTME: Configuration management module for the recipe browser
// ABOUTME: Re-exports the environment-driven AppConfig and its HTTP settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Mealdeck
//!
//! Configuration is environment-only; command-line flags override selected
//! values through [`AppConfig::with_overrides`].

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, HttpClientConfig};
