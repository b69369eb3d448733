// ABOUTME: Core types and constants for the Mealdeck recipe browser
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealdeck Core
//!
//! Foundation crate providing shared types and constants for the Mealdeck
//! recipe browser. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Remote API endpoints, storage keys, and view defaults
//! - **models**: The `Recipe` record and its ingredients

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Recipe`, `Ingredient`)
pub mod models;
