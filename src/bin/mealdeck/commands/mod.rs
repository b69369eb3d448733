// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for the mealdeck CLI
// ABOUTME: Provides access to list views and single-recipe commands

pub mod recipes;
pub mod views;
