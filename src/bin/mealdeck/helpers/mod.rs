// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for the mealdeck CLI
// ABOUTME: Provides access to view and recipe display formatting

pub mod display;
