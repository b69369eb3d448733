// ABOUTME: View-state services coordinating the favorites store and the remote source
// ABOUTME: Exposes the synchronizer, view state types, and request sequencing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Services
//!
//! - **`recipe_view`**: the view synchronizer (annotate, select view, search, toggle)
//! - **`view_state`**: renderable view types and the user-facing message channel
//! - **`sequence`**: request tickets that keep stale responses from replacing newer views

/// View synchronizer
pub mod recipe_view;
/// Request sequencing for out-of-order responses
pub mod sequence;
/// Renderable view state
pub mod view_state;

pub use recipe_view::{PendingView, ResolvedView, ViewRequest, ViewSynchronizer};
pub use sequence::{ViewSequence, ViewTicket};
pub use view_state::{
    AnnotatedRecipe, RecipeDetail, RecipeView, ToggleResult, ViewKind, ViewMessage,
};
