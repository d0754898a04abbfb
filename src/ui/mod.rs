// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`map`] - Clustered network map with a two-level disclosure flow
//! - [`services`] - Rotating service tab panels
//! - [`highlights`] - Features/Reviews tabs and the review carousel
//! - [`faq`] - Collapsible FAQ entries
//! - [`settings`] - Application preferences and configuration
//!
//! # Shared Infrastructure
//!
//! - [`rotator`] - Auto-advancing panel selector state machine
//! - [`stats`] - Count-up statistics banner
//! - [`navbar`] - Navigation bar with dropdown menus
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod faq;
pub mod highlights;
pub mod map;
pub mod navbar;
pub mod rotator;
pub mod services;
pub mod settings;
pub mod stats;
pub mod styles;
pub mod theming;
