// SPDX-License-Identifier: MPL-2.0
//! `atm_atlas` is a desktop explorer for a crypto ATM network built with
//! the Iced GUI framework.
//!
//! It shows the network on a clustered city map, rotates through service
//! and review panels on a timer, and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/atm_atlas/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
