//! AI Slides entry shell
//!
//! The landing page and upload page of the AI Slides web application,
//! rendered by Axum as HTML and connected by HTMX swaps.
//!
//! # Architecture
//!
//! - **Server**: Axum routes serving full documents or HTMX fragments
//! - **Navigation**: Route model, transition table and injected callbacks
//! - **UI**: String-rendered views + HTMX + Alpine.js + CSS animations
//!
//! # Modules
//!
//! - [`config`]: Layered CLI / file / environment configuration
//! - [`error`]: Error types
//! - [`navigation`]: Routes, transitions, callbacks and the navigator
//! - [`server`]: Router, handlers and middleware
//! - [`ui`]: Views and components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod error;
pub mod navigation;
pub mod server;
pub mod ui;

use crate::config::AppConfig;
use crate::ui::app::ShellContext;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Brand settings and upload workflow handed to the views.
    pub shell: ShellContext,
}

impl AppState {
    /// Build the state for `config`, embedding the configured drop zone.
    #[must_use]
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let shell = ShellContext {
            brand: config.brand_config(),
            upload_step: Arc::new(config.upload_step()),
        };
        Self { config, shell }
    }
}
