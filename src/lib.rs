//! Nikolaus Tours
//!
//! Booking funnel for the St. Nikolaus tour site: tour booking form, mock
//! payment, thank-you confirmation, a demo contact form and the shared
//! layout with language switching. Pages are driven through the
//! [`dom::Document`] and [`dom::Window`] traits; the binary hosts the static
//! site the funnel runs on.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod pages;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
