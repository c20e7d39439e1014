//! LensLocker Camera Gear Rental Marketplace
//!
//! A Rust implementation of the LensLocker marketplace server, providing a
//! REST JSON API for browsing rentable camera gear, pricing rental carts,
//! placing rental orders, and managing user accounts.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
