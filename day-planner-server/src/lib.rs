pub mod config;
pub mod controller;
pub mod error;
pub mod health;
pub mod state;
pub mod store;
pub mod web;

pub use config::{AppConfig, StoreKind};
pub use controller::ActivitiesController;
pub use error::AppError;
pub use state::AppState;

#[cfg(test)]
pub mod test_utils;
