use crate::config::CafeConfig;
use crate::database::{CafeRepository, ReservationRepository};
use std::sync::Arc;

pub mod app;
pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod features;
pub mod logging;
pub mod services;

#[cfg(test)]
mod tests;

/// Shared by every handler. Built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub cafes: Arc<dyn CafeRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub config: Arc<CafeConfig>,
}
