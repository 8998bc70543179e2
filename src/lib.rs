//! GMAO maintenance management core
//!
//! Equipment, intervention requests, work orders, preventive plans, spare
//! parts and suppliers over an in-memory store with simulated latency.

use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use clock::{Clock, SystemClock};
use repository::Repository;
use services::{session::SessionService, Services};

/// Application state: configuration, the session gate and the services
/// behind it
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: SessionService,
    services: Arc<Services>,
}

impl AppState {
    pub fn new(config: AppConfig, repository: Repository) -> Self {
        Self::with_clock(config, repository, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, repository: Repository, clock: Arc<dyn Clock>) -> Self {
        let services = Services::new(repository, clock, &config.numbering);
        Self {
            session: SessionService::new(&config.auth),
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    /// The services, reachable only once the session is open
    pub fn services(&self) -> AppResult<&Services> {
        self.session.require()?;
        Ok(&self.services)
    }
}
