//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::api_facade::ApiFacade;
use crate::utils::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<ApiFacade>,
    pub config: EnvironmentConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(facade: Arc<ApiFacade>, config: EnvironmentConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            facade,
            config,
            clock,
        }
    }
}
