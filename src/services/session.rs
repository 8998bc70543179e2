//! Shared-secret session gate

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Single shared session opened by the configured secret
#[derive(Clone)]
pub struct SessionService {
    secret: String,
    authenticated: Arc<AtomicBool>,
}

impl SessionService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.shared_secret.clone(),
            authenticated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Open the session when `secret` matches. Returns whether it did.
    pub fn login(&self, secret: &str) -> bool {
        let ok = secret == self.secret;
        if ok {
            self.authenticated.store(true, Ordering::SeqCst);
            tracing::info!("Session opened");
        } else {
            tracing::warn!("Login refused: wrong secret");
        }
        ok
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        tracing::info!("Session closed");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub fn require(&self) -> AppResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Authentication("Session is not open".to_string()))
        }
    }
}
