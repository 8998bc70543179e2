use std::time::Duration;

use gmao::{repository::Repository, AppConfig, AppState};

/// Seeded state with no store latency and the session open
pub async fn logged_in() -> AppState {
    let state = AppState::new(AppConfig::default(), Repository::seeded(Duration::ZERO).await);
    assert!(state.session.login("admin123"));
    state
}
