//! GMAO - maintenance management demo
//!
//! Builds a seeded in-memory store, opens the session and logs a dashboard
//! snapshot after walking one request through its lifecycle.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gmao::{
    config::AppConfig,
    models::{
        request::CreateRequest, work_order::CreateWorkOrder, MovementDirection, WorkOrderStatus,
    },
    repository::Repository,
    services::export::RequestSheet,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gmao={}", config.logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting GMAO v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::seeded(config.store.latency()).await;
    let secret = config.auth.shared_secret.clone();
    let state = AppState::new(config, repository);

    if !state.session.login(&secret) {
        anyhow::bail!("Configured secret was refused");
    }
    let services = state.services()?;

    let request = services
        .requests
        .create(CreateRequest {
            equipment_id: Some("eq-2".into()),
            requester_id: "1".into(),
            title: "Compressor trips on start".into(),
            description: "Thermal protection trips a few seconds after start-up".into(),
            ..Default::default()
        })
        .await?;
    services.requests.approve(&request.id, "1").await?;

    let draft = CreateWorkOrder {
        technician_id: Some("tech-1".into()),
        ..CreateWorkOrder::from(&request)
    };
    let work_order = services
        .requests
        .convert_to_work_order(&request.id, draft)
        .await?;
    services
        .work_orders
        .update_status(&work_order.id, WorkOrderStatus::InProgress)
        .await?;
    services
        .stock
        .apply_movement(
            "part-1",
            MovementDirection::Out,
            rust_decimal::Decimal::from(2),
            &work_order.number,
        )
        .await?;
    services
        .work_orders
        .update_status(&work_order.id, WorkOrderStatus::Done)
        .await?;

    let converted = services.requests.get(&request.id).await?;
    for line in RequestSheet::from(&converted).render_text(72) {
        tracing::info!("{}", line);
    }

    let dashboard = services.stats.dashboard().await;
    tracing::info!("Dashboard: {}", serde_json::to_string(&dashboard)?);

    state.session.logout();
    Ok(())
}
