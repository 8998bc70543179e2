use std::time::Duration;

use gmao::{
    models::{
        equipment::CreateEquipment, request::CreateRequest, work_order::CreateWorkOrder,
        RequestStatus, WorkOrderStatus,
    },
    repository::Repository,
    AppConfig, AppError, AppState,
};

use tokio_test::{assert_err, assert_ok};

use crate::common::logged_in;

fn leak_report(title: &str) -> CreateRequest {
    CreateRequest {
        equipment_id: Some("eq-1".into()),
        requester_id: "2".into(),
        title: title.into(),
        description: "Oil under the main cylinder".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn services_stay_closed_until_login() {
    let state = AppState::new(AppConfig::default(), Repository::seeded(Duration::ZERO).await);
    assert!(matches!(state.services(), Err(AppError::Authentication(_))));

    assert!(!state.session.login("wrong"));
    assert!(state.services().is_err());

    assert!(state.session.login("admin123"));
    assert!(state.services().is_ok());

    state.session.logout();
    assert!(state.services().is_err());
}

#[tokio::test]
async fn equipment_codes_continue_from_the_last_one() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    assert_eq!(services.equipment.next_code().await, "EQ-003");
    let created = services
        .equipment
        .create(CreateEquipment {
            name: "Conveyor".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.code, "EQ-003");
    assert_eq!(services.equipment.next_code().await, "EQ-004");
}

#[tokio::test]
async fn approved_request_converts_into_a_linked_work_order() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let request = services.requests.create(leak_report("Leak")).await.unwrap();
    assert_eq!(request.number, "DI-2024-001");
    assert_eq!(request.status, RequestStatus::New);
    assert_eq!(
        request.requester.as_ref().map(|p| p.full_name()).as_deref(),
        Some("Sara Bennani")
    );

    let approved = services.requests.approve(&request.id, "1").await.unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(approved.validated_by.as_deref(), Some("1"));
    assert!(approved.validated_at.is_some());

    let work_order = services
        .requests
        .convert_to_work_order(&request.id, CreateWorkOrder::from(&approved))
        .await
        .unwrap();
    assert_eq!(work_order.number, "OT-2024-001");
    assert_eq!(work_order.request_id.as_deref(), Some(request.id.as_str()));
    assert_eq!(work_order.equipment_id.as_deref(), Some("eq-1"));
    assert_eq!(work_order.title, "Leak");

    let converted = services.requests.get(&request.id).await.unwrap();
    assert_eq!(converted.status, RequestStatus::ConvertedToWo);
    assert_eq!(converted.work_order_id.as_deref(), Some(work_order.id.as_str()));

    let second = services.requests.create(leak_report("Second")).await.unwrap();
    assert_eq!(second.number, "DI-2024-002");
}

#[tokio::test]
async fn rejection_keeps_the_reason() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let request = services.requests.create(leak_report("Leak")).await.unwrap();
    let rejected = services
        .requests
        .reject(&request.id, "1", "Duplicate of DI-2024-000")
        .await
        .unwrap();

    assert_eq!(rejected.status, RequestStatus::Rejected);
    assert_eq!(
        rejected.validation_comment.as_deref(),
        Some("Duplicate of DI-2024-000")
    );
    assert!(rejected.work_order_id.is_none());
}

#[tokio::test]
async fn work_order_status_changes_stamp_actual_dates() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let order = services
        .work_orders
        .create(CreateWorkOrder {
            equipment_id: Some("eq-2".into()),
            technician_id: Some("tech-1".into()),
            title: "Replace pressure switch".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(order.status, WorkOrderStatus::Planned);
    assert!(order.technician.is_some());

    let started = services
        .work_orders
        .update_status(&order.id, WorkOrderStatus::InProgress)
        .await
        .unwrap();
    let actual_start = started.actual_start.unwrap();
    assert!(actual_start >= order.created_at);
    assert!(started.actual_end.is_none());

    let done = services
        .work_orders
        .update_status(&order.id, WorkOrderStatus::Done)
        .await
        .unwrap();
    assert_eq!(done.actual_start, started.actual_start);
    assert!(done.actual_end.unwrap() >= actual_start);

    let stats = services.stats.work_orders().await;
    assert_eq!(stats.open, 0);
    assert_eq!(stats.done, 1);
}

#[tokio::test]
async fn unknown_ids_fail_on_update_but_not_on_soft_delete() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    assert!(matches!(
        services.requests.approve("request-404", "1").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        services.equipment.get_by_id("eq-404").await,
        Err(AppError::NotFound(_))
    ));
    assert_err!(services.stock.get("part-404").await);
    assert_ok!(services.equipment.delete("eq-404").await);
    assert_ok!(services.stock.delete("part-404").await);

    assert_ok!(services.equipment.delete("eq-1").await);
    let kept = assert_ok!(services.equipment.get_by_id("eq-1").await);
    assert!(!kept.active);
}

#[tokio::test]
async fn converting_an_unknown_request_leaves_the_work_order_behind() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let result = services
        .requests
        .convert_to_work_order(
            "request-404",
            CreateWorkOrder {
                title: "Orphan".into(),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let orders = services.work_orders.list().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].request_id.as_deref(), Some("request-404"));
}
