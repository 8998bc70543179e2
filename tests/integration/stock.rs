use gmao::{
    models::{part::CreatePart, MovementDirection, StockLevel},
    AppError,
};
use rust_decimal::Decimal;

use crate::common::logged_in;

#[tokio::test]
async fn movements_move_a_part_between_stock_levels() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let part = services
        .stock
        .create(CreatePart {
            code: "REF-1".into(),
            designation: "Seal kit".into(),
            minimum: Some(Decimal::from(5)),
            on_hand: Some(Decimal::ZERO),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(part.stock_level(), StockLevel::Critical);

    let part = services
        .stock
        .apply_movement(&part.id, MovementDirection::In, Decimal::from(10), "Delivery")
        .await
        .unwrap();
    assert_eq!(part.on_hand, Decimal::from(10));
    assert_eq!(part.stock_level(), StockLevel::Ok);

    let part = services
        .stock
        .apply_movement(&part.id, MovementDirection::Out, Decimal::from(8), "OT-2024-001")
        .await
        .unwrap();
    assert_eq!(part.on_hand, Decimal::from(2));
    assert_eq!(part.stock_level(), StockLevel::Critical);

    let ledger = services.stock.movements(&part.id).await;
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[1].reason, "OT-2024-001");
    assert_eq!(ledger[1].quantity_before, Decimal::from(10));
}

#[tokio::test]
async fn withdrawals_never_drive_stock_negative() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let part = services
        .stock
        .apply_movement("part-1", MovementDirection::Out, Decimal::from(50), "Overhaul")
        .await
        .unwrap();
    assert_eq!(part.on_hand, Decimal::ZERO);

    let stats = services.stock.stats().await;
    assert_eq!(stats.critical, 1);
    assert_eq!(stats.to_reorder, 1);
    assert_eq!(stats.total_value, Decimal::ZERO);
}

#[tokio::test]
async fn movements_on_unknown_parts_are_not_found() {
    let state = logged_in().await;
    let services = state.services().unwrap();

    let result = services
        .stock
        .apply_movement("part-404", MovementDirection::In, Decimal::ONE, "Delivery")
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(services.stock.movements("part-404").await.is_empty());
}

#[tokio::test]
async fn in_then_out_restores_the_quantity() {
    let state = logged_in().await;
    let services = state.services().unwrap();
    let original = services.stock.get("part-1").await.unwrap().on_hand;

    let quantity = Decimal::new(75, 1);
    services
        .stock
        .apply_movement("part-1", MovementDirection::In, quantity, "Delivery")
        .await
        .unwrap();
    let part = services
        .stock
        .apply_movement("part-1", MovementDirection::Out, quantity, "Return")
        .await
        .unwrap();

    assert_eq!(part.on_hand, original);
}
