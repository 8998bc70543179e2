//! Spare parts and the stock ledger

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::{
        part::{CreatePart, UpdatePart},
        MovementDirection, Part, PartCategory, StockMovement, StockStats,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StockService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl StockService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn list(&self) -> Vec<Part> {
        self.repository.parts.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Part> {
        self.repository.parts.get_by_id(id).await
    }

    pub async fn create(&self, draft: CreatePart) -> AppResult<Part> {
        let category = self
            .repository
            .part_categories
            .resolve(draft.category_id.as_deref())
            .await;

        let part = Part {
            id: self.repository.next_id::<Part>(),
            code: draft.code,
            designation: draft.designation,
            category_id: draft.category_id,
            manufacturer_ref: draft.manufacturer_ref,
            unit: draft.unit.unwrap_or_default(),
            on_hand: draft.on_hand.unwrap_or_default(),
            minimum: draft.minimum.unwrap_or_default(),
            maximum: draft.maximum,
            reorder_point: draft.reorder_point,
            location: draft.location.unwrap_or_default(),
            unit_price: draft.unit_price,
            critical: draft.critical.unwrap_or(false),
            supplier_id: draft.supplier_id,
            active: true,
            category,
        };

        Ok(self.repository.parts.insert(part).await)
    }

    pub async fn update(&self, id: &str, patch: UpdatePart) -> AppResult<Part> {
        let category = self
            .repository
            .part_categories
            .resolve_patch(patch.category_id.as_deref())
            .await;

        self.repository
            .parts
            .update_by_id(id, |part| {
                merge!(part, patch;
                    set: [code, designation, unit, on_hand, minimum, location, critical, active];
                    opt: [
                        category_id, manufacturer_ref, maximum, reorder_point, unit_price,
                        supplier_id,
                    ]);
                part.on_hand = part.on_hand.max(Decimal::ZERO);
                if let Some(category) = category {
                    part.category = category;
                }
            })
            .await
    }

    /// Soft delete; unknown ids are ignored
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.parts.soft_delete(id).await;
        Ok(())
    }

    pub async fn categories(&self) -> Vec<PartCategory> {
        self.repository.part_categories.list().await
    }

    /// Add or withdraw `quantity` (expected positive) from a part.
    ///
    /// The on-hand quantity is floored at zero without reporting the
    /// shortfall. Every movement is kept in the ledger with its reason.
    pub async fn apply_movement(
        &self,
        part_id: &str,
        direction: MovementDirection,
        quantity: Decimal,
        reason: &str,
    ) -> AppResult<Part> {
        let mut before = Decimal::ZERO;
        let part = self
            .repository
            .parts
            .update_by_id(part_id, |part| {
                before = part.on_hand;
                part.on_hand = match direction {
                    MovementDirection::In => (part.on_hand + quantity).max(Decimal::ZERO),
                    MovementDirection::Out => (part.on_hand - quantity).max(Decimal::ZERO),
                };
            })
            .await?;

        let movement = StockMovement {
            id: self.repository.next_id::<StockMovement>(),
            part_id: part.id.clone(),
            direction,
            quantity,
            reason: reason.to_string(),
            quantity_before: before,
            quantity_after: part.on_hand,
            created_at: self.clock.now(),
        };
        self.repository.stock_movements.insert(movement).await;

        tracing::info!(
            "Stock {:?} {} on {}: {} -> {}",
            direction,
            quantity,
            part.code,
            before,
            part.on_hand
        );
        Ok(part)
    }

    /// Ledger entries of one part, oldest first
    pub async fn movements(&self, part_id: &str) -> Vec<StockMovement> {
        self.repository
            .stock_movements
            .filter(|m| m.part_id == part_id)
            .await
    }

    /// Counters over active parts, computed from the current collection
    pub async fn stats(&self) -> StockStats {
        StockStats::from_parts(&self.repository.parts.list().await)
    }
}
