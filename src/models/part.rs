//! Spare parts and stock movements

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{MovementDirection, StockLevel, Unit};
use super::reference::PartCategory;

/// Spare part with its on-hand quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub code: String,
    pub designation: String,
    pub category_id: Option<String>,
    pub manufacturer_ref: Option<String>,
    pub unit: Unit,
    /// Floored at zero by movements and updates
    pub on_hand: Decimal,
    pub minimum: Decimal,
    pub maximum: Option<Decimal>,
    pub reorder_point: Option<Decimal>,
    pub location: String,
    pub unit_price: Option<Decimal>,
    pub critical: bool,
    pub supplier_id: Option<String>,
    pub active: bool,
    pub category: Option<PartCategory>,
}

impl Part {
    pub fn stock_level(&self) -> StockLevel {
        if self.on_hand <= self.minimum {
            StockLevel::Critical
        } else if self.on_hand <= self.minimum * Decimal::new(15, 1) {
            StockLevel::Low
        } else {
            StockLevel::Ok
        }
    }

    /// On-hand quantity valued at the unit price (zero when unpriced)
    pub fn stock_value(&self) -> Decimal {
        self.on_hand * self.unit_price.unwrap_or_default()
    }

    pub fn needs_reorder(&self) -> bool {
        self.on_hand <= self.reorder_point.unwrap_or(self.minimum)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePart {
    pub code: String,
    pub designation: String,
    pub category_id: Option<String>,
    pub manufacturer_ref: Option<String>,
    pub unit: Option<Unit>,
    pub on_hand: Option<Decimal>,
    pub minimum: Option<Decimal>,
    pub maximum: Option<Decimal>,
    pub reorder_point: Option<Decimal>,
    pub location: Option<String>,
    pub unit_price: Option<Decimal>,
    pub critical: Option<bool>,
    pub supplier_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePart {
    pub code: Option<String>,
    pub designation: Option<String>,
    pub category_id: Option<String>,
    pub manufacturer_ref: Option<String>,
    pub unit: Option<Unit>,
    pub on_hand: Option<Decimal>,
    pub minimum: Option<Decimal>,
    pub maximum: Option<Decimal>,
    pub reorder_point: Option<Decimal>,
    pub location: Option<String>,
    pub unit_price: Option<Decimal>,
    pub critical: Option<bool>,
    pub supplier_id: Option<String>,
    pub active: Option<bool>,
}

/// One applied stock movement, kept with its reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: String,
    pub part_id: String,
    pub direction: MovementDirection,
    pub quantity: Decimal,
    pub reason: String,
    pub quantity_before: Decimal,
    /// After clamping at zero
    pub quantity_after: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Inventory counters computed on demand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockStats {
    pub total: usize,
    pub critical: usize,
    pub to_reorder: usize,
    pub total_value: Decimal,
}

impl StockStats {
    /// Counters over the active parts of `parts`
    pub fn from_parts(parts: &[Part]) -> Self {
        let active = || parts.iter().filter(|p| p.active);
        Self {
            total: active().count(),
            critical: active().filter(|p| p.on_hand <= p.minimum).count(),
            to_reorder: active().filter(|p| p.needs_reorder()).count(),
            total_value: active().map(Part::stock_value).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(on_hand: i64, minimum: i64) -> Part {
        Part {
            id: "piece-1".into(),
            code: "REF-1".into(),
            designation: "Bearing".into(),
            category_id: None,
            manufacturer_ref: None,
            unit: Unit::Unit,
            on_hand: Decimal::from(on_hand),
            minimum: Decimal::from(minimum),
            maximum: None,
            reorder_point: None,
            location: String::new(),
            unit_price: None,
            critical: false,
            supplier_id: None,
            active: true,
            category: None,
        }
    }

    #[test]
    fn stock_level_thresholds() {
        assert_eq!(part(5, 5).stock_level(), StockLevel::Critical);
        assert_eq!(part(7, 5).stock_level(), StockLevel::Low);
        assert_eq!(part(8, 5).stock_level(), StockLevel::Ok);
        assert_eq!(part(0, 0).stock_level(), StockLevel::Critical);
    }

    #[test]
    fn reorder_point_falls_back_to_minimum() {
        let mut p = part(4, 5);
        assert!(p.needs_reorder());
        p.reorder_point = Some(Decimal::from(3));
        assert!(!p.needs_reorder());
    }
}
