//! Equipment model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Criticality, EquipmentStatus};
use super::reference::{EquipmentCategory, Site};

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    /// Sequential code (`EQ-NNN`)
    pub code: String,
    pub name: String,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub site_id: Option<String>,
    pub status: EquipmentStatus,
    pub criticality: Criticality,
    pub purchase_value: Option<Decimal>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    /// Snapshot of the category at write time
    pub category: Option<EquipmentCategory>,
    /// Snapshot of the site at write time
    pub site: Option<Site>,
}

/// Create equipment request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEquipment {
    /// Assigned from the last code when absent
    pub code: Option<String>,
    pub name: String,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub site_id: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub criticality: Option<Criticality>,
    pub purchase_value: Option<Decimal>,
    pub description: Option<String>,
}

/// Update equipment request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEquipment {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub site_id: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub criticality: Option<Criticality>,
    pub purchase_value: Option<Decimal>,
    pub description: Option<String>,
    pub active: Option<bool>,
}
