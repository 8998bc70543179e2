//! Work order model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{MaintenanceType, Priority, WorkOrderStatus};
use super::equipment::Equipment;
use super::maintenance::Technician;
use super::request::InterventionRequest;

/// Work order (OT): authorized unit of maintenance work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    /// `OT-YYYY-NNN`
    pub number: String,
    /// Intervention request this order was converted from
    pub request_id: Option<String>,
    pub equipment_id: Option<String>,
    pub maintenance_type: MaintenanceType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub status: WorkOrderStatus,
    pub planned_start: Option<DateTime<Utc>>,
    pub planned_end: Option<DateTime<Utc>>,
    pub actual_start: Option<DateTime<Utc>>,
    pub actual_end: Option<DateTime<Utc>>,
    pub planned_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub technician_id: Option<String>,
    pub created_by: Option<String>,
    pub labor_cost: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub equipment: Option<Equipment>,
    pub technician: Option<Technician>,
}

impl WorkOrder {
    /// Labor plus parts, missing amounts counted as zero
    pub fn total_cost(&self) -> Decimal {
        self.labor_cost.unwrap_or_default() + self.parts_cost.unwrap_or_default()
    }
}

/// Work order draft
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWorkOrder {
    pub request_id: Option<String>,
    pub equipment_id: Option<String>,
    pub maintenance_type: Option<MaintenanceType>,
    pub priority: Option<Priority>,
    pub title: String,
    pub description: String,
    pub status: Option<WorkOrderStatus>,
    pub planned_start: Option<DateTime<Utc>>,
    pub planned_end: Option<DateTime<Utc>>,
    pub planned_hours: Option<Decimal>,
    pub technician_id: Option<String>,
    pub created_by: Option<String>,
    pub labor_cost: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
}

impl From<&InterventionRequest> for CreateWorkOrder {
    /// Draft prefilled from a request: title, description, equipment and priority
    fn from(request: &InterventionRequest) -> Self {
        Self {
            equipment_id: request.equipment_id.clone(),
            priority: Some(request.priority),
            title: request.title.clone(),
            description: request.description.clone(),
            ..Default::default()
        }
    }
}

/// Partial update of a work order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorkOrder {
    pub equipment_id: Option<String>,
    pub maintenance_type: Option<MaintenanceType>,
    pub priority: Option<Priority>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<WorkOrderStatus>,
    pub planned_start: Option<DateTime<Utc>>,
    pub planned_end: Option<DateTime<Utc>>,
    pub actual_start: Option<DateTime<Utc>>,
    pub actual_end: Option<DateTime<Utc>>,
    pub planned_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub technician_id: Option<String>,
    pub labor_cost: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
}
