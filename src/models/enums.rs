//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// Operational state of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    #[default]
    InService,
    BrokenDown,
    InMaintenance,
    OutOfService,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

// ---------------------------------------------------------------------------
// Requests and work orders
// ---------------------------------------------------------------------------

/// Priority shared by intervention requests and work orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "LOW",
            Priority::Normal => "NORMAL",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    #[default]
    Breakdown,
    Anomaly,
    Improvement,
    Installation,
    Other,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestType::Breakdown => "BREAKDOWN",
            RequestType::Anomaly => "ANOMALY",
            RequestType::Improvement => "IMPROVEMENT",
            RequestType::Installation => "INSTALLATION",
            RequestType::Other => "OTHER",
        };
        write!(f, "{}", label)
    }
}

/// Lifecycle of an intervention request.
///
/// `New -> (InEvaluation) -> Approved | Rejected`, `Approved -> ConvertedToWo`,
/// and anything but `ConvertedToWo` may be moved to `Cancelled`. Transitions
/// are not guarded: the caller decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    New,
    InEvaluation,
    Approved,
    Rejected,
    ConvertedToWo,
    Cancelled,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RequestStatus::Rejected | RequestStatus::ConvertedToWo | RequestStatus::Cancelled
        )
    }

    /// Still waiting for a validation decision
    pub fn is_awaiting_validation(self) -> bool {
        matches!(self, RequestStatus::New | RequestStatus::InEvaluation)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::New => "NEW",
            RequestStatus::InEvaluation => "IN EVALUATION",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::ConvertedToWo => "CONVERTED TO WORK ORDER",
            RequestStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    #[default]
    Corrective,
    Preventive,
    Predictive,
    Improvement,
}

/// Work order status; any status may move to any other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Planned,
    Pending,
    InProgress,
    Paused,
    Done,
    Cancelled,
}

impl WorkOrderStatus {
    /// Counted as ongoing work on the dashboard
    pub fn is_open(self) -> bool {
        matches!(
            self,
            WorkOrderStatus::Planned | WorkOrderStatus::InProgress | WorkOrderStatus::Pending
        )
    }
}

// ---------------------------------------------------------------------------
// Preventive maintenance and staff
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    #[default]
    Calendar,
    Counter,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicianLevel {
    #[default]
    Junior,
    Confirmed,
    Senior,
    Expert,
}

// ---------------------------------------------------------------------------
// Stock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Unit,
    Kg,
    Liter,
    Meter,
    Box,
    Lot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementDirection {
    In,
    Out,
}

/// Stock health of a part relative to its minimum threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Critical,
    Low,
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierType {
    #[default]
    Parts,
    Services,
    Mixed,
}
