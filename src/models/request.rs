//! Intervention request model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Priority, RequestStatus, RequestType};
use super::equipment::Equipment;
use super::reference::Profile;

/// Intervention request (DI): an unscreened report that may become a work order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionRequest {
    pub id: String,
    /// `DI-YYYY-NNN`
    pub number: String,
    pub equipment_id: Option<String>,
    pub requester_id: String,
    pub requesting_department: Option<String>,
    pub desired_date: Option<NaiveDate>,
    pub priority: Priority,
    pub request_type: RequestType,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub status: RequestStatus,
    pub validated_by: Option<String>,
    pub validated_at: Option<DateTime<Utc>>,
    pub validation_comment: Option<String>,
    /// Work order created from this request
    pub work_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub equipment: Option<Equipment>,
    pub requester: Option<Profile>,
}

/// Create request draft
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRequest {
    pub equipment_id: Option<String>,
    pub requester_id: String,
    pub requesting_department: Option<String>,
    pub desired_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub request_type: Option<RequestType>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub status: Option<RequestStatus>,
}

/// Partial update of a request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRequest {
    pub equipment_id: Option<String>,
    pub requester_id: Option<String>,
    pub requesting_department: Option<String>,
    pub desired_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub request_type: Option<RequestType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<RequestStatus>,
    pub validated_by: Option<String>,
    pub validated_at: Option<DateTime<Utc>>,
    pub validation_comment: Option<String>,
    pub work_order_id: Option<String>,
}
