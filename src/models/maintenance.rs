//! Technicians and preventive maintenance plans

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TechnicianLevel, TriggerType};
use super::equipment::Equipment;
use super::reference::{Profile, Specialty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub profile_id: Option<String>,
    pub employee_number: Option<String>,
    pub specialty_id: Option<String>,
    pub level: TechnicianLevel,
    pub hourly_rate: Option<Decimal>,
    pub available: bool,
    pub hired_on: Option<NaiveDate>,
    pub profile: Option<Profile>,
    pub specialty: Option<Specialty>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTechnician {
    pub profile_id: Option<String>,
    pub employee_number: Option<String>,
    pub specialty_id: Option<String>,
    pub level: Option<TechnicianLevel>,
    pub hourly_rate: Option<Decimal>,
    pub hired_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTechnician {
    pub profile_id: Option<String>,
    pub employee_number: Option<String>,
    pub specialty_id: Option<String>,
    pub level: Option<TechnicianLevel>,
    pub hourly_rate: Option<Decimal>,
    pub available: Option<bool>,
    pub hired_on: Option<NaiveDate>,
}

/// Recurring maintenance template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    pub id: String,
    pub equipment_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub trigger_type: TriggerType,
    pub frequency_days: Option<u32>,
    pub next_due: Option<NaiveDate>,
    pub estimated_hours: Option<Decimal>,
    pub technician_id: Option<String>,
    pub active: bool,
    pub equipment: Option<Equipment>,
    pub technician: Option<Technician>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlan {
    pub equipment_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub trigger_type: Option<TriggerType>,
    pub frequency_days: Option<u32>,
    pub next_due: Option<NaiveDate>,
    pub estimated_hours: Option<Decimal>,
    pub technician_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlan {
    pub equipment_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub trigger_type: Option<TriggerType>,
    pub frequency_days: Option<u32>,
    pub next_due: Option<NaiveDate>,
    pub estimated_hours: Option<Decimal>,
    pub technician_id: Option<String>,
    pub active: Option<bool>,
}
