//! Data models for the GMAO core

pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod part;
pub mod reference;
pub mod request;
pub mod supplier;
pub mod work_order;

// Re-export commonly used types
pub use enums::{
    Criticality, EquipmentStatus, MaintenanceType, MovementDirection, Priority, RequestStatus,
    RequestType, StockLevel, SupplierType, TechnicianLevel, TriggerType, Unit, WorkOrderStatus,
};
pub use equipment::Equipment;
pub use maintenance::{MaintenancePlan, Technician};
pub use part::{Part, StockMovement, StockStats};
pub use reference::{EquipmentCategory, PartCategory, Profile, Site, Specialty};
pub use request::InterventionRequest;
pub use supplier::{Supplier, SupplierWithMetrics};
pub use work_order::WorkOrder;
