//! Repository layer: the in-memory entity store

pub mod records;
pub mod seed;
pub mod table;

use std::sync::Arc;
use std::time::Duration;

use crate::models::{
    Equipment, EquipmentCategory, InterventionRequest, MaintenancePlan, Part, PartCategory,
    Profile, Site, Specialty, StockMovement, Supplier, Technician, WorkOrder,
};

pub use records::IdGenerator;
pub use table::{Record, SoftDelete, Table};

/// Main repository struct holding one table per entity kind.
///
/// Cloning shares the underlying tables; building a new repository gives an
/// isolated store.
#[derive(Clone)]
pub struct Repository {
    ids: Arc<IdGenerator>,
    pub equipment: Table<Equipment>,
    pub equipment_categories: Table<EquipmentCategory>,
    pub sites: Table<Site>,
    pub profiles: Table<Profile>,
    pub specialties: Table<Specialty>,
    pub technicians: Table<Technician>,
    pub plans: Table<MaintenancePlan>,
    pub parts: Table<Part>,
    pub part_categories: Table<PartCategory>,
    pub stock_movements: Table<StockMovement>,
    pub suppliers: Table<Supplier>,
    pub requests: Table<InterventionRequest>,
    pub work_orders: Table<WorkOrder>,
}

impl Repository {
    /// Create an empty repository whose operations wait `latency` each
    pub fn new(latency: Duration) -> Self {
        Self {
            ids: Arc::new(IdGenerator::new(0)),
            equipment: Table::new(latency),
            equipment_categories: Table::new(latency),
            sites: Table::new(latency),
            profiles: Table::new(latency),
            specialties: Table::new(latency),
            technicians: Table::new(latency),
            plans: Table::new(latency),
            parts: Table::new(latency),
            part_categories: Table::new(latency),
            stock_movements: Table::new(latency),
            suppliers: Table::new(latency),
            requests: Table::new(latency),
            work_orders: Table::new(latency),
        }
    }

    /// Fresh id for a record of kind `T`
    pub fn next_id<T: Record>(&self) -> String {
        self.ids.next_for::<T>()
    }
}
