//! Business logic services

/// Copy every field present in a patch onto the target record.
///
/// `set` fields are plain on the target, `opt` fields are `Option` on both
/// sides.
macro_rules! merge {
    ($target:expr, $patch:expr; set: [$($f:ident),* $(,)?]; opt: [$($o:ident),* $(,)?]) => {{
        $(
            if let Some(value) = $patch.$f {
                $target.$f = value;
            }
        )*
        $(
            if $patch.$o.is_some() {
                $target.$o = $patch.$o;
            }
        )*
    }};
}

pub mod equipment;
pub mod export;
pub mod maintenance;
pub mod numbering;
pub mod requests;
pub mod session;
pub mod stats;
pub mod stock;
pub mod suppliers;
pub mod work_orders;

use std::sync::Arc;

use crate::{clock::Clock, config::NumberingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestService,
    pub work_orders: work_orders::WorkOrderService,
    pub stock: stock::StockService,
    pub maintenance: maintenance::MaintenanceService,
    pub suppliers: suppliers::SupplierService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, clock: Arc<dyn Clock>, numbering: &NumberingConfig) -> Self {
        let numbering = numbering::Numbering::new(numbering.fixed_year, clock.clone());
        let work_orders =
            work_orders::WorkOrderService::new(repository.clone(), clock.clone(), numbering.clone());

        Self {
            equipment: equipment::EquipmentService::new(repository.clone(), clock.clone()),
            requests: requests::RequestService::new(
                repository.clone(),
                clock.clone(),
                numbering,
                work_orders.clone(),
            ),
            work_orders,
            stock: stock::StockService::new(repository.clone(), clock),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            suppliers: suppliers::SupplierService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
