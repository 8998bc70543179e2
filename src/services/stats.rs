//! Dashboard statistics, computed on demand

use serde::Serialize;

use crate::{
    models::{EquipmentStatus, RequestStatus, StockStats, WorkOrderStatus},
    repository::Repository,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentStats {
    pub total: usize,
    pub broken_down: usize,
    pub in_maintenance: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderStats {
    pub open: usize,
    pub done: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestStats {
    pub new: usize,
    pub in_evaluation: usize,
    pub awaiting: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceStats {
    pub active_plans: usize,
    pub available_technicians: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub equipment: EquipmentStats,
    pub work_orders: WorkOrderStats,
    pub requests: RequestStats,
    pub maintenance: MaintenanceStats,
    pub stock: StockStats,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Counts over active equipment only
    pub async fn equipment(&self) -> EquipmentStats {
        let active = self.repository.equipment.filter(|e| e.active).await;
        let with_status =
            |status: EquipmentStatus| active.iter().filter(|e| e.status == status).count();
        EquipmentStats {
            total: active.len(),
            broken_down: with_status(EquipmentStatus::BrokenDown),
            in_maintenance: with_status(EquipmentStatus::InMaintenance),
        }
    }

    pub async fn work_orders(&self) -> WorkOrderStats {
        let orders = self.repository.work_orders.list().await;
        WorkOrderStats {
            open: orders.iter().filter(|o| o.status.is_open()).count(),
            done: orders
                .iter()
                .filter(|o| o.status == WorkOrderStatus::Done)
                .count(),
        }
    }

    pub async fn requests(&self) -> RequestStats {
        let requests = self.repository.requests.list().await;
        let with_status =
            |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();
        RequestStats {
            new: with_status(RequestStatus::New),
            in_evaluation: with_status(RequestStatus::InEvaluation),
            awaiting: requests
                .iter()
                .filter(|r| r.status.is_awaiting_validation())
                .count(),
        }
    }

    pub async fn maintenance(&self) -> MaintenanceStats {
        MaintenanceStats {
            active_plans: self.repository.plans.filter(|p| p.active).await.len(),
            available_technicians: self
                .repository
                .technicians
                .filter(|t| t.available)
                .await
                .len(),
        }
    }

    pub async fn stock(&self) -> StockStats {
        StockStats::from_parts(&self.repository.parts.filter(|p| p.active).await)
    }

    pub async fn dashboard(&self) -> DashboardStats {
        DashboardStats {
            equipment: self.equipment().await,
            work_orders: self.work_orders().await,
            requests: self.requests().await,
            maintenance: self.maintenance().await,
            stock: self.stock().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn dashboard_over_seed_data() {
        let repository = Repository::seeded(Duration::ZERO).await;
        repository.equipment.soft_delete("eq-1").await;
        let stats = StatsService::new(repository).dashboard().await;

        assert_eq!(stats.equipment.total, 1);
        assert_eq!(stats.equipment.broken_down, 1);
        assert_eq!(stats.work_orders.open, 0);
        assert_eq!(stats.requests.awaiting, 0);
        assert_eq!(stats.maintenance.available_technicians, 1);
        assert_eq!(stats.stock.total, 1);
        assert_eq!(stats.stock.critical, 0);
    }
}
