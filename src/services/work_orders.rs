//! Work order factory and lifecycle stamps

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::{
        work_order::{CreateWorkOrder, UpdateWorkOrder},
        WorkOrder, WorkOrderStatus,
    },
    repository::Repository,
};

use super::numbering::Numbering;

#[derive(Clone)]
pub struct WorkOrderService {
    repository: Repository,
    clock: Arc<dyn Clock>,
    numbering: Numbering,
}

impl WorkOrderService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>, numbering: Numbering) -> Self {
        Self {
            repository,
            clock,
            numbering,
        }
    }

    pub async fn list(&self) -> Vec<WorkOrder> {
        self.repository.work_orders.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<WorkOrder> {
        self.repository.work_orders.get_by_id(id).await
    }

    /// Create a work order: corrective, normal priority and planned unless the
    /// draft says otherwise. Equipment and technician are embedded as
    /// snapshots.
    pub async fn create(&self, draft: CreateWorkOrder) -> AppResult<WorkOrder> {
        let existing = self.repository.work_orders.len().await;
        let equipment = self
            .repository
            .equipment
            .resolve(draft.equipment_id.as_deref())
            .await;
        let technician = self
            .repository
            .technicians
            .resolve(draft.technician_id.as_deref())
            .await;

        let work_order = WorkOrder {
            id: self.repository.next_id::<WorkOrder>(),
            number: self.numbering.next("OT", existing),
            request_id: draft.request_id,
            equipment_id: draft.equipment_id,
            maintenance_type: draft.maintenance_type.unwrap_or_default(),
            priority: draft.priority.unwrap_or_default(),
            title: draft.title,
            description: draft.description,
            status: draft.status.unwrap_or_default(),
            planned_start: draft.planned_start,
            planned_end: draft.planned_end,
            actual_start: None,
            actual_end: None,
            planned_hours: draft.planned_hours,
            actual_hours: None,
            technician_id: draft.technician_id,
            created_by: draft.created_by,
            labor_cost: draft.labor_cost,
            parts_cost: draft.parts_cost,
            created_at: self.clock.now(),
            equipment,
            technician,
        };

        let created = self.repository.work_orders.insert(work_order).await;
        tracing::info!("Work order {} created ({})", created.number, created.id);
        Ok(created)
    }

    /// Merge `patch` over the stored order, refreshing the snapshots whose
    /// key is part of the patch
    pub async fn update(&self, id: &str, patch: UpdateWorkOrder) -> AppResult<WorkOrder> {
        let equipment = self
            .repository
            .equipment
            .resolve_patch(patch.equipment_id.as_deref())
            .await;
        let technician = self
            .repository
            .technicians
            .resolve_patch(patch.technician_id.as_deref())
            .await;

        self.repository
            .work_orders
            .update_by_id(id, |wo| {
                merge!(wo, patch;
                    set: [maintenance_type, priority, title, description, status];
                    opt: [
                        equipment_id, planned_start, planned_end, actual_start, actual_end,
                        planned_hours, actual_hours, technician_id, labor_cost, parts_cost,
                    ]);
                if let Some(equipment) = equipment {
                    wo.equipment = equipment;
                }
                if let Some(technician) = technician {
                    wo.technician = technician;
                }
            })
            .await
    }

    /// Move to `status` without checking the current one. Entering
    /// `InProgress` stamps the actual start, entering `Done` the actual end.
    pub async fn update_status(&self, id: &str, status: WorkOrderStatus) -> AppResult<WorkOrder> {
        let mut patch = UpdateWorkOrder {
            status: Some(status),
            ..Default::default()
        };
        match status {
            WorkOrderStatus::InProgress => patch.actual_start = Some(self.clock.now()),
            WorkOrderStatus::Done => patch.actual_end = Some(self.clock.now()),
            _ => {}
        }

        let updated = self.update(id, patch).await?;
        tracing::info!("Work order {} moved to {:?}", updated.number, status);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::models::{MaintenanceType, Priority};
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::time::Duration;

    /// Clock advancing one minute per reading
    fn ticking_clock() -> Arc<dyn Clock> {
        let start = Utc.with_ymd_and_hms(2026, 5, 4, 7, 30, 0).unwrap();
        let ticks = AtomicI64::new(0);
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(move || start + ChronoDuration::minutes(ticks.fetch_add(1, Ordering::SeqCst)));
        Arc::new(clock)
    }

    fn service(repository: Repository) -> WorkOrderService {
        let clock = ticking_clock();
        let numbering = Numbering::new(Some(2024), clock.clone());
        WorkOrderService::new(repository, clock, numbering)
    }

    fn draft(title: &str) -> CreateWorkOrder {
        CreateWorkOrder {
            title: title.to_string(),
            description: "Replace the worn seal".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_applies_defaults_and_numbers_sequentially() {
        let service = service(Repository::new(Duration::ZERO));

        let first = service.create(draft("Seal")).await.unwrap();
        let second = service.create(draft("Belt")).await.unwrap();

        assert_eq!(first.number, "OT-2024-001");
        assert_eq!(second.number, "OT-2024-002");
        assert_eq!(first.maintenance_type, MaintenanceType::Corrective);
        assert_eq!(first.priority, Priority::Normal);
        assert_eq!(first.status, WorkOrderStatus::Planned);
        assert!(first.actual_start.is_none());
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_keeps_draft_overrides() {
        let service = service(Repository::new(Duration::ZERO));
        let wo = service
            .create(CreateWorkOrder {
                maintenance_type: Some(MaintenanceType::Preventive),
                priority: Some(Priority::Urgent),
                status: Some(WorkOrderStatus::Pending),
                ..draft("Lubrication")
            })
            .await
            .unwrap();

        assert_eq!(wo.maintenance_type, MaintenanceType::Preventive);
        assert_eq!(wo.priority, Priority::Urgent);
        assert_eq!(wo.status, WorkOrderStatus::Pending);
    }

    #[tokio::test]
    async fn create_embeds_equipment_snapshot() {
        let repository = Repository::seeded(Duration::ZERO).await;
        let service = service(repository.clone());

        let wo = service
            .create(CreateWorkOrder {
                equipment_id: Some("eq-1".into()),
                technician_id: Some("tech-1".into()),
                ..draft("Press inspection")
            })
            .await
            .unwrap();
        assert_eq!(wo.equipment.as_ref().map(|e| e.code.as_str()), Some("EQ-001"));
        assert!(wo.technician.is_some());

        // Later changes to the equipment do not reach the snapshot
        repository
            .equipment
            .update_by_id("eq-1", |e| e.name = "Renamed press".into())
            .await
            .unwrap();
        let stored = service.get(&wo.id).await.unwrap();
        assert_eq!(stored.equipment.unwrap().name, "Hydraulic press");
    }

    #[tokio::test]
    async fn unknown_references_resolve_to_nothing() {
        let service = service(Repository::new(Duration::ZERO));
        let wo = service
            .create(CreateWorkOrder {
                equipment_id: Some("ghost".into()),
                ..draft("Ghost")
            })
            .await
            .unwrap();
        assert_eq!(wo.equipment_id.as_deref(), Some("ghost"));
        assert!(wo.equipment.is_none());
    }

    #[tokio::test]
    async fn status_changes_stamp_actual_dates_in_order() {
        let service = service(Repository::new(Duration::ZERO));
        let wo = service.create(draft("Motor")).await.unwrap();

        let started = service
            .update_status(&wo.id, WorkOrderStatus::InProgress)
            .await
            .unwrap();
        let start = started.actual_start.unwrap();
        assert!(start >= wo.created_at);
        assert!(started.actual_end.is_none());

        let done = service
            .update_status(&wo.id, WorkOrderStatus::Done)
            .await
            .unwrap();
        assert_eq!(done.actual_start, Some(start));
        assert!(done.actual_end.unwrap() >= start);
    }

    #[tokio::test]
    async fn any_status_may_follow_any_other() {
        let service = service(Repository::new(Duration::ZERO));
        let wo = service.create(draft("Pump")).await.unwrap();

        service
            .update_status(&wo.id, WorkOrderStatus::Cancelled)
            .await
            .unwrap();
        let reopened = service
            .update_status(&wo.id, WorkOrderStatus::Planned)
            .await
            .unwrap();
        assert_eq!(reopened.status, WorkOrderStatus::Planned);
        assert!(reopened.actual_start.is_none());
    }

    #[tokio::test]
    async fn update_unknown_order_is_not_found() {
        let service = service(Repository::new(Duration::ZERO));
        let err = service
            .update_status("wo-missing", WorkOrderStatus::Done)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_refreshes_patched_technician_only() {
        let repository = Repository::seeded(Duration::ZERO).await;
        let service = service(repository);
        let wo = service.create(draft("Valve")).await.unwrap();
        assert!(wo.technician.is_none());

        let updated = service
            .update(
                &wo.id,
                UpdateWorkOrder {
                    technician_id: Some("tech-1".into()),
                    labor_cost: Some(rust_decimal::Decimal::from(300)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            updated.technician.as_ref().map(|t| t.id.as_str()),
            Some("tech-1")
        );
        assert_eq!(updated.total_cost(), rust_decimal::Decimal::from(300));
        assert_eq!(updated.title, "Valve");
    }
}
