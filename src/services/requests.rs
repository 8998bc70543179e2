//! Intervention request lifecycle and conversion into work orders

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::{
        request::{CreateRequest, UpdateRequest},
        work_order::CreateWorkOrder,
        InterventionRequest, RequestStatus, WorkOrder,
    },
    repository::Repository,
};

use super::{numbering::Numbering, work_orders::WorkOrderService};

#[derive(Clone)]
pub struct RequestService {
    repository: Repository,
    clock: Arc<dyn Clock>,
    numbering: Numbering,
    work_orders: WorkOrderService,
}

impl RequestService {
    pub fn new(
        repository: Repository,
        clock: Arc<dyn Clock>,
        numbering: Numbering,
        work_orders: WorkOrderService,
    ) -> Self {
        Self {
            repository,
            clock,
            numbering,
            work_orders,
        }
    }

    pub async fn list(&self) -> Vec<InterventionRequest> {
        self.repository.requests.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<InterventionRequest> {
        self.repository.requests.get_by_id(id).await
    }

    /// Register a new request. Required fields are checked by the caller.
    pub async fn create(&self, draft: CreateRequest) -> AppResult<InterventionRequest> {
        let existing = self.repository.requests.len().await;
        let equipment = self
            .repository
            .equipment
            .resolve(draft.equipment_id.as_deref())
            .await;
        let requester = self.repository.profiles.find(&draft.requester_id).await;

        let request = InterventionRequest {
            id: self.repository.next_id::<InterventionRequest>(),
            number: self.numbering.next("DI", existing),
            equipment_id: draft.equipment_id,
            requester_id: draft.requester_id,
            requesting_department: draft.requesting_department,
            desired_date: draft.desired_date,
            priority: draft.priority.unwrap_or_default(),
            request_type: draft.request_type.unwrap_or_default(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            status: draft.status.unwrap_or_default(),
            validated_by: None,
            validated_at: None,
            validation_comment: None,
            work_order_id: None,
            created_at: self.clock.now(),
            equipment,
            requester,
        };

        let created = self.repository.requests.insert(request).await;
        tracing::info!("Intervention request {} created ({})", created.number, created.id);
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: UpdateRequest) -> AppResult<InterventionRequest> {
        let equipment = self
            .repository
            .equipment
            .resolve_patch(patch.equipment_id.as_deref())
            .await;
        let requester = self
            .repository
            .profiles
            .resolve_patch(patch.requester_id.as_deref())
            .await;

        self.repository
            .requests
            .update_by_id(id, |request| {
                merge!(request, patch;
                    set: [requester_id, priority, request_type, title, description, status];
                    opt: [
                        equipment_id, requesting_department, desired_date, location,
                        validated_by, validated_at, validation_comment, work_order_id,
                    ]);
                if let Some(equipment) = equipment {
                    request.equipment = equipment;
                }
                if let Some(requester) = requester {
                    request.requester = requester;
                }
            })
            .await
    }

    /// Approve a request. The current status is not checked.
    pub async fn approve(&self, id: &str, approver_id: &str) -> AppResult<InterventionRequest> {
        let approved = self
            .update(
                id,
                UpdateRequest {
                    status: Some(RequestStatus::Approved),
                    validated_by: Some(approver_id.to_string()),
                    validated_at: Some(self.clock.now()),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!("Request {} approved by {}", approved.number, approver_id);
        Ok(approved)
    }

    /// Reject a request, keeping `reason` verbatim. The caller guarantees a
    /// non-empty reason.
    pub async fn reject(
        &self,
        id: &str,
        approver_id: &str,
        reason: &str,
    ) -> AppResult<InterventionRequest> {
        let rejected = self
            .update(
                id,
                UpdateRequest {
                    status: Some(RequestStatus::Rejected),
                    validated_by: Some(approver_id.to_string()),
                    validated_at: Some(self.clock.now()),
                    validation_comment: Some(reason.to_string()),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!("Request {} rejected by {}", rejected.number, approver_id);
        Ok(rejected)
    }

    /// Put a request under evaluation
    pub async fn start_evaluation(&self, id: &str) -> AppResult<InterventionRequest> {
        self.update(
            id,
            UpdateRequest {
                status: Some(RequestStatus::InEvaluation),
                ..Default::default()
            },
        )
        .await
    }

    /// Cancel a request. Converted requests are expected to stay converted;
    /// the caller enforces it.
    pub async fn cancel(&self, id: &str) -> AppResult<InterventionRequest> {
        let cancelled = self
            .update(
                id,
                UpdateRequest {
                    status: Some(RequestStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!("Request {} cancelled", cancelled.number);
        Ok(cancelled)
    }

    /// Create a work order from `overrides` linked to the request, then mark
    /// the request converted with the forward link.
    ///
    /// The two writes are sequential with no rollback: if marking the request
    /// fails, the work order stays in the store and the error is returned.
    pub async fn convert_to_work_order(
        &self,
        request_id: &str,
        overrides: CreateWorkOrder,
    ) -> AppResult<WorkOrder> {
        let work_order = self
            .work_orders
            .create(CreateWorkOrder {
                request_id: Some(request_id.to_string()),
                ..overrides
            })
            .await?;

        let marked = self
            .update(
                request_id,
                UpdateRequest {
                    status: Some(RequestStatus::ConvertedToWo),
                    work_order_id: Some(work_order.id.clone()),
                    ..Default::default()
                },
            )
            .await;

        match marked {
            Ok(request) => {
                tracing::info!(
                    "Request {} converted into work order {}",
                    request.number,
                    work_order.number
                );
                Ok(work_order)
            }
            Err(e) => {
                tracing::warn!(
                    "Work order {} created but request {} could not be marked converted: {}",
                    work_order.number,
                    request_id,
                    e
                );
                Err(e)
            }
        }
    }
}
