//! Equipment service

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::{
        equipment::{CreateEquipment, UpdateEquipment},
        Equipment, EquipmentCategory, Site,
    },
    repository::Repository,
};

use super::numbering::next_equipment_code;

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl EquipmentService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn list(&self) -> Vec<Equipment> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Code following the most recently created equipment
    pub async fn next_code(&self) -> String {
        let last = self.repository.equipment.last().await;
        next_equipment_code(last.as_ref().map(|e| e.code.as_str()))
    }

    pub async fn create(&self, draft: CreateEquipment) -> AppResult<Equipment> {
        let code = match draft.code {
            Some(code) => code,
            None => self.next_code().await,
        };
        let category = self
            .repository
            .equipment_categories
            .resolve(draft.category_id.as_deref())
            .await;
        let site = self.repository.sites.resolve(draft.site_id.as_deref()).await;

        let equipment = Equipment {
            id: self.repository.next_id::<Equipment>(),
            code,
            name: draft.name,
            category_id: draft.category_id,
            brand: draft.brand,
            model: draft.model,
            serial_number: draft.serial_number,
            site_id: draft.site_id,
            status: draft.status.unwrap_or_default(),
            criticality: draft.criticality.unwrap_or_default(),
            purchase_value: draft.purchase_value,
            description: draft.description,
            active: true,
            created_at: self.clock.now(),
            category,
            site,
        };

        let created = self.repository.equipment.insert(equipment).await;
        tracing::info!("Equipment {} created ({})", created.code, created.id);
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: UpdateEquipment) -> AppResult<Equipment> {
        let category = self
            .repository
            .equipment_categories
            .resolve_patch(patch.category_id.as_deref())
            .await;
        let site = self
            .repository
            .sites
            .resolve_patch(patch.site_id.as_deref())
            .await;

        self.repository
            .equipment
            .update_by_id(id, |equipment| {
                merge!(equipment, patch;
                    set: [code, name, status, criticality, active];
                    opt: [
                        category_id, brand, model, serial_number, site_id, purchase_value,
                        description,
                    ]);
                if let Some(category) = category {
                    equipment.category = category;
                }
                if let Some(site) = site {
                    equipment.site = site;
                }
            })
            .await
    }

    /// Soft delete; unknown ids are ignored
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.equipment.soft_delete(id).await {
            tracing::info!("Equipment {} deactivated", id);
        }
        Ok(())
    }

    pub async fn categories(&self) -> Vec<EquipmentCategory> {
        self.repository.equipment_categories.list().await
    }

    pub async fn sites(&self) -> Vec<Site> {
        self.repository.sites.list().await
    }
}
