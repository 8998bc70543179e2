//! Technicians and preventive maintenance plans

use crate::{
    error::AppResult,
    models::{
        maintenance::{CreatePlan, CreateTechnician, UpdatePlan, UpdateTechnician},
        MaintenancePlan, Specialty, Technician,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -- Technicians --------------------------------------------------------

    pub async fn technicians(&self) -> Vec<Technician> {
        self.repository.technicians.list().await
    }

    pub async fn get_technician(&self, id: &str) -> AppResult<Technician> {
        self.repository.technicians.get_by_id(id).await
    }

    pub async fn create_technician(&self, draft: CreateTechnician) -> AppResult<Technician> {
        let profile = self
            .repository
            .profiles
            .resolve(draft.profile_id.as_deref())
            .await;
        let specialty = self
            .repository
            .specialties
            .resolve(draft.specialty_id.as_deref())
            .await;

        let technician = Technician {
            id: self.repository.next_id::<Technician>(),
            profile_id: draft.profile_id,
            employee_number: draft.employee_number,
            specialty_id: draft.specialty_id,
            level: draft.level.unwrap_or_default(),
            hourly_rate: draft.hourly_rate,
            available: true,
            hired_on: draft.hired_on,
            profile,
            specialty,
        };

        Ok(self.repository.technicians.insert(technician).await)
    }

    pub async fn update_technician(
        &self,
        id: &str,
        patch: UpdateTechnician,
    ) -> AppResult<Technician> {
        let profile = self
            .repository
            .profiles
            .resolve_patch(patch.profile_id.as_deref())
            .await;
        let specialty = self
            .repository
            .specialties
            .resolve_patch(patch.specialty_id.as_deref())
            .await;

        self.repository
            .technicians
            .update_by_id(id, |technician| {
                merge!(technician, patch;
                    set: [level, available];
                    opt: [profile_id, employee_number, specialty_id, hourly_rate, hired_on]);
                if let Some(profile) = profile {
                    technician.profile = profile;
                }
                if let Some(specialty) = specialty {
                    technician.specialty = specialty;
                }
            })
            .await
    }

    /// Technicians are removed for good, unlike the other records
    pub async fn delete_technician(&self, id: &str) -> AppResult<()> {
        if self.repository.technicians.remove(id).await {
            tracing::info!("Technician {} removed", id);
        }
        Ok(())
    }

    pub async fn specialties(&self) -> Vec<Specialty> {
        self.repository.specialties.list().await
    }

    // -- Plans --------------------------------------------------------------

    pub async fn plans(&self) -> Vec<MaintenancePlan> {
        self.repository.plans.list().await
    }

    pub async fn get_plan(&self, id: &str) -> AppResult<MaintenancePlan> {
        self.repository.plans.get_by_id(id).await
    }

    pub async fn create_plan(&self, draft: CreatePlan) -> AppResult<MaintenancePlan> {
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

        let plan = MaintenancePlan {
            id: self.repository.next_id::<MaintenancePlan>(),
            equipment_id: draft.equipment_id,
            name: draft.name,
            description: draft.description,
            trigger_type: draft.trigger_type.unwrap_or_default(),
            frequency_days: draft.frequency_days,
            next_due: draft.next_due,
            estimated_hours: draft.estimated_hours,
            technician_id: draft.technician_id,
            active: true,
            equipment,
            technician,
        };

        Ok(self.repository.plans.insert(plan).await)
    }

    pub async fn update_plan(&self, id: &str, patch: UpdatePlan) -> AppResult<MaintenancePlan> {
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
            .plans
            .update_by_id(id, |plan| {
                merge!(plan, patch;
                    set: [name, trigger_type, active];
                    opt: [
                        equipment_id, description, frequency_days, next_due, estimated_hours,
                        technician_id,
                    ]);
                if let Some(equipment) = equipment {
                    plan.equipment = equipment;
                }
                if let Some(technician) = technician {
                    plan.technician = technician;
                }
            })
            .await
    }

    /// Soft delete; unknown ids are ignored
    pub async fn delete_plan(&self, id: &str) -> AppResult<()> {
        self.repository.plans.soft_delete(id).await;
        Ok(())
    }
}
