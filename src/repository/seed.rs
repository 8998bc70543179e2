//! Demo data loaded by the binary

use chrono::Utc;
use rust_decimal::Decimal;
use std::time::Duration;

use super::Repository;
use crate::models::{
    Criticality, Equipment, EquipmentCategory, EquipmentStatus, Part, PartCategory, Profile,
    Site, Specialty, Supplier, SupplierType, Technician, TechnicianLevel, Unit,
};

impl Repository {
    /// Repository pre-filled with lookup rows and a few demo records
    pub async fn seeded(latency: Duration) -> Self {
        let repo = Self::new(latency);
        let now = Utc::now();

        let categories = vec![
            EquipmentCategory {
                id: "1".into(),
                name: "Production machines".into(),
                description: None,
            },
            EquipmentCategory {
                id: "2".into(),
                name: "Utilities".into(),
                description: Some("Compressors, boilers, HVAC".into()),
            },
        ];
        let sites = vec![Site {
            id: "1".into(),
            name: "Main plant".into(),
            address: None,
            city: Some("Casablanca".into()),
            active: true,
        }];
        let profiles = vec![
            Profile {
                id: "1".into(),
                last_name: "Alaoui".into(),
                first_name: "Karim".into(),
                email: "k.alaoui@example.com".into(),
                active: true,
            },
            Profile {
                id: "2".into(),
                last_name: "Bennani".into(),
                first_name: "Sara".into(),
                email: "s.bennani@example.com".into(),
                active: true,
            },
        ];
        let specialties = vec![
            Specialty {
                id: "1".into(),
                name: "Mechanical".into(),
            },
            Specialty {
                id: "2".into(),
                name: "Electrical".into(),
            },
        ];
        let part_categories = vec![PartCategory {
            id: "1".into(),
            name: "Bearings".into(),
        }];

        let equipment = vec![
            Equipment {
                id: "eq-1".into(),
                code: "EQ-001".into(),
                name: "Hydraulic press".into(),
                category_id: Some("1".into()),
                brand: None,
                model: None,
                serial_number: None,
                site_id: Some("1".into()),
                status: EquipmentStatus::InService,
                criticality: Criticality::High,
                purchase_value: Some(Decimal::from(120_000)),
                description: None,
                active: true,
                created_at: now,
                category: Some(categories[0].clone()),
                site: Some(sites[0].clone()),
            },
            Equipment {
                id: "eq-2".into(),
                code: "EQ-002".into(),
                name: "Air compressor".into(),
                category_id: Some("2".into()),
                brand: None,
                model: None,
                serial_number: None,
                site_id: Some("1".into()),
                status: EquipmentStatus::BrokenDown,
                criticality: Criticality::Medium,
                purchase_value: None,
                description: None,
                active: true,
                created_at: now,
                category: Some(categories[1].clone()),
                site: Some(sites[0].clone()),
            },
        ];

        let technicians = vec![Technician {
            id: "tech-1".into(),
            profile_id: Some("2".into()),
            employee_number: Some("T-100".into()),
            specialty_id: Some("1".into()),
            level: TechnicianLevel::Senior,
            hourly_rate: Some(Decimal::from(150)),
            available: true,
            hired_on: None,
            profile: Some(profiles[1].clone()),
            specialty: Some(specialties[0].clone()),
        }];

        let suppliers = vec![Supplier {
            id: "sup-1".into(),
            code: "FRN-001".into(),
            name: "Atlas Industrie".into(),
            supplier_type: SupplierType::Parts,
            address: None,
            city: Some("Rabat".into()),
            phone: None,
            email: None,
            main_contact: None,
            rating: Some(4),
            active: true,
        }];

        let parts = vec![Part {
            id: "part-1".into(),
            code: "ROU-6205".into(),
            designation: "Ball bearing 6205".into(),
            category_id: Some("1".into()),
            manufacturer_ref: None,
            unit: Unit::Unit,
            on_hand: Decimal::from(12),
            minimum: Decimal::from(5),
            maximum: Some(Decimal::from(40)),
            reorder_point: Some(Decimal::from(8)),
            location: "A-01".into(),
            unit_price: Some(Decimal::new(4550, 2)),
            critical: true,
            supplier_id: Some("sup-1".into()),
            active: true,
            category: Some(part_categories[0].clone()),
        }];

        repo.equipment_categories.seed(categories).await;
        repo.sites.seed(sites).await;
        repo.profiles.seed(profiles).await;
        repo.specialties.seed(specialties).await;
        repo.part_categories.seed(part_categories).await;
        repo.equipment.seed(equipment).await;
        repo.technicians.seed(technicians).await;
        repo.suppliers.seed(suppliers).await;
        repo.parts.seed(parts).await;

        tracing::debug!("Repository seeded with demo data");
        repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_repository_resolves_demo_references() {
        let repo = Repository::seeded(Duration::ZERO).await;
        assert_eq!(repo.equipment.len().await, 2);
        assert!(repo.profiles.find("1").await.is_some());
        assert_eq!(
            repo.equipment.last().await.map(|e| e.code),
            Some("EQ-002".to_string())
        );
        assert!(repo.requests.is_empty().await);
    }
}
