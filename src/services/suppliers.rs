//! Supplier service

use crate::{
    error::AppResult,
    models::{
        supplier::{CreateSupplier, UpdateSupplier},
        Part, Supplier, SupplierWithMetrics,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct SupplierService {
    repository: Repository,
}

impl SupplierService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Supplier> {
        self.repository.suppliers.list().await
    }

    /// Suppliers with the parts count and stock value derived from the
    /// current parts
    pub async fn list_with_metrics(&self) -> Vec<SupplierWithMetrics> {
        let suppliers = self.repository.suppliers.list().await;
        let parts = self.repository.parts.filter(|p| p.supplier_id.is_some()).await;

        suppliers
            .into_iter()
            .map(|supplier| {
                let supplied: Vec<&Part> = parts
                    .iter()
                    .filter(|p| p.supplier_id.as_deref() == Some(supplier.id.as_str()))
                    .collect();
                SupplierWithMetrics {
                    parts_count: supplied.len(),
                    stock_value: supplied.iter().map(|p| p.stock_value()).sum(),
                    supplier,
                }
            })
            .collect()
    }

    pub async fn get(&self, id: &str) -> AppResult<Supplier> {
        self.repository.suppliers.get_by_id(id).await
    }

    pub async fn parts_of(&self, supplier_id: &str) -> Vec<Part> {
        self.repository
            .parts
            .filter(|p| p.supplier_id.as_deref() == Some(supplier_id))
            .await
    }

    pub async fn create(&self, draft: CreateSupplier) -> AppResult<Supplier> {
        let supplier = Supplier {
            id: self.repository.next_id::<Supplier>(),
            code: draft.code,
            name: draft.name,
            supplier_type: draft.supplier_type.unwrap_or_default(),
            address: draft.address,
            city: draft.city,
            phone: draft.phone,
            email: draft.email,
            main_contact: draft.main_contact,
            rating: draft.rating,
            active: true,
        };
        Ok(self.repository.suppliers.insert(supplier).await)
    }

    pub async fn update(&self, id: &str, patch: UpdateSupplier) -> AppResult<Supplier> {
        self.repository
            .suppliers
            .update_by_id(id, |supplier| {
                merge!(supplier, patch;
                    set: [code, name, supplier_type, active];
                    opt: [address, city, phone, email, main_contact, rating]);
            })
            .await
    }

    /// Soft delete; unknown ids are ignored
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.suppliers.soft_delete(id).await;
        Ok(())
    }
}
