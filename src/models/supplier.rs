//! Supplier model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::SupplierType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub code: String,
    pub name: String,
    pub supplier_type: SupplierType,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub main_contact: Option<String>,
    /// Rating out of 5
    pub rating: Option<u8>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSupplier {
    pub code: String,
    pub name: String,
    pub supplier_type: Option<SupplierType>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub main_contact: Option<String>,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSupplier {
    pub code: Option<String>,
    pub name: Option<String>,
    pub supplier_type: Option<SupplierType>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub main_contact: Option<String>,
    pub rating: Option<u8>,
    pub active: Option<bool>,
}

/// Supplier with metrics derived from the parts it supplies (not stored)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierWithMetrics {
    #[serde(flatten)]
    pub supplier: Supplier,
    pub parts_count: usize,
    pub stock_value: Decimal,
}
