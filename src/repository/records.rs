//! Table bindings for every entity kind, and id generation

use snowflaked::sync::Generator;

use super::table::{Record, SoftDelete};
use crate::models::{
    Equipment, EquipmentCategory, InterventionRequest, MaintenancePlan, Part, PartCategory,
    Profile, Site, Specialty, StockMovement, Supplier, Technician, WorkOrder,
};

macro_rules! record {
    ($ty:ty, $kind:literal, $label:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;
            const LABEL: &'static str = $label;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

macro_rules! soft_delete {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SoftDelete for $ty {
                fn deactivate(&mut self) {
                    self.active = false;
                }
            }
        )*
    };
}

record!(Equipment, "equipment", "Equipment");
record!(EquipmentCategory, "category", "Equipment category");
record!(Site, "site", "Site");
record!(Profile, "profile", "Profile");
record!(Specialty, "specialty", "Specialty");
record!(Technician, "technician", "Technician");
record!(MaintenancePlan, "plan", "Maintenance plan");
record!(Part, "part", "Part");
record!(PartCategory, "part-category", "Part category");
record!(StockMovement, "movement", "Stock movement");
record!(Supplier, "supplier", "Supplier");
record!(InterventionRequest, "request", "Intervention request");
record!(WorkOrder, "wo", "Work order");

// Technicians are removed physically and work orders are never deleted.
soft_delete!(Equipment, MaintenancePlan, Part, Supplier);

/// Opaque `<kind>-<snowflake>` identifiers, unique within one kind
pub struct IdGenerator {
    inner: Generator,
}

impl IdGenerator {
    pub fn new(instance: u16) -> Self {
        Self {
            inner: Generator::new(instance),
        }
    }

    pub fn next_for<T: Record>(&self) -> String {
        let id: u64 = self.inner.generate();
        format!("{}-{}", T::KIND, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_the_kind_prefix_and_differ() {
        let ids = IdGenerator::new(0);
        let a = ids.next_for::<WorkOrder>();
        let b = ids.next_for::<WorkOrder>();
        assert!(a.starts_with("wo-"));
        assert_ne!(a, b);
        assert!(ids.next_for::<Part>().starts_with("part-"));
    }
}
