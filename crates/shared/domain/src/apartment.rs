//! Apartment domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::ENTITY_APARTMENT;
use crate::entity::DomainEntity;

/// An apartment on a floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: Option<i64>,
    pub name: String,
    pub apartment_number: Option<i32>,
    /// Parent floor (nullable foreign key)
    pub floor_id: Option<i64>,
}

impl Apartment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            apartment_number: None,
            floor_id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn apartment_number(mut self, apartment_number: i32) -> Self {
        self.apartment_number = Some(apartment_number);
        self
    }

    /// Attach the apartment to a floor
    pub fn floor(mut self, floor_id: i64) -> Self {
        self.floor_id = Some(floor_id);
        self
    }
}

impl DomainEntity for Apartment {
    const ENTITY_NAME: &'static str = ENTITY_APARTMENT;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl PartialEq for Apartment {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_identity_based() {
        let first = Apartment::new("A1").with_id(1);
        let second = Apartment::new("B2").apartment_number(2).with_id(1);
        assert_eq!(first, second);
        assert_ne!(first, Apartment::new("A1").with_id(2));
        assert_ne!(Apartment::new("A1"), Apartment::new("A1"));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let apartment: Apartment = serde_json::from_str(r#"{"name":"A1"}"#).unwrap();
        assert_eq!(apartment.name, "A1");
        assert!(apartment.id.is_none());
        assert!(apartment.apartment_number.is_none());
        assert!(apartment.floor_id.is_none());
    }
}
