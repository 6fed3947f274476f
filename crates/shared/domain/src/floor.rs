//! Floor domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::ENTITY_FLOOR;
use crate::entity::DomainEntity;

/// A floor of a building. Owns zero or more apartments through
/// `Apartment::floor_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: Option<i64>,
    pub floor_number: i32,
    /// Parent building (nullable foreign key)
    pub building_id: Option<i64>,
}

impl Floor {
    /// Create an unsaved floor without a parent building
    pub fn new(floor_number: i32) -> Self {
        Self {
            id: None,
            floor_number,
            building_id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn floor_number(mut self, floor_number: i32) -> Self {
        self.floor_number = floor_number;
        self
    }

    /// Attach the floor to a building
    pub fn building(mut self, building_id: i64) -> Self {
        self.building_id = Some(building_id);
        self
    }
}

impl DomainEntity for Floor {
    const ENTITY_NAME: &'static str = ENTITY_FLOOR;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl PartialEq for Floor {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_identity_based() {
        let first = Floor::new(1).with_id(1);
        assert_eq!(first, Floor::new(2).with_id(1));
        assert_ne!(first, Floor::new(1).with_id(2));
        assert_ne!(Floor::new(1), Floor::new(1));
    }

    #[test]
    fn builder_sets_parent() {
        let floor = Floor::new(3).building(9);
        assert_eq!(floor.floor_number, 3);
        assert_eq!(floor.building_id, Some(9));
        assert!(floor.id.is_none());
    }

    #[test]
    fn parent_is_serialized_as_foreign_key() {
        let floor = Floor::new(3).with_id(1);
        let json = serde_json::to_value(&floor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "floorNumber": 3, "buildingId": null })
        );
    }
}
