//! Building domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::ENTITY_BUILDING;
use crate::entity::DomainEntity;

/// A building. Owns zero or more floors through `Floor::building_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: Option<i64>,
    pub name: String,
}

impl Building {
    /// Create an unsaved building
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
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
}

impl DomainEntity for Building {
    const ENTITY_NAME: &'static str = ENTITY_BUILDING;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl PartialEq for Building {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}
