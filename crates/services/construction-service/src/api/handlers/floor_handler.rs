//! Floor resource.

use axum::{routing::get, Router};
use serde::Deserialize;
use validator::Validate;

use domain::{DomainError, DomainResult, Floor, ENTITY_FLOOR};

use super::apartment_handler::ApartmentResource;
use super::resource::{list_children, resource_routes, ChildResource, Resource};
use crate::api::state::AppState;
use crate::service::{ChildLookup, EntityService};

/// Floor request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FloorPayload {
    pub id: Option<i64>,
    #[validate(required(message = "floorNumber is required"))]
    pub floor_number: Option<i32>,
    pub building_id: Option<i64>,
}

impl TryFrom<FloorPayload> for Floor {
    type Error = DomainError;

    fn try_from(payload: FloorPayload) -> DomainResult<Self> {
        let floor_number = payload
            .floor_number
            .ok_or(DomainError::missing(ENTITY_FLOOR, "floorNumber"))?;

        Ok(Floor {
            id: payload.id,
            floor_number,
            building_id: payload.building_id,
        })
    }
}

pub struct FloorResource;

impl Resource for FloorResource {
    type Entity = Floor;
    type Payload = FloorPayload;

    const COLLECTION: &'static str = "floors";

    fn service(state: &AppState) -> &dyn EntityService<Floor> {
        state.floors.as_ref()
    }
}

impl ChildResource for FloorResource {
    fn lookup(state: &AppState) -> &dyn ChildLookup<Floor> {
        state.floors.as_ref()
    }
}

/// Create floor routes, including the apartments of a floor
pub fn floor_routes() -> Router<AppState> {
    resource_routes::<FloorResource>()
        .route("/:id/apartments", get(list_children::<ApartmentResource>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_number_is_required() {
        let payload: FloorPayload = serde_json::from_str(r#"{"buildingId":1}"#).unwrap();
        assert!(payload.validate().is_err());
        assert!(Floor::try_from(payload).is_err());
    }

    #[test]
    fn building_is_optional() {
        let payload: FloorPayload = serde_json::from_str(r#"{"floorNumber":3}"#).unwrap();
        assert!(payload.validate().is_ok());

        let floor = Floor::try_from(payload).unwrap();
        assert_eq!(floor.floor_number, 3);
        assert!(floor.building_id.is_none());
    }
}
