//! Building resource.

use axum::{routing::get, Router};
use serde::Deserialize;
use validator::Validate;

use domain::{Building, DomainError, DomainResult, ENTITY_BUILDING, MIN_NAME_LENGTH};

use super::floor_handler::FloorResource;
use super::resource::{list_children, resource_routes, Resource};
use crate::api::state::AppState;
use crate::service::EntityService;

/// Building request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPayload {
    pub id: Option<i64>,
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
}

impl TryFrom<BuildingPayload> for Building {
    type Error = DomainError;

    fn try_from(payload: BuildingPayload) -> DomainResult<Self> {
        let name = payload
            .name
            .filter(|name| name.chars().count() as u64 >= MIN_NAME_LENGTH)
            .ok_or(DomainError::missing(ENTITY_BUILDING, "name"))?;

        Ok(Building {
            id: payload.id,
            name,
        })
    }
}

pub struct BuildingResource;

impl Resource for BuildingResource {
    type Entity = Building;
    type Payload = BuildingPayload;

    const COLLECTION: &'static str = "buildings";

    fn service(state: &AppState) -> &dyn EntityService<Building> {
        state.buildings.as_ref()
    }
}

/// Create building routes, including the floors of a building
pub fn building_routes() -> Router<AppState> {
    resource_routes::<BuildingResource>().route("/:id/floors", get(list_children::<FloorResource>))
}
