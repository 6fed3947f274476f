//! Apartment resource.

use axum::Router;
use serde::Deserialize;
use validator::Validate;

use domain::{Apartment, DomainError, DomainResult, ENTITY_APARTMENT, MIN_NAME_LENGTH};

use super::resource::{resource_routes, ChildResource, Resource};
use crate::api::state::AppState;
use crate::service::{ChildLookup, EntityService};

/// Apartment request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentPayload {
    pub id: Option<i64>,
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    pub apartment_number: Option<i32>,
    pub floor_id: Option<i64>,
}

impl TryFrom<ApartmentPayload> for Apartment {
    type Error = DomainError;

    fn try_from(payload: ApartmentPayload) -> DomainResult<Self> {
        let name = payload
            .name
            .filter(|name| name.chars().count() as u64 >= MIN_NAME_LENGTH)
            .ok_or(DomainError::missing(ENTITY_APARTMENT, "name"))?;

        Ok(Apartment {
            id: payload.id,
            name,
            apartment_number: payload.apartment_number,
            floor_id: payload.floor_id,
        })
    }
}

pub struct ApartmentResource;

impl Resource for ApartmentResource {
    type Entity = Apartment;
    type Payload = ApartmentPayload;

    const COLLECTION: &'static str = "apartments";

    fn service(state: &AppState) -> &dyn EntityService<Apartment> {
        state.apartments.as_ref()
    }
}

impl ChildResource for ApartmentResource {
    fn lookup(state: &AppState) -> &dyn ChildLookup<Apartment> {
        state.apartments.as_ref()
    }
}

/// Create apartment routes
pub fn apartment_routes() -> Router<AppState> {
    resource_routes::<ApartmentResource>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required_but_number_is_not() {
        let missing: ApartmentPayload =
            serde_json::from_str(r#"{"apartmentNumber":101}"#).unwrap();
        assert!(missing.validate().is_err());

        let payload: ApartmentPayload = serde_json::from_str(r#"{"name":"A1"}"#).unwrap();
        assert!(payload.validate().is_ok());

        let apartment = Apartment::try_from(payload).unwrap();
        assert_eq!(apartment.name, "A1");
        assert!(apartment.apartment_number.is_none());
    }
}
