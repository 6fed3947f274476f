//! Generic REST resource handlers.
//!
//! Every entity exposes the same five endpoints; a [`Resource`] binds an
//! entity to its request payload, its collection path and its service.

use std::fmt::Debug;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use validator::Validate;

use common::alert::{entity_creation_alert, entity_deletion_alert, entity_update_alert};
use common::error::{ERROR_KEY_ID_EXISTS, ERROR_KEY_ID_NULL};
use common::{AppError, AppResult, OptionExt};
use domain::{DomainEntity, DomainError};

use crate::api::extractors::{Pageable, ValidatedJson};
use crate::api::pagination::pagination_headers;
use crate::api::state::AppState;
use crate::service::{ChildLookup, EntityService};

/// An entity exposed over HTTP.
pub trait Resource: Send + Sync + 'static {
    type Entity: DomainEntity + Serialize + Debug + Send + Sync + 'static;

    /// Request body, validated before conversion into the entity
    type Payload: DeserializeOwned
        + Validate
        + TryInto<Self::Entity, Error = DomainError>
        + Send
        + 'static;

    /// Plural path segment under `/api`
    const COLLECTION: &'static str;

    fn service(state: &AppState) -> &dyn EntityService<Self::Entity>;
}

/// An entity that can be listed by its parent.
pub trait ChildResource: Resource {
    fn lookup(state: &AppState) -> &dyn ChildLookup<Self::Entity>;
}

/// `POST /`, `PUT /`, `GET /`, `GET /:id` and `DELETE /:id` for a resource.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>).put(update::<R>))
        .route("/:id", get(get_one::<R>).delete(delete::<R>))
}

/// Create an entity. The body must not carry an id.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<R::Payload>,
) -> AppResult<Response> {
    let entity: R::Entity = payload.try_into()?;
    let name = R::Entity::ENTITY_NAME;
    debug!("REST request to save {} : {:?}", name, entity);

    if entity.id().is_some() {
        return Err(AppError::bad_request_alert(
            format!("A new {} cannot already have an ID", name),
            name,
            ERROR_KEY_ID_EXISTS,
        ));
    }

    let saved = R::service(&state).create(entity).await?;
    let id = saved
        .id()
        .ok_or_else(|| AppError::internal(format!("Saved {} has no id", name)))?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/api/{}/{}", R::COLLECTION, id))],
        entity_creation_alert(name, &id.to_string()),
        Json(saved),
    )
        .into_response())
}

/// Replace an existing entity. The body must carry an id.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<R::Payload>,
) -> AppResult<Response> {
    let entity: R::Entity = payload.try_into()?;
    let name = R::Entity::ENTITY_NAME;
    debug!("REST request to update {} : {:?}", name, entity);

    let Some(id) = entity.id() else {
        return Err(AppError::bad_request_alert("Invalid id", name, ERROR_KEY_ID_NULL));
    };

    let saved = R::service(&state).update(entity).await?;

    Ok((entity_update_alert(name, &id.to_string()), Json(saved)).into_response())
}

/// List one page of entities.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Pageable(request): Pageable,
) -> AppResult<Response> {
    debug!("REST request to get a page of {}", R::COLLECTION);

    let page = R::service(&state).find_page(request.clone()).await?;
    let headers = pagination_headers(uri.path(), &request, &page);

    Ok((headers, Json(page.content)).into_response())
}

pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<R::Entity>> {
    debug!("REST request to get {} : {}", R::Entity::ENTITY_NAME, id);

    let entity = R::service(&state).find_one(id).await?.ok_or_not_found()?;
    Ok(Json(entity))
}

/// Delete an entity. Deleting an unknown id still answers 204.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let name = R::Entity::ENTITY_NAME;
    debug!("REST request to delete {} : {}", name, id);

    R::service(&state).delete(id).await?;

    Ok((StatusCode::NO_CONTENT, entity_deletion_alert(name, &id.to_string())).into_response())
}

/// List one page of the children of `parent_id`.
pub async fn list_children<C: ChildResource>(
    State(state): State<AppState>,
    Path(parent_id): Path<i64>,
    OriginalUri(uri): OriginalUri,
    Pageable(request): Pageable,
) -> AppResult<Response> {
    debug!(
        "REST request to get a page of {} for parent {}",
        C::COLLECTION,
        parent_id
    );

    let page = C::lookup(&state)
        .find_page_by_parent(parent_id, request.clone())
        .await?;
    let headers = pagination_headers(uri.path(), &request, &page);

    Ok((headers, Json(page.content)).into_response())
}
