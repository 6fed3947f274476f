//! Generic repository over SeaORM.
//!
//! A domain entity opts into persistence by implementing [`Record`], which
//! maps it to its SeaORM entity, model and active model. A single
//! [`SeaRepository`] then provides every CRUD operation for any record.
//! All operations run on a borrowed transaction; see
//! [`crate::repository::TransactionContext`].

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, SqlErr,
};

use common::error::{ERROR_KEY_PARENT_NOT_FOUND, ERROR_KEY_REFERENCED};
use common::{AppError, AppResult, Direction, Page, PageRequest};
use domain::DomainEntity;

/// Data access operations shared by every entity.
#[async_trait]
pub trait Repository<T: Send + 'static>: Send + Sync {
    /// Fetch one page, ordered by the requested sort with an `id ASC` tie-break.
    async fn find_all(&self, request: &PageRequest) -> AppResult<Page<T>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Insert when the id is unset, replace otherwise.
    ///
    /// An id that matches no row is inserted as-is.
    async fn save(&self, entity: T) -> AppResult<T>;

    /// Delete by id. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

/// Lookup of entities owned by a parent through a foreign key.
#[async_trait]
pub trait ChildRepository<T: Send + 'static>: Repository<T> {
    async fn find_all_by_parent(&self, parent_id: i64, request: &PageRequest)
        -> AppResult<Page<T>>;
}

/// Mapping between a domain entity and its SeaORM representation.
pub trait Record: DomainEntity + Clone + Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: FromQueryResult + IntoActiveModel<Self::ActiveModel> + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    fn from_model(model: Self::Model) -> Self;

    /// Active model with every column set; the id is `NotSet` when absent.
    fn into_active(self) -> Self::ActiveModel;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Column for a JSON sort property, `None` for unknown properties.
    fn sort_column(property: &str) -> Option<<Self::Entity as EntityTrait>::Column>;
}

/// A record owned by a parent record.
pub trait ChildRecord: Record {
    type Parent: Record;

    fn parent_column() -> <Self::Entity as EntityTrait>::Column;
}

/// Transaction-bound repository for any [`Record`].
pub struct SeaRepository<'c, R> {
    conn: &'c DatabaseTransaction,
    _record: PhantomData<R>,
}

impl<'c, R: Record> SeaRepository<'c, R> {
    pub fn new(conn: &'c DatabaseTransaction) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    async fn fetch_page(
        &self,
        select: Select<R::Entity>,
        request: &PageRequest,
    ) -> AppResult<Page<R>> {
        let mut ordered = select.clone();
        for sort in &request.sort {
            let column = R::sort_column(&sort.property).ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown sort property '{}' for {}",
                    sort.property,
                    R::ENTITY_NAME
                ))
            })?;
            ordered = ordered.order_by(column, order(sort.direction));
        }

        let total = select.count(self.conn).await?;
        let models = ordered
            .order_by_asc(R::id_column())
            .offset(request.offset())
            .limit(request.size)
            .all(self.conn)
            .await?;

        let content = models.into_iter().map(R::from_model).collect();
        Ok(Page::new(content, request, total))
    }
}

#[async_trait]
impl<R: Record> Repository<R> for SeaRepository<'_, R> {
    async fn find_all(&self, request: &PageRequest) -> AppResult<Page<R>> {
        self.fetch_page(R::Entity::find(), request).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<R>> {
        let model = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(self.conn)
            .await?;

        Ok(model.map(R::from_model))
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let count = R::Entity::find()
            .filter(R::id_column().eq(id))
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }

    async fn save(&self, entity: R) -> AppResult<R> {
        let exists = match entity.id() {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = entity.into_active();
        let result = if exists {
            active.update(self.conn).await
        } else {
            active.insert(self.conn).await
        };

        let model = result.map_err(|e| constraint_error::<R>(e, ERROR_KEY_PARENT_NOT_FOUND))?;
        Ok(R::from_model(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(self.conn)
            .await
            .map_err(|e| constraint_error::<R>(e, ERROR_KEY_REFERENCED))?;

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let count = R::Entity::find().count(self.conn).await?;
        Ok(count)
    }
}

#[async_trait]
impl<R: ChildRecord> ChildRepository<R> for SeaRepository<'_, R> {
    async fn find_all_by_parent(
        &self,
        parent_id: i64,
        request: &PageRequest,
    ) -> AppResult<Page<R>> {
        let select = R::Entity::find().filter(R::parent_column().eq(parent_id));
        self.fetch_page(select, request).await
    }
}

fn order(direction: Direction) -> Order {
    match direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}

/// Foreign key violations are client errors; everything else stays a
/// database error.
fn constraint_error<R: DomainEntity>(err: DbErr, error_key: &'static str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key violation on {}: {}", R::ENTITY_NAME, detail);
            let message = if error_key == ERROR_KEY_REFERENCED {
                format!("The {} is still referenced", R::ENTITY_NAME)
            } else {
                format!("The parent of this {} does not exist", R::ENTITY_NAME)
            };
            AppError::bad_request_alert(message, R::ENTITY_NAME, error_key)
        }
        _ => AppError::from(err),
    }
}
