//! Apartment database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::{Apartment, Floor};

use crate::repository::{ChildRecord, Record};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apartment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub apartment_number: Option<i32>,
    pub floor_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::floor::Entity",
        from = "Column::FloorId",
        to = "super::floor::Column::Id"
    )]
    Floor,
}

impl Related<super::floor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Floor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Record for Apartment {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;

    fn from_model(model: Model) -> Self {
        Apartment {
            id: Some(model.id),
            name: model.name,
            apartment_number: model.apartment_number,
            floor_id: model.floor_id,
        }
    }

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map(Set).unwrap_or(NotSet),
            name: Set(self.name),
            apartment_number: Set(self.apartment_number),
            floor_id: Set(self.floor_id),
        }
    }

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(property: &str) -> Option<Column> {
        match property {
            "id" => Some(Column::Id),
            "name" => Some(Column::Name),
            "apartmentNumber" => Some(Column::ApartmentNumber),
            "floorId" => Some(Column::FloorId),
            _ => None,
        }
    }
}

impl ChildRecord for Apartment {
    type Parent = Floor;

    fn parent_column() -> Column {
        Column::FloorId
    }
}
