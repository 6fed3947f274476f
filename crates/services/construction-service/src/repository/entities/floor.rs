//! Floor database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::{Building, Floor};

use crate::repository::{ChildRecord, Record};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "floor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub floor_number: i32,
    /// Owning building (nullable)
    pub building_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::building::Entity",
        from = "Column::BuildingId",
        to = "super::building::Column::Id"
    )]
    Building,
    #[sea_orm(has_many = "super::apartment::Entity")]
    Apartment,
}

impl Related<super::building::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Record for Floor {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;

    fn from_model(model: Model) -> Self {
        Floor {
            id: Some(model.id),
            floor_number: model.floor_number,
            building_id: model.building_id,
        }
    }

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map(Set).unwrap_or(NotSet),
            floor_number: Set(self.floor_number),
            building_id: Set(self.building_id),
        }
    }

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(property: &str) -> Option<Column> {
        match property {
            "id" => Some(Column::Id),
            "floorNumber" => Some(Column::FloorNumber),
            "buildingId" => Some(Column::BuildingId),
            _ => None,
        }
    }
}

impl ChildRecord for Floor {
    type Parent = Building;

    fn parent_column() -> Column {
        Column::BuildingId
    }
}
