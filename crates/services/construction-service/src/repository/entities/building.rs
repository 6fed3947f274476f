//! Building database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::Building;

use crate::repository::Record;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "building")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::floor::Entity")]
    Floor,
}

impl Related<super::floor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Floor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Record for Building {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;

    fn from_model(model: Model) -> Self {
        Building {
            id: Some(model.id),
            name: model.name,
        }
    }

    fn into_active(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map(Set).unwrap_or(NotSet),
            name: Set(self.name),
        }
    }

    fn id_column() -> Column {
        Column::Id
    }

    fn sort_column(property: &str) -> Option<Column> {
        match property {
            "id" => Some(Column::Id),
            "name" => Some(Column::Name),
            _ => None,
        }
    }
}
