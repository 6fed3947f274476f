//! Migration: Create floor table referencing building.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_building_table::Building;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Floor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Floor::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Floor::FloorNumber).integer().not_null())
                    .col(ColumnDef::new(Floor::BuildingId).big_integer().null())
                    // No ON DELETE action: deleting a referenced building is rejected
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_floor_building_id")
                            .from(Floor::Table, Floor::BuildingId)
                            .to(Building::Table, Building::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_floor_building_id")
                    .table(Floor::Table)
                    .col(Floor::BuildingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_floor_building_id")
                    .table(Floor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Floor::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Floor {
    Table,
    Id,
    FloorNumber,
    BuildingId,
}
