//! Migration: Create apartment table referencing floor.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_floor_table::Floor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apartment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Apartment::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Apartment::Name).string().not_null())
                    .col(ColumnDef::new(Apartment::ApartmentNumber).integer().null())
                    .col(ColumnDef::new(Apartment::FloorId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apartment_floor_id")
                            .from(Apartment::Table, Apartment::FloorId)
                            .to(Floor::Table, Floor::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apartment_floor_id")
                    .table(Apartment::Table)
                    .col(Apartment::FloorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_apartment_floor_id")
                    .table(Apartment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Apartment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Apartment {
    Table,
    Id,
    Name,
    ApartmentNumber,
    FloorId,
}
