// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create avengers table
        manager
            .create_table(
                Table::create()
                    .table(Avengers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Avengers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Avengers::Nick).string().not_null())
                    .col(ColumnDef::new(Avengers::Person).string().not_null())
                    .col(ColumnDef::new(Avengers::Description).text().null())
                    .col(ColumnDef::new(Avengers::History).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Avengers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Avengers {
    Table,
    Id,
    Nick,
    Person,
    Description,
    History,
}
