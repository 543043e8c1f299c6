use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string_len(Item::Name, 150))
                    .col(string_len_null(Item::Description, 1000))
                    // Store-level backstops for the non-negativity invariants
                    .col(integer(Item::Quantity).check(Expr::col(Item::Quantity).gte(0)))
                    .col(decimal_len(Item::Price, 18, 2).check(Expr::col(Item::Price).gte(0)))
                    .col(integer(Item::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_category_id")
                            .from(Item::Table, Item::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    Name,
    Description,
    Quantity,
    Price,
    CategoryId,
}
