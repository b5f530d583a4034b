use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    FirstName,
    Email,
    PasswordHash,
    IsActive,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Uid,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
    Uid,
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
}

/// Exactly one favorite target column is populated.
const FAVORITE_SINGLE_TARGET_CHECK: &str = "(character_id IS NULL) <> (planet_id IS NULL)";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string_len(80).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // characters
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Characters::Name)
                            .string_len(150)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Characters::Height).integer().null())
                    .col(ColumnDef::new(Characters::Mass).integer().null())
                    .col(ColumnDef::new(Characters::HairColor).string_len(250).null())
                    .col(ColumnDef::new(Characters::SkinColor).string_len(250).null())
                    .col(ColumnDef::new(Characters::EyeColor).string_len(250).null())
                    .col(ColumnDef::new(Characters::BirthYear).string_len(250).null())
                    .col(ColumnDef::new(Characters::Gender).string_len(250).null())
                    .col(ColumnDef::new(Characters::Uid).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        // planets
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Planets::Name).string_len(250).null())
                    .col(ColumnDef::new(Planets::Diameter).integer().null())
                    .col(ColumnDef::new(Planets::RotationPeriod).integer().null())
                    .col(ColumnDef::new(Planets::OrbitalPeriod).integer().null())
                    .col(ColumnDef::new(Planets::Gravity).string_len(250).null())
                    .col(ColumnDef::new(Planets::Population).big_integer().null())
                    .col(ColumnDef::new(Planets::Climate).string_len(250).null())
                    .col(ColumnDef::new(Planets::Terrain).string_len(250).null())
                    .col(ColumnDef::new(Planets::SurfaceWater).integer().null())
                    .col(ColumnDef::new(Planets::Uid).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        // favorites
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Favorites::CharacterId).big_integer().null())
                    .col(ColumnDef::new(Favorites::PlanetId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_character_id")
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet_id")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .check(Expr::cust(FAVORITE_SINGLE_TARGET_CHECK))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_favorites_user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_favorites_user_id")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
