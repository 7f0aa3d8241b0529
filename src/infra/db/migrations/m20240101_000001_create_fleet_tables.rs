//! Migration: manufacturers, cars, drivers and the car_driver relation.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Manufacturers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Manufacturers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Manufacturers::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Manufacturers::Country).string().not_null())
                    .col(
                        ColumnDef::new(Manufacturers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Manufacturers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cars::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cars::Model).string().not_null())
                    .col(ColumnDef::new(Cars::ManufacturerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Cars::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cars::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_manufacturer")
                            .from(Cars::Table, Cars::ManufacturerId)
                            .to(Manufacturers::Table, Manufacturers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Drivers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Drivers::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Drivers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Drivers::FirstName).string().not_null())
                    .col(ColumnDef::new(Drivers::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Drivers::LicenseNumber)
                            .string_len(8)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Drivers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Drivers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CarDriver::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CarDriver::CarId).uuid().not_null())
                    .col(ColumnDef::new(CarDriver::DriverId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(CarDriver::CarId)
                            .col(CarDriver::DriverId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_driver_car")
                            .from(CarDriver::Table, CarDriver::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_driver_driver")
                            .from(CarDriver::Table, CarDriver::DriverId)
                            .to(Drivers::Table, Drivers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Foreign key lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_manufacturer_id")
                    .table(Cars::Table)
                    .col(Cars::ManufacturerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_driver_driver_id")
                    .table(CarDriver::Table)
                    .col(CarDriver::DriverId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarDriver::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Manufacturers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Manufacturers {
    Table,
    Id,
    Name,
    Country,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Cars {
    Table,
    Id,
    Model,
    ManufacturerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Drivers {
    Table,
    Id,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    LicenseNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CarDriver {
    Table,
    CarId,
    DriverId,
}
