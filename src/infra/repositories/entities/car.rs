//! Car database entity.

use sea_orm::entity::prelude::*;

use domain::Car;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub model: String,
    pub manufacturer_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::manufacturer::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturer::Column::Id",
        on_delete = "Cascade"
    )]
    Manufacturer,
    #[sea_orm(has_many = "super::car_driver::Entity")]
    CarDriver,
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::car_driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarDriver.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        super::car_driver::Relation::Driver.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::car_driver::Relation::Car.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Car {
    fn from(model: Model) -> Self {
        Car {
            id: model.id,
            model: model.model,
            manufacturer_id: model.manufacturer_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
