use sea_orm::entity::prelude::*;

/// Vehicles table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "vehicules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub marque: String,

    pub modele: String,

    /// Registration plate, unique across the table
    #[sea_orm(unique)]
    pub plaque: String,

    pub annee: i32,

    pub kilometrage: i32,

    pub r#type: String,

    pub statut: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
