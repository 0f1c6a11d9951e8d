use sea_orm::entity::prelude::*;

/// Customers table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nom: String,

    pub email: String,

    pub telephone: Option<String>,

    pub adresse: Option<String>,

    pub statut: String,

    /// Public path of the uploaded photo
    pub image: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::commandes::Entity")]
    Commandes,
    #[sea_orm(has_many = "super::ventes::Entity")]
    Ventes,
}

impl Related<super::commandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commandes.def()
    }
}

impl Related<super::ventes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ventes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
