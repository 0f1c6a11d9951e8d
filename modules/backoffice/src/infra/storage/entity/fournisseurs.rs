use sea_orm::entity::prelude::*;

/// Suppliers table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "fournisseurs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nom: String,

    pub adresse: Option<String>,

    pub telephone: Option<String>,

    pub email: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pieces::Entity")]
    Pieces,
}

impl Related<super::pieces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pieces.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
