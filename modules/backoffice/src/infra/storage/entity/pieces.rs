use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Spare parts table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "pieces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nom: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Unit price in euros
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub prix: Decimal,

    /// Public path of the uploaded photo
    pub image: Option<String>,

    pub categorie_id: Option<i32>,

    pub fournisseur_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategorieId",
        to = "super::categories::Column::Id"
    )]
    Categorie,
    #[sea_orm(
        belongs_to = "super::fournisseurs::Entity",
        from = "Column::FournisseurId",
        to = "super::fournisseurs::Column::Id"
    )]
    Fournisseur,
    #[sea_orm(has_many = "super::details_commande::Entity")]
    DetailsCommande,
    #[sea_orm(has_many = "super::ventes::Entity")]
    Ventes,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categorie.def()
    }
}

impl Related<super::fournisseurs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fournisseur.def()
    }
}

impl Related<super::details_commande::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetailsCommande.def()
    }
}

impl Related<super::ventes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ventes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
