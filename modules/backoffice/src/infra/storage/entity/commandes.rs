use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Orders table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "commandes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub client_id: i32,

    /// Staff member who recorded the order
    pub user_id: i32,

    pub statut: String,

    /// Order total, kept equal to the sum of its lines
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub montant: Decimal,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::details_commande::Entity")]
    DetailsCommande,
    #[sea_orm(has_many = "super::factures::Entity")]
    Factures,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::details_commande::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetailsCommande.def()
    }
}

impl Related<super::factures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Factures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
