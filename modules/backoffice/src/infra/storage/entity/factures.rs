use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Invoices table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "factures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub commande_id: i32,

    /// Amount snapshot taken at invoicing time
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,

    pub date_facture: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::commandes::Entity",
        from = "Column::CommandeId",
        to = "super::commandes::Column::Id"
    )]
    Commande,
}

impl Related<super::commandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commande.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
