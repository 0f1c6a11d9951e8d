use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Order lines table entity
///
/// Rows are removed with their order through the cascading foreign key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "details_commande")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub commande_id: i32,

    pub piece_id: i32,

    pub quantity: i32,

    /// Unit price captured when the line was written
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::commandes::Entity",
        from = "Column::CommandeId",
        to = "super::commandes::Column::Id"
    )]
    Commande,
    #[sea_orm(
        belongs_to = "super::pieces::Entity",
        from = "Column::PieceId",
        to = "super::pieces::Column::Id"
    )]
    Piece,
}

impl Related<super::commandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commande.def()
    }
}

impl Related<super::pieces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Piece.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
