use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Direct sales table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ventes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub piece_id: i32,

    pub client_id: i32,

    pub quantity: i32,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub unit_price: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub discount: Decimal,

    /// unit_price * quantity - discount, computed at recording time
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,

    pub statut: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub date_vente: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pieces::Entity",
        from = "Column::PieceId",
        to = "super::pieces::Column::Id"
    )]
    Piece,
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Client,
}

impl Related<super::pieces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Piece.def()
    }
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
