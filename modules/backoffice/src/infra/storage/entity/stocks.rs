use sea_orm::entity::prelude::*;

/// Stock levels table entity
///
/// One row per part, enforced by the unique index on `piece_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub piece_id: i32,

    /// On-hand quantity, never negative
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pieces::Entity",
        from = "Column::PieceId",
        to = "super::pieces::Column::Id"
    )]
    Piece,
}

impl Related<super::pieces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Piece.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
