use sea_orm::entity::prelude::*;

/// Notifications table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub r#type: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    /// Id of the record the notification points at, if any
    pub entity_id: Option<i32>,

    /// Target user, or none for a broadcast
    pub user_id: Option<i32>,

    pub is_read: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
