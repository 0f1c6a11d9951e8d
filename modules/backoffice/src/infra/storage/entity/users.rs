use sea_orm::entity::prelude::*;

/// Staff accounts table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Login identifier, unique across the table
    #[sea_orm(unique)]
    pub email: String,

    /// Argon2 hash, never the clear-text password
    pub password_hash: String,

    pub role: String,

    /// Public path of the uploaded avatar
    pub avatar: Option<String>,

    /// SHA-256 of the pending reset token
    pub reset_token_hash: Option<String>,

    pub reset_expires_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::commandes::Entity")]
    Commandes,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
}

impl Related<super::commandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commandes.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
