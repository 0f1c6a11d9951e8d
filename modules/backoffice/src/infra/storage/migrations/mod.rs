//! Database migrations for the back-office schema

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250115_000001_create_users::Migration),
            Box::new(m20250115_000002_create_clients::Migration),
            Box::new(m20250115_000003_create_fournisseurs::Migration),
            Box::new(m20250115_000004_create_categories::Migration),
            Box::new(m20250115_000005_create_vehicules::Migration),
            Box::new(m20250115_000006_create_pieces::Migration),
            Box::new(m20250115_000007_create_stocks::Migration),
            Box::new(m20250115_000008_create_commandes::Migration),
            Box::new(m20250115_000009_create_details_commande::Migration),
            Box::new(m20250115_000010_create_factures::Migration),
            Box::new(m20250115_000011_create_ventes::Migration),
            Box::new(m20250115_000012_create_notifications::Migration),
        ]
    }
}

mod m20250115_000001_create_users {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Users::FirstName).string().not_null())
                        .col(ColumnDef::new(Users::LastName).string().not_null())
                        .col(
                            ColumnDef::new(Users::Email)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Users::Role).string().not_null())
                        .col(ColumnDef::new(Users::Avatar).string())
                        .col(ColumnDef::new(Users::ResetTokenHash).string())
                        .col(ColumnDef::new(Users::ResetExpiresAt).timestamp_with_time_zone())
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        FirstName,
        LastName,
        Email,
        PasswordHash,
        Role,
        Avatar,
        ResetTokenHash,
        ResetExpiresAt,
        CreatedAt,
    }
}

mod m20250115_000002_create_clients {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Clients::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Clients::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Clients::Nom).string().not_null())
                        .col(ColumnDef::new(Clients::Email).string().not_null())
                        .col(ColumnDef::new(Clients::Telephone).string())
                        .col(ColumnDef::new(Clients::Adresse).string())
                        .col(ColumnDef::new(Clients::Statut).string().not_null())
                        .col(ColumnDef::new(Clients::Image).string())
                        .col(
                            ColumnDef::new(Clients::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Clients::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Clients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Clients {
        Table,
        Id,
        Nom,
        Email,
        Telephone,
        Adresse,
        Statut,
        Image,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250115_000003_create_fournisseurs {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Fournisseurs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Fournisseurs::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Fournisseurs::Nom).string().not_null())
                        .col(ColumnDef::new(Fournisseurs::Adresse).string())
                        .col(ColumnDef::new(Fournisseurs::Telephone).string())
                        .col(ColumnDef::new(Fournisseurs::Email).string())
                        .col(
                            ColumnDef::new(Fournisseurs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Fournisseurs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Fournisseurs {
        Table,
        Id,
        Nom,
        Adresse,
        Telephone,
        Email,
        CreatedAt,
    }
}

mod m20250115_000004_create_categories {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Categories::Nom).string().not_null())
                        .col(ColumnDef::new(Categories::Description).text())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Categories {
        Table,
        Id,
        Nom,
        Description,
    }
}

mod m20250115_000005_create_vehicules {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vehicules::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vehicules::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Vehicules::Marque).string().not_null())
                        .col(ColumnDef::new(Vehicules::Modele).string().not_null())
                        .col(
                            ColumnDef::new(Vehicules::Plaque)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Vehicules::Annee).integer().not_null())
                        .col(ColumnDef::new(Vehicules::Kilometrage).integer().not_null())
                        .col(ColumnDef::new(Vehicules::Type).string().not_null())
                        .col(ColumnDef::new(Vehicules::Statut).string().not_null())
                        .col(
                            ColumnDef::new(Vehicules::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Vehicules::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Vehicules {
        Table,
        Id,
        Marque,
        Modele,
        Plaque,
        Annee,
        Kilometrage,
        Type,
        Statut,
        CreatedAt,
    }
}

mod m20250115_000006_create_pieces {
    use super::*;
    use super::m20250115_000003_create_fournisseurs::Fournisseurs;
    use super::m20250115_000004_create_categories::Categories;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Pieces::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Pieces::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Pieces::Nom).string().not_null())
                        .col(ColumnDef::new(Pieces::Description).text())
                        .col(
                            ColumnDef::new(Pieces::Prix)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Pieces::Image).string())
                        .col(ColumnDef::new(Pieces::CategorieId).integer())
                        .col(ColumnDef::new(Pieces::FournisseurId).integer())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pieces_categorie")
                                .from(Pieces::Table, Pieces::CategorieId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pieces_fournisseur")
                                .from(Pieces::Table, Pieces::FournisseurId)
                                .to(Fournisseurs::Table, Fournisseurs::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Pieces::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Pieces {
        Table,
        Id,
        Nom,
        Description,
        Prix,
        Image,
        CategorieId,
        FournisseurId,
    }
}

mod m20250115_000007_create_stocks {
    use super::*;
    use super::m20250115_000006_create_pieces::Pieces;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Stocks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Stocks::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Stocks::PieceId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Stocks::Quantity).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stocks_piece")
                                .from(Stocks::Table, Stocks::PieceId)
                                .to(Pieces::Table, Pieces::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Stocks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Stocks {
        Table,
        Id,
        PieceId,
        Quantity,
    }
}

mod m20250115_000008_create_commandes {
    use super::*;
    use super::m20250115_000001_create_users::Users;
    use super::m20250115_000002_create_clients::Clients;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Commandes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Commandes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Commandes::ClientId).integer().not_null())
                        .col(ColumnDef::new(Commandes::UserId).integer().not_null())
                        .col(ColumnDef::new(Commandes::Statut).string().not_null())
                        .col(
                            ColumnDef::new(Commandes::Montant)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Commandes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_commandes_client")
                                .from(Commandes::Table, Commandes::ClientId)
                                .to(Clients::Table, Clients::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_commandes_user")
                                .from(Commandes::Table, Commandes::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_commandes_client_id")
                        .table(Commandes::Table)
                        .col(Commandes::ClientId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_commandes_created_at")
                        .table(Commandes::Table)
                        .col(Commandes::CreatedAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Commandes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Commandes {
        Table,
        Id,
        ClientId,
        UserId,
        Statut,
        Montant,
        CreatedAt,
    }
}

mod m20250115_000009_create_details_commande {
    use super::*;
    use super::m20250115_000006_create_pieces::Pieces;
    use super::m20250115_000008_create_commandes::Commandes;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DetailsCommande::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DetailsCommande::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(DetailsCommande::CommandeId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DetailsCommande::PieceId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DetailsCommande::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DetailsCommande::Price)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_details_commande_commande")
                                .from(DetailsCommande::Table, DetailsCommande::CommandeId)
                                .to(Commandes::Table, Commandes::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_details_commande_piece")
                                .from(DetailsCommande::Table, DetailsCommande::PieceId)
                                .to(Pieces::Table, Pieces::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_details_commande_commande_id")
                        .table(DetailsCommande::Table)
                        .col(DetailsCommande::CommandeId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DetailsCommande::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DetailsCommande {
        Table,
        Id,
        CommandeId,
        PieceId,
        Quantity,
        Price,
    }
}

mod m20250115_000010_create_factures {
    use super::*;
    use super::m20250115_000008_create_commandes::Commandes;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Factures::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Factures::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Factures::CommandeId).integer().not_null())
                        .col(
                            ColumnDef::new(Factures::Total)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Factures::DateFacture)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_factures_commande")
                                .from(Factures::Table, Factures::CommandeId)
                                .to(Commandes::Table, Commandes::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Factures::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Factures {
        Table,
        Id,
        CommandeId,
        Total,
        DateFacture,
    }
}

mod m20250115_000011_create_ventes {
    use super::*;
    use super::m20250115_000002_create_clients::Clients;
    use super::m20250115_000006_create_pieces::Pieces;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Ventes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Ventes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Ventes::PieceId).integer().not_null())
                        .col(ColumnDef::new(Ventes::ClientId).integer().not_null())
                        .col(ColumnDef::new(Ventes::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(Ventes::UnitPrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Ventes::Discount)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Ventes::Total)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Ventes::Statut).string().not_null())
                        .col(ColumnDef::new(Ventes::Notes).text())
                        .col(
                            ColumnDef::new(Ventes::DateVente)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ventes_piece")
                                .from(Ventes::Table, Ventes::PieceId)
                                .to(Pieces::Table, Pieces::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ventes_client")
                                .from(Ventes::Table, Ventes::ClientId)
                                .to(Clients::Table, Clients::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_ventes_client_id")
                        .table(Ventes::Table)
                        .col(Ventes::ClientId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Ventes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Ventes {
        Table,
        Id,
        PieceId,
        ClientId,
        Quantity,
        UnitPrice,
        Discount,
        Total,
        Statut,
        Notes,
        DateVente,
    }
}

mod m20250115_000012_create_notifications {
    use super::*;
    use super::m20250115_000001_create_users::Users;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Notifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notifications::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Notifications::Type).string().not_null())
                        .col(ColumnDef::new(Notifications::Message).text().not_null())
                        .col(ColumnDef::new(Notifications::EntityId).integer())
                        .col(ColumnDef::new(Notifications::UserId).integer())
                        .col(
                            ColumnDef::new(Notifications::IsRead)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Notifications::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notifications_user")
                                .from(Notifications::Table, Notifications::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_notifications_user_id")
                        .table(Notifications::Table)
                        .col(Notifications::UserId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Notifications::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Notifications {
        Table,
        Id,
        Type,
        Message,
        EntityId,
        UserId,
        IsRead,
        CreatedAt,
    }
}
