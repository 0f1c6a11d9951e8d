//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Status and
//! role columns are stored as strings; a value outside the known set
//! means the row was written by something else and maps to
//! [`DomainError::Internal`].

use crate::contract::{
    Categorie, Client, ClientStatus, Commande, DetailCommande, DomainError, Facture, Fournisseur,
    Notification, OrderStatus, Piece, Role, SaleStatus, Stock, User, Vehicule, Vente,
};
use super::entity;
use tracing::error;

pub(super) fn corrupt(table: &str, id: i32, column: &str, value: &str) -> DomainError {
    error!(table, id, column, value, "unknown enum value in stored row");
    DomainError::Internal
}

// ===== User Conversions =====

impl TryFrom<entity::users::Model> for User {
    type Error = DomainError;

    fn try_from(entity: entity::users::Model) -> Result<Self, Self::Error> {
        let role = Role::parse(&entity.role)
            .ok_or_else(|| corrupt("users", entity.id, "role", &entity.role))?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            avatar: entity.avatar,
            reset_token_hash: entity.reset_token_hash,
            reset_expires_at: entity.reset_expires_at,
            created_at: entity.created_at,
        })
    }
}

impl From<&User> for entity::users::ActiveModel {
    fn from(model: &User) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            email: Set(model.email.clone()),
            password_hash: Set(model.password_hash.clone()),
            role: Set(model.role.as_str().to_string()),
            avatar: Set(model.avatar.clone()),
            reset_token_hash: Set(model.reset_token_hash.clone()),
            reset_expires_at: Set(model.reset_expires_at),
            created_at: Set(model.created_at),
        }
    }
}

// ===== Client Conversions =====

impl TryFrom<entity::clients::Model> for Client {
    type Error = DomainError;

    fn try_from(entity: entity::clients::Model) -> Result<Self, Self::Error> {
        let statut = ClientStatus::parse(&entity.statut)
            .ok_or_else(|| corrupt("clients", entity.id, "statut", &entity.statut))?;

        Ok(Self {
            id: entity.id,
            nom: entity.nom,
            email: entity.email,
            telephone: entity.telephone,
            adresse: entity.adresse,
            statut,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&Client> for entity::clients::ActiveModel {
    fn from(model: &Client) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            nom: Set(model.nom.clone()),
            email: Set(model.email.clone()),
            telephone: Set(model.telephone.clone()),
            adresse: Set(model.adresse.clone()),
            statut: Set(model.statut.as_str().to_string()),
            image: Set(model.image.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Fournisseur Conversions =====

impl From<entity::fournisseurs::Model> for Fournisseur {
    fn from(entity: entity::fournisseurs::Model) -> Self {
        Self {
            id: entity.id,
            nom: entity.nom,
            adresse: entity.adresse,
            telephone: entity.telephone,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

impl From<&Fournisseur> for entity::fournisseurs::ActiveModel {
    fn from(model: &Fournisseur) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            nom: Set(model.nom.clone()),
            adresse: Set(model.adresse.clone()),
            telephone: Set(model.telephone.clone()),
            email: Set(model.email.clone()),
            created_at: Set(model.created_at),
        }
    }
}

// ===== Vehicule Conversions =====

impl From<entity::vehicules::Model> for Vehicule {
    fn from(entity: entity::vehicules::Model) -> Self {
        Self {
            id: entity.id,
            marque: entity.marque,
            modele: entity.modele,
            plaque: entity.plaque,
            annee: entity.annee,
            kilometrage: entity.kilometrage,
            r#type: entity.r#type,
            statut: entity.statut,
            created_at: entity.created_at,
        }
    }
}

impl From<&Vehicule> for entity::vehicules::ActiveModel {
    fn from(model: &Vehicule) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            marque: Set(model.marque.clone()),
            modele: Set(model.modele.clone()),
            plaque: Set(model.plaque.clone()),
            annee: Set(model.annee),
            kilometrage: Set(model.kilometrage),
            r#type: Set(model.r#type.clone()),
            statut: Set(model.statut.clone()),
            created_at: Set(model.created_at),
        }
    }
}

// ===== Categorie Conversions =====

impl From<entity::categories::Model> for Categorie {
    fn from(entity: entity::categories::Model) -> Self {
        Self {
            id: entity.id,
            nom: entity.nom,
            description: entity.description,
        }
    }
}

impl From<&Categorie> for entity::categories::ActiveModel {
    fn from(model: &Categorie) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            nom: Set(model.nom.clone()),
            description: Set(model.description.clone()),
        }
    }
}

// ===== Piece Conversions =====

impl From<entity::pieces::Model> for Piece {
    fn from(entity: entity::pieces::Model) -> Self {
        Self {
            id: entity.id,
            nom: entity.nom,
            description: entity.description,
            prix: entity.prix,
            image: entity.image,
            categorie_id: entity.categorie_id,
            fournisseur_id: entity.fournisseur_id,
        }
    }
}

impl From<&Piece> for entity::pieces::ActiveModel {
    fn from(model: &Piece) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            nom: Set(model.nom.clone()),
            description: Set(model.description.clone()),
            prix: Set(model.prix),
            image: Set(model.image.clone()),
            categorie_id: Set(model.categorie_id),
            fournisseur_id: Set(model.fournisseur_id),
        }
    }
}

// ===== Stock Conversions =====

impl From<entity::stocks::Model> for Stock {
    fn from(entity: entity::stocks::Model) -> Self {
        Self {
            id: entity.id,
            piece_id: entity.piece_id,
            quantity: entity.quantity,
        }
    }
}

// ===== Commande Conversions =====

impl TryFrom<entity::commandes::Model> for Commande {
    type Error = DomainError;

    fn try_from(entity: entity::commandes::Model) -> Result<Self, Self::Error> {
        let statut = OrderStatus::parse(&entity.statut)
            .ok_or_else(|| corrupt("commandes", entity.id, "statut", &entity.statut))?;

        Ok(Self {
            id: entity.id,
            client_id: entity.client_id,
            user_id: entity.user_id,
            statut,
            montant: entity.montant,
            created_at: entity.created_at,
        })
    }
}

// ===== DetailCommande Conversions =====

impl From<entity::details_commande::Model> for DetailCommande {
    fn from(entity: entity::details_commande::Model) -> Self {
        Self {
            id: entity.id,
            commande_id: entity.commande_id,
            piece_id: entity.piece_id,
            quantity: entity.quantity,
            price: entity.price,
        }
    }
}

// ===== Facture Conversions =====

impl From<entity::factures::Model> for Facture {
    fn from(entity: entity::factures::Model) -> Self {
        Self {
            id: entity.id,
            commande_id: entity.commande_id,
            total: entity.total,
            date_facture: entity.date_facture,
        }
    }
}

// ===== Vente Conversions =====

impl TryFrom<entity::ventes::Model> for Vente {
    type Error = DomainError;

    fn try_from(entity: entity::ventes::Model) -> Result<Self, Self::Error> {
        let statut = SaleStatus::parse(&entity.statut)
            .ok_or_else(|| corrupt("ventes", entity.id, "statut", &entity.statut))?;

        Ok(Self {
            id: entity.id,
            piece_id: entity.piece_id,
            client_id: entity.client_id,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            discount: entity.discount,
            total: entity.total,
            statut,
            notes: entity.notes,
            date_vente: entity.date_vente,
        })
    }
}

// ===== Notification Conversions =====

impl From<entity::notifications::Model> for Notification {
    fn from(entity: entity::notifications::Model) -> Self {
        Self {
            id: entity.id,
            r#type: entity.r#type,
            message: entity.message,
            entity_id: entity.entity_id,
            user_id: entity.user_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

impl From<&Notification> for entity::notifications::ActiveModel {
    fn from(model: &Notification) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            r#type: Set(model.r#type.clone()),
            message: Set(model.message.clone()),
            entity_id: Set(model.entity_id),
            user_id: Set(model.user_id),
            is_read: Set(model.is_read),
            created_at: Set(model.created_at),
        }
    }
}
