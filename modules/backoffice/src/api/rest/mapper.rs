//! Mapper implementations for converting between DTOs and contract models
//!
//! Responses convert infallibly; requests that carry a status string
//! convert through `TryFrom`, so an unknown status surfaces as a
//! validation error instead of being silently coerced.

use super::dto::*;
use crate::contract::{self, ClientStatus, DomainError, OrderStatus, SaleStatus};

// ===== Status parsing =====

pub fn parse_order_status(value: &str) -> Result<OrderStatus, DomainError> {
    OrderStatus::parse(value).ok_or_else(|| {
        DomainError::validation(format!("statut de commande invalide: '{}'", value))
    })
}

pub fn parse_sale_status(value: &str) -> Result<SaleStatus, DomainError> {
    SaleStatus::parse(value)
        .ok_or_else(|| DomainError::validation(format!("statut de vente invalide: '{}'", value)))
}

pub fn parse_client_status(value: &str) -> Result<ClientStatus, DomainError> {
    ClientStatus::parse(value)
        .ok_or_else(|| DomainError::validation(format!("statut de client invalide: '{}'", value)))
}

// ===== Auth conversions =====

impl From<contract::UserPublic> for UserDto {
    fn from(user: contract::UserPublic) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role.as_str().to_string(),
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

impl From<RegisterRequest> for contract::NewUser {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        }
    }
}

impl From<LoginRequest> for contract::Credentials {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

impl From<UpdateProfileRequest> for contract::ProfilePatch {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        }
    }
}

// ===== Client conversions =====

impl From<contract::Client> for ClientDto {
    fn from(client: contract::Client) -> Self {
        Self {
            id: client.id,
            nom: client.nom,
            email: client.email,
            telephone: client.telephone,
            adresse: client.adresse,
            statut: client.statut.as_str().to_string(),
            image: client.image,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

impl TryFrom<CreateClientRequest> for contract::NewClient {
    type Error = DomainError;

    fn try_from(req: CreateClientRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            nom: req.nom,
            email: req.email,
            telephone: req.telephone,
            adresse: req.adresse,
            statut: req
                .statut
                .as_deref()
                .map(parse_client_status)
                .transpose()?,
        })
    }
}

impl TryFrom<UpdateClientRequest> for contract::ClientPatch {
    type Error = DomainError;

    fn try_from(req: UpdateClientRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            nom: req.nom,
            email: req.email,
            telephone: req.telephone,
            adresse: req.adresse,
            statut: req
                .statut
                .as_deref()
                .map(parse_client_status)
                .transpose()?,
        })
    }
}

// ===== Fournisseur conversions =====

impl From<contract::Fournisseur> for FournisseurDto {
    fn from(fournisseur: contract::Fournisseur) -> Self {
        Self {
            id: fournisseur.id,
            nom: fournisseur.nom,
            adresse: fournisseur.adresse,
            telephone: fournisseur.telephone,
            email: fournisseur.email,
            created_at: fournisseur.created_at,
        }
    }
}

impl From<CreateFournisseurRequest> for contract::NewFournisseur {
    fn from(req: CreateFournisseurRequest) -> Self {
        Self {
            nom: req.nom,
            adresse: req.adresse,
            telephone: req.telephone,
            email: req.email,
        }
    }
}

impl From<UpdateFournisseurRequest> for contract::FournisseurPatch {
    fn from(req: UpdateFournisseurRequest) -> Self {
        Self {
            nom: req.nom,
            adresse: req.adresse,
            telephone: req.telephone,
            email: req.email,
        }
    }
}

// ===== Vehicule conversions =====

impl From<contract::Vehicule> for VehiculeDto {
    fn from(vehicule: contract::Vehicule) -> Self {
        Self {
            id: vehicule.id,
            marque: vehicule.marque,
            modele: vehicule.modele,
            plaque: vehicule.plaque,
            annee: vehicule.annee,
            kilometrage: vehicule.kilometrage,
            r#type: vehicule.r#type,
            statut: vehicule.statut,
            created_at: vehicule.created_at,
        }
    }
}

impl From<CreateVehiculeRequest> for contract::NewVehicule {
    fn from(req: CreateVehiculeRequest) -> Self {
        Self {
            marque: req.marque,
            modele: req.modele,
            plaque: req.plaque,
            annee: req.annee,
            kilometrage: req.kilometrage,
            r#type: req.r#type,
            statut: req.statut,
        }
    }
}

impl From<UpdateVehiculeRequest> for contract::VehiculePatch {
    fn from(req: UpdateVehiculeRequest) -> Self {
        Self {
            marque: req.marque,
            modele: req.modele,
            plaque: req.plaque,
            annee: req.annee,
            kilometrage: req.kilometrage,
            r#type: req.r#type,
            statut: req.statut,
        }
    }
}

// ===== Categorie conversions =====

impl From<contract::Categorie> for CategorieDto {
    fn from(categorie: contract::Categorie) -> Self {
        Self {
            id: categorie.id,
            nom: categorie.nom,
            description: categorie.description,
        }
    }
}

impl From<CreateCategorieRequest> for contract::NewCategorie {
    fn from(req: CreateCategorieRequest) -> Self {
        Self {
            nom: req.nom,
            description: req.description,
        }
    }
}

impl From<UpdateCategorieRequest> for contract::CategoriePatch {
    fn from(req: UpdateCategorieRequest) -> Self {
        Self {
            nom: req.nom,
            description: req.description,
        }
    }
}

// ===== Piece conversions =====

impl From<contract::Piece> for PieceDto {
    fn from(piece: contract::Piece) -> Self {
        Self {
            id: piece.id,
            nom: piece.nom,
            description: piece.description,
            prix: piece.prix,
            image: piece.image,
            categorie_id: piece.categorie_id,
            categorie_nom: None,
            fournisseur_id: piece.fournisseur_id,
            fournisseur_nom: None,
        }
    }
}

impl From<contract::PieceView> for PieceDto {
    fn from(view: contract::PieceView) -> Self {
        Self {
            id: view.id,
            nom: view.nom,
            description: view.description,
            prix: view.prix,
            image: view.image,
            categorie_id: view.categorie_id,
            categorie_nom: view.categorie_nom,
            fournisseur_id: view.fournisseur_id,
            fournisseur_nom: view.fournisseur_nom,
        }
    }
}

impl From<CreatePieceRequest> for contract::NewPiece {
    fn from(req: CreatePieceRequest) -> Self {
        Self {
            nom: req.nom,
            description: req.description,
            prix: req.prix,
            categorie_id: req.categorie_id,
            fournisseur_id: req.fournisseur_id,
        }
    }
}

impl From<UpdatePieceRequest> for contract::PiecePatch {
    fn from(req: UpdatePieceRequest) -> Self {
        Self {
            nom: req.nom,
            description: req.description,
            prix: req.prix,
            categorie_id: req.categorie_id,
            fournisseur_id: req.fournisseur_id,
        }
    }
}

// ===== Commande conversions =====

impl From<contract::OrderView> for CommandeDto {
    fn from(view: contract::OrderView) -> Self {
        Self {
            id: view.id,
            client_id: view.client_id,
            client_nom: view.client_nom,
            user_id: view.user_id,
            user_nom: view.user_nom,
            statut: view.statut.as_str().to_string(),
            montant: view.montant,
            created_at: view.created_at,
        }
    }
}

impl From<CreateCommandeRequest> for contract::NewOrder {
    fn from(req: CreateCommandeRequest) -> Self {
        Self {
            client_id: req.client_id,
            user_id: req.user_id,
        }
    }
}

impl TryFrom<UpdateCommandeRequest> for contract::OrderPatch {
    type Error = DomainError;

    fn try_from(req: UpdateCommandeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: req.client_id,
            user_id: req.user_id,
            statut: req.statut.as_deref().map(parse_order_status).transpose()?,
        })
    }
}

impl TryFrom<CommandeSearchQuery> for contract::OrderSearch {
    type Error = DomainError;

    fn try_from(query: CommandeSearchQuery) -> Result<Self, Self::Error> {
        // Browsers send empty strings for blank filter inputs.
        Ok(Self {
            query: query.query.filter(|s| !s.is_empty()),
            statut: query
                .statut
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(parse_order_status)
                .transpose()?,
            date_debut: query.date_debut,
            date_fin: query.date_fin,
            client_id: query.client_id,
        })
    }
}

// ===== Detail conversions =====

impl From<contract::DetailCommande> for DetailDto {
    fn from(detail: contract::DetailCommande) -> Self {
        Self {
            id: detail.id,
            commande_id: detail.commande_id,
            piece_id: detail.piece_id,
            piece_nom: None,
            quantity: detail.quantity,
            price: detail.price,
        }
    }
}

impl From<contract::DetailView> for DetailDto {
    fn from(view: contract::DetailView) -> Self {
        Self {
            id: view.id,
            commande_id: view.commande_id,
            piece_id: view.piece_id,
            piece_nom: Some(view.piece_nom),
            quantity: view.quantity,
            price: view.price,
        }
    }
}

impl From<CreateDetailRequest> for contract::NewDetail {
    fn from(req: CreateDetailRequest) -> Self {
        // commande_id comes from the path; the handler fills it in.
        Self {
            commande_id: None,
            piece_id: req.piece_id,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

impl From<UpdateDetailRequest> for contract::NewDetail {
    fn from(req: UpdateDetailRequest) -> Self {
        Self {
            commande_id: None,
            piece_id: req.piece_id,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

// ===== Facture conversions =====

impl From<contract::Facture> for FactureDto {
    fn from(facture: contract::Facture) -> Self {
        Self {
            id: facture.id,
            commande_id: facture.commande_id,
            total: facture.total,
            date_facture: facture.date_facture,
        }
    }
}

impl From<CreateFactureRequest> for contract::NewFacture {
    fn from(req: CreateFactureRequest) -> Self {
        Self {
            commande_id: req.commande_id,
            total: req.total,
        }
    }
}

// ===== Stock conversions =====

impl From<contract::Stock> for StockDto {
    fn from(stock: contract::Stock) -> Self {
        Self {
            id: stock.id,
            piece_id: stock.piece_id,
            piece_nom: None,
            quantity: stock.quantity,
        }
    }
}

impl From<contract::StockView> for StockDto {
    fn from(view: contract::StockView) -> Self {
        Self {
            id: view.id,
            piece_id: view.piece_id,
            piece_nom: Some(view.piece_nom),
            quantity: view.quantity,
        }
    }
}

impl From<CreateStockRequest> for contract::NewStock {
    fn from(req: CreateStockRequest) -> Self {
        Self {
            piece_id: req.piece_id,
            quantity: req.quantity,
        }
    }
}

// ===== Vente conversions =====

impl From<contract::Vente> for VenteDto {
    fn from(vente: contract::Vente) -> Self {
        Self {
            id: vente.id,
            piece_id: vente.piece_id,
            piece_nom: None,
            client_id: vente.client_id,
            client_nom: None,
            quantity: vente.quantity,
            unit_price: vente.unit_price,
            discount: vente.discount,
            total: vente.total,
            statut: vente.statut.as_str().to_string(),
            notes: vente.notes,
            date_vente: vente.date_vente,
        }
    }
}

impl From<contract::VenteView> for VenteDto {
    fn from(view: contract::VenteView) -> Self {
        Self {
            id: view.id,
            piece_id: view.piece_id,
            piece_nom: Some(view.piece_nom),
            client_id: view.client_id,
            client_nom: Some(view.client_nom),
            quantity: view.quantity,
            unit_price: view.unit_price,
            discount: view.discount,
            total: view.total,
            statut: view.statut.as_str().to_string(),
            notes: view.notes,
            date_vente: view.date_vente,
        }
    }
}

impl From<CreateVenteRequest> for contract::NewVente {
    fn from(req: CreateVenteRequest) -> Self {
        Self {
            piece_id: req.piece_id,
            client_id: req.client_id,
            quantity: req.quantity,
            unit_price: req.unit_price,
            discount: req.discount,
            notes: req.notes,
        }
    }
}

impl TryFrom<UpdateVenteRequest> for contract::VentePatch {
    type Error = DomainError;

    fn try_from(req: UpdateVenteRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            statut: req.statut.as_deref().map(parse_sale_status).transpose()?,
            notes: req.notes,
        })
    }
}

// ===== Notification conversions =====

impl From<contract::Notification> for NotificationDto {
    fn from(notification: contract::Notification) -> Self {
        Self {
            id: notification.id,
            r#type: notification.r#type,
            message: notification.message,
            entity_id: notification.entity_id,
            user_id: notification.user_id,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

impl From<CreateNotificationRequest> for contract::NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        Self {
            r#type: req.r#type,
            message: req.message,
            entity_id: req.entity_id,
            user_id: req.user_id,
        }
    }
}
