//! Directory workflows: clients, suppliers, vehicles, categories,
//! parts and notifications
//!
//! Plain CRUD with field validation at the boundary; referential
//! conflicts come back from the repositories already classified.

use crate::contract::{
    Categorie, CategoriePatch, Client, ClientPatch, ClientStatus, DomainError, Fournisseur,
    FournisseurPatch, NewCategorie, NewClient, NewFournisseur, NewNotification, NewPiece,
    NewVehicule, Notification, Piece, PiecePatch, PieceView, Vehicule, VehiculePatch,
};
use super::repository::{
    CategorieRepository, ClientRepository, FournisseurRepository, NotificationRepository,
    PieceRepository, VehiculeRepository,
};
use super::validation;
use chrono::Utc;
use std::sync::Arc;

pub struct DirectoryService {
    clients: Arc<dyn ClientRepository>,
    fournisseurs: Arc<dyn FournisseurRepository>,
    vehicules: Arc<dyn VehiculeRepository>,
    categories: Arc<dyn CategorieRepository>,
    pieces: Arc<dyn PieceRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl DirectoryService {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        fournisseurs: Arc<dyn FournisseurRepository>,
        vehicules: Arc<dyn VehiculeRepository>,
        categories: Arc<dyn CategorieRepository>,
        pieces: Arc<dyn PieceRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            clients,
            fournisseurs,
            vehicules,
            categories,
            pieces,
            notifications,
        }
    }

    // ===== Clients =====

    pub async fn list_clients(&self) -> Result<Vec<Client>, DomainError> {
        self.clients.list().await
    }

    pub async fn get_client(&self, id: i32) -> Result<Client, DomainError> {
        self.clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("client", id))
    }

    pub async fn create_client(&self, input: &NewClient) -> Result<Client, DomainError> {
        let (nom, email) = match (&input.nom, &input.email) {
            (Some(n), Some(e)) => (n, e),
            _ => {
                return Err(validation::missing_fields(&[
                    ("nom", input.nom.is_some()),
                    ("email", input.email.is_some()),
                ]))
            }
        };
        validation::validate_email(email)?;

        let now = Utc::now();
        let client = Client {
            id: 0,
            nom: nom.clone(),
            email: email.clone(),
            telephone: input.telephone.clone(),
            adresse: input.adresse.clone(),
            statut: input.statut.unwrap_or(ClientStatus::Actif),
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.clients.create(&client).await
    }

    pub async fn update_client(&self, id: i32, patch: &ClientPatch) -> Result<Client, DomainError> {
        let mut client = self.get_client(id).await?;

        if let Some(email) = &patch.email {
            validation::validate_email(email)?;
            client.email = email.clone();
        }
        if let Some(nom) = &patch.nom {
            client.nom = nom.clone();
        }
        if let Some(telephone) = &patch.telephone {
            client.telephone = Some(telephone.clone());
        }
        if let Some(adresse) = &patch.adresse {
            client.adresse = Some(adresse.clone());
        }
        if let Some(statut) = patch.statut {
            client.statut = statut;
        }
        client.updated_at = Utc::now();

        self.clients.update(&client).await
    }

    pub async fn delete_client(&self, id: i32) -> Result<(), DomainError> {
        if !self.clients.delete(id).await? {
            return Err(DomainError::not_found("client", id));
        }
        Ok(())
    }

    pub async fn set_client_image(&self, id: i32, path: String) -> Result<Client, DomainError> {
        let mut client = self.get_client(id).await?;
        client.image = Some(path);
        client.updated_at = Utc::now();
        self.clients.update(&client).await
    }

    // ===== Fournisseurs =====

    pub async fn list_fournisseurs(&self) -> Result<Vec<Fournisseur>, DomainError> {
        self.fournisseurs.list().await
    }

    pub async fn get_fournisseur(&self, id: i32) -> Result<Fournisseur, DomainError> {
        self.fournisseurs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("fournisseur", id))
    }

    pub async fn create_fournisseur(
        &self,
        input: &NewFournisseur,
    ) -> Result<Fournisseur, DomainError> {
        let nom = input
            .nom
            .as_ref()
            .ok_or_else(|| validation::missing_fields(&[("nom", false)]))?;
        if let Some(email) = &input.email {
            validation::validate_email(email)?;
        }

        let fournisseur = Fournisseur {
            id: 0,
            nom: nom.clone(),
            adresse: input.adresse.clone(),
            telephone: input.telephone.clone(),
            email: input.email.clone(),
            created_at: Utc::now(),
        };
        self.fournisseurs.create(&fournisseur).await
    }

    pub async fn update_fournisseur(
        &self,
        id: i32,
        patch: &FournisseurPatch,
    ) -> Result<Fournisseur, DomainError> {
        let mut fournisseur = self.get_fournisseur(id).await?;

        if let Some(email) = &patch.email {
            validation::validate_email(email)?;
            fournisseur.email = Some(email.clone());
        }
        if let Some(nom) = &patch.nom {
            fournisseur.nom = nom.clone();
        }
        if let Some(adresse) = &patch.adresse {
            fournisseur.adresse = Some(adresse.clone());
        }
        if let Some(telephone) = &patch.telephone {
            fournisseur.telephone = Some(telephone.clone());
        }

        self.fournisseurs.update(&fournisseur).await
    }

    pub async fn delete_fournisseur(&self, id: i32) -> Result<(), DomainError> {
        if !self.fournisseurs.delete(id).await? {
            return Err(DomainError::not_found("fournisseur", id));
        }
        Ok(())
    }

    // ===== Vehicules =====

    pub async fn list_vehicules(&self) -> Result<Vec<Vehicule>, DomainError> {
        self.vehicules.list().await
    }

    pub async fn get_vehicule(&self, id: i32) -> Result<Vehicule, DomainError> {
        self.vehicules
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("vehicule", id))
    }

    pub async fn create_vehicule(&self, input: &NewVehicule) -> Result<Vehicule, DomainError> {
        let (marque, modele, plaque, annee) = match (
            &input.marque,
            &input.modele,
            &input.plaque,
            input.annee,
        ) {
            (Some(ma), Some(mo), Some(p), Some(a)) => (ma, mo, p, a),
            _ => {
                return Err(validation::missing_fields(&[
                    ("marque", input.marque.is_some()),
                    ("modele", input.modele.is_some()),
                    ("plaque", input.plaque.is_some()),
                    ("annee", input.annee.is_some()),
                ]))
            }
        };
        validation::validate_plate(plaque)?;

        let vehicule = Vehicule {
            id: 0,
            marque: marque.clone(),
            modele: modele.clone(),
            plaque: plaque.clone(),
            annee,
            kilometrage: input.kilometrage.unwrap_or(0),
            r#type: input.r#type.clone().unwrap_or_else(|| "essence".to_string()),
            statut: input
                .statut
                .clone()
                .unwrap_or_else(|| "disponible".to_string()),
            created_at: Utc::now(),
        };
        // A duplicate plate comes back from the unique index
        self.vehicules.create(&vehicule).await
    }

    pub async fn update_vehicule(
        &self,
        id: i32,
        patch: &VehiculePatch,
    ) -> Result<Vehicule, DomainError> {
        let mut vehicule = self.get_vehicule(id).await?;

        if let Some(plaque) = &patch.plaque {
            validation::validate_plate(plaque)?;
            vehicule.plaque = plaque.clone();
        }
        if let Some(marque) = &patch.marque {
            vehicule.marque = marque.clone();
        }
        if let Some(modele) = &patch.modele {
            vehicule.modele = modele.clone();
        }
        if let Some(annee) = patch.annee {
            vehicule.annee = annee;
        }
        if let Some(kilometrage) = patch.kilometrage {
            vehicule.kilometrage = kilometrage;
        }
        if let Some(t) = &patch.r#type {
            vehicule.r#type = t.clone();
        }
        if let Some(statut) = &patch.statut {
            vehicule.statut = statut.clone();
        }

        self.vehicules.update(&vehicule).await
    }

    pub async fn delete_vehicule(&self, id: i32) -> Result<(), DomainError> {
        if !self.vehicules.delete(id).await? {
            return Err(DomainError::not_found("vehicule", id));
        }
        Ok(())
    }

    // ===== Categories =====

    pub async fn list_categories(&self) -> Result<Vec<Categorie>, DomainError> {
        self.categories.list().await
    }

    pub async fn get_categorie(&self, id: i32) -> Result<Categorie, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("categorie", id))
    }

    pub async fn create_categorie(&self, input: &NewCategorie) -> Result<Categorie, DomainError> {
        let nom = input
            .nom
            .as_ref()
            .ok_or_else(|| validation::missing_fields(&[("nom", false)]))?;

        let categorie = Categorie {
            id: 0,
            nom: nom.clone(),
            description: input.description.clone(),
        };
        self.categories.create(&categorie).await
    }

    pub async fn update_categorie(
        &self,
        id: i32,
        patch: &CategoriePatch,
    ) -> Result<Categorie, DomainError> {
        let mut categorie = self.get_categorie(id).await?;

        if let Some(nom) = &patch.nom {
            categorie.nom = nom.clone();
        }
        if let Some(description) = &patch.description {
            categorie.description = Some(description.clone());
        }

        self.categories.update(&categorie).await
    }

    pub async fn delete_categorie(&self, id: i32) -> Result<(), DomainError> {
        if !self.categories.delete(id).await? {
            return Err(DomainError::not_found("categorie", id));
        }
        Ok(())
    }

    // ===== Pieces =====

    pub async fn list_pieces(&self) -> Result<Vec<PieceView>, DomainError> {
        self.pieces.list_views().await
    }

    pub async fn get_piece(&self, id: i32) -> Result<Piece, DomainError> {
        self.pieces
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("piece", id))
    }

    pub async fn create_piece(&self, input: &NewPiece) -> Result<Piece, DomainError> {
        let (nom, prix) = match (&input.nom, input.prix) {
            (Some(n), Some(p)) => (n, p),
            _ => {
                return Err(validation::missing_fields(&[
                    ("nom", input.nom.is_some()),
                    ("prix", input.prix.is_some()),
                ]))
            }
        };
        validation::validate_price(prix)?;

        let piece = Piece {
            id: 0,
            nom: nom.clone(),
            description: input.description.clone(),
            prix,
            image: None,
            categorie_id: input.categorie_id,
            fournisseur_id: input.fournisseur_id,
        };
        // Unknown category or supplier ids surface as foreign-key conflicts
        self.pieces.create(&piece).await
    }

    pub async fn update_piece(&self, id: i32, patch: &PiecePatch) -> Result<Piece, DomainError> {
        let mut piece = self.get_piece(id).await?;

        if let Some(prix) = patch.prix {
            validation::validate_price(prix)?;
            piece.prix = prix;
        }
        if let Some(nom) = &patch.nom {
            piece.nom = nom.clone();
        }
        if let Some(description) = &patch.description {
            piece.description = Some(description.clone());
        }
        if let Some(categorie_id) = patch.categorie_id {
            piece.categorie_id = Some(categorie_id);
        }
        if let Some(fournisseur_id) = patch.fournisseur_id {
            piece.fournisseur_id = Some(fournisseur_id);
        }

        self.pieces.update(&piece).await
    }

    pub async fn delete_piece(&self, id: i32) -> Result<(), DomainError> {
        if !self.pieces.delete(id).await? {
            return Err(DomainError::not_found("piece", id));
        }
        Ok(())
    }

    pub async fn set_piece_image(&self, id: i32, path: String) -> Result<Piece, DomainError> {
        let mut piece = self.get_piece(id).await?;
        piece.image = Some(path);
        self.pieces.update(&piece).await
    }

    // ===== Notifications =====

    pub async fn list_notifications(
        &self,
        user_id: Option<i32>,
    ) -> Result<Vec<Notification>, DomainError> {
        self.notifications.list(user_id).await
    }

    pub async fn create_notification(
        &self,
        input: &NewNotification,
    ) -> Result<Notification, DomainError> {
        let (r#type, message) = match (&input.r#type, &input.message) {
            (Some(t), Some(m)) => (t, m),
            _ => {
                return Err(validation::missing_fields(&[
                    ("type", input.r#type.is_some()),
                    ("message", input.message.is_some()),
                ]))
            }
        };

        let notification = Notification {
            id: 0,
            r#type: r#type.clone(),
            message: message.clone(),
            entity_id: input.entity_id,
            user_id: input.user_id,
            is_read: false,
            created_at: Utc::now(),
        };
        self.notifications.create(&notification).await
    }

    pub async fn mark_notification_read(&self, id: i32) -> Result<Notification, DomainError> {
        self.notifications
            .mark_read(id)
            .await?
            .ok_or_else(|| DomainError::not_found("notification", id))
    }

    pub async fn delete_notification(&self, id: i32) -> Result<(), DomainError> {
        if !self.notifications.delete(id).await? {
            return Err(DomainError::not_found("notification", id));
        }
        Ok(())
    }
}
