//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types. The REST DTOs
//! in `api::rest::dto` carry the serde surface.

pub mod error;
pub mod model;

pub use error::DomainError;
pub use model::{
    Categorie, CategoriePatch, Client, ClientPatch, ClientStatus, Commande, Credentials,
    DetailCommande, DetailView, Facture, Fournisseur, FournisseurPatch, NewCategorie, NewClient,
    NewDetail, NewFacture, NewFournisseur, NewNotification, NewOrder, NewPiece, NewStock, NewUser,
    NewVehicule, NewVente, Notification, OrderPatch, OrderSearch, OrderStatus, OrderView, Piece,
    PiecePatch, PieceView, ProfilePatch, Role, SaleStatus, Stock, StockView, User, UserPublic,
    Vehicule, VehiculePatch, Vente, VentePatch, VenteView,
};
