//! Contract models for the back office
//!
//! These models are transport-agnostic and shared across layers.
//! NO serde derives - these are pure domain types.
//!
//! Input types (`New*`, `*Patch`) keep every field optional so the
//! validation layer can enumerate exactly which required fields are
//! missing, instead of failing on the first one.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

// ===== Closed enums =====

/// User role. The store's check set is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    EnAttente,
    Validee,
    Annulee,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnAttente => "en_attente",
            Self::Validee => "validee",
            Self::Annulee => "annulee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en_attente" => Some(Self::EnAttente),
            "validee" => Some(Self::Validee),
            "annulee" => Some(Self::Annulee),
            _ => None,
        }
    }
}

/// Sale lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Client account status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Actif,
    Inactif,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actif => "actif",
            Self::Inactif => "inactif",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "actif" => Some(Self::Actif),
            "inactif" => Some(Self::Inactif),
            _ => None,
        }
    }
}

// ===== Users =====

/// Full user row, including credential columns.
/// Never crosses the REST boundary; handlers map to [`UserPublic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across users
    pub email: String,
    /// argon2 PHC string
    pub password_hash: String,
    pub role: Role,
    /// Public path under /uploads, when an avatar was uploaded
    pub avatar: Option<String>,
    /// SHA-256 hex of the outstanding reset token, single use
    pub reset_token_hash: Option<String>,
    /// Reset token validity bound (issuance + 1h)
    pub reset_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Credential-free projection of this user.
    pub fn public(&self) -> UserPublic {
        UserPublic {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}

/// User projection safe to expose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPublic {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration input; `password` is the raw secret, hashed by the service
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile update; only provided fields change
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Raw replacement password, re-hashed by the service
    pub password: Option<String>,
}

// ===== Directory: clients, fournisseurs, vehicules, categories, pieces =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub nom: String,
    /// Deliberately NOT unique; several contacts may share a garage address
    pub email: String,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub statut: ClientStatus,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub nom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub statut: Option<ClientStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub nom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub statut: Option<ClientStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fournisseur {
    pub id: i32,
    pub nom: String,
    pub adresse: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewFournisseur {
    pub nom: Option<String>,
    pub adresse: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FournisseurPatch {
    pub nom: Option<String>,
    pub adresse: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicule {
    pub id: i32,
    pub marque: String,
    pub modele: String,
    /// French plate format, unique
    pub plaque: String,
    pub annee: i32,
    pub kilometrage: i32,
    /// Fuel type (essence, diesel, electrique, ...)
    pub r#type: String,
    pub statut: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewVehicule {
    pub marque: Option<String>,
    pub modele: Option<String>,
    pub plaque: Option<String>,
    pub annee: Option<i32>,
    pub kilometrage: Option<i32>,
    pub r#type: Option<String>,
    pub statut: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VehiculePatch {
    pub marque: Option<String>,
    pub modele: Option<String>,
    pub plaque: Option<String>,
    pub annee: Option<i32>,
    pub kilometrage: Option<i32>,
    pub r#type: Option<String>,
    pub statut: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorie {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCategorie {
    pub nom: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoriePatch {
    pub nom: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    /// Current catalogue price; order lines snapshot their own
    pub prix: Decimal,
    pub image: Option<String>,
    pub categorie_id: Option<i32>,
    pub fournisseur_id: Option<i32>,
}

/// Piece joined with its category and supplier names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceView {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    pub prix: Decimal,
    pub image: Option<String>,
    pub categorie_id: Option<i32>,
    pub categorie_nom: Option<String>,
    pub fournisseur_id: Option<i32>,
    pub fournisseur_nom: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewPiece {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub prix: Option<Decimal>,
    pub categorie_id: Option<i32>,
    pub fournisseur_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct PiecePatch {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub prix: Option<Decimal>,
    pub categorie_id: Option<i32>,
    pub fournisseur_id: Option<i32>,
}

// ===== Orders and invoices =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commande {
    pub id: i32,
    pub client_id: i32,
    pub user_id: i32,
    pub statut: OrderStatus,
    /// Always equals the sum of quantity x price over the order's lines;
    /// recomputed in full on every line mutation
    pub montant: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Order joined with client and user display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: i32,
    pub client_id: i32,
    pub client_nom: String,
    pub user_id: i32,
    pub user_nom: String,
    pub statut: OrderStatus,
    pub montant: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub client_id: Option<i32>,
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub client_id: Option<i32>,
    pub user_id: Option<i32>,
    pub statut: Option<OrderStatus>,
}

/// Optional search filters, combined with logical AND
#[derive(Debug, Clone, Default)]
pub struct OrderSearch {
    /// Matched against the client name (substring)
    pub query: Option<String>,
    pub statut: Option<OrderStatus>,
    /// Inclusive lower bound on the order date
    pub date_debut: Option<NaiveDate>,
    /// Inclusive upper bound on the order date
    pub date_fin: Option<NaiveDate>,
    pub client_id: Option<i32>,
}

impl OrderSearch {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.statut.is_none()
            && self.date_debut.is_none()
            && self.date_fin.is_none()
            && self.client_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCommande {
    pub id: i32,
    pub commande_id: i32,
    pub piece_id: i32,
    pub quantity: i32,
    /// Price snapshot taken at line creation; later catalogue changes
    /// do not touch it
    pub price: Decimal,
}

/// Order line joined with the part name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: i32,
    pub commande_id: i32,
    pub piece_id: i32,
    pub piece_nom: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct NewDetail {
    pub commande_id: Option<i32>,
    pub piece_id: Option<i32>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facture {
    pub id: i32,
    pub commande_id: i32,
    /// Point-in-time copy supplied at creation, never re-derived
    pub total: Decimal,
    pub date_facture: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewFacture {
    pub commande_id: Option<i32>,
    pub total: Option<Decimal>,
}

// ===== Inventory: stock and sales =====

/// One row per piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    pub id: i32,
    pub piece_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockView {
    pub id: i32,
    pub piece_id: i32,
    pub piece_nom: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default)]
pub struct NewStock {
    pub piece_id: Option<i32>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vente {
    pub id: i32,
    pub piece_id: i32,
    pub client_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount: Decimal,
    /// unit_price x quantity - discount, fixed at creation
    pub total: Decimal,
    pub statut: SaleStatus,
    pub notes: Option<String>,
    pub date_vente: DateTime<Utc>,
}

/// Sale joined with part and client names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenteView {
    pub id: i32,
    pub piece_id: i32,
    pub piece_nom: String,
    pub client_id: i32,
    pub client_nom: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub statut: SaleStatus,
    pub notes: Option<String>,
    pub date_vente: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewVente {
    pub piece_id: Option<i32>,
    pub client_id: Option<i32>,
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
    /// Absent means no discount
    pub discount: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VentePatch {
    pub statut: Option<SaleStatus>,
    pub notes: Option<String>,
}

// ===== Notifications =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: i32,
    pub r#type: String,
    pub message: String,
    /// Id of the entity the notification points at, when there is one
    pub entity_id: Option<i32>,
    /// Targeted user; None means visible to everyone
    pub user_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewNotification {
    pub r#type: Option<String>,
    pub message: Option<String>,
    pub entity_id: Option<i32>,
    pub user_id: Option<i32>,
}
