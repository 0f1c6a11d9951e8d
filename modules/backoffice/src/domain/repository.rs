//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Unlike a plain CRUD store, several methods here carry workflow
//! contracts the implementations must honor:
//! - line mutations run inside one transaction that locks the parent
//!   order row and recomputes its total from scratch;
//! - sale creation pairs the insert with a conditional stock decrement
//!   in the same transaction.
//!
//! They return [`DomainError`] (not an opaque error) so implementations
//! can classify unique and foreign-key violations where they happen.

use crate::contract::{
    Categorie, Client, Commande, DetailCommande, DetailView, DomainError, Facture, Fournisseur,
    Notification, OrderSearch, OrderView, Piece, PieceView, Role, Stock, StockView, User,
    Vehicule, Vente, VenteView,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Validated registration payload, ready to persist
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated order line payload
#[derive(Debug, Clone)]
pub struct DetailRecord {
    pub commande_id: i32,
    pub piece_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

/// Validated sale payload; `total` is already derived
#[derive(Debug, Clone)]
pub struct VenteRecord {
    pub piece_id: i32,
    pub client_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
}

/// Repository for user accounts and credentials
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &UserRecord) -> Result<User, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Full-row update; covers profile edits, avatar changes and the
    /// reset-token columns.
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Find the user holding `token_hash` with an expiry strictly after
    /// `now`. An expired token never matches, even when the hash does.
    async fn find_by_valid_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError>;
}

/// Repository for orders and their lines
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, client_id: i32, user_id: i32) -> Result<Commande, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Commande>, DomainError>;

    /// Order joined with client and user names
    async fn find_view(&self, id: i32) -> Result<Option<OrderView>, DomainError>;

    async fn list_views(&self) -> Result<Vec<OrderView>, DomainError>;

    /// Filtered listing; every provided filter is ANDed
    async fn search(&self, filter: &OrderSearch) -> Result<Vec<OrderView>, DomainError>;

    async fn update(&self, order: &Commande) -> Result<Commande, DomainError>;

    /// Returns false when no row matched. Lines cascade.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    async fn list_lines(&self, commande_id: i32) -> Result<Vec<DetailView>, DomainError>;

    async fn find_line(&self, line_id: i32) -> Result<Option<DetailCommande>, DomainError>;

    /// In one transaction: lock the parent order, insert the line, then
    /// recompute the order total as the full sum over its current lines.
    /// Returns the created line and the new total.
    async fn add_line(&self, line: &DetailRecord) -> Result<(DetailCommande, Decimal), DomainError>;

    /// Same transactional contract as [`add_line`](Self::add_line), for an
    /// existing line.
    async fn update_line(
        &self,
        line_id: i32,
        piece_id: i32,
        quantity: i32,
        price: Decimal,
    ) -> Result<(DetailCommande, Decimal), DomainError>;

    /// Captures the parent order id before deleting, then recomputes that
    /// order's total in the same transaction. Returns the new total.
    async fn delete_line(&self, line_id: i32) -> Result<Decimal, DomainError>;
}

/// Repository for invoices
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// `total` is stored as-is; it is a snapshot, not a derived value
    async fn create(&self, commande_id: i32, total: Decimal) -> Result<Facture, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Facture>, DomainError>;

    async fn list(&self) -> Result<Vec<Facture>, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for stock rows (one per piece)
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn create(&self, piece_id: i32, quantity: i32) -> Result<Stock, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Stock>, DomainError>;

    async fn find_by_piece(&self, piece_id: i32) -> Result<Option<Stock>, DomainError>;

    async fn list(&self) -> Result<Vec<StockView>, DomainError>;

    /// Returns None when no row matched
    async fn update_quantity(&self, id: i32, quantity: i32) -> Result<Option<Stock>, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for sales
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// In one transaction: insert the sale, then decrement the piece's
    /// stock with `quantity >= requested` as part of the UPDATE predicate.
    /// Zero affected rows means insufficient stock; the transaction rolls
    /// back and nothing is kept.
    async fn create_with_stock_decrement(
        &self,
        sale: &VenteRecord,
    ) -> Result<Vente, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Vente>, DomainError>;

    async fn list(&self) -> Result<Vec<VenteView>, DomainError>;

    async fn update(&self, sale: &Vente) -> Result<Vente, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for clients
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: &Client) -> Result<Client, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DomainError>;

    async fn list(&self) -> Result<Vec<Client>, DomainError>;

    async fn update(&self, client: &Client) -> Result<Client, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for suppliers
#[async_trait]
pub trait FournisseurRepository: Send + Sync {
    async fn create(&self, fournisseur: &Fournisseur) -> Result<Fournisseur, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Fournisseur>, DomainError>;

    async fn list(&self) -> Result<Vec<Fournisseur>, DomainError>;

    async fn update(&self, fournisseur: &Fournisseur) -> Result<Fournisseur, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for vehicles
#[async_trait]
pub trait VehiculeRepository: Send + Sync {
    /// A duplicate plate surfaces as [`DomainError::Duplicate`]
    async fn create(&self, vehicule: &Vehicule) -> Result<Vehicule, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicule>, DomainError>;

    async fn list(&self) -> Result<Vec<Vehicule>, DomainError>;

    async fn update(&self, vehicule: &Vehicule) -> Result<Vehicule, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for part categories
#[async_trait]
pub trait CategorieRepository: Send + Sync {
    async fn create(&self, categorie: &Categorie) -> Result<Categorie, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Categorie>, DomainError>;

    async fn list(&self) -> Result<Vec<Categorie>, DomainError>;

    async fn update(&self, categorie: &Categorie) -> Result<Categorie, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for parts
#[async_trait]
pub trait PieceRepository: Send + Sync {
    async fn create(&self, piece: &Piece) -> Result<Piece, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Piece>, DomainError>;

    /// Pieces joined with category and supplier names
    async fn list_views(&self) -> Result<Vec<PieceView>, DomainError>;

    async fn update(&self, piece: &Piece) -> Result<Piece, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository for notifications
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &Notification) -> Result<Notification, DomainError>;

    /// All notifications, or the ones targeted at (or visible to) a user
    async fn list(&self, user_id: Option<i32>) -> Result<Vec<Notification>, DomainError>;

    /// Returns None when no row matched
    async fn mark_read(&self, id: i32) -> Result<Option<Notification>, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
