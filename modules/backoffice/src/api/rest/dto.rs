//! REST DTOs with serde derives for HTTP API
//!
//! Money fields travel as JSON numbers and are parsed into `Decimal`
//! on the way in, so callers never deal with string-encoded amounts.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Auth DTOs =====

/// User response DTO, never carries credentials
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// User ID
    pub id: i32,

    /// First name
    #[schema(example = "Jean")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Dupont")]
    pub last_name: String,

    /// E-mail address, unique
    #[schema(example = "jean.dupont@example.com")]
    pub email: String,

    /// Role, `admin` or `employee`
    #[schema(example = "employee")]
    pub role: String,

    /// Public avatar path under /uploads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,

    /// E-mail address
    #[serde(default)]
    pub email: Option<String>,

    /// Raw password, at least 6 characters
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// E-mail address
    #[serde(default)]
    pub email: Option<String>,

    /// Raw password
    #[serde(default)]
    pub password: Option<String>,
}

/// Token plus the authenticated user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Signed JWT bearer token
    pub token: String,

    /// Authenticated user
    pub user: UserDto,
}

/// Profile update request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,

    /// E-mail address
    #[serde(default)]
    pub email: Option<String>,

    /// Raw replacement password
    #[serde(default)]
    pub password: Option<String>,
}

/// Forgot-password request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    /// E-mail address of the account
    #[serde(default)]
    pub email: Option<String>,
}

/// Reset-password request; the token travels in the path
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// New raw password
    #[serde(default)]
    pub password: Option<String>,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

// ===== Client DTOs =====

/// Client response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    /// Client ID
    pub id: i32,

    /// Display name
    #[schema(example = "Garage Martin")]
    pub nom: String,

    /// Contact e-mail, not unique across clients
    pub email: String,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,

    /// Status, `actif` or `inactif`
    #[schema(example = "actif")]
    pub statut: String,

    /// Public image path under /uploads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create client request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Contact e-mail
    #[serde(default)]
    pub email: Option<String>,

    /// Phone number
    #[serde(default)]
    pub telephone: Option<String>,

    /// Postal address
    #[serde(default)]
    pub adresse: Option<String>,

    /// Status, defaults to `actif`
    #[serde(default)]
    pub statut: Option<String>,
}

/// Update client request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Contact e-mail
    #[serde(default)]
    pub email: Option<String>,

    /// Phone number
    #[serde(default)]
    pub telephone: Option<String>,

    /// Postal address
    #[serde(default)]
    pub adresse: Option<String>,

    /// Status
    #[serde(default)]
    pub statut: Option<String>,
}

/// List of clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientsListResponse {
    /// List of clients
    pub items: Vec<ClientDto>,

    /// Total count
    pub total: usize,
}

// ===== Fournisseur DTOs =====

/// Supplier response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FournisseurDto {
    /// Supplier ID
    pub id: i32,

    /// Display name
    #[schema(example = "Pièces Auto Distribution")]
    pub nom: String,

    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Contact e-mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Create supplier request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateFournisseurRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Postal address
    #[serde(default)]
    pub adresse: Option<String>,

    /// Phone number
    #[serde(default)]
    pub telephone: Option<String>,

    /// Contact e-mail
    #[serde(default)]
    pub email: Option<String>,
}

/// Update supplier request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateFournisseurRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Postal address
    #[serde(default)]
    pub adresse: Option<String>,

    /// Phone number
    #[serde(default)]
    pub telephone: Option<String>,

    /// Contact e-mail
    #[serde(default)]
    pub email: Option<String>,
}

/// List of suppliers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FournisseursListResponse {
    /// List of suppliers
    pub items: Vec<FournisseurDto>,

    /// Total count
    pub total: usize,
}

// ===== Vehicule DTOs =====

/// Vehicle response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehiculeDto {
    /// Vehicle ID
    pub id: i32,

    /// Make
    #[schema(example = "Renault")]
    pub marque: String,

    /// Model
    #[schema(example = "Clio V")]
    pub modele: String,

    /// French licence plate, unique
    #[schema(example = "AB-123-CD")]
    pub plaque: String,

    /// Model year
    pub annee: i32,

    /// Odometer reading in kilometres
    pub kilometrage: i32,

    /// Fuel type
    #[schema(example = "essence")]
    pub r#type: String,

    /// Availability status
    #[schema(example = "disponible")]
    pub statut: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Create vehicle request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateVehiculeRequest {
    /// Make
    #[serde(default)]
    pub marque: Option<String>,

    /// Model
    #[serde(default)]
    pub modele: Option<String>,

    /// French licence plate, format AA-999-AA
    #[serde(default)]
    pub plaque: Option<String>,

    /// Model year
    #[serde(default)]
    pub annee: Option<i32>,

    /// Odometer reading, defaults to 0
    #[serde(default)]
    pub kilometrage: Option<i32>,

    /// Fuel type, defaults to `essence`
    #[serde(default)]
    pub r#type: Option<String>,

    /// Availability status, defaults to `disponible`
    #[serde(default)]
    pub statut: Option<String>,
}

/// Update vehicle request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateVehiculeRequest {
    /// Make
    #[serde(default)]
    pub marque: Option<String>,

    /// Model
    #[serde(default)]
    pub modele: Option<String>,

    /// French licence plate, format AA-999-AA
    #[serde(default)]
    pub plaque: Option<String>,

    /// Model year
    #[serde(default)]
    pub annee: Option<i32>,

    /// Odometer reading
    #[serde(default)]
    pub kilometrage: Option<i32>,

    /// Fuel type
    #[serde(default)]
    pub r#type: Option<String>,

    /// Availability status
    #[serde(default)]
    pub statut: Option<String>,
}

/// List of vehicles
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VehiculesListResponse {
    /// List of vehicles
    pub items: Vec<VehiculeDto>,

    /// Total count
    pub total: usize,
}

// ===== Categorie DTOs =====

/// Category response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorieDto {
    /// Category ID
    pub id: i32,

    /// Display name
    #[schema(example = "Freinage")]
    pub nom: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create category request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCategorieRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Update category request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCategorieRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// List of categories
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesListResponse {
    /// List of categories
    pub items: Vec<CategorieDto>,

    /// Total count
    pub total: usize,
}

// ===== Piece DTOs =====

/// Part response DTO; category and supplier names are present when the
/// part was fetched through the joined listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PieceDto {
    /// Part ID
    pub id: i32,

    /// Display name
    #[schema(example = "Plaquettes de frein avant")]
    pub nom: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current catalogue price
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 34.9)]
    pub prix: Decimal,

    /// Public image path under /uploads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Owning category, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie_id: Option<i32>,

    /// Category display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie_nom: Option<String>,

    /// Supplying vendor, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fournisseur_id: Option<i32>,

    /// Supplier display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fournisseur_nom: Option<String>,
}

/// Create part request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreatePieceRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Catalogue price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub prix: Option<Decimal>,

    /// Owning category
    #[serde(default)]
    pub categorie_id: Option<i32>,

    /// Supplying vendor
    #[serde(default)]
    pub fournisseur_id: Option<i32>,
}

/// Update part request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePieceRequest {
    /// Display name
    #[serde(default)]
    pub nom: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Catalogue price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub prix: Option<Decimal>,

    /// Owning category
    #[serde(default)]
    pub categorie_id: Option<i32>,

    /// Supplying vendor
    #[serde(default)]
    pub fournisseur_id: Option<i32>,
}

/// List of parts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PiecesListResponse {
    /// List of parts
    pub items: Vec<PieceDto>,

    /// Total count
    pub total: usize,
}

// ===== Commande DTOs =====

/// Order response DTO, joined with client and creator names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommandeDto {
    /// Order ID
    pub id: i32,

    /// Ordering client
    pub client_id: i32,

    /// Client display name
    pub client_nom: String,

    /// User who recorded the order
    pub user_id: i32,

    /// Recording user display name
    pub user_nom: String,

    /// Status, `en_attente`, `validee` or `annulee`
    #[schema(example = "en_attente")]
    pub statut: String,

    /// Order total, always the sum of quantity x price over the lines
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 28.5)]
    pub montant: Decimal,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Create order request; the order starts without lines
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCommandeRequest {
    /// Ordering client
    #[serde(default)]
    pub client_id: Option<i32>,

    /// User recording the order
    #[serde(default)]
    pub user_id: Option<i32>,
}

/// Update order request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCommandeRequest {
    /// Ordering client
    #[serde(default)]
    pub client_id: Option<i32>,

    /// User recording the order
    #[serde(default)]
    pub user_id: Option<i32>,

    /// Status, `en_attente`, `validee` or `annulee`
    #[serde(default)]
    pub statut: Option<String>,
}

/// Order search filters, combined with logical AND
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CommandeSearchQuery {
    /// Substring matched against the client name
    #[serde(default)]
    pub query: Option<String>,

    /// Status filter
    #[serde(default)]
    pub statut: Option<String>,

    /// Inclusive lower bound on the order date, YYYY-MM-DD
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2025-01-01")]
    pub date_debut: Option<NaiveDate>,

    /// Inclusive upper bound on the order date, YYYY-MM-DD
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2025-01-31")]
    pub date_fin: Option<NaiveDate>,

    /// Ordering client filter
    #[serde(default)]
    pub client_id: Option<i32>,
}

/// List of orders
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommandesListResponse {
    /// List of orders
    pub items: Vec<CommandeDto>,

    /// Total count
    pub total: usize,
}

// ===== Detail DTOs =====

/// Order line response DTO; the part name is present when the line was
/// fetched through the joined listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DetailDto {
    /// Line ID
    pub id: i32,

    /// Parent order
    pub commande_id: i32,

    /// Ordered part
    pub piece_id: i32,

    /// Part display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_nom: Option<String>,

    /// Ordered quantity, strictly positive
    pub quantity: i32,

    /// Unit price snapshot taken at line creation
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 9.5)]
    pub price: Decimal,
}

/// Create order line request; the order id travels in the path
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateDetailRequest {
    /// Ordered part
    #[serde(default)]
    pub piece_id: Option<i32>,

    /// Ordered quantity, strictly positive
    #[serde(default)]
    pub quantity: Option<i32>,

    /// Unit price snapshot
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

/// Update order line request; all three fields are required
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateDetailRequest {
    /// Ordered part
    #[serde(default)]
    pub piece_id: Option<i32>,

    /// Ordered quantity, strictly positive
    #[serde(default)]
    pub quantity: Option<i32>,

    /// Unit price snapshot
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

/// Line plus the parent order's recomputed total
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LineMutationResponse {
    /// The mutated line
    pub detail: DetailDto,

    /// Parent order total after the recompute
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 28.5)]
    pub montant: Decimal,
}

/// Parent order total after a line deletion
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LineDeleteResponse {
    /// Parent order total after the recompute
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 4.0)]
    pub montant: Decimal,
}

/// List of order lines
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetailsListResponse {
    /// List of order lines
    pub items: Vec<DetailDto>,

    /// Total count
    pub total: usize,
}

// ===== Facture DTOs =====

/// Invoice response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactureDto {
    /// Invoice ID
    pub id: i32,

    /// Invoiced order
    pub commande_id: i32,

    /// Invoiced total, a point-in-time copy supplied at creation
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 32.5)]
    pub total: Decimal,

    /// Invoice date
    pub date_facture: DateTime<Utc>,
}

/// Create invoice request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateFactureRequest {
    /// Invoiced order
    #[serde(default)]
    pub commande_id: Option<i32>,

    /// Invoiced total, normally copied from the order's current total
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub total: Option<Decimal>,
}

/// List of invoices
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacturesListResponse {
    /// List of invoices
    pub items: Vec<FactureDto>,

    /// Total count
    pub total: usize,
}

// ===== Stock DTOs =====

/// Stock level response DTO; the part name is present when the level
/// was fetched through the joined listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockDto {
    /// Stock row ID
    pub id: i32,

    /// Covered part, one row per part
    pub piece_id: i32,

    /// Part display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_nom: Option<String>,

    /// Units on hand, never negative
    pub quantity: i32,
}

/// Create stock row request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateStockRequest {
    /// Covered part
    #[serde(default)]
    pub piece_id: Option<i32>,

    /// Initial units on hand
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Update stock row request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateStockRequest {
    /// New units on hand
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// List of stock levels
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StocksListResponse {
    /// List of stock levels
    pub items: Vec<StockDto>,

    /// Total count
    pub total: usize,
}

// ===== Vente DTOs =====

/// Sale response DTO; part and client names are present when the sale
/// was fetched through the joined listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenteDto {
    /// Sale ID
    pub id: i32,

    /// Sold part
    pub piece_id: i32,

    /// Part display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece_nom: Option<String>,

    /// Buying client
    pub client_id: i32,

    /// Client display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_nom: Option<String>,

    /// Sold quantity
    pub quantity: i32,

    /// Unit price at sale time
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 34.9)]
    pub unit_price: Decimal,

    /// Discount subtracted from the gross amount
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.0)]
    pub discount: Decimal,

    /// unit_price x quantity - discount, fixed at creation
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 69.8)]
    pub total: Decimal,

    /// Status, `completed`, `pending` or `cancelled`
    #[schema(example = "completed")]
    pub statut: String,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Sale timestamp
    pub date_vente: DateTime<Utc>,
}

/// Create sale request; decrements the part's stock atomically
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateVenteRequest {
    /// Sold part
    #[serde(default)]
    pub piece_id: Option<i32>,

    /// Buying client
    #[serde(default)]
    pub client_id: Option<i32>,

    /// Sold quantity, strictly positive
    #[serde(default)]
    pub quantity: Option<i32>,

    /// Unit price at sale time
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub unit_price: Option<Decimal>,

    /// Discount, defaults to zero
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub discount: Option<Decimal>,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Update sale request; quantities and amounts are fixed at creation
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateVenteRequest {
    /// Status, `completed`, `pending` or `cancelled`
    #[serde(default)]
    pub statut: Option<String>,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// List of sales
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VentesListResponse {
    /// List of sales
    pub items: Vec<VenteDto>,

    /// Total count
    pub total: usize,
}

/// Bare counter response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CountResponse {
    /// Number of matching rows
    pub count: u64,
}

// ===== Notification DTOs =====

/// Notification response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    /// Notification ID
    pub id: i32,

    /// Notification kind
    #[schema(example = "stock_faible")]
    pub r#type: String,

    /// Human-readable message
    pub message: String,

    /// Entity the notification points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i32>,

    /// Targeted user; absent means visible to everyone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,

    /// Whether the notification was read
    pub is_read: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Create notification request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateNotificationRequest {
    /// Notification kind
    #[serde(default)]
    pub r#type: Option<String>,

    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,

    /// Entity the notification points at
    #[serde(default)]
    pub entity_id: Option<i32>,

    /// Targeted user; absent means visible to everyone
    #[serde(default)]
    pub user_id: Option<i32>,
}

/// Notification listing filter
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NotificationQuery {
    /// Restrict to notifications targeted at this user or at everyone
    #[serde(default)]
    pub user_id: Option<i32>,
}

/// List of notifications
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationsListResponse {
    /// List of notifications
    pub items: Vec<NotificationDto>,

    /// Total count
    pub total: usize,
}

// Note: Conversion implementations live in mapper.rs
