//! Back office for an automotive spare-parts business
//!
//! Covers the whole commercial surface: clients, suppliers, vehicles,
//! part catalogue, stock levels, orders with derived totals, invoices
//! with PDF rendering, direct sales and notifications, plus JWT-backed
//! identity with password reset.
//!
//! An order's `montant` always equals the sum of `quantity * price`
//! over its lines; every line mutation recomputes it inside the same
//! transaction in which the line changed.

// Public exports
pub mod contract;
pub use contract::{
    Categorie, Client, ClientStatus, Commande, DetailCommande, DomainError, Facture, Fournisseur,
    Notification, OrderStatus, Piece, Role, SaleStatus, Stock, User, UserPublic, Vehicule, Vente,
};

pub mod module;
pub use module::Backoffice;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
