//! SeaORM entities for database tables

pub mod categories;
pub mod clients;
pub mod commandes;
pub mod details_commande;
pub mod factures;
pub mod fournisseurs;
pub mod notifications;
pub mod pieces;
pub mod stocks;
pub mod users;
pub mod vehicules;
pub mod ventes;
