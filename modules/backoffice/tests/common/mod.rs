//! Shared test fixtures and in-memory repositories
//!
//! The mocks keep the same workflow contracts as the SeaORM
//! implementations: line mutations recompute the parent order total
//! from scratch, sale creation only commits together with a successful
//! stock decrement, and reset-token lookups match hash and expiry
//! together. Joined display names are synthesized from ids unless a
//! test seeds real ones.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use backoffice::contract::{Credentials, NewClient, NewPiece, NewUser, NewVehicule};
use backoffice::domain::{
    DirectoryService, IdentityService, InventoryService, OrdersService,
};
use backoffice::infra::pdf::PrintpdfRenderer;
use motorparts_auth::TokenService;
use rust_decimal::Decimal;

pub mod mocks;

/// Secret shared by the identity service under test and the assertions
/// that decode its tokens.
pub const TEST_JWT_SECRET: &str = "test-secret";

pub const TEST_FRONTEND_URL: &str = "http://localhost:3000";

/// Decimal literal helper for test amounts.
pub fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

// ===== Service constructors =====

pub fn create_orders_service_with_repos(
) -> (OrdersService, mocks::MockOrderRepo, mocks::MockInvoiceRepo) {
    let orders = mocks::MockOrderRepo::new();
    let invoices = mocks::MockInvoiceRepo::new();
    let service = OrdersService::new(
        Arc::new(orders.clone()),
        Arc::new(invoices.clone()),
        Arc::new(PrintpdfRenderer::new()),
    );
    (service, orders, invoices)
}

pub fn create_orders_service() -> OrdersService {
    create_orders_service_with_repos().0
}

pub fn create_inventory_service_with_repos(
) -> (InventoryService, mocks::MockStockRepo, mocks::MockSaleRepo) {
    let stocks = mocks::MockStockRepo::new();
    let sales = mocks::MockSaleRepo::new(stocks.clone());
    let service = InventoryService::new(Arc::new(stocks.clone()), Arc::new(sales.clone()));
    (service, stocks, sales)
}

pub fn create_identity_service_with_repos(
) -> (IdentityService, mocks::MockUserRepo, mocks::CapturingMailer) {
    let users = mocks::MockUserRepo::new();
    let mailer = mocks::CapturingMailer::new();
    let service = IdentityService::new(
        Arc::new(users.clone()),
        Arc::new(TokenService::new(TEST_JWT_SECRET)),
        Arc::new(mailer.clone()),
        TEST_FRONTEND_URL,
    );
    (service, users, mailer)
}

/// Directory service plus every mock it was wired with.
pub struct DirectoryHarness {
    pub service: DirectoryService,
    pub clients: mocks::MockClientRepo,
    pub fournisseurs: mocks::MockFournisseurRepo,
    pub vehicules: mocks::MockVehiculeRepo,
    pub categories: mocks::MockCategorieRepo,
    pub pieces: mocks::MockPieceRepo,
    pub notifications: mocks::MockNotificationRepo,
}

pub fn create_directory_service() -> DirectoryHarness {
    let clients = mocks::MockClientRepo::new();
    let fournisseurs = mocks::MockFournisseurRepo::new();
    let vehicules = mocks::MockVehiculeRepo::new();
    let categories = mocks::MockCategorieRepo::new();
    let pieces = mocks::MockPieceRepo::new();
    let notifications = mocks::MockNotificationRepo::new();
    let service = DirectoryService::new(
        Arc::new(clients.clone()),
        Arc::new(fournisseurs.clone()),
        Arc::new(vehicules.clone()),
        Arc::new(categories.clone()),
        Arc::new(pieces.clone()),
        Arc::new(notifications.clone()),
    );
    DirectoryHarness {
        service,
        clients,
        fournisseurs,
        vehicules,
        categories,
        pieces,
        notifications,
    }
}

// ===== Input fixtures =====

pub fn registration(email: &str) -> NewUser {
    NewUser {
        first_name: Some("Jean".to_string()),
        last_name: Some("Dupont".to_string()),
        email: Some(email.to_string()),
        password: Some("motdepasse".to_string()),
    }
}

pub fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

pub fn new_client(nom: &str, email: &str) -> NewClient {
    NewClient {
        nom: Some(nom.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}

pub fn new_vehicule(plaque: &str) -> NewVehicule {
    NewVehicule {
        marque: Some("Renault".to_string()),
        modele: Some("Clio".to_string()),
        plaque: Some(plaque.to_string()),
        annee: Some(2020),
        ..Default::default()
    }
}

pub fn new_piece(nom: &str, prix: &str) -> NewPiece {
    NewPiece {
        nom: Some(nom.to_string()),
        prix: Some(dec(prix)),
        ..Default::default()
    }
}
