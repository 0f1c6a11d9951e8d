//! Route registration for the back-office REST API
//!
//! The caller nests the returned router under `/api`. Mutating order
//! lines and touching one's own profile require a bearer token; the
//! remaining back-office routes are open, matching the legacy surface.

use super::{handlers, middleware};
use crate::Backoffice;
use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the back-office router with all endpoints
pub fn router(state: Arc<Backoffice>) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes())
        // The service state is layered outermost so the auth middleware
        // can extract it too.
        .layer(Extension(state))
}

fn public_routes() -> Router {
    Router::new()
        // Auth endpoints
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/forgot-password", post(handlers::auth::forgot_password))
        .route(
            "/auth/reset-password/{token}",
            post(handlers::auth::reset_password),
        )
        // Commande endpoints
        .route(
            "/commandes",
            get(handlers::orders::list_commandes).post(handlers::orders::create_commande),
        )
        .route("/commandes/search", get(handlers::orders::search_commandes))
        .route(
            "/commandes/{id}",
            get(handlers::orders::get_commande)
                .put(handlers::orders::update_commande)
                .delete(handlers::orders::delete_commande),
        )
        .route("/commandes/{id}/details", get(handlers::orders::list_details))
        // Facture endpoints
        .route(
            "/factures",
            get(handlers::orders::list_factures).post(handlers::orders::create_facture),
        )
        .route(
            "/factures/{id}",
            get(handlers::orders::get_facture).delete(handlers::orders::delete_facture),
        )
        .route("/factures/{id}/pdf", get(handlers::orders::download_facture_pdf))
        // Stock endpoints
        .route(
            "/stocks",
            get(handlers::inventory::list_stocks).post(handlers::inventory::create_stock),
        )
        .route(
            "/stocks/piece/{piece_id}",
            get(handlers::inventory::get_stock_by_piece),
        )
        .route(
            "/stocks/{id}",
            get(handlers::inventory::get_stock)
                .put(handlers::inventory::update_stock)
                .delete(handlers::inventory::delete_stock),
        )
        // Vente endpoints
        .route(
            "/ventes",
            get(handlers::inventory::list_ventes).post(handlers::inventory::create_vente),
        )
        .route("/ventes/count/all", get(handlers::inventory::count_ventes))
        .route(
            "/ventes/{id}",
            get(handlers::inventory::get_vente)
                .put(handlers::inventory::update_vente)
                .delete(handlers::inventory::delete_vente),
        )
        // Client endpoints
        .route(
            "/clients",
            get(handlers::directory::list_clients).post(handlers::directory::create_client),
        )
        .route(
            "/clients/{id}",
            get(handlers::directory::get_client)
                .put(handlers::directory::update_client)
                .delete(handlers::directory::delete_client),
        )
        .route(
            "/clients/{id}/image",
            post(handlers::directory::upload_client_image),
        )
        // Fournisseur endpoints
        .route(
            "/fournisseurs",
            get(handlers::directory::list_fournisseurs)
                .post(handlers::directory::create_fournisseur),
        )
        .route(
            "/fournisseurs/{id}",
            get(handlers::directory::get_fournisseur)
                .put(handlers::directory::update_fournisseur)
                .delete(handlers::directory::delete_fournisseur),
        )
        // Vehicule endpoints
        .route(
            "/vehicules",
            get(handlers::directory::list_vehicules).post(handlers::directory::create_vehicule),
        )
        .route(
            "/vehicules/{id}",
            get(handlers::directory::get_vehicule)
                .put(handlers::directory::update_vehicule)
                .delete(handlers::directory::delete_vehicule),
        )
        // Categorie endpoints
        .route(
            "/categories",
            get(handlers::directory::list_categories).post(handlers::directory::create_categorie),
        )
        .route(
            "/categories/{id}",
            get(handlers::directory::get_categorie)
                .put(handlers::directory::update_categorie)
                .delete(handlers::directory::delete_categorie),
        )
        // Piece endpoints
        .route(
            "/pieces",
            get(handlers::directory::list_pieces).post(handlers::directory::create_piece),
        )
        .route(
            "/pieces/{id}",
            get(handlers::directory::get_piece)
                .put(handlers::directory::update_piece)
                .delete(handlers::directory::delete_piece),
        )
        .route(
            "/pieces/{id}/image",
            post(handlers::directory::upload_piece_image),
        )
        // Notification endpoints
        .route(
            "/notifications",
            get(handlers::directory::list_notifications)
                .post(handlers::directory::create_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::directory::mark_notification_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::directory::delete_notification),
        )
}

fn protected_routes() -> Router {
    Router::new()
        .route(
            "/auth/profile",
            get(handlers::auth::get_profile).put(handlers::auth::update_profile),
        )
        .route("/auth/avatar", put(handlers::auth::update_avatar))
        .route(
            "/details/commandes/{id}/details",
            post(handlers::orders::create_detail),
        )
        .route(
            "/details/details/{id}",
            put(handlers::orders::update_detail).delete(handlers::orders::delete_detail),
        )
        .layer(from_fn(middleware::require_auth))
}
