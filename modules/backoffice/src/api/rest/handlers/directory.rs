//! Client, supplier, vehicle, category, part and notification handlers

use crate::api::rest::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::Backoffice;
use axum::{
    extract::{Multipart, Path, Query},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

// ===== Clients =====

/// List every client
pub async fn list_clients(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<ClientsListResponse>, Problem> {
    let clients = state
        .directory
        .list_clients()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<ClientDto> = clients.into_iter().map(|c| c.into()).collect();
    let total = items.len();

    Ok(Json(ClientsListResponse { items, total }))
}

/// Get one client
pub async fn get_client(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<ClientDto>, Problem> {
    let client = state
        .directory
        .get_client(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(client.into()))
}

/// Create a client
pub async fn create_client(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientDto>), Problem> {
    let input = req.try_into().map_err(map_domain_error)?;
    let client = state
        .directory
        .create_client(&input)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(client.into())))
}

/// Update a client; only provided fields change
pub async fn update_client(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<Json<ClientDto>, Problem> {
    let patch = req.try_into().map_err(map_domain_error)?;
    let client = state
        .directory
        .update_client(id, &patch)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(client.into()))
}

/// Delete a client
pub async fn delete_client(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .directory
        .delete_client(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a client's photo
pub async fn upload_client_image(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<ClientDto>, Problem> {
    let path = super::save_upload(&state.config.uploads_dir, "clients", multipart).await?;
    let client = state
        .directory
        .set_client_image(id, path)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(client.into()))
}

// ===== Fournisseurs =====

/// List every supplier
pub async fn list_fournisseurs(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<FournisseursListResponse>, Problem> {
    let fournisseurs = state
        .directory
        .list_fournisseurs()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<FournisseurDto> = fournisseurs.into_iter().map(|f| f.into()).collect();
    let total = items.len();

    Ok(Json(FournisseursListResponse { items, total }))
}

/// Get one supplier
pub async fn get_fournisseur(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<FournisseurDto>, Problem> {
    let fournisseur = state
        .directory
        .get_fournisseur(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(fournisseur.into()))
}

/// Create a supplier
pub async fn create_fournisseur(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateFournisseurRequest>,
) -> Result<(StatusCode, Json<FournisseurDto>), Problem> {
    let fournisseur = state
        .directory
        .create_fournisseur(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(fournisseur.into())))
}

/// Update a supplier; only provided fields change
pub async fn update_fournisseur(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateFournisseurRequest>,
) -> Result<Json<FournisseurDto>, Problem> {
    let fournisseur = state
        .directory
        .update_fournisseur(id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(fournisseur.into()))
}

/// Delete a supplier
pub async fn delete_fournisseur(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .directory
        .delete_fournisseur(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Vehicules =====

/// List every vehicle
pub async fn list_vehicules(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<VehiculesListResponse>, Problem> {
    let vehicules = state
        .directory
        .list_vehicules()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<VehiculeDto> = vehicules.into_iter().map(|v| v.into()).collect();
    let total = items.len();

    Ok(Json(VehiculesListResponse { items, total }))
}

/// Get one vehicle
pub async fn get_vehicule(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<VehiculeDto>, Problem> {
    let vehicule = state
        .directory
        .get_vehicule(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(vehicule.into()))
}

/// Register a vehicle
pub async fn create_vehicule(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateVehiculeRequest>,
) -> Result<(StatusCode, Json<VehiculeDto>), Problem> {
    let vehicule = state
        .directory
        .create_vehicule(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(vehicule.into())))
}

/// Update a vehicle; only provided fields change
pub async fn update_vehicule(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateVehiculeRequest>,
) -> Result<Json<VehiculeDto>, Problem> {
    let vehicule = state
        .directory
        .update_vehicule(id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(vehicule.into()))
}

/// Delete a vehicle
pub async fn delete_vehicule(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .directory
        .delete_vehicule(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Categories =====

/// List every category
pub async fn list_categories(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<CategoriesListResponse>, Problem> {
    let categories = state
        .directory
        .list_categories()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<CategorieDto> = categories.into_iter().map(|c| c.into()).collect();
    let total = items.len();

    Ok(Json(CategoriesListResponse { items, total }))
}

/// Get one category
pub async fn get_categorie(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<CategorieDto>, Problem> {
    let categorie = state
        .directory
        .get_categorie(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(categorie.into()))
}

/// Create a category
pub async fn create_categorie(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateCategorieRequest>,
) -> Result<(StatusCode, Json<CategorieDto>), Problem> {
    let categorie = state
        .directory
        .create_categorie(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(categorie.into())))
}

/// Update a category; only provided fields change
pub async fn update_categorie(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateCategorieRequest>,
) -> Result<Json<CategorieDto>, Problem> {
    let categorie = state
        .directory
        .update_categorie(id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(categorie.into()))
}

/// Delete a category; parts keep existing without one
pub async fn delete_categorie(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .directory
        .delete_categorie(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Pieces =====

/// List every part with category and supplier names
pub async fn list_pieces(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<PiecesListResponse>, Problem> {
    let pieces = state
        .directory
        .list_pieces()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<PieceDto> = pieces.into_iter().map(|p| p.into()).collect();
    let total = items.len();

    Ok(Json(PiecesListResponse { items, total }))
}

/// Get one part
pub async fn get_piece(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<PieceDto>, Problem> {
    let piece = state
        .directory
        .get_piece(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(piece.into()))
}

/// Add a part to the catalogue
pub async fn create_piece(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreatePieceRequest>,
) -> Result<(StatusCode, Json<PieceDto>), Problem> {
    let piece = state
        .directory
        .create_piece(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(piece.into())))
}

/// Update a part; only provided fields change
pub async fn update_piece(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePieceRequest>,
) -> Result<Json<PieceDto>, Problem> {
    let piece = state
        .directory
        .update_piece(id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(piece.into()))
}

/// Delete a part
pub async fn delete_piece(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .directory
        .delete_piece(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a part's photo
pub async fn upload_piece_image(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<PieceDto>, Problem> {
    let path = super::save_upload(&state.config.uploads_dir, "pieces", multipart).await?;
    let piece = state
        .directory
        .set_piece_image(id, path)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(piece.into()))
}

// ===== Notifications =====

/// List notifications, optionally scoped to a user plus broadcasts
pub async fn list_notifications(
    Extension(state): Extension<Arc<Backoffice>>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<NotificationsListResponse>, Problem> {
    let notifications = state
        .directory
        .list_notifications(query.user_id)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<NotificationDto> = notifications.into_iter().map(|n| n.into()).collect();
    let total = items.len();

    Ok(Json(NotificationsListResponse { items, total }))
}

/// Create a notification
pub async fn create_notification(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationDto>), Problem> {
    let notification = state
        .directory
        .create_notification(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(notification.into())))
}

/// Mark a notification as read
pub async fn mark_notification_read(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<NotificationDto>, Problem> {
    let notification = state
        .directory
        .mark_notification_read(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(notification.into()))
}

/// Delete a notification
pub async fn delete_notification(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .directory
        .delete_notification(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
