//! Order, order-line and invoice handlers

use crate::api::rest::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::NewDetail;
use crate::Backoffice;
use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;
use std::time::Duration;

// ===== Commandes =====

/// List every order, most recent first
pub async fn list_commandes(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<CommandesListResponse>, Problem> {
    let orders = state.orders.list_orders().await.map_err(map_domain_error)?;

    let items: Vec<CommandeDto> = orders.into_iter().map(|o| o.into()).collect();
    let total = items.len();

    Ok(Json(CommandesListResponse { items, total }))
}

/// Search orders with optional AND-combined filters
pub async fn search_commandes(
    Extension(state): Extension<Arc<Backoffice>>,
    Query(query): Query<CommandeSearchQuery>,
) -> Result<Json<CommandesListResponse>, Problem> {
    let search = query.try_into().map_err(map_domain_error)?;
    let orders = state
        .orders
        .search_orders(&search)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<CommandeDto> = orders.into_iter().map(|o| o.into()).collect();
    let total = items.len();

    Ok(Json(CommandesListResponse { items, total }))
}

/// Get one order with client and creator names
pub async fn get_commande(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<CommandeDto>, Problem> {
    let order = state.orders.get_order(id).await.map_err(map_domain_error)?;
    Ok(Json(order.into()))
}

/// Create an empty order; lines are added separately
pub async fn create_commande(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateCommandeRequest>,
) -> Result<(StatusCode, Json<CommandeDto>), Problem> {
    let order = state
        .orders
        .create_order(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// Update an order's client, creator or status
pub async fn update_commande(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateCommandeRequest>,
) -> Result<Json<CommandeDto>, Problem> {
    let patch = req.try_into().map_err(map_domain_error)?;
    let order = state
        .orders
        .update_order(id, &patch)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(order.into()))
}

/// Delete an order and its lines
pub async fn delete_commande(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .orders
        .delete_order(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Details =====

/// List an order's lines with part names
pub async fn list_details(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(commande_id): Path<i32>,
) -> Result<Json<DetailsListResponse>, Problem> {
    let lines = state
        .orders
        .list_order_lines(commande_id)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<DetailDto> = lines.into_iter().map(|l| l.into()).collect();
    let total = items.len();

    Ok(Json(DetailsListResponse { items, total }))
}

/// Add a line to an order; the order total is recomputed atomically
pub async fn create_detail(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(commande_id): Path<i32>,
    Json(req): Json<CreateDetailRequest>,
) -> Result<(StatusCode, Json<LineMutationResponse>), Problem> {
    let input = NewDetail {
        commande_id: Some(commande_id),
        ..req.into()
    };
    let (detail, montant) = state
        .orders
        .add_order_line(&input)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(LineMutationResponse {
            detail: detail.into(),
            montant,
        }),
    ))
}

/// Rewrite a line; the order total is recomputed atomically
pub async fn update_detail(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateDetailRequest>,
) -> Result<Json<LineMutationResponse>, Problem> {
    let input: NewDetail = req.into();
    let (detail, montant) = state
        .orders
        .update_order_line(id, &input)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LineMutationResponse {
        detail: detail.into(),
        montant,
    }))
}

/// Delete a line; the order total is recomputed atomically
pub async fn delete_detail(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<LineDeleteResponse>, Problem> {
    let montant = state
        .orders
        .delete_order_line(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LineDeleteResponse { montant }))
}

// ===== Factures =====

/// List every invoice
pub async fn list_factures(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<FacturesListResponse>, Problem> {
    let invoices = state
        .orders
        .list_invoices()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<FactureDto> = invoices.into_iter().map(|f| f.into()).collect();
    let total = items.len();

    Ok(Json(FacturesListResponse { items, total }))
}

/// Get one invoice
pub async fn get_facture(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<FactureDto>, Problem> {
    let invoice = state
        .orders
        .get_invoice(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(invoice.into()))
}

/// Create an invoice snapshot for an order
pub async fn create_facture(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateFactureRequest>,
) -> Result<(StatusCode, Json<FactureDto>), Problem> {
    let invoice = state
        .orders
        .create_invoice(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(invoice.into())))
}

/// Delete an invoice
pub async fn delete_facture(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .orders
        .delete_invoice(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// How long a rendered invoice file stays on disk after being served
const INVOICE_FILE_TTL: Duration = Duration::from_secs(5);

/// Render an invoice as a PDF download.
///
/// The bytes are also written under the invoices dir; the file is
/// removed shortly after, it only exists for external inspection.
pub async fn download_facture_pdf(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Response, Problem> {
    let rendered = state
        .orders
        .render_invoice_pdf(id)
        .await
        .map_err(map_domain_error)?;

    let dir = state.config.invoices_dir.clone();
    let file_path = dir.join(&rendered.file_name);
    let written = match tokio::fs::create_dir_all(&dir).await {
        Ok(()) => tokio::fs::write(&file_path, &rendered.bytes).await,
        Err(err) => Err(err),
    };
    match written {
        Ok(()) => {
            tokio::spawn(async move {
                tokio::time::sleep(INVOICE_FILE_TTL).await;
                if let Err(err) = tokio::fs::remove_file(&file_path).await {
                    tracing::warn!(error = %err, file = %file_path.display(), "invoice file cleanup failed");
                }
            });
        }
        Err(err) => {
            // The download is served from memory either way.
            tracing::warn!(error = %err, file = %file_path.display(), "invoice file write failed");
        }
    }

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", rendered.file_name),
        ),
    ];
    Ok((headers, rendered.bytes).into_response())
}
