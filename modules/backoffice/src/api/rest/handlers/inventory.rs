//! Stock and sale handlers

use crate::api::rest::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::Backoffice;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;

// ===== Stocks =====

/// List every stock level with part names
pub async fn list_stocks(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<StocksListResponse>, Problem> {
    let stocks = state
        .inventory
        .list_stocks()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<StockDto> = stocks.into_iter().map(|s| s.into()).collect();
    let total = items.len();

    Ok(Json(StocksListResponse { items, total }))
}

/// Get one stock row
pub async fn get_stock(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<StockDto>, Problem> {
    let stock = state
        .inventory
        .get_stock(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(stock.into()))
}

/// Get the stock row covering a part
pub async fn get_stock_by_piece(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(piece_id): Path<i32>,
) -> Result<Json<StockDto>, Problem> {
    let stock = state
        .inventory
        .get_stock_by_piece(piece_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(stock.into()))
}

/// Create the stock row for a part; one row per part
pub async fn create_stock(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateStockRequest>,
) -> Result<(StatusCode, Json<StockDto>), Problem> {
    let stock = state
        .inventory
        .create_stock(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(stock.into())))
}

/// Set a stock row's quantity
pub async fn update_stock(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateStockRequest>,
) -> Result<Json<StockDto>, Problem> {
    let stock = state
        .inventory
        .update_stock(id, req.quantity)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(stock.into()))
}

/// Delete a stock row
pub async fn delete_stock(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .inventory
        .delete_stock(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Ventes =====

/// List every sale with part and client names
pub async fn list_ventes(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<VentesListResponse>, Problem> {
    let sales = state
        .inventory
        .list_sales()
        .await
        .map_err(map_domain_error)?;

    let items: Vec<VenteDto> = sales.into_iter().map(|v| v.into()).collect();
    let total = items.len();

    Ok(Json(VentesListResponse { items, total }))
}

/// Get one sale
pub async fn get_vente(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<Json<VenteDto>, Problem> {
    let sale = state
        .inventory
        .get_sale(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(sale.into()))
}

/// Record a sale and decrement the part's stock in one transaction
pub async fn create_vente(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<CreateVenteRequest>,
) -> Result<(StatusCode, Json<VenteDto>), Problem> {
    let sale = state
        .inventory
        .record_sale(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(sale.into())))
}

/// Update a sale's status or notes; amounts are fixed at creation
pub async fn update_vente(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateVenteRequest>,
) -> Result<Json<VenteDto>, Problem> {
    let patch = req.try_into().map_err(map_domain_error)?;
    let sale = state
        .inventory
        .update_sale(id, &patch)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(sale.into()))
}

/// Delete a sale; stock is not restored
pub async fn delete_vente(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    state
        .inventory
        .delete_sale(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Total number of recorded sales
pub async fn count_ventes(
    Extension(state): Extension<Arc<Backoffice>>,
) -> Result<Json<CountResponse>, Problem> {
    let count = state
        .inventory
        .count_sales()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CountResponse { count }))
}
