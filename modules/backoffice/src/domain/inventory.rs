//! Inventory workflow: stock levels and sales
//!
//! Stock is only ever decremented by sale creation, through a conditional
//! update whose predicate carries the availability check. Cancelling or
//! deleting a sale never restores stock.

use crate::contract::{
    DomainError, NewStock, NewVente, SaleStatus, Stock, StockView, Vente, VentePatch, VenteView,
};
use super::repository::{SaleRepository, StockRepository, VenteRecord};
use super::validation;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct InventoryService {
    stocks: Arc<dyn StockRepository>,
    sales: Arc<dyn SaleRepository>,
}

impl InventoryService {
    pub fn new(stocks: Arc<dyn StockRepository>, sales: Arc<dyn SaleRepository>) -> Self {
        Self { stocks, sales }
    }

    // ===== Stock =====

    pub async fn get_stock_by_piece(&self, piece_id: i32) -> Result<Stock, DomainError> {
        self.stocks
            .find_by_piece(piece_id)
            .await?
            .ok_or_else(|| DomainError::not_found("stock", piece_id))
    }

    pub async fn get_stock(&self, id: i32) -> Result<Stock, DomainError> {
        self.stocks
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("stock", id))
    }

    pub async fn list_stocks(&self) -> Result<Vec<StockView>, DomainError> {
        self.stocks.list().await
    }

    /// Presence is the only thing checked on the quantity: zero is a
    /// valid opening level.
    pub async fn create_stock(&self, input: &NewStock) -> Result<Stock, DomainError> {
        let (piece_id, quantity) = match (input.piece_id, input.quantity) {
            (Some(p), Some(q)) => (p, q),
            _ => {
                return Err(validation::missing_fields(&[
                    ("piece_id", input.piece_id.is_some()),
                    ("quantity", input.quantity.is_some()),
                ]))
            }
        };
        validation::validate_stock_quantity(quantity)?;

        let stock = self.stocks.create(piece_id, quantity).await?;
        tracing::info!(stock_id = stock.id, piece_id, quantity, "stock created");
        Ok(stock)
    }

    pub async fn update_stock(&self, id: i32, quantity: Option<i32>) -> Result<Stock, DomainError> {
        let quantity =
            quantity.ok_or_else(|| validation::missing_fields(&[("quantity", false)]))?;
        validation::validate_stock_quantity(quantity)?;

        self.stocks
            .update_quantity(id, quantity)
            .await?
            .ok_or_else(|| DomainError::not_found("stock", id))
    }

    pub async fn delete_stock(&self, id: i32) -> Result<(), DomainError> {
        if !self.stocks.delete(id).await? {
            return Err(DomainError::not_found("stock", id));
        }
        Ok(())
    }

    // ===== Sales =====

    /// Record a sale and decrement the piece's stock atomically.
    ///
    /// The repository couples both writes in one transaction; when the
    /// stock cannot cover the quantity nothing is kept.
    pub async fn record_sale(&self, input: &NewVente) -> Result<Vente, DomainError> {
        let (piece_id, client_id, quantity, unit_price) = match (
            input.piece_id,
            input.client_id,
            input.quantity,
            input.unit_price,
        ) {
            (Some(p), Some(c), Some(q), Some(u)) => (p, c, q, u),
            _ => {
                return Err(validation::missing_fields(&[
                    ("piece_id", input.piece_id.is_some()),
                    ("client_id", input.client_id.is_some()),
                    ("quantity", input.quantity.is_some()),
                    ("unit_price", input.unit_price.is_some()),
                ]))
            }
        };
        validation::validate_line_quantity(quantity)?;
        validation::validate_price(unit_price)?;

        let discount = input.discount.unwrap_or(Decimal::ZERO);
        if discount < Decimal::ZERO {
            return Err(DomainError::validation("la remise ne peut pas être négative"));
        }

        let gross = (unit_price * Decimal::from(quantity)).round_dp(2);
        if discount > gross {
            return Err(DomainError::validation(
                "la remise ne peut pas dépasser le montant de la vente",
            ));
        }

        let record = VenteRecord {
            piece_id,
            client_id,
            quantity,
            unit_price,
            discount,
            total: (gross - discount).round_dp(2),
            notes: input.notes.clone(),
        };

        let sale = self.sales.create_with_stock_decrement(&record).await?;
        tracing::info!(
            sale_id = sale.id,
            piece_id,
            quantity,
            total = %sale.total,
            "sale recorded, stock decremented"
        );
        Ok(sale)
    }

    pub async fn get_sale(&self, id: i32) -> Result<Vente, DomainError> {
        self.sales
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("vente", id))
    }

    pub async fn list_sales(&self) -> Result<Vec<VenteView>, DomainError> {
        self.sales.list().await
    }

    /// Status and notes are the only mutable columns; amounts and the
    /// stock movement stay as recorded.
    pub async fn update_sale(&self, id: i32, patch: &VentePatch) -> Result<Vente, DomainError> {
        let mut sale = self.get_sale(id).await?;

        if let Some(statut) = patch.statut {
            if statut == SaleStatus::Cancelled && sale.statut != SaleStatus::Cancelled {
                tracing::info!(sale_id = id, "sale cancelled; stock left untouched");
            }
            sale.statut = statut;
        }
        if let Some(notes) = &patch.notes {
            sale.notes = Some(notes.clone());
        }

        self.sales.update(&sale).await
    }

    pub async fn delete_sale(&self, id: i32) -> Result<(), DomainError> {
        if !self.sales.delete(id).await? {
            return Err(DomainError::not_found("vente", id));
        }
        Ok(())
    }

    pub async fn count_sales(&self) -> Result<u64, DomainError> {
        self.sales.count().await
    }
}
