//! Orders workflow: orders, order lines, invoices, invoice rendering
//!
//! The order total (`montant`) is owned by this workflow: every line
//! mutation goes through a repository method that recomputes it from
//! scratch inside one transaction.

use crate::contract::{
    DetailCommande, DetailView, DomainError, Facture, NewDetail, NewFacture, NewOrder, OrderPatch,
    OrderSearch, OrderView,
};
use super::invoice_doc::{self, InvoiceRenderer, RenderedInvoice};
use super::repository::{DetailRecord, InvoiceRepository, OrderRepository};
use super::validation;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct OrdersService {
    orders: Arc<dyn OrderRepository>,
    invoices: Arc<dyn InvoiceRepository>,
    renderer: Arc<dyn InvoiceRenderer>,
}

impl OrdersService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        renderer: Arc<dyn InvoiceRenderer>,
    ) -> Self {
        Self {
            orders,
            invoices,
            renderer,
        }
    }

    // ===== Orders =====

    pub async fn create_order(&self, input: &NewOrder) -> Result<OrderView, DomainError> {
        let (client_id, user_id) = match (input.client_id, input.user_id) {
            (Some(c), Some(u)) => (c, u),
            _ => {
                return Err(validation::missing_fields(&[
                    ("client_id", input.client_id.is_some()),
                    ("user_id", input.user_id.is_some()),
                ]))
            }
        };

        let order = self.orders.create(client_id, user_id).await?;
        tracing::info!(order_id = order.id, client_id, user_id, "order created");

        self.view_of(order.id).await
    }

    pub async fn get_order(&self, id: i32) -> Result<OrderView, DomainError> {
        self.orders
            .find_view(id)
            .await?
            .ok_or_else(|| DomainError::not_found("commande", id))
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.orders.list_views().await
    }

    pub async fn search_orders(&self, filter: &OrderSearch) -> Result<Vec<OrderView>, DomainError> {
        if filter.is_empty() {
            return self.orders.list_views().await;
        }
        self.orders.search(filter).await
    }

    pub async fn update_order(&self, id: i32, patch: &OrderPatch) -> Result<OrderView, DomainError> {
        // Ids are optional in a patch, but a provided zero is a caller bug
        if patch.client_id == Some(0) {
            return Err(DomainError::validation("client_id invalide"));
        }
        if patch.user_id == Some(0) {
            return Err(DomainError::validation("user_id invalide"));
        }

        let mut order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("commande", id))?;

        if let Some(client_id) = patch.client_id {
            order.client_id = client_id;
        }
        if let Some(user_id) = patch.user_id {
            order.user_id = user_id;
        }
        if let Some(statut) = patch.statut {
            order.statut = statut;
        }

        // Unknown client or user ids surface as foreign-key conflicts
        self.orders.update(&order).await?;
        self.view_of(id).await
    }

    pub async fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        if !self.orders.delete(id).await? {
            return Err(DomainError::not_found("commande", id));
        }
        tracing::info!(order_id = id, "order deleted");
        Ok(())
    }

    // ===== Order lines =====

    pub async fn list_order_lines(&self, commande_id: i32) -> Result<Vec<DetailView>, DomainError> {
        if self.orders.find_by_id(commande_id).await?.is_none() {
            return Err(DomainError::not_found("commande", commande_id));
        }
        self.orders.list_lines(commande_id).await
    }

    /// Add a line; the order total is recomputed in the same transaction.
    /// Returns the line and the order's new total.
    pub async fn add_order_line(
        &self,
        input: &NewDetail,
    ) -> Result<(DetailCommande, Decimal), DomainError> {
        let record = self.validated_line(input)?;

        let (line, montant) = self.orders.add_line(&record).await?;
        tracing::info!(
            order_id = record.commande_id,
            line_id = line.id,
            %montant,
            "order line added"
        );
        Ok((line, montant))
    }

    pub async fn update_order_line(
        &self,
        line_id: i32,
        input: &NewDetail,
    ) -> Result<(DetailCommande, Decimal), DomainError> {
        let (piece_id, quantity, price) = match (input.piece_id, input.quantity, input.price) {
            (Some(p), Some(q), Some(pr)) => (p, q, pr),
            _ => {
                return Err(validation::missing_fields(&[
                    ("piece_id", input.piece_id.is_some()),
                    ("quantity", input.quantity.is_some()),
                    ("price", input.price.is_some()),
                ]))
            }
        };
        validation::validate_line_quantity(quantity)?;
        validation::validate_price(price)?;

        let (line, montant) = self
            .orders
            .update_line(line_id, piece_id, quantity, price)
            .await?;
        tracing::info!(line_id, %montant, "order line updated");
        Ok((line, montant))
    }

    /// Delete a line; returns the parent order's recomputed total.
    pub async fn delete_order_line(&self, line_id: i32) -> Result<Decimal, DomainError> {
        let montant = self.orders.delete_line(line_id).await?;
        tracing::info!(line_id, %montant, "order line deleted");
        Ok(montant)
    }

    // ===== Invoices =====

    pub async fn create_invoice(&self, input: &NewFacture) -> Result<Facture, DomainError> {
        let (commande_id, total) = match (input.commande_id, input.total) {
            (Some(c), Some(t)) => (c, t),
            _ => {
                return Err(validation::missing_fields(&[
                    ("commande_id", input.commande_id.is_some()),
                    ("total", input.total.is_some()),
                ]))
            }
        };
        validation::validate_price(total)?;

        let facture = self.invoices.create(commande_id, total).await?;
        tracing::info!(invoice_id = facture.id, commande_id, "invoice created");
        Ok(facture)
    }

    pub async fn get_invoice(&self, id: i32) -> Result<Facture, DomainError> {
        self.invoices
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("facture", id))
    }

    pub async fn list_invoices(&self) -> Result<Vec<Facture>, DomainError> {
        self.invoices.list().await
    }

    pub async fn delete_invoice(&self, id: i32) -> Result<(), DomainError> {
        if !self.invoices.delete(id).await? {
            return Err(DomainError::not_found("facture", id));
        }
        Ok(())
    }

    /// Render the invoice as a PDF.
    ///
    /// Resolves the invoice before anything else, so a missing invoice is a
    /// plain not-found with no side effects.
    pub async fn render_invoice_pdf(&self, id: i32) -> Result<RenderedInvoice, DomainError> {
        let facture = self.get_invoice(id).await?;

        let order = self
            .orders
            .find_view(facture.commande_id)
            .await?
            .ok_or_else(|| DomainError::not_found("commande", facture.commande_id))?;
        let lines = self.orders.list_lines(facture.commande_id).await?;

        let doc = invoice_doc::build_document(&facture, &order, &lines);
        let bytes = self.renderer.render(&doc)?;
        tracing::info!(invoice_id = id, size = bytes.len(), "invoice pdf rendered");

        Ok(RenderedInvoice {
            file_name: format!("{}.pdf", doc.number),
            bytes,
        })
    }

    // ===== Helpers =====

    async fn view_of(&self, id: i32) -> Result<OrderView, DomainError> {
        match self.orders.find_view(id).await? {
            Some(view) => Ok(view),
            None => {
                tracing::error!(order_id = id, "order view missing after write");
                Err(DomainError::Internal)
            }
        }
    }

    fn validated_line(&self, input: &NewDetail) -> Result<DetailRecord, DomainError> {
        let record = match (input.commande_id, input.piece_id, input.quantity, input.price) {
            (Some(commande_id), Some(piece_id), Some(quantity), Some(price)) => DetailRecord {
                commande_id,
                piece_id,
                quantity,
                price,
            },
            _ => {
                return Err(validation::missing_fields(&[
                    ("commande_id", input.commande_id.is_some()),
                    ("piece_id", input.piece_id.is_some()),
                    ("quantity", input.quantity.is_some()),
                    ("price", input.price.is_some()),
                ]))
            }
        };
        validation::validate_line_quantity(record.quantity)?;
        validation::validate_price(record.price)?;
        Ok(record)
    }
}
