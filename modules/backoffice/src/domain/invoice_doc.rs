//! Declarative invoice document
//!
//! The workflow layer describes WHAT an invoice document contains; the
//! renderer in `infra::pdf` decides how to lay it out. Totals are derived
//! here, once, so the renderer never does arithmetic.

use crate::contract::{DetailView, DomainError, Facture, OrderView};
use rust_decimal::Decimal;

/// Fixed seller block printed on every invoice
pub const SELLER_NAME: &str = "Motorparts SARL";
pub const SELLER_ADDRESS: [&str; 2] = ["12 rue des Ateliers", "69003 Lyon"];
pub const SELLER_CONTACT: &str = "contact@motorparts.fr";

/// VAT applied to every invoice: 20%
pub const VAT_RATE_PERCENT: i64 = 20;

/// A named block of free-text lines (seller, customer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyBlock {
    pub heading: String,
    pub lines: Vec<String>,
}

/// One row of the item table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow {
    pub designation: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// Subtotal, VAT and grand total, all pre-rounded to cents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsBlock {
    pub subtotal: Decimal,
    pub vat_rate_percent: i64,
    pub vat_amount: Decimal,
    pub total: Decimal,
}

/// Complete description of one invoice document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// Display number, e.g. "FAC-000042"
    pub number: String,
    /// Invoice date, already formatted for display
    pub date: String,
    pub seller: PartyBlock,
    pub customer: PartyBlock,
    pub rows: Vec<LineRow>,
    pub totals: TotalsBlock,
    /// Human-readable payment summary encoded into the QR code
    pub qr_payload: String,
    /// Footer line; the renderer appends "Page i/N" after layout
    pub footer: String,
}

/// A rendered document ready to serve
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Renders an [`InvoiceDocument`] to bytes. Implemented in `infra::pdf`.
pub trait InvoiceRenderer: Send + Sync {
    fn render(&self, doc: &InvoiceDocument) -> Result<Vec<u8>, DomainError>;
}

/// Display number for an invoice id
pub fn invoice_number(id: i32) -> String {
    format!("FAC-{:06}", id)
}

/// Assemble the document for an invoice.
///
/// Line-less orders (legacy invoices) fall back to a single synthetic row
/// priced at the stored invoice total, so they stay printable. Totals are
/// always derived from the rows.
pub fn build_document(
    facture: &Facture,
    order: &OrderView,
    lines: &[DetailView],
) -> InvoiceDocument {
    let rows: Vec<LineRow> = if lines.is_empty() {
        vec![LineRow {
            designation: "Commande complète".to_string(),
            quantity: 1,
            unit_price: facture.total,
            amount: facture.total,
        }]
    } else {
        lines
            .iter()
            .map(|line| LineRow {
                designation: line.piece_nom.clone(),
                quantity: line.quantity,
                unit_price: line.price,
                amount: (Decimal::from(line.quantity) * line.price).round_dp(2),
            })
            .collect()
    };

    let subtotal: Decimal = rows.iter().map(|r| r.amount).sum::<Decimal>().round_dp(2);
    let vat_amount =
        (subtotal * Decimal::new(VAT_RATE_PERCENT, 2)).round_dp(2);
    let totals = TotalsBlock {
        subtotal,
        vat_rate_percent: VAT_RATE_PERCENT,
        vat_amount,
        total: subtotal + vat_amount,
    };

    let number = invoice_number(facture.id);
    let date = facture.date_facture.format("%d/%m/%Y").to_string();

    let qr_payload = format!(
        "Paiement facture {}\nClient: {}\nMontant TTC: {} EUR\nDate: {}",
        number, order.client_nom, totals.total, date
    );

    InvoiceDocument {
        number,
        date,
        seller: PartyBlock {
            heading: SELLER_NAME.to_string(),
            lines: SELLER_ADDRESS
                .iter()
                .map(|s| (*s).to_string())
                .chain(std::iter::once(SELLER_CONTACT.to_string()))
                .collect(),
        },
        customer: PartyBlock {
            heading: "Facturé à".to_string(),
            lines: vec![order.client_nom.clone()],
        },
        rows,
        totals,
        qr_payload,
        footer: format!("{} - {}", SELLER_NAME, SELLER_CONTACT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::OrderStatus;
    use chrono::{TimeZone, Utc};

    fn facture(id: i32, total: Decimal) -> Facture {
        Facture {
            id,
            commande_id: 1,
            total,
            date_facture: Utc.with_ymd_and_hms(2025, 8, 12, 10, 0, 0).unwrap(),
        }
    }

    fn order_view(montant: Decimal) -> OrderView {
        OrderView {
            id: 1,
            client_id: 3,
            client_nom: "Garage Martin".to_string(),
            user_id: 2,
            user_nom: "Sophie Bernard".to_string(),
            statut: OrderStatus::Validee,
            montant,
            created_at: Utc.with_ymd_and_hms(2025, 8, 10, 9, 0, 0).unwrap(),
        }
    }

    fn line(piece: &str, quantity: i32, price: Decimal) -> DetailView {
        DetailView {
            id: 1,
            commande_id: 1,
            piece_id: 9,
            piece_nom: piece.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn totals_derive_from_rows() {
        let lines = vec![
            line("Plaquettes de frein", 3, Decimal::new(95, 1)), // 3 x 9.50
            line("Filtre à huile", 1, Decimal::new(40, 1)),      // 1 x 4.00
        ];
        let doc = build_document(
            &facture(42, Decimal::new(325, 1)),
            &order_view(Decimal::new(325, 1)),
            &lines,
        );

        assert_eq!(doc.totals.subtotal, Decimal::new(3250, 2)); // 32.50
        assert_eq!(doc.totals.vat_amount, Decimal::new(650, 2)); // 6.50
        assert_eq!(doc.totals.total, Decimal::new(3900, 2)); // 39.00
        assert_eq!(doc.totals.vat_rate_percent, 20);
        assert_eq!(doc.rows.len(), 2);
    }

    #[test]
    fn line_less_invoice_falls_back_to_single_row() {
        let doc = build_document(
            &facture(7, Decimal::new(12000, 2)),
            &order_view(Decimal::new(12000, 2)),
            &[],
        );

        assert_eq!(doc.rows.len(), 1);
        assert_eq!(doc.rows[0].designation, "Commande complète");
        assert_eq!(doc.rows[0].quantity, 1);
        assert_eq!(doc.rows[0].amount, Decimal::new(12000, 2));
        assert_eq!(doc.totals.subtotal, Decimal::new(12000, 2));
    }

    #[test]
    fn number_and_qr_payload() {
        let doc = build_document(
            &facture(42, Decimal::new(100, 0)),
            &order_view(Decimal::new(100, 0)),
            &[line("Bougie", 1, Decimal::new(100, 0))],
        );

        assert_eq!(doc.number, "FAC-000042");
        assert_eq!(doc.date, "12/08/2025");
        assert!(doc.qr_payload.contains("FAC-000042"));
        assert!(doc.qr_payload.contains("Garage Martin"));
        assert!(doc.qr_payload.contains("120.00 EUR"));
    }
}
