//! PDF rendering for invoice documents
//!
//! Lays out an [`InvoiceDocument`] on A4 pages with printpdf. The layout
//! walks top-down: header and party blocks, item table with page breaks,
//! totals, then the payment QR code. Footers and page numbers are drawn
//! last, once the page count is known.

use crate::contract::DomainError;
use crate::domain::{InvoiceDocument, InvoiceRenderer};
use printpdf::{
    path::PaintMode, BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rect, Rgb,
};
use qrcode::{Color as QrColor, QrCode};
use rust_decimal::Decimal;
use tracing::error;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 20.0;
const ROW_H: f32 = 8.0;
/// Rows stop here; the space below is reserved for totals, QR and footer
const TABLE_FLOOR: f32 = 62.0;
const QR_SIZE: f32 = 28.0;

const COL_DESIGNATION: f32 = 22.0;
const COL_QUANTITY: f32 = 120.0;
const COL_UNIT_PRICE: f32 = 138.0;
const COL_AMOUNT: f32 = 166.0;

fn accent() -> Color {
    Color::Rgb(Rgb::new(0.13, 0.22, 0.36, None))
}

fn zebra() -> Color {
    Color::Rgb(Rgb::new(0.94, 0.94, 0.94, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.45, 0.45, 0.45, None))
}

fn eur(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn pdf_err(err: impl std::fmt::Display) -> DomainError {
    error!(error = %err, "pdf rendering failed");
    DomainError::Internal
}

/// Invoice renderer backed by printpdf and the built-in Helvetica faces
#[derive(Default)]
pub struct PrintpdfRenderer;

impl PrintpdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn draw_table_header(layer: &PdfLayerReference, fonts: &Fonts, y: f32) {
    layer.set_fill_color(accent());
    layer.add_rect(
        Rect::new(
            Mm(MARGIN),
            Mm(y - 2.5),
            Mm(PAGE_W - MARGIN),
            Mm(y + 5.5),
        )
        .with_mode(PaintMode::Fill),
    );

    layer.set_fill_color(white());
    layer.use_text("Désignation", 10.0, Mm(COL_DESIGNATION), Mm(y), &fonts.bold);
    layer.use_text("Qté", 10.0, Mm(COL_QUANTITY), Mm(y), &fonts.bold);
    layer.use_text("Prix unitaire", 10.0, Mm(COL_UNIT_PRICE), Mm(y), &fonts.bold);
    layer.use_text("Montant", 10.0, Mm(COL_AMOUNT), Mm(y), &fonts.bold);
}

fn draw_qr(layer: &PdfLayerReference, payload: &str, x: f32, y: f32) -> Result<(), DomainError> {
    let code = QrCode::new(payload.as_bytes()).map_err(pdf_err)?;
    let width = code.width();
    let module = QR_SIZE / width as f32;
    let colors = code.to_colors();

    layer.set_fill_color(black());
    for (idx, color) in colors.iter().enumerate() {
        if *color != QrColor::Dark {
            continue;
        }
        let col = (idx % width) as f32;
        let row = (idx / width) as f32;
        // First matrix row sits highest on the page
        let cell_x = x + col * module;
        let cell_y = y + QR_SIZE - (row + 1.0) * module;
        layer.add_rect(
            Rect::new(
                Mm(cell_x),
                Mm(cell_y),
                Mm(cell_x + module),
                Mm(cell_y + module),
            )
            .with_mode(PaintMode::Fill),
        );
    }

    Ok(())
}

impl InvoiceRenderer for PrintpdfRenderer {
    fn render(&self, doc: &InvoiceDocument) -> Result<Vec<u8>, DomainError> {
        let (pdf, first_page, first_layer) =
            PdfDocument::new(&doc.number, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let fonts = Fonts {
            regular: pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
            bold: pdf
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(pdf_err)?,
        };

        let mut pages = vec![(first_page, first_layer)];
        let mut layer = pdf.get_page(first_page).get_layer(first_layer);

        // Header
        layer.set_fill_color(accent());
        layer.use_text("FACTURE", 22.0, Mm(MARGIN), Mm(266.0), &fonts.bold);
        layer.set_fill_color(black());
        layer.use_text(
            format!("N° {}", doc.number),
            11.0,
            Mm(150.0),
            Mm(270.0),
            &fonts.bold,
        );
        layer.use_text(
            format!("Date: {}", doc.date),
            10.0,
            Mm(150.0),
            Mm(264.0),
            &fonts.regular,
        );

        layer.set_outline_color(accent());
        layer.set_outline_thickness(1.0);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(260.0)), false),
                (Point::new(Mm(PAGE_W - MARGIN), Mm(260.0)), false),
            ],
            is_closed: false,
        });

        // Party blocks, seller left and customer right
        let mut block_y = 251.0;
        layer.use_text(&doc.seller.heading, 11.0, Mm(MARGIN), Mm(block_y), &fonts.bold);
        for line in &doc.seller.lines {
            block_y -= 5.0;
            layer.use_text(line, 10.0, Mm(MARGIN), Mm(block_y), &fonts.regular);
        }

        let mut block_y = 251.0;
        layer.use_text(&doc.customer.heading, 11.0, Mm(120.0), Mm(block_y), &fonts.bold);
        for line in &doc.customer.lines {
            block_y -= 5.0;
            layer.use_text(line, 10.0, Mm(120.0), Mm(block_y), &fonts.regular);
        }

        // Item table
        let mut y = 222.0;
        draw_table_header(&layer, &fonts, y);
        y -= ROW_H;

        for (index, row) in doc.rows.iter().enumerate() {
            if y < TABLE_FLOOR {
                let (page, layer_index) = pdf.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
                pages.push((page, layer_index));
                layer = pdf.get_page(page).get_layer(layer_index);

                y = 265.0;
                draw_table_header(&layer, &fonts, y);
                y -= ROW_H;
            }

            if index % 2 == 1 {
                layer.set_fill_color(zebra());
                layer.add_rect(
                    Rect::new(
                        Mm(MARGIN),
                        Mm(y - 2.5),
                        Mm(PAGE_W - MARGIN),
                        Mm(y + 5.5),
                    )
                    .with_mode(PaintMode::Fill),
                );
            }

            layer.set_fill_color(black());
            layer.use_text(
                &row.designation,
                10.0,
                Mm(COL_DESIGNATION),
                Mm(y),
                &fonts.regular,
            );
            layer.use_text(
                row.quantity.to_string(),
                10.0,
                Mm(COL_QUANTITY),
                Mm(y),
                &fonts.regular,
            );
            layer.use_text(
                eur(row.unit_price),
                10.0,
                Mm(COL_UNIT_PRICE),
                Mm(y),
                &fonts.regular,
            );
            layer.use_text(eur(row.amount), 10.0, Mm(COL_AMOUNT), Mm(y), &fonts.regular);

            y -= ROW_H;
        }

        // Totals, right-aligned block under the table
        let mut totals_y = y - 4.0;
        layer.set_fill_color(black());
        layer.use_text(
            "Sous-total HT",
            10.0,
            Mm(COL_QUANTITY),
            Mm(totals_y),
            &fonts.regular,
        );
        layer.use_text(
            format!("{} EUR", eur(doc.totals.subtotal)),
            10.0,
            Mm(COL_AMOUNT),
            Mm(totals_y),
            &fonts.regular,
        );

        totals_y -= 7.0;
        layer.use_text(
            format!("TVA ({}%)", doc.totals.vat_rate_percent),
            10.0,
            Mm(COL_QUANTITY),
            Mm(totals_y),
            &fonts.regular,
        );
        layer.use_text(
            format!("{} EUR", eur(doc.totals.vat_amount)),
            10.0,
            Mm(COL_AMOUNT),
            Mm(totals_y),
            &fonts.regular,
        );

        totals_y -= 7.0;
        layer.set_fill_color(accent());
        layer.use_text("Total TTC", 11.0, Mm(COL_QUANTITY), Mm(totals_y), &fonts.bold);
        layer.use_text(
            format!("{} EUR", eur(doc.totals.total)),
            11.0,
            Mm(COL_AMOUNT),
            Mm(totals_y),
            &fonts.bold,
        );

        // Payment QR on the last page, bottom left
        layer.set_fill_color(black());
        layer.use_text("Paiement", 9.0, Mm(MARGIN), Mm(52.5), &fonts.bold);
        draw_qr(&layer, &doc.qr_payload, MARGIN, 22.0)?;

        // Footer and page numbers, now that the page count is final
        let total_pages = pages.len();
        for (index, (page, layer_index)) in pages.iter().enumerate() {
            let footer_layer = pdf.get_page(*page).get_layer(*layer_index);
            footer_layer.set_fill_color(grey());
            footer_layer.use_text(&doc.footer, 9.0, Mm(MARGIN), Mm(12.0), &fonts.regular);
            footer_layer.use_text(
                format!("Page {}/{}", index + 1, total_pages),
                9.0,
                Mm(PAGE_W - MARGIN - 18.0),
                Mm(12.0),
                &fonts.regular,
            );
        }

        pdf.save_to_bytes().map_err(pdf_err)
    }
}
