//! PDF export with the built-in Helvetica faces.
//!
//! Layout is measured in millimetres from the top-left of an A4 page. The
//! feature-scope appendix, when present, always starts on its own page.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use axisphere_invoicing::InvoiceDocument;

use crate::ExportError;
use crate::view::InvoiceView;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const RIGHT_EDGE_MM: f32 = PAGE_WIDTH_MM - MARGIN_MM;

// Brand gold used for the header and total rules.
const GOLD: (f32, f32, f32) = (0.94, 0.63, 0.0);
const GREY: (f32, f32, f32) = (0.75, 0.75, 0.75);

/// A finished export: the suggested download name and the document bytes.
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Compose the invoice PDF for a document.
///
/// Failures are logged before being returned so the operator channel sees
/// them even when the caller only surfaces a generic error.
pub fn export_pdf(document: &InvoiceDocument) -> Result<ExportedPdf, ExportError> {
    match compose(document) {
        Ok(exported) => Ok(exported),
        Err(err) => {
            tracing::error!(
                invoice_number = %document.invoice_number,
                error = %err,
                "invoice PDF export failed"
            );
            Err(err)
        }
    }
}

fn compose(document: &InvoiceDocument) -> Result<ExportedPdf, ExportError> {
    let view = InvoiceView::from_document(document);
    let title = format!("Invoice {}", view.invoice_number);

    let (doc, page, layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "invoice");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    let invoice_layer = doc.get_page(page).get_layer(layer);
    draw_invoice_page(&invoice_layer, &fonts, &view);

    if !view.scope.is_empty() {
        let (scope_page, scope_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "scope");
        let scope_layer = doc.get_page(scope_page).get_layer(scope_layer);
        draw_scope_page(&scope_layer, &fonts, &view);
    }

    let bytes = doc.save_to_bytes()?;
    Ok(ExportedPdf {
        file_name: format!("{}.pdf", view.invoice_number),
        bytes,
    })
}

fn draw_invoice_page(layer: &PdfLayerReference, fonts: &Fonts, view: &InvoiceView) {
    let mut y = MARGIN_MM;

    // Header: issuer on the left, invoice metadata on the right.
    text(layer, &fonts.bold, 20.0, MARGIN_MM, y + 6.0, view.issuer_name);
    text(layer, &fonts.regular, 9.0, MARGIN_MM, y + 12.0, view.issuer_location);
    text_right(
        layer,
        &fonts.bold,
        10.0,
        RIGHT_EDGE_MM,
        y + 2.0,
        &format!("Invoice {}", view.invoice_number),
    );
    text_right(
        layer,
        &fonts.regular,
        9.0,
        RIGHT_EDGE_MM,
        y + 7.0,
        &format!("Date: {}", view.invoice_date),
    );
    text_right(
        layer,
        &fonts.regular,
        9.0,
        RIGHT_EDGE_MM,
        y + 12.0,
        &format!("Due Date: {}", view.due_date),
    );
    y += 18.0;
    rule(layer, MARGIN_MM, RIGHT_EDGE_MM, y, GOLD, 1.2);
    y += 10.0;

    // Bill-to block and payment terms.
    text(layer, &fonts.bold, 9.0, MARGIN_MM, y, "BILL TO");
    text_right(layer, &fonts.bold, 9.0, RIGHT_EDGE_MM, y, "PAYMENT TERMS");
    y += 5.5;
    text(layer, &fonts.bold, 10.0, MARGIN_MM, y, &view.bill_to.name);
    text_right(layer, &fonts.regular, 9.0, RIGHT_EDGE_MM, y, view.payment_terms);
    y += 5.0;
    if let Some(company) = &view.bill_to.company {
        text(layer, &fonts.regular, 9.0, MARGIN_MM, y, company);
        y += 5.0;
    }
    text(layer, &fonts.regular, 9.0, MARGIN_MM, y, &view.bill_to.email);
    y += 5.0;
    if let Some(phone) = &view.bill_to.phone {
        text(layer, &fonts.regular, 9.0, MARGIN_MM, y, phone);
        y += 5.0;
    }
    y += 8.0;

    // Line-item table.
    text(layer, &fonts.bold, 9.0, MARGIN_MM, y, "Description");
    text(layer, &fonts.bold, 9.0, 120.0, y, "Qty");
    text_right(layer, &fonts.bold, 9.0, 160.0, y, "Rate");
    text_right(layer, &fonts.bold, 9.0, RIGHT_EDGE_MM, y, "Amount");
    y += 2.5;
    rule(layer, MARGIN_MM, RIGHT_EDGE_MM, y, GREY, 0.6);
    y += 6.0;
    for item in &view.items {
        text(layer, &fonts.regular, 9.0, MARGIN_MM, y, &item.description);
        text(layer, &fonts.regular, 9.0, 120.0, y, &item.quantity.to_string());
        text_right(layer, &fonts.regular, 9.0, 160.0, y, &item.rate);
        text_right(layer, &fonts.regular, 9.0, RIGHT_EDGE_MM, y, &item.amount);
        y += 2.5;
        rule(layer, MARGIN_MM, RIGHT_EDGE_MM, y, GREY, 0.3);
        y += 6.0;
    }

    // Totals, right-aligned against the table edge.
    let label_x = 120.0;
    y += 2.0;
    text(layer, &fonts.regular, 9.0, label_x, y, "Subtotal:");
    text_right(layer, &fonts.regular, 9.0, RIGHT_EDGE_MM, y, &view.subtotal);
    y += 6.0;
    text(layer, &fonts.regular, 9.0, label_x, y, &format!("{}:", view.tax_label));
    text_right(layer, &fonts.regular, 9.0, RIGHT_EDGE_MM, y, &view.tax);
    y += 3.0;
    rule(layer, label_x, RIGHT_EDGE_MM, y, GOLD, 0.9);
    y += 5.5;
    text(layer, &fonts.bold, 11.0, label_x, y, "Total Amount Due:");
    text_right(layer, &fonts.bold, 11.0, RIGHT_EDGE_MM, y, &view.total);
    y += 3.0;
    rule(layer, label_x, RIGHT_EDGE_MM, y, GOLD, 0.9);
    y += 12.0;

    // Catalog digest, matching the on-screen "Package Includes" card.
    if let Some(includes) = &view.package_includes {
        text(layer, &fonts.bold, 9.0, MARGIN_MM, y, "PACKAGE INCLUDES");
        y += 5.5;
        for feature in &includes.headline {
            text(layer, &fonts.regular, 9.0, MARGIN_MM + 3.0, y, &format!("- {feature}"));
            y += 4.5;
        }
        if includes.more > 0 {
            text(
                layer,
                &fonts.regular,
                9.0,
                MARGIN_MM + 3.0,
                y,
                &format!("+ {} more features...", includes.more),
            );
            y += 4.5;
        }
        y += 6.0;
    }

    if let Some(notes) = &view.notes {
        text(layer, &fonts.bold, 9.0, MARGIN_MM, y, "NOTES");
        y += 5.5;
        for line in wrap(notes, 95) {
            text(layer, &fonts.regular, 9.0, MARGIN_MM, y, &line);
            y += 4.5;
        }
    }

    // Footer pinned to the bottom of the page.
    let footer_y = PAGE_HEIGHT_MM - MARGIN_MM;
    rule(layer, MARGIN_MM, RIGHT_EDGE_MM, footer_y - 5.0, GREY, 0.6);
    text(layer, &fonts.regular, 8.0, MARGIN_MM, footer_y, view.footer);
}

fn draw_scope_page(layer: &PdfLayerReference, fonts: &Fonts, view: &InvoiceView) {
    let mut y = MARGIN_MM;
    text(layer, &fonts.bold, 16.0, MARGIN_MM, y + 5.0, "Scope of Work");
    text(
        layer,
        &fonts.regular,
        9.0,
        MARGIN_MM,
        y + 11.0,
        &format!("{} - Invoice {}", view.scope_title, view.invoice_number),
    );
    y += 16.0;
    rule(layer, MARGIN_MM, RIGHT_EDGE_MM, y, GOLD, 1.2);
    y += 10.0;

    text(layer, &fonts.bold, 9.0, MARGIN_MM, y, "INCLUDED FEATURES");
    y += 6.0;
    for feature in &view.scope {
        text(layer, &fonts.regular, 9.0, MARGIN_MM + 3.0, y, &format!("- {feature}"));
        y += 5.0;
    }
}

/// Place text with `y` measured from the top of the page.
fn text(layer: &PdfLayerReference, font: &IndirectFontRef, size_pt: f32, x: f32, y: f32, s: &str) {
    layer.use_text(s, size_pt, Mm(x), Mm(PAGE_HEIGHT_MM - y), font);
}

/// Right-align text at `right_edge` using an average Helvetica glyph width.
fn text_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size_pt: f32,
    right_edge: f32,
    y: f32,
    s: &str,
) {
    let width_mm = s.chars().count() as f32 * size_pt * 0.5 * 0.352_778;
    text(layer, font, size_pt, right_edge - width_mm, y, s);
}

fn rule(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, colour: (f32, f32, f32), pt: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(colour.0, colour.1, colour.2, None)));
    layer.set_outline_thickness(pt);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(PAGE_HEIGHT_MM - y)), false),
            (Point::new(Mm(x2), Mm(PAGE_HEIGHT_MM - y)), false),
        ],
        is_closed: false,
    });
}

/// Greedy word wrap by character count; Helvetica at 9pt fits ~95 chars
/// inside the margins.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
