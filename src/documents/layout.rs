//! Shared A4 page scaffolding for the receipt documents: text/line/box
//! drawing, page breaks and the page-numbered footer.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use std::io::BufWriter;

use crate::errors::ClientError;

pub(crate) const PAGE_W: f32 = 210.0;
pub(crate) const PAGE_H: f32 = 297.0;
pub(crate) const MARGIN_X: f32 = 12.0;
pub(crate) const CONTENT_W: f32 = PAGE_W - 2.0 * MARGIN_X;
pub(crate) const TOP_Y: f32 = PAGE_H - 16.0;
const FOOTER_Y: f32 = 10.0;
const BREAK_Y: f32 = 24.0;

/// Rough Helvetica advance in millimeters, good enough for centering header
/// labels and footers.
fn text_width_mm(size: f32, text: &str) -> f32 {
    text.chars().count() as f32 * size * 0.5 * 0.3527
}

pub(crate) struct DocWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    layer: PdfLayerReference,
    pub y: f32,
}

impl DocWriter {
    pub fn new(title: &str) -> Result<Self, ClientError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ClientError::Document(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ClientError::Document(e.to_string()))?;
        let layer_ref = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            font,
            bold,
            pages: vec![(page, layer)],
            layer: layer_ref,
            y: TOP_Y,
        })
    }

    /// Starts a fresh page when fewer than `needed` millimeters remain.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < BREAK_Y {
            let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.pages.push((page, layer));
            self.y = TOP_Y;
        }
    }

    pub fn text(&self, x: f32, y: f32, size: f32, txt: &str) {
        self.write(&self.layer, &self.font, x, y, size, txt);
    }

    pub fn text_bold(&self, x: f32, y: f32, size: f32, txt: &str) {
        self.write(&self.layer, &self.bold, x, y, size, txt);
    }

    pub fn text_centered(&self, col_start: f32, col_width: f32, y: f32, size: f32, txt: &str) {
        let x = col_start + (col_width - text_width_mm(size, txt)) / 2.0;
        self.write(&self.layer, &self.font, x.max(col_start), y, size, txt);
    }

    fn write(
        &self,
        layer: &PdfLayerReference,
        font: &IndirectFontRef,
        x: f32,
        y: f32,
        size: f32,
        txt: &str,
    ) {
        layer.begin_text_section();
        layer.set_font(font, size);
        layer.set_text_cursor(Mm(x), Mm(y));
        layer.write_text(txt, font);
        layer.end_text_section();
    }

    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32, thickness: f32) {
        self.layer.set_outline_thickness(thickness);
        let pts = vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ];
        let polygon = Polygon {
            rings: vec![pts],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };
        self.layer.add_polygon(polygon);
    }

    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32) {
        self.layer.set_outline_thickness(thickness);
        let line = Line::from_iter(
            std::iter::once((Point::new(Mm(x1), Mm(y1)), false))
                .chain(std::iter::once((Point::new(Mm(x2), Mm(y2)), false))),
        );
        self.layer.add_line(line);
    }

    /// Embeds a PNG with its bottom-left corner at (x, y), scaled so its wider
    /// dimension spans `target_mm`. Returns false when the image cannot be
    /// decoded so callers can fall back to text.
    pub fn embed_png(&self, png: &[u8], x: f32, y: f32, target_mm: f32) -> bool {
        let Ok(decoded) = image_crate::load_from_memory(png) else {
            return false;
        };
        let rgb = decoded.to_rgb8();
        let (px_w, px_h) = (rgb.width(), rgb.height());
        let pdf_img = Image::from_dynamic_image(&image_crate::DynamicImage::ImageRgb8(rgb));
        let mm_w = (px_w as f32 / 300.0) * 25.4;
        let mm_h = (px_h as f32 / 300.0) * 25.4;
        let scale = target_mm / mm_w.max(mm_h);
        let transform = ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            ..Default::default()
        };
        pdf_img.add_to_layer(self.layer.clone(), transform);
        true
    }

    /// Draws a bordered single-line table header across the content width.
    /// `col_fracs` are fractions of the content width and must sum to 1.
    pub fn table_header(&mut self, col_fracs: &[f32], headers: &[&str], header_h: f32) {
        self.ensure_space(header_h + 6.0);
        let top = self.y;
        let bot = top - header_h;
        self.rect(MARGIN_X, bot, CONTENT_W, header_h, 1.2);
        let starts = column_starts(col_fracs);
        for (i, txt) in headers.iter().enumerate() {
            if i > 0 {
                self.line(starts[i], bot, starts[i], top, 0.5);
            }
            self.text_centered(starts[i], column_width(col_fracs, i), bot + header_h / 3.0, 9.0, txt);
        }
        self.y = bot;
    }

    /// Draws one table row, breaking to a new page (and repeating the header)
    /// when space runs out.
    pub fn table_row(
        &mut self,
        col_fracs: &[f32],
        headers: &[&str],
        cells: &[String],
        row_h: f32,
    ) {
        if self.y - row_h < BREAK_Y {
            self.ensure_space(PAGE_H);
            self.table_header(col_fracs, headers, 10.0);
        }
        let top = self.y;
        let bot = top - row_h;
        let starts = column_starts(col_fracs);
        self.line(MARGIN_X, bot, MARGIN_X, top, 0.8);
        self.line(MARGIN_X + CONTENT_W, bot, MARGIN_X + CONTENT_W, top, 0.8);
        self.line(MARGIN_X, bot, MARGIN_X + CONTENT_W, bot, 0.5);
        for (i, txt) in cells.iter().enumerate() {
            if i > 0 {
                self.line(starts[i], bot, starts[i], top, 0.5);
            }
            self.text(starts[i] + 2.0, bot + row_h / 3.0, 8.5, txt);
        }
        self.y = bot;
    }

    /// Writes the page-numbered footer on every page and produces the PDF.
    pub fn finish(self) -> Result<Vec<u8>, ClientError> {
        let total = self.pages.len();
        for (i, (page, layer)) in self.pages.iter().enumerate() {
            let footer = format!("Page {} of {}", i + 1, total);
            let layer_ref = self.doc.get_page(*page).get_layer(*layer);
            let x = MARGIN_X + (CONTENT_W - text_width_mm(8.0, &footer)) / 2.0;
            layer_ref.begin_text_section();
            layer_ref.set_font(&self.font, 8.0);
            layer_ref.set_text_cursor(Mm(x), Mm(FOOTER_Y));
            layer_ref.write_text(&footer, &self.font);
            layer_ref.end_text_section();
        }

        let mut bytes = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            self.doc
                .save(&mut writer)
                .map_err(|e| ClientError::Document(e.to_string()))?;
        }
        Ok(bytes)
    }
}

pub(crate) fn column_starts(col_fracs: &[f32]) -> Vec<f32> {
    let mut starts = Vec::with_capacity(col_fracs.len());
    let mut x = MARGIN_X;
    for frac in col_fracs {
        starts.push(x);
        x += CONTENT_W * frac;
    }
    starts
}

pub(crate) fn column_width(col_fracs: &[f32], i: usize) -> f32 {
    CONTENT_W * col_fracs[i]
}
