//! PDF render surface: one A4 page per day, drawn with manually managed
//! object refs and content streams.

use crate::core::layout::engine::DayLayout;
use crate::core::layout::geometry::canvas_width;
use crate::core::layout::grid::DayGrid;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Parse a `#rrggbb` catalog color into normalized rgb components.
fn hex_rgb(hex: &str) -> (f32, f32, f32) {
    let byte = |i: usize| {
        u8::from_str_radix(hex.get(i..i + 2).unwrap_or("00"), 16).unwrap_or(0) as f32 / 255.0
    };
    (byte(1), byte(3), byte(5))
}

pub struct LogPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    /// Canvas-unit → page-point factor so the 24-hour grid fills the
    /// printable width.
    scale: f32,
}

impl Default for LogPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let page_w = 595.0;
        let page_h = 842.0;
        let margin = 50.0;
        let scale = (page_w - 2.0 * margin) / canvas_width() as f32;

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id,
            page_w,
            page_h,
            margin,
            scale,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Canvas x (distance units, left-to-right) → page points.
    fn px(&self, x: f64) -> f32 {
        self.margin + self.scale * x as f32
    }

    /// Canvas y (top-down) → page points (bottom-up), anchored below the
    /// page title.
    fn py(&self, y: f64) -> f32 {
        self.page_h - self.margin - 30.0 - self.scale * y as f32
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn stroke_line(&self, content: &mut Content, x1: f64, y1: f64, x2: f64, y2: f64) {
        content.move_to(self.px(x1), self.py(y1));
        content.line_to(self.px(x2), self.py(y2));
        content.stroke();
    }

    /// Add one page holding one day's duty grid and bars.
    pub fn add_day(&mut self, layout: &DayLayout, grid: &DayGrid) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        let mut content = Content::new();

        self.draw_text(
            &mut content,
            self.margin,
            self.page_h - self.margin,
            14.0,
            &layout.date.to_string(),
        );

        content.save_state();
        content.set_stroke_rgb(0.88, 0.88, 0.88);
        for line in &grid.hour_lines {
            self.stroke_line(&mut content, line.x1, line.y1, line.x2, line.y2);
        }
        content.set_stroke_rgb(0.93, 0.93, 0.93);
        for line in &grid.row_separators {
            self.stroke_line(&mut content, line.x1, line.y1, line.x2, line.y2);
        }
        content.restore_state();

        for lbl in &grid.tick_labels {
            self.draw_text(&mut content, self.px(lbl.x), self.py(lbl.y), 7.0, &lbl.text);
        }
        for lbl in &grid.row_labels {
            self.draw_text(&mut content, self.px(lbl.x), self.py(lbl.y), 8.0, &lbl.text);
        }

        for rect in &layout.rects {
            let (r, g, b) = hex_rgb(rect.color);
            content.save_state();
            content.set_fill_rgb(r, g, b);
            content.rect(
                self.px(rect.x),
                self.py(rect.y + rect.height),
                self.scale * rect.width as f32,
                self.scale * rect.height as f32,
            );
            content.fill_nonzero();
            content.restore_state();
        }

        self.pdf.stream(content_id, &content.finish());
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
