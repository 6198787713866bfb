use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::color::Rgb;
use crate::error::{DecorError, Result};
use crate::texture::{Artwork, Painter, TextAlign};

/// [`Painter`] over a browser 2D context.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

// Drawing calls only fail on non-finite arguments; a missing stroke is not
// worth aborting the whole texture for.
fn check(result: std::result::Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("canvas call failed: {err:?}");
    }
}

impl Painter for CanvasPainter {
    fn set_fill(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_stroke(&mut self, color: Rgb) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_css());
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        check(self.ctx.fill_text(text, x, y));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        check(self.ctx.arc_to(x1, y1, x2, y2, radius));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        check(self.ctx.arc(x, y, radius, start, end));
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

/// Paints `art` onto a fresh offscreen canvas of its native size.
pub fn rasterize(document: &Document, art: Artwork) -> Result<HtmlCanvasElement> {
    let size = art.size();
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DecorError::Create("offscreen canvas"))?;
    canvas.set_width(size.width);
    canvas.set_height(size.height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or(DecorError::Unsupported("2d"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DecorError::Unsupported("2d"))?;
    art.draw(&mut CanvasPainter::new(ctx));
    Ok(canvas)
}
