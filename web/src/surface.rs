use std::f64::consts::TAU;

use goban_core::Surface;
use goban_protocol::Color;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`Surface`] backed by a 2d canvas context, matching the classic board
/// look: thin dark grid, radially shaded stones, red dead marks, half-alpha
/// ghost stone.
pub(crate) struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub(crate) fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn grid_line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
        self.ctx.set_stroke_style_str("#333");
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn star_point(&mut self, (x, y): (f64, f64)) {
        self.ctx.set_fill_style_str("#333");
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, 3.0, 0.0, TAU);
        self.ctx.fill();
    }

    fn stone(&mut self, (x, y): (f64, f64), radius: f64, color: Color) {
        let (inner, outer) = if color == Color::Black {
            ("#555", "#000")
        } else {
            ("#fff", "#ddd")
        };

        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        match self.ctx.create_radial_gradient(
            x - radius * 0.3,
            y - radius * 0.3,
            radius * 0.1,
            x,
            y,
            radius,
        ) {
            Ok(gradient) => {
                let _ = gradient.add_color_stop(0.0, inner);
                let _ = gradient.add_color_stop(1.0, outer);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            // The shading is cosmetic; a flat disc still reads as a stone.
            Err(_) => self.ctx.set_fill_style_str(outer),
        }
        self.ctx.fill();
    }

    fn dead_mark(&mut self, (x, y): (f64, f64), arm: f64) {
        self.ctx.set_stroke_style_str("#f00");
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(x - arm, y - arm);
        self.ctx.line_to(x + arm, y + arm);
        self.ctx.move_to(x + arm, y - arm);
        self.ctx.line_to(x - arm, y + arm);
        self.ctx.stroke();
    }

    fn ghost_stone(&mut self, (x, y): (f64, f64), radius: f64, color: Color) {
        let (fill, outline) = if color == Color::Black {
            ("#000", "#222")
        } else {
            ("#fff", "#aaa")
        };

        self.ctx.save();
        self.ctx.set_global_alpha(0.5);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_line_width(2.0);
        self.ctx.set_stroke_style_str(outline);
        self.ctx.stroke();
        self.ctx.restore();
    }
}
