//! Canvas 2D painter (wasm only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::sprites::{Sprite, scene};
use crate::sim::Session;
use crate::ui::score_label;

/// Translucent clear so moving glyphs leave a short trail
const FADE_FILL: &str = "rgba(0, 0, 0, 0.25)";
const SCORE_FONT: &str = "20px \"Courier New\"";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    size: (f64, f64),
}

impl CanvasRenderer {
    /// Size the canvas to the arena and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Result<Self, JsValue> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: (width as f64, height as f64),
        })
    }

    /// Paint one frame
    pub fn render(&self, session: &Session) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(FADE_FILL);
        ctx.fill_rect(0.0, 0.0, self.size.0, self.size.1);

        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for sprite in scene(session) {
            self.draw_sprite(&sprite)?;
        }

        ctx.set_text_align("left");
        ctx.set_text_baseline("alphabetic");
        ctx.set_fill_style_str("#fff");
        ctx.set_font(SCORE_FONT);
        ctx.fill_text(&score_label(session.score), 10.0, 25.0)?;

        Ok(())
    }

    fn draw_sprite(&self, sprite: &Sprite) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_font(&format!("{}px sans-serif", sprite.font_px));

        if sprite.rotation == 0.0 {
            return ctx.fill_text(sprite.glyph, sprite.center.x as f64, sprite.center.y as f64);
        }

        ctx.save();
        ctx.translate(sprite.center.x as f64, sprite.center.y as f64)?;
        ctx.rotate(sprite.rotation as f64)?;
        let result = ctx.fill_text(sprite.glyph, 0.0, 0.0);
        ctx.restore();
        result
    }
}
