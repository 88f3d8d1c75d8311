//! Canvas2D drawing of the ring, target and ball

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::RenderSnapshot;

const TRACK_COLOR: &str = "#7f8c9c";
const TARGET_COLOR: &str = "#2d3e50";
const HIGHLIGHT_COLOR: &str = "rgba(255, 255, 255, 0.6)";
/// Fire-like radial gradient for the ball, center to edge
const BALL_GRADIENT: [(f32, &str); 4] = [
    (0.0, "#ffeb3b"),
    (0.3, "#ff9800"),
    (0.6, "#ff5722"),
    (1.0, "#e91e63"),
];
/// Highlight offset and radius (canvas units at full size)
const HIGHLIGHT_OFFSET: f64 = 3.0;
const HIGHLIGHT_RADIUS: f64 = 4.0;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub size: u32,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let size = canvas.width();
        Ok(Self { canvas, ctx, size })
    }

    /// Resize the square canvas. Returns false if the size did not change.
    pub fn resize(&mut self, size: u32) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.canvas.set_width(size);
        self.canvas.set_height(size);
        true
    }

    pub fn render(&self, snapshot: &RenderSnapshot) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let size = self.size as f64;
        let (cx, cy) = (size / 2.0, size / 2.0);
        let outer = snapshot.outer_radius as f64;
        let inner = snapshot.inner_radius as f64;

        ctx.clear_rect(0.0, 0.0, size, size);

        // Track: outer circle minus inner circle
        ctx.begin_path();
        ctx.arc(cx, cy, outer, 0.0, TAU)?;
        ctx.arc_with_anticlockwise(cx, cy, inner, 0.0, TAU, true)?;
        ctx.set_fill_style_str(TRACK_COLOR);
        ctx.fill();

        // Target band
        let start = snapshot.target_start as f64;
        let end = snapshot.target_end as f64;
        ctx.begin_path();
        ctx.arc(cx, cy, outer, start, end)?;
        ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true)?;
        ctx.close_path();
        ctx.set_fill_style_str(TARGET_COLOR);
        ctx.fill();

        // Ball
        let bx = cx + snapshot.ball_pos.x as f64;
        let by = cy + snapshot.ball_pos.y as f64;
        let ball_radius = snapshot.ball_radius as f64;
        let gradient = ctx.create_radial_gradient(bx, by, 0.0, bx, by, ball_radius)?;
        for (offset, color) in BALL_GRADIENT {
            gradient.add_color_stop(offset, color)?;
        }
        ctx.begin_path();
        ctx.arc(bx, by, ball_radius, 0.0, TAU)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();

        ctx.begin_path();
        ctx.arc(
            bx - HIGHLIGHT_OFFSET,
            by - HIGHLIGHT_OFFSET,
            HIGHLIGHT_RADIUS,
            0.0,
            TAU,
        )?;
        ctx.set_fill_style_str(HIGHLIGHT_COLOR);
        ctx.fill();

        Ok(())
    }
}
