//! `hud_core::Canvas` over the browser's 2D context.

use glam::DVec2;
use hud_core::{BlendMode, Canvas, Color, LineCap, Paint, SurfaceMetrics};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    fn style_value(&self, paint: &Paint) -> JsValue {
        match paint {
            Paint::Solid(color) => JsValue::from_str(&color.to_css()),
            Paint::LinearGradient { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                for stop in stops {
                    let color = stop.color.to_css();
                    if let Err(e) = gradient.add_color_stop(stop.offset as f32, &color) {
                        log::warn!("bad color stop {:?}: {:?}", stop, e);
                    }
                }
                gradient.into()
            }
        }
    }
}

impl Canvas for CanvasPainter {
    fn resize(&mut self, surface: &SurfaceMetrics) {
        // Setting the backing size also resets the context transform.
        self.canvas.set_width(surface.backing_px);
        self.canvas.set_height(surface.backing_px);
        let css = format!("{}px", surface.css_size);
        let style = self.canvas.style();
        let _ = style.set_property("width", &css);
        let _ = style.set_property("height", &css);
        let dpr = surface.dpr;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::error!("setTransform failed: {:?}", e);
        }
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.ctx.clear_rect(origin.x, origin.y, size.x, size.y);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        let _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        // negative radii throw IndexSizeError
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), start, end);
    }

    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, start: f64, end: f64) {
        let _ = self.ctx.ellipse(
            center.x,
            center.y,
            radii.x.max(0.0),
            radii.y.max(0.0),
            rotation,
            start,
            end,
        );
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    #[allow(deprecated)]
    fn set_stroke(&mut self, paint: &Paint) {
        let value = self.style_value(paint);
        self.ctx.set_stroke_style(&value);
    }

    #[allow(deprecated)]
    fn set_fill(&mut self, paint: &Paint) {
        let value = self.style_value(paint);
        self.ctx.set_fill_style(&value);
    }

    fn set_shadow(&mut self, blur: f64, color: Option<Color>) {
        self.ctx.set_shadow_blur(blur);
        if let Some(color) = color {
            self.ctx.set_shadow_color(&color.to_css());
        }
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
