//! Drawing-surface abstraction.
//!
//! The scene code only talks to [`Canvas`], a thin mirror of the browser's
//! 2D context. The web front-end implements it over
//! `CanvasRenderingContext2d`; tests implement it with a command recorder.

use crate::surface::SurfaceMetrics;
use glam::DVec2;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f64, s: f64, l: f64 },
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn white(a: f64) -> Self {
        Color::Rgba {
            r: 255,
            g: 255,
            b: 255,
            a,
        }
    }

    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsl { h, s, l }
    }

    /// CSS color string accepted by canvas `strokeStyle`/`fillStyle`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient {
        from: DVec2,
        to: DVec2,
        stops: SmallVec<[ColorStop; 4]>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

impl LineCap {
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    Screen,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        }
    }
}

/// Immediate-mode 2D drawing target, expressed in CSS-pixel units once
/// [`Canvas::resize`] has applied the pixel-density transform.
pub trait Canvas {
    /// Resize the backing store and reset the pixel-density transform.
    fn resize(&mut self, surface: &SurfaceMetrics);

    fn clear_rect(&mut self, origin: DVec2, size: DVec2);
    fn set_blend_mode(&mut self, mode: BlendMode);
    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64);
    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, start: f64, end: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_fill(&mut self, paint: &Paint);
    /// `color = None` leaves the current shadow color untouched.
    fn set_shadow(&mut self, blur: f64, color: Option<Color>);

    fn stroke(&mut self);
    fn fill(&mut self);
}
