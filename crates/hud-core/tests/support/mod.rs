// Recording canvas and fixed-size host shared by the integration tests.

#![allow(dead_code)]
use glam::DVec2;
use hud_core::{BlendMode, Canvas, Color, LineCap, Paint, SurfaceHost, SurfaceMetrics};

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Resize(SurfaceMetrics),
    Clear(DVec2, DVec2),
    Blend(BlendMode),
    Save,
    Restore,
    BeginPath,
    Arc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
    },
    Ellipse {
        center: DVec2,
        radii: DVec2,
        rotation: f64,
    },
    LineWidth(f64),
    LineCap(LineCap),
    StrokeStyle(Paint),
    FillStyle(Paint),
    Shadow(f64, Option<Color>),
    Stroke,
    Fill,
}

#[derive(Default)]
pub struct Recorder {
    pub cmds: Vec<Cmd>,
}

impl Recorder {
    pub fn take(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.cmds)
    }

    pub fn arcs(&self) -> Vec<(DVec2, f64, f64, f64)> {
        self.cmds
            .iter()
            .filter_map(|c| match *c {
                Cmd::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => Some((center, radius, start, end)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Cmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }
}

impl Canvas for Recorder {
    fn resize(&mut self, surface: &SurfaceMetrics) {
        self.cmds.push(Cmd::Resize(*surface));
    }
    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.cmds.push(Cmd::Clear(origin, size));
    }
    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.cmds.push(Cmd::Blend(mode));
    }
    fn save(&mut self) {
        self.cmds.push(Cmd::Save);
    }
    fn restore(&mut self) {
        self.cmds.push(Cmd::Restore);
    }
    fn begin_path(&mut self) {
        self.cmds.push(Cmd::BeginPath);
    }
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        self.cmds.push(Cmd::Arc {
            center,
            radius,
            start,
            end,
        });
    }
    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, _start: f64, _end: f64) {
        self.cmds.push(Cmd::Ellipse {
            center,
            radii,
            rotation,
        });
    }
    fn set_line_width(&mut self, width: f64) {
        self.cmds.push(Cmd::LineWidth(width));
    }
    fn set_line_cap(&mut self, cap: LineCap) {
        self.cmds.push(Cmd::LineCap(cap));
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.cmds.push(Cmd::StrokeStyle(paint.clone()));
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.cmds.push(Cmd::FillStyle(paint.clone()));
    }
    fn set_shadow(&mut self, blur: f64, color: Option<Color>) {
        self.cmds.push(Cmd::Shadow(blur, color));
    }
    fn stroke(&mut self) {
        self.cmds.push(Cmd::Stroke);
    }
    fn fill(&mut self) {
        self.cmds.push(Cmd::Fill);
    }
}

pub struct FixedHost {
    pub width: f64,
    pub dpr: f64,
}

impl SurfaceHost for FixedHost {
    fn container_width(&self) -> f64 {
        self.width
    }
    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }
}
