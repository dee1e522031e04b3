//! Square drawing-surface sizing.
//!
//! The canvas backing store tracks the container's CSS width times the device
//! pixel ratio; the height is forced to the same value.

/// Source of layout measurements for the surface. Implemented by the host.
pub trait SurfaceHost {
    /// Current CSS width of the hosting container; `0.0` before layout settles.
    fn container_width(&self) -> f64;
    fn device_pixel_ratio(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    /// Logical edge length in CSS pixels.
    pub css_size: f64,
    pub dpr: f64,
    /// Backing-store edge length in device pixels.
    pub backing_px: u32,
}

impl SurfaceMetrics {
    /// Returns `None` when the container has not been laid out yet.
    pub fn measure(container_width: f64, dpr: f64) -> Option<Self> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return None;
        }
        let dpr = sanitize_dpr(dpr);
        let backing_px = ((container_width * dpr) as u32).max(1);
        Some(Self {
            css_size: container_width,
            dpr,
            backing_px,
        })
    }

    pub fn from_host(host: &impl SurfaceHost) -> Option<Self> {
        Self::measure(host.container_width(), host.device_pixel_ratio())
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::splat(self.css_size * 0.5)
    }
}

#[inline]
pub fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_not_ready() {
        assert_eq!(SurfaceMetrics::measure(0.0, 2.0), None);
        assert_eq!(SurfaceMetrics::measure(f64::NAN, 2.0), None);
    }

    #[test]
    fn invalid_dpr_falls_back_to_one() {
        let m = SurfaceMetrics::measure(300.0, 0.0).unwrap();
        assert_eq!(m.dpr, 1.0);
        assert_eq!(m.backing_px, 300);
    }
}
