use crate::foundation::core::Vec2;
use crate::foundation::math::{angle_delta, lerp};

/// `(x/a)^2 + (y/b)^2` for `v` relative to the ellipse center.
#[inline]
pub fn ellipse_value(v: Vec2, a: f64, b: f64) -> f64 {
    let x = v.x / a;
    let y = v.y / b;
    x * x + y * y
}

/// Strict interior test: points on the boundary are outside.
#[inline]
pub fn inside_ellipse(v: Vec2, a: f64, b: f64) -> bool {
    ellipse_value(v, a, b) < 1.0
}

/// Strict interior test for a circle of radius `r`.
#[inline]
pub fn inside_circle(v: Vec2, r: f64) -> bool {
    v.x * v.x + v.y * v.y < r * r
}

/// `|ellipse_value - 1|`: zero on the outline, growing quadratically away from it.
#[inline]
pub fn ellipse_edge_distance(v: Vec2, a: f64, b: f64) -> f64 {
    (ellipse_value(v, a, b) - 1.0).abs()
}

/// Horizontally symmetric band whose half-width varies with `y`.
///
/// `top`/`bottom` bound the band vertically; the half-width goes from `top_half_width` to
/// `bottom_half_width` along `t^exponent` where `t` is the normalized vertical position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaperBand {
    pub top: f64,
    pub bottom: f64,
    pub top_half_width: f64,
    pub bottom_half_width: f64,
    pub exponent: f64,
}

impl TaperBand {
    /// A band with constant half-width (a rectangle).
    pub fn straight(top: f64, bottom: f64, half_width: f64) -> Self {
        Self::linear(top, bottom, half_width, half_width)
    }

    pub fn linear(top: f64, bottom: f64, top_half_width: f64, bottom_half_width: f64) -> Self {
        Self {
            top,
            bottom,
            top_half_width,
            bottom_half_width,
            exponent: 1.0,
        }
    }

    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }

    /// Half-width at height `y` (clamped to the band's vertical extent).
    pub fn half_width(&self, y: f64) -> f64 {
        let span = self.bottom - self.top;
        let t = if span > 0.0 {
            ((y - self.top) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        lerp(
            self.top_half_width,
            self.bottom_half_width,
            t.powf(self.exponent),
        )
    }

    pub fn contains(&self, v: Vec2) -> bool {
        self.spans(v.y) && v.x.abs() < self.half_width(v.y)
    }

    /// `| |x| - w(y) |` inside the band's vertical extent, infinite elsewhere.
    pub fn edge_distance(&self, v: Vec2) -> f64 {
        if !self.spans(v.y) {
            return f64::INFINITY;
        }
        (v.x.abs() - self.half_width(v.y)).abs()
    }
}

/// Narrow wedges radiating from the origin at fixed angles.
#[derive(Clone, Debug, PartialEq)]
pub struct AngularSector {
    /// Target angles in radians, measured with `atan2(y, x)` (y grows downward on canvas).
    pub angles: Vec<f64>,
    /// Half-width of each wedge in radians.
    pub tolerance: f64,
    pub inner: f64,
    pub outer: f64,
}

impl AngularSector {
    /// `count` evenly spaced wedges starting at `phase`.
    pub fn evenly_spaced(count: usize, phase: f64, tolerance: f64, inner: f64, outer: f64) -> Self {
        let step = std::f64::consts::TAU / count.max(1) as f64;
        Self {
            angles: (0..count).map(|i| phase + step * i as f64).collect(),
            tolerance,
            inner,
            outer,
        }
    }

    /// Index of the first wedge containing `v`, if any.
    pub fn hit(&self, v: Vec2) -> Option<usize> {
        self.hit_with_tolerance(v, self.tolerance)
    }

    /// Like [`Self::hit`] with an explicit tolerance (used by tapering wedges).
    pub fn hit_with_tolerance(&self, v: Vec2, tolerance: f64) -> Option<usize> {
        let r = v.hypot();
        if r < self.inner || r >= self.outer {
            return None;
        }
        let theta = v.y.atan2(v.x);
        self.angles
            .iter()
            .position(|&a| angle_delta(theta, a) < tolerance)
    }

    /// Position of `v` between `inner` (0) and `outer` (1).
    pub fn radial_t(&self, v: Vec2) -> f64 {
        let span = self.outer - self.inner;
        if span <= 0.0 {
            return 0.0;
        }
        ((v.hypot() - self.inner) / span).clamp(0.0, 1.0)
    }
}

/// Outer inclusion minus carve-outs.
///
/// `outer` is evaluated first; holes are then checked in order and the first one containing `v`
/// excludes the point without evaluating the rest.
pub fn carve_out(v: Vec2, outer: impl Fn(Vec2) -> bool, holes: &[&dyn Fn(Vec2) -> bool]) -> bool {
    if !outer(v) {
        return false;
    }
    !holes.iter().any(|hole| hole(v))
}

#[cfg(test)]
#[path = "../../tests/unit/shape/primitives.rs"]
mod tests;
