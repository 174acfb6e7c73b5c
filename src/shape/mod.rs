//! Point-in-silhouette classifiers.
//!
//! Every classifier works on a [`ShapeFrame`]-normalized coordinate and returns a region enum
//! with an explicit `Outside` variant. Classification is total: any finite or non-finite point
//! maps to some region.

pub(crate) mod primitives;
pub(crate) mod silhouettes;

use crate::foundation::core::{Point, Vec2};

/// Center and scale that map canvas pixels to a shape's normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeFrame {
    pub center: Point,
    pub scale: f64,
}

impl ShapeFrame {
    pub fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    /// `(p - center) / scale`.
    #[inline]
    pub fn normalize(&self, p: Point) -> Vec2 {
        (p - self.center) / self.scale
    }

    /// Inverse of [`Self::normalize`].
    #[inline]
    pub fn to_canvas(&self, v: Vec2) -> Point {
        self.center + v * self.scale
    }
}

/// A region tag returned by a classifier.
pub trait Region: Copy + Eq + std::fmt::Debug {
    /// The "not in shape" variant.
    const OUTSIDE: Self;

    fn is_inside(self) -> bool {
        self != Self::OUTSIDE
    }
}

/// Maps canvas points onto regions of a parametric silhouette.
pub trait Classifier {
    type Region: Region;

    fn frame(&self) -> &ShapeFrame;

    /// Region containing normalized coordinate `v`.
    fn classify_normalized(&self, v: Vec2) -> Self::Region;

    /// Cheap "distance to nearest edge" in normalized units; `0` on the boundary.
    ///
    /// Derived from how far an implicit equation is from its threshold, not a Euclidean
    /// distance, so falloffs follow the shape's own curvature.
    fn edge_distance_normalized(&self, v: Vec2) -> f64;

    fn classify(&self, p: Point) -> Self::Region {
        self.classify_normalized(self.frame().normalize(p))
    }

    fn edge_distance(&self, p: Point) -> f64 {
        self.edge_distance_normalized(self.frame().normalize(p))
    }
}
