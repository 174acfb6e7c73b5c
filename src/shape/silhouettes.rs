//! Hand-authored silhouettes used by the shape wallpapers.
//!
//! All constants are in normalized units (see [`ShapeFrame`]); `y` grows downward.

use crate::foundation::core::Vec2;
use crate::shape::primitives::{
    AngularSector, TaperBand, carve_out, ellipse_edge_distance, ellipse_value, inside_circle,
    inside_ellipse,
};
use crate::shape::{Classifier, Region, ShapeFrame};

macro_rules! region_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Outside,
        }

        impl Region for $name {
            const OUTSIDE: Self = Self::Outside;
        }
    };
}

region_enum!(
    /// Regions of [`Skull`].
    SkullRegion { Cranium, Jaw }
);
region_enum!(
    /// Regions of [`CrownOfThorns`].
    CrownRegion { Braid, Ring, Thorn }
);
region_enum!(
    /// Regions of [`Sword`].
    SwordRegion { Blade, Fuller, Guard, Grip, Pommel }
);
region_enum!(
    /// Regions of [`RadiantCross`].
    CrossRegion { Upright, Crossbar, Ray }
);
region_enum!(
    /// Regions of [`ProvidenceEye`].
    EyeRegion { Frame, Sclera, Iris, Pupil }
);
region_enum!(
    /// Regions of [`Ichthys`].
    FishRegion { Body, Tail }
);

// ---------------------------------------------------------------------------------------------
// Skull

/// Cranium ellipse minus eye sockets and nose cavity, above a tapered jaw with teeth gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct Skull {
    pub frame: ShapeFrame,
    pub cranium_center: Vec2,
    pub cranium_axes: (f64, f64),
    pub socket_center: Vec2,
    pub socket_axes: (f64, f64),
    pub nose: TaperBand,
    pub jaw: TaperBand,
    /// Teeth band vertical extent.
    pub teeth: (f64, f64),
    pub tooth_pitch: f64,
    /// Fraction of each pitch left open as a gap.
    pub tooth_gap: f64,
}

impl Skull {
    pub fn new(frame: ShapeFrame) -> Self {
        Self {
            frame,
            cranium_center: Vec2::new(0.0, -0.2),
            cranium_axes: (0.95, 0.85),
            socket_center: Vec2::new(0.36, 0.02),
            socket_axes: (0.25, 0.21),
            nose: TaperBand::linear(0.22, 0.44, 0.02, 0.11),
            jaw: TaperBand::linear(0.5, 1.0, 0.6, 0.42),
            teeth: (0.52, 0.72),
            tooth_pitch: 0.12,
            tooth_gap: 0.2,
        }
    }

    fn in_socket(&self, v: Vec2) -> bool {
        let (a, b) = self.socket_axes;
        let mirrored = Vec2::new(v.x.abs(), v.y);
        inside_ellipse(mirrored - self.socket_center, a, b)
    }

    fn in_tooth_gap(&self, v: Vec2) -> bool {
        let (top, bottom) = self.teeth;
        if v.y < top || v.y > bottom {
            return false;
        }
        let phase = v.x.rem_euclid(self.tooth_pitch) / self.tooth_pitch;
        phase < self.tooth_gap
    }
}

impl Classifier for Skull {
    type Region = SkullRegion;

    fn frame(&self) -> &ShapeFrame {
        &self.frame
    }

    fn classify_normalized(&self, v: Vec2) -> SkullRegion {
        if v.y < self.jaw.top {
            let (a, b) = self.cranium_axes;
            let cranium = |p: Vec2| inside_ellipse(p - self.cranium_center, a, b);
            let socket = |p: Vec2| self.in_socket(p);
            let nose = |p: Vec2| self.nose.contains(p);
            if carve_out(v, cranium, &[&socket, &nose]) {
                return SkullRegion::Cranium;
            }
            return SkullRegion::Outside;
        }

        let tooth_gap = |p: Vec2| self.in_tooth_gap(p);
        if carve_out(v, |p| self.jaw.contains(p), &[&tooth_gap]) {
            SkullRegion::Jaw
        } else {
            SkullRegion::Outside
        }
    }

    fn edge_distance_normalized(&self, v: Vec2) -> f64 {
        let (ca, cb) = self.cranium_axes;
        let (sa, sb) = self.socket_axes;
        let mirrored = Vec2::new(v.x.abs(), v.y);
        ellipse_edge_distance(v - self.cranium_center, ca, cb)
            .min(ellipse_edge_distance(mirrored - self.socket_center, sa, sb))
            .min(self.jaw.edge_distance(v))
    }
}

// ---------------------------------------------------------------------------------------------
// Crown of thorns

/// Elliptical wreath seen in perspective: a ring with two sinusoidal braid strands and thorns
/// that narrow as they leave the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct CrownOfThorns {
    pub frame: ShapeFrame,
    pub outer_axes: (f64, f64),
    pub inner_axes: (f64, f64),
    /// Strand waves per revolution.
    pub braid_waves: f64,
    pub braid_amplitude: f64,
    pub braid_half_width: f64,
    /// Wedges in the outer ellipse's circle-ized coordinates.
    pub thorns: AngularSector,
}

impl CrownOfThorns {
    pub fn new(frame: ShapeFrame) -> Self {
        Self {
            frame,
            outer_axes: (1.0, 0.42),
            inner_axes: (0.78, 0.28),
            braid_waves: 9.0,
            braid_amplitude: 0.1,
            braid_half_width: 0.05,
            thorns: AngularSector::evenly_spaced(14, 0.11, 0.09, 1.0, 1.45),
        }
    }

    fn mid_axes(&self) -> (f64, f64) {
        (
            (self.outer_axes.0 + self.inner_axes.0) * 0.5,
            (self.outer_axes.1 + self.inner_axes.1) * 0.5,
        )
    }

    fn on_braid(&self, v: Vec2) -> bool {
        let (ma, mb) = self.mid_axes();
        let rho = ellipse_value(v, ma, mb).sqrt();
        let theta = (v.y / mb).atan2(v.x / ma);
        let wave = self.braid_amplitude * (self.braid_waves * theta).sin();
        (rho - (1.0 + wave)).abs() < self.braid_half_width
            || (rho - (1.0 - wave)).abs() < self.braid_half_width
    }
}

impl Classifier for CrownOfThorns {
    type Region = CrownRegion;

    fn frame(&self) -> &ShapeFrame {
        &self.frame
    }

    fn classify_normalized(&self, v: Vec2) -> CrownRegion {
        let (oa, ob) = self.outer_axes;
        let (ia, ib) = self.inner_axes;
        let ring = |p: Vec2| inside_ellipse(p, oa, ob);
        let hole = |p: Vec2| inside_ellipse(p, ia, ib);
        if carve_out(v, ring, &[&hole]) {
            if self.on_braid(v) {
                return CrownRegion::Braid;
            }
            return CrownRegion::Ring;
        }

        let u = Vec2::new(v.x / oa, v.y / ob);
        let taper = 1.0 - self.thorns.radial_t(u);
        if self.thorns.hit_with_tolerance(u, self.thorns.tolerance * taper).is_some() {
            return CrownRegion::Thorn;
        }
        CrownRegion::Outside
    }

    fn edge_distance_normalized(&self, v: Vec2) -> f64 {
        let (oa, ob) = self.outer_axes;
        let (ia, ib) = self.inner_axes;
        ellipse_edge_distance(v, oa, ob).min(ellipse_edge_distance(v, ia, ib))
    }
}

// ---------------------------------------------------------------------------------------------
// Sword

/// Upright sword: power-law tapered blade with a central fuller, crossguard with round
/// quillon ends, grip and pommel.
#[derive(Clone, Debug, PartialEq)]
pub struct Sword {
    pub frame: ShapeFrame,
    pub blade: TaperBand,
    pub fuller: TaperBand,
    /// Crossguard as a band in transposed coordinates (`x` runs vertically).
    pub guard: TaperBand,
    pub guard_center_y: f64,
    pub quillon_radius: f64,
    pub grip: TaperBand,
    pub pommel_center: Vec2,
    pub pommel_radius: f64,
}

impl Sword {
    pub fn new(frame: ShapeFrame) -> Self {
        Self {
            frame,
            blade: TaperBand::linear(-1.5, 0.45, 0.0, 0.12).with_exponent(0.35),
            fuller: TaperBand::straight(-1.1, 0.4, 0.025),
            guard: TaperBand::straight(-0.6, 0.6, 0.065),
            guard_center_y: 0.515,
            quillon_radius: 0.075,
            grip: TaperBand::straight(0.58, 1.0, 0.065),
            pommel_center: Vec2::new(0.0, 1.09),
            pommel_radius: 0.1,
        }
    }

    fn guard_local(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.y - self.guard_center_y, v.x)
    }

    fn in_guard(&self, v: Vec2) -> bool {
        if self.guard.contains(self.guard_local(v)) {
            return true;
        }
        let quillon = Vec2::new(v.x.abs() - self.guard.bottom, v.y - self.guard_center_y);
        inside_circle(quillon, self.quillon_radius)
    }
}

impl Classifier for Sword {
    type Region = SwordRegion;

    fn frame(&self) -> &ShapeFrame {
        &self.frame
    }

    fn classify_normalized(&self, v: Vec2) -> SwordRegion {
        if inside_circle(v - self.pommel_center, self.pommel_radius) {
            SwordRegion::Pommel
        } else if self.grip.contains(v) {
            SwordRegion::Grip
        } else if self.in_guard(v) {
            SwordRegion::Guard
        } else if self.blade.contains(v) {
            if self.fuller.contains(v) {
                SwordRegion::Fuller
            } else {
                SwordRegion::Blade
            }
        } else {
            SwordRegion::Outside
        }
    }

    fn edge_distance_normalized(&self, v: Vec2) -> f64 {
        let r = self.pommel_radius;
        self.blade
            .edge_distance(v)
            .min(self.guard.edge_distance(self.guard_local(v)))
            .min(self.grip.edge_distance(v))
            .min(ellipse_edge_distance(v - self.pommel_center, r, r))
    }
}

// ---------------------------------------------------------------------------------------------
// Radiant cross

/// Latin cross with light rays radiating from the crossing.
#[derive(Clone, Debug, PartialEq)]
pub struct RadiantCross {
    pub frame: ShapeFrame,
    pub upright: TaperBand,
    /// Crossbar as a band in transposed coordinates.
    pub crossbar: TaperBand,
    pub crossing_y: f64,
    pub rays: AngularSector,
}

impl RadiantCross {
    pub fn new(frame: ShapeFrame) -> Self {
        Self {
            frame,
            upright: TaperBand::straight(-1.3, 1.5, 0.14),
            crossbar: TaperBand::straight(-0.75, 0.75, 0.14),
            crossing_y: -0.55,
            rays: AngularSector::evenly_spaced(16, 0.0, 0.035, 0.3, 2.2),
        }
    }

    fn crossbar_local(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.y - self.crossing_y, v.x)
    }
}

impl Classifier for RadiantCross {
    type Region = CrossRegion;

    fn frame(&self) -> &ShapeFrame {
        &self.frame
    }

    fn classify_normalized(&self, v: Vec2) -> CrossRegion {
        if self.upright.contains(v) {
            return CrossRegion::Upright;
        }
        if self.crossbar.contains(self.crossbar_local(v)) {
            return CrossRegion::Crossbar;
        }
        let from_crossing = Vec2::new(v.x, v.y - self.crossing_y);
        if self.rays.hit(from_crossing).is_some() {
            return CrossRegion::Ray;
        }
        CrossRegion::Outside
    }

    fn edge_distance_normalized(&self, v: Vec2) -> f64 {
        self.upright
            .edge_distance(v)
            .min(self.crossbar.edge_distance(self.crossbar_local(v)))
    }
}

// ---------------------------------------------------------------------------------------------
// Eye of providence

/// Hollow triangle (outer triangle minus inner triangle) framing an eye.
#[derive(Clone, Debug, PartialEq)]
pub struct ProvidenceEye {
    pub frame: ShapeFrame,
    pub outer: TaperBand,
    pub inner: TaperBand,
    pub eye_center: Vec2,
    pub sclera_axes: (f64, f64),
    pub iris_radius: f64,
    pub pupil_radius: f64,
}

impl ProvidenceEye {
    pub fn new(frame: ShapeFrame) -> Self {
        Self {
            frame,
            outer: TaperBand::linear(-1.0, 0.8, 0.0, 1.05),
            inner: TaperBand::linear(-0.62, 0.64, 0.0, 0.78),
            eye_center: Vec2::new(0.0, 0.2),
            sclera_axes: (0.42, 0.17),
            iris_radius: 0.14,
            pupil_radius: 0.06,
        }
    }
}

impl Classifier for ProvidenceEye {
    type Region = EyeRegion;

    fn frame(&self) -> &ShapeFrame {
        &self.frame
    }

    fn classify_normalized(&self, v: Vec2) -> EyeRegion {
        let e = v - self.eye_center;
        let (sa, sb) = self.sclera_axes;
        if inside_circle(e, self.pupil_radius) {
            return EyeRegion::Pupil;
        }
        if inside_circle(e, self.iris_radius) {
            return EyeRegion::Iris;
        }
        if inside_ellipse(e, sa, sb) {
            return EyeRegion::Sclera;
        }
        let hollow = |p: Vec2| self.inner.contains(p);
        if carve_out(v, |p| self.outer.contains(p), &[&hollow]) {
            return EyeRegion::Frame;
        }
        EyeRegion::Outside
    }

    fn edge_distance_normalized(&self, v: Vec2) -> f64 {
        let (sa, sb) = self.sclera_axes;
        self.outer
            .edge_distance(v)
            .min(self.inner.edge_distance(v))
            .min(ellipse_edge_distance(v - self.eye_center, sa, sb))
    }
}

// ---------------------------------------------------------------------------------------------
// Ichthys

/// Fish symbol: the lens between two circles, a crossing tail, and a carved-out eye.
#[derive(Clone, Debug, PartialEq)]
pub struct Ichthys {
    pub frame: ShapeFrame,
    /// Vertical offset of the two arc centers.
    pub arc_offset: f64,
    pub arc_radius: f64,
    pub eye_center: Vec2,
    pub eye_radius: f64,
    /// Tail starts at this `x` and opens with this slope.
    pub tail_start: f64,
    pub tail_end: f64,
    pub tail_slope: f64,
}

impl Ichthys {
    pub fn new(frame: ShapeFrame) -> Self {
        Self {
            frame,
            arc_offset: 0.62,
            arc_radius: 1.0,
            eye_center: Vec2::new(-0.45, -0.08),
            eye_radius: 0.06,
            tail_start: 0.6,
            tail_end: 1.15,
            tail_slope: 0.85,
        }
    }

    fn upper_arc(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x, v.y + self.arc_offset)
    }

    fn lower_arc(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x, v.y - self.arc_offset)
    }
}

impl Classifier for Ichthys {
    type Region = FishRegion;

    fn frame(&self) -> &ShapeFrame {
        &self.frame
    }

    fn classify_normalized(&self, v: Vec2) -> FishRegion {
        let r = self.arc_radius;
        let lens = |p: Vec2| {
            inside_circle(self.upper_arc(p), r) && inside_circle(self.lower_arc(p), r)
        };
        let eye = |p: Vec2| inside_circle(p - self.eye_center, self.eye_radius);
        if carve_out(v, lens, &[&eye]) {
            return FishRegion::Body;
        }
        if (self.tail_start..=self.tail_end).contains(&v.x)
            && v.y.abs() < (v.x - self.tail_start) * self.tail_slope
        {
            return FishRegion::Tail;
        }
        FishRegion::Outside
    }

    fn edge_distance_normalized(&self, v: Vec2) -> f64 {
        let r = self.arc_radius;
        ellipse_edge_distance(self.upper_arc(v), r, r)
            .min(ellipse_edge_distance(self.lower_arc(v), r, r))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/silhouettes.rs"]
mod tests;
