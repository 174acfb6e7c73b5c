//! Glyph-filled silhouettes: the shape wallpapers share one composition and differ only in
//! their classifier, inks, and caption.

use std::f64::consts::TAU;

use crate::color::blend::clamp_opacity;
use crate::color::palette::{
    GLOW, HEX_DIGITS, INK, INK_DARK, INK_DEEP, INK_LIGHT, MATRIX_CHARS, SCATTER,
};
use crate::foundation::core::{CanvasSize, Point, Rgb8};
use crate::foundation::error::GlyphfallResult;
use crate::render::canvas::Canvas;
use crate::shape::silhouettes::{
    CrossRegion, CrownOfThorns, CrownRegion, EyeRegion, FishRegion, Ichthys, ProvidenceEye,
    RadiantCross, Skull, SkullRegion, Sword, SwordRegion,
};
use crate::shape::{Classifier, Region, ShapeFrame};
use crate::text::font::FontResolver;
use crate::wallpaper::rng::WallRng;
use crate::wallpaper::{Wallpaper, bounds, ink};

const SCATTER_GLYPHS: usize = 2500;
const CELL_W: i64 = 22;
const CELL_H: i64 = 26;
const GLOW_RINGS: usize = 6;
/// Normalized edge distance over which glyphs brighten toward an outline.
const EDGE_FALLOFF: f64 = 0.06;
const EDGE_BOOST: f64 = 0.3;
const CAPTION_MARGIN: f64 = 80.0;
const BINARY: &[char] = &['0', '1'];

/// Base ink and opacity for each region of a silhouette; `None` leaves the cell empty.
pub(crate) trait RegionTint: Region {
    fn tint(self) -> Option<(Rgb8, f64)>;
}

impl RegionTint for SkullRegion {
    fn tint(self) -> Option<(Rgb8, f64)> {
        match self {
            Self::Cranium => Some((INK, 0.55)),
            Self::Jaw => Some((INK_DARK, 0.5)),
            Self::Outside => None,
        }
    }
}

impl RegionTint for CrownRegion {
    fn tint(self) -> Option<(Rgb8, f64)> {
        match self {
            Self::Braid => Some((INK_DEEP, 0.7)),
            Self::Ring => Some((INK, 0.45)),
            Self::Thorn => Some((INK_DARK, 0.6)),
            Self::Outside => None,
        }
    }
}

impl RegionTint for SwordRegion {
    fn tint(self) -> Option<(Rgb8, f64)> {
        match self {
            Self::Blade => Some((INK, 0.5)),
            Self::Fuller => Some((INK_LIGHT, 0.35)),
            Self::Guard | Self::Pommel => Some((INK_DEEP, 0.7)),
            Self::Grip => Some((INK_DARK, 0.6)),
            Self::Outside => None,
        }
    }
}

impl RegionTint for CrossRegion {
    fn tint(self) -> Option<(Rgb8, f64)> {
        match self {
            Self::Upright | Self::Crossbar => Some((INK_DEEP, 0.65)),
            Self::Ray => Some((GLOW, 0.22)),
            Self::Outside => None,
        }
    }
}

impl RegionTint for EyeRegion {
    fn tint(self) -> Option<(Rgb8, f64)> {
        match self {
            Self::Frame => Some((INK_DARK, 0.6)),
            Self::Sclera => Some((INK_LIGHT, 0.3)),
            Self::Iris => Some((INK, 0.6)),
            Self::Pupil => Some((INK_DEEP, 0.85)),
            Self::Outside => None,
        }
    }
}

impl RegionTint for FishRegion {
    fn tint(self) -> Option<(Rgb8, f64)> {
        match self {
            Self::Body => Some((INK, 0.55)),
            Self::Tail => Some((INK_DARK, 0.6)),
            Self::Outside => None,
        }
    }
}

/// Placement and dressing of one silhouette wallpaper.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Look {
    /// Shape scale as a fraction of canvas height.
    pub(crate) scale: f64,
    /// Shape center height as a fraction of canvas height.
    pub(crate) center_y: f64,
    /// Radius of the innermost glow ring, in shape units.
    pub(crate) ring_start: f64,
    pub(crate) rays: usize,
    pub(crate) glyphs: &'static [char],
    pub(crate) caption: &'static str,
}

impl Look {
    pub(crate) fn frame(&self, size: CanvasSize) -> ShapeFrame {
        ShapeFrame::new(
            Point::new(size.w() * 0.5, size.h() * self.center_y),
            size.h() * self.scale,
        )
    }
}

/// Scatter layer, glow rings, optional rays, glyph-filled silhouette, caption.
pub(crate) fn paint_silhouette<C>(
    canvas: &mut Canvas,
    fonts: &mut FontResolver,
    rng: &mut WallRng,
    shape: &C,
    look: &Look,
) -> GlyphfallResult<()>
where
    C: Classifier,
    C::Region: RegionTint,
{
    let font_sm = fonts.resolve(18.0);
    let font_md = fonts.resolve(22.0);
    let font_lg = fonts.resolve(28.0);
    let caption_font = fonts.resolve(30.0);
    let (w, h) = bounds(canvas);
    let (wf, hf) = (w as f64, h as f64);
    let frame = *shape.frame();
    let (cx, cy) = (frame.center.x, frame.center.y);
    let mut buf = [0u8; 4];

    for _ in 0..SCATTER_GLYPHS {
        let x = rng.randint(0, w) as f64;
        let y = rng.randint(0, h) as f64;
        let c = rng.pick(look.glyphs);
        let color = ink(canvas, SCATTER, rng.uniform(0.05, 0.12));
        canvas.text((x, y), c.encode_utf8(&mut buf), color, &font_sm)?;
    }

    for k in 0..GLOW_RINGS {
        let t = k as f64 / GLOW_RINGS as f64;
        let r = frame.scale * (look.ring_start + 0.9 * t);
        let color = ink(canvas, GLOW, 0.16 * (1.0 - t));
        canvas.stroke_ellipse([cx - r, cy - r, cx + r, cy + r], color, 3.0);
    }

    if look.rays > 0 {
        let step = TAU / look.rays as f64;
        let phase = rng.uniform(0.0, step);
        for k in 0..look.rays {
            let (sin, cos) = (phase + step * k as f64).sin_cos();
            let r0 = frame.scale * look.ring_start;
            let r1 = frame.scale * (look.ring_start + rng.uniform(0.6, 1.4));
            let color = ink(canvas, GLOW, rng.uniform(0.06, 0.14));
            canvas.line(
                &[(cx + cos * r0, cy + sin * r0), (cx + cos * r1, cy + sin * r1)],
                color,
                2.0,
            );
        }
    }

    let mut filled = 0usize;
    for row in 0..h / CELL_H {
        let y = (row * CELL_H) as f64;
        for col in 0..w / CELL_W {
            let x = (col * CELL_W) as f64;
            let p = Point::new(x + CELL_W as f64 * 0.5, y + CELL_H as f64 * 0.5);
            let Some((fg, base)) = shape.classify(p).tint() else {
                continue;
            };
            let glow = (1.0 - shape.edge_distance(p) / EDGE_FALLOFF).max(0.0);
            let a = clamp_opacity(base * rng.uniform(0.85, 1.15) + EDGE_BOOST * glow, 0.05, 0.95);
            let font = if glow > 0.5 { &font_lg } else { &font_md };
            let c = rng.pick(look.glyphs);
            let color = ink(canvas, fg, a);
            canvas.text((x, y), c.encode_utf8(&mut buf), color, font)?;
            filled += 1;
        }
    }
    tracing::debug!(filled, "silhouette cells inked");

    let text_w = caption_font.approx_advance() * look.caption.chars().count() as f64;
    let x = (wf - CAPTION_MARGIN - text_w).max(0.0);
    let y = (hf - CAPTION_MARGIN).max(0.0);
    let rule = ink(canvas, INK_DARK, 0.25);
    canvas.line(&[(x, y - 14.0), (x + text_w, y - 14.0)], rule, 2.0);
    let color = ink(canvas, INK_DARK, 0.55);
    canvas.text((x, y), look.caption, color, &caption_font)
}

macro_rules! silhouette_wallpaper {
    (
        $(#[$meta:meta])*
        $name:ident($shape:ident) {
            index: $index:expr,
            slug: $slug:expr,
            seed: $seed:expr,
            look: $look:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name;

        impl $name {
            pub(crate) const LOOK: Look = $look;
        }

        impl Wallpaper for $name {
            fn index(&self) -> u32 {
                $index
            }

            fn slug(&self) -> &'static str {
                $slug
            }

            fn seed(&self) -> u64 {
                $seed
            }

            fn paint(
                &self,
                canvas: &mut Canvas,
                fonts: &mut FontResolver,
                rng: &mut WallRng,
            ) -> GlyphfallResult<()> {
                let shape = $shape::new(Self::LOOK.frame(canvas.size()));
                paint_silhouette(canvas, fonts, rng, &shape, &Self::LOOK)
            }
        }
    };
}

silhouette_wallpaper!(
    /// Katakana skull.
    SkullWallpaper(Skull) {
        index: 4,
        slug: "skull",
        seed: 101,
        look: Look {
            scale: 0.4,
            center_y: 0.5,
            ring_start: 1.25,
            rays: 0,
            glyphs: MATRIX_CHARS,
            caption: "MEMENTO MORI",
        },
    }
);

silhouette_wallpaper!(
    /// Braided crown of thorns.
    CrownWallpaper(CrownOfThorns) {
        index: 5,
        slug: "crown-of-thorns",
        seed: 202,
        look: Look {
            scale: 0.55,
            center_y: 0.5,
            ring_start: 1.5,
            rays: 0,
            glyphs: MATRIX_CHARS,
            caption: "JOHN 19:2",
        },
    }
);

silhouette_wallpaper!(
    /// Upright sword in hex digits.
    SwordWallpaper(Sword) {
        index: 6,
        slug: "sword",
        seed: 303,
        look: Look {
            scale: 0.32,
            center_y: 0.55,
            ring_start: 0.6,
            rays: 0,
            glyphs: HEX_DIGITS,
            caption: "EPHESIANS 6:17",
        },
    }
);

silhouette_wallpaper!(
    /// Binary cross with rays.
    CrossWallpaper(RadiantCross) {
        index: 7,
        slug: "radiant-cross",
        seed: 404,
        look: Look {
            scale: 0.33,
            center_y: 0.48,
            ring_start: 1.6,
            rays: 24,
            glyphs: BINARY,
            caption: "IN HOC SIGNO VINCES",
        },
    }
);

silhouette_wallpaper!(
    /// All-seeing eye inside a hollow triangle.
    EyeWallpaper(ProvidenceEye) {
        index: 8,
        slug: "providence-eye",
        seed: 505,
        look: Look {
            scale: 0.5,
            center_y: 0.55,
            ring_start: 1.15,
            rays: 32,
            glyphs: HEX_DIGITS,
            caption: "PROVERBS 15:3",
        },
    }
);

silhouette_wallpaper!(
    /// Ichthys fish.
    FishWallpaper(Ichthys) {
        index: 9,
        slug: "ichthys",
        seed: 606,
        look: Look {
            scale: 0.6,
            center_y: 0.5,
            ring_start: 1.3,
            rays: 0,
            glyphs: MATRIX_CHARS,
            caption: "MATTHEW 4:19",
        },
    }
);

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/silhouette.rs"]
mod tests;
