//! Glyphfall procedurally generates "digital rain" style wallpapers.
//!
//! Each wallpaper is a seeded procedure that stamps glyphs and simple geometry onto a raster
//! canvas, blurs it, and writes a PNG:
//!
//! - Colors are composed with [`blend`] over a fixed background.
//! - Silhouettes are described by [`Classifier`]s that map points to tagged regions.
//! - [`run_batch`] renders a selection of the [`registry`] into an output directory.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod batch;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod render;
pub(crate) mod shape;
pub(crate) mod text;
pub(crate) mod wallpaper;

pub use crate::foundation::core::{CanvasSize, Point, Rgb8, Vec2};
pub use crate::foundation::error::{GlyphfallError, GlyphfallResult};

pub use crate::batch::{run_batch, select};
pub use crate::color::blend::{blend, clamp_opacity};
pub use crate::color::palette;
pub use crate::config::RenderConfig;
pub use crate::render::blur::{blur_image, gaussian_blur_rgb8};
pub use crate::render::canvas::{BBox, Canvas};
pub use crate::render::output::save_png;
pub use crate::shape::primitives::{
    AngularSector, TaperBand, carve_out, ellipse_edge_distance, ellipse_value, inside_circle,
    inside_ellipse,
};
pub use crate::shape::silhouettes::{
    CrossRegion, CrownOfThorns, CrownRegion, EyeRegion, FishRegion, Ichthys, ProvidenceEye,
    RadiantCross, Skull, SkullRegion, Sword, SwordRegion,
};
pub use crate::shape::{Classifier, Region, ShapeFrame};
pub use crate::text::builtin::BuiltinFont;
pub use crate::text::font::{DEFAULT_FONT_CANDIDATES, Font, FontResolver, OutlineFont};
pub use crate::wallpaper::rng::WallRng;
pub use crate::wallpaper::{DEFAULT_BLUR_SIGMA, Wallpaper, find, registry, render_wallpaper};
