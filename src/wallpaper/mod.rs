//! Wallpaper procedures and the fixed order they run in.

pub(crate) mod circuit;
pub(crate) mod hexdump;
pub(crate) mod matrix_rain;
pub(crate) mod rng;
pub(crate) mod silhouette;

use crate::color::blend::blend;
use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::GlyphfallResult;
use crate::render::canvas::Canvas;
use crate::text::font::FontResolver;
use crate::wallpaper::rng::WallRng;

/// Blur applied to most wallpapers before they are written.
pub const DEFAULT_BLUR_SIGMA: f32 = 0.3;

/// One self-contained wallpaper procedure.
pub trait Wallpaper {
    /// 1-based position in the batch; also the file-name prefix.
    fn index(&self) -> u32;

    fn slug(&self) -> &'static str;

    /// Seed the procedure's [`WallRng`] starts from.
    fn seed(&self) -> u64;

    fn blur_sigma(&self) -> f32 {
        DEFAULT_BLUR_SIGMA
    }

    /// Draw onto a freshly cleared canvas.
    fn paint(
        &self,
        canvas: &mut Canvas,
        fonts: &mut FontResolver,
        rng: &mut WallRng,
    ) -> GlyphfallResult<()>;

    /// `<index>-<slug>.png`.
    fn file_name(&self) -> String {
        format!("{}-{}.png", self.index(), self.slug())
    }
}

/// Every wallpaper, in batch order.
pub fn registry() -> Vec<Box<dyn Wallpaper>> {
    vec![
        Box::new(matrix_rain::MatrixRain),
        Box::new(circuit::Circuit),
        Box::new(hexdump::Hexdump),
        Box::new(silhouette::SkullWallpaper),
        Box::new(silhouette::CrownWallpaper),
        Box::new(silhouette::SwordWallpaper),
        Box::new(silhouette::CrossWallpaper),
        Box::new(silhouette::EyeWallpaper),
        Box::new(silhouette::FishWallpaper),
    ]
}

/// Look up a wallpaper by slug.
pub fn find(slug: &str) -> Option<Box<dyn Wallpaper>> {
    registry().into_iter().find(|w| w.slug() == slug)
}

/// Run one procedure on a new canvas and return the blurred raster.
#[tracing::instrument(skip_all, fields(slug = wallpaper.slug(), seed = wallpaper.seed()))]
pub fn render_wallpaper(
    wallpaper: &dyn Wallpaper,
    size: CanvasSize,
    background: Rgb8,
    fonts: &mut FontResolver,
) -> GlyphfallResult<image::RgbImage> {
    let mut canvas = Canvas::new(size, background)?;
    let mut rng = WallRng::seeded(wallpaper.seed());
    wallpaper.paint(&mut canvas, fonts, &mut rng)?;
    tracing::debug!(
        draw_calls = canvas.draw_calls(),
        shaped_runs = canvas.shaped_runs(),
        "painted"
    );
    canvas.finish(wallpaper.blur_sigma())
}

/// `fg` blended over the canvas background at `opacity`.
pub(crate) fn ink(canvas: &Canvas, fg: Rgb8, opacity: f64) -> Rgb8 {
    blend(canvas.background(), fg, opacity)
}

/// Canvas dimensions as signed pixel bounds for random placement.
pub(crate) fn bounds(canvas: &Canvas) -> (i64, i64) {
    let size = canvas.size();
    (i64::from(size.width), i64::from(size.height))
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/registry.rs"]
mod tests;
