use vello_cpu::kurbo::{self as cpu_kurbo, Shape as _};

use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::{GlyphfallError, GlyphfallResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::blur::blur_image;
use crate::text::builtin::BuiltinFont;
use crate::text::font::Font;
use crate::text::shaper::TextShaper;

/// Inclusive pixel bounding box `[x0, y0, x1, y1]`, the way rectangles and ellipses are authored.
pub type BBox = [f64; 4];

const ELLIPSE_TOLERANCE: f64 = 0.1;

/// Opaque RGB raster every wallpaper draws into.
///
/// Draw calls are recorded into a `vello_cpu` render context in order and rasterized once by
/// [`Canvas::finish`], which also applies the final blur.
pub struct Canvas {
    size: CanvasSize,
    background: Rgb8,
    ctx: vello_cpu::RenderContext,
    shaper: TextShaper,
    draw_calls: u64,
}

impl Canvas {
    /// A canvas of `size` filled with `background`.
    pub fn new(size: CanvasSize, background: Rgb8) -> GlyphfallResult<Self> {
        let (w, h) = size.as_u16()?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint(paint(background));
        ctx.fill_rect(&cpu_kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
        Ok(Self {
            size,
            background,
            ctx,
            shaper: TextShaper::new(),
            draw_calls: 0,
        })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn background(&self) -> Rgb8 {
        self.background
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Polyline through pixel centers; fewer than two points draws nothing.
    pub fn line(&mut self, points: &[(f64, f64)], color: Rgb8, width: f64) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut path = cpu_kurbo::BezPath::new();
        path.move_to((x0 + 0.5, y0 + 0.5));
        for &(x, y) in rest {
            path.line_to((x + 0.5, y + 0.5));
        }
        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(
            cpu_kurbo::Stroke::new(width.max(1.0))
                .with_caps(cpu_kurbo::Cap::Butt)
                .with_join(cpu_kurbo::Join::Miter),
        );
        self.ctx.stroke_path(&path);
        self.draw_calls += 1;
    }

    pub fn fill_rect(&mut self, bbox: BBox, color: Rgb8) {
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&outer_rect(bbox));
        self.draw_calls += 1;
    }

    /// Rectangle outline drawn inward from the bounding box.
    pub fn stroke_rect(&mut self, bbox: BBox, color: Rgb8, width: f64) {
        let width = width.max(1.0);
        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(cpu_kurbo::Stroke::new(width));
        self.ctx.stroke_rect(&outer_rect(bbox).inset(-width * 0.5));
        self.draw_calls += 1;
    }

    pub fn fill_ellipse(&mut self, bbox: BBox, color: Rgb8) {
        let path = cpu_kurbo::Ellipse::from_rect(outer_rect(bbox)).to_path(ELLIPSE_TOLERANCE);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&path);
        self.draw_calls += 1;
    }

    /// Ellipse outline drawn inward from the bounding box.
    pub fn stroke_ellipse(&mut self, bbox: BBox, color: Rgb8, width: f64) {
        let width = width.max(1.0);
        let rect = outer_rect(bbox).inset(-width * 0.5);
        let path = cpu_kurbo::Ellipse::from_rect(rect).to_path(ELLIPSE_TOLERANCE);
        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(cpu_kurbo::Stroke::new(width));
        self.ctx.stroke_path(&path);
        self.draw_calls += 1;
    }

    /// Stamp `text` with its top-left corner at `origin`.
    pub fn text(
        &mut self,
        origin: (f64, f64),
        text: &str,
        color: Rgb8,
        font: &Font,
    ) -> GlyphfallResult<()> {
        match font {
            Font::Outline(outline) => {
                let glyphs = self.shaper.shape(outline, text)?;
                let (ox, oy) = (origin.0 as f32, origin.1 as f32);
                self.ctx.set_paint(paint(color));
                self.ctx
                    .glyph_run(outline.data())
                    .font_size(outline.size_px())
                    .fill_glyphs(glyphs.iter().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: ox + g.x,
                        y: oy + g.y,
                    }));
            }
            Font::Builtin(builtin) => {
                let path = builtin_text_path(*builtin, origin, text);
                if path.elements().is_empty() {
                    return Ok(());
                }
                self.ctx.set_paint(paint(color));
                self.ctx.fill_path(&path);
            }
        }
        self.draw_calls += 1;
        Ok(())
    }

    pub(crate) fn shaped_runs(&self) -> usize {
        self.shaper.cached_runs()
    }

    /// Rasterize all draw calls, flatten onto the background, and blur with `blur_sigma`.
    pub fn finish(mut self, blur_sigma: f32) -> GlyphfallResult<image::RgbImage> {
        let (w, h) = self.size.as_u16()?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut rgb = Vec::with_capacity(self.size.pixel_count() * 3);
        let bg = self.background.to_array();
        for px in pixmap.data_as_u8_slice().chunks_exact(4) {
            let inv_a = 255 - u16::from(px[3]);
            for c in 0..3 {
                let under = mul_div255_u8(u16::from(bg[c]), inv_a);
                rgb.push(px[c].saturating_add(under));
            }
        }

        let img = image::RgbImage::from_raw(self.size.width, self.size.height, rgb)
            .ok_or_else(|| GlyphfallError::render("pixmap readback size mismatch"))?;
        blur_image(&img, blur_sigma)
    }
}

fn paint(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn outer_rect([x0, y0, x1, y1]: BBox) -> cpu_kurbo::Rect {
    cpu_kurbo::Rect::new(x0, y0, x1 + 1.0, y1 + 1.0)
}

fn builtin_text_path(font: BuiltinFont, origin: (f64, f64), text: &str) -> cpu_kurbo::BezPath {
    let scale = f64::from(font.scale());
    // One empty row above the glyph cell approximates an outline font's ascender gap.
    let top = origin.1 + scale;
    let mut path = cpu_kurbo::BezPath::new();
    for (i, c) in text.chars().enumerate() {
        let left = origin.0 + font.advance() * i as f64;
        for (col, row) in BuiltinFont::cells(c) {
            let x = left + f64::from(col) * scale;
            let y = top + f64::from(row) * scale;
            path.move_to((x, y));
            path.line_to((x + scale, y));
            path.line_to((x + scale, y + scale));
            path.line_to((x, y + scale));
            path.close_path();
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
