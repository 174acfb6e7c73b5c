use crate::color::palette::{INK_HEAD, INK_LIGHT, INK_PALE, MATRIX_CHARS, SCATTER};
use crate::foundation::core::Rgb8;
use crate::foundation::error::GlyphfallResult;
use crate::render::canvas::Canvas;
use crate::text::font::FontResolver;
use crate::wallpaper::rng::WallRng;
use crate::wallpaper::{Wallpaper, bounds, ink};

const COL_WIDTH: i64 = 34;
const CHAR_HEIGHT: i64 = 36;
const SCATTER_GLYPHS: usize = 5000;
const MID_LAYER_SEED: u64 = 88;

const TRAIL_NEAR: Rgb8 = Rgb8::new(0, 70, 10);
const TRAIL_BRIGHT: Rgb8 = Rgb8::new(0, 80, 10);
const TRAIL_BODY: Rgb8 = Rgb8::new(0, 90, 15);
const TRAIL_MID: Rgb8 = Rgb8::new(10, 105, 25);

/// Dense katakana rain: faint scatter, fading streams, and an offset mid-ground layer.
pub struct MatrixRain;

impl Wallpaper for MatrixRain {
    fn index(&self) -> u32 {
        1
    }

    fn slug(&self) -> &'static str {
        "matrix-rain"
    }

    fn seed(&self) -> u64 {
        42
    }

    fn paint(
        &self,
        canvas: &mut Canvas,
        fonts: &mut FontResolver,
        rng: &mut WallRng,
    ) -> GlyphfallResult<()> {
        let font_lg = fonts.resolve(30.0);
        let font_md = fonts.resolve(24.0);
        let font_sm = fonts.resolve(18.0);
        let (w, h) = bounds(canvas);
        let cols = w / COL_WIDTH + 1;

        for _ in 0..SCATTER_GLYPHS {
            let x = rng.randint(0, w);
            let y = rng.randint(0, h);
            let c = rng.pick(MATRIX_CHARS);
            let a = rng.uniform(0.06, 0.14);
            let color = ink(canvas, SCATTER, a);
            canvas.text(
                (x as f64, y as f64),
                c.encode_utf8(&mut [0; 4]),
                color,
                &font_sm,
            )?;
        }

        for col in 0..cols {
            let x = col * COL_WIDTH;
            for _ in 0..rng.randint(1, 2) {
                let stream_len = rng.randint(15, 50);
                let start_y = rng.randint(-800, h);

                for i in 0..stream_len {
                    let y = start_y + i * CHAR_HEIGHT;
                    if y < -40 || y > h + 40 {
                        continue;
                    }
                    let c = rng.pick(MATRIX_CHARS);
                    let (fg, a, font) = match trail_step(i, stream_len) {
                        TrailStep::Head => (INK_HEAD, 0.92, &font_lg),
                        TrailStep::Near => (TRAIL_NEAR, 0.82, &font_lg),
                        TrailStep::Bright => (TRAIL_BRIGHT, 0.72, &font_lg),
                        TrailStep::Body(fade) => (TRAIL_BODY, 0.65 - 0.15 * fade, &font_md),
                        TrailStep::Mid(fade) => (TRAIL_MID, 0.45 - 0.15 * fade, &font_md),
                        TrailStep::Tail(fade) => (INK_LIGHT, 0.28 - 0.10 * fade, &font_sm),
                        TrailStep::Fading(fade) => (INK_PALE, 0.15 - 0.06 * fade, &font_sm),
                    };
                    let color = ink(canvas, fg, a);
                    canvas.text(
                        (x as f64, y as f64),
                        c.encode_utf8(&mut [0; 4]),
                        color,
                        font,
                    )?;
                }
            }
        }

        rng.reseed(MID_LAYER_SEED);
        for col in (0..cols).step_by(2) {
            let x = col * COL_WIDTH + COL_WIDTH / 2;
            let stream_len = rng.randint(10, 30);
            let start_y = rng.randint(-200, h);

            for i in 0..stream_len {
                let y = start_y + i * 30;
                if y < -30 || y > h + 30 {
                    continue;
                }
                let c = rng.pick(MATRIX_CHARS);
                let t = i as f64 / stream_len as f64;
                let color = ink(canvas, TRAIL_BODY, 0.50 * (1.0 - t * 0.8));
                canvas.text(
                    (x as f64, y as f64),
                    c.encode_utf8(&mut [0; 4]),
                    color,
                    &font_md,
                )?;
            }
        }
        Ok(())
    }
}

/// Where a glyph sits along its stream; fading segments carry their local `0..1` progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TrailStep {
    Head,
    Near,
    Bright,
    Body(f64),
    Mid(f64),
    Tail(f64),
    Fading(f64),
}

pub(crate) fn trail_step(i: i64, stream_len: i64) -> TrailStep {
    let t = i as f64 / stream_len as f64;
    match i {
        0 => TrailStep::Head,
        1 => TrailStep::Near,
        _ if t < 0.15 => TrailStep::Bright,
        _ if t < 0.35 => TrailStep::Body((t - 0.15) / 0.2),
        _ if t < 0.6 => TrailStep::Mid((t - 0.35) / 0.25),
        _ if t < 0.85 => TrailStep::Tail((t - 0.6) / 0.25),
        _ => TrailStep::Fading((t - 0.85) / 0.15),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/matrix_rain.rs"]
mod tests;
