use std::fmt::Write as _;

use crate::color::palette::{GLOW, INK, INK_DEEP};
use crate::foundation::core::Rgb8;
use crate::foundation::error::GlyphfallResult;
use crate::render::canvas::Canvas;
use crate::text::font::FontResolver;
use crate::wallpaper::rng::WallRng;
use crate::wallpaper::{Wallpaper, bounds, ink};

const LINE_H: i64 = 32;
/// Advance of one character at the 26px dump font.
const CW: f64 = 15.0;
const MARGIN: f64 = 20.0;
const BYTES_PER_LINE: usize = 56;
const HEADER_BYTES: usize = 32;
const ASCII_FILLER: [char; 6] = ['.', '_', '-', ':', ';', '|'];

const HEADER: Rgb8 = Rgb8::new(0, 60, 10);
const SEPARATOR: Rgb8 = Rgb8::new(0, 80, 20);
const RULE: Rgb8 = Rgb8::new(0, 90, 20);
const ADDRESS: Rgb8 = Rgb8::new(0, 65, 12);
const HOT_BYTE: Rgb8 = Rgb8::new(0, 110, 20);

/// A band of rows where the dump runs hot: `(start, end, peak)` in fractions of the height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HotZone {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) peak: f64,
}

pub(crate) const HOT_ZONES: [HotZone; 4] = [
    HotZone {
        start: 0.08,
        end: 0.22,
        peak: 0.85,
    },
    HotZone {
        start: 0.30,
        end: 0.48,
        peak: 1.0,
    },
    HotZone {
        start: 0.55,
        end: 0.68,
        peak: 0.75,
    },
    HotZone {
        start: 0.75,
        end: 0.93,
        peak: 0.90,
    },
];

/// Row intensity at vertical position `row_pos` in `0..1`: a floor of 0.15 raised by a
/// parabolic bump inside each hot zone.
pub(crate) fn intensity_at(row_pos: f64) -> f64 {
    HOT_ZONES
        .iter()
        .filter(|z| (z.start..=z.end).contains(&row_pos))
        .fold(0.15, |acc, z| {
            let mid = (z.start + z.end) / 2.0;
            let dist = (row_pos - mid).abs() / ((z.end - z.start) / 2.0);
            acc.max(z.peak * (1.0 - dist * dist))
        })
}

/// Full-screen forensic hex dump with hot zones and glow bars.
pub struct Hexdump;

impl Wallpaper for Hexdump {
    fn index(&self) -> u32 {
        3
    }

    fn slug(&self) -> &'static str {
        "hexdump"
    }

    fn seed(&self) -> u64 {
        55
    }

    fn blur_sigma(&self) -> f32 {
        0.2
    }

    fn paint(
        &self,
        canvas: &mut Canvas,
        fonts: &mut FontResolver,
        rng: &mut WallRng,
    ) -> GlyphfallResult<()> {
        let font = fonts.resolve(26.0);
        let font_sm = fonts.resolve(22.0);
        let (w, h) = bounds(canvas);
        let (wf, hf) = (w as f64, h as f64);
        let rows = h / LINE_H + 1;

        let addr_end = MARGIN + 10.0 * CW;
        let hex_start = addr_end + CW;
        let hex_end = hex_start + (BYTES_PER_LINE * 3) as f64 * CW;
        let ascii_start = hex_end + 2.0 * CW;

        let sep = ink(canvas, SEPARATOR, 0.18);
        canvas.line(&[(addr_end, 0.0), (addr_end, hf)], sep, 1.0);
        canvas.line(&[(ascii_start - CW, 0.0), (ascii_start - CW, hf)], sep, 1.0);

        let hdr = ink(canvas, HEADER, 0.55);
        canvas.text((MARGIN, 4.0), "OFFSET", hdr, &font_sm)?;
        let mut hdr_bytes = (0..BYTES_PER_LINE.min(HEADER_BYTES))
            .map(|i| format!("{i:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        hdr_bytes.push_str(" ...");
        let hdr_faint = ink(canvas, HEADER, 0.35);
        canvas.text((hex_start, 4.0), &hdr_bytes, hdr_faint, &font_sm)?;
        canvas.text((ascii_start, 4.0), "DECODED ASCII", hdr, &font_sm)?;
        let rule = ink(canvas, RULE, 0.30);
        canvas.line(&[(MARGIN, 32.0), (wf - MARGIN, 32.0)], rule, 2.0);

        let mut cell = String::with_capacity(8);
        for row in 1..rows {
            let y = (row * LINE_H + 8) as f64;
            let intensity = intensity_at(row as f64 / rows as f64);
            let base_alpha = 0.08 + 0.58 * intensity;

            cell.clear();
            let _ = write!(cell, "{:08X}", row * BYTES_PER_LINE as i64);
            let addr = ink(canvas, ADDRESS, base_alpha * 0.75);
            canvas.text((MARGIN, y), &cell, addr, &font)?;

            for col in 0..BYTES_PER_LINE {
                let mut bx = hex_start + (col * 3) as f64 * CW;
                if col % 8 == 0 && col > 0 {
                    bx += CW;
                }

                cell.clear();
                let _ = write!(cell, "{:02X}", rng.randint(0, 255));
                let v = rng.uniform(0.5, 1.5);
                let mut a = (base_alpha * v).clamp(0.05, 0.85);
                let fg = if rng.chance(0.05) && intensity > 0.4 {
                    a = (a * 2.2).min(0.90);
                    INK_DEEP
                } else if rng.chance(0.03) {
                    a = (a * 1.8).min(0.80);
                    HOT_BYTE
                } else {
                    INK
                };
                let color = ink(canvas, fg, a);
                canvas.text((bx, y), &cell, color, &font)?;
            }

            for col in 0..BYTES_PER_LINE {
                let ax = ascii_start + col as f64 * CW;
                if ax > wf - MARGIN {
                    break;
                }
                let c = if rng.random() > 0.3 {
                    char::from(rng.randint(33, 126) as u8)
                } else {
                    rng.pick(&ASCII_FILLER)
                };
                let color = ink(canvas, INK, base_alpha * 0.55);
                canvas.text((ax, y), c.encode_utf8(&mut [0; 4]), color, &font_sm)?;
            }
        }

        for zone in HOT_ZONES {
            let mid_y = ((zone.start + zone.end) / 2.0 * hf).trunc();
            for dy in -6i32..=6 {
                let la = 0.08 * (1.0 - f64::from(dy.abs()) / 7.0);
                let y = mid_y + f64::from(dy);
                let color = ink(canvas, GLOW, la);
                canvas.line(&[(0.0, y), (wf, y)], color, 1.0);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/hexdump.rs"]
mod tests;
