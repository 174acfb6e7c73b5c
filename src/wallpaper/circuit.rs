use crate::color::palette::{INK_DARK, INK_MID};
use crate::foundation::core::Rgb8;
use crate::foundation::error::GlyphfallResult;
use crate::render::canvas::Canvas;
use crate::text::font::FontResolver;
use crate::wallpaper::rng::WallRng;
use crate::wallpaper::{Wallpaper, bounds, ink};

const TRACES_PER_AXIS: usize = 120;
const TRACE_WIDTHS: [f64; 4] = [1.0, 2.0, 2.0, 3.0];
const NODES: usize = 400;
const LINK_REACH: f64 = 350.0;
const CHIPS: usize = 70;
const TARGETS: usize = 20;

const NODE_CORE: Rgb8 = Rgb8::new(0, 60, 10);

/// Circuit board: long traces, nearest-neighbour wiring, pads, IC chips, and target rings.
pub struct Circuit;

impl Wallpaper for Circuit {
    fn index(&self) -> u32 {
        2
    }

    fn slug(&self) -> &'static str {
        "circuit"
    }

    fn seed(&self) -> u64 {
        77
    }

    fn paint(
        &self,
        canvas: &mut Canvas,
        _fonts: &mut FontResolver,
        rng: &mut WallRng,
    ) -> GlyphfallResult<()> {
        let (w, h) = bounds(canvas);

        for _ in 0..TRACES_PER_AXIS {
            let y = rng.randint(0, h) as f64;
            let x1 = rng.randint(0, w) as f64;
            let len = rng.randint(200, 1200) as f64;
            let width = rng.pick(&TRACE_WIDTHS);
            let color = ink(canvas, INK_DARK, rng.uniform(0.20, 0.50));
            canvas.line(&[(x1, y), (x1 + len, y)], color, width);
        }
        for _ in 0..TRACES_PER_AXIS {
            let x = rng.randint(0, w) as f64;
            let y1 = rng.randint(0, h) as f64;
            let len = rng.randint(200, 900) as f64;
            let width = rng.pick(&TRACE_WIDTHS);
            let color = ink(canvas, INK_DARK, rng.uniform(0.20, 0.50));
            canvas.line(&[(x, y1), (x, y1 + len)], color, width);
        }

        let nodes: Vec<(f64, f64)> = (0..NODES)
            .map(|_| (rng.randint(0, w) as f64, rng.randint(0, h) as f64))
            .collect();

        for (i, &(x1, y1)) in nodes.iter().enumerate() {
            let take = rng.randint(2, 5) as usize;
            for j in nearest(&nodes, i, take.saturating_sub(1)) {
                let (x2, y2) = nodes[j];
                let dist = (x2 - x1).hypot(y2 - y1);
                if dist > LINK_REACH {
                    continue;
                }
                let a = 0.25 + 0.25 * (1.0 - dist / LINK_REACH);
                let width = if a > 0.35 { 2.0 } else { 1.0 };
                let mid_x = if rng.chance(0.5) { x1 } else { x2 };
                let color = ink(canvas, INK_DARK, a);
                canvas.line(&[(x1, y1), (mid_x, y2), (x2, y2)], color, width);
            }
        }

        for &(x, y) in &nodes {
            let r = rng.randint(4, 10) as f64;
            let a = rng.uniform(0.45, 0.85);
            let pad = ink(canvas, INK_MID, a);
            canvas.fill_ellipse([x - r, y - r, x + r, y + r], pad);
            if r > 5.0 {
                let core = ink(canvas, NODE_CORE, a * 0.9);
                canvas.fill_ellipse([x - 2.0, y - 2.0, x + 2.0, y + 2.0], core);
            }
        }

        for _ in 0..CHIPS {
            let x = rng.randint(50, w - 100);
            let y = rng.randint(50, h - 60);
            let cw = rng.randint(25, 65);
            let ch = rng.randint(18, 40);
            let a = rng.uniform(0.25, 0.50);
            let (xf, yf, cwf, chf) = (x as f64, y as f64, cw as f64, ch as f64);

            let outline = ink(canvas, INK_DARK, a);
            canvas.stroke_rect([xf, yf, xf + cwf, yf + chf], outline, 2.0);
            let body = ink(canvas, INK_MID, a * 0.15);
            canvas.fill_rect([xf + 1.0, yf + 1.0, xf + cwf - 1.0, yf + chf - 1.0], body);

            let pin = ink(canvas, INK_DARK, a * 0.8);
            for px in (x + 5..x + cw - 3).step_by(8) {
                let px = px as f64;
                canvas.line(&[(px, yf - 6.0), (px, yf)], pin, 2.0);
                canvas.line(&[(px, yf + chf), (px, yf + chf + 6.0)], pin, 2.0);
            }
        }

        for _ in 0..TARGETS {
            let cx = rng.randint(100, w - 100) as f64;
            let cy = rng.randint(100, h - 100) as f64;
            let max_r = rng.randint(50, 140);
            for r in (12..max_r).step_by(18) {
                let a = 0.20 * (1.0 - r as f64 / max_r as f64);
                if a > 0.03 {
                    let r = r as f64;
                    let ring = ink(canvas, INK_MID, a);
                    canvas.stroke_ellipse([cx - r, cy - r, cx + r, cy + r], ring, 2.0);
                }
            }
            let bullseye = ink(canvas, INK_DARK, 0.5);
            canvas.fill_ellipse([cx - 4.0, cy - 4.0, cx + 4.0, cy + 4.0], bullseye);
        }
        Ok(())
    }
}

/// Indices of the `count` nodes closest to `nodes[of]`, excluding the closest entry itself.
///
/// Ties keep index order.
pub(crate) fn nearest(nodes: &[(f64, f64)], of: usize, count: usize) -> Vec<usize> {
    let Some(&(x, y)) = nodes.get(of) else {
        return Vec::new();
    };
    let mut order: Vec<(f64, usize)> = nodes
        .iter()
        .enumerate()
        .map(|(j, &(nx, ny))| ((nx - x).hypot(ny - y), j))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));
    order.into_iter().skip(1).take(count).map(|(_, j)| j).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/circuit.rs"]
mod tests;
