use super::*;
use crate::text::font::{DEFAULT_FONT_CANDIDATES, Font, FontResolver};

fn outline(size_px: f32) -> Option<OutlineFont> {
    let path = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    ]
    .into_iter()
    .chain(DEFAULT_FONT_CANDIDATES)
    .find(|p| std::fs::read(p).is_ok())?;
    match FontResolver::new([path]).resolve(size_px) {
        Font::Outline(o) => Some(o),
        Font::Builtin(_) => None,
    }
}

#[test]
fn repeated_text_hits_the_run_cache() {
    let Some(font) = outline(24.0) else {
        return;
    };
    let mut shaper = TextShaper::new();

    let first = shaper.shape(&font, "0123ABCD").unwrap();
    let second = shaper.shape(&font, "0123ABCD").unwrap();

    assert_eq!(first.len(), 8);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(shaper.cached_runs(), 1);
}

#[test]
fn glyphs_advance_left_to_right() {
    let Some(font) = outline(24.0) else {
        return;
    };
    let mut shaper = TextShaper::new();
    let glyphs = shaper.shape(&font, "ABC").unwrap();
    assert!(glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert!(glyphs.iter().all(|g| g.y > 0.0));
}

#[test]
fn size_and_text_are_part_of_the_run_key() {
    let Some(small) = outline(16.0) else {
        return;
    };
    let Some(large) = outline(32.0) else {
        return;
    };
    let mut shaper = TextShaper::new();
    shaper.shape(&small, "AB").unwrap();
    shaper.shape(&large, "AB").unwrap();
    shaper.shape(&small, "BA").unwrap();
    assert_eq!(shaper.cached_runs(), 3);
}
