use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::foundation::error::{GlyphfallError, GlyphfallResult};
use crate::text::font::OutlineFont;

/// A glyph positioned relative to the top-left of its shaped text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ShapedGlyph {
    pub(crate) id: u32,
    pub(crate) x: f32,
    pub(crate) y: f32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RunKey {
    family: Arc<str>,
    size_bits: u32,
    text: Box<str>,
}

/// Stateful helper shaping short strings with Parley, caching the positioned glyphs.
///
/// Wallpapers stamp the same few hundred strings tens of thousands of times, so shaped runs are
/// memoized per (family, size, text).
pub(crate) struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    registered: HashSet<Arc<str>>,
    runs: HashMap<RunKey, Arc<[ShapedGlyph]>>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashSet::new(),
            runs: HashMap::new(),
        }
    }

    pub(crate) fn cached_runs(&self) -> usize {
        self.runs.len()
    }

    /// Shape `text` with `font`, returning glyphs positioned from the layout's top-left.
    pub(crate) fn shape(
        &mut self,
        font: &OutlineFont,
        text: &str,
    ) -> GlyphfallResult<Arc<[ShapedGlyph]>> {
        let key = RunKey {
            family: font.family_arc().clone(),
            size_bits: font.size_px().to_bits(),
            text: text.into(),
        };
        if let Some(run) = self.runs.get(&key) {
            return Ok(run.clone());
        }

        self.ensure_registered(font)?;
        let glyphs: Arc<[ShapedGlyph]> = self.layout(font, text).into();
        self.runs.insert(key, glyphs.clone());
        Ok(glyphs)
    }

    fn ensure_registered(&mut self, font: &OutlineFont) -> GlyphfallResult<()> {
        if self.registered.contains(font.family()) {
            return Ok(());
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(font.bytes().clone()), None);
        if families.is_empty() {
            return Err(GlyphfallError::render(format!(
                "font '{}' registered no families",
                font.path().display()
            )));
        }
        self.registered.insert(font.family_arc().clone());
        Ok(())
    }

    fn layout(&mut self, font: &OutlineFont, text: &str) -> Vec<ShapedGlyph> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family().to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px()));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut out = Vec::with_capacity(text.len());
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                out.extend(run.positioned_glyphs().map(|g| ShapedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaper.rs"]
mod tests;
