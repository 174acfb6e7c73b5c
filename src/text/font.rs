use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::text::builtin::BuiltinFont;

/// Monospace fonts probed in order before falling back to [`BuiltinFont`].
pub const DEFAULT_FONT_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/TTF/JetBrainsMonoNerdFont-Bold.ttf",
    "/usr/share/fonts/TTF/JetBrainsMonoNerdFont-Regular.ttf",
    "/usr/share/fonts/TTF/JetBrainsMono-Bold.ttf",
    "/usr/share/fonts/noto/NotoSansMono-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono-Bold.ttf",
];

/// An outline font file loaded at a specific pixel size.
#[derive(Clone)]
pub struct OutlineFont {
    path: Arc<Path>,
    family: Arc<str>,
    bytes: Arc<Vec<u8>>,
    data: vello_cpu::peniko::FontData,
    size_px: f32,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("path", &self.path)
            .field("family", &self.family)
            .field("bytes_len", &self.bytes.len())
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl OutlineFont {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Primary family name registered from the font file.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub(crate) fn family_arc(&self) -> &Arc<str> {
        &self.family
    }

    /// The file contents, shared with [`Self::data`] and with every shaper that registers them.
    pub(crate) fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    pub(crate) fn data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }
}

/// A font usable by the canvas: either a loaded outline font or the embedded raster default.
#[derive(Clone, Debug)]
pub enum Font {
    Outline(OutlineFont),
    Builtin(BuiltinFont),
}

impl Font {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Monospace advance of one character, used to lay out captions.
    pub fn approx_advance(&self) -> f64 {
        match self {
            Self::Outline(f) => f64::from(f.size_px()) * 0.6,
            Self::Builtin(b) => b.advance(),
        }
    }
}

#[derive(Clone)]
struct LoadedFace {
    family: Arc<str>,
    bytes: Arc<Vec<u8>>,
    data: vello_cpu::peniko::FontData,
}

/// Resolves a pixel size to a [`Font`], probing a fixed candidate list.
///
/// Resolution never fails: when no candidate loads, the built-in raster font is returned.
/// Per-path load outcomes and per-size results are cached, so each file is read at most once.
pub struct FontResolver {
    candidates: Vec<PathBuf>,
    font_ctx: parley::FontContext,
    faces: HashMap<PathBuf, Option<LoadedFace>>,
    by_size: HashMap<u32, Font>,
    warned_builtin: bool,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_CANDIDATES)
    }
}

impl FontResolver {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            font_ctx: parley::FontContext::default(),
            faces: HashMap::new(),
            by_size: HashMap::new(),
            warned_builtin: false,
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the first candidate that loads, sized to `size_px`, or the built-in font.
    pub fn resolve(&mut self, size_px: f32) -> Font {
        if let Some(font) = self.by_size.get(&size_px.to_bits()) {
            return font.clone();
        }

        let font = if size_px.is_finite() && size_px > 0.0 {
            self.first_loadable()
                .map(|(path, face)| {
                    Font::Outline(OutlineFont {
                        path: Arc::from(path.as_path()),
                        family: face.family,
                        bytes: face.bytes,
                        data: face.data,
                        size_px,
                    })
                })
                .unwrap_or_else(|| self.builtin(size_px))
        } else {
            self.builtin(size_px)
        };

        self.by_size.insert(size_px.to_bits(), font.clone());
        font
    }

    fn builtin(&mut self, size_px: f32) -> Font {
        if !self.warned_builtin {
            tracing::warn!(
                candidates = self.candidates.len(),
                "no outline font could be loaded; using built-in raster font"
            );
            self.warned_builtin = true;
        }
        Font::Builtin(BuiltinFont::for_size(size_px))
    }

    fn first_loadable(&mut self) -> Option<(PathBuf, LoadedFace)> {
        for i in 0..self.candidates.len() {
            let path = self.candidates[i].clone();
            if let Some(face) = self.load_face(&path) {
                return Some((path, face));
            }
        }
        None
    }

    fn load_face(&mut self, path: &Path) -> Option<LoadedFace> {
        if let Some(cached) = self.faces.get(path) {
            return cached.clone();
        }

        let loaded = self.probe(path);
        self.faces.insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    fn probe(&mut self, path: &Path) -> Option<LoadedFace> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "font candidate unreadable");
                return None;
            }
        };

        let bytes = Arc::new(bytes);
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(bytes.clone()), None);
        let Some(family_id) = families.first().map(|(id, _)| *id) else {
            tracing::debug!(path = %path.display(), "font candidate has no usable faces");
            return None;
        };
        let family = self.font_ctx.collection.family_name(family_id)?.to_string();

        tracing::debug!(path = %path.display(), family = %family, "loaded font candidate");
        let blob = vello_cpu::peniko::Blob::new(bytes.clone());
        let data = vello_cpu::peniko::FontData::new(blob, 0);
        Some(LoadedFace {
            family: Arc::from(family),
            bytes,
            data,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
