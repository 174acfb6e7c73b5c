use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::color::palette::BACKGROUND;
use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::{GlyphfallError, GlyphfallResult};
use crate::text::font::{DEFAULT_FONT_CANDIDATES, FontResolver};

/// Batch settings, loadable from JSON; every field is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb8,
    /// Existing directory the PNGs are written into.
    pub out_dir: PathBuf,
    /// Font files probed in order; empty means the built-in raster font only.
    pub font_candidates: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: CanvasSize::UHD.width,
            height: CanvasSize::UHD.height,
            background: BACKGROUND,
            out_dir: PathBuf::from("backgrounds"),
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl RenderConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> GlyphfallResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> GlyphfallResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| GlyphfallError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> GlyphfallResult<()> {
        self.size()?;
        if self.out_dir.as_os_str().is_empty() {
            return Err(GlyphfallError::validation("out_dir must be non-empty"));
        }
        Ok(())
    }

    pub fn size(&self) -> GlyphfallResult<CanvasSize> {
        CanvasSize::new(self.width, self.height)
    }

    /// A resolver over this config's font candidates.
    pub fn font_resolver(&self) -> FontResolver {
        FontResolver::new(self.font_candidates.iter().cloned())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
