use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use image::ImageEncoder as _;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::foundation::error::{GlyphfallError, GlyphfallResult};

/// Write `img` to `path` as an 8-bit RGB PNG with best compression and adaptive filtering.
///
/// The parent directory must already exist; a missing directory surfaces as an IO error.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn save_png(path: &Path, img: &image::RgbImage) -> GlyphfallResult<()> {
    if path.as_os_str().is_empty() {
        return Err(GlyphfallError::validation("output path must be non-empty"));
    }
    let file = File::create(path).with_context(|| format!("write png '{}'", path.display()))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
