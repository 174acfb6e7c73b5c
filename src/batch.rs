use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::foundation::error::{GlyphfallError, GlyphfallResult};
use crate::foundation::math::Fnv1a64;
use crate::render::output::save_png;
use crate::wallpaper::{Wallpaper, registry, render_wallpaper};

/// Registry entries named by `only`, in batch order; all of them when `only` is empty.
pub fn select(only: &[String]) -> GlyphfallResult<Vec<Box<dyn Wallpaper>>> {
    let all = registry();
    if let Some(unknown) = only.iter().find(|s| !all.iter().any(|w| w.slug() == s.as_str())) {
        return Err(GlyphfallError::validation(format!(
            "unknown wallpaper '{unknown}'"
        )));
    }
    Ok(all
        .into_iter()
        .filter(|w| only.is_empty() || only.iter().any(|s| s == w.slug()))
        .collect())
}

/// Render and write `wallpapers` one after another into `cfg.out_dir`.
///
/// `on_saved` sees each path right after its file is written. The first failure aborts the
/// batch; files already written stay on disk.
pub fn run_batch(
    cfg: &RenderConfig,
    wallpapers: &[Box<dyn Wallpaper>],
    mut on_saved: impl FnMut(&Path),
) -> GlyphfallResult<Vec<PathBuf>> {
    cfg.validate()?;
    let size = cfg.size()?;
    let mut fonts = cfg.font_resolver();
    let mut written = Vec::with_capacity(wallpapers.len());

    for wallpaper in wallpapers {
        let img = render_wallpaper(wallpaper.as_ref(), size, cfg.background, &mut fonts)?;
        let path = cfg.out_dir.join(wallpaper.file_name());
        save_png(&path, &img)?;

        let mut h = Fnv1a64::new_default();
        h.write_bytes(img.as_raw());
        tracing::info!(
            path = %path.display(),
            fingerprint = format_args!("{:016x}", h.finish()),
            "wallpaper written"
        );
        on_saved(&path);
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
