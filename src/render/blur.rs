use crate::foundation::error::{GlyphfallError, GlyphfallResult};

const CHANNELS: usize = 3;

/// Kernel radius used for a given standard deviation (three sigmas, at least one tap).
pub fn kernel_radius(sigma: f32) -> u32 {
    (sigma * 3.0).ceil().max(1.0) as u32
}

/// Separable Gaussian blur over tightly packed RGB8 pixels.
///
/// `sigma <= 0` returns the input unchanged. Taps that fall outside the image read the nearest
/// edge pixel (clamp-to-edge, as PIL's `GaussianBlur` does), so a uniform image comes back
/// unchanged and borders do not darken.
pub fn gaussian_blur_rgb8(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> GlyphfallResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| GlyphfallError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(GlyphfallError::render(
            "gaussian_blur_rgb8 expects src matching width*height*3",
        ));
    }
    if !sigma.is_finite() {
        return Err(GlyphfallError::validation("blur sigma must be finite"));
    }
    if sigma <= 0.0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(kernel_radius(sigma), sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

/// Blur an `image::RgbImage`, returning a new image.
pub fn blur_image(img: &image::RgbImage, sigma: f32) -> GlyphfallResult<image::RgbImage> {
    let (w, h) = img.dimensions();
    let out = gaussian_blur_rgb8(img.as_raw(), w, h, sigma)?;
    image::RgbImage::from_raw(w, h, out)
        .ok_or_else(|| GlyphfallError::render("blurred buffer does not match image dimensions"))
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> GlyphfallResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(GlyphfallError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(GlyphfallError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; CHANNELS];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * CHANNELS;
            for c in 0..CHANNELS {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; CHANNELS];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * CHANNELS;
            for c in 0..CHANNELS {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
