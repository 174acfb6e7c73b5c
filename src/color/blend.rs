use crate::foundation::core::Rgb8;

/// Linearly interpolate from `bg` toward `fg` by `opacity`.
///
/// Each channel is `bg * (1 - opacity) + fg * opacity`, truncated toward zero. `opacity` is not
/// clamped: values outside `[0, 1]` extrapolate past either color (the `u8` cast saturates).
#[inline]
pub fn blend(bg: Rgb8, fg: Rgb8, opacity: f64) -> Rgb8 {
    #[inline]
    fn channel(bg: u8, fg: u8, opacity: f64) -> u8 {
        (f64::from(bg) * (1.0 - opacity) + f64::from(fg) * opacity) as u8
    }

    Rgb8 {
        r: channel(bg.r, fg.r, opacity),
        g: channel(bg.g, fg.g, opacity),
        b: channel(bg.b, fg.b, opacity),
    }
}

/// Clamp a composed opacity into `[lo, hi]`.
#[inline]
pub fn clamp_opacity(opacity: f64, lo: f64, hi: f64) -> f64 {
    opacity.max(lo).min(hi)
}

#[cfg(test)]
#[path = "../../tests/unit/color/blend.rs"]
mod tests;
