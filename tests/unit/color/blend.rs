use super::*;

const SAMPLES: [Rgb8; 5] = [
    Rgb8::new(0, 0, 0),
    Rgb8::new(255, 255, 255),
    Rgb8::new(10, 10, 10),
    Rgb8::new(0, 255, 65),
    Rgb8::new(224, 240, 224),
];

#[test]
fn opacity_0_returns_background() {
    for bg in SAMPLES {
        for fg in SAMPLES {
            assert_eq!(blend(bg, fg, 0.0), bg);
        }
    }
}

#[test]
fn opacity_1_returns_foreground() {
    for bg in SAMPLES {
        for fg in SAMPLES {
            assert_eq!(blend(bg, fg, 1.0), fg);
        }
    }
    assert_eq!(
        blend(Rgb8::new(10, 10, 10), Rgb8::new(0, 255, 65), 1.0),
        Rgb8::new(0, 255, 65)
    );
}

#[test]
fn half_opacity_truncates_instead_of_rounding() {
    assert_eq!(
        blend(Rgb8::new(10, 10, 10), Rgb8::new(0, 255, 65), 0.5),
        Rgb8::new(5, 132, 37)
    );
}

#[test]
fn rising_opacity_is_monotonic_toward_brighter_foreground() {
    let bg = Rgb8::new(10, 10, 10);
    let fg = Rgb8::new(0, 255, 65);
    let mut prev = blend(bg, fg, 0.0);
    for step in 1..=100 {
        let c = blend(bg, fg, f64::from(step) / 100.0);
        assert!(c.g >= prev.g);
        assert!(c.b >= prev.b);
        assert!(c.r <= prev.r);
        prev = c;
    }
}

#[test]
fn out_of_range_opacity_extrapolates_without_error() {
    let bg = Rgb8::new(100, 100, 100);
    let fg = Rgb8::new(200, 50, 100);
    assert_eq!(blend(bg, fg, 1.5), Rgb8::new(250, 25, 100));
    assert_eq!(blend(bg, fg, 4.0).r, 255);
    assert_eq!(blend(bg, fg, -0.5), Rgb8::new(50, 125, 100));
}

#[test]
fn clamp_opacity_caps_both_ends() {
    assert_eq!(clamp_opacity(1.3, 0.05, 0.95), 0.95);
    assert_eq!(clamp_opacity(-0.1, 0.05, 0.95), 0.05);
    assert_eq!(clamp_opacity(0.4, 0.05, 0.95), 0.4);
}
