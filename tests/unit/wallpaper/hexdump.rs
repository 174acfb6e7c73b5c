use super::*;

#[test]
fn intensity_floor_outside_hot_zones() {
    assert_eq!(intensity_at(0.0), 0.15);
    assert_eq!(intensity_at(0.25), 0.15);
    assert_eq!(intensity_at(0.99), 0.15);
}

#[test]
fn intensity_peaks_at_zone_midpoint() {
    assert!((intensity_at(0.39) - 1.0).abs() < 1e-9);
    assert!((intensity_at(0.15) - 0.85).abs() < 1e-9);
}

#[test]
fn intensity_never_drops_below_floor_at_zone_edges() {
    for z in HOT_ZONES {
        assert!((intensity_at(z.start) - 0.15).abs() < 1e-9);
        assert!((intensity_at(z.end) - 0.15).abs() < 1e-9);
    }
}

#[test]
fn intensity_falls_off_from_the_middle() {
    assert!(intensity_at(0.35) < intensity_at(0.37));
    assert!(intensity_at(0.37) < intensity_at(0.39));
}

#[test]
fn hexdump_uses_lighter_blur() {
    assert_eq!(Hexdump.blur_sigma(), 0.2);
    assert_eq!(Hexdump.file_name(), "3-hexdump.png");
}
