use std::cell::Cell;
use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

#[test]
fn circle_boundary_is_excluded() {
    let r = 0.5;
    assert!(!inside_circle(Vec2::new(0.5, 0.0), r));
    assert!(!inside_circle(Vec2::new(0.0, -0.5), r));
    assert!(inside_circle(Vec2::new(0.5 - 1e-9, 0.0), r));
    assert!(inside_circle(Vec2::ZERO, r));
}

#[test]
fn ellipse_boundary_is_excluded_and_edge_distance_is_zero_there() {
    let on_edge = Vec2::new(2.0, 0.0);
    assert_eq!(ellipse_value(on_edge, 2.0, 1.0), 1.0);
    assert!(!inside_ellipse(on_edge, 2.0, 1.0));
    assert!(inside_ellipse(Vec2::new(1.999, 0.0), 2.0, 1.0));
    assert_eq!(ellipse_edge_distance(on_edge, 2.0, 1.0), 0.0);
    assert_eq!(ellipse_edge_distance(Vec2::ZERO, 2.0, 1.0), 1.0);
}

#[test]
fn ellipse_edge_distance_is_not_euclidean() {
    // Same Euclidean gap (0.5) to the outline on both axes, different approximate distance.
    let along_major = ellipse_edge_distance(Vec2::new(1.5, 0.0), 2.0, 1.0);
    let along_minor = ellipse_edge_distance(Vec2::new(0.0, 0.5), 2.0, 1.0);
    assert!((along_major - 0.4375).abs() < 1e-12);
    assert!((along_minor - 0.75).abs() < 1e-12);
}

#[test]
fn taper_band_width_follows_power_law() {
    let band = TaperBand::linear(0.0, 1.0, 0.0, 1.0);
    assert_eq!(band.half_width(0.5), 0.5);
    assert!(band.contains(Vec2::new(0.49, 0.5)));
    assert!(band.contains(Vec2::new(-0.49, 0.5)));
    assert!(!band.contains(Vec2::new(0.5, 0.5)));
    assert!(!band.contains(Vec2::new(0.0, 1.01)));
    assert!(!band.contains(Vec2::new(0.0, -0.01)));

    let curved = band.with_exponent(2.0);
    assert_eq!(curved.half_width(0.5), 0.25);
    assert_eq!(curved.half_width(2.0), 1.0);
}

#[test]
fn taper_band_edge_distance_is_horizontal_gap() {
    let band = TaperBand::straight(-1.0, 1.0, 0.5);
    assert!((band.edge_distance(Vec2::new(0.2, 0.0)) - 0.3).abs() < 1e-12);
    assert!((band.edge_distance(Vec2::new(-0.7, 0.0)) - 0.2).abs() < 1e-12);
    assert_eq!(band.edge_distance(Vec2::new(0.0, 3.0)), f64::INFINITY);
}

#[test]
fn angular_sector_matches_target_angles_within_radius() {
    let rays = AngularSector::evenly_spaced(4, 0.0, 0.1, 0.5, 2.0);
    assert_eq!(rays.hit(Vec2::new(1.0, 0.0)), Some(0));
    assert_eq!(rays.hit(Vec2::new(0.0, 1.0)), Some(1));
    assert_eq!(rays.hit(Vec2::new(-1.0, 0.0)), Some(2));
    assert_eq!(rays.hit(Vec2::new(0.0, -1.0)), Some(3));

    let along_second = Vec2::new(FRAC_PI_2.cos() * 0.7, FRAC_PI_2.sin() * 0.7);
    assert_eq!(rays.hit(along_second), Some(1));
    let along_third = Vec2::new(PI.cos(), PI.sin());
    assert_eq!(rays.hit(along_third), Some(2));

    assert_eq!(rays.hit(Vec2::new(1.0, 1.0)), None);
    assert_eq!(rays.hit(Vec2::new(0.3, 0.0)), None);
    assert_eq!(rays.hit(Vec2::new(2.0, 0.0)), None);
}

#[test]
fn angular_sector_wraps_across_negative_angles() {
    let rays = AngularSector::evenly_spaced(4, 0.0, 0.1, 0.5, 2.0);
    let just_below_axis = Vec2::new((-0.05f64).cos(), (-0.05f64).sin());
    assert_eq!(rays.hit(just_below_axis), Some(0));
    assert_eq!(rays.hit_with_tolerance(just_below_axis, 0.01), None);
}

#[test]
fn angular_sector_radial_t_spans_inner_to_outer() {
    let rays = AngularSector::evenly_spaced(1, 0.0, 0.1, 1.0, 3.0);
    assert_eq!(rays.radial_t(Vec2::new(1.0, 0.0)), 0.0);
    assert_eq!(rays.radial_t(Vec2::new(2.0, 0.0)), 0.5);
    assert_eq!(rays.radial_t(Vec2::new(5.0, 0.0)), 1.0);
}

#[test]
fn carve_out_excludes_points_inside_a_hole() {
    let outer = |p: Vec2| inside_circle(p, 1.0);
    let hole = |p: Vec2| inside_circle(p, 0.3);
    assert!(!carve_out(Vec2::ZERO, outer, &[&hole]));
    assert!(carve_out(Vec2::new(0.5, 0.0), outer, &[&hole]));
    assert!(!carve_out(Vec2::new(2.0, 0.0), outer, &[&hole]));
}

#[test]
fn carve_out_checks_holes_only_after_inclusion_and_stops_at_first_hit() {
    let first_calls = Cell::new(0);
    let second_calls = Cell::new(0);
    let first = |_: Vec2| {
        first_calls.set(first_calls.get() + 1);
        true
    };
    let second = |_: Vec2| {
        second_calls.set(second_calls.get() + 1);
        true
    };

    assert!(!carve_out(Vec2::ZERO, |_| false, &[&first, &second]));
    assert_eq!(first_calls.get(), 0);

    assert!(!carve_out(Vec2::ZERO, |_| true, &[&first, &second]));
    assert_eq!(first_calls.get(), 1);
    assert_eq!(second_calls.get(), 0);
}
