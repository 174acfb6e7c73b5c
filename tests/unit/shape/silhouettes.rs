use crate::foundation::core::Point;

use super::*;

fn unit_frame() -> ShapeFrame {
    ShapeFrame::new(Point::ZERO, 1.0)
}

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn skull_sockets_and_nose_are_carved_from_cranium() {
    let skull = Skull::new(unit_frame());
    assert_eq!(skull.classify_normalized(v(0.0, -0.6)), SkullRegion::Cranium);
    assert_eq!(skull.classify_normalized(v(0.36, 0.02)), SkullRegion::Outside);
    assert_eq!(skull.classify_normalized(v(-0.36, 0.02)), SkullRegion::Outside);
    assert_eq!(skull.classify_normalized(v(0.0, 0.4)), SkullRegion::Outside);
}

#[test]
fn skull_jaw_has_teeth_gaps() {
    let skull = Skull::new(unit_frame());
    assert_eq!(skull.classify_normalized(v(0.3, 0.85)), SkullRegion::Jaw);
    assert_eq!(skull.classify_normalized(v(0.06, 0.6)), SkullRegion::Jaw);
    assert_eq!(skull.classify_normalized(v(0.01, 0.6)), SkullRegion::Outside);
    assert_eq!(skull.classify_normalized(v(0.7, 0.85)), SkullRegion::Outside);
}

#[test]
fn skull_classify_uses_frame_normalization() {
    let skull = Skull::new(ShapeFrame::new(Point::new(1920.0, 1000.0), 400.0));
    assert_eq!(skull.classify(Point::new(1920.0, 760.0)), SkullRegion::Cranium);
    assert_eq!(skull.classify(Point::new(1920.0 + 144.0, 1008.0)), SkullRegion::Outside);
    assert_eq!(skull.classify(Point::new(10.0, 10.0)), SkullRegion::Outside);
}

#[test]
fn crown_separates_braid_ring_and_thorns() {
    let crown = CrownOfThorns::new(unit_frame());
    assert_eq!(crown.classify_normalized(v(0.89, 0.0)), CrownRegion::Braid);

    let crest = std::f64::consts::PI / 18.0;
    let ring = v(0.89 * crest.cos(), 0.35 * crest.sin());
    assert_eq!(crown.classify_normalized(ring), CrownRegion::Ring);

    assert_eq!(crown.classify_normalized(Vec2::ZERO), CrownRegion::Outside);

    let thorn = v(1.1 * 0.11f64.cos(), 0.42 * 1.1 * 0.11f64.sin());
    assert_eq!(crown.classify_normalized(thorn), CrownRegion::Thorn);

    let between = 0.11 + std::f64::consts::PI / 14.0;
    let gap = v(1.1 * between.cos(), 0.42 * 1.1 * between.sin());
    assert_eq!(crown.classify_normalized(gap), CrownRegion::Outside);

    let past_tip = v(1.5 * 0.11f64.cos(), 0.42 * 1.5 * 0.11f64.sin());
    assert_eq!(crown.classify_normalized(past_tip), CrownRegion::Outside);
}

#[test]
fn crown_edge_distance_vanishes_on_outline() {
    let crown = CrownOfThorns::new(unit_frame());
    assert_eq!(crown.edge_distance_normalized(v(1.0, 0.0)), 0.0);
    assert!(crown.edge_distance_normalized(v(0.89, 0.0)) > 0.0);
}

#[test]
fn sword_parts_are_distinct() {
    let sword = Sword::new(unit_frame());
    assert_eq!(sword.classify_normalized(v(0.0, 1.09)), SwordRegion::Pommel);
    assert_eq!(sword.classify_normalized(v(0.0, 0.8)), SwordRegion::Grip);
    assert_eq!(sword.classify_normalized(v(0.4, 0.515)), SwordRegion::Guard);
    assert_eq!(sword.classify_normalized(v(0.65, 0.515)), SwordRegion::Guard);
    assert_eq!(sword.classify_normalized(v(0.05, -0.2)), SwordRegion::Blade);
    assert_eq!(sword.classify_normalized(v(0.0, -0.2)), SwordRegion::Fuller);
    assert_eq!(sword.classify_normalized(v(0.05, -1.45)), SwordRegion::Outside);
    assert_eq!(sword.classify_normalized(v(0.3, -0.5)), SwordRegion::Outside);
}

#[test]
fn cross_rays_only_outside_the_beams() {
    let cross = RadiantCross::new(unit_frame());
    assert_eq!(cross.classify_normalized(v(0.0, 1.0)), CrossRegion::Upright);
    assert_eq!(cross.classify_normalized(v(0.0, -0.55)), CrossRegion::Upright);
    assert_eq!(cross.classify_normalized(v(0.5, -0.55)), CrossRegion::Crossbar);
    assert_eq!(cross.classify_normalized(v(1.0, -0.55)), CrossRegion::Ray);

    let half_step = std::f64::consts::PI / 16.0;
    let between = v(half_step.cos(), -0.55 + half_step.sin());
    assert_eq!(cross.classify_normalized(between), CrossRegion::Outside);
}

#[test]
fn providence_eye_nests_pupil_iris_sclera_inside_hollow_frame() {
    let eye = ProvidenceEye::new(unit_frame());
    assert_eq!(eye.classify_normalized(v(0.0, 0.2)), EyeRegion::Pupil);
    assert_eq!(eye.classify_normalized(v(0.1, 0.2)), EyeRegion::Iris);
    assert_eq!(eye.classify_normalized(v(0.3, 0.2)), EyeRegion::Sclera);
    assert_eq!(eye.classify_normalized(v(0.0, 0.72)), EyeRegion::Frame);
    assert_eq!(eye.classify_normalized(v(0.0, -0.8)), EyeRegion::Frame);
    // Inside the outer triangle but within the carved hollow.
    assert_eq!(eye.classify_normalized(v(0.5, 0.4)), EyeRegion::Outside);
}

#[test]
fn ichthys_eye_is_carved_and_tail_crosses_behind_body() {
    let fish = Ichthys::new(unit_frame());
    assert_eq!(fish.classify_normalized(Vec2::ZERO), FishRegion::Body);
    assert_eq!(fish.classify_normalized(v(-0.45, -0.08)), FishRegion::Outside);
    assert_eq!(fish.classify_normalized(v(1.0, 0.1)), FishRegion::Tail);
    assert_eq!(fish.classify_normalized(v(1.0, 0.5)), FishRegion::Outside);
    assert_eq!(fish.classify_normalized(v(0.0, 0.5)), FishRegion::Outside);
}

#[test]
fn every_silhouette_is_outside_far_from_center() {
    let far = v(50.0, -50.0);
    let frame = unit_frame();
    assert!(!Skull::new(frame).classify_normalized(far).is_inside());
    assert!(!CrownOfThorns::new(frame).classify_normalized(far).is_inside());
    assert!(!Sword::new(frame).classify_normalized(far).is_inside());
    assert!(!RadiantCross::new(frame).classify_normalized(far).is_inside());
    assert!(!ProvidenceEye::new(frame).classify_normalized(far).is_inside());
    assert!(!Ichthys::new(frame).classify_normalized(far).is_inside());
    assert!(SkullRegion::Jaw.is_inside());
}

#[test]
fn non_finite_points_classify_without_panicking() {
    let nan = v(f64::NAN, f64::NAN);
    let frame = unit_frame();
    assert_eq!(Skull::new(frame).classify_normalized(nan), SkullRegion::Outside);
    assert_eq!(CrownOfThorns::new(frame).classify_normalized(nan), CrownRegion::Outside);
    assert_eq!(Sword::new(frame).classify_normalized(nan), SwordRegion::Outside);
    assert_eq!(RadiantCross::new(frame).classify_normalized(nan), CrossRegion::Outside);
    assert_eq!(ProvidenceEye::new(frame).classify_normalized(nan), EyeRegion::Outside);
    assert_eq!(Ichthys::new(frame).classify_normalized(nan), FishRegion::Outside);
}
