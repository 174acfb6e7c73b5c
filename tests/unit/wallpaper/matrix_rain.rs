use super::*;

#[test]
fn first_two_glyphs_are_head_and_near() {
    assert_eq!(trail_step(0, 20), TrailStep::Head);
    assert_eq!(trail_step(1, 20), TrailStep::Near);
    assert_eq!(trail_step(2, 20), TrailStep::Bright);
}

#[test]
fn trail_fades_through_every_segment() {
    let steps: Vec<TrailStep> = (0..40).map(|i| trail_step(i, 40)).collect();
    assert!(steps.iter().any(|s| matches!(s, TrailStep::Body(_))));
    assert!(steps.iter().any(|s| matches!(s, TrailStep::Mid(_))));
    assert!(steps.iter().any(|s| matches!(s, TrailStep::Tail(_))));
    assert!(matches!(steps[39], TrailStep::Fading(_)));
}

#[test]
fn segment_progress_stays_in_unit_range() {
    for len in 15..=50 {
        for i in 0..len {
            let fade = match trail_step(i, len) {
                TrailStep::Body(f)
                | TrailStep::Mid(f)
                | TrailStep::Tail(f)
                | TrailStep::Fading(f) => f,
                _ => continue,
            };
            assert!((0.0..1.0).contains(&fade), "len={len} i={i} fade={fade}");
        }
    }
}

#[test]
fn metadata_matches_batch_position() {
    assert_eq!(MatrixRain.index(), 1);
    assert_eq!(MatrixRain.file_name(), "1-matrix-rain.png");
    assert_eq!(MatrixRain.seed(), 42);
}
