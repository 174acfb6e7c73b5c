use super::*;

#[test]
fn printable_ascii_is_covered() {
    for c in ' '..='~' {
        assert!(BuiltinFont::glyph(c).is_some(), "missing glyph for {c:?}");
    }
    assert!(BuiltinFont::glyph('ア').is_none());
    assert!(BuiltinFont::glyph('\n').is_none());
}

#[test]
fn space_has_no_cells_and_missing_glyph_is_a_box() {
    assert_eq!(BuiltinFont::cells(' ').count(), 0);

    let boxed: Vec<_> = BuiltinFont::cells('ア').collect();
    // 5x7 outline: two full columns plus top/bottom rows of the three inner columns.
    assert_eq!(boxed.len(), 7 * 2 + 3 * 2);
    assert!(boxed.contains(&(0, 0)));
    assert!(boxed.contains(&(4, 6)));
    assert!(!boxed.contains(&(2, 3)));
}

#[test]
fn scale_tracks_requested_size() {
    assert_eq!(BuiltinFont::for_size(1.0).scale(), 1);
    assert_eq!(BuiltinFont::for_size(16.0).scale(), 2);
    assert_eq!(BuiltinFont::for_size(24.0).scale(), 3);
    assert_eq!(BuiltinFont::for_size(f32::INFINITY).scale(), 1);
    assert_eq!(BuiltinFont::for_size(24.0).advance(), 18.0);
}
