use super::*;

#[test]
fn nearest_skips_the_node_itself() {
    let nodes = [(0.0, 0.0), (10.0, 0.0), (3.0, 0.0), (100.0, 0.0)];
    assert_eq!(nearest(&nodes, 0, 2), vec![2, 1]);
}

#[test]
fn nearest_ties_keep_index_order() {
    let nodes = [(0.0, 0.0), (5.0, 0.0), (-5.0, 0.0), (0.0, 5.0)];
    assert_eq!(nearest(&nodes, 0, 3), vec![1, 2, 3]);
}

#[test]
fn nearest_is_bounded_by_node_count() {
    let nodes = [(0.0, 0.0), (1.0, 1.0)];
    assert_eq!(nearest(&nodes, 1, 4), vec![0]);
    assert!(nearest(&nodes, 7, 4).is_empty());
}

#[test]
fn metadata_matches_batch_position() {
    assert_eq!(Circuit.file_name(), "2-circuit.png");
    assert_eq!(Circuit.seed(), 77);
}
