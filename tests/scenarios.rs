//! End-to-end scenarios over the public API

use kdtree_points::data::{DataError, KdTree, Point, PointIndex, PointSet, Rectangle, loader};
use std::collections::BTreeSet;
use std::io::Cursor;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_four_point_scenario() {
    let mut tree = KdTree::new();
    for point in [p(0.5, 0.5), p(0.25, 0.25), p(0.75, 0.75), p(0.1, 0.9)] {
        tree.insert(point);
    }

    assert_eq!(tree.len(), 4);
    assert!(tree.contains(&p(0.25, 0.25)));
    assert!(!tree.contains(&p(0.9, 0.1)));

    let inside: BTreeSet<Point> = tree
        .range(&Rectangle::new(0.0, 0.0, 0.6, 0.6).unwrap())
        .into_iter()
        .collect();
    assert_eq!(inside, BTreeSet::from([p(0.5, 0.5), p(0.25, 0.25)]));

    assert_eq!(tree.nearest(&p(0.26, 0.24)), Some(p(0.25, 0.25)));
}

#[test]
fn test_reinsert_keeps_size() {
    let mut tree = KdTree::new();
    tree.insert(p(0.5, 0.5));
    tree.insert(p(0.2, 0.7));
    assert_eq!(tree.len(), 2);
    tree.insert(p(0.5, 0.5));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_fresh_index_is_empty() {
    let tree = KdTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.nearest(&p(0.3, 0.3)), None);

    let set = PointSet::new();
    assert!(set.is_empty());
    assert_eq!(set.nearest(&p(0.3, 0.3)), None);
}

#[test]
fn test_rectangle_validation() {
    assert!(matches!(
        Rectangle::new(1.0, 0.0, 0.0, 1.0),
        Err(DataError::InvalidRectangle { .. })
    ));
    let unit = Rectangle::new(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(unit.contains(&p(0.5, 0.5)));
    assert!(!unit.contains(&p(1.5, 1.5)));
}

#[test]
fn test_loaded_file_through_both_backends() {
    // Circle of ten points, the usual small sample input
    let input = "\
        0.206107 0.095492\n\
        0.975528 0.654508\n\
        0.024472 0.345492\n\
        0.793893 0.095492\n\
        0.793893 0.904508\n\
        0.975528 0.345492\n\
        0.206107 0.904508\n\
        0.500000 0.000000\n\
        0.024472 0.654508\n\
        0.500000 1.000000\n";
    let points = loader::read_points(Cursor::new(input)).unwrap();
    assert_eq!(points.len(), 10);

    let backends: Vec<Box<dyn PointIndex>> = vec![
        Box::new(points.iter().copied().collect::<KdTree>()),
        Box::new(points.iter().copied().collect::<PointSet>()),
    ];

    for index in &backends {
        assert_eq!(index.len(), 10);
        assert_eq!(index.nearest(&p(0.81, 0.30)), Some(p(0.975528, 0.345492)));
        assert_eq!(index.nearest(&p(0.5, 0.9)), Some(p(0.5, 1.0)));

        let mut inside = index.range(&Rectangle::new(0.4, 0.0, 0.8, 0.2).unwrap());
        inside.sort();
        assert_eq!(inside, vec![p(0.5, 0.0), p(0.793893, 0.095492)]);
    }
}
