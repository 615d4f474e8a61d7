//! End-to-end loader integration tests
//!
//! Fixture loading → counting → enumeration

use concyclic_core::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/point_sets")
}

/// Helper to load a point set from fixtures
fn load(name: &str) -> PointSet {
    load_point_set(fixtures_dir().join(format!("{}.json", name))).expect("Failed to load point set")
}

fn check_fixture(name: &str) -> PointSet {
    let set = load(name);
    let expected = set.expected_circles.expect("fixture carries an expectation");

    assert_eq!(count_circles(&set.points), expected, "{}: count", set.id);
    assert_eq!(
        enumerate_circles(&set.points).count() as i64,
        expected,
        "{}: enumeration length",
        set.id
    );
    set
}

#[test]
fn test_p01_unit_square() {
    let set = check_fixture("p01_unit_square");

    let circles: Vec<_> = enumerate_circles(&set.points).collect();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].members(&set.points), set.points);
}

#[test]
fn test_p02_triangle() {
    let set = check_fixture("p02_triangle");
    assert_eq!(enumerate_circles(&set.points).next(), None);
}

#[test]
fn test_p03_radius5_five() {
    let set = check_fixture("p03_radius5_five");

    let circle = enumerate_circles(&set.points).next().unwrap();
    match circle.locus() {
        Locus::Circle { center, radius } => {
            assert!(center.0.abs() < 1e-9 && center.1.abs() < 1e-9);
            assert!((radius - 5.0).abs() < 1e-9);
        }
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn test_p04_radius5_six() {
    let set = check_fixture("p04_radius5_six");

    let circle = enumerate_circles(&set.points).next().unwrap();
    assert_eq!(circle.members(&set.points).len(), 6);
}

#[test]
fn test_p05_collinear_row() {
    let set = check_fixture("p05_collinear_row");

    let circle = enumerate_circles(&set.points).next().unwrap();
    assert!(circle.tangent.is_zero());
    assert!(matches!(circle.locus(), Locus::Line { .. }));
}

#[test]
fn test_p06_grid_3x3() {
    check_fixture("p06_grid_3x3");
}

#[test]
fn test_p07_square_and_row() {
    let set = check_fixture("p07_square_and_row");

    let circles: Vec<_> = enumerate_circles(&set.points).collect();
    assert_eq!(circles[0].p1, Point::new(1, 1));
    assert_eq!(circles[1].tangent, InscribedTangent::ZERO);
}

#[test]
fn test_p08_scattered_6x6() {
    check_fixture("p08_scattered_6x6");
}

#[test]
fn test_p09_grid_4x4() {
    let set = check_fixture("p09_grid_4x4");

    // Every descriptor certifies at least four points, and no set twice
    let mut seen = std::collections::HashSet::new();
    for circle in enumerate_circles(&set.points) {
        let members = circle.members(&set.points);
        assert!(members.len() >= 4, "{} certifies {:?}", circle, members);
        assert!(seen.insert(members), "{} emitted twice", circle);
    }
}

#[test]
fn test_p10_diameter_chord() {
    let set = check_fixture("p10_diameter_chord");

    let circle = enumerate_circles(&set.points).next().unwrap();
    assert_eq!((circle.p1, circle.p2), (Point::new(5, 0), Point::new(-5, 0)));
    assert!(circle.tangent.is_infinite());
    assert_eq!(circle.members(&set.points).len(), 4);
    match circle.locus() {
        Locus::Circle { center, radius } => {
            assert!(center.0.abs() < 1e-9 && center.1.abs() < 1e-9);
            assert!((radius - 5.0).abs() < 1e-9);
        }
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn test_load_directory() {
    let sets = load_point_sets(fixtures_dir()).expect("Failed to load fixtures");

    assert_eq!(sets.len(), 10);
    assert_eq!(sets[0].id, "p01_unit_square");
    assert_eq!(sets[8].id, "p09_grid_4x4");
    assert_eq!(sets[9].id, "p10_diameter_chord");
}

#[test]
fn test_session_over_fixture() {
    let set = load("p06_grid_3x3");

    let mut session = Session::new(SessionConfig::default()).unwrap();
    session.set_points(set.points.clone());

    let mut shown = vec![session.current_circle().unwrap()];
    for _ in 1..14 {
        shown.push(session.show_next().unwrap());
    }
    let direct: Vec<_> = enumerate_circles(&set.points).collect();
    assert_eq!(shown, direct);

    assert_eq!(session.wait_count().unwrap(), 14);
}
