//! End-to-end properties of the boolean clipper.

use approx::assert_relative_eq;
use ringclip::polygon::{
    clip, polygon_difference, polygon_intersection, polygon_union, polygon_xor, BooleanOp,
};
use ringclip::{clip_with, ClipError, Polygon, Vec2};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square(min: f64, max: f64) -> Polygon<f64> {
    Polygon::new(vec![
        Vec2::new(min, min),
        Vec2::new(max, min),
        Vec2::new(max, max),
        Vec2::new(min, max),
    ])
}

fn regular(n: usize, radius: f64, center: Vec2<f64>, phase: f64) -> Polygon<f64> {
    let step = std::f64::consts::TAU / n as f64;
    Polygon::new(
        (0..n)
            .map(|i| {
                let angle = phase + step * i as f64;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect(),
    )
}

/// A U-shaped polygon: a 3x3 square with a 1x2 notch cut from the top middle.
fn u_shape() -> Polygon<f64> {
    Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(3.0, 0.0),
        Vec2::new(3.0, 3.0),
        Vec2::new(2.0, 3.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 3.0),
        Vec2::new(0.0, 3.0),
    ])
}

fn net_area(groups: &[Vec<Polygon<f64>>]) -> f64 {
    groups
        .iter()
        .filter_map(|group| Polygon::from_group(group.clone()))
        .map(|p| p.net_area())
        .sum()
}

fn polygon(points: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
}

/// Three teeth hanging from a spine. Each tooth crosses the bar
/// `(0,0)-(8,2)` top and bottom, so both long bar edges are crossed six times.
fn comb() -> Polygon<f64> {
    polygon(&[
        (0.5, 4.0),
        (0.5, 3.0),
        (1.0, 3.0),
        (1.0, -1.0),
        (2.0, -1.0),
        (2.0, 3.0),
        (3.5, 3.0),
        (3.5, -1.0),
        (4.5, -1.0),
        (4.5, 3.0),
        (6.0, 3.0),
        (6.0, -1.0),
        (7.0, -1.0),
        (7.0, 3.0),
        (7.5, 3.0),
        (7.5, 4.0),
    ])
}

fn diamond(cx: f64, cy: f64, r: f64) -> Polygon<f64> {
    polygon(&[(cx + r, cy), (cx, cy + r), (cx - r, cy), (cx, cy - r)])
}

/// Net areas of intersection, union, `a - b` and `b - a`.
fn areas(a: &Polygon<f64>, b: &Polygon<f64>) -> [f64; 4] {
    [
        BooleanOp::Intersection,
        BooleanOp::Union,
        BooleanOp::Difference,
        BooleanOp::ReverseDifference,
    ]
    .map(|op| net_area(&clip_with(a, b, op).unwrap()))
}

fn assert_same_shape(groups: &[Vec<Polygon<f64>>], expected: &Polygon<f64>) {
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 1);
    let result = &groups[0][0];
    assert_relative_eq!(result.area(), expected.area(), epsilon = 1e-12);
    assert_eq!(result.len(), expected.len());
    for p in &result.outer {
        assert!(expected.outer.contains(p), "unexpected point {:?}", p);
    }
}

#[test]
fn self_intersection_and_union_return_the_input() {
    init_logging();
    for p in [square(0.0, 1.0), u_shape(), regular(7, 2.0, Vec2::zero(), 0.3)] {
        assert_same_shape(&clip(&p, &p, true, true).unwrap(), &p);
        assert_same_shape(&clip(&p, &p, false, false).unwrap(), &p);
    }
}

#[test]
fn disjoint_polygons() {
    init_logging();
    let p = square(0.0, 1.0);
    let q = regular(5, 1.0, Vec2::new(5.0, 5.0), 0.0);

    assert!(polygon_intersection(&p, &q).unwrap().is_empty());

    let union = polygon_union(&p, &q).unwrap();
    assert_eq!(union.len(), 2);
    assert!(union.iter().all(|group| group.len() == 1));
    assert_relative_eq!(net_area(&union), p.area() + q.area(), epsilon = 1e-12);
}

#[test]
fn containment() {
    init_logging();
    let p = square(0.0, 10.0);
    let q = regular(6, 2.0, Vec2::new(5.0, 5.0), 0.2);

    let difference = polygon_difference(&p, &q).unwrap();
    assert_eq!(difference.len(), 1);
    assert_eq!(difference[0].len(), 2);
    assert_relative_eq!(net_area(&difference), p.area() - q.area(), epsilon = 1e-12);

    let union = polygon_union(&p, &q).unwrap();
    assert_eq!(union.len(), 1);
    assert_eq!(union[0].len(), 1);
    assert_relative_eq!(union[0][0].area(), p.area(), epsilon = 1e-12);
}

#[test]
fn unit_square_containment() {
    let unit = square(0.0, 1.0);
    assert!(unit.contains_vector(Vec2::new(0.5, 0.5)));
    assert!(!unit.contains_vector(Vec2::new(2.0, 2.0)));
}

#[test]
fn scenario_overlapping_squares() {
    init_logging();
    let a = square(0.0, 2.0);
    let b = square(1.0, 3.0);

    let intersection = clip(&a, &b, true, true).unwrap();
    assert_eq!(intersection.len(), 1);
    assert_relative_eq!(intersection[0][0].area(), 1.0, epsilon = 1e-12);
    for corner in &intersection[0][0].outer {
        assert!(corner.x >= 1.0 && corner.x <= 2.0);
        assert!(corner.y >= 1.0 && corner.y <= 2.0);
    }

    let union = clip(&a, &b, false, false).unwrap();
    assert_eq!(union.len(), 1);
    assert_relative_eq!(union[0][0].area(), 7.0, epsilon = 1e-12);

    let difference = clip(&a, &b, true, false).unwrap();
    assert_eq!(difference.len(), 1);
    assert_eq!(difference[0][0].len(), 6);
    assert_relative_eq!(difference[0][0].area(), 3.0, epsilon = 1e-12);
}

#[test]
fn scenario_square_with_square_hole() {
    init_logging();
    let outer = square(0.0, 4.0);
    let inner = square(1.0, 3.0);
    for p in &inner.outer {
        assert!(outer.contains_vector(*p));
    }

    let groups = clip(&outer, &inner, true, false).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert!(groups[0][0].is_clockwise());
    assert!(!groups[0][1].is_clockwise());
    assert_relative_eq!(groups[0][1].area(), 4.0, epsilon = 1e-12);
}

#[test]
fn repeated_calls_are_identical() {
    init_logging();
    let a = u_shape();
    let b = regular(9, 1.7, Vec2::new(1.4, 1.6), 0.05);
    for op in [
        BooleanOp::Intersection,
        BooleanOp::Union,
        BooleanOp::Difference,
        BooleanOp::ReverseDifference,
    ] {
        let first = clip_with(&a, &b, op).unwrap();
        let second = clip_with(&a, &b, op).unwrap();
        assert_eq!(first, second, "{:?}", op);
    }
}

#[test]
fn inclusion_exclusion_on_overlapping_polygons() {
    init_logging();
    let pairs = [
        (
            regular(8, 2.0, Vec2::zero(), 0.1),
            regular(8, 2.0, Vec2::new(1.3, 0.7), 0.25),
        ),
        (
            regular(6, 3.0, Vec2::zero(), 0.0),
            regular(3, 3.5, Vec2::new(0.2, -0.3), 0.4),
        ),
        (u_shape(), regular(5, 1.2, Vec2::new(1.5, 2.1), 0.15)),
    ];

    for (a, b) in &pairs {
        let both = net_area(&polygon_intersection(a, b).unwrap());
        let either = net_area(&polygon_union(a, b).unwrap());
        let a_only = net_area(&polygon_difference(a, b).unwrap());
        let b_only = net_area(&polygon_difference(b, a).unwrap());
        let xor = net_area(&polygon_xor(a, b).unwrap());

        assert!(both > 0.0);
        assert_relative_eq!(either + both, a.area() + b.area(), epsilon = 1e-9);
        assert_relative_eq!(a_only, a.area() - both, epsilon = 1e-9);
        assert_relative_eq!(b_only, b.area() - both, epsilon = 1e-9);
        assert_relative_eq!(xor, either - both, epsilon = 1e-9);
    }
}

#[test]
fn union_closes_a_hole() {
    init_logging();
    let bar = Polygon::new(vec![
        Vec2::new(-1.0, 2.0),
        Vec2::new(4.0, 2.0),
        Vec2::new(4.0, 4.0),
        Vec2::new(-1.0, 4.0),
    ]);

    let groups = polygon_union(&u_shape(), &bar).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert_relative_eq!(groups[0][0].area(), 16.0, epsilon = 1e-12);
    assert_relative_eq!(groups[0][1].area(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(net_area(&groups), 15.0, epsilon = 1e-12);
}

#[test]
fn touching_corners_do_not_overlap() {
    init_logging();
    let a = square(0.0, 1.0);
    let b = square(1.0, 2.0);

    assert!(polygon_intersection(&a, &b).unwrap().is_empty());
    assert_eq!(polygon_union(&a, &b).unwrap().len(), 2);
    assert_relative_eq!(net_area(&polygon_difference(&a, &b).unwrap()), 1.0, epsilon = 1e-12);
}

#[test]
fn vertex_on_edge_crossing() {
    init_logging();
    let a = square(0.0, 2.0);
    let triangle = Polygon::new(vec![
        Vec2::new(3.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(1.0, 1.5),
    ]);

    let groups = polygon_intersection(&a, &triangle).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0][0].len(), 3);
    assert_relative_eq!(groups[0][0].area(), 0.125, epsilon = 1e-12);
}

#[test]
fn invalid_input_is_rejected() {
    let degenerate = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]);
    let square = square(0.0, 1.0);

    assert_eq!(
        clip(&degenerate, &square, true, true),
        Err(ClipError::InvalidPolygon { points: 2 })
    );
    assert_eq!(
        clip(&square, &degenerate, false, false),
        Err(ClipError::InvalidPolygon { points: 2 })
    );
}

#[test]
fn single_precision() {
    init_logging();
    let a: Polygon<f32> = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(0.0, 2.0),
    ]);
    let b = a.translated(Vec2::new(1.0, 1.0));

    let union = polygon_union(&a, &b).unwrap();
    assert_eq!(union.len(), 1);
    assert_relative_eq!(union[0][0].area(), 7.0, epsilon = 1e-5);
}

#[test]
fn edges_crossed_many_times() {
    init_logging();
    let bar = polygon(&[(0.0, 0.0), (8.0, 0.0), (8.0, 2.0), (0.0, 2.0)]);
    let comb = comb();
    assert_relative_eq!(comb.area(), 19.0, epsilon = 1e-12);

    let intersection = polygon_intersection(&bar, &comb).unwrap();
    assert_eq!(intersection.len(), 3);
    assert_relative_eq!(net_area(&intersection), 6.0, epsilon = 1e-12);

    // The gaps between the teeth above the bar are closed off by the spine.
    let union = polygon_union(&bar, &comb).unwrap();
    assert_eq!(union.len(), 1);
    assert_eq!(union[0].len(), 3);
    assert_relative_eq!(union[0][0].area(), 32.0, epsilon = 1e-12);
    assert_relative_eq!(net_area(&union), 29.0, epsilon = 1e-12);

    let difference = polygon_difference(&bar, &comb).unwrap();
    assert_eq!(difference.len(), 4);
    assert_relative_eq!(net_area(&difference), 10.0, epsilon = 1e-12);

    let reverse = polygon_difference(&comb, &bar).unwrap();
    assert_eq!(reverse.len(), 4);
    assert_relative_eq!(net_area(&reverse), 13.0, epsilon = 1e-12);
}

#[test]
fn touches_next_to_crossings() {
    init_logging();
    // The diamond's top and bottom corners touch the square from inside and
    // its left corner pokes out through x = 0.
    let square = square(0.0, 4.0);
    let diamond = diamond(1.0, 2.0, 2.0);

    let [both, either, square_only, diamond_only] = areas(&square, &diamond);
    assert_relative_eq!(both, 7.0, epsilon = 1e-12);
    assert_relative_eq!(either, 17.0, epsilon = 1e-12);
    assert_relative_eq!(square_only, 9.0, epsilon = 1e-12);
    assert_relative_eq!(diamond_only, 1.0, epsilon = 1e-12);
}

#[test]
fn inclusion_exclusion_over_diamond_placements() {
    init_logging();
    let square = square(0.0, 4.0);
    for cx in -1..=5 {
        for cy in -1..=5 {
            for r in 1..=4 {
                let (cx, cy, r) = (cx as f64, cy as f64, r as f64);
                let diamond = diamond(cx, cy, r);
                let [both, either, square_only, diamond_only] = areas(&square, &diamond);
                let context = format!("c=({}, {}) r={}", cx, cy, r);

                assert!(both >= -1e-9 && both <= diamond.area() + 1e-9, "{}", context);
                assert!(
                    (either + both - square.area() - diamond.area()).abs() < 1e-9,
                    "{}: i={} u={}",
                    context,
                    both,
                    either
                );
                assert!((square_only - (square.area() - both)).abs() < 1e-9, "{}", context);
                assert!((diamond_only - (diamond.area() - both)).abs() < 1e-9, "{}", context);
            }
        }
    }
}
