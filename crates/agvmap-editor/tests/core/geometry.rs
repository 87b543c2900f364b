//! Property tests for the geometry invariants.

use proptest::prelude::*;

use agvmap_editor::{calc_arrow_angle, calc_mid_point, calculate_distance, Point, Viewport};

const LINE_STRAIGHT: i32 = 0;
const LINE_CURVE: i32 = 1;

fn finite_coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    /// screen -> canvas -> screen is the identity, and vice versa, for any
    /// positive scale.
    #[test]
    fn viewport_roundtrip(
        x in finite_coord(),
        y in finite_coord(),
        vx in finite_coord(),
        vy in finite_coord(),
        scale in 0.1..5.0f64,
    ) {
        let vp = Viewport { x: vx, y: vy, scale };

        let screen = vp.canvas_to_screen(x, y);
        let canvas = vp.screen_to_canvas(screen.x, screen.y);
        prop_assert!((canvas.x - x).abs() < 1e-6);
        prop_assert!((canvas.y - y).abs() < 1e-6);

        let canvas2 = vp.screen_to_canvas(x, y);
        let screen2 = vp.canvas_to_screen(canvas2.x, canvas2.y);
        prop_assert!((screen2.x - x).abs() < 1e-6);
        prop_assert!((screen2.y - y).abs() < 1e-6);
    }

    /// The mid-curve tangent equals the straight-segment direction for
    /// every control point. Degenerate (near-zero) segments are excluded;
    /// the tolerance covers the float cancellation in the tangent terms.
    #[test]
    fn curve_tangent_matches_straight_direction(
        sx in -1000.0..1000.0f64, sy in -1000.0..1000.0f64,
        ex in -1000.0..1000.0f64, ey in -1000.0..1000.0f64,
        cx in -1000.0..1000.0f64, cy in -1000.0..1000.0f64,
    ) {
        prop_assume!(calculate_distance(sx, sy, ex, ey) > 1.0);
        let start = Point::new(sx, sy);
        let end = Point::new(ex, ey);

        let straight = calc_arrow_angle(start, end, LINE_STRAIGHT, None);
        let curved = calc_arrow_angle(start, end, LINE_CURVE, Some(Point::new(cx, cy)));
        prop_assert!((curved - straight).abs() < 1e-9);
    }

    /// A curve whose control point is the straight midpoint degenerates to
    /// the straight midpoint.
    #[test]
    fn degenerate_curve_midpoint(
        sx in finite_coord(), sy in finite_coord(),
        ex in finite_coord(), ey in finite_coord(),
    ) {
        let start = Point::new(sx, sy);
        let end = Point::new(ex, ey);
        let straight = calc_mid_point(start, end, LINE_STRAIGHT, None);
        let curved = calc_mid_point(start, end, LINE_CURVE, Some(straight));
        prop_assert!((curved.x - straight.x).abs() < 1e-6);
        prop_assert!((curved.y - straight.y).abs() < 1e-6);
    }

    /// Distance is symmetric and non-negative.
    #[test]
    fn distance_symmetry(
        x1 in finite_coord(), y1 in finite_coord(),
        x2 in finite_coord(), y2 in finite_coord(),
    ) {
        let d1 = calculate_distance(x1, y1, x2, y2);
        let d2 = calculate_distance(x2, y2, x1, y1);
        prop_assert!(d1 >= 0.0);
        prop_assert!((d1 - d2).abs() < 1e-9);
    }
}

#[test]
fn test_curve_midpoint_pulls_toward_control() {
    let start = Point::new(0.0, 0.0);
    let end = Point::new(100.0, 0.0);

    let above = calc_mid_point(start, end, LINE_CURVE, Some(Point::new(50.0, 100.0)));
    assert!(above.y > 0.0);
    assert!((above.x - 50.0).abs() < 1e-9);

    let below = calc_mid_point(start, end, LINE_CURVE, Some(Point::new(50.0, -100.0)));
    assert!(below.y < 0.0);

    let toward_start = calc_mid_point(start, end, LINE_CURVE, Some(start));
    assert!(toward_start.x < 50.0);

    let toward_end = calc_mid_point(start, end, LINE_CURVE, Some(end));
    assert!(toward_end.x > 50.0);
}
