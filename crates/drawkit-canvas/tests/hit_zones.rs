//! Property tests over hit-zone classification and zone transforms.

use proptest::prelude::*;

use drawkit_canvas::{
    EllipseData, HitZone, ItemGeometry, LineData, PenPath, RectData, TextBox,
};
use drawkit_core::Point;

const THRESHOLD: f64 = 20.0;

prop_compose! {
    fn coord()(v in -500.0..500.0f64) -> f64 { v }
}

prop_compose! {
    fn delta()(v in -300.0..300.0f64) -> f64 { v }
}

proptest! {
    #[test]
    fn far_point_is_out_for_every_shape(
        cx in coord(), cy in coord(), rx in delta(), ry in delta(),
        ox in 0.0..100.0f64, oy in 0.0..100.0f64,
    ) {
        // All geometry lives within +-800; this point cannot reach any
        // hit zone.
        let far = Point::new(2000.0 + ox, 2000.0 + oy);

        let ellipse = EllipseData { cx, cy, rx, ry };
        prop_assert_eq!(ellipse.classify(far, THRESHOLD), HitZone::Out);

        let rect = RectData { x: cx, y: cy, width: rx, height: ry };
        prop_assert_eq!(rect.classify(far, THRESHOLD), HitZone::Out);

        let line = LineData { x1: cx, y1: cy, x2: cx + rx, y2: cy + ry };
        prop_assert_eq!(line.classify(far, THRESHOLD), HitZone::Out);

        let text = TextBox { x: cx, y: cy, width: 200.0, height: 40.0, text: String::new() };
        prop_assert_eq!(text.classify(far, THRESHOLD), HitZone::Out);

        let pen = PenPath { points: vec![Point::new(cx, cy), Point::new(cx + rx, cy + ry)] };
        prop_assert_eq!(pen.classify(far, THRESHOLD), HitZone::Out);
    }

    #[test]
    fn out_zone_leaves_geometry_unchanged(
        cx in coord(), cy in coord(), rx in delta(), ry in delta(),
        tx in delta(), ty in delta(),
    ) {
        let ellipse = EllipseData { cx, cy, rx, ry };
        prop_assert_eq!(ellipse.transformed(HitZone::Out, tx, ty), ellipse);

        let rect = RectData { x: cx, y: cy, width: rx, height: ry };
        prop_assert_eq!(rect.transformed(HitZone::Out, tx, ty), rect);

        let line = LineData { x1: cx, y1: cy, x2: cx + rx, y2: cy + ry };
        prop_assert_eq!(line.transformed(HitZone::Out, tx, ty), line);
    }

    #[test]
    fn rectangle_corner_drag_pins_opposite_corner(
        x in coord(), y in coord(), width in delta(), height in delta(),
        tx in delta(), ty in delta(),
    ) {
        let rect = RectData { x, y, width, height };
        let right = x + width;
        let bottom = y + height;
        let close = |a: f64, b: f64| (a - b).abs() < 1e-6;

        let r = rect.transformed(HitZone::TopLeft, tx, ty);
        prop_assert!(close(r.x + r.width, right) && close(r.y + r.height, bottom));

        let r = rect.transformed(HitZone::TopRight, tx, ty);
        prop_assert!(close(r.x, x) && close(r.y + r.height, bottom));

        let r = rect.transformed(HitZone::BottomLeft, tx, ty);
        prop_assert!(close(r.x + r.width, right) && close(r.y, y));

        let r = rect.transformed(HitZone::BottomRight, tx, ty);
        prop_assert!(close(r.x, x) && close(r.y, y));
    }

    #[test]
    fn line_zone_moves_only_its_endpoints(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        tx in delta(), ty in delta(),
    ) {
        let line = LineData { x1, y1, x2, y2 };

        let top = line.transformed(HitZone::Top, tx, ty);
        prop_assert_eq!(top.end(), line.end());
        prop_assert_eq!(top.start(), Point::new(x1 + tx, y1 + ty));

        let bottom = line.transformed(HitZone::Bottom, tx, ty);
        prop_assert_eq!(bottom.start(), line.start());
        prop_assert_eq!(bottom.end(), Point::new(x2 + tx, y2 + ty));

        let center = line.transformed(HitZone::Center, tx, ty);
        prop_assert_eq!(center.start(), Point::new(x1 + tx, y1 + ty));
        prop_assert_eq!(center.end(), Point::new(x2 + tx, y2 + ty));
    }
}

#[test]
fn test_pen_center_translation() {
    let pen = PenPath {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        ],
    };
    let moved = pen.transformed(HitZone::Center, 5.0, 5.0);
    assert_eq!(
        moved.points,
        vec![
            Point::new(5.0, 5.0),
            Point::new(15.0, 15.0),
            Point::new(25.0, 5.0),
        ]
    );
}
