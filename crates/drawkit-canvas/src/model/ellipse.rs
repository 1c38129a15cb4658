use serde::{Deserialize, Serialize};

use drawkit_core::Point;

use super::{between, HitZone, ItemGeometry};

/// An axis-aligned ellipse.
///
/// Radii stay signed while a gesture is in flight: dragging an edge past
/// the opposite one flips the sign instead of clamping, and the interior
/// test accounts for either orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EllipseData {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl EllipseData {
    /// A zero-radius ellipse centered at `origin`.
    pub fn at(origin: Point) -> Self {
        Self {
            cx: origin.x,
            cy: origin.y,
            rx: 0.0,
            ry: 0.0,
        }
    }

    fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

impl ItemGeometry for EllipseData {
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        let c = self.center();
        if touch.within_box(Point::new(c.x, c.y - self.ry), threshold) {
            HitZone::Top
        } else if touch.within_box(Point::new(c.x, c.y + self.ry), threshold) {
            HitZone::Bottom
        } else if touch.within_box(Point::new(c.x - self.rx, c.y), threshold) {
            HitZone::Left
        } else if touch.within_box(Point::new(c.x + self.rx, c.y), threshold) {
            HitZone::Right
        } else if between(touch.x, c.x - self.rx, c.x + self.rx)
            && between(touch.y, c.y - self.ry, c.y + self.ry)
        {
            HitZone::Center
        } else {
            HitZone::Out
        }
    }

    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        match zone {
            HitZone::Top => Self {
                cy: self.cy + ty,
                ry: self.ry - ty,
                ..*self
            },
            HitZone::Bottom => Self {
                cy: self.cy + ty,
                ry: self.ry + ty,
                ..*self
            },
            HitZone::Left => Self {
                cx: self.cx + tx,
                rx: self.rx - tx,
                ..*self
            },
            HitZone::Right => Self {
                cx: self.cx + tx,
                rx: self.rx + tx,
                ..*self
            },
            HitZone::Center => Self {
                cx: self.cx + tx,
                cy: self.cy + ty,
                ..*self
            },
            _ => *self,
        }
    }
}
