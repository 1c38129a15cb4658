use serde::{Deserialize, Serialize};

use drawkit_core::Point;

use super::{HitZone, ItemGeometry};

/// A freehand stroke recorded as the raw sequence of touched points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PenPath {
    pub points: Vec<Point>,
}

impl PenPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the live pointer position while the stroke is being drawn.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }
}

impl ItemGeometry for PenPath {
    /// A pen stroke is grabbed by touching near any of its recorded
    /// points. An empty stroke is never grabbed.
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        if self.points.iter().any(|p| touch.within_box(*p, threshold)) {
            HitZone::Center
        } else {
            HitZone::Out
        }
    }

    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        match zone {
            HitZone::Center => Self {
                points: self
                    .points
                    .iter()
                    .map(|p| Point::new(p.x + tx, p.y + ty))
                    .collect(),
            },
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_never_hit() {
        let path = PenPath::new();
        assert_eq!(path.classify(Point::new(0.0, 0.0), 20.0), HitZone::Out);
    }

    #[test]
    fn hit_near_any_point() {
        let mut path = PenPath::new();
        path.push(Point::new(0.0, 0.0));
        path.push(Point::new(100.0, 100.0));
        assert_eq!(path.classify(Point::new(110.0, 90.0), 20.0), HitZone::Center);
        assert_eq!(path.classify(Point::new(50.0, 50.0), 20.0), HitZone::Out);
    }

    #[test]
    fn center_translates_every_point() {
        let mut path = PenPath::new();
        path.push(Point::new(1.0, 2.0));
        path.push(Point::new(3.0, 4.0));
        let moved = path.transformed(HitZone::Center, 10.0, -2.0);
        assert_eq!(moved.points[0], Point::new(11.0, 0.0));
        assert_eq!(moved.points[1], Point::new(13.0, 2.0));
    }
}
