//! Pure geometry helpers shared by element construction and hit-testing.

mod stroke;

pub use stroke::{outline_path, stroke_outline};

use kurbo::{Point, Vec2};

/// Rotate a vector counter-clockwise by `angle` radians.
pub(crate) fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Check whether `point` lies within `threshold` pixels of the segment a→b.
///
/// The perpendicular distance is measured against the infinite line through
/// the segment, then the point's projection must fall inside the segment's
/// bounding extent (grown by `threshold`). A point beyond either end is not
/// near, however close it is to the extended line.
pub fn is_point_near_segment(a: Point, b: Point, point: Point, threshold: f64) -> bool {
    let seg = b - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return point.distance(a) < threshold;
    }

    let offset = point - a;
    let distance = seg.cross(offset).abs() / len_sq.sqrt();
    if distance >= threshold {
        return false;
    }

    let t = offset.dot(seg) / len_sq;
    let projection = a + seg * t;
    let within_x = projection.x >= a.x.min(b.x) - threshold && projection.x <= a.x.max(b.x) + threshold;
    let within_y = projection.y >= a.y.min(b.y) - threshold && projection.y <= a.y.max(b.y) + threshold;
    within_x && within_y
}

/// Check whether `point` is near any edge of the axis-aligned box spanned by
/// two opposite corners.
pub fn is_point_near_box_edges(corner1: Point, corner2: Point, point: Point, threshold: f64) -> bool {
    let top_right = Point::new(corner2.x, corner1.y);
    let bottom_left = Point::new(corner1.x, corner2.y);
    is_point_near_segment(corner1, top_right, point, threshold)
        || is_point_near_segment(top_right, corner2, point, threshold)
        || is_point_near_segment(corner2, bottom_left, point, threshold)
        || is_point_near_segment(bottom_left, corner1, point, threshold)
}

/// Compute the two wing endpoints of an arrow head.
///
/// The reversed shaft direction (end→start) is rotated by ±`angle` and scaled
/// to `length`, anchored at the shaft end. A degenerate shaft points right.
pub fn arrow_head_points(start: Point, end: Point, length: f64, angle: f64) -> (Point, Point) {
    let back = start - end;
    let back = if back.hypot2() < f64::EPSILON {
        Vec2::new(-1.0, 0.0)
    } else {
        back.normalize()
    };

    let wing1 = end + rotate(back, angle) * length;
    let wing2 = end + rotate(back, -angle) * length;
    (wing1, wing2)
}
