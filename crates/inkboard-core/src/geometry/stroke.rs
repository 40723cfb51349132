//! Freehand stroke to filled outline conversion.
//!
//! A brush stroke is stored as the raw pointer samples. Rendering and
//! hit-testing both go through [`stroke_outline`] followed by
//! [`outline_path`], so the filled shape a user sees is exactly the shape the
//! eraser tests against.

use crate::config::StrokeOptions;
use kurbo::{BezPath, Point, Vec2};
use std::f64::consts::PI;

use super::rotate;

/// Rate at which simulated pressure follows pointer speed.
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Pressure assumed for the first sample and for non-simulated strokes.
const RESTING_PRESSURE: f64 = 0.5;

/// Segments used to approximate each round cap.
const CAP_SEGMENTS: usize = 8;

/// Segments used for a single-sample dot.
const DOT_SEGMENTS: usize = 16;

/// Build the closed outline polygon for a stroke of diameter `size`.
///
/// Returns an empty vector for an empty stroke; callers treat that as nothing
/// to draw.
pub fn stroke_outline(points: &[Point], size: f64, options: &StrokeOptions) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let samples = streamline(points, options.streamline);
    let radii = radii(&samples, size, options);

    let moved = samples.iter().any(|p| p.distance(samples[0]) > f64::EPSILON);
    if !moved {
        return dot(samples[0], radii[0]);
    }

    let directions = directions(&samples);
    let min_spacing = options.smoothing.clamp(0.0, 1.0);

    let mut left: Vec<Point> = Vec::with_capacity(samples.len());
    let mut right: Vec<Point> = Vec::with_capacity(samples.len());
    let last = samples.len() - 1;
    for (i, (&center, &dir)) in samples.iter().zip(&directions).enumerate() {
        let normal = Vec2::new(-dir.y, dir.x) * radii[i];
        let l = center + normal;
        let r = center - normal;

        let spacing = radii[i] * min_spacing;
        let keep = i == 0
            || i == last
            || left.last().is_none_or(|prev| prev.distance(l) > spacing)
            || right.last().is_none_or(|prev| prev.distance(r) > spacing);
        if keep {
            left.push(l);
            right.push(r);
        }
    }

    let mut outline = Vec::with_capacity(left.len() + right.len() + 2 * CAP_SEGMENTS);

    // Start cap sweeps from the right edge, behind the stroke, to the left edge.
    let start_normal = Vec2::new(-directions[0].y, directions[0].x) * radii[0];
    for k in 1..CAP_SEGMENTS {
        let angle = -PI * k as f64 / CAP_SEGMENTS as f64;
        outline.push(samples[0] + rotate(-start_normal, angle));
    }
    outline.extend(left.iter().copied());

    // End cap sweeps from the left edge, ahead of the stroke, to the right edge.
    let end_normal = Vec2::new(-directions[last].y, directions[last].x) * radii[last];
    for k in 1..CAP_SEGMENTS {
        let angle = -PI * k as f64 / CAP_SEGMENTS as f64;
        outline.push(samples[last] + rotate(end_normal, angle));
    }
    outline.extend(right.iter().rev().copied());

    outline
}

/// Turn an outline polygon into a closed fill path.
///
/// Each vertex becomes the control point of a quadratic segment ending at the
/// midpoint to the next vertex, wrapping back to the first.
pub fn outline_path(outline: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = outline.first() else {
        return path;
    };

    path.move_to(first);
    for (i, &vertex) in outline.iter().enumerate() {
        let next = outline[(i + 1) % outline.len()];
        path.quad_to(vertex, vertex.midpoint(next));
    }
    path.close_path();
    path
}

/// Pull each sample toward its predecessor to damp pointer jitter.
fn streamline(points: &[Point], streamline: f64) -> Vec<Point> {
    let t = 0.15 + (1.0 - streamline.clamp(0.0, 1.0)) * 0.85;
    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for &p in &points[1..] {
        let prev = out[out.len() - 1];
        out.push(prev.lerp(p, t));
    }
    out
}

/// Per-sample outline radius, with pressure simulated from spacing.
fn radii(samples: &[Point], size: f64, options: &StrokeOptions) -> Vec<f64> {
    let size = size.max(f64::EPSILON);
    let mut pressure = RESTING_PRESSURE;
    let mut prev = samples[0];

    samples
        .iter()
        .map(|&p| {
            if options.simulate_pressure {
                let speed = (p.distance(prev) / size).min(1.0);
                let target = 1.0 - speed;
                pressure = (pressure + (target - pressure) * speed * RATE_OF_PRESSURE_CHANGE).min(1.0);
            }
            prev = p;
            let radius = size * (0.5 - options.thinning * (0.5 - pressure));
            radius.max(0.5)
        })
        .collect()
}

/// Unit travel direction at each sample.
fn directions(samples: &[Point]) -> Vec<Vec2> {
    let last = samples.len() - 1;
    let mut previous = Vec2::new(1.0, 0.0);
    let mut dirs = Vec::with_capacity(samples.len());
    for i in 0..samples.len() {
        let from = samples[i.saturating_sub(1)];
        let to = samples[(i + 1).min(last)];
        let delta = to - from;
        if delta.hypot2() > f64::EPSILON {
            previous = delta.normalize();
        }
        dirs.push(previous);
    }

    // Leading stationary samples take the first real direction.
    if let Some(first_moving) = (0..samples.len()).find(|&i| {
        let from = samples[i.saturating_sub(1)];
        let to = samples[(i + 1).min(last)];
        (to - from).hypot2() > f64::EPSILON
    }) {
        let dir = dirs[first_moving];
        for d in dirs.iter_mut().take(first_moving) {
            *d = dir;
        }
    }
    dirs
}

/// Circular outline for a stroke that never moved.
fn dot(center: Point, radius: f64) -> Vec<Point> {
    (0..DOT_SEGMENTS)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / DOT_SEGMENTS as f64;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};

    fn horizontal_stroke() -> Vec<Point> {
        (0..=20).map(|i| Point::new(i as f64 * 5.0, 0.0)).collect()
    }

    #[test]
    fn test_empty_stroke() {
        let outline = stroke_outline(&[], 10.0, &StrokeOptions::default());
        assert!(outline.is_empty());
        assert_eq!(outline_path(&outline).elements().len(), 0);
    }

    #[test]
    fn test_single_point_is_dot() {
        let center = Point::new(40.0, 40.0);
        let outline = stroke_outline(&[center], 10.0, &StrokeOptions::default());
        assert_eq!(outline.len(), DOT_SEGMENTS);

        let path = outline_path(&outline);
        assert!(path.contains(center));
        assert!(!path.contains(Point::new(60.0, 40.0)));
    }

    #[test]
    fn test_outline_covers_stroke() {
        let points = horizontal_stroke();
        let outline = stroke_outline(&points, 10.0, &StrokeOptions::default());
        let path = outline_path(&outline);

        assert!(path.contains(Point::new(50.0, 0.0)));
        assert!(path.contains(Point::new(50.0, 1.5)));
        assert!(!path.contains(Point::new(50.0, 30.0)));
    }

    #[test]
    fn test_outline_is_deterministic() {
        let points = horizontal_stroke();
        let options = StrokeOptions::default();
        let a = stroke_outline(&points, 10.0, &options);
        let b = stroke_outline(&points, 10.0, &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_path_quadratic_midpoints() {
        let outline = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let path = outline_path(&outline);
        let elements = path.elements();

        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(elements[1], PathEl::QuadTo(Point::new(0.0, 0.0), Point::new(5.0, 0.0)));
        assert_eq!(elements[2], PathEl::QuadTo(Point::new(10.0, 0.0), Point::new(10.0, 5.0)));
        // Last segment wraps to the first vertex.
        assert_eq!(elements[3], PathEl::QuadTo(Point::new(10.0, 10.0), Point::new(5.0, 5.0)));
        assert_eq!(elements[4], PathEl::ClosePath);
    }

    #[test]
    fn test_uniform_width_without_thinning() {
        let points = horizontal_stroke();
        let options = StrokeOptions {
            thinning: 0.0,
            ..Default::default()
        };
        let outline = stroke_outline(&points, 10.0, &options);
        let max_y = outline.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
        assert!((max_y - 5.0).abs() < 1e-9);
    }
}
