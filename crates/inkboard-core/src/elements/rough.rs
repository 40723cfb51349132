//! Hand-drawn render descriptors.
//!
//! A descriptor is derived from an element's defining fields and a seed, so
//! rebuilding it for the same inputs always produces identical paths. That is
//! what keeps a shape steady while it is being dragged out.

use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};

/// Fill pattern requested for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillPattern {
    /// Solid fill color.
    Solid,
    /// Parallel diagonal lines.
    Hachure,
    /// Cross-hatched lines.
    #[default]
    CrossHatch,
}

/// Renderable form of a shape element.
#[derive(Debug, Clone, PartialEq)]
pub struct RoughDescriptor {
    /// Seed the jitter was generated from.
    pub seed: u32,
    /// Outline passes, drawn on top of each other for the sketchy look.
    pub strokes: Vec<BezPath>,
    /// Region to fill, present only for closed shapes with a fill color.
    pub fill: Option<BezPath>,
    /// Pattern to fill `fill` with.
    pub fill_pattern: FillPattern,
}

impl RoughDescriptor {
    /// Build a descriptor from a clean outline.
    ///
    /// `fill_region` is the clean path to fill, if any. With zero roughness a
    /// single untouched pass is produced.
    pub fn build(
        outline: &BezPath,
        fill_region: Option<BezPath>,
        fill_pattern: FillPattern,
        roughness: f64,
        seed: u32,
    ) -> Self {
        let strokes = if roughness <= 0.0 {
            vec![outline.clone()]
        } else {
            (0..2)
                .map(|pass| hand_drawn(outline, roughness, seed, pass))
                .collect()
        };
        Self {
            seed,
            strokes,
            fill: fill_region,
            fill_pattern,
        }
    }
}

/// Simple seeded random number generator (xorshift32).
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random float in range [-1, 1]
    fn next_f64(&mut self) -> f64 {
        (self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0
    }

    fn offset(&mut self, amount: f64) -> f64 {
        self.next_f64() * amount
    }
}

/// Jitter a path the way rough.js does: endpoints overshoot by a random
/// offset and straight segments bow slightly around their midpoint.
///
/// `pass` selects an independent random sequence for multi-stroke rendering.
fn hand_drawn(path: &BezPath, roughness: f64, seed: u32, pass: u32) -> BezPath {
    let max_offset = roughness * 2.0;
    let bowing = roughness;

    // Large prime spreads passes far apart in the sequence space.
    let mut rng = SimpleRng::new(seed.wrapping_add(pass.wrapping_mul(99991)));

    let mut result = BezPath::new();
    let mut last = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                result.move_to(jitter(p, max_offset, &mut rng));
                last = p;
                subpath_start = p;
            }
            PathEl::LineTo(p) => {
                let (control, end) = bowed_segment(last, p, roughness, bowing, max_offset, &mut rng);
                result.quad_to(control, end);
                last = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let c = jitter(p1, max_offset * 0.7, &mut rng);
                let end = jitter(p2, max_offset, &mut rng);
                result.quad_to(c, end);
                last = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let c1 = jitter(p1, max_offset * 0.5, &mut rng);
                let c2 = jitter(p2, max_offset * 0.5, &mut rng);
                let end = jitter(p3, max_offset, &mut rng);
                result.curve_to(c1, c2, end);
                last = p3;
            }
            PathEl::ClosePath => {
                // Draw the closing edge explicitly so its corner overshoots too.
                if last != subpath_start {
                    let (control, end) =
                        bowed_segment(last, subpath_start, roughness, bowing, max_offset, &mut rng);
                    result.quad_to(control, end);
                }
                last = subpath_start;
            }
        }
    }

    result
}

fn jitter(p: Point, amount: f64, rng: &mut SimpleRng) -> Point {
    Point::new(p.x + rng.offset(amount), p.y + rng.offset(amount))
}

/// One straight segment rendered as a bowed quadratic: (control, end).
fn bowed_segment(
    from: Point,
    to: Point,
    roughness: f64,
    bowing: f64,
    max_offset: f64,
    rng: &mut SimpleRng,
) -> (Point, Point) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();

    let bow = rng.offset(bowing * roughness * len / 200.0);
    let (perp_x, perp_y) = if len > 0.001 {
        (-dy / len, dx / len)
    } else {
        (0.0, 0.0)
    };

    let control = Point::new(
        (from.x + to.x) / 2.0 + perp_x * bow,
        (from.y + to.y) / 2.0 + perp_y * bow,
    );
    (control, jitter(to, max_offset, rng))
}
