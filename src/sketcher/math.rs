//! Angle helpers shared by the transforms and the relaxation code.
//!
//! Angles follow the layout convention: 0 points along +y and angles grow clockwise, so a point
//! at `distance` and `angle` from `origin` is `(origin.x + d·sin(a), origin.y + d·cos(a))`.

use super::point::Point;

/// Angle of the vector from `p0` to `p1`.
pub fn angle(p0: Point, p1: Point) -> f64 {
    let Point(dx, dy) = p1 - p0;
    dx.atan2(dy)
}

/// Rotate `p` around `pivot` by `delta` radians.
pub fn rotate_around(p: Point, pivot: Point, delta: f64) -> Point {
    let distance = pivot.distance(p);
    if distance == 0.0 {
        return p;
    }
    Point::from_polar(pivot, angle(pivot, p) + delta, distance)
}

/// Mirror `p` on the line through `pivot` with direction `mirror_angle`.
pub fn reflect_across(p: Point, pivot: Point, mirror_angle: f64) -> Point {
    let distance = pivot.distance(p);
    if distance == 0.0 {
        return p;
    }
    Point::from_polar(pivot, 2.0 * mirror_angle - angle(pivot, p), distance)
}

/// Foot of the perpendicular from `p` onto the line through `sp1` and `sp2`.
///
/// Bonds parallel to an axis get the exact closed form, everything else a projection. Returns
/// `None` for coincident line points, which don't define a line.
pub fn perpendicular_foot(p: Point, sp1: Point, sp2: Point) -> Option<Point> {
    if sp1.0 == sp2.0 && sp1.1 == sp2.1 {
        return None;
    }
    if sp1.0 == sp2.0 {
        return Some(Point(sp1.0, p.1));
    }
    if sp1.1 == sp2.1 {
        return Some(Point(p.0, sp1.1));
    }
    let l1 = p - sp1;
    let l3 = sp2 - sp1;
    let t = l1.dot(l3) / l3.sq_length();
    let foot = sp1 + l3 * t;
    foot.is_finite().then_some(foot)
}

/// A force or direction in polar form.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Polar {
    pub angle: f64,
    pub length: f64,
}
impl Polar {
    pub const fn new(angle: f64, length: f64) -> Self {
        Self { angle, length }
    }
    /// Sum the vectors and divide the resulting length by their count.
    ///
    /// An empty input or vectors cancelling each other out give a zero-length result.
    pub fn mean(polars: &[Self]) -> Self {
        if polars.is_empty() {
            return Self::default();
        }
        let (sin_sum, cos_sum) = polars.iter().fold((0.0, 0.0), |(s, c), p| {
            let (sin, cos) = p.angle.sin_cos();
            (s + p.length * sin, c + p.length * cos)
        });
        Self {
            angle: sin_sum.atan2(cos_sum),
            length: sin_sum.hypot(cos_sum) / polars.len() as f64,
        }
    }
    /// Cartesian offset of this vector.
    pub fn offset(self) -> Point {
        Point::from_polar(Point::default(), self.angle, self.length)
    }
}
