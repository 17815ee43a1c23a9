use std::ops::*;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point(pub f64, pub f64);
impl Point {
    /// Point at `distance` from `origin` in direction `angle`, where 0 points along +y and
    /// angles increase clockwise.
    pub fn from_polar(origin: Self, angle: f64, distance: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self(origin.0 + distance * sin, origin.1 + distance * cos)
    }
    /// Return the square of the length of the vector.
    pub fn sq_length(self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }
    /// Return the length of the vector.
    pub fn length(self) -> f64 {
        self.sq_length().sqrt()
    }
    /// Distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }
    /// Find the dot product of this vector with another.
    pub fn dot(self, other: Self) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }
    pub fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}
impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}
impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1)
    }
}
impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs, self.1 * rhs)
    }
}
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}
