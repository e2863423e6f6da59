// fuzzy/membership.rs

// Piecewise-linear membership functions: triangles and trapezoids. Control
// points must be non-decreasing; coincident points are legal and denote a
// vertical edge (degree jumps straight to 1 at that input).

use super::FuzzyError;

/// A piecewise-linear membership function mapping a scalar to a degree of
/// truth in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// Triangle: rises from `a`, peaks at `b`, falls to `c`.
    Triangle {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
    /// Trapezoid: rises from `a`, flat between `b` and `c`, falls to `d`.
    Trapezoid {
        /// Left foot.
        a: f64,
        /// Left shoulder.
        b: f64,
        /// Right shoulder.
        c: f64,
        /// Right foot.
        d: f64,
    },
}

impl MembershipFunction {
    /// A validated triangle. Fails if the points are not non-decreasing.
    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self, FuzzyError> {
        if !(a <= b && b <= c) {
            return Err(FuzzyError::NonMonotonic {
                points: vec![a, b, c],
            });
        }
        Ok(MembershipFunction::Triangle { a, b, c })
    }

    /// A validated trapezoid. Fails if the points are not non-decreasing.
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self, FuzzyError> {
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::NonMonotonic {
                points: vec![a, b, c, d],
            });
        }
        Ok(MembershipFunction::Trapezoid { a, b, c, d })
    }

    /// Degree of membership at `x`, in `[0, 1]`.
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            MembershipFunction::Triangle { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x < b {
                    // b > a here: x >= a and x < b cannot hold when a == b
                    (x - a) / (b - a)
                } else if x > b {
                    (c - x) / (c - b)
                } else {
                    1.0
                }
            }
            MembershipFunction::Trapezoid { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x <= c {
                    1.0
                } else {
                    (d - x) / (d - c)
                }
            }
        }
    }
}
