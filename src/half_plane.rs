//! Half-planes and Parametric Intervals
//!
//! A half-plane is a linear functional over homogeneous coordinates.
//! A point `Q` is inside when `h.Q < 0`, on the boundary when `h.Q == 0`
//! and outside otherwise. Boundary points are treated as outside.

use crate::affine::{Hcoords, Point};

/// Half-plane stored as a homogeneous triple
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct HalfPlane(pub Hcoords);

/// Sub-segment `P + t (Q - P)` for `t` in `[begin, end]`
///
/// The interval is empty when `begin > end`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Interval {
    pub begin: f64,
    pub end: f64,
}

impl Interval {
    /// Create a new Interval
    pub fn new(begin: f64, end: f64) -> Self {
        Self { begin, end }
    }
    /// The whole segment, `[0,1]`
    pub fn full() -> Self {
        Self::new(0.0, 1.0)
    }
    /// No intersection, `[1,0]`
    pub fn empty() -> Self {
        Self::new(1.0, 0.0)
    }
    /// Check if the interval contains no parameters
    pub fn is_empty(&self) -> bool {
        self.begin > self.end
    }
    /// End points of the sub-segment of `p` to `q`
    pub fn endpoints(&self, p: Point, q: Point) -> (Point, Point) {
        let d = q - p;
        (p + self.begin * d, p + self.end * d)
    }
}

impl HalfPlane {
    /// Half-plane bounded by the line through `a` and `b` with `inside`
    /// in its interior
    ///
    /// `a`, `b` and `inside` must not be collinear
    ///
    ///     use softraster::{HalfPlane, Point};
    ///
    ///     let (a, b) = (Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    ///     let h = HalfPlane::new(a, b, Point::new(0.0, 5.0));
    ///     assert_eq!(h.dot(&a), 0.0);
    ///     assert_eq!(h.dot(&b), 0.0);
    ///     assert!(h.dot(&Point::new(3.0, 1.0)) < 0.0);
    ///     assert!(h.dot(&Point::new(3.0, -1.0)) > 0.0);
    ///
    pub fn new(a: Point, b: Point, inside: Point) -> Self {
        let mut h = Hcoords::new(a.y - b.y, b.x - a.x, 0.0);
        h.w = -h.dot3(&Hcoords::from(a));
        let h = HalfPlane(h);
        if h.dot(&inside) < 0.0 {
            h
        } else {
            HalfPlane(-h.0)
        }
    }
    /// Value of the functional at `q`
    pub fn dot(&self, q: &Point) -> f64 {
        self.0.x * q.x + self.0.y * q.y + self.0.w
    }
    /// Strictly inside test
    pub fn contains(&self, q: &Point) -> bool {
        self.dot(q) < 0.0
    }
    /// Parameter interval of the segment `p` to `q` lying inside
    ///
    ///     use softraster::{HalfPlane, Point};
    ///
    ///     // Inside is x < 1
    ///     let h = HalfPlane::new(Point::new(1.0, 0.0),
    ///                            Point::new(1.0, 1.0),
    ///                            Point::new(0.0, 0.0));
    ///     let (p, q) = (Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    ///     let i = h.clip_segment(p, q);
    ///     assert_eq!((i.begin, i.end), (0.0, 0.25));
    ///     let i = h.clip_segment(q, p);
    ///     assert_eq!((i.begin, i.end), (0.75, 1.0));
    ///
    pub fn clip_segment(&self, p: Point, q: Point) -> Interval {
        let dp = self.dot(&p);
        let dq = self.dot(&q);
        let crossing = || dp / (dp - dq);
        match (dp < 0.0, dq < 0.0) {
            (true,  true)  => Interval::full(),
            (false, false) => Interval::empty(),
            (true,  false) => Interval::new(0.0, crossing()),
            (false, true)  => Interval::new(crossing(), 1.0),
        }
    }
}
