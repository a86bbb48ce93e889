//! Homogeneous Coordinates and Affine Transformations
//!
//! Points, vectors and 3x3 affine matrices over `(x, y, w)` triples.
//! Points carry `w = 1` and vectors `w = 0`, so a single matrix product
//! translates points while leaving vectors untouched.

use std::ops::{Add, Sub, Neg, Mul, Index, IndexMut};

/// Absolute tolerance for approximate comparisons
pub const EPSILON : f64 = 1e-5;

/// Homogeneous three component vector
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Hcoords {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl Hcoords {
    /// Create a new triple `[x, y, w]`
    pub fn new(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }
    /// Returns true if `a` and `b` are within [EPSILON](constant.EPSILON.html)
    pub fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }
    /// Componentwise approximate equality
    pub fn near_to(&self, other: &Hcoords) -> bool {
        Self::near(self.x, other.x) &&
            Self::near(self.y, other.y) &&
            Self::near(self.w, other.w)
    }
    /// Full three component dot product
    pub fn dot3(&self, other: &Hcoords) -> f64 {
        self.x * other.x + self.y * other.y + self.w * other.w
    }
}

impl Index<usize> for Hcoords {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.w,
            _ => panic!("hcoords index {} out of range", i),
        }
    }
}
impl IndexMut<usize> for Hcoords {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.w,
            _ => panic!("hcoords index {} out of range", i),
        }
    }
}

impl Add for Hcoords {
    type Output = Hcoords;
    fn add(self, v: Hcoords) -> Hcoords {
        Hcoords::new(self.x + v.x, self.y + v.y, self.w + v.w)
    }
}
impl Sub for Hcoords {
    type Output = Hcoords;
    fn sub(self, v: Hcoords) -> Hcoords {
        Hcoords::new(self.x - v.x, self.y - v.y, self.w - v.w)
    }
}
impl Neg for Hcoords {
    type Output = Hcoords;
    fn neg(self) -> Hcoords {
        Hcoords::new(-self.x, -self.y, -self.w)
    }
}
impl Mul<Hcoords> for f64 {
    type Output = Hcoords;
    fn mul(self, v: Hcoords) -> Hcoords {
        Hcoords::new(self * v.x, self * v.y, self * v.w)
    }
}

/// Point in two dimensions, `w = 1`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Origin (0,0)
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
    /// Approximate equality
    pub fn near(&self, other: &Point) -> bool {
        Hcoords::near(self.x, other.x) && Hcoords::near(self.y, other.y)
    }
}
impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Vector in two dimensions, `w = 0`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Create a new Vector
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Length of the vector
    pub fn length(&self) -> f64 {
        abs(self)
    }
    /// Scale to unit length in place
    ///
    /// Returns false, leaving the components untouched, for the zero vector
    ///
    ///     use softraster::Vector;
    ///
    ///     let mut v = Vector::new(3.0, 4.0);
    ///     assert!(v.normalize());
    ///     assert!((v.x - 0.6).abs() < 1e-12);
    ///
    ///     let mut z = Vector::new(0.0, 0.0);
    ///     assert!(! z.normalize());
    ///     assert_eq!(z, Vector::new(0.0, 0.0));
    ///
    pub fn normalize(&mut self) -> bool {
        let n = self.length();
        if n == 0.0 {
            return false;
        }
        self.x /= n;
        self.y /= n;
        true
    }
    /// Approximate equality
    pub fn near(&self, other: &Vector) -> bool {
        Hcoords::near(self.x, other.x) && Hcoords::near(self.y, other.y)
    }
}

impl From<Point> for Hcoords {
    fn from(p: Point) -> Hcoords {
        Hcoords::new(p.x, p.y, 1.0)
    }
}
impl From<Vector> for Hcoords {
    fn from(v: Vector) -> Hcoords {
        Hcoords::new(v.x, v.y, 0.0)
    }
}
impl From<Hcoords> for Point {
    /// Panics if `w` is not near 1
    fn from(h: Hcoords) -> Point {
        assert!(Hcoords::near(h.w, 1.0), "point requires w = 1, got {}", h.w);
        Point::new(h.x, h.y)
    }
}
impl From<Hcoords> for Vector {
    /// Panics if `w` is not near 0
    fn from(h: Hcoords) -> Vector {
        assert!(Hcoords::near(h.w, 0.0), "vector requires w = 0, got {}", h.w);
        Vector::new(h.x, h.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, p: Point) -> Vector {
        Vector::new(self.x - p.x, self.y - p.y)
    }
}
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}
impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, v: Vector) -> Point {
        Point::new(self.x - v.x, self.y - v.y)
    }
}
impl Add for Vector {
    type Output = Vector;
    fn add(self, v: Vector) -> Vector {
        Vector::new(self.x + v.x, self.y + v.y)
    }
}
impl Sub for Vector {
    type Output = Vector;
    fn sub(self, v: Vector) -> Vector {
        Vector::new(self.x - v.x, self.y - v.y)
    }
}
impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, v: Vector) -> Vector {
        Vector::new(self * v.x, self * v.y)
    }
}

/// Dot product of two vectors
pub fn dot(u: &Vector, v: &Vector) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Length of a vector
pub fn abs(v: &Vector) -> f64 {
    dot(v, v).sqrt()
}

/// Affine Transformation as a 3x3 matrix stored by rows
///
/// Columns 0 and 1 are the images of the basis vectors, column 2 is the
/// image of the origin.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Affine {
    pub row: [Hcoords; 3],
}

impl Default for Affine {
    /// Zero linear part and zero translation
    ///
    /// This is scaling by 0 about the origin, not the zero matrix:
    /// the lower right entry is 1.
    fn default() -> Self {
        let mut row = [Hcoords::default(); 3];
        row[2].w = 1.0;
        Self { row }
    }
}

impl Affine {
    /// Create a transform from its columns
    pub fn new(lx: Vector, ly: Vector, disp: Point) -> Self {
        Self { row: [ Hcoords::new(lx.x, ly.x, disp.x),
                      Hcoords::new(lx.y, ly.y, disp.y),
                      Hcoords::new(0.0,  0.0,  1.0) ] }
    }
    /// Identity transform
    pub fn identity() -> Self {
        scale(1.0)
    }
    /// Image of the x basis vector
    pub fn lx(&self) -> Vector {
        Vector::new(self.row[0].x, self.row[1].x)
    }
    /// Image of the y basis vector
    pub fn ly(&self) -> Vector {
        Vector::new(self.row[0].y, self.row[1].y)
    }
    /// Image of the origin
    pub fn disp(&self) -> Point {
        Point::new(self.row[0].w, self.row[1].w)
    }
    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.row[0].x * self.row[1].y - self.row[0].y * self.row[1].x
    }
    /// Inverse transform, `A.inverse() * A` is the identity
    ///
    /// Panics if the linear part is singular, i.e. the determinant vanishes
    /// relative to the size of its entries
    ///
    ///     use softraster::{Affine, Point, rot, trans, scale_xy, Vector};
    ///
    ///     let a = trans(Vector::new(3.0, -2.0)) * rot(0.7) * scale_xy(2.0, 0.5);
    ///     assert!((a.inverse() * a).near(&Affine::identity()));
    ///     let p = Point::new(1.5, 8.0);
    ///     assert!((a.inverse() * (a * p)).near(&p));
    ///
    pub fn inverse(&self) -> Affine {
        let det = self.determinant();
        let (a, b) = (self.row[0].x, self.row[0].y);
        let (c, e) = (self.row[1].x, self.row[1].y);
        let size = (a.abs() + b.abs()) * (c.abs() + e.abs());
        assert!(det.is_finite() && det.abs() > f64::EPSILON * size,
                "inverse of singular affine transform");
        let d = 1.0 / det;
        let lx = Vector::new( e * d, -c * d);
        let ly = Vector::new(-b * d,  a * d);
        let linear = Affine::new(lx, ly, Point::origin());
        // Undo the translation after the inverted linear part
        let t = linear * Vector::new(self.row[0].w, self.row[1].w);
        Affine::new(lx, ly, Point::origin() - t)
    }
    /// Componentwise approximate equality
    pub fn near(&self, other: &Affine) -> bool {
        self.row.iter().zip(other.row.iter()).all(|(a,b)| a.near_to(b))
    }
}

impl Index<usize> for Affine {
    type Output = Hcoords;
    fn index(&self, i: usize) -> &Hcoords {
        &self.row[i]
    }
}
impl IndexMut<usize> for Affine {
    fn index_mut(&mut self, i: usize) -> &mut Hcoords {
        &mut self.row[i]
    }
}

impl Mul<Hcoords> for Affine {
    type Output = Hcoords;
    fn mul(self, v: Hcoords) -> Hcoords {
        Hcoords::new(self.row[0].dot3(&v),
                     self.row[1].dot3(&v),
                     self.row[2].dot3(&v))
    }
}
impl Mul<Point> for Affine {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        Point::from(self * Hcoords::from(p))
    }
}
impl Mul<Vector> for Affine {
    type Output = Vector;
    fn mul(self, v: Vector) -> Vector {
        Vector::from(self * Hcoords::from(v))
    }
}
impl Mul<Affine> for Affine {
    type Output = Affine;
    /// Composition, `self * b` applies `b` first
    fn mul(self, b: Affine) -> Affine {
        let mut out = Affine::default();
        for i in 0 .. 3 {
            for j in 0 .. 3 {
                out[i][j] = (0 .. 3).map(|k| self[i][k] * b[k][j]).sum::<f64>();
            }
        }
        out
    }
}

/// Rotation by `angle` radians about the origin
pub fn rot(angle: f64) -> Affine {
    let (sa, ca) = angle.sin_cos();
    Affine::new(Vector::new(ca, sa), Vector::new(-sa, ca), Point::origin())
}

/// Translation by `v`
pub fn trans(v: Vector) -> Affine {
    Affine::new(Vector::new(1.0, 0.0), Vector::new(0.0, 1.0), Point::new(v.x, v.y))
}

/// Uniform scaling by `k` about the origin
pub fn scale(k: f64) -> Affine {
    scale_xy(k, k)
}

/// Non-uniform scaling by `kx` and `ky` about the origin
pub fn scale_xy(kx: f64, ky: f64) -> Affine {
    Affine::new(Vector::new(kx, 0.0), Vector::new(0.0, ky), Point::origin())
}
