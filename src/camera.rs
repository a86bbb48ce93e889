//! Camera
//!
//! A viewport rectangle placed in world space, and the transforms between
//! world, camera and normalized device coordinates (the standard square).

use crate::affine::{Affine, Point, Vector, rot, scale_xy};

/// World space viewport centered at `center` with orthonormal `right` and
/// `up` vectors
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Camera {
    center: Point,
    right: Vector,
    up: Vector,
    width: f64,
    height: f64,
}

impl Default for Camera {
    /// The standard square, centered at the origin with width and height 2
    fn default() -> Self {
        Self { center: Point::origin(),
               right: Vector::new(1.0, 0.0),
               up: Vector::new(0.0, 1.0),
               width: 2.0,
               height: 2.0,
        }
    }
}

impl Camera {
    /// Create a camera centered at `center` looking along `up`
    ///
    /// `up` is normalized; `right` is `up` rotated 90 degrees clockwise
    pub fn new(center: Point, up: Vector, width: f64, height: f64) -> Self {
        let mut up = up;
        up.normalize();
        Self { center, right: Self::right_of(up), up, width, height }
    }
    fn right_of(up: Vector) -> Vector {
        Vector::new(up.y, -up.x)
    }
    /// World position of the viewport center
    pub fn center(&self) -> Point {
        self.center
    }
    /// Unit vector along the viewport x axis
    pub fn right(&self) -> Vector {
        self.right
    }
    /// Unit vector along the viewport y axis
    pub fn up(&self) -> Vector {
        self.up
    }
    /// Viewport width in world units
    pub fn width(&self) -> f64 {
        self.width
    }
    /// Viewport height in world units
    pub fn height(&self) -> f64 {
        self.height
    }
    /// Move `d` world units along the right vector
    pub fn move_right(&mut self, d: f64) -> &mut Self {
        self.center = self.center + d * self.right;
        self
    }
    /// Move `d` world units along the up vector
    pub fn move_up(&mut self, d: f64) -> &mut Self {
        self.center = self.center + d * self.up;
        self
    }
    /// Rotate `angle` radians counterclockwise about the center
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.up = rot(angle) * self.up;
        self.right = Self::right_of(self.up);
        self
    }
    /// Scale the viewport by `f`, keeping the aspect ratio
    pub fn zoom(&mut self, f: f64) -> &mut Self {
        self.width *= f;
        self.height *= f;
        self
    }
    /// Camera space to world space
    pub fn camera_to_world(&self) -> Affine {
        Affine::new(self.right, self.up, self.center)
    }
    /// World space to camera space
    ///
    ///     use softraster::{Camera, Point, Vector};
    ///
    ///     let mut cam = Camera::new(Point::new(4.0, 1.0), Vector::new(1.0, 1.0), 8.0, 6.0);
    ///     cam.rotate(0.3).move_right(2.0);
    ///     let p = Point::new(-7.0, 2.5);
    ///     let q = cam.camera_to_world() * (cam.world_to_camera() * p);
    ///     assert!(q.near(&p));
    ///     assert!((cam.world_to_camera() * cam.center()).near(&Point::origin()));
    ///
    pub fn world_to_camera(&self) -> Affine {
        self.camera_to_world().inverse()
    }
    /// Camera space viewport to the standard square
    pub fn camera_to_ndc(&self) -> Affine {
        scale_xy(2.0 / self.width, 2.0 / self.height)
    }
    /// Standard square to the camera space viewport
    pub fn ndc_to_camera(&self) -> Affine {
        scale_xy(self.width / 2.0, self.height / 2.0)
    }
}
