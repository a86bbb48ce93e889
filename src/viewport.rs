//! Device Viewport
//!
//! Maps normalized device coordinates onto a frame of pixels and clips
//! geometry to the visible pixel centers.

use crate::affine::{Affine, Point, Vector, scale_xy, trans};
use crate::camera::Camera;
use crate::clip::Clip;

/// Frame of `width` x `height` pixels
#[derive(Debug,Clone)]
pub struct Viewport {
    width: usize,
    height: usize,
    ndc_to_dev: Affine,
    clip: Clip,
}

impl Viewport {
    /// Create a viewport for a `width` x `height` frame
    ///
    /// The standard square maps onto the pixel centers `(0,0)` to
    /// `(width-1, height-1)`. Both dimensions must be at least 2.
    ///
    ///     use softraster::{Point, Viewport};
    ///
    ///     let vp = Viewport::new(101, 51);
    ///     let m = vp.ndc_to_device();
    ///     assert!((m * Point::new(-1.0, -1.0)).near(&Point::new(0.0, 0.0)));
    ///     assert!((m * Point::new( 1.0,  1.0)).near(&Point::new(100.0, 50.0)));
    ///
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 1 && height > 1, "viewport of {}x{} has no area", width, height);
        let (w, h) = ((width - 1) as f64, (height - 1) as f64);
        let (sx, sy) = (0.5 * w, 0.5 * h);
        let ndc_to_dev = trans(Vector::new(sx, sy)) * scale_xy(sx, sy);
        let clip = Clip::new(&[ Point::new(0.0, 0.0),
                                Point::new(0.0,   h),
                                Point::new(  w,   h),
                                Point::new(  w, 0.0) ]);
        log::debug!("viewport {}x{}", width, height);
        Self { width, height, ndc_to_dev, clip }
    }
    /// Frame width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Frame height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Normalized device coordinates to pixels
    pub fn ndc_to_device(&self) -> Affine {
        self.ndc_to_dev
    }
    /// Region of the frame in device coordinates
    pub fn clip(&self) -> &Clip {
        &self.clip
    }
    /// World space to pixels as seen through `cam`
    pub fn world_to_device(&self, cam: &Camera) -> Affine {
        self.ndc_to_dev * cam.camera_to_ndc() * cam.world_to_camera()
    }
}
