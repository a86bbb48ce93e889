// How does this work
//    geometry (world)
//      to_device = viewport.world_to_device(camera)  -- Affine products
//      p = to_device * p
//    clip = viewport.clip()
//      clip.segment(p, q)     -- one HalfPlane interval per edge
//      clip.polygon(verts)    -- Sutherland Hodgman sweep
//    ras = Raster::new( data, w, h, stride )
//      draw_line()            -- dominant axis stepping
//      fill_convex()          -- fan of fill_triangle()
//        goto_point, increment_x/y, write_pixel
//    Output: rgb bytes in the caller's buffer
//      export::write_file()

pub mod affine;
pub mod half_plane;
pub mod clip;
pub mod color;
pub mod surface;
pub mod draw;
pub mod camera;
pub mod viewport;
pub mod mesh;
pub mod error;
#[cfg(feature = "image-io")]
pub mod export;

pub use affine::*;
pub use half_plane::*;
pub use clip::*;
pub use color::*;
pub use surface::*;
pub use draw::*;
pub use camera::*;
pub use viewport::*;
pub use mesh::*;
pub use error::Error;
