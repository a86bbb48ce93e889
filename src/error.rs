//! Errors

use std::fmt;

/// Errors from constructing surfaces and reading or writing frames
#[derive(Debug)]
pub enum Error {
    /// Row stride is smaller than `3 * width` bytes
    InvalidStride { stride: usize, width: usize },
    /// Pixel buffer cannot hold `height` rows of `stride` bytes
    BufferTooSmall { len: usize, required: usize },
    /// Failure encoding, decoding or accessing an image file
    #[cfg(feature = "image-io")]
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStride { stride, width } =>
                write!(f, "stride of {} bytes is too small for {} rgb pixels", stride, width),
            Error::BufferTooSmall { len, required } =>
                write!(f, "pixel buffer holds {} bytes, {} required", len, required),
            #[cfg(feature = "image-io")]
            Error::Image(err) => write!(f, "image: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "image-io")]
            Error::Image(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "image-io")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Error {
        Error::Image(err)
    }
}

/// Result with the crate [Error](enum.Error.html)
pub type Result<T> = std::result::Result<T, Error>;
