use super::core::RGBAIm;
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// PNG I/O
// -----------------------------------------------------------------------------
impl RGBAIm {
    /// Packs to a tightly-strided `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> ImageResult<image::RgbaImage> {
        let mut packed = Vec::with_capacity(self.w * self.h * 4);
        for y in 0..self.h {
            let row0 = y * self.s;
            packed.extend_from_slice(&self.arr[row0..row0 + self.w * 4]);
        }
        image::RgbaImage::from_raw(self.w as u32, self.h as u32, packed).ok_or_else(dim_mismatch_err)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)
    }
}

// Tests
// -----------------------------------------------------------------------------
