use crate::im::RGBAIm;
use crate::mat3::Vec3;

pub const INK: [u8; 4] = [0, 0, 0, 255];

/// An RGBA raster plus a flag saying its pixels changed since the last upload.
#[derive(Debug, Clone)]
pub struct Canvas {
    im: RGBAIm,
    background: [u8; 4],
    dirty: bool,
}

impl Canvas {
    pub fn new(w: usize, h: usize, background: [u8; 4]) -> Self {
        Self {
            im: RGBAIm::filled(w, h, background),
            background,
            dirty: true,
        }
    }

    pub fn im(&self) -> &RGBAIm {
        &self.im
    }

    pub fn background(&self) -> [u8; 4] {
        self.background
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether an upload was pending and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn clear(&mut self) {
        self.im.fill_px(self.background);
        self.dirty = true;
    }
}

/// Paints `v` as one opaque black pixel at `(round(x), round(y))`.
///
/// Points that land outside the canvas, or are not finite, are dropped. The
/// canvas is flagged for upload either way.
pub fn paint(canvas: &mut Canvas, v: Vec3) {
    let (x, y) = (v.x.round(), v.y.round());
    let written = x.is_finite() && y.is_finite() && canvas.im.set_px(x as i64, y as i64, INK);
    if !written {
        log::trace!("paint ignored out of bounds point ({}, {})", v.x, v.y);
    }
    canvas.dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat3::make_vector;

    const BG: [u8; 4] = [240, 250, 240, 255];

    #[test]
    fn paint_rounds_to_nearest_pixel() {
        let mut canvas = Canvas::new(16, 16, BG);
        canvas.take_dirty();

        paint(&mut canvas, make_vector(3.4, 7.6));
        assert!(canvas.is_dirty());
        assert_eq!(canvas.im().px(3, 8), Some(INK));
        assert_eq!(canvas.im().px(3, 7), Some(BG));
    }

    #[test]
    fn paint_outside_is_a_no_op_on_pixels() {
        let mut canvas = Canvas::new(8, 8, BG);
        let before = canvas.im().clone();

        paint(&mut canvas, make_vector(-3.0, 2.0));
        paint(&mut canvas, make_vector(2.0, 8.0));
        paint(&mut canvas, make_vector(f64::NAN, 1.0));
        paint(&mut canvas, make_vector(f64::INFINITY, 1.0));

        assert_eq!(canvas.im(), &before);
    }

    #[test]
    fn negative_half_rounds_away_from_zero_and_is_dropped() {
        let mut canvas = Canvas::new(4, 4, BG);
        paint(&mut canvas, make_vector(-0.5, 0.0));
        assert!(canvas.im().arr.chunks_exact(4).all(|px| px == BG));
    }

    #[test]
    fn clear_restores_background() {
        let mut canvas = Canvas::new(4, 4, BG);
        paint(&mut canvas, make_vector(1.0, 1.0));
        canvas.take_dirty();

        canvas.clear();
        assert!(canvas.take_dirty());
        assert!(!canvas.is_dirty());
        assert_eq!(canvas.im().px(1, 1), Some(BG));
    }
}
