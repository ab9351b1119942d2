#[derive(Debug, Clone, PartialEq)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy, const N_CH: usize> Im<T, N_CH> {
    /// New image with every pixel set to `px`.
    pub fn filled(w: usize, h: usize, px: [T; N_CH]) -> Self {
        let s = w * N_CH;
        let mut arr = Vec::with_capacity(s * h);
        for _ in 0..w * h {
            arr.extend_from_slice(&px);
        }
        Self { w, h, s, arr }
    }

    pub fn fill_px(&mut self, px: [T; N_CH]) {
        for chunk in self.arr.chunks_exact_mut(N_CH) {
            chunk.copy_from_slice(&px);
        }
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    /// Returns the pixel at `(x, y)` or `None` when out of bounds.
    pub fn px(&self, x: i64, y: i64) -> Option<[T; N_CH]> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let base = y as usize * self.s + x as usize * N_CH;
        let mut out = [self.arr[base]; N_CH];
        out.copy_from_slice(&self.arr[base..base + N_CH]);
        Some(out)
    }

    /// Writes the pixel at `(x, y)`. Out of bounds writes are dropped and
    /// reported as `false`.
    pub fn set_px(&mut self, x: i64, y: i64, px: [T; N_CH]) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let base = y as usize * self.s + x as usize * N_CH;
        self.arr[base..base + N_CH].copy_from_slice(&px);
        true
    }
}

pub type RGBAIm = Im<u8, 4>;
