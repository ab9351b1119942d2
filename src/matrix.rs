use crate::error::TransformError;

/// Dense row-major matrix of arbitrary shape.
///
/// Only the checked product lives here; the fixed-size 3x3 affine type in
/// `mat3` routes `compose` through it so the shape guard stays in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub arr: Vec<f64>, // row-major, len = rows * cols
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            arr: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut arr = Vec::with_capacity(n_rows * n_cols);
        for r in rows {
            let r = r.as_ref();
            assert_eq!(r.len(), n_cols, "all rows must have equal length");
            arr.extend_from_slice(r);
        }
        Self {
            rows: n_rows,
            cols: n_cols,
            arr,
        }
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.arr[r * self.cols + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        self.arr[r * self.cols + c] = v;
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, TransformError> {
        if self.cols != rhs.rows {
            return Err(TransformError::DimensionMismatch {
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
            });
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.get(i, k) * rhs.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }
}
