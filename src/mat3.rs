use crate::error::TransformError;
use crate::matrix::Matrix;
use serde::Serialize;
use std::ops::Mul;

/// Homogeneous 2D point `(x, y, w)`.
///
/// `w` is 1 on construction and is forced back to 1 by [`apply`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl Vec3 {
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.w]
    }
}

/// Returns `(x, y, 1)`. Any finite or non-finite input is accepted.
pub fn make_vector(x: f64, y: f64) -> Vec3 {
    Vec3 { x, y, w: 1.0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mat3 {
    // Row-major 3x3 matrix.
    m: [[f64; 3]; 3],
}

impl Mat3 {
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]],
        }
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Counter-clockwise rotation in a y-up frame; `angle_deg` is in degrees.
    pub fn rotation(angle_deg: f64) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Not part of either drawing pipeline.
    pub const fn shear(shx: f64, shy: f64) -> Self {
        Self {
            m: [[1.0, shx, 0.0], [shy, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.m[r][c]
    }

    /// Applies this transform to a homogeneous vector.
    ///
    /// The third component of the result is always 1, whatever the bottom row
    /// of the matrix computes. There is no perspective division.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let p = v.to_array();
        let mut out = [0.0; 3];
        for (i, row) in self.m.iter().enumerate() {
            out[i] = row[0] * p[0] + row[1] * p[1] + row[2] * p[2];
        }
        Vec3 {
            x: out[0],
            y: out[1],
            w: 1.0,
        }
    }

    /// Checked product `self * rhs` through the general matrix path.
    pub fn compose(&self, rhs: &Mat3) -> Result<Mat3, TransformError> {
        let out = Matrix::from(*self).mul(&Matrix::from(*rhs))?;
        Mat3::try_from(out)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Mat3 { m: out }
    }
}

impl From<Mat3> for Matrix {
    fn from(m: Mat3) -> Self {
        Matrix::from_rows(&m.m)
    }
}

impl TryFrom<Matrix> for Mat3 {
    type Error = TransformError;

    fn try_from(src: Matrix) -> Result<Self, Self::Error> {
        if src.rows != 3 || src.cols != 3 {
            // A non-3x3 result can only come from operands that were not 3x3.
            return Err(TransformError::DimensionMismatch {
                lhs_cols: src.cols,
                rhs_rows: src.rows,
            });
        }
        let mut m = [[0.0; 3]; 3];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = src.get(r, c);
            }
        }
        Ok(Mat3 { m })
    }
}

/// `m * v` with the third component forced to 1.
pub fn apply(m: &Mat3, v: Vec3) -> Vec3 {
    m.apply(v)
}

/// `a * b`. Order matters.
pub fn compose(a: &Mat3, b: &Mat3) -> Result<Mat3, TransformError> {
    a.compose(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert_eq!(a.w, b.w);
    }

    #[test]
    fn constructors_have_affine_bottom_row() {
        let all = [
            Mat3::identity(),
            Mat3::translation(73.0, 21.0),
            Mat3::scale(3.0, 5.0),
            Mat3::rotation(60.0),
            Mat3::shear(1.0, 0.0),
        ];
        for m in all {
            assert_eq!(m.rows()[2], [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn make_vector_sets_w_to_one() {
        assert_eq!(make_vector(21.0, 37.0).to_array(), [21.0, 37.0, 1.0]);
    }

    #[test]
    fn translation_adds_offsets() {
        let v = apply(&Mat3::translation(73.0, -21.0), make_vector(10.0, 20.0));
        assert_eq!(v, make_vector(83.0, -1.0));
    }

    #[test]
    fn scale_multiplies_components() {
        let v = apply(&Mat3::scale(3.0, 5.0), make_vector(21.0, 37.0));
        assert_eq!(v, make_vector(63.0, 185.0));
    }

    #[test]
    fn rotation_zero_is_exact_identity_and_full_turn_is_close() {
        let v = make_vector(100.0, -42.5);
        assert_eq!(apply(&Mat3::rotation(0.0), v), v);
        assert_vec_near(apply(&Mat3::rotation(360.0), v), v);
    }

    #[test]
    fn rotation_uses_degrees() {
        let v = apply(&Mat3::rotation(90.0), make_vector(1.0, 0.0));
        assert_vec_near(v, make_vector(0.0, 1.0));
    }

    #[test]
    fn shear_matches_layout() {
        let m = Mat3::shear(0.5, -0.25);
        assert_eq!(
            *m.rows(),
            [[1.0, 0.5, 0.0], [-0.25, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn apply_forces_w_even_with_projective_bottom_row() {
        let m = Mat3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5, 3.0]]);
        let v = apply(&m, make_vector(4.0, 6.0));
        // No perspective division: x and y pass through, w is overwritten.
        assert_eq!(v.to_array(), [4.0, 6.0, 1.0]);
    }

    #[test]
    fn compose_is_not_commutative() {
        let a = compose(
            &compose(&Mat3::translation(30.0, 50.0), &Mat3::rotation(45.0)).unwrap(),
            &Mat3::scale(1.5, 1.5),
        )
        .unwrap();
        let b = compose(
            &compose(&Mat3::scale(1.5, 1.5), &Mat3::translation(50.0, 30.0)).unwrap(),
            &Mat3::rotation(-45.0),
        )
        .unwrap();
        assert_ne!(a, b);

        let p = make_vector(100.0, 100.0);
        let pa = apply(&a, p);
        let pb = apply(&b, p);
        assert_vec_near(pa, make_vector(30.0, 262.132_034_355_964_27));
        assert_vec_near(pb, make_vector(287.132_034_355_964_27, 45.0));
    }

    #[test]
    fn mat3_serializes_as_bare_rows() {
        let json = serde_json::to_string(&Mat3::translation(73.0, 21.0)).unwrap();
        assert_eq!(json, "[[1.0,0.0,73.0],[0.0,1.0,21.0],[0.0,0.0,1.0]]");
    }

    #[test]
    fn compose_agrees_with_mul_operator() {
        let a = Mat3::translation(-12.0, 7.0);
        let b = Mat3::rotation(33.0);
        assert_eq!(compose(&a, &b).unwrap(), a * b);
    }

    proptest! {
        #[test]
        fn identity_apply_is_noop(x in -1.0e6..1.0e6f64, y in -1.0e6..1.0e6f64) {
            let v = make_vector(x, y);
            prop_assert_eq!(apply(&Mat3::identity(), v), v);
        }

        #[test]
        fn identity_is_neutral_for_compose(cells in proptest::array::uniform9(-1.0e3..1.0e3f64)) {
            let m = Mat3::from_rows([
                [cells[0], cells[1], cells[2]],
                [cells[3], cells[4], cells[5]],
                [cells[6], cells[7], cells[8]],
            ]);
            prop_assert_eq!(compose(&Mat3::identity(), &m).unwrap(), m);
            prop_assert_eq!(compose(&m, &Mat3::identity()).unwrap(), m);
        }

        #[test]
        fn translation_law(x in -1.0e3..1.0e3f64, y in -1.0e3..1.0e3f64,
                           tx in -100.0..100.0f64, ty in -100.0..100.0f64) {
            let v = apply(&Mat3::translation(tx, ty), make_vector(x, y));
            prop_assert_eq!(v, make_vector(x + tx, y + ty));
        }
    }
}
