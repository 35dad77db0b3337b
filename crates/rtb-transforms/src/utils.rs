use glam::DMat3;

use crate::{Mat33, TransformError, Vec3};

/// Threshold under which a scalar is treated as zero.
///
/// Every singularity test in the crate goes through this value.
pub const NEAR_ZERO_TOL: f64 = 1e-6;

/// Check whether a scalar is small enough to be treated as zero.
///
/// Example:
///
/// ```
/// use rtb_transforms::utils::near_zero;
///
/// assert!(near_zero(-1e-7));
/// assert!(!near_zero(1e-3));
/// ```
#[inline]
pub fn near_zero(x: f64) -> bool {
    x.abs() < NEAR_ZERO_TOL
}

/// Euclidean norm of a 3-vector.
///
/// Computed with `hypot` so that large finite components do not overflow.
#[inline]
pub fn norm3(vec: &Vec3) -> f64 {
    vec[0].hypot(vec[1]).hypot(vec[2])
}

/// Create a glam matrix from a row-major 3x3 array.
#[inline]
pub(crate) fn array33_to_dmat3(array: &Mat33) -> DMat3 {
    // glam stores columns
    DMat3::from_cols_array_2d(array).transpose()
}

/// Create a row-major 3x3 array from a glam matrix.
#[inline]
pub(crate) fn dmat3_to_array33(mat: &DMat3) -> Mat33 {
    mat.transpose().to_cols_array_2d()
}

/// Normalize a 3-vector to unit length.
///
/// # Arguments
///
/// * `vec` - The vector to normalize.
///
/// # Returns
///
/// A unit vector pointing in the same direction as `vec`.
///
/// # Errors
///
/// Returns [`TransformError::ZeroNorm`] if `vec` has zero length.
///
/// Example:
///
/// ```
/// use rtb_transforms::utils::normalize;
///
/// let unit = normalize(&[0.0, 3.0, 4.0]).unwrap();
/// assert_eq!(unit, [0.0, 0.6, 0.8]);
/// ```
pub fn normalize(vec: &Vec3) -> Result<Vec3, TransformError> {
    let norm = norm3(vec);
    if norm == 0.0 {
        log::debug!("refusing to normalize zero vector {vec:?}");
        return Err(TransformError::ZeroNorm);
    }
    Ok([vec[0] / norm, vec[1] / norm, vec[2] / norm])
}
