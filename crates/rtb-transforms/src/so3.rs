use std::f64::consts::PI;

use glam::DMat3;

use crate::utils::{self, near_zero};
use crate::{Mat33, TransformError, Vec3};

/// Distance of `(trace(R) - 1) / 2` from -1 under which a rotation is taken as a half turn.
///
/// The trace of a half turn built in floating point lands a few ulps above -1.
const HALF_TURN_TOL: f64 = 4.0 * f64::EPSILON;

/// Convert a 3-vector to its so(3) skew-symmetric matrix (hat operator).
///
/// The result `[v]` satisfies `[v] * w = v x w` for any vector `w`.
///
/// Example:
///
/// ```
/// use rtb_transforms::so3::vec_to_so3;
///
/// let so3 = vec_to_so3(&[1.0, 2.0, 3.0]);
/// assert_eq!(so3, [[0.0, -3.0, 2.0], [3.0, 0.0, -1.0], [-2.0, 1.0, 0.0]]);
/// ```
pub fn vec_to_so3(vec: &Vec3) -> Mat33 {
    [
        [0.0, -vec[2], vec[1]],
        [vec[2], 0.0, -vec[0]],
        [-vec[1], vec[0], 0.0],
    ]
}

/// Convert an so(3) matrix back to its 3-vector (vee operator).
///
/// Only the entries `(2, 1)`, `(0, 2)` and `(1, 0)` are read; skew-symmetry is not checked.
pub fn so3_to_vec(so3: &Mat33) -> Vec3 {
    [so3[2][1], so3[0][2], so3[1][0]]
}

/// Split exponential coordinates of a rotation into a unit axis and an angle.
///
/// # Arguments
///
/// * `expc3` - The exponential coordinates `axis * angle`.
///
/// # Returns
///
/// The unit rotation axis and the rotation angle in radians.
///
/// # Errors
///
/// Returns [`TransformError::ZeroNorm`] for the zero vector, which has no axis.
///
/// Example:
///
/// ```
/// use rtb_transforms::so3::axis_ang_3;
///
/// let (axis, angle) = axis_ang_3(&[0.0, 0.0, 2.0]).unwrap();
/// assert_eq!(axis, [0.0, 0.0, 1.0]);
/// assert_eq!(angle, 2.0);
/// ```
pub fn axis_ang_3(expc3: &Vec3) -> Result<(Vec3, f64), TransformError> {
    Ok((utils::normalize(expc3)?, utils::norm3(expc3)))
}

/// Compute the matrix exponential of an so(3) matrix.
///
/// Uses Rodrigues' formula `R = I + sin(t) * W + (1 - cos(t)) * W^2` with `t` the rotation
/// angle and `W` the unit skew-symmetric matrix. Rotations with a near-zero angle map to the
/// identity.
///
/// PRECONDITION: `so3mat` is skew-symmetric.
///
/// # Arguments
///
/// * `so3mat` - The so(3) matrix.
///
/// # Returns
///
/// The rotation matrix.
///
/// Example:
///
/// ```
/// use rtb_transforms::so3::matrix_exp_3;
///
/// let rotation = matrix_exp_3(&[[0.0; 3]; 3]);
/// assert_eq!(rotation, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn matrix_exp_3(so3mat: &Mat33) -> Mat33 {
    let omgtheta = so3_to_vec(so3mat);
    let theta = utils::norm3(&omgtheta);
    if near_zero(theta) {
        log::trace!("rotation angle {theta:e} is near zero, returning identity");
        return utils::dmat3_to_array33(&DMat3::IDENTITY);
    }

    let omgmat = utils::array33_to_dmat3(so3mat) * (1.0 / theta);
    let (s, c) = theta.sin_cos();
    let rotation = DMat3::IDENTITY + omgmat * s + (omgmat * omgmat) * (1.0 - c);

    utils::dmat3_to_array33(&rotation)
}

/// Compute the matrix logarithm of a rotation matrix.
///
/// Inverse of [`matrix_exp_3`]. The identity maps to the zero matrix. Rotations by pi, up to a
/// few ulps of rounding in the trace, are resolved from a diagonal entry that is not near -1 so
/// that the axis never divides by a near-zero value.
///
/// PRECONDITION: `rotation` is orthonormal with determinant +1.
///
/// # Arguments
///
/// * `rotation` - The rotation matrix.
///
/// # Returns
///
/// The so(3) matrix `[axis] * angle` with the angle in `[0, pi]`.
///
/// Example:
///
/// ```
/// use rtb_transforms::so3::matrix_log_3;
///
/// let rotation = [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
/// let so3 = matrix_log_3(&rotation);
/// assert!((so3[1][0] - 1.20919958).abs() < 1e-6);
/// ```
pub fn matrix_log_3(rotation: &Mat33) -> Mat33 {
    let r = rotation;
    let acosinput = (r[0][0] + r[1][1] + r[2][2] - 1.0) / 2.0;

    if acosinput >= 1.0 {
        log::trace!("rotation is the identity, returning zero");
        return [[0.0; 3]; 3];
    }

    if 1.0 + acosinput <= HALF_TURN_TOL {
        log::trace!("rotation angle is pi, selecting axis from the diagonal");
        let omg = if !near_zero(1.0 + r[2][2]) {
            let scale = 1.0 / (2.0 * (1.0 + r[2][2])).sqrt();
            [scale * r[0][2], scale * r[1][2], scale * (1.0 + r[2][2])]
        } else if !near_zero(1.0 + r[1][1]) {
            let scale = 1.0 / (2.0 * (1.0 + r[1][1])).sqrt();
            [scale * r[0][1], scale * (1.0 + r[1][1]), scale * r[2][1]]
        } else {
            let scale = 1.0 / (2.0 * (1.0 + r[0][0])).sqrt();
            [scale * (1.0 + r[0][0]), scale * r[1][0], scale * r[2][0]]
        };
        return vec_to_so3(&[PI * omg[0], PI * omg[1], PI * omg[2]]);
    }

    let theta = acosinput.acos();
    let mat = utils::array33_to_dmat3(r);
    let so3 = (mat - mat.transpose()) * (theta / 2.0 / theta.sin());

    utils::dmat3_to_array33(&so3)
}
