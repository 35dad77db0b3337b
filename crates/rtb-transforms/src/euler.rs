use glam::DMat3;

use crate::{utils, Mat33, Vec3};

/// Compute the rotation matrix from XYZ Euler angles.
///
/// The angles are rotations about the X, Y and Z axes and are composed as `R = Rz * Ry * Rx`.
///
/// # Arguments
///
/// * `euler` - The angles `[x, y, z]` in radians.
///
/// # Returns
///
/// The rotation matrix.
///
/// Example:
///
/// ```
/// use rtb_transforms::euler::euler_to_matrix;
///
/// let rotation = euler_to_matrix(&[0.0, 0.0, 0.0]);
/// assert_eq!(rotation, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn euler_to_matrix(euler: &Vec3) -> Mat33 {
    let mat_x = DMat3::from_rotation_x(euler[0]);
    let mat_y = DMat3::from_rotation_y(euler[1]);
    let mat_z = DMat3::from_rotation_z(euler[2]);

    utils::dmat3_to_array33(&(mat_z * (mat_y * mat_x)))
}

/// Recover XYZ Euler angles from a rotation matrix.
///
/// Inverse of [`euler_to_matrix`]. When the pitch is close to +-90 degrees (gimbal lock) the
/// roll and yaw are coupled; the yaw is then fixed to zero and the whole coupled rotation is
/// reported in the roll.
///
/// PRECONDITION: `matrix` is orthonormal with determinant +1.
///
/// # Arguments
///
/// * `matrix` - The rotation matrix.
///
/// # Returns
///
/// The angles `[x, y, z]` in radians.
///
/// Example:
///
/// ```
/// use rtb_transforms::euler::matrix_to_euler;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// assert_eq!(matrix_to_euler(&identity), [0.0, 0.0, 0.0]);
/// ```
pub fn matrix_to_euler(matrix: &Mat33) -> Vec3 {
    let r = matrix;
    let sy = (r[0][0] * r[0][0] + r[1][0] * r[1][0]).sqrt();

    // sy is non-negative so the shared threshold is a plain lower bound here
    if !utils::near_zero(sy) {
        let x = r[2][1].atan2(r[2][2]);
        let y = (-r[2][0]).atan2(sy);
        let z = r[1][0].atan2(r[0][0]);
        [x, y, z]
    } else {
        log::trace!("gimbal lock (sy = {sy:e}), fixing yaw to zero");
        let x = (-r[1][2]).atan2(r[1][1]);
        let y = (-r[2][0]).atan2(sy);
        [x, y, 0.0]
    }
}
