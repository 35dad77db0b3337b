use glam::DVec3;

use crate::{euler, utils, Mat33, Mat44, Vec3};

/// Build a homogeneous transform from a rotation matrix and a translation.
///
/// No check is made that `rotation` is orthonormal.
///
/// # Arguments
///
/// * `rotation` - The 3x3 rotation matrix.
/// * `translation` - The translation vector.
///
/// # Returns
///
/// The 4x4 homogeneous transform `[[R, p], [0, 0, 0, 1]]`.
///
/// Example:
///
/// ```
/// use rtb_transforms::transforms::rp_to_trans;
///
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
/// let trans = rp_to_trans(&rotation, &[1.0, 2.0, 5.0]);
/// assert_eq!(trans[1], [0.0, 0.0, -1.0, 2.0]);
/// assert_eq!(trans[3], [0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn rp_to_trans(rotation: &Mat33, translation: &Vec3) -> Mat44 {
    let mut trans = [[0.0; 4]; 4];
    for (i, row) in trans.iter_mut().take(3).enumerate() {
        row[..3].copy_from_slice(&rotation[i]);
        row[3] = translation[i];
    }
    trans[3][3] = 1.0;
    trans
}

/// Split a homogeneous transform into its rotation and translation.
///
/// The bottom row is ignored.
///
/// Example:
///
/// ```
/// use rtb_transforms::transforms::trans_to_rp;
///
/// let trans = [
///     [1.0, 0.0, 0.0, 0.0],
///     [0.0, 0.0, -1.0, 0.0],
///     [0.0, 1.0, 0.0, 3.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ];
/// let (rotation, translation) = trans_to_rp(&trans);
/// assert_eq!(rotation, [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]);
/// assert_eq!(translation, [0.0, 0.0, 3.0]);
/// ```
pub fn trans_to_rp(trans: &Mat44) -> (Mat33, Vec3) {
    let mut rotation = [[0.0; 3]; 3];
    let mut translation = [0.0; 3];
    for (i, row) in trans.iter().take(3).enumerate() {
        rotation[i].copy_from_slice(&row[..3]);
        translation[i] = row[3];
    }
    (rotation, translation)
}

/// Build a homogeneous transform from a 6-d pose.
///
/// # Arguments
///
/// * `pose` - The pose `[x, y, z, rx, ry, rz]`: a translation followed by XYZ Euler angles in
///   radians, composed as in [`euler::euler_to_matrix`].
///
/// Example:
///
/// ```
/// use rtb_transforms::transforms::pose_to_trans;
///
/// let trans = pose_to_trans(&[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
/// assert_eq!(trans[0], [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn pose_to_trans(pose: &[f64; 6]) -> Mat44 {
    let rotation = euler::euler_to_matrix(&[pose[3], pose[4], pose[5]]);
    rp_to_trans(&rotation, &[pose[0], pose[1], pose[2]])
}

/// Recover the 6-d pose `[x, y, z, rx, ry, rz]` of a homogeneous transform.
///
/// Inverse of [`pose_to_trans`]. At gimbal lock the Euler angles follow
/// [`euler::matrix_to_euler`] and the yaw is reported as zero.
pub fn trans_to_pose(trans: &Mat44) -> [f64; 6] {
    let (rotation, translation) = trans_to_rp(trans);
    let angles = euler::matrix_to_euler(&rotation);
    [
        translation[0],
        translation[1],
        translation[2],
        angles[0],
        angles[1],
        angles[2],
    ]
}

/// Invert a homogeneous transform.
///
/// Uses the orthonormality of the rotation: the inverse is `[[R^T, -R^T p], [0, 0, 0, 1]]`.
///
/// PRECONDITION: the top-left block of `trans` is a rotation matrix.
///
/// Example:
///
/// ```
/// use rtb_transforms::transforms::{rp_to_trans, trans_inv};
///
/// let rotation = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
/// let trans = rp_to_trans(&rotation, &[1.0, 2.0, 3.0]);
/// let inv = trans_inv(&trans);
/// assert_eq!(inv[0], [0.0, 1.0, 0.0, -2.0]);
/// assert_eq!(inv[1], [-1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn trans_inv(trans: &Mat44) -> Mat44 {
    let (rotation, translation) = trans_to_rp(trans);
    let rotation_t = utils::array33_to_dmat3(&rotation).transpose();
    let translation_inv = -(rotation_t * DVec3::from_array(translation));
    rp_to_trans(
        &utils::dmat3_to_array33(&rotation_t),
        &translation_inv.to_array(),
    )
}

/// Rotate a 3-vector: `R * v`.
pub fn rotate_vec3(rotation: &Mat33, vec: &Vec3) -> Vec3 {
    (utils::array33_to_dmat3(rotation) * DVec3::from_array(*vec)).to_array()
}

/// Apply a homogeneous transform to a 3d point: `R * p + t`.
///
/// Example:
///
/// ```
/// use rtb_transforms::transforms::{pose_to_trans, transform_point};
///
/// let trans = pose_to_trans(&[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
/// assert_eq!(transform_point(&trans, &[1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
/// ```
pub fn transform_point(trans: &Mat44, point: &Vec3) -> Vec3 {
    let (rotation, translation) = trans_to_rp(trans);
    let rotated = DVec3::from_array(rotate_vec3(&rotation, point));
    (rotated + DVec3::from_array(translation)).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rp_to_trans() {
        let rotation = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
        let translation = [1.0, 2.0, 5.0];
        let trans = rp_to_trans(&rotation, &translation);
        assert_eq!(
            trans,
            [
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0, 2.0],
                [0.0, 1.0, 0.0, 5.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_trans_to_rp_roundtrip() {
        let rotation = [[0.36, 0.48, -0.8], [-0.8, 0.6, 0.0], [0.48, 0.64, 0.6]];
        let translation = [-0.5, 4.0, 1e-3];
        let (r, p) = trans_to_rp(&rp_to_trans(&rotation, &translation));
        assert_eq!(r, rotation);
        assert_eq!(p, translation);
    }

    #[test]
    fn test_trans_to_rp_ignores_bottom_row() {
        let trans = [
            [1.0, 0.0, 0.0, 4.0],
            [0.0, 1.0, 0.0, 5.0],
            [0.0, 0.0, 1.0, 6.0],
            [9.0, 9.0, 9.0, 9.0],
        ];
        let (_, p) = trans_to_rp(&trans);
        assert_eq!(p, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_pose_to_trans() {
        let trans = pose_to_trans(&[1.0, 2.0, 3.0, 0.0, FRAC_PI_2, 0.0]);
        let expected = [
            [0.0, 0.0, 1.0, 1.0],
            [0.0, 1.0, 0.0, 2.0],
            [-1.0, 0.0, 0.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(trans[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_trans_to_pose_roundtrip() {
        let pose = [0.1, -0.2, 0.3, 0.4, -0.5, 0.6];
        let recovered = trans_to_pose(&pose_to_trans(&pose));
        for i in 0..6 {
            assert_relative_eq!(recovered[i], pose[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_trans_inv() {
        let trans = pose_to_trans(&[1.0, -2.0, 0.5, 0.3, 0.2, -1.0]);
        let inv = trans_inv(&trans);

        let point = [0.7, 0.1, -3.0];
        let back = transform_point(&inv, &transform_point(&trans, &point));
        for i in 0..3 {
            assert_relative_eq!(back[i], point[i], epsilon = 1e-12);
        }
        assert_eq!(inv[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rotate_vec3() {
        let rotation = euler::euler_to_matrix(&[0.0, 0.0, FRAC_PI_2]);
        let rotated = rotate_vec3(&rotation, &[1.0, 0.0, 0.0]);
        assert_relative_eq!(rotated[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated[2], 0.0, epsilon = 1e-12);
    }
}
