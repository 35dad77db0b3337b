#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Transform math for robot kinematics
//!
//! Stateless conversions between the rotation representations used by kinematics solvers:
//!
//! - [`euler`]: XYZ Euler angles to and from rotation matrices (`R = Rz * Ry * Rx`)
//! - [`so3`]: axis-angle coordinates, the so(3) hat/vee maps and the matrix exp/log
//! - [`transforms`]: homogeneous transforms built from a rotation and a translation
//!
//! All vectors and matrices are plain row-major arrays (`m[row][col]`). Internally the
//! arithmetic runs on `glam` double precision types.
//!
//! ## Example
//!
//! ```rust
//! use rtb_transforms::{euler, so3};
//!
//! let rotation = euler::euler_to_matrix(&[0.1, 0.2, 0.3]);
//! let log = so3::matrix_log_3(&rotation);
//! let back = so3::matrix_exp_3(&log);
//! assert!((back[0][0] - rotation[0][0]).abs() < 1e-9);
//! ```

/// Error types of the crate.
pub mod error;

/// Euler angles conversions.
pub mod euler;

/// Lie algebra so(3) and the rotation group SO(3).
pub mod so3;

/// Homogeneous transforms.
pub mod transforms;

/// Scalar and vector utilities.
pub mod utils;

pub use error::TransformError;

/// A 3-vector.
pub type Vec3 = [f64; 3];

/// A row-major 3x3 matrix.
pub type Mat33 = [[f64; 3]; 3];

/// A row-major 4x4 matrix.
pub type Mat44 = [[f64; 4]; 4];
