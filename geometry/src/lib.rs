//! Vector and quaternion maths for spacecraft attitude.
//!
//! Converts orientation quaternions to pitch/heading/roll and builds orientation quaternions from a
//! facing direction. Everything is a pure function over small `Copy` value types and runs in double
//! precision; the single precision types exist to trade values with hosts that only have those.
//!
//! Degenerate input (zero-norm quaternions, parallel vectors) is not reported as an error. It shows up
//! as NaN or infinite components, so check `is_finite` on results when inputs are not trusted.
mod angle;
mod error;
mod euler;
mod look_rotation;
mod ortho;
mod quaternion;
mod scalar;
mod vec3d;

pub use angle::{clamp, clamp_angle_degrees, normalize_angle, TotalOrder};
pub use error::GeometryError;
pub use euler::{Attitude, AxisOrder};
pub use ortho::ortho_normalize;
pub use quaternion::{Quat, Quaternion, QuaternionD, UNIT_NORM_TOLERANCE};
pub use scalar::Scalar;
pub use vec3d::{Vec3, Vector3, Vector3D, MAX_ROUND_DIGITS};
