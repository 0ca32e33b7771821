//! Euler angle extraction and the flight-dynamics pitch/heading/roll convention built on it.
use std::f64::consts::FRAC_PI_2;

use tracing::warn;

use crate::angle::clamp_angle_degrees;
use crate::error::GeometryError;
use crate::quaternion::{Quat, QuaternionD};
use crate::vec3d::{Vec3, Vector3D};

/// |sin| of the middle angle above which the decomposition is treated as gimbal locked.
const GIMBAL_LOCK_THRESHOLD: f64 = 1.0 - 1e-12;

/// Order of the three rotations in an Euler decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisOrder {
    /// X, then Y, then Z.
    Xyz,
    /// X, then Z, then Y.
    Xzy,
    /// Y, then X, then Z.
    Yxz,
    /// Y, then Z, then X. The only order extraction supports.
    Yzx,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
}

/// Attitude angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attitude {
    /// nose up positive, in [-90, 90].
    pub pitch: f64,
    /// compass direction, in [0, 360).
    pub heading: f64,
    /// right wing down positive, in (-180, 180].
    pub roll: f64,
}

impl From<Attitude> for Vector3D {
    fn from(attitude: Attitude) -> Self {
        Vec3(attitude.pitch, attitude.heading, attitude.roll)
    }
}

impl Attitude {
    fn from_yzx(angles: &Vector3D) -> Self {
        let Vec3(ex, ey, ez) = *angles;
        Self {
            pitch: if ey > 180.0 { 360.0 - ey } else { -ey },
            heading: ez,
            roll: if ex >= 90.0 { 270.0 - ex } else { -90.0 - ex },
        }
    }
}

impl QuaternionD {
    /// Euler angles of this unit quaternion in degrees, each in [0, 360).
    ///
    /// Only [`AxisOrder::Yzx`] is implemented; any other order is an error.
    /// For YZX the returned `(ex, ey, ez)` satisfy `q = qX(ez) * qZ(ey) * qY(ex)`,
    /// where `qA(t)` is a rotation of `t` degrees about axis A.
    pub fn euler_angles(&self, order: AxisOrder) -> Result<Vector3D, GeometryError> {
        match order {
            AxisOrder::Yzx => Ok(self.yzx_angles()),
            other => {
                warn!(order = ?other, "euler extraction only supports YZX");
                Err(GeometryError::UnsupportedAxisOrder(other))
            }
        }
    }

    fn yzx_angles(&self) -> Vector3D {
        let Quat(x, y, z, w) = *self;

        // rotation matrix entries, row then column.
        let r00 = 1.0 - 2.0 * (y * y + z * z);
        let r01 = 2.0 * (x * y - z * w);
        let r02 = 2.0 * (x * z + y * w);
        let r11 = 1.0 - 2.0 * (x * x + z * z);
        let r20 = 2.0 * (x * z - y * w);
        let r21 = 2.0 * (y * z + x * w);
        let r22 = 1.0 - 2.0 * (x * x + y * y);

        let sin_ey = (-r01).clamp(-1.0, 1.0);
        let (ex, ey, ez) = if sin_ey.abs() >= GIMBAL_LOCK_THRESHOLD {
            // X and Y turn about the same axis; fold everything into ex.
            ((-r20).atan2(r22), FRAC_PI_2.copysign(sin_ey), 0.0)
        } else {
            (r02.atan2(r00), sin_ey.asin(), r21.atan2(r11))
        };

        Vec3(
            clamp_angle_degrees(ex.to_degrees()),
            clamp_angle_degrees(ey.to_degrees()),
            clamp_angle_degrees(ez.to_degrees()),
        )
    }

    /// Pitch, heading and roll of this unit quaternion, in degrees.
    ///
    /// Built from the YZX Euler angles `(ex, ey, ez)`:
    /// heading is `ez`, pitch is `360 - ey` when `ey > 180` else `-ey`,
    /// roll is `270 - ex` when `ex >= 90` else `-90 - ex`.
    pub fn pitch_heading_roll(&self) -> Attitude {
        Attitude::from_yzx(&self.yzx_angles())
    }
}
