use tracing::debug;

use crate::ortho::ortho_normalize;
use crate::quaternion::{Quat, QuaternionD};
use crate::vec3d::Vector3D;

impl QuaternionD {
    /// Rotation taking local +Z onto `forward`, with local +Y as close to `up` as it can get.
    ///
    /// `forward` and `up` must not be parallel. The closed form also breaks down near a half turn
    /// (1 + trace <= 0) and returns NaN components there; check [`Quat::is_finite`] if that matters.
    pub fn look_rotation(forward: &Vector3D, up: &Vector3D) -> Self {
        let (forward, up) = ortho_normalize(forward, up);
        let right = up.cross(&forward);

        let w = (1.0 + right.0 + up.1 + forward.2).sqrt() * 0.5;
        let r = 0.25 / w;
        let q = Quat(
            (up.2 - forward.1) * r,
            (forward.0 - right.2) * r,
            (right.1 - up.0) * r,
            w,
        );
        if !q.is_finite() {
            debug!(?forward, ?up, "look rotation has no closed form solution");
        }
        q
    }
}
