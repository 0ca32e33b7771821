//! Stabilized Gram-Schmidt.
use crate::vec3d::Vector3D;

/// Returns `(normal, tangent)` as an orthonormal pair.
///
/// `normal` keeps its direction. `tangent` is normalized, stripped of its component along `normal`,
/// then normalized again. Normalizing `tangent` before the projection keeps the result stable when
/// the two inputs differ wildly in magnitude.
///
/// Parallel inputs leave a zero tangent after projection and the result is NaN. Not checked.
pub fn ortho_normalize(normal: &Vector3D, tangent: &Vector3D) -> (Vector3D, Vector3D) {
    let normal = normal.normalized();
    let tangent = tangent.normalized();
    let projection = normal.scale(tangent.dot(&normal));
    let tangent = tangent.sub(&projection).normalized();
    (normal, tangent)
}
