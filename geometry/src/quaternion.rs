use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::Scalar;
use crate::vec3d::{Vec3, Vector3D};

/// A rotation as four components (x, y, z, w), w being the scalar part.
///
/// Most rotation operations here (`inverse`, Euler extraction, pitch/heading/roll) assume a unit quaternion.
/// Callers who cannot guarantee that should go through [`Quat::normalized`] first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<F: Scalar>(pub F, pub F, pub F, pub F);

/// single precision quaternion, the host's native rotation type.
pub type Quaternion = Quat<f32>;
/// double precision quaternion.
pub type QuaternionD = Quat<f64>;

/// How far |q|^2 may stray from 1 and still count as a unit quaternion.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-6;

impl<F: Scalar> Quat<F> {
    /// builds a quaternion from components in (x, y, z, w) order.
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self(x, y, z, w)
    }

    /// the identity rotation (0, 0, 0, 1).
    pub const fn identity() -> Self {
        Self(F::ZERO, F::ZERO, F::ZERO, F::ONE)
    }

    /// x component.
    pub const fn x(&self) -> F {
        self.0
    }

    /// y component.
    pub const fn y(&self) -> F {
        self.1
    }

    /// z component.
    pub const fn z(&self) -> F {
        self.2
    }

    /// scalar component.
    pub const fn w(&self) -> F {
        self.3
    }

    fn norm_squared(&self) -> F {
        self.0 * self.0 + self.1 * self.1 + self.2 * self.2 + self.3 * self.3
    }

    /// sqrt(x^2 + y^2 + z^2 + w^2)
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Scales all four components by 1 / norm.
    ///
    /// A zero quaternion is not trapped; its components come back NaN.
    pub fn normalized(&self) -> Self {
        let inv = F::ONE / self.norm();
        Self(self.0 * inv, self.1 * inv, self.2 * inv, self.3 * inv)
    }

    /// true when |q|^2 is within [`UNIT_NORM_TOLERANCE`] of 1.
    pub fn is_unit(&self) -> bool {
        (self.norm_squared() - F::ONE).abs() <= F::from_f64(UNIT_NORM_TOLERANCE)
    }

    /// Inverse of a **unit** quaternion: (-x, -y, -z, w).
    ///
    /// The unit norm is not enforced. Given a non-unit quaternion this returns the conjugate,
    /// which is not its inverse. Debug builds log such calls.
    pub fn inverse(&self) -> Self {
        #[cfg(debug_assertions)]
        if !self.is_unit() {
            tracing::debug!(quaternion = ?self, norm = ?self.norm(), "inverse of a non-unit quaternion");
        }
        self.conjugated()
    }

    pub fn conjugated(&self) -> Self {
        //! returns the conjugate pair of self.
        Self(-self.0, -self.1, -self.2, self.3)
    }

    pub fn mult(&self, other: &Self) -> Self {
        //! produces self * other (Hamilton product). Remember that order matters.
        let Self(x1, y1, z1, w1) = *self;
        let Self(x2, y2, z2, w2) = *other;
        Self(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }

    /// Rotates a vector by this unit quaternion, q v q*.
    pub fn rotate(&self, vector: &Vec3<F>) -> Vec3<F> {
        let qv = self.mult(&Self(vector.0, vector.1, vector.2, F::ZERO));
        let qvq_inv = qv.mult(&self.conjugated());
        Vec3(qvq_inv.0, qvq_inv.1, qvq_inv.2)
    }

    /// true when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite() && self.3.is_finite()
    }
}

impl QuaternionD {
    /// Rotation of `degrees` about `axis`, right-hand rule. The axis need not be unit length.
    pub fn from_axis_angle(axis: &Vector3D, degrees: f64) -> Self {
        let half = degrees.to_radians() * 0.5;
        let Vec3(x, y, z) = axis.normalized().scale(half.sin());
        Self(x, y, z, half.cos())
    }

    /// narrows to the host's single precision quaternion.
    pub fn to_f32(self) -> Quaternion {
        Quat(self.0 as f32, self.1 as f32, self.2 as f32, self.3 as f32)
    }
}

impl Quaternion {
    /// widens to double precision. Exact.
    pub fn to_f64(self) -> QuaternionD {
        Quat(
            f64::from(self.0),
            f64::from(self.1),
            f64::from(self.2),
            f64::from(self.3),
        )
    }
}

impl<F: Scalar> From<(F, F, F, F)> for Quat<F> {
    fn from((x, y, z, w): (F, F, F, F)) -> Self {
        Self(x, y, z, w)
    }
}

impl<F: Scalar> From<Quat<F>> for (F, F, F, F) {
    fn from(q: Quat<F>) -> Self {
        (q.0, q.1, q.2, q.3)
    }
}

impl<F: Scalar + nalgebra::Scalar> From<nalgebra::Quaternion<F>> for Quat<F> {
    fn from(q: nalgebra::Quaternion<F>) -> Self {
        Self(q.coords.x, q.coords.y, q.coords.z, q.coords.w)
    }
}

impl<F: Scalar + nalgebra::Scalar> From<Quat<F>> for nalgebra::Quaternion<F> {
    fn from(q: Quat<F>) -> Self {
        nalgebra::Quaternion::from_vector(nalgebra::Vector4::new(q.0, q.1, q.2, q.3))
    }
}

impl<F: Scalar> AbsDiffEq for Quat<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
            && self.1.abs_diff_eq(&other.1, epsilon)
            && self.2.abs_diff_eq(&other.2, epsilon)
            && self.3.abs_diff_eq(&other.3, epsilon)
    }
}

impl<F: Scalar> RelativeEq for Quat<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
            && self.1.relative_eq(&other.1, epsilon, max_relative)
            && self.2.relative_eq(&other.2, epsilon, max_relative)
            && self.3.relative_eq(&other.3, epsilon, max_relative)
    }
}
