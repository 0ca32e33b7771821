//! basic 3D vector in a right-handed frame. Single precision at the host boundary, double precision for the maths.
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::angle::normalize_angle;
use crate::scalar::Scalar;

/// Three scalar components (x, y, z). May be zero, non-unit, any sign.
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Scalar>(pub F, pub F, pub F);

/// single precision vector, the host's native type.
pub type Vector3 = Vec3<f32>;
/// double precision vector.
pub type Vector3D = Vec3<f64>;

/// Most decimal places [`Vec3::round`] honours on a [`Vector3`]; beyond this it is a no-op.
pub const MAX_ROUND_DIGITS: i32 = 15;
const MIN_ROUND_DIGITS: i32 = -40;

impl<F: Scalar> Vec3<F> {
    /// builds a vector from its components.
    pub const fn new(x: F, y: F, z: F) -> Self {
        Self(x, y, z)
    }

    /// the zero vector.
    pub const fn zero() -> Self {
        Self(F::ZERO, F::ZERO, F::ZERO)
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

    pub fn add(&self, other: &Self) -> Self {
        //! component-wise sum.
        Self(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }

    pub fn sub(&self, other: &Self) -> Self {
        //! subtract other from self.
        Self(self.0 - other.0, self.1 - other.1, self.2 - other.2)
    }

    pub fn scale(&self, scale_factor: F) -> Self {
        //! scales the vector by a given magnitude.
        Self(
            self.0 * scale_factor,
            self.1 * scale_factor,
            self.2 * scale_factor,
        )
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> F {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }

    /// Right-handed cross product self x other.
    pub fn cross(&self, other: &Self) -> Self {
        Self(
            self.1 * other.2 - self.2 * other.1,
            self.2 * other.0 - self.0 * other.2,
            self.0 * other.1 - self.1 * other.0,
        )
    }

    pub fn magnitude(&self) -> F {
        //! returns the magnitude of the current vector e.g Vec3(3, 4, 0).magnitude() == 5.
        self.dot(self).sqrt()
    }

    /// Scales to unit length.
    ///
    /// No zero check: the zero vector comes back as NaN components.
    pub fn normalized(&self) -> Self {
        self.scale(F::ONE / self.magnitude())
    }

    /// component-wise sign: +1, -1, 0 for either zero, NaN for NaN.
    pub fn sign(&self) -> Self {
        Self(sign(self.0), sign(self.1), sign(self.2))
    }

    /// Component-wise power. A negative component with a non-integral exponent gives NaN in that slot.
    pub fn pow(&self, exponent: F) -> Self {
        Self(
            self.0.powf(exponent),
            self.1.powf(exponent),
            self.2.powf(exponent),
        )
    }

    /// Component-wise reciprocal. A zero component maps to an infinity of the same sign.
    pub fn inverse(&self) -> Self {
        Self(F::ONE / self.0, F::ONE / self.1, F::ONE / self.2)
    }

    /// true when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

fn sign<F: Scalar>(value: F) -> F {
    if value > F::ZERO {
        F::ONE
    } else if value < F::ZERO {
        -F::ONE
    } else if value.is_nan() {
        value
    } else {
        F::ZERO
    }
}

impl Vector3D {
    /// Wraps every component, an angle in degrees, into (-180, 180].
    pub fn reduce_angles(&self) -> Self {
        Self(
            normalize_angle(self.0),
            normalize_angle(self.1),
            normalize_angle(self.2),
        )
    }

    /// narrows to the host's single precision vector.
    pub fn to_f32(self) -> Vector3 {
        Vec3(self.0 as f32, self.1 as f32, self.2 as f32)
    }
}

impl Vector3 {
    /// Rounds each component to `digits` decimal places, ties to even.
    ///
    /// Done in double precision so the scaling does not truncate, then narrowed back.
    /// More than [`MAX_ROUND_DIGITS`] places leaves the vector unchanged. Very negative `digits`
    /// round every finite component to zero.
    pub fn round(&self, digits: i32) -> Self {
        if digits > MAX_ROUND_DIGITS {
            return *self;
        }
        // below this even f32::MAX scales under 0.5; keeps 10^digits away from f64 underflow.
        let factor = 10f64.powi(digits.max(MIN_ROUND_DIGITS));
        let round = |c: f32| ((f64::from(c) * factor).round_ties_even() / factor) as f32;
        Self(round(self.0), round(self.1), round(self.2))
    }

    /// widens to double precision. Exact.
    pub fn to_f64(self) -> Vector3D {
        Vec3(f64::from(self.0), f64::from(self.1), f64::from(self.2))
    }
}

impl<F: Scalar> Add for Vec3<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl<F: Scalar> Sub for Vec3<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl<F: Scalar> Mul<F> for Vec3<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self::Output {
        self.scale(rhs)
    }
}

impl<F: Scalar> Neg for Vec3<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0, -self.1, -self.2)
    }
}

impl<F: Scalar> From<(F, F, F)> for Vec3<F> {
    fn from((x, y, z): (F, F, F)) -> Self {
        Self(x, y, z)
    }
}

impl<F: Scalar> From<Vec3<F>> for (F, F, F) {
    fn from(v: Vec3<F>) -> Self {
        (v.0, v.1, v.2)
    }
}

impl<F: Scalar + nalgebra::Scalar> From<nalgebra::Vector3<F>> for Vec3<F> {
    fn from(v: nalgebra::Vector3<F>) -> Self {
        Self(v.x, v.y, v.z)
    }
}

impl<F: Scalar + nalgebra::Scalar> From<Vec3<F>> for nalgebra::Vector3<F> {
    fn from(v: Vec3<F>) -> Self {
        nalgebra::Vector3::new(v.0, v.1, v.2)
    }
}

impl<F: Scalar> AbsDiffEq for Vec3<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
            && self.1.abs_diff_eq(&other.1, epsilon)
            && self.2.abs_diff_eq(&other.2, epsilon)
    }
}

impl<F: Scalar> RelativeEq for Vec3<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
            && self.1.relative_eq(&other.1, epsilon, max_relative)
            && self.2.relative_eq(&other.2, epsilon, max_relative)
    }
}
