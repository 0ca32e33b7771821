//! Floating point scalar shared by the single and double precision value types.
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::RelativeEq;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Component type of [`Vec3`](crate::Vec3) and [`Quat`](crate::Quat). Only `f32` and `f64` implement it.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + RelativeEq<Epsilon = Self>
{
    /// additive identity.
    const ZERO: Self;
    /// multiplicative identity.
    const ONE: Self;

    /// absolute value.
    fn abs(self) -> Self;
    /// square root; NaN for negative input.
    fn sqrt(self) -> Self;
    /// raises self to a floating point power.
    fn powf(self, exponent: Self) -> Self;
    /// true when neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// true when NaN.
    fn is_nan(self) -> bool;
    /// converts a double into this scalar, rounding if narrower.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                <$t>::powf(self, exponent)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
