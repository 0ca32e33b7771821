//! Scalar angle wrapping, in degrees, plus a generic clamp.
use std::cmp::Ordering;

/// Wraps an angle in degrees into (-180, 180].
///
/// Exact for integral multiples of 360, and negative inputs wrap the same way positive ones do.
/// ```
/// use attitude_geometry::normalize_angle;
/// assert_eq!(normalize_angle(190.0), -170.0);
/// assert_eq!(normalize_angle(-180.0), 180.0);
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    angle + 360.0 * ((180.0 - angle) / 360.0).floor()
}

/// Wraps an angle in degrees into [0, 360).
///
/// Not the same range as [`normalize_angle`]; Euler extraction reports in this one.
pub fn clamp_angle_degrees(angle: f64) -> f64 {
    let mut wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // a tiny negative remainder rounds up to 360 when shifted.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Types with a total order usable by [`clamp`].
///
/// Integers use `Ord`. Floats use IEEE 754 `totalOrder`, so NaN sorts above +inf and -0.0 below +0.0.
pub trait TotalOrder: Copy {
    /// compares self with other under a total order.
    fn cmp_total(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_order_ord {
    ($($t:ty),*) => {
        $(impl TotalOrder for $t {
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        })*
    };
}

macro_rules! impl_total_order_float {
    ($($t:ty),*) => {
        $(impl TotalOrder for $t {
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }
        })*
    };
}

impl_total_order_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_total_order_float!(f32, f64);

/// Returns `min` if `value < min`, `max` if `value > max`, otherwise `value`.
///
/// `min` is checked first, so an inverted range (min > max) yields `min` for every input below it.
pub fn clamp<T: TotalOrder>(value: T, min: T, max: T) -> T {
    if value.cmp_total(&min) == Ordering::Less {
        min
    } else if value.cmp_total(&max) == Ordering::Greater {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn normalize_angle_boundaries() {
        assert_eq!(normalize_angle(180.0), 180.0);
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(540.0), 180.0);
        assert_eq!(normalize_angle(-540.0), 180.0);
    }

    #[test]
    fn normalize_angle_negative_inputs() {
        assert_eq!(normalize_angle(-190.0), 170.0);
        assert_eq!(normalize_angle(-370.0), -10.0);
        assert_eq!(normalize_angle(-90.0), -90.0);
    }

    #[test]
    fn normalize_angle_multiples_of_360_are_exact() {
        for k in -20..=20 {
            assert_eq!(normalize_angle(360.0 * f64::from(k)), 0.0, "k = {}", k);
        }
    }

    #[test]
    fn normalize_angle_is_periodic() {
        // whole degrees keep the arithmetic exact.
        for a in -1000..=1000 {
            let a = f64::from(a);
            assert_eq!(normalize_angle(a + 360.0), normalize_angle(a), "a = {}", a);
        }
    }

    #[test]
    fn normalize_angle_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let a: f64 = rng.gen_range(-1.0e6..1.0e6);
            let n = normalize_angle(a);
            assert!(n > -180.0 && n <= 180.0, "{} -> {}", a, n);
        }
    }

    #[test]
    fn clamp_angle_degrees_examples() {
        assert_eq!(clamp_angle_degrees(-1.0), 359.0);
        assert_eq!(clamp_angle_degrees(360.0), 0.0);
        assert_eq!(clamp_angle_degrees(725.0), 5.0);
        assert_eq!(clamp_angle_degrees(-720.0), 0.0);
    }

    #[test]
    fn clamp_angle_degrees_tiny_negative() {
        assert_eq!(clamp_angle_degrees(-1.0e-15), 0.0);
    }

    #[test]
    fn clamp_angle_degrees_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let a: f64 = rng.gen_range(-1.0e6..1.0e6);
            let c = clamp_angle_degrees(a);
            assert!((0.0..360.0).contains(&c), "{} -> {}", a, c);
        }
    }

    #[test]
    fn clamp_integers() {
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        for mid in 0..=10 {
            assert_eq!(clamp(mid, 0, 10), mid);
        }
    }

    #[test]
    fn clamp_floats() {
        assert_eq!(clamp(-1.5_f64, -0.5, 0.5), -0.5);
        assert_eq!(clamp(1.5_f64, -0.5, 0.5), 0.5);
        assert_eq!(clamp(0.25_f32, -0.5, 0.5), 0.25);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
        // NaN is greatest under the total order.
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 1.0);
    }
}
