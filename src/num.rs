use std::ops::{Div, Sub};

use num_traits::{One, Zero};

/// An ordered numeric scalar. Implemented for the signed integer and
/// floating-point primitives; unsigned types are excluded since `abs` and
/// `sign` are meaningless for them.
pub trait Scalar:
    Copy + PartialOrd + Zero + One + Sub<Output = Self> + Div<Output = Self>
{
    /// Negation that cannot overflow. For signed integers the minimum value
    /// saturates to the maximum (`i32::MIN` maps to `i32::MAX`); for floats
    /// this is plain negation.
    fn saturating_neg(self) -> Self;

    /// Floor-based remainder: the result carries the sign of `m`, unlike the
    /// truncating `%` operator.
    fn rem_floor(self, m: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline(always)]
            fn saturating_neg(self) -> Self {
                self.saturating_neg()
            }

            #[inline(always)]
            fn rem_floor(self, m: Self) -> Self {
                let r = self % m;
                if r != 0 && (r < 0) != (m < 0) {
                    r + m
                } else {
                    r
                }
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline(always)]
            fn saturating_neg(self) -> Self {
                -self
            }

            #[inline(always)]
            fn rem_floor(self, m: Self) -> Self {
                self - (self / m).floor() * m
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);

/// Absolute value, branching reference implementation. See [`crate::trig::abs_q`]
/// for the branch-free bit-mask variant. `abs(iN::MIN)` saturates to `iN::MAX`.
#[inline]
pub fn abs<T: Scalar>(x: T) -> T {
    if x < T::zero() {
        x.saturating_neg()
    } else {
        x
    }
}

/// Sign of `x` in the value's own type: `0` at zero, otherwise `1` or `-1`.
#[inline]
pub fn sign<T: Scalar>(x: T) -> T {
    if x == T::zero() {
        T::zero()
    } else {
        x / abs(x)
    }
}

/// Clamp `x` into `[low, high]`. Callers are expected to pass `low <= high`;
/// with inverted bounds the low check runs first, so its bound wins.
#[inline]
pub fn constrain<T: Scalar>(x: T, low: T, high: T) -> T {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

/// Smaller of two values; ties return `b`.
#[inline]
pub fn min<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values; ties return `b`.
#[inline]
pub fn max<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Linear blend `a*t + b*(1-t)`. Note the order: `t = 0` yields `b` and
/// `t = 1` yields `a`.
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a * t + b * (T::one() - t)
}

/// Floor-based modulo `x - floor(x/m)*m`. The result has the sign of `m`,
/// which makes it suitable for periodic wrapping: `modulo(-1.0, 4.0) == 3.0`.
#[inline]
pub fn modulo<T: Scalar>(x: T, m: T) -> T {
    x.rem_floor(m)
}
