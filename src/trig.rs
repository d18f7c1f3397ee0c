use std::sync::LazyLock;

use crate::num::{modulo, sign, Scalar};

/// The canonical double-precision pi, computed once as `acos(-1)` on first
/// access and read-only afterwards. `f32` callers narrow it through
/// [`QFloat::pi`].
pub static PI: LazyLock<f64> = LazyLock::new(|| (-1.0_f64).acos());

/// IEEE-754 types whose bit pattern can be masked directly. `to_bits` and
/// `from_bits` are exact-width transmutes, so the mask in [`abs_q`] never
/// touches the exponent or mantissa.
pub trait QFloat: Scalar {
    /// Raw bit pattern with the sign bit cleared.
    fn clear_sign(self) -> Self;

    /// [`PI`] narrowed to this type.
    fn pi() -> Self;
}

impl QFloat for f32 {
    #[inline(always)]
    fn clear_sign(self) -> Self {
        f32::from_bits(self.to_bits() & 0x7FFF_FFFF)
    }

    #[inline(always)]
    fn pi() -> Self {
        *PI as f32
    }
}

impl QFloat for f64 {
    #[inline(always)]
    fn clear_sign(self) -> Self {
        f64::from_bits(self.to_bits() & 0x7FFF_FFFF_FFFF_FFFF)
    }

    #[inline(always)]
    fn pi() -> Self {
        *PI
    }
}

// From https://bits.stephan-brumme.com/absFloat.html
/// Quick absolute value: clears the sign bit in the bit pattern, no comparison
/// or branch. Bit-exact with [`crate::num::abs`] for all finite inputs; NaNs
/// keep their payload and infinities stay infinite, only the sign changes.
#[inline]
pub fn abs_q<T: QFloat>(x: T) -> T {
    x.clear_sign()
}

// Bhaskara I's cosine form: (pi^2 - 4u^2) / (pi^2 + u^2) approximates cos(u)
// on [-pi/2, pi/2]. The denominator is strictly positive, so there is no
// singularity anywhere in the reduced domain.
#[inline]
fn sin_part_q<T: QFloat>(u: T) -> T {
    let pi2 = T::pi() * T::pi();
    let four = (T::one() + T::one()) * (T::one() + T::one());
    (pi2 - four * u * u) / (pi2 + u * u)
}

/// Approximates `sin(x)` in radians with the maximum error of `0.002`.
/// Periodic with period `2*pi` for any finite input: the argument is reduced
/// with the floor-based modulo, mapped onto the rational approximation's
/// half-period domain, and the second half of the period gets its sign back
/// from `sign(pi - x)`.
#[inline]
pub fn sin_q<T: QFloat>(x: T) -> T {
    let pi = T::pi();
    let two = T::one() + T::one();
    let x = modulo(x, two * pi);
    let u = modulo(x, pi) - pi / two;
    sign(pi - x) * sin_part_q(u)
}
