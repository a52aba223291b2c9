//! Tolerance-based equality used by validation and test code.
//!
//! Floating point elements compare equal when they agree on roughly three to
//! four significant decimal digits; every other element type compares
//! exactly. Which of the two applies is decided by the element type at
//! compile time.

use core::fmt::Debug;

use num_traits::{Float, NumCast};

/// Equality up to the tolerance of the element type.
pub trait AlmostEqual<Rhs: ?Sized = Self> {
    fn almost_equal(&self, other: &Rhs) -> bool;
}

/// Returns whether `a` and `b` are equal up to the tolerance of their type.
///
/// Floating point numbers follow [`almost_equal_float`]; integers, booleans
/// and characters compare exactly.
#[inline]
pub fn almost_equal<T: AlmostEqual>(a: T, b: T) -> bool { a.almost_equal(&b) }

/// Converts a literal into `F`. A literal `F` cannot represent becomes NaN,
/// which makes every comparison involving it false.
#[inline]
fn literal<F: Float>(x: f64) -> F { <F as NumCast>::from(x).unwrap_or_else(F::nan) }

/// Tolerance-based equality of two floating point numbers:
///
/// - two magnitudes below `1e-38` are equal (underflow noise);
/// - an exact zero equals any magnitude below `1e-4`;
/// - otherwise both numbers are divided by `10^floor(log10(|a|))`,
///   multiplied by 1000 and rounded; the rounded values must be identical.
///
/// The scale is taken from `a` only, so the relation is not symmetric around
/// powers of ten: `almost_equal(10.001, 9.999)` holds while
/// `almost_equal(9.999, 10.001)` does not. NaN and infinite operands never
/// compare equal, not even to themselves. Neither does an `a` so small that
/// its scale underflows to zero, unless `b` is caught by one of the guards.
pub fn almost_equal_float<F: Float + Debug>(a: F, b: F) -> bool {
    if !a.is_finite() || !b.is_finite() {
        log::trace!("almost_equal: non-finite operand ({:?} vs {:?})", a, b);
        return false;
    }
    let underflow = literal::<F>(1e-38);
    if a.abs() < underflow && b.abs() < underflow {
        return true;
    }
    let near_zero = literal::<F>(1e-4);
    if (a == F::zero() && b.abs() < near_zero) || (b == F::zero() && a.abs() < near_zero) {
        return true;
    }
    let scaler = literal::<F>(10.0).powf(a.abs().log10().floor());
    let thousand = literal::<F>(1000.0);
    let a_scaled = a / scaler * thousand;
    let b_scaled = b / scaler * thousand;
    if !a_scaled.is_finite() || !b_scaled.is_finite() {
        log::trace!("almost_equal: scale of {:?} out of range (vs {:?})", a, b);
        return false;
    }
    a_scaled.round() == b_scaled.round()
}

/// Implements [`AlmostEqual`] for floating point types through
/// [`almost_equal_float`].
///
/// The types must implement [`num_traits::Float`] and [`Debug`]. As with
/// [`impl_scalar_entity!`](crate::impl_scalar_entity), a downstream crate can
/// only register types it defines itself; a type from a third crate has to
/// be wrapped in a local newtype first.
#[macro_export]
macro_rules! impl_almost_equal_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::approx_eq::AlmostEqual for $t {
                #[inline]
                fn almost_equal(&self, other: &$t) -> bool {
                    $crate::approx_eq::almost_equal_float(*self, *other)
                }
            }
        )*
    };
}

impl_almost_equal_float!(f32, f64);

/// Implements [`AlmostEqual`] as plain `==` for integers, complex numbers,
/// fixed-point numbers and any other type without a tolerance.
///
/// The same orphan rule restriction as for
/// [`impl_almost_equal_float!`](crate::impl_almost_equal_float) applies.
#[macro_export]
macro_rules! impl_almost_equal_exact {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::approx_eq::AlmostEqual for $t {
                #[inline]
                fn almost_equal(&self, other: &$t) -> bool { self == other }
            }
        )*
    };
}

impl_almost_equal_exact!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char
);

impl<T: AlmostEqual + ?Sized> AlmostEqual for &T {
    #[inline]
    fn almost_equal(&self, other: &&T) -> bool { (**self).almost_equal(*other) }
}

/// Element-wise comparison; slices of different lengths are never equal.
impl<T: AlmostEqual> AlmostEqual for [T] {
    fn almost_equal(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.almost_equal(b))
    }
}

impl<T: AlmostEqual, const N: usize> AlmostEqual for [T; N] {
    #[inline]
    fn almost_equal(&self, other: &[T; N]) -> bool { self[..].almost_equal(&other[..]) }
}
