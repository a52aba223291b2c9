//! Element type promotion and small element-wise helpers.

use core::ops::{Add, Mul, Sub};

use num_traits::{One, Zero};

/// Element type produced by multiplying a `Self` by a `U` and accumulating
/// the product with both operand types, as in a dot product or a row by
/// column product.
///
/// Only implemented when the operand types support the required `*` and `+`,
/// so mixing unrelated element types fails to compile at the point where the
/// result type is deduced.
pub trait MatMulElem<U> {
    type Output;
}

impl<T, U> MatMulElem<U> for T
where
    T: Mul<U>,
    <T as Mul<U>>::Output: Add<T>,
    <<T as Mul<U>>::Output as Add<T>>::Output: Add<U>,
{
    type Output = <<<T as Mul<U>>::Output as Add<T>>::Output as Add<U>>::Output;
}

/// Result element type of combining `T` and `U` through `*` and `+`.
pub type MatMulElemT<T, U> = <T as MatMulElem<U>>::Output;

/// Returns -1, 0 or 1 according to the sign of `x`.
///
/// NaN yields 0.
#[inline]
pub fn sign<T>(x: T) -> T
where
    T: Zero + One + Sub<Output = T> + PartialOrd + Copy,
{
    let positive = if x > T::zero() { T::one() } else { T::zero() };
    let negative = if x < T::zero() { T::one() } else { T::zero() };
    positive - negative
}

/// Returns -1 or 1 according to the sign of `x`, zero counting as positive.
///
/// NaN yields 0.
#[inline]
pub fn sign_nonzero<T>(x: T) -> T
where
    T: Zero + One + Sub<Output = T> + PartialOrd + Copy,
{
    let positive = if x >= T::zero() { T::one() } else { T::zero() };
    let negative = if x < T::zero() { T::one() } else { T::zero() };
    positive - negative
}
