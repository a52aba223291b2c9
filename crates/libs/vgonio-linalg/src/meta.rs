//! Type-level lists and logical quantifiers.
//!
//! Lists are cons cells ([`Cons`]) terminated by [`Nil`]; the [`tlist!`]
//! macro builds them from a comma separated sequence of types. They hold no
//! values and only exist to let the classification layer state conditions
//! over whole argument lists, e.g. "all arguments are vectors or scalars".
//!
//! [`tlist!`]: crate::tlist

use core::marker::PhantomData;

/// A compile-time sequence of types.
pub trait TypeList {
    /// Number of types in the list.
    const LEN: usize;
}

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// The list made of `H` followed by the list `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cons<H, T: TypeList>(PhantomData<(H, T)>);

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Builds the type of a list from its elements.
///
/// `tlist![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::meta::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::meta::Cons<$head, $crate::tlist!($($rest),*)>
    };
}

/// Appends the list `Rhs` to the end of a list.
pub trait Concat<Rhs: TypeList>: TypeList {
    type Output: TypeList;
}

impl<Rhs: TypeList> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<H, T, Rhs> Concat<Rhs> for Cons<H, T>
where
    T: Concat<Rhs>,
    Rhs: TypeList,
{
    type Output = Cons<H, <T as Concat<Rhs>>::Output>;
}

/// The elements of `A` followed by the elements of `B`.
pub type ConcatTypeList<A, B> = <A as Concat<B>>::Output;

/// Type-level repetition count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Times<const N: usize>;

/// Builds a list repeating `T`.
pub trait Repeat<T> {
    type Output: TypeList;
}

impl<T> Repeat<T> for Times<0> {
    type Output = Nil;
}

macro_rules! impl_repeat {
    ($($n:literal => $prev:literal),* $(,)?) => {
        $(
            impl<T> Repeat<T> for Times<$n> {
                type Output = Cons<T, <Times<$prev> as Repeat<T>>::Output>;
            }
        )*
    };
}

impl_repeat!(
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
);

/// List holding `N` times the type `T`; empty when `N` is zero.
pub type RepeatType<T, const N: usize> = <Times<N> as Repeat<T>>::Output;

/// A unary compile-time predicate over types.
///
/// Predicates are zero-sized marker types; `VALUE` tells whether the
/// predicate holds for `X`.
pub trait Predicate<X> {
    const VALUE: bool;
}

/// Negation of the predicate `P`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Not<P>(PhantomData<P>);

impl<P: Predicate<X>, X> Predicate<X> for Not<P> {
    const VALUE: bool = !P::VALUE;
}

/// Universal and existential quantification of the predicate `P` over a
/// list.
pub trait Quantify<P>: TypeList {
    /// Whether `P` holds for every element. Vacuously true for [`Nil`].
    const ALL: bool;
    /// Whether `P` holds for at least one element. False for [`Nil`].
    const ANY: bool;
}

impl<P> Quantify<P> for Nil {
    const ALL: bool = true;
    const ANY: bool = false;
}

impl<P, H, T> Quantify<P> for Cons<H, T>
where
    P: Predicate<H>,
    T: Quantify<P>,
{
    const ALL: bool = <P as Predicate<H>>::VALUE && <T as Quantify<P>>::ALL;
    const ANY: bool = <P as Predicate<H>>::VALUE || <T as Quantify<P>>::ANY;
}

/// Whether `P` holds for every type in `L`.
pub const fn all<P, L: Quantify<P>>() -> bool { L::ALL }

/// Whether `P` holds for at least one type in `L`.
pub const fn any<P, L: Quantify<P>>() -> bool { L::ANY }
