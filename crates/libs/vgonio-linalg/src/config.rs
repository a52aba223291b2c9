//! Configuration types of the composite entities.
//!
//! Each type here only carries its configuration (element type, dimension,
//! row/column count, multiplication order, memory layout, packing) in its
//! generic parameters. Storage and arithmetic live with the consumers of
//! these types; the trait layer in this crate only ever looks at the
//! parameters.

use core::marker::PhantomData;

use crate::layout::{Layout, RowMajor};

pub(crate) mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// A vector of `DIM` elements of type `T`.
///
/// `DIM` must be a positive integer; [`DYNAMIC`](crate::DYNAMIC) is reserved
/// for dynamically sized vectors, which are not supported yet. `PACKED`
/// tightly packs the elements without alignment padding. It is orthogonal to
/// the arithmetic semantics of the vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector<T, const DIM: i32, const PACKED: bool = { crate::DEFAULT_PACKED }>(
    PhantomData<T>,
);

impl<T, const DIM: i32, const PACKED: bool> Vector<T, DIM, PACKED> {
    pub const fn new() -> Self { Self(PhantomData) }
}

/// Sequence of component indices selected by a [`Swizzle`].
///
/// Built recursively from [`Ix`] cells terminated by `()`; use the
/// [`ix!`](crate::ix) macro rather than spelling the nested type out.
pub trait IndexSeq {
    /// Number of indices in the sequence.
    const LEN: usize;
    /// Largest index in the sequence, `-1` if the sequence is empty.
    const MAX_INDEX: i32;

    /// Returns the index stored at position `pos`.
    fn index(pos: usize) -> Option<usize>;

    /// Collects the whole sequence.
    fn indices() -> Vec<usize> { (0..Self::LEN).filter_map(Self::index).collect() }
}

impl IndexSeq for () {
    const LEN: usize = 0;
    const MAX_INDEX: i32 = -1;

    #[inline]
    fn index(_: usize) -> Option<usize> { None }
}

/// One cell of a type-level index sequence: index `N` followed by `Rest`.
///
/// # Note
///
/// Rust has no variadic const generics, so the sequence is spelled as a
/// nested type. Once variadic generics land this can become a flat list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ix<Rest: IndexSeq, const N: usize>(PhantomData<Rest>);

impl<Rest: IndexSeq, const N: usize> IndexSeq for Ix<Rest, N> {
    const LEN: usize = 1 + Rest::LEN;
    const MAX_INDEX: i32 = if N as i32 > Rest::MAX_INDEX {
        N as i32
    } else {
        Rest::MAX_INDEX
    };

    #[inline]
    fn index(pos: usize) -> Option<usize> {
        match pos {
            0 => Some(N),
            _ => Rest::index(pos - 1),
        }
    }
}

/// Builds the type of an index sequence.
///
/// `ix![2, 0, 1]` selects the third, first and second components, in that
/// order.
#[macro_export]
macro_rules! ix {
    () => { () };
    ($n:tt $(, $ns:tt)* $(,)?) => {
        $crate::config::Ix<$crate::ix!($($ns),*), $n>
    };
}

/// A view selecting and reordering the components of a vector of `T`.
///
/// Its dimension is the length of the index sequence `I`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Swizzle<T, I: IndexSeq>(PhantomData<(T, I)>);

impl<T, I: IndexSeq> Swizzle<T, I> {
    pub const fn new() -> Self { Self(PhantomData) }
}

/// Multiplication order of transformation matrices.
///
/// Decides whether generated transforms are meant for `M * v`
/// ([`MulOrder::PrecedeVector`]) or `v * M` ([`MulOrder::FollowVector`]). It
/// does not change the result of raw matrix arithmetic: both `M * v` and
/// `v * M` remain available whichever order is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulOrder {
    /// Matrices stand to the left of the vector they transform: `M2 * M1 * v`.
    PrecedeVector,
    /// Matrices stand to the right of the vector they transform: `v * M1 * M2`.
    FollowVector,
}

/// Type-level multiplication order, carried as a matrix type parameter.
pub trait Order: Sealed {
    const ORDER: MulOrder;
}

/// Marker for [`MulOrder::PrecedeVector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PrecedeVector;

/// Marker for [`MulOrder::FollowVector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FollowVector;

impl Sealed for PrecedeVector {}
impl Sealed for FollowVector {}

impl Order for PrecedeVector {
    const ORDER: MulOrder = MulOrder::PrecedeVector;
}

impl Order for FollowVector {
    const ORDER: MulOrder = MulOrder::FollowVector;
}

/// A `ROWS` x `COLUMNS` matrix of `T`.
///
/// `O` is the multiplication order, `L` the memory layout. Changing `L` only
/// affects which dimension is contiguous in memory, never the result of an
/// operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Matrix<
    T,
    const ROWS: i32,
    const COLUMNS: i32,
    O: Order = PrecedeVector,
    L: Layout = RowMajor,
    const PACKED: bool = { crate::DEFAULT_PACKED },
>(PhantomData<(T, O, L)>);

impl<T, const ROWS: i32, const COLUMNS: i32, O: Order, L: Layout, const PACKED: bool>
    Matrix<T, ROWS, COLUMNS, O, L, PACKED>
{
    pub const fn new() -> Self { Self(PhantomData) }
}

/// A `ROWS` x `COLUMNS` view into a region of a matrix of type `M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Submatrix<M, const ROWS: i32, const COLUMNS: i32>(PhantomData<M>);

impl<M, const ROWS: i32, const COLUMNS: i32> Submatrix<M, ROWS, COLUMNS> {
    pub const fn new() -> Self { Self(PhantomData) }
}

/// A quaternion of `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quaternion<T, const PACKED: bool = { crate::DEFAULT_PACKED }>(PhantomData<T>);

impl<T, const PACKED: bool> Quaternion<T, PACKED> {
    pub const fn new() -> Self { Self(PhantomData) }
}

// Configuration types never carry data.
static_assertions::assert_eq_size!(Vector<f64, 4, true>, ());
static_assertions::assert_eq_size!(Swizzle<f32, Ix<Ix<(), 1>, 0>>, ());
static_assertions::assert_eq_size!(Matrix<f64, 4, 4, FollowVector, RowMajor, false>, ());
static_assertions::assert_eq_size!(Quaternion<f32>, ());
