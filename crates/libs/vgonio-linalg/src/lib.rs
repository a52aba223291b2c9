//! Compile-time entity classification and dispatch for generic linear algebra.
//!
//! Arithmetic, construction and conversion code in the rest of the library is
//! written once and instantiated for every combination of element type,
//! dimension, row/column count, memory layout and multiplication order. This
//! crate is the layer that lets such code find out, purely from the types of
//! its arguments, what it has been handed:
//!
//! - [`entity`]: classifies any type as exactly one [`Shape`] (scalar, vector,
//!   swizzle, matrix, submatrix or quaternion).
//! - [`props`]: recovers the configuration constants of a composite type.
//! - [`dim`]: dimension arithmetic for concatenating constructors.
//! - [`layout`]: the complement of a matrix memory layout.
//! - [`approx_eq`]: tolerance-based equality used by validation code.
//! - [`elem`]: element type promotion for mixed arithmetic.
//! - [`meta`]: type lists and quantifiers the above are built from.
//!
//! Nothing here does work at runtime except [`approx_eq`] and the sign helpers
//! in [`elem`]; everything else resolves to constants or types during
//! compilation. Misuse (e.g. asking for the matrix properties of a scalar) is
//! rejected by the compiler at the call site.

pub mod approx_eq;
pub mod config;
pub mod dim;
pub mod elem;
pub mod entity;
pub mod layout;
pub mod meta;
pub mod prelude;
pub mod props;

pub use approx_eq::{almost_equal, almost_equal_float, AlmostEqual};
pub use config::*;
pub use dim::{assert_concat_fits, dimension_of, sum_dimensions, ConcatFits, SumDimensions};
pub use elem::{sign, sign_nonzero, MatMulElem, MatMulElemT};
pub use entity::*;
pub use layout::{opposite_layout, ColMajor, Layout, MemLayout, OppositeLayout, RowMajor};
pub use meta::{all, any, Concat, ConcatTypeList, Cons, Nil, Predicate, Quantify, RepeatType};
pub use props::*;

/// Dimension value meaning "size not known at compile time".
///
/// Recognised by the dimension arithmetic but dynamically sized vectors and
/// matrices are not supported.
pub const DYNAMIC: i32 = -1;

/// Whether vectors, matrices and quaternions are packed unless stated
/// otherwise. Controlled by the `packed` feature.
#[cfg(feature = "packed")]
pub const DEFAULT_PACKED: bool = true;

/// Whether vectors, matrices and quaternions are packed unless stated
/// otherwise. Controlled by the `packed` feature.
#[cfg(not(feature = "packed"))]
pub const DEFAULT_PACKED: bool = false;

static_assertions::const_assert!(DYNAMIC <= 0);
