//! Compile-time configuration of composite entities.
//!
//! Generic arithmetic recovers the configuration of its arguments from their
//! types only: no runtime tag travels with a vector or a matrix. Each trait
//! here is implemented for exactly one shape (and references to it), so
//! asking for the properties of anything else, e.g. the matrix properties of
//! a scalar, does not compile.

use crate::{
    config::{IndexSeq, Matrix, MulOrder, Order, Quaternion, Submatrix, Swizzle, Vector},
    layout::{Layout, MemLayout},
};

/// Configuration of a [`Vector`].
///
/// ```
/// use vgonio_linalg::{Vector, VectorProperties};
///
/// const DIM: i32 = <Vector<f32, 3> as VectorProperties>::DIM;
/// assert_eq!(DIM, 3);
/// ```
///
/// A matrix is not a vector:
///
/// ```compile_fail
/// use vgonio_linalg::{Matrix, VectorProperties};
///
/// const DIM: i32 = <Matrix<f32, 3, 3> as VectorProperties>::DIM;
/// ```
pub trait VectorProperties {
    /// Element type.
    type Elem;
    /// Number of elements, or [`DYNAMIC`](crate::DYNAMIC).
    const DIM: i32;
    /// Whether the elements are stored without padding.
    const PACKED: bool;
}

impl<T, const DIM: i32, const PACKED: bool> VectorProperties for Vector<T, DIM, PACKED> {
    type Elem = T;
    const DIM: i32 = DIM;
    const PACKED: bool = PACKED;
}

/// Configuration of a [`Matrix`].
///
/// ```
/// use vgonio_linalg::{Matrix, MatrixProperties};
///
/// const ROWS: i32 = <Matrix<f32, 3, 4> as MatrixProperties>::ROWS;
/// assert_eq!(ROWS, 3);
/// ```
///
/// Scalars have no matrix properties:
///
/// ```compile_fail
/// use vgonio_linalg::MatrixProperties;
///
/// const ROWS: i32 = <f32 as MatrixProperties>::ROWS;
/// ```
pub trait MatrixProperties {
    /// Element type.
    type Elem;
    /// Type-level multiplication order.
    type Order: Order;
    /// Type-level memory layout.
    type Layout: Layout;
    /// Number of rows, or [`DYNAMIC`](crate::DYNAMIC).
    const ROWS: i32;
    /// Number of columns, or [`DYNAMIC`](crate::DYNAMIC).
    const COLUMNS: i32;
    /// Value of [`Self::Order`].
    const ORDER: MulOrder;
    /// Value of [`Self::Layout`].
    const LAYOUT: MemLayout;
    /// Whether the elements are stored without padding.
    const PACKED: bool;
}

impl<T, const ROWS: i32, const COLUMNS: i32, O: Order, L: Layout, const PACKED: bool>
    MatrixProperties for Matrix<T, ROWS, COLUMNS, O, L, PACKED>
{
    type Elem = T;
    type Order = O;
    type Layout = L;
    const ROWS: i32 = ROWS;
    const COLUMNS: i32 = COLUMNS;
    const ORDER: MulOrder = O::ORDER;
    const LAYOUT: MemLayout = L::LAYOUT;
    const PACKED: bool = PACKED;
}

/// Configuration of a [`Swizzle`].
pub trait SwizzleProperties {
    type Elem;
    /// The selected component indices.
    type Indices: IndexSeq;
    /// Number of selected components.
    const DIM: i32;
}

impl<T, I: IndexSeq> SwizzleProperties for Swizzle<T, I> {
    type Elem = T;
    type Indices = I;
    const DIM: i32 = I::LEN as i32;
}

/// Configuration of a [`Submatrix`].
pub trait SubmatrixProperties {
    /// The matrix the view looks into.
    type Base: MatrixProperties;
    type Elem;
    const ROWS: i32;
    const COLUMNS: i32;
}

impl<M: MatrixProperties, const ROWS: i32, const COLUMNS: i32> SubmatrixProperties
    for Submatrix<M, ROWS, COLUMNS>
{
    type Base = M;
    type Elem = M::Elem;
    const ROWS: i32 = ROWS;
    const COLUMNS: i32 = COLUMNS;
}

/// Configuration of a [`Quaternion`].
pub trait QuaternionProperties {
    type Elem;
    const PACKED: bool;
}

impl<T, const PACKED: bool> QuaternionProperties for Quaternion<T, PACKED> {
    type Elem = T;
    const PACKED: bool = PACKED;
}

/// Forwards property traits through references so that `&V` and `&mut V`
/// report the configuration of `V`.
macro_rules! forward_properties_through_refs {
    ($trait:ident { $(type $ty:ident;)* $(const $c:ident: $ct:ty;)* }) => {
        impl<X: $trait> $trait for &X {
            $(type $ty = X::$ty;)*
            $(const $c: $ct = X::$c;)*
        }

        impl<X: $trait> $trait for &mut X {
            $(type $ty = X::$ty;)*
            $(const $c: $ct = X::$c;)*
        }
    };
}

forward_properties_through_refs!(VectorProperties {
    type Elem;
    const DIM: i32;
    const PACKED: bool;
});

forward_properties_through_refs!(MatrixProperties {
    type Elem;
    type Order;
    type Layout;
    const ROWS: i32;
    const COLUMNS: i32;
    const ORDER: MulOrder;
    const LAYOUT: MemLayout;
    const PACKED: bool;
});

forward_properties_through_refs!(SwizzleProperties {
    type Elem;
    type Indices;
    const DIM: i32;
});

forward_properties_through_refs!(SubmatrixProperties {
    type Base;
    type Elem;
    const ROWS: i32;
    const COLUMNS: i32;
});

forward_properties_through_refs!(QuaternionProperties {
    type Elem;
    const PACKED: bool;
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FollowVector, PrecedeVector},
        entity::is_matrix,
        ix,
        layout::{opposite_layout, ColMajor, RowMajor},
    };
    use static_assertions::assert_type_eq_all;

    fn vector_config<V: VectorProperties>() -> (i32, bool) { (V::DIM, V::PACKED) }

    fn matrix_config<M: MatrixProperties>() -> (i32, i32, MulOrder, MemLayout, bool) {
        (M::ROWS, M::COLUMNS, M::ORDER, M::LAYOUT, M::PACKED)
    }

    #[test]
    fn packed_vector_of_f32() {
        type V = Vector<f32, 4, true>;
        assert_type_eq_all!(<V as VectorProperties>::Elem, f32);
        assert_eq!(vector_config::<V>(), (4, true));
    }

    #[test]
    fn vector_round_trip() {
        assert_eq!(vector_config::<Vector<u8, 1, false>>(), (1, false));
        assert_eq!(vector_config::<Vector<f64, 7, true>>(), (7, true));
        assert_eq!(vector_config::<Vector<f64, { crate::DYNAMIC }>>().0, crate::DYNAMIC);
        assert_eq!(vector_config::<&Vector<i16, 2, true>>(), (2, true));
        assert_eq!(vector_config::<&mut Vector<i16, 3, false>>(), (3, false));
        assert_type_eq_all!(<&Vector<i16, 2> as VectorProperties>::Elem, i16);
    }

    #[test]
    fn square_row_major_matrix_of_f64() {
        type M = Matrix<f64, 3, 3, PrecedeVector, RowMajor, false>;
        assert!(is_matrix::<M>());
        assert_type_eq_all!(<M as MatrixProperties>::Elem, f64);
        assert_eq!(
            matrix_config::<M>(),
            (3, 3, MulOrder::PrecedeVector, MemLayout::RowMajor, false)
        );
        assert_eq!(
            opposite_layout(<M as MatrixProperties>::LAYOUT),
            MemLayout::ColMajor
        );
    }

    #[test]
    fn matrix_round_trip() {
        type M = Matrix<i32, 2, 5, FollowVector, ColMajor, true>;
        assert_eq!(
            matrix_config::<M>(),
            (2, 5, MulOrder::FollowVector, MemLayout::ColMajor, true)
        );
        assert_eq!(matrix_config::<&M>(), matrix_config::<M>());
        assert_type_eq_all!(<M as MatrixProperties>::Order, FollowVector);
        assert_type_eq_all!(<M as MatrixProperties>::Layout, ColMajor);
        assert_type_eq_all!(<&mut M as MatrixProperties>::Layout, ColMajor);
    }

    #[test]
    fn swizzle_properties() {
        type S = Swizzle<f32, ix![3, 3, 1]>;
        assert_eq!(<S as SwizzleProperties>::DIM, 3);
        assert_eq!(<<S as SwizzleProperties>::Indices as IndexSeq>::indices(), vec![3, 3, 1]);
        assert_type_eq_all!(<&S as SwizzleProperties>::Elem, f32);
    }

    #[test]
    fn submatrix_properties() {
        type M = Matrix<f32, 4, 4, PrecedeVector, ColMajor, false>;
        type S = Submatrix<M, 3, 2>;
        assert_eq!(<S as SubmatrixProperties>::ROWS, 3);
        assert_eq!(<S as SubmatrixProperties>::COLUMNS, 2);
        assert_type_eq_all!(<S as SubmatrixProperties>::Base, M);
        assert_type_eq_all!(<S as SubmatrixProperties>::Elem, f32);
        assert_eq!(
            <<S as SubmatrixProperties>::Base as MatrixProperties>::LAYOUT,
            MemLayout::ColMajor
        );
    }

    #[test]
    fn quaternion_properties() {
        assert!(<Quaternion<f32, true> as QuaternionProperties>::PACKED);
        assert!(!<&Quaternion<f64, false> as QuaternionProperties>::PACKED);
        assert_type_eq_all!(<Quaternion<f64> as QuaternionProperties>::Elem, f64);
    }
}
