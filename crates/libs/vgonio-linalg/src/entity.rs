//! Classification of types into scalars and composite entities.
//!
//! Every type the library operates on is exactly one [`Shape`]. Generic code
//! asks the shape predicates ([`is_vector`], [`is_matrix`], ...) or their
//! marker counterparts ([`IsVector`], [`IsMatrix`], ...) to pick the right
//! implementation at compile time.

use core::fmt::{Display, Formatter};

use crate::{
    config::{IndexSeq, Matrix, Order, Quaternion, Submatrix, Swizzle, Vector},
    layout::Layout,
    meta::{Not, Predicate},
    props::MatrixProperties,
};

/// Closed set of shapes a type can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Vector,
    /// Reordered view over the components of a vector.
    Swizzle,
    Matrix,
    /// View over a region of a matrix.
    Submatrix,
    Quaternion,
}

impl Shape {
    /// Returns whether the shape is anything but a scalar.
    pub const fn is_composite(self) -> bool { !matches!(self, Shape::Scalar) }

    /// Lower-case name of the shape, as printed by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::Vector => "vector",
            Shape::Swizzle => "swizzle",
            Shape::Matrix => "matrix",
            Shape::Submatrix => "submatrix",
            Shape::Quaternion => "quaternion",
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result { f.write_str(self.name()) }
}

/// A type known to the classification layer.
///
/// Scalars implement it through [`impl_scalar_entity!`](crate::impl_scalar_entity),
/// composite types implement it once per shape. References classify exactly
/// like the type they point to.
pub trait Entity {
    /// The shape of the type.
    const SHAPE: Shape;
    /// Number of components along the vector dimension. Only vectors and
    /// swizzles declare anything but 1.
    const DIMENSION: i32 = 1;
    /// The type with references stripped.
    type Decayed: Entity;
}

impl<X: Entity> Entity for &X {
    const SHAPE: Shape = X::SHAPE;
    const DIMENSION: i32 = X::DIMENSION;
    type Decayed = X::Decayed;
}

impl<X: Entity> Entity for &mut X {
    const SHAPE: Shape = X::SHAPE;
    const DIMENSION: i32 = X::DIMENSION;
    type Decayed = X::Decayed;
}

/// Registers types as scalars.
///
/// Element types defined outside this crate (fixed-point numbers, complex
/// numbers, dual numbers...) must be registered before they can be used with
/// the classification layer. The orphan rule restricts a downstream crate to
/// registering types it defines itself: a type from a third crate, such as
/// `num_complex::Complex<f32>`, has to be wrapped in a local newtype first.
#[macro_export]
macro_rules! impl_scalar_entity {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::entity::Entity for $t {
                const SHAPE: $crate::entity::Shape = $crate::entity::Shape::Scalar;
                type Decayed = $t;
            }
        )*
    };
}

impl_scalar_entity!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl<T, const DIM: i32, const PACKED: bool> Entity for Vector<T, DIM, PACKED> {
    const SHAPE: Shape = Shape::Vector;
    const DIMENSION: i32 = DIM;
    type Decayed = Self;
}

impl<T, I: IndexSeq> Entity for Swizzle<T, I> {
    const SHAPE: Shape = Shape::Swizzle;
    const DIMENSION: i32 = I::LEN as i32;
    type Decayed = Self;
}

impl<T, const ROWS: i32, const COLUMNS: i32, O: Order, L: Layout, const PACKED: bool> Entity
    for Matrix<T, ROWS, COLUMNS, O, L, PACKED>
{
    const SHAPE: Shape = Shape::Matrix;
    type Decayed = Self;
}

impl<M: MatrixProperties, const ROWS: i32, const COLUMNS: i32> Entity
    for Submatrix<M, ROWS, COLUMNS>
{
    const SHAPE: Shape = Shape::Submatrix;
    type Decayed = Self;
}

impl<T, const PACKED: bool> Entity for Quaternion<T, PACKED> {
    const SHAPE: Shape = Shape::Quaternion;
    type Decayed = Self;
}

/// Returns the shape of `X`.
pub const fn shape_of<X: Entity>() -> Shape { X::SHAPE }

/// Generates, for each composite shape, the `is_*`/`not_*` const functions
/// and the `Is*`/`Not*` predicate markers.
macro_rules! shape_predicates {
    ($($shape:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Whether `X` is a ", stringify!($shape), ".")]
                pub const fn [<is_ $shape:lower>]<X: Entity>() -> bool {
                    matches!(X::SHAPE, Shape::$shape)
                }

                #[doc = concat!("Whether `X` is not a ", stringify!($shape), ".")]
                pub const fn [<not_ $shape:lower>]<X: Entity>() -> bool {
                    ![<is_ $shape:lower>]::<X>()
                }

                #[doc = concat!("Predicate holding for ", stringify!($shape), " types.")]
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct [<Is $shape>];

                impl<X: Entity> Predicate<X> for [<Is $shape>] {
                    const VALUE: bool = [<is_ $shape:lower>]::<X>();
                }

                #[doc = concat!("Predicate holding for anything but ", stringify!($shape), " types.")]
                pub type [<Not $shape>] = Not<[<Is $shape>]>;
            )*
        }
    };
}

shape_predicates!(Vector, Swizzle, Matrix, Submatrix, Quaternion);

/// Whether `X` is a vector or a swizzle, i.e. a sequence of components that
/// can be drawn from when building a vector.
pub const fn is_vector_or_swizzle<X: Entity>() -> bool {
    is_vector::<X>() || is_swizzle::<X>()
}

/// Whether `X` is a bare scalar: none of the composite shapes.
pub const fn is_scalar<X: Entity>() -> bool {
    not_vector::<X>()
        && not_swizzle::<X>()
        && not_matrix::<X>()
        && not_submatrix::<X>()
        && not_quaternion::<X>()
}

/// Predicate holding for vectors and swizzles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsVectorOrSwizzle;

impl<X: Entity> Predicate<X> for IsVectorOrSwizzle {
    const VALUE: bool = is_vector_or_swizzle::<X>();
}

/// Predicate holding for scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsScalar;

impl<X: Entity> Predicate<X> for IsScalar {
    const VALUE: bool = is_scalar::<X>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FollowVector, PrecedeVector},
        ix,
        layout::{ColMajor, RowMajor},
        meta::{all, any},
        tlist,
    };
    use static_assertions::{assert_type_eq_all, const_assert};

    type Vec3 = Vector<f32, 3>;
    type Vec4Packed = Vector<f32, 4, true>;
    type Mat33 = Matrix<f64, 3, 3, PrecedeVector, RowMajor, false>;
    type Mat43 = Matrix<f32, 4, 3, FollowVector, ColMajor, true>;
    type Swz = Swizzle<f32, ix![2, 1, 0]>;
    type Sub = Submatrix<Mat43, 2, 2>;
    type Quat = Quaternion<f64>;

    fn predicates<X: Entity>() -> [bool; 6] {
        [
            is_vector::<X>(),
            is_swizzle::<X>(),
            is_matrix::<X>(),
            is_submatrix::<X>(),
            is_quaternion::<X>(),
            is_scalar::<X>(),
        ]
    }

    macro_rules! check_exactly_one {
        ($($t:ty => $shape:ident),* $(,)?) => {
            $(
                let flags = predicates::<$t>();
                assert_eq!(
                    flags.iter().filter(|f| **f).count(),
                    1,
                    "{} matched {:?}",
                    stringify!($t),
                    flags
                );
                assert_eq!(shape_of::<$t>(), Shape::$shape, "{}", stringify!($t));
            )*
        };
    }

    #[test]
    fn classification_is_exclusive_and_total() {
        check_exactly_one!(
            i8 => Scalar, u64 => Scalar, usize => Scalar, f32 => Scalar, f64 => Scalar,
            bool => Scalar, char => Scalar,
            Vec3 => Vector, Vec4Packed => Vector, Vector<i32, 1> => Vector,
            Swz => Swizzle, Swizzle<u8, ix![0]> => Swizzle,
            Mat33 => Matrix, Mat43 => Matrix,
            Sub => Submatrix,
            Quat => Quaternion, Quaternion<f32, true> => Quaternion,
        );
    }

    #[test]
    fn scalar_classification() {
        const_assert!(is_scalar::<i32>());
        assert_eq!(predicates::<i32>(), [false, false, false, false, false, true]);
        assert!(!Shape::Scalar.is_composite());
    }

    #[test]
    fn references_classify_like_their_target() {
        assert_eq!(predicates::<&Vec3>(), predicates::<Vec3>());
        assert_eq!(predicates::<&mut Mat33>(), predicates::<Mat33>());
        assert_eq!(predicates::<&&Quat>(), predicates::<Quat>());
        assert_eq!(predicates::<&f64>(), predicates::<f64>());
        assert_eq!(<&Swz as Entity>::DIMENSION, 3);
        assert_type_eq_all!(<&&mut Vec3 as Entity>::Decayed, Vec3);
        assert_type_eq_all!(<&f32 as Entity>::Decayed, f32);
    }

    #[test]
    fn negations() {
        assert!(not_vector::<Mat33>());
        assert!(!not_vector::<Vec3>());
        assert!(not_matrix::<Sub>());
        assert!(not_submatrix::<Mat33>());
        assert!(not_quaternion::<Vec3>());
        assert!(not_swizzle::<Vec3>());
    }

    #[test]
    fn vector_or_swizzle() {
        assert!(is_vector_or_swizzle::<Vec3>());
        assert!(is_vector_or_swizzle::<Swz>());
        assert!(!is_vector_or_swizzle::<f32>());
        assert!(!is_vector_or_swizzle::<Mat33>());
        assert!(!is_vector_or_swizzle::<Quat>());
    }

    #[test]
    fn quantified_predicates() {
        assert!(all::<IsScalar, tlist![i32, f32]>());
        assert!(!any::<IsMatrix, tlist![i32, Vec3]>());
        assert!(any::<IsMatrix, tlist![i32, Vec3, Mat33]>());
        assert!(all::<IsVectorOrSwizzle, tlist![Vec3, Swz, &Vec4Packed]>());
        assert!(!all::<IsVectorOrSwizzle, tlist![Vec3, f32]>());
        assert!(all::<NotMatrix, tlist![Vec3, Sub, Quat, u8]>());
        assert!(!any::<IsQuaternion, tlist![]>());
        assert!(all::<IsSubmatrix, tlist![]>());
    }

    #[test]
    fn shape_display() {
        assert_eq!(Shape::Submatrix.to_string(), "submatrix");
        assert_eq!(format!("{}", Shape::Vector), "vector");
    }
}
