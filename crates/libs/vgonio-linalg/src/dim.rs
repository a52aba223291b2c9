//! Dimension arithmetic.
//!
//! Vectors can be built by concatenating scalars, vectors and swizzles, e.g. a
//! 4-vector from a 3-vector and a scalar. The functions here compute the
//! number of components such an argument list provides so that the
//! constructor can compare it against its own dimension at compile time.

use crate::{
    entity::{is_vector_or_swizzle, Entity},
    meta::{Cons, Nil, TypeList},
    props::VectorProperties,
    DYNAMIC,
};

/// Number of components `X` contributes to a concatenation: the declared
/// length for vectors and swizzles, 1 for everything else.
pub const fn dimension_of<X: Entity>() -> i32 {
    if is_vector_or_swizzle::<X>() {
        X::DIMENSION
    } else {
        1
    }
}

/// Sum of the dimensions of the types in a list.
pub trait SumDimensions: TypeList {
    /// 0 for the empty list; [`DYNAMIC`] as soon as one element has a
    /// non-positive dimension, whatever the other elements are.
    const SUM: i32;
}

impl SumDimensions for Nil {
    const SUM: i32 = 0;
}

impl<H: Entity, T: SumDimensions> SumDimensions for Cons<H, T> {
    const SUM: i32 = {
        let head = dimension_of::<H>();
        // The rest is either a sum of positive dimensions or DYNAMIC.
        if head <= 0 || T::SUM < 0 {
            DYNAMIC
        } else {
            head + T::SUM
        }
    };
}

/// Returns the summed dimension of the types in `L`.
pub const fn sum_dimensions<L: SumDimensions>() -> i32 { L::SUM }

/// Whether the components listed in `Self` build exactly a `Target` vector.
///
/// Neither side may be dynamic: concatenation into or from dynamically sized
/// vectors is not supported.
pub trait ConcatFits<Target: VectorProperties>: SumDimensions {
    const FITS: bool = Self::SUM > 0 && Self::SUM == Target::DIM;

    /// Evaluating this constant fails compilation when the components do not
    /// fit the target.
    const ASSERT: () = assert!(
        Self::FITS,
        "concatenated dimensions do not match the dimension of the target vector"
    );
}

impl<L: SumDimensions, Target: VectorProperties> ConcatFits<Target> for L {}

/// Rejects, at compile time, a component list `L` whose summed dimension
/// differs from the dimension of `Target`.
///
/// Meant to be called from concatenating constructors; the check happens when
/// the calling function is instantiated. Nothing is ever truncated or padded.
///
/// ```
/// use vgonio_linalg::{assert_concat_fits, tlist, Vector};
///
/// const _: () = assert_concat_fits::<Vector<f32, 4>, tlist![Vector<f32, 3>, f32]>();
/// ```
///
/// A 3-vector and a 2-vector do not make a 4-vector:
///
/// ```compile_fail
/// use vgonio_linalg::{assert_concat_fits, tlist, Vector};
///
/// const _: () = assert_concat_fits::<Vector<f32, 4>, tlist![Vector<f32, 3>, Vector<f32, 2>]>();
/// ```
pub const fn assert_concat_fits<Target: VectorProperties, L: SumDimensions>() {
    #[allow(clippy::let_unit_value)]
    let () = <L as ConcatFits<Target>>::ASSERT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Matrix, Quaternion, Swizzle, Vector},
        ix,
        meta::RepeatType,
        tlist,
    };
    use static_assertions::const_assert_eq;

    type Vec2 = Vector<f32, 2>;
    type Vec3 = Vector<f32, 3>;
    type Vec4 = Vector<f32, 4>;
    type DynVec = Vector<f32, { DYNAMIC }>;

    #[test]
    fn dimension_of_scalars_and_composites() {
        assert_eq!(dimension_of::<i32>(), 1);
        assert_eq!(dimension_of::<f64>(), 1);
        assert_eq!(dimension_of::<Vec3>(), 3);
        assert_eq!(dimension_of::<&Vec4>(), 4);
        assert_eq!(dimension_of::<Vector<u8, 9, true>>(), 9);
        assert_eq!(dimension_of::<Swizzle<f32, ix![0, 0]>>(), 2);
        assert_eq!(dimension_of::<Swizzle<f32, ix![3, 2, 1, 0]>>(), 4);
        // Matrices and quaternions are single arguments.
        assert_eq!(dimension_of::<Matrix<f32, 4, 4>>(), 1);
        assert_eq!(dimension_of::<Quaternion<f32>>(), 1);
        assert_eq!(dimension_of::<DynVec>(), DYNAMIC);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        const_assert_eq!(sum_dimensions::<tlist![]>(), 0);
    }

    #[test]
    fn sum_of_mixed_arguments() {
        assert_eq!(sum_dimensions::<tlist![Vec3, f32, Vec2]>(), 6);
        assert_eq!(sum_dimensions::<tlist![f32, f32, f32]>(), 3);
        assert_eq!(sum_dimensions::<tlist![Swizzle<f32, ix![2, 1]>, Vec2]>(), 4);
        assert_eq!(sum_dimensions::<RepeatType<Vec4, 4>>(), 16);
    }

    #[test]
    fn dynamic_dimension_propagates() {
        assert_eq!(sum_dimensions::<tlist![DynVec]>(), DYNAMIC);
        assert_eq!(sum_dimensions::<tlist![DynVec, Vec3, f32]>(), DYNAMIC);
        assert_eq!(sum_dimensions::<tlist![Vec3, f32, DynVec]>(), DYNAMIC);
        assert_eq!(sum_dimensions::<tlist![Vec3, DynVec, Vec4]>(), DYNAMIC);
        assert_eq!(sum_dimensions::<tlist![Vector<f32, 0>, Vec2]>(), DYNAMIC);
        assert_eq!(sum_dimensions::<tlist![Vec2, Swizzle<f32, ix![]>]>(), DYNAMIC);
    }

    #[test]
    fn concat_fits() {
        assert!(<tlist![Vec3, f32] as ConcatFits<Vec4>>::FITS);
        assert!(<tlist![f32, Swizzle<f32, ix![1, 0]>, f32] as ConcatFits<Vec4>>::FITS);
        assert!(!<tlist![Vec3, Vec2] as ConcatFits<Vec4>>::FITS);
        assert!(!<tlist![Vec2] as ConcatFits<Vec4>>::FITS);
        assert!(!<tlist![] as ConcatFits<Vector<f32, 0>>>::FITS);
        assert!(!<tlist![DynVec] as ConcatFits<DynVec>>::FITS);
    }

    const _: () = assert_concat_fits::<Vec4, tlist![Vec2, f32, f32]>();
    const _: () = assert_concat_fits::<Vector<f64, 6>, tlist![Vec3, f32, Vec2]>();

    #[test]
    fn repeated_scalars_add_one_each() {
        assert_eq!(sum_dimensions::<RepeatType<f32, 0>>(), 0);
        assert_eq!(sum_dimensions::<RepeatType<f32, 1>>(), 1);
        assert_eq!(sum_dimensions::<RepeatType<i64, 7>>(), 7);
        assert_eq!(sum_dimensions::<RepeatType<u8, 16>>(), 16);
    }
}
