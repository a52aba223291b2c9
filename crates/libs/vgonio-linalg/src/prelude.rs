//! Traits and markers needed by most generic code built on this crate.

pub use crate::{
    approx_eq::AlmostEqual,
    config::{
        FollowVector, IndexSeq, Matrix, MulOrder, Order, PrecedeVector, Quaternion, Submatrix,
        Swizzle, Vector,
    },
    dim::{ConcatFits, SumDimensions},
    elem::{MatMulElem, MatMulElemT},
    entity::{Entity, Shape},
    ix,
    layout::{ColMajor, Layout, MemLayout, RowMajor},
    meta::{Predicate, Quantify, TypeList},
    props::{
        MatrixProperties, QuaternionProperties, SubmatrixProperties, SwizzleProperties,
        VectorProperties,
    },
    tlist, DYNAMIC,
};
