//! Memory layout of matrices and its complement.

use crate::config::sealed::Sealed;

/// Memory layout of a matrix.
///
/// The elements of a matrix are stored in a contiguous block of memory; the
/// layout determines which dimension is contiguous in this block. It never
/// changes the mathematical result of an operation, only its performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemLayout {
    /// Row-major layout (or C layout). The first row comes first in memory,
    /// followed immediately by the second row; the column index varies the
    /// fastest.
    RowMajor,
    /// Column-major layout (or Fortran layout). The first column comes first
    /// in memory; the row index varies the fastest.
    ColMajor,
}

impl MemLayout {
    /// Returns the other layout.
    pub const fn opposite(self) -> Self {
        match self {
            MemLayout::RowMajor => MemLayout::ColMajor,
            MemLayout::ColMajor => MemLayout::RowMajor,
        }
    }

    pub const fn is_row_major(self) -> bool { matches!(self, MemLayout::RowMajor) }

    pub const fn is_col_major(self) -> bool { matches!(self, MemLayout::ColMajor) }

    /// Returns the `[row, column]` strides of a `rows` x `cols` matrix stored
    /// with this layout: the number of elements to skip to move one step
    /// along each dimension.
    pub const fn strides(self, rows: usize, cols: usize) -> [usize; 2] {
        match self {
            MemLayout::RowMajor => [cols, 1],
            MemLayout::ColMajor => [1, rows],
        }
    }
}

/// Returns the layout opposite to `layout`.
pub const fn opposite_layout(layout: MemLayout) -> MemLayout { layout.opposite() }

/// Type-level memory layout, carried as a matrix type parameter.
pub trait Layout: Sealed {
    const LAYOUT: MemLayout;
    /// The other layout.
    type Opposite: Layout;
}

/// Marker for [`MemLayout::RowMajor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Marker for [`MemLayout::ColMajor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColMajor;

impl Sealed for RowMajor {}
impl Sealed for ColMajor {}

impl Layout for RowMajor {
    const LAYOUT: MemLayout = MemLayout::RowMajor;
    type Opposite = ColMajor;
}

impl Layout for ColMajor {
    const LAYOUT: MemLayout = MemLayout::ColMajor;
    type Opposite = RowMajor;
}

/// The layout marker opposite to `L`, e.g. for the result of a transpose
/// that keeps the storage untouched.
pub type OppositeLayout<L> = <L as Layout>::Opposite;
