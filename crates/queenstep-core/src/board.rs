//! Board dimension and row-to-column assignments.
//!
//! An [`Assignment`] is the unit of search: one cell per row, each holding
//! either the column of the queen in that row or nothing.

use std::fmt;

use crate::error::{QueensError, Result};

/// A validated, strictly positive board dimension.
///
/// # Examples
///
/// ```
/// use queenstep_core::BoardSize;
///
/// let size = BoardSize::new(8).unwrap();
/// assert_eq!(size.get(), 8);
///
/// assert!(BoardSize::new(0).is_err());
/// assert!(BoardSize::try_from(-3i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a board size, rejecting zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(QueensError::Configuration(
                "board size must be positive, got 0".to_string(),
            ));
        }
        Ok(Self(size))
    }

    /// Returns the number of rows (and columns).
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = QueensError;

    fn try_from(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(QueensError::Configuration(format!(
                "board size must be positive, got {size}"
            )));
        }
        let size = usize::try_from(size).map_err(|_| {
            QueensError::Configuration(format!("board size {size} does not fit this platform"))
        })?;
        Self::new(size)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Row-to-column mapping with exactly one cell per row.
///
/// `None` marks an unassigned row. Two assignments are equal (and hash
/// equally) when they map every row to the same column.
///
/// # Examples
///
/// ```
/// use queenstep_core::{Assignment, BoardSize};
///
/// let mut board = Assignment::empty(BoardSize::new(4).unwrap());
/// board.place(0, 1);
/// board.place(1, 3);
///
/// assert_eq!(board.assigned_count(), 2);
/// assert_eq!(board.first_unassigned(), Some(2));
/// assert_eq!(board.to_string(), "[1, 3, ., .]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAssignment"))]
pub struct Assignment {
    cells: Vec<Option<usize>>,
}

/// Unchecked wire form of an [`Assignment`]; validated through `from_cells`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAssignment {
    cells: Vec<Option<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAssignment> for Assignment {
    type Error = QueensError;

    fn try_from(raw: RawAssignment) -> Result<Self> {
        Self::from_cells(raw.cells)
    }
}

impl Assignment {
    /// Creates an all-unassigned board.
    pub fn empty(size: BoardSize) -> Self {
        Self {
            cells: vec![None; size.get()],
        }
    }

    /// Creates an assignment from raw cells.
    ///
    /// Fails if the cell list is empty or any column is out of range.
    pub fn from_cells(cells: Vec<Option<usize>>) -> Result<Self> {
        let size = BoardSize::new(cells.len())?;
        if let Some((row, col)) = cells
            .iter()
            .enumerate()
            .find_map(|(row, cell)| cell.filter(|&c| c >= size.get()).map(|c| (row, c)))
        {
            return Err(QueensError::InvalidState(format!(
                "row {row} holds column {col}, outside a {size} board"
            )));
        }
        Ok(Self { cells })
    }

    /// Creates a fully assigned board from one column per row.
    pub fn from_columns(columns: &[usize]) -> Result<Self> {
        Self::from_cells(columns.iter().copied().map(Some).collect())
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: an assignment has at least one row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the column of the queen in `row`, if any.
    #[inline]
    pub fn column(&self, row: usize) -> Option<usize> {
        self.cells.get(row).copied().flatten()
    }

    /// Assigns `row` to `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[inline]
    pub fn place(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.len(), "row {row} out of range");
        debug_assert!(col < self.len(), "column {col} out of range");
        self.cells[row] = Some(col);
    }

    /// Marks `row` as unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[inline]
    pub fn unplace(&mut self, row: usize) {
        debug_assert!(row < self.len(), "row {row} out of range");
        self.cells[row] = None;
    }

    /// Returns a copy of this board with `row` assigned to `col`.
    pub fn with_placement(&self, row: usize, col: usize) -> Self {
        let mut child = self.clone();
        child.place(row, col);
        child
    }

    /// Number of rows holding a queen.
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of rows without a queen.
    pub fn unassigned_count(&self) -> usize {
        self.len() - self.assigned_count()
    }

    /// Index of the first row without a queen.
    pub fn first_unassigned(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    /// Whether every row holds a queen.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over `(row, col)` for every placed queen.
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(row, cell)| cell.map(|col| (row, col)))
    }

    /// Returns the raw cells.
    #[inline]
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match cell {
                Some(col) => write!(f, "{col}")?,
                None => write!(f, ".")?,
            }
        }
        write!(f, "]")
    }
}
