//! Square travel distance matrix.

use crate::error::DistanceError;

/// Pairwise travel distances in meters.
///
/// Rows and columns follow the order of the points the matrix was requested
/// for. `None` marks a pair the provider could not route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<u64>>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, rejecting anything that is not square.
    pub fn from_rows(rows: Vec<Vec<Option<u64>>>) -> Result<Self, DistanceError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(DistanceError::Malformed(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Builds a fully reachable matrix.
    pub fn from_distances(rows: Vec<Vec<u64>>) -> Result<Self, DistanceError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    /// Checks that the matrix covers exactly `expected` points.
    pub fn ensure_size(&self, expected: usize) -> Result<(), DistanceError> {
        if self.size != expected {
            return Err(DistanceError::DimensionMismatch {
                expected,
                actual: self.size,
            });
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from `from` to `to`, or `None` if unreachable.
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<u64> {
        assert!(from < self.size && to < self.size, "matrix index out of bounds");
        self.cells[from * self.size + to]
    }

    /// All distances from `from`, indexed by destination.
    pub fn row(&self, from: usize) -> &[Option<u64>] {
        &self.cells[from * self.size..(from + 1) * self.size]
    }
}
