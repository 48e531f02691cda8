//! Growable dense matrix backing the clip memory.
//!
//! Growth is an explicit resize-and-copy step, append-only in both
//! dimensions: rows and columns are added, never removed or renumbered.

/// A dense row-major matrix that can grow one row or column at a time.
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix with the given shape, every cell set to `fill`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (row, col). Panics if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col]
    }

    /// Sets the cell at (row, col). Panics if out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col] = value;
    }

    /// Returns one row as a slice. Panics if out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "matrix row out of range");
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Appends a row filled with `fill`, preserving all existing cells.
    pub fn push_row(&mut self, fill: T) {
        self.data.resize(self.data.len() + self.cols, fill);
        self.rows += 1;
    }

    /// Appends a column filled with `fill`, preserving all existing cells.
    ///
    /// Row-major storage makes this the expensive direction: the buffer is
    /// rebuilt with one extra cell per row.
    pub fn push_col(&mut self, fill: T) {
        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for row in 0..self.rows {
            data.extend_from_slice(&self.data[row * self.cols..(row + 1) * self.cols]);
            data.push(fill);
        }
        self.data = data;
        self.cols = new_cols;
    }
}
