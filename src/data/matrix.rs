//! # Dense matrices
//!
//! Wrapping a `Vec` in row major order such that it has a fixed shape. Used both for the unit
//! costs of a transportation problem and for the quantities shipped in a solution.
use std::ops::{Index, IndexMut};
use std::slice::Iter;

/// Uses a single `Vec` as underlying data structure. Shape is fixed at creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<T> {
    data: Vec<T>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<T> Dense<T> {
    /// Create a matrix from a list of rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of the matrix, each should have length `nr_columns`.
    /// * `nr_columns`: Number of columns; needed separately because there might be no rows.
    pub fn from_rows(rows: Vec<Vec<T>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let nr_rows = rows.len();
        Self {
            data: rows.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this matrix are equal to.
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns.
    pub fn constant(value: T, nr_rows: usize, nr_columns: usize) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Values of a single row, in column order.
    pub fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Iterate over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nr_rows).map(move |i| self.row(i))
    }

    /// Values of a single column, in row order.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &T> + Clone + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().skip(j).step_by(self.nr_columns)
    }

    /// All values, row by row.
    pub fn values(&self) -> Iter<'_, T> {
        self.data.iter()
    }
}

impl Dense<u64> {
    /// Sum of each of the rows.
    pub fn row_sums(&self) -> Vec<u64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }

    /// Sum of each of the columns.
    pub fn column_sums(&self) -> Vec<u64> {
        (0..self.nr_columns).map(|j| self.column(j).sum()).collect()
    }

    /// Number of cells holding a nonzero value.
    pub fn nr_nonzero(&self) -> usize {
        self.data.iter().filter(|&&value| value > 0).count()
    }
}

impl<T> Index<(usize, usize)> for Dense<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        &self.data[i * self.nr_columns + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Dense<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows && j < self.nr_columns);

        &mut self.data[i * self.nr_columns + j]
    }
}

#[cfg(test)]
mod test {
    use crate::data::matrix::Dense;

    #[test]
    fn indexing() {
        let mut m = Dense::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], 3);
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.row(0), &[1, 2, 3]);
        assert_eq!(m.column(2).copied().collect::<Vec<_>>(), vec![3, 6]);

        m[(0, 1)] = 7;
        assert_eq!(m.row(0), &[1, 7, 3]);
    }

    #[test]
    fn sums() {
        let m = Dense::from_rows(vec![vec![100_u64, 0, 0], vec![50, 150, 0], vec![0, 100, 200]], 3);
        assert_eq!(m.row_sums(), vec![100, 200, 300]);
        assert_eq!(m.column_sums(), vec![150, 250, 200]);
        assert_eq!(m.nr_nonzero(), 5);
    }

    #[test]
    fn without_rows() {
        let m = Dense::<u64>::constant(0, 0, 2);
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.column_sums(), vec![0, 0]);
        assert_eq!(m.column(1).count(), 0);

        let m = Dense::<u64>::constant(0, 2, 0);
        assert_eq!(m.row_sums(), vec![0, 0]);
        assert!(m.column_sums().is_empty());
    }
}
