//! Row-major dense matrix and its core operations.

use ergode_graph::Graph;
use ergode_tarjan::Class;

use crate::error::MatrixError;

/// Dense `rows x cols` matrix of `f64`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Creates a matrix from row slices.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when rows have unequal
    /// lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        for row in rows {
            if row.len() != n_cols {
                return Err(MatrixError::DimensionMismatch {
                    op: "assemble",
                    left_rows: rows.len(),
                    left_cols: n_cols,
                    right_rows: 1,
                    right_cols: row.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols: n_cols,
            data: rows.concat(),
        })
    }

    /// Builds the `N x N` transition matrix of a graph: entry `(i, j)` is the
    /// probability of the transition `i+1 -> j+1`, 0 where no edge exists.
    /// Parallel transitions to the same target accumulate.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.n_states();
        let mut m = Self::zeros(n, n);
        for (from, to, prob) in graph.transitions() {
            let current = m.get(from - 1, to - 1);
            m.set(from - 1, to - 1, current + prob);
        }
        m
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at `(row, col)`, zero-based.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets the element at `(row, col)`, zero-based.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.cols + col] = val;
    }

    /// Borrows one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Standard matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when `self.cols != other.rows`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(self.shape_error("multiply", other));
        }
        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Copies `src` into `self` elementwise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] on any shape difference.
    pub fn copy_from(&mut self, src: &Matrix) -> Result<(), MatrixError> {
        if self.rows != src.rows || self.cols != src.cols {
            return Err(self.shape_error("copy", src));
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Sum of absolute elementwise differences.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] on any shape difference.
    pub fn diff_norm(&self, other: &Matrix) -> Result<f64, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.shape_error("diff", other));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .sum())
    }

    /// All rows, restricted to the columns of a class's member states
    /// (1-indexed ids, converted to zero-based columns).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::MemberOutOfRange`] if any member id falls
    /// outside the column range; nothing is returned partially.
    pub fn column_submatrix(&self, class: &Class) -> Result<Matrix, MatrixError> {
        let members = class.members();
        for &state in members {
            if state == 0 || state > self.cols {
                return Err(self.member_error(state));
            }
        }
        let mut result = Matrix::zeros(self.rows, members.len());
        for i in 0..self.rows {
            for (jc, &state) in members.iter().enumerate() {
                result.set(i, jc, self.get(i, state - 1));
            }
        }
        Ok(result)
    }

    /// Rows *and* columns restricted to a class's member states, yielding the
    /// square submatrix the period analysis runs on.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::MemberOutOfRange`] if any member id falls
    /// outside the row or column range.
    pub fn square_submatrix(&self, class: &Class) -> Result<Matrix, MatrixError> {
        let members = class.members();
        for &state in members {
            if state == 0 || state > self.rows || state > self.cols {
                return Err(self.member_error(state));
            }
        }
        let size = members.len();
        let mut result = Matrix::zeros(size, size);
        for (ic, &row_state) in members.iter().enumerate() {
            for (jc, &col_state) in members.iter().enumerate() {
                result.set(ic, jc, self.get(row_state - 1, col_state - 1));
            }
        }
        Ok(result)
    }

    fn shape_error(&self, op: &'static str, other: &Matrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }

    fn member_error(&self, state: usize) -> MatrixError {
        MatrixError::MemberOutOfRange {
            state,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergode_tarjan::decompose;

    fn tol_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "expected {b}, got {a}");
    }

    #[test]
    fn zeros_shape_and_content() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_square());
        for i in 0..2 {
            for j in 0..3 {
                tol_eq(m.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn identity_diagonal() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                tol_eq(m.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
    }

    #[test]
    fn from_graph_places_probabilities() {
        let mut g = Graph::new(3);
        g.add_transition(1, 2, 0.5).unwrap();
        g.add_transition(1, 3, 0.5).unwrap();
        g.add_transition(2, 1, 1.0).unwrap();
        g.add_transition(3, 3, 1.0).unwrap();

        let m = Matrix::from_graph(&g);
        tol_eq(m.get(0, 1), 0.5);
        tol_eq(m.get(0, 2), 0.5);
        tol_eq(m.get(1, 0), 1.0);
        tol_eq(m.get(2, 2), 1.0);
        tol_eq(m.get(0, 0), 0.0);
    }

    #[test]
    fn from_graph_accumulates_parallel_edges() {
        let mut g = Graph::new(2);
        g.add_transition(1, 2, 0.3).unwrap();
        g.add_transition(1, 2, 0.7).unwrap();
        let m = Matrix::from_graph(&g);
        tol_eq(m.get(0, 1), 1.0);
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let m = Matrix::from_rows(&[vec![0.2, 0.8], vec![0.6, 0.4]]).unwrap();
        let product = m.multiply(&Matrix::identity(2)).unwrap();
        tol_eq(m.diff_norm(&product).unwrap(), 0.0);
    }

    #[test]
    fn multiply_known_product() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        tol_eq(c.get(0, 0), 19.0);
        tol_eq(c.get(0, 1), 22.0);
        tol_eq(c.get(1, 0), 43.0);
        tol_eq(c.get(1, 1), 50.0);
    }

    #[test]
    fn multiply_rectangular_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 4);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 4);
    }

    #[test]
    fn multiply_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        assert!(matches!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left_cols: 3,
                right_rows: 2,
                ..
            })
        ));
    }

    #[test]
    fn copy_from_matches_source() {
        let src = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut dst = Matrix::zeros(2, 2);
        dst.copy_from(&src).unwrap();
        tol_eq(dst.diff_norm(&src).unwrap(), 0.0);
    }

    #[test]
    fn copy_from_shape_mismatch() {
        let src = Matrix::zeros(2, 2);
        let mut dst = Matrix::zeros(2, 3);
        assert!(matches!(
            dst.copy_from(&src),
            Err(MatrixError::DimensionMismatch { op: "copy", .. })
        ));
    }

    #[test]
    fn diff_norm_of_self_is_zero() {
        let m = Matrix::from_rows(&[vec![0.1, 0.9], vec![0.5, 0.5]]).unwrap();
        tol_eq(m.diff_norm(&m).unwrap(), 0.0);
    }

    #[test]
    fn diff_norm_sums_absolute_differences() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![3.0, 0.5]]).unwrap();
        tol_eq(a.diff_norm(&b).unwrap(), 3.5);
    }

    #[test]
    fn diff_norm_shape_mismatch() {
        let a = Matrix::zeros(1, 2);
        let b = Matrix::zeros(2, 1);
        assert!(matches!(
            a.diff_norm(&b),
            Err(MatrixError::DimensionMismatch { op: "diff", .. })
        ));
    }

    fn scenario() -> (Graph, ergode_tarjan::Partition) {
        let mut g = Graph::new(3);
        g.add_transition(1, 2, 0.5).unwrap();
        g.add_transition(1, 3, 0.5).unwrap();
        g.add_transition(2, 1, 1.0).unwrap();
        g.add_transition(3, 3, 1.0).unwrap();
        let p = decompose(&g);
        (g, p)
    }

    #[test]
    fn column_submatrix_extracts_member_columns() {
        let (g, p) = scenario();
        let m = Matrix::from_graph(&g);
        // C2 = {1, 2} (pop order {2, 1}).
        let sub = m.column_submatrix(&p.classes()[1]).unwrap();
        assert_eq!(sub.rows(), 3);
        assert_eq!(sub.cols(), 2);
        let members = p.classes()[1].members();
        for i in 0..3 {
            for (jc, &state) in members.iter().enumerate() {
                tol_eq(sub.get(i, jc), m.get(i, state - 1));
            }
        }
    }

    #[test]
    fn square_submatrix_restricts_rows_and_columns() {
        let (g, p) = scenario();
        let m = Matrix::from_graph(&g);
        let class = &p.classes()[1]; // {2, 1}
        let sub = m.square_submatrix(class).unwrap();
        assert_eq!(sub.rows(), 2);
        assert_eq!(sub.cols(), 2);
        let members = class.members();
        for (ic, &r) in members.iter().enumerate() {
            for (jc, &c) in members.iter().enumerate() {
                tol_eq(sub.get(ic, jc), m.get(r - 1, c - 1));
            }
        }
    }

    #[test]
    fn submatrix_rejects_out_of_range_member() {
        // A hand-built class referencing state 5 against a 3x3 matrix.
        let mut g = Graph::new(5);
        g.add_transition(5, 5, 1.0).unwrap();
        let p = decompose(&g);
        let big = p
            .iter()
            .map(|(_, c)| c)
            .find(|c| c.contains(5))
            .cloned()
            .unwrap();

        let m = Matrix::zeros(3, 3);
        assert!(matches!(
            m.column_submatrix(&big),
            Err(MatrixError::MemberOutOfRange { state: 5, .. })
        ));
        assert!(matches!(
            m.square_submatrix(&big),
            Err(MatrixError::MemberOutOfRange { state: 5, .. })
        ));
    }
}
