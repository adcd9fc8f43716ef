use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::math::error::{Axis, MatrixError, Operation, Shape};

/// Dense, row-major matrix of `f64`.
///
/// Always at least 1x1 and never ragged. Every operation except `set` and
/// `transpose_in_place` leaves its operands untouched and returns a new matrix.
/// Serializes as a nested array of rows and is re-validated on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    fn check_dimensions(rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows < 1 {
            return Err(MatrixError::InvalidDimension { axis: Axis::Rows, value: rows });
        }
        if cols < 1 {
            return Err(MatrixError::InvalidDimension { axis: Axis::Cols, value: cols });
        }
        Ok(())
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        Matrix::filled(rows, cols, 0.0)
    }

    /// Every cell set to `value`. Handy for the `1 - M` terms of a formula.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Matrix, MatrixError> {
        Matrix::check_dimensions(rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        })
    }

    /// Every cell drawn from `uniform[0, 1) * scale`.
    ///
    /// Weight matrices are seeded with a small `scale` so tanh and sigmoid
    /// start out in their steep region instead of their flat tails.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        scale: f64,
        rng: &mut R,
    ) -> Result<Matrix, MatrixError> {
        let mut res = Matrix::zeros(rows, cols)?;

        for row in res.data.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen::<f64>() * scale;
            }
        }

        Ok(res)
    }

    /// Zero-filled single-column matrix.
    pub fn column_vector(rows: usize) -> Result<Matrix, MatrixError> {
        Matrix::zeros(rows, 1)
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        Matrix::check_dimensions(rows, cols)?;

        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::RaggedRow { row, expected: cols, actual: bad.len() });
        }

        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape { rows: self.rows, cols: self.cols }
    }

    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<(), MatrixError> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Rows,
                index: i,
                size: self.rows,
            });
        }
        if j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Cols,
                index: j,
                size: self.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        self.check_bounds(i, j)?;
        Ok(self.data[i][j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatrixError> {
        self.check_bounds(i, j)?;
        self.data[i][j] = value;
        Ok(())
    }

    /// Row-major view of the cells.
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![vec![0.0; self.rows]; self.cols];

        for (i, row) in self.data.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                data[j][i] = value;
            }
        }

        Matrix { rows: self.cols, cols: self.rows, data }
    }

    /// Replaces the receiver with its transpose.
    ///
    /// Square matrices are swapped across the diagonal without allocating;
    /// rectangular ones adopt a freshly allocated grid with swapped dimensions.
    pub fn transpose_in_place(&mut self) {
        if self.is_square() {
            for i in 0..self.rows {
                for j in (i + 1)..self.cols {
                    let upper = self.data[i][j];
                    self.data[i][j] = self.data[j][i];
                    self.data[j][i] = upper;
                }
            }
        } else {
            *self = self.transpose();
        }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: Operation, functor: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if !self.same_shape(rhs) {
            return Err(MatrixError::DimensionMismatch { op, lhs: self.shape(), rhs: rhs.shape() });
        }

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
            })
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, Operation::Add, |a, b| a + b)
    }

    /// Adds a `rows x 1` column to every column of `self`.
    ///
    /// This is the only broadcasting operation; `add` itself requires equal
    /// shapes. Bias vectors reach every example through here.
    pub fn add_column(&self, column: &Matrix) -> Result<Matrix, MatrixError> {
        if column.cols != 1 || column.rows != self.rows {
            return Err(MatrixError::DimensionMismatch {
                op: Operation::AddColumn,
                lhs: self.shape(),
                rhs: column.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(column.data.iter())
            .map(|(row, bias)| row.iter().map(|x| x + bias[0]).collect())
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    pub fn subtract(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, Operation::Subtract, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, Operation::Hadamard, |a, b| a * b)
    }

    /// Matrix product. Requires `self.cols() == rhs.rows()`.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: Operation::Dot,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut data = vec![vec![0.0; rhs.cols]; self.rows];

        for (i, out_row) in data.iter_mut().enumerate() {
            for (j, cell) in out_row.iter_mut().enumerate() {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                *cell = sum;
            }
        }

        Ok(Matrix { rows: self.rows, cols: rhs.cols, data })
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        self.map(|x| x * scalar)
    }

    /// Sums each row, giving a `rows x 1` column.
    pub fn sum_rows(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row.iter().sum()]).collect(),
        }
    }

    pub fn exp(&self) -> Matrix {
        self.map(f64::exp)
    }

    /// Natural logarithm of every cell. `ln(0)` is `-inf`; no clamping here.
    pub fn ln(&self) -> Matrix {
        self.map(f64::ln)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_data(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            let cells: Vec<String> = row.iter().map(|x| format!("{x}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
