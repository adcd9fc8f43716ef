use std::fmt;

use thiserror::Error;

/// Which axis of a matrix an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Cols => write!(f, "cols"),
        }
    }
}

/// A `(rows, cols)` pair, printed as `RxC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Binary operations that check the shapes of their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    AddColumn,
    Subtract,
    Hadamard,
    Dot,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::AddColumn => "broadcast-add",
            Operation::Subtract => "subtract",
            Operation::Hadamard => "multiply elementwise",
            Operation::Dot => "dot",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A requested row or column count was zero.
    #[error("can't create a matrix with {value} {axis}")]
    InvalidDimension { axis: Axis, value: usize },

    #[error("index {index} is out of bounds for {axis} with size {size}")]
    IndexOutOfBounds { axis: Axis, index: usize, size: usize },

    /// Operand shapes are incompatible. For `Dot` the relevant pair is
    /// `lhs.cols` against `rhs.rows`.
    #[error("{}", describe_mismatch(.op, .lhs, .rhs))]
    DimensionMismatch { op: Operation, lhs: Shape, rhs: Shape },

    #[error("row {row} has {actual} elements, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },
}

fn describe_mismatch(op: &Operation, lhs: &Shape, rhs: &Shape) -> String {
    match op {
        Operation::Dot => format!(
            "can't dot a {lhs} matrix with a {rhs} matrix: a.cols() = {}, b.rows() = {}",
            lhs.cols, rhs.rows
        ),
        Operation::AddColumn => format!(
            "can't broadcast-add a {rhs} matrix onto a {lhs} matrix: expected a {}x1 column",
            lhs.rows
        ),
        _ => format!("matrices of shapes {lhs} and {rhs} can't {op}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_mismatch_reports_inner_dimensions() {
        let err = MatrixError::DimensionMismatch {
            op: Operation::Dot,
            lhs: Shape { rows: 2, cols: 3 },
            rhs: Shape { rows: 4, cols: 1 },
        };
        let msg = err.to_string();
        assert!(msg.contains("a.cols() = 3"));
        assert!(msg.contains("b.rows() = 4"));
    }

    #[test]
    fn invalid_dimension_names_axis_and_value() {
        let err = MatrixError::InvalidDimension { axis: Axis::Cols, value: 0 };
        assert_eq!(err.to_string(), "can't create a matrix with 0 cols");
    }

    #[test]
    fn elementwise_mismatch_names_operation() {
        let err = MatrixError::DimensionMismatch {
            op: Operation::Subtract,
            lhs: Shape { rows: 1, cols: 2 },
            rhs: Shape { rows: 2, cols: 1 },
        };
        assert_eq!(err.to_string(), "matrices of shapes 1x2 and 2x1 can't subtract");
    }
}
