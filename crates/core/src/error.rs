use std::fmt;

/// Reason a cell-level placement or removal was rejected.
///
/// The public grid API reports soft failures as `bool`; this type keeps the
/// reason around for callers that want to log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    OutOfBounds,
    Occupied,
    Empty,
}

impl CellError {
    pub fn code(self) -> &'static str {
        match self {
            CellError::OutOfBounds => "out_of_bounds",
            CellError::Occupied => "occupied",
            CellError::Empty => "empty",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CellError::OutOfBounds => "cell lies outside the grid",
            CellError::Occupied => "cell already holds a building",
            CellError::Empty => "cell holds no building",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CellError {}
