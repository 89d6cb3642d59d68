use thiserror::Error;

use crate::location::Location;

/// Reasons a grid or a traversal over it may be rejected.
///
/// All of these are raised before any traversal starts; a traversal over a well-formed grid with valid inputs never fails.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A location lies outside a grid with `rows` rows and `cols` columns.
    #[error("location {location} is outside the {rows}x{cols} grid")]
    InvalidCoordinate { location: Location, rows: usize, cols: usize },
    /// Row `row` has `found` cells where `expected` were required.
    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid { row: usize, expected: usize, found: usize },
    /// Dictionary entry `index` is the empty string.
    #[error("dictionary entry {index} is empty")]
    EmptyWord { index: usize },
}
