use ndarray::Array2;

use crate::error::GridError;
use crate::grid::Grid;
use crate::location::Location;

/// A builder for [`Grid`]s, filled row by row or preallocated and then written cell by cell.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// The first problem encountered puts the builder in an invalid state; from then on every mutating method does nothing
/// and [`build`](Self::build) reports what went wrong.
#[derive(Clone, Debug)]
pub struct GridBuilder<T> {
    rows: Vec<Vec<T>>,
    // fixed by the first row pushed, or by `filled`
    width: Option<usize>,
    invalid_reasons: Vec<GridError>,
}

impl<T> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridBuilder<T> {
    /// Construct an empty builder. The width of the grid is fixed by the first row pushed.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            width: None,
            invalid_reasons: Vec::new(),
        }
    }

    /// Construct a builder for a `(rows, columns)` grid with every cell set to `value`.
    pub fn filled(dims: (usize, usize), value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows: vec![vec![value; dims.1]; dims.0],
            width: Some(dims.1),
            invalid_reasons: Vec::new(),
        }
    }

    /// Append a row below all existing rows.
    ///
    /// May cause the builder to enter a [`MalformedGrid`](GridError::MalformedGrid) invalid state if the row is not as wide as the rows before it.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn push_row<I>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let row: Vec<T> = row.into_iter().collect();
        match self.width {
            Some(expected) if expected != row.len() => {
                self.invalid_reasons.push(GridError::MalformedGrid { row: self.rows.len(), expected, found: row.len() });
                return self;
            }
            Some(_) => {}
            None => self.width = Some(row.len()),
        }

        self.rows.push(row);
        self
    }

    /// Overwrite the cell at `location`.
    ///
    /// May cause the builder to enter an [`InvalidCoordinate`](GridError::InvalidCoordinate) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set(&mut self, location: Location, value: T) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let (rows, cols) = (self.rows.len(), self.width.unwrap_or(0));
        match self.rows.get_mut(location.0).and_then(|row| row.get_mut(location.1)) {
            Some(cell) => *cell = value,
            None => self.invalid_reasons.push(GridError::InvalidCoordinate { location, rows, cols }),
        }

        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<GridError>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<GridError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`GridError`] will indicate why.
    pub fn build(&self) -> Result<Grid<T>, &Vec<GridError>>
    where
        T: Clone,
    {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(self.assemble())
    }

    /// Like [`build`](Self::build), but consumes the builder and reports only the first problem encountered.
    pub fn into_grid(self) -> Result<Grid<T>, GridError>
    where
        T: Clone,
    {
        if let Some(reason) = self.invalid_reasons.first() {
            return Err(reason.clone());
        }

        Ok(self.assemble())
    }

    fn assemble(&self) -> Grid<T>
    where
        T: Clone,
    {
        let dims = (self.rows.len(), self.width.unwrap_or(0));
        Grid {
            cells: Array2::from_shape_fn(dims, |(row, col)| self.rows[row][col].clone()),
        }
    }
}
