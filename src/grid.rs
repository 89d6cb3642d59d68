use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use ndarray::Array2;

use crate::builder::GridBuilder;
use crate::error::GridError;
use crate::location::Location;
use crate::step::Neighborhood;

/// A rectangular, fixed-size grid of symbols.
///
/// Every row has the same length, which is enforced at construction; see [`GridBuilder`].
/// A grid may have zero rows, in which case it also has zero columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub(crate) cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Build a grid from a slice of rows, cloning every cell.
    ///
    /// Fails with [`MalformedGrid`](GridError::MalformedGrid) on the first row whose length differs from the first row's.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let mut builder = GridBuilder::new();
        for row in rows {
            builder.push_row(row.as_ref().iter().cloned());
        }

        builder.into_grid()
    }

    /// The number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    /// The number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    /// `(rows, columns)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `location` lies inside this grid.
    #[inline]
    pub fn contains(&self, location: Location) -> bool {
        location.0 < self.nrows() && location.1 < self.ncols()
    }

    /// Fail with [`InvalidCoordinate`](GridError::InvalidCoordinate) unless `location` lies inside this grid.
    pub fn check(&self, location: Location) -> Result<(), GridError> {
        if self.contains(location) {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate { location, rows: self.nrows(), cols: self.ncols() })
        }
    }

    /// The cell at `location`, or `None` if it is out of bounds.
    pub fn get(&self, location: Location) -> Option<&T> {
        self.cells.get(location.as_index())
    }

    pub fn get_mut(&mut self, location: Location) -> Option<&mut T> {
        self.cells.get_mut(location.as_index())
    }

    /// Every location in this grid, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells.indexed_iter().map(|(ind, _)| Location::from(ind))
    }

    /// Every location holding `value`, in row-major order.
    pub fn find<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Location> + 'a
    where
        T: PartialEq,
    {
        self.cells.indexed_iter()
            .filter(move |(_, cell)| *cell == value)
            .map(|(ind, _)| Location::from(ind))
    }

    /// Neighbors of `location` under the step set `Sh` which lie inside this grid, with the step leading to each.
    pub fn neighbors<'a, Sh: Neighborhood + 'a>(&'a self, location: Location) -> impl Iterator<Item = (Sh, Location)> + 'a {
        Sh::neighbors_of(location).into_iter()
            .filter(move |(_, neighbor)| self.contains(*neighbor))
    }

    /// Neighbors of `location` under `Sh` for which `admissible(cell at location, cell at neighbor)` holds.
    ///
    /// Yields nothing if `location` itself is out of bounds.
    pub fn admissible_neighbors<'a, Sh, F>(&'a self, location: Location, admissible: F) -> impl Iterator<Item = (Sh, Location)> + 'a
    where
        Sh: Neighborhood + 'a,
        F: Fn(&T, &T) -> bool + 'a,
    {
        let here = self.get(location);
        self.neighbors::<Sh>(location)
            .filter(move |(_, neighbor)| match (here, self.get(*neighbor)) {
                (Some(here), Some(there)) => admissible(here, there),
                _ => false,
            })
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid { cells: self.cells.map(f) }
    }

    /// Copy the cells out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells.rows().into_iter()
            .map(|row| row.to_vec())
            .collect_vec()
    }
}

impl Grid<char> {
    /// Parse a character grid with one row per line.
    ///
    /// Whitespace within a line is ignored, so the output of [`Display`] parses back to the same grid.
    /// Lines that are blank are skipped.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut builder = GridBuilder::new();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            builder.push_row(line.chars().filter(|c| !c.is_whitespace()));
        }

        builder.into_grid()
    }
}

impl<T> Index<Location> for Grid<T> {
    type Output = T;

    fn index(&self, location: Location) -> &Self::Output {
        &self.cells[location.as_index()]
    }
}

impl<T> IndexMut<Location> for Grid<T> {
    fn index_mut(&mut self, location: Location) -> &mut Self::Output {
        &mut self.cells[location.as_index()]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
