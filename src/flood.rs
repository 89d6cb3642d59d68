use std::fmt::Debug;

use itertools::Itertools;
use log::{debug, info, trace};

use crate::error::GridError;
use crate::grid::Grid;
use crate::location::Location;
use crate::step::OrthogonalStep;

/// Recolor the 4-connected region of `target` cells containing `start` to `replacement`, in place.
///
/// Returns the number of cells painted. Nothing is painted if the cell at `start` is not `target`, or if `target` and
/// `replacement` are the same color.
///
/// Fails with [`InvalidCoordinate`](GridError::InvalidCoordinate) if `start` is not inside `grid`.
///
/// # Traversal
/// The start cell is painted first and pushed onto an explicit stack.
/// Each popped cell paints and pushes every axis-aligned neighbor still holding `target`.
/// A painted cell no longer matches `target`, so painting is itself the visited set and no cell is pushed twice.
pub fn flood_fill<T>(grid: &mut Grid<T>, start: Location, target: &T, replacement: &T) -> Result<usize, GridError>
where
    T: Clone + PartialEq + Debug,
{
    grid.check(start)?;
    debug!("flood fill from {start}: {target:?} -> {replacement:?}");

    if grid[start] != *target || target == replacement {
        return Ok(0);
    }

    grid[start] = replacement.clone();
    let mut painted = 1;
    let mut stack = vec![start];

    while let Some(location) = stack.pop() {
        let next = grid.neighbors::<OrthogonalStep>(location)
            .filter(|(_, neighbor)| grid[*neighbor] == *target)
            .map(|(_, neighbor)| neighbor)
            .collect_vec();

        for neighbor in next {
            trace!("painting {neighbor}");
            grid[neighbor] = replacement.clone();
            painted += 1;
            stack.push(neighbor);
        }
    }

    info!("flood fill from {start} painted {painted} cells");
    Ok(painted)
}

/// A complete flood fill problem: the grid to paint, where to start, and which color becomes which.
#[derive(Clone, Debug)]
pub struct FloodFillProblem<T> {
    pub grid: Grid<T>,
    pub start: Location,
    pub target: T,
    pub replacement: T,
}

impl<T> FloodFillProblem<T>
where
    T: Clone + PartialEq + Debug,
{
    /// Solve this problem, consuming it and returning the painted grid.
    pub fn solve(mut self) -> Result<Grid<T>, GridError> {
        flood_fill(&mut self.grid, self.start, &self.target, &self.replacement)?;
        Ok(self.grid)
    }
}
