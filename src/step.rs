use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// A single move from one cell to an adjacent one.
///
/// [`OrthogonalStep`] and [`KingStep`] are the built-in implementations.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result is not bounds checked; see [`Grid::neighbors`](crate::Grid::neighbors).
    fn attempt_from(&self, location: Location) -> Location;
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

/// The four axis-aligned directions, i.e. 4-connectivity.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum OrthogonalStep {
    Right,
    Left,
    Down,
    Up,
}

impl Step for OrthogonalStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Right => location.offset_by((0, 1)),
            Self::Left => location.offset_by((0, -1)),
            Self::Down => location.offset_by((1, 0)),
            Self::Up => location.offset_by((-1, 0)),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }
}

/// All eight directions a chess king may move in, i.e. 8-connectivity.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KingStep {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Step for KingStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UpLeft => location.offset_by((-1, -1)),
            Self::Up => location.offset_by((-1, 0)),
            Self::UpRight => location.offset_by((-1, 1)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
            Self::DownLeft => location.offset_by((1, -1)),
            Self::Down => location.offset_by((1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::DownLeft => Self::UpRight,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all step sets.
pub trait Neighborhood: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    ///
    /// Locations off the edge of any grid are included; filter them with a bounds check.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from) until one works.
    ///
    /// Returns [`None`] if `b` is not adjacent to `a` under this step set.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
}

impl<Sh> Neighborhood for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
