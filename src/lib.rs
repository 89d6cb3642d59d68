#![warn(missing_docs)]

//! # `gridwalk`
//!
//! Three small traversals over rectangular grids of symbols:
//!
//! - [`flood_fill`] recolors the 4-connected region of one color around a start cell, in place.
//! - [`longest_path`] measures the longest path that steps, in any of 8 directions, from each character to the next one in the alphabet.
//! - [`find_words`] reports which words of a dictionary can be traced through 8-adjacent cells without reusing a cell.
//!
//! Build a [`Grid`] with [`Grid::from_rows`], [`Grid::parse`] or a [`GridBuilder`], then call the traversal directly
//! or bundle its inputs in the matching problem struct ([`FloodFillProblem`], [`LongestPathProblem`], [`WordSearchProblem`]).
//!
//! # Internals
//! Each traversal is a depth-first walk over the grid graph with its own rule against revisiting a cell:
//!
//! 1. Flood fill paints a cell before pushing it, and only ever pushes cells still holding the old color.
//! 2. A successor path strictly increases its character at every step, so it can never return to a cell.
//! The successor relation is built once as a [`petgraph`] graph and every cell's best length is computed exactly once.
//! 3. Word search backtracks, marking the cells of the current partial match and unmarking them on the way back out.
//!
//! The neighbor rule shared by all three is [`Grid::admissible_neighbors`]: a step set ([`OrthogonalStep`] or [`KingStep`])
//! and a predicate over the current cell and the candidate neighbor.
//! All three walk on explicit stacks or in a fixed order rather than by recursion, so deep paths do not grow the call stack.

pub use builder::GridBuilder;
pub use error::GridError;
pub use flood::{flood_fill, FloodFillProblem};
pub use grid::Grid;
pub use location::Location;
pub use longest::{longest_chain, longest_path, successor, LongestPathProblem};
pub use step::{KingStep, Neighborhood, OrthogonalStep, Step};
pub use words::{can_form_word, find_words, WordSearchProblem};

pub(crate) mod location;
pub(crate) mod error;
pub(crate) mod grid;
pub mod builder;
pub mod step;
pub mod flood;
pub mod longest;
pub mod words;
#[cfg(feature = "wasm")]
pub mod wasm;
