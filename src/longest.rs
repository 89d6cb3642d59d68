use std::cmp::Reverse;
use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use petgraph::graphmap::DiGraphMap;
use strum::VariantArray;

use crate::grid::Grid;
use crate::location::Location;
use crate::step::KingStep;

/// The character immediately after `c` by code point, if any. There is no wraparound: `'Z'` is followed by `'['`.
#[inline]
pub fn successor(c: char) -> Option<char> {
    char::from_u32(u32::from(c) + 1)
}

/// Directed graph with an edge from every cell to each 8-neighbor holding its successor character.
///
/// Every edge strictly increases the code point, so the graph is acyclic and no path can revisit a cell.
fn successor_graph(grid: &Grid<char>) -> DiGraphMap<Location, KingStep> {
    let mut graph = DiGraphMap::with_capacity(grid.len(), grid.len() * KingStep::VARIANTS.len());

    for location in grid.locations() {
        graph.add_node(location);
        for (step, neighbor) in grid.admissible_neighbors::<KingStep, _>(location, |here, there| successor(*here) == Some(*there)) {
            graph.add_edge(location, neighbor, step);
        }
    }

    graph
}

/// Length of the longest successor chain starting at each cell, counting the cell itself.
///
/// Cells are visited in descending character order, which is a reverse topological order of `graph`,
/// so every successor's length is final before it is read.
fn chain_lengths(grid: &Grid<char>, graph: &DiGraphMap<Location, KingStep>) -> HashMap<Location, usize> {
    let mut lengths = HashMap::with_capacity(grid.len());

    for location in grid.locations().sorted_by_key(|location| Reverse(grid[*location])) {
        let best = graph.neighbors(location)
            .filter_map(|next| lengths.get(&next).copied())
            .max()
            .unwrap_or(0);
        lengths.insert(location, best + 1);
    }

    lengths
}

/// Length of the longest path starting on a cell holding `start_char` where every step moves to one of the 8 neighbors holding the
/// successor of the current character.
///
/// Returns 0 if `start_char` does not occur in `grid`, and at least 1 otherwise.
pub fn longest_path(grid: &Grid<char>, start_char: char) -> usize {
    let graph = successor_graph(grid);
    let lengths = chain_lengths(grid, &graph);

    let longest = grid.find(&start_char)
        .filter_map(|location| lengths.get(&location).copied())
        .max()
        .unwrap_or(0);

    debug!("longest chain from {start_char:?} has length {longest}");
    longest
}

/// One path of maximal length as found by [`longest_path`], as the sequence of locations visited.
///
/// Empty if `start_char` does not occur in `grid`.
/// Among equally long paths, the start cell earliest in row-major order wins, then the earliest step in [`KingStep`] order.
pub fn longest_chain(grid: &Grid<char>, start_char: char) -> Vec<Location> {
    let graph = successor_graph(grid);
    let lengths = chain_lengths(grid, &graph);
    let length_of = |location: &Location| lengths.get(location).copied().unwrap_or(0);

    let Some(mut current) = grid.find(&start_char).min_by_key(|location| (Reverse(length_of(location)), *location)) else {
        return Vec::new();
    };

    let mut chain = Vec::with_capacity(length_of(&current));
    chain.push(current);

    loop {
        let remaining = length_of(&current);
        let next = graph.edges(current)
            .filter(|(_, next, _)| length_of(next) + 1 == remaining)
            .min_by_key(|(_, _, step)| **step)
            .map(|(_, next, _)| next);

        match next {
            Some(next) => {
                chain.push(next);
                current = next;
            }
            None => break,
        }
    }

    chain
}

/// A complete longest path problem: the grid and the character every path must start on.
#[derive(Clone, Debug)]
pub struct LongestPathProblem {
    pub grid: Grid<char>,
    pub start_char: char,
}

impl LongestPathProblem {
    /// See [`longest_path`].
    pub fn solve(&self) -> usize {
        longest_path(&self.grid, self.start_char)
    }

    /// See [`longest_chain`].
    pub fn chain(&self) -> Vec<Location> {
        longest_chain(&self.grid, self.start_char)
    }
}
