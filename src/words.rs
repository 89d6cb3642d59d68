use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use log::{debug, trace};
use strum::VariantArray;

use crate::error::GridError;
use crate::grid::Grid;
use crate::location::Location;
use crate::step::{KingStep, Step};

/// One committed cell of a partial match, and the index into [`KingStep::VARIANTS`] of the next direction to try from it.
struct Frame {
    location: Location,
    next_step: usize,
}

/// Whether `word` can be traced through `grid` as a path of 8-adjacent cells which uses no cell twice.
///
/// The empty word is trivially found. A word with more characters than `grid` has cells never is.
///
/// # Traversal
/// Every cell holding the first character is tried as a start, with a fresh visited set.
/// From there a backtracking search runs on an explicit stack: each frame is a committed cell, marked visited while it is on the stack.
/// A frame tries its directions in turn, pushing a new frame for the first unvisited neighbor holding the next character,
/// and is popped and unmarked once every direction is exhausted.
/// The search stops at the first complete match.
pub fn can_form_word(grid: &Grid<char>, word: &str) -> bool {
    let chars = word.chars().collect_vec();
    let Some(first) = chars.first() else {
        return true;
    };

    if chars.len() > grid.len() {
        return false;
    }

    let mut visited: HashSet<Location> = HashSet::with_capacity(chars.len());
    let mut stack: Vec<Frame> = Vec::with_capacity(chars.len());

    for start in grid.find(first) {
        trace!("trying {word:?} from {start}");
        visited.clear();
        visited.insert(start);
        stack.clear();
        stack.push(Frame { location: start, next_step: 0 });

        loop {
            let matched = stack.len();
            if matched == chars.len() {
                return true;
            }

            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(step) = KingStep::VARIANTS.get(frame.next_step) else {
                // dead end; give the cell back to other partial paths
                visited.remove(&frame.location);
                stack.pop();
                continue;
            };
            frame.next_step += 1;

            let candidate = step.attempt_from(frame.location);
            if grid.get(candidate) == Some(&chars[matched]) && visited.insert(candidate) {
                stack.push(Frame { location: candidate, next_step: 0 });
            }
        }
    }

    false
}

/// The words of `dictionary` which can be traced through `grid`; see [`can_form_word`].
///
/// Duplicate entries in `dictionary` appear once in the result.
/// Fails with [`EmptyWord`](GridError::EmptyWord) if any entry is the empty string, before any searching is done.
pub fn find_words<S>(grid: &Grid<char>, dictionary: &[S]) -> Result<BTreeSet<String>, GridError>
where
    S: AsRef<str>,
{
    if let Some((index, _)) = dictionary.iter().find_position(|word| word.as_ref().is_empty()) {
        return Err(GridError::EmptyWord { index });
    }

    let mut found = BTreeSet::new();
    for word in dictionary.iter().map(AsRef::as_ref) {
        if found.contains(word) {
            continue;
        }

        if can_form_word(grid, word) {
            debug!("found {word:?}");
            found.insert(word.to_owned());
        } else {
            debug!("{word:?} not in grid");
        }
    }

    Ok(found)
}

/// A complete word search problem: the grid and the dictionary of candidate words, in the order given.
#[derive(Clone, Debug)]
pub struct WordSearchProblem {
    pub grid: Grid<char>,
    pub dictionary: Vec<String>,
}

impl WordSearchProblem {
    /// See [`find_words`].
    pub fn solve(&self) -> Result<BTreeSet<String>, GridError> {
        find_words(&self.grid, &self.dictionary)
    }
}
