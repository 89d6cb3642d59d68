//! JavaScript bindings. Grids cross the boundary as text with one row per line; see [`Grid::parse`].

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::grid::Grid;
use crate::location::Location;

/// Flood fill the grid in `grid` from `(row, col)` and return the painted grid as text.
#[wasm_bindgen(js_name = floodFill)]
pub fn flood_fill(grid: &str, row: usize, col: usize, target: char, replacement: char) -> Result<String, JsError> {
    let mut grid = Grid::parse(grid)?;
    crate::flood::flood_fill(&mut grid, Location(row, col), &target, &replacement)?;
    Ok(grid.to_string())
}

/// Length of the longest successor path in `grid` starting on `start_char`.
#[wasm_bindgen(js_name = longestPath)]
pub fn longest_path(grid: &str, start_char: char) -> Result<usize, JsError> {
    Ok(crate::longest::longest_path(&Grid::parse(grid)?, start_char))
}

/// The words of `dictionary`, an array of strings, which can be traced through `grid`, sorted.
///
/// Non-string array elements are ignored.
#[wasm_bindgen(js_name = findWords)]
pub fn find_words(grid: &str, dictionary: &Array) -> Result<Array, JsError> {
    let dictionary: Vec<String> = dictionary.iter().filter_map(|word| word.as_string()).collect();
    let found = crate::words::find_words(&Grid::parse(grid)?, &dictionary)?;

    Ok(found.into_iter().map(JsValue::from).collect())
}
