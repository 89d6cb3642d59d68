use std::error::Error;

use env_logger::Env;
use gridwalk::{Grid, LongestPathProblem};
use itertools::Itertools;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let problem = LongestPathProblem {
        grid: Grid::parse("
            KLMNOPQ
            JABCDER
            IZYXWFS
            HGTUVGT
            GFEDCBU
            FEDCBAV
            EDCBAZW
        ")?,
        start_char: 'C',
    };
    println!("Grid:\n{}", problem.grid);

    let length = problem.solve();
    println!("Longest path starting on {:?}: {length}", problem.start_char);

    let chain = problem.chain();
    if !chain.is_empty() {
        println!("One such path: {}", chain.iter().map(|location| format!("{}{location}", problem.grid[*location])).join(" -> "));
    }

    Ok(())
}
