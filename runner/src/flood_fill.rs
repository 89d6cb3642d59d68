use std::error::Error;

use env_logger::Env;
use gridwalk::{FloodFillProblem, Grid, Location};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let grid = Grid::parse("
        YYYGGGGGGG
        YYYYYYGXXX
        GGGGGGGXXX
        WWWWWGGGGX
        WRRRRRGXXX
        WWWRRGGXXX
        WBWRRRRRRX
        WBBBBRRXXX
        WBBXBBBBXX
        WBBXXXXXXX
    ")?;
    println!("Initial grid:\n{grid}");

    let problem = FloodFillProblem {
        grid,
        start: Location(3, 9),
        target: 'X',
        replacement: 'C',
    };
    println!("Start: {}", problem.start);
    println!("Color to replace: {}", problem.target);
    println!("Replacement color: {}", problem.replacement);

    let painted = problem.solve()?;
    println!("Painted grid:\n{painted}");

    Ok(())
}
