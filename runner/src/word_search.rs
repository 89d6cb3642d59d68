use std::error::Error;

use env_logger::Env;
use gridwalk::{Grid, WordSearchProblem};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let problem = WordSearchProblem {
        grid: Grid::parse("
            МИРУП
            АПАПА
            ОРАГД
            ЛЕТОМ
        ")?,
        dictionary: ["МИР", "ЛЕТО", "УРАЛ", "ПАРОГ", "МАРТ", "ПИР"].map(String::from).to_vec(),
    };
    println!("Grid:\n{}", problem.grid);
    println!("Dictionary: {:?}", problem.dictionary);

    let found = problem.solve()?;
    println!("Found words: {found:?}");

    Ok(())
}
