//! Basic example of using the solver

use sudoku_csp::{solve, Grid, SolveError, Solver, SolverConfig, Strategy, SENTINEL_GRID};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = match Grid::from_string(puzzle_string) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("bad puzzle string: {}", e);
            return;
        }
    };

    println!("Puzzle:");
    println!("{}", puzzle);

    // Solve through the typed interface
    let solver = Solver::new();
    match solver.solve(&puzzle) {
        Ok(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        Err(SolveError::NoSolution) => println!("No solution exists."),
        Err(e) => println!("Solve failed: {}", e),
    }

    // A capped solver gives up on pathological inputs instead of running
    // without bound
    let capped = Solver::with_config(SolverConfig {
        strategy: Strategy::DepthFirst,
        node_limit: Some(1_000_000),
    });
    println!("Capped solve succeeds: {}", capped.solve(&puzzle).is_ok());

    // The flat matrix interface signals every failure with the sentinel
    let result = solve(Strategy::ExactCover, puzzle.to_matrix());
    println!("Exact cover returned the sentinel: {}", result == SENTINEL_GRID);
}
