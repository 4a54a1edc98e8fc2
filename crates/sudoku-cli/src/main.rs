//! Batch puzzle runner for the constraint-satisfaction Sudoku engine.
//!
//! Thin presentation glue: collects puzzles from a file or stdin, hands them
//! to `sudoku_csp` through its narrow interface, and renders the results.
//! No solving logic lives here.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::Serialize;
use sudoku_csp::{solve_batch, Grid, Solver, SolverConfig, Strategy};

#[derive(Parser)]
#[command(name = "sudoku", version, about = "Solve Sudoku puzzles from a file or stdin")]
struct Cli {
    /// Puzzle file with one 81-character puzzle per line ('0' or '.' for
    /// empty cells, '#' starts a comment); use '-' to read stdin
    input: String,

    /// Solving strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::DepthFirst)]
    strategy: StrategyArg,

    /// Give up on a puzzle after this many trial assignments
    #[arg(long)]
    node_limit: Option<u64>,

    /// Solve the puzzles on a thread pool instead of one after another
    #[arg(long)]
    parallel: bool,

    /// Print one JSON object per puzzle instead of boards
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    DepthFirst,
    ExactCover,
}

impl std::fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyArg::DepthFirst => write!(f, "depth-first"),
            StrategyArg::ExactCover => write!(f, "exact-cover"),
        }
    }
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::DepthFirst => Strategy::DepthFirst,
            StrategyArg::ExactCover => Strategy::ExactCover,
        }
    }
}

/// A parsed puzzle together with where it came from
struct Entry {
    line: usize,
    text: String,
    grid: Grid,
}

#[derive(Serialize)]
struct Report<'a> {
    line: usize,
    puzzle: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let raw = match read_input(&cli.input) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("cannot read {}: {}", cli.input, e);
            return ExitCode::FAILURE;
        }
    };

    let (entries, skipped) = collect_puzzles(&raw);
    if entries.is_empty() {
        eprintln!("no puzzles found in {}", cli.input);
        return ExitCode::FAILURE;
    }

    let solver = Solver::with_config(SolverConfig {
        strategy: cli.strategy.into(),
        node_limit: cli.node_limit,
    });

    let grids: Vec<Grid> = entries.iter().map(|entry| entry.grid).collect();
    let started = Instant::now();
    let results = if cli.parallel {
        solve_batch(&solver, &grids)
    } else {
        grids.iter().map(|grid| solver.solve(grid)).collect()
    };
    info!(
        "{} puzzles in {:.3}s ({})",
        results.len(),
        started.elapsed().as_secs_f64(),
        if cli.parallel { "parallel" } else { "sequential" }
    );

    let mut failures = skipped;
    for (entry, result) in entries.iter().zip(&results) {
        match result {
            Ok(solution) => {
                if cli.json {
                    print_report(Report {
                        line: entry.line,
                        puzzle: &entry.text,
                        solution: Some(solution.as_line()),
                        error: None,
                    });
                } else {
                    println!("Puzzle at line {}:", entry.line);
                    println!("{}", solution);
                }
            }
            Err(e) => {
                failures += 1;
                if cli.json {
                    print_report(Report {
                        line: entry.line,
                        puzzle: &entry.text,
                        solution: None,
                        error: Some(e.to_string()),
                    });
                } else {
                    eprintln!("Puzzle at line {}: {}", entry.line, e);
                }
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        fs::read_to_string(path)
    }
}

/// Parse one puzzle per line, skipping blanks and '#' comments. Malformed
/// lines are warned about and counted, not fatal.
fn collect_puzzles(raw: &str) -> (Vec<Entry>, usize) {
    let mut entries = Vec::new();
    let mut skipped = 0;
    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match Grid::from_string(trimmed) {
            Ok(grid) => entries.push(Entry {
                line: idx + 1,
                text: trimmed.to_string(),
                grid,
            }),
            Err(e) => {
                warn!("skipping line {}: {}", idx + 1, e);
                skipped += 1;
            }
        }
    }
    (entries, skipped)
}

fn print_report(report: Report<'_>) {
    match serde_json::to_string(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("cannot serialize report for line {}: {}", report.line, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_collect_skips_comments_and_blanks() {
        let raw = format!("# header\n\n{}\n   \n", PUZZLE);
        let (entries, skipped) = collect_puzzles(&raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(skipped, 0);
        assert_eq!(entries[0].line, 3);
        assert_eq!(entries[0].text, PUZZLE);
    }

    #[test]
    fn test_collect_counts_malformed_lines() {
        let raw = format!("{}\nnot-a-puzzle\n{}\n", PUZZLE, PUZZLE);
        let (entries, skipped) = collect_puzzles(&raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_collect_accepts_dot_format() {
        let dotted: String = PUZZLE.chars().map(|c| if c == '0' { '.' } else { c }).collect();
        let (entries, skipped) = collect_puzzles(&dotted);
        assert_eq!(entries.len(), 1);
        assert_eq!(skipped, 0);
        assert_eq!(entries[0].grid, Grid::from_string(PUZZLE).unwrap());
    }

    #[test]
    fn test_strategy_arg_maps_to_core() {
        assert_eq!(Strategy::from(StrategyArg::DepthFirst), Strategy::DepthFirst);
        assert_eq!(Strategy::from(StrategyArg::ExactCover), Strategy::ExactCover);
    }
}
