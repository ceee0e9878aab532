#![warn(clippy::pedantic)]

mod config;
mod render;
mod repl;

use std::{
    io::{stdin, stdout},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::Result;
use config::CubeConfig;
use cube_core::{Cube, Scrambler, Session, TwophaseSolver, format_moves};
use env_logger::TimestampPrecision;
use log::LevelFilter;

/// Turn, scramble, and solve a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', default_value = "cube_config.toml", value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// The move sequence to apply, e.g. "R U' F2".
        sequence: String,
    },
    /// Scramble a solved cube with random moves.
    Scramble {
        /// How many moves to make. Defaults to `scramble_length` from the configuration.
        #[arg(long, short)]
        moves: Option<usize>,
        /// Seed for the random moves. Defaults to `seed` from the configuration.
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Print the facelet string of a solved cube after a move sequence.
    Facelets {
        /// The move sequence to apply, e.g. "R U' F2".
        sequence: String,
    },
    /// Apply a move sequence, then solve it with the external two-phase solver.
    Solve {
        /// The move sequence to apply, e.g. "R U' F2".
        sequence: String,
    },
    /// Turn the cube interactively.
    Repl,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CubeConfig::load(&cli.config)?;

    match cli.command {
        Commands::Apply { sequence } => {
            let mut cube = Cube::solved();
            cube.apply_sequence(&sequence)?;
            print!("{}", render::dump(&cube, config.color));
            if cube.is_solved() {
                println!("Solved!");
            }
        }
        Commands::Scramble { moves, seed } => {
            let mut scrambler = seed
                .or(config.seed)
                .map_or_else(Scrambler::default, Scrambler::with_seed);
            let mut cube = Cube::solved();
            let moves = scrambler.scramble(&mut cube, moves.unwrap_or(config.scramble_length));
            println!("{}", format_moves(&moves));
            println!();
            print!("{}", render::dump(&cube, config.color));
            println!();
            println!("{}", cube.to_facelet_string());
        }
        Commands::Facelets { sequence } => {
            let mut cube = Cube::solved();
            cube.apply_sequence(&sequence)?;
            println!("{}", cube.to_facelet_string());
        }
        Commands::Solve { sequence } => {
            let mut session = Session::new();
            session.apply_sequence(&sequence)?;
            let mut solver = TwophaseSolver::new(config.solver.twophase_options());
            let solution = session.solve_with(&mut solver)?;
            println!("{}", format_moves(&solution));
        }
        Commands::Repl => repl::run(&config, stdin().lock(), stdout().lock())?,
    }

    Ok(())
}
