use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use cube_core::{Scrambler, Session, TwophaseSolver, format_moves};
use log::warn;

use crate::{config::CubeConfig, render};

const HELP: &str = "\
Enter moves such as `R U' F2` (case-insensitive), or one of:
  undo            take back the last move
  reset           start over from a solved cube
  scramble [N]    apply N random moves
  solve           solve the cube with the external solver
  show            print the cube
  history         print the moves applied since the last reset
  help            print this message
  exit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Moves(&'a str),
    Undo,
    Reset,
    Scramble(Option<usize>),
    Solve,
    Show,
    History,
    Help,
    Exit,
    Empty,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Command::Empty;
    };

    match first.to_ascii_lowercase().as_str() {
        "undo" => Command::Undo,
        "reset" => Command::Reset,
        "scramble" => match words.next() {
            None => Command::Scramble(None),
            Some(count) => match count.parse() {
                Ok(count) => Command::Scramble(Some(count)),
                Err(_) => Command::Unknown(line),
            },
        },
        "solve" => Command::Solve,
        "show" => Command::Show,
        "history" => Command::History,
        "help" | "?" => Command::Help,
        "exit" | "quit" => Command::Exit,
        _ => Command::Moves(line),
    }
}

/// Read commands from `input` until it ends or the user exits, writing
/// responses to `output`.
pub fn run(config: &CubeConfig, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut session = Session::new();
    let mut scrambler = config.seed.map_or_else(Scrambler::default, Scrambler::with_seed);
    let mut solver = TwophaseSolver::new(config.solver.twophase_options());

    writeln!(output, "{HELP}")?;
    for line in input.lines() {
        let line = line?;
        let was_solved = session.is_solved();

        match parse_command(&line) {
            Command::Empty => continue,
            Command::Exit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Show => write!(output, "{}", render::dump(session.cube(), config.color))?,
            Command::History => writeln!(output, "{}", format_moves(session.history()))?,
            Command::Undo => match session.undo() {
                Some(move_) => writeln!(output, "Undid {move_}")?,
                None => writeln!(output, "Nothing to undo")?,
            },
            Command::Reset => {
                session.reset();
                writeln!(output, "Reset")?;
            }
            Command::Scramble(count) => {
                let moves =
                    session.scramble(&mut scrambler, count.unwrap_or(config.scramble_length));
                writeln!(output, "Scramble: {}", format_moves(&moves))?;
            }
            Command::Solve => match session.solve_with(&mut solver) {
                Ok(solution) => writeln!(output, "Solution: {}", format_moves(&solution))?,
                Err(e) => {
                    warn!(target: "solver", "{e}");
                    writeln!(output, "Could not solve: {e}")?;
                }
            },
            Command::Moves(sequence) => {
                if let Err(e) = session.apply_sequence(sequence) {
                    writeln!(output, "{e}; nothing was applied")?;
                }
            }
            Command::Unknown(line) => writeln!(output, "Unknown command `{line}`")?,
        }

        if session.is_solved() && !was_solved {
            writeln!(output, "Solved!")?;
        }
    }

    Ok(())
}
