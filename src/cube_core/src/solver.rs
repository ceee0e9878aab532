//! The boundary to whatever finds solutions. The cube only needs a sequence
//! of moves back; how it is found is up to the implementor.

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    path::PathBuf,
    process::{Child, ChildStdin, ChildStdout, Command, Stdio},
    thread::available_parallelism,
};

use log::{debug, info, warn};

use crate::{Cube, Move, error::SolveError, moves::parse_moves};

pub trait Solver {
    /// Find a sequence of moves that brings `cube` to the solved state.
    ///
    /// # Errors
    ///
    /// If no solution could be obtained.
    fn solve(&mut self, cube: &Cube) -> Result<Vec<Move>, SolveError>;
}

/// How to launch the two-phase solver process.
#[derive(Debug, Clone)]
pub struct TwophaseOptions {
    /// The executable to run.
    pub program: PathBuf,
    /// Give up on solutions longer than this.
    pub max_length: u32,
    /// Where the solver may dump its tables. Defaults to a directory in the
    /// user's cache dir.
    pub cache_dir: Option<PathBuf>,
}

impl Default for TwophaseOptions {
    fn default() -> Self {
        TwophaseOptions {
            program: PathBuf::from("twophase"),
            max_length: 30,
            cache_dir: None,
        }
    }
}

/// Drives an external rob-twophase process over its text interface. The
/// process is started on the first solve and reused afterwards.
///
/// The interface looks like
///
/// ```text
/// This is rob-twophase v2.0; copyright Elias Frantar 2020.
///
/// Loading tables ...
/// Done. 0.518s
///
/// Enter >>solve FACECUBE<< to solve, >>scramble<< to scramble or >>bench<< to benchmark.
///
/// Ready!
/// solve LBDLULDDURDRRRFRURBFFRFBFRDLDBDDBDFBBULRLFFBUFLUUBUULL
/// 30.177ms
/// R F2 R' U R U2 F2 U2 F' D' R D2 L2 D2 L' U2 F2 (17)
/// Ready!
/// ```
pub struct TwophaseSolver {
    options: TwophaseOptions,
    process: Option<TwophaseProcess>,
}

struct TwophaseProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl TwophaseSolver {
    #[must_use]
    pub fn new(options: TwophaseOptions) -> Self {
        TwophaseSolver {
            options,
            process: None,
        }
    }

    fn process(&mut self) -> Result<&mut TwophaseProcess, SolveError> {
        let process = match self.process.take() {
            Some(process) => process,
            None => self.spawn()?,
        };
        Ok(self.process.insert(process))
    }

    fn spawn(&self) -> Result<TwophaseProcess, SolveError> {
        // rob-twophase dumps its tables in its current directory
        let cache = match &self.options.cache_dir {
            Some(dir) => dir.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("rob-twophase-tables"),
        };
        fs::create_dir_all(&cache)?;

        let threads = match available_parallelism() {
            Ok(v) => v.get(),
            Err(e) => {
                warn!(target: "solver", "Failed to get available parallelism; defaulting to 1: {e}");
                1
            }
        };

        info!(
            target: "solver",
            "Starting {}: cache_dir={} threads={threads}",
            self.options.program.display(),
            cache.display()
        );
        let mut child = Command::new(&self.options.program)
            .current_dir(cache)
            .args(["-c", "-m"])
            .arg(self.options.max_length.to_string())
            .arg("-t")
            .arg(threads.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            return Err(SolveError::UnexpectedOutput(
                "solver process has no stdio pipes".to_owned(),
            ));
        };

        Ok(TwophaseProcess {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl TwophaseProcess {
    fn read_line(&mut self) -> Result<String, SolveError> {
        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            return Err(SolveError::UnexpectedOutput(
                "solver process closed its output".to_owned(),
            ));
        }
        Ok(line)
    }

    fn solve(&mut self, facelets: &str) -> Result<Vec<Move>, SolveError> {
        // Wait until rob-twophase tells us that its ready
        while self.read_line()? != "Ready!\n" {}

        writeln!(self.stdin, "solve {facelets}")?;
        self.stdin.flush()?;

        let timing = self.read_line()?;
        debug!(target: "solver", "Solved in {}", timing.trim());

        let result = self.read_line()?;
        parse_solution(&result)
    }
}

impl Drop for TwophaseProcess {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            debug!(target: "solver", "Solver process already exited: {e}");
        }
        let _ = self.child.wait();
    }
}

/// Parse a solution line like `R F2 R' U (4)`, dropping the trailing move
/// count.
fn parse_solution(line: &str) -> Result<Vec<Move>, SolveError> {
    if line.trim().starts_with("Error") {
        return Err(SolveError::UnexpectedOutput(line.trim().to_owned()));
    }

    let moves = line
        .replace(['(', ')', '\n'], "")
        .split(' ')
        .filter(|v| v.chars().next().is_some_and(|v| !v.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(parse_moves(&moves)?)
}

impl Solver for TwophaseSolver {
    fn solve(&mut self, cube: &Cube) -> Result<Vec<Move>, SolveError> {
        if cube.is_solved() {
            return Ok(vec![]);
        }

        let facelets = cube.to_facelet_string();
        let result = self.process()?.solve(&facelets);
        if result.is_err() {
            // Start from a fresh process next time rather than resync
            self.process = None;
        }
        result
    }
}
