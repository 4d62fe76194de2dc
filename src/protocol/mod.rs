//! Line-based text protocol around the engine.
//!
//! One command per line on stdin, replies on stdout:
//!
//! ```text
//! new [R|Y]                      fresh grid, optional first player
//! position [startpos] [moves <col> ...]
//! position layout <row>/<row>/.../<row> [R|Y]
//! play <col>                     drop a disc for the side to move
//! go [movetime <ms>] [depth <n>] search; prints info lines then bestmove
//! show                           print the grid layout
//! eval                           static score for the side to move
//! quit
//! ```
//!
//! Malformed commands are answered with a single `error <message>` line and
//! leave the session unchanged.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::search::SearchInfoCallback;
use crate::board::{evaluate, Grid, LayoutError, SearchIterationInfo};
use crate::engine::EngineController;

pub mod command;

pub use command::{parse_command, Command, GoLimits, PositionSpec};

/// Error type for protocol command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    InvalidColor(String),
    UnexpectedToken(String),
    /// Column is out of range or full
    IllegalMove(usize),
    InvalidLayout(LayoutError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownCommand(name) => write!(f, "unknown command '{name}'"),
            ProtocolError::MissingArgument(what) => write!(f, "missing {what}"),
            ProtocolError::InvalidNumber(token) => write!(f, "invalid number '{token}'"),
            ProtocolError::InvalidColor(token) => write!(f, "invalid color '{token}'"),
            ProtocolError::UnexpectedToken(token) => write!(f, "unexpected token '{token}'"),
            ProtocolError::IllegalMove(col) => write!(f, "illegal move {col}"),
            ProtocolError::InvalidLayout(e) => write!(f, "invalid position: {e}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::InvalidLayout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ProtocolError {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::IllegalMove { col, .. } => ProtocolError::IllegalMove(col),
            other => ProtocolError::InvalidLayout(other),
        }
    }
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Current grid plus the engine that searches it.
pub struct Session {
    grid: Grid,
    engine: EngineController,
}

impl Session {
    #[must_use]
    pub fn new(engine: EngineController) -> Self {
        Session {
            grid: Grid::new(),
            engine,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Handle one input line, writing every reply to `out`.
    ///
    /// Only I/O failures are returned; command errors are reported on `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let cmd = match parse_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "error {e}")?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(cmd.clone(), out) {
            Ok(()) => {}
            Err(CommandFailure::Protocol(e)) => writeln!(out, "error {e}")?,
            Err(CommandFailure::Io(e)) => return Err(e),
        }
        out.flush()?;

        Ok(if cmd == Command::Quit {
            Flow::Quit
        } else {
            Flow::Continue
        })
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CommandFailure> {
        match cmd {
            Command::NewGame(first) => {
                self.grid = Grid::with_first_player(first);
                self.engine.new_game();
            }
            Command::Position(spec) => self.grid = build_position(spec)?,
            Command::Play(col) => {
                if !self.grid.place(col) {
                    return Err(ProtocolError::IllegalMove(col).into());
                }
            }
            Command::Go(limits) => self.go(&limits, out)?,
            Command::Show => write!(out, "{}", self.grid.to_layout())?,
            Command::Eval => {
                let weights = self.engine.with_search_state(|state| state.weights().clone());
                let score = evaluate(&self.grid, self.grid.side_to_move(), &weights);
                writeln!(out, "eval {score}")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn go<W: Write>(&mut self, limits: &GoLimits, out: &mut W) -> io::Result<()> {
        let saved = self.engine.params();
        let mut params = saved.clone();
        if let Some(depth) = limits.depth {
            params = params.with_max_depth(depth).with_time_limit(None);
        }
        if let Some(movetime) = limits.movetime {
            params = params.with_time_limit(Some(movetime));
        }

        let infos: Arc<Mutex<Vec<SearchIterationInfo>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&infos);
        let callback: SearchInfoCallback = Arc::new(move |info: &SearchIterationInfo| {
            sink.lock().push(info.clone());
        });
        self.engine.set_params(params);
        self.engine.set_info_callback(Some(callback));

        let result = self.engine.analyze(&self.grid);

        self.engine.set_info_callback(None);
        self.engine.set_params(saved);

        for info in infos.lock().iter() {
            writeln!(
                out,
                "info depth {} score {} nodes {} tthits {} time {} pv {}",
                info.depth, info.score, info.nodes, info.tt_hits, info.time_ms, info.best_move
            )?;
        }
        writeln!(out, "info string source {}", result.source)?;
        match result.best_move {
            Some(col) => writeln!(out, "bestmove {col}"),
            None => writeln!(out, "bestmove none"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(EngineController::default())
    }
}

/// A command either fails to apply or fails to write its reply.
enum CommandFailure {
    Protocol(ProtocolError),
    Io(io::Error),
}

impl From<ProtocolError> for CommandFailure {
    fn from(e: ProtocolError) -> Self {
        CommandFailure::Protocol(e)
    }
}

impl From<io::Error> for CommandFailure {
    fn from(e: io::Error) -> Self {
        CommandFailure::Io(e)
    }
}

/// Build the grid described by a `position` command.
pub fn build_position(spec: PositionSpec) -> Result<Grid, ProtocolError> {
    match spec {
        PositionSpec::Moves(cols) => Ok(Grid::from_moves(&cols)?),
        PositionSpec::Layout { rows, side } => {
            let mut text = rows.replace('/', "\n");
            if let Some(side) = side {
                text.push('\n');
                text.push(side.symbol());
            }
            Ok(Grid::from_layout(&text)?)
        }
    }
}

/// Run the protocol over stdin/stdout until `quit` or end of input.
pub fn run_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::default();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut out = stdout.lock();
        match session.handle_line(&line, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) | Err(_) => break,
        }
    }
}
