use std::str::FromStr;
use std::time::Duration;

use super::ProtocolError;
use crate::board::Color;

/// Where `position` takes its grid from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSpec {
    /// Empty grid, red first, followed by column drops
    Moves(Vec<usize>),
    /// Rows top to bottom separated by `/`, plus an optional side to move
    Layout { rows: String, side: Option<Color> },
}

/// Limits attached to a `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoLimits {
    pub movetime: Option<Duration>,
    pub depth: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame(Color),
    Position(PositionSpec),
    Play(usize),
    Go(GoLimits),
    Show,
    Eval,
    Quit,
}

fn parse_number<T: FromStr>(token: Option<&str>, what: &'static str) -> Result<T, ProtocolError> {
    let token = token.ok_or(ProtocolError::MissingArgument(what))?;
    token
        .parse()
        .map_err(|_| ProtocolError::InvalidNumber(token.to_string()))
}

fn parse_color(token: &str) -> Result<Color, ProtocolError> {
    let mut chars = token.chars();
    match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(ProtocolError::InvalidColor(token.to_string())),
    }
}

fn parse_position(args: &[&str]) -> Result<PositionSpec, ProtocolError> {
    let args = match args.split_first() {
        Some((&"layout", rest)) => {
            let rows = rest
                .first()
                .ok_or(ProtocolError::MissingArgument("layout rows"))?
                .to_string();
            let side = rest.get(1).map(|s| parse_color(s)).transpose()?;
            return Ok(PositionSpec::Layout { rows, side });
        }
        Some((&"startpos", rest)) => rest,
        _ => args,
    };

    match args.split_first() {
        None => Ok(PositionSpec::Moves(Vec::new())),
        Some((&"moves", cols)) => cols
            .iter()
            .map(|&c| parse_number(Some(c), "column"))
            .collect::<Result<Vec<_>, _>>()
            .map(PositionSpec::Moves),
        Some((other, _)) => Err(ProtocolError::UnexpectedToken((*other).to_string())),
    }
}

fn parse_go(args: &[&str]) -> Result<GoLimits, ProtocolError> {
    let mut limits = GoLimits::default();
    let mut iter = args.iter();
    while let Some(&token) = iter.next() {
        match token {
            "movetime" => {
                let ms: u64 = parse_number(iter.next().copied(), "movetime")?;
                limits.movetime = Some(Duration::from_millis(ms));
            }
            "depth" => limits.depth = Some(parse_number(iter.next().copied(), "depth")?),
            other => return Err(ProtocolError::UnexpectedToken(other.to_string())),
        }
    }
    Ok(limits)
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ProtocolError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Ok(None);
    };

    let cmd = match name {
        "new" => {
            let first = args.first().map(|s| parse_color(s)).transpose()?;
            Command::NewGame(first.unwrap_or(Color::Red))
        }
        "position" => Command::Position(parse_position(args)?),
        "play" => Command::Play(parse_number(args.first().copied(), "column")?),
        "go" => Command::Go(parse_go(args)?),
        "show" => Command::Show,
        "eval" => Command::Eval,
        "quit" => Command::Quit,
        _ => return Err(ProtocolError::UnknownCommand(name.to_string())),
    };

    Ok(Some(cmd))
}
