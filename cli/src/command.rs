use sapper_core::{Coord, Coord2, in_bounds};
use thiserror::Error;

pub const CMD_REVEAL: &str = "reveal";
pub const CMD_FLAG: &str = "flag";
pub const CMD_QUIT: &str = "quit";

/// A player move, with coordinates already converted to 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid input. Please enter a command followed by two integers.")]
    WrongArgCount,
    #[error("Invalid x coordinate. Please enter an integer.")]
    InvalidX,
    #[error("Invalid y coordinate. Please enter an integer.")]
    InvalidY,
    #[error("Invalid coordinates. Please try again.")]
    OutOfRange,
    #[error("Invalid command '{0}'. Please use 'reveal' or 'flag'.")]
    Unknown(String),
}

/// Parses one line of input as `cmd x y` with 1-based coordinates, or `quit`.
///
/// Blank lines yield `Ok(None)`. Coordinates are checked against `size` before
/// the command word itself, so `jump 1 1` is reported as an unknown command
/// only once its coordinates are valid.
pub fn parse_command(line: &str, size: Coord2) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&cmd) = parts.first() else {
        return Ok(None);
    };

    if cmd == CMD_QUIT {
        return Ok(Some(Command::Quit));
    }

    let [_, x, y] = parts[..] else {
        return Err(CommandError::WrongArgCount);
    };
    let x: i64 = x.parse().map_err(|_| CommandError::InvalidX)?;
    let y: i64 = y.parse().map_err(|_| CommandError::InvalidY)?;
    let coords = to_zero_based(x, y, size).ok_or(CommandError::OutOfRange)?;

    match cmd {
        CMD_REVEAL => Ok(Some(Command::Reveal(coords))),
        CMD_FLAG => Ok(Some(Command::Flag(coords))),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}

fn to_zero_based(x: i64, y: i64, size: Coord2) -> Option<Coord2> {
    let x = Coord::try_from(x.checked_sub(1)?).ok()?;
    let y = Coord::try_from(y.checked_sub(1)?).ok()?;
    in_bounds((x, y), size).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Coord2 = (3, 4);

    #[test]
    fn parses_reveal_and_flag_as_zero_based() {
        assert_eq!(
            parse_command("reveal 1 1", SIZE),
            Ok(Some(Command::Reveal((0, 0))))
        );
        assert_eq!(
            parse_command("  flag   3 4 \n", SIZE),
            Ok(Some(Command::Flag((2, 3))))
        );
    }

    #[test]
    fn quit_ignores_trailing_words() {
        assert_eq!(parse_command("quit", SIZE), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("quit now 1", SIZE), Ok(Some(Command::Quit)));
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(parse_command("", SIZE), Ok(None));
        assert_eq!(parse_command("   \t\n", SIZE), Ok(None));
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert_eq!(parse_command("reveal", SIZE), Err(CommandError::WrongArgCount));
        assert_eq!(parse_command("reveal 1", SIZE), Err(CommandError::WrongArgCount));
        assert_eq!(
            parse_command("reveal 1 2 3", SIZE),
            Err(CommandError::WrongArgCount)
        );
    }

    #[test]
    fn non_integer_coordinates_are_rejected() {
        assert_eq!(parse_command("flag a 1", SIZE), Err(CommandError::InvalidX));
        assert_eq!(parse_command("flag 1 1.5", SIZE), Err(CommandError::InvalidY));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        for line in ["reveal 0 1", "reveal 1 0", "reveal 4 1", "reveal 1 5", "reveal -3 2"] {
            assert_eq!(parse_command(line, SIZE), Err(CommandError::OutOfRange), "{line}");
        }
        assert_eq!(
            parse_command("reveal 99999999999 1", SIZE),
            Err(CommandError::OutOfRange)
        );
    }

    #[test]
    fn unknown_command_is_rejected_after_coordinates() {
        assert_eq!(
            parse_command("jump 1 1", SIZE),
            Err(CommandError::Unknown("jump".to_owned()))
        );
        assert_eq!(parse_command("jump 9 9", SIZE), Err(CommandError::OutOfRange));
    }

    #[test]
    fn errors_render_player_messages() {
        assert_eq!(
            CommandError::Unknown("dig".to_owned()).to_string(),
            "Invalid command 'dig'. Please use 'reveal' or 'flag'."
        );
    }
}
