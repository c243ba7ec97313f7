//! Text commands understood by a session

use super::RepeatMode;
use std::str::FromStr;
use thiserror::Error;

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Select(String),
    Remove(String),
    Shuffle,
    Restore,
    List,
    Search(String),
    Genre(String),
    Current,
    Total,
    Ended,
    Repeat(RepeatMode),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid repeat mode '{0}' (expected off, all or one)")]
    InvalidRepeat(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Prev),
            "select" | "play" => argument("select").map(Command::Select),
            "remove" | "rm" => argument("remove").map(Command::Remove),
            "shuffle" => Ok(Command::Shuffle),
            "restore" | "unshuffle" => Ok(Command::Restore),
            "list" | "ls" => Ok(Command::List),
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "genre" => argument("genre").map(Command::Genre),
            "current" | "now" => Ok(Command::Current),
            "total" => Ok(Command::Total),
            "ended" => Ok(Command::Ended),
            "repeat" => argument("repeat")?.parse().map(Command::Repeat),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("next".parse::<Command>(), Ok(Command::Next));
        assert_eq!("  P ".parse::<Command>(), Ok(Command::Prev));
        assert_eq!("shuffle".parse::<Command>(), Ok(Command::Shuffle));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_arguments_keep_spaces() {
        assert_eq!(
            "search  ed sheeran ".parse::<Command>(),
            Ok(Command::Search("ed sheeran".to_string()))
        );
        assert_eq!("genre Hip Hop".parse::<Command>(), Ok(Command::Genre("Hip Hop".to_string())));
        assert_eq!("select abc".parse::<Command>(), Ok(Command::Select("abc".to_string())));
        assert_eq!("repeat all".parse::<Command>(), Ok(Command::Repeat(RepeatMode::All)));
    }

    #[test]
    fn test_blank_search_is_allowed() {
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("dance".parse::<Command>(), Err(CommandError::Unknown("dance".to_string())));
        assert_eq!("remove".parse::<Command>(), Err(CommandError::MissingArgument("remove")));
        assert_eq!(
            "repeat twice".parse::<Command>(),
            Err(CommandError::InvalidRepeat("twice".to_string()))
        );
    }
}
