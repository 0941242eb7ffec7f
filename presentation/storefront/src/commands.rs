use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Next,
    Previous,
    /// 1-based position within the visible window.
    Open(usize),
    Increment,
    Decrement,
    Add,
    Close,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("`open` needs a position starting at 1, got `{0}`")]
    InvalidPosition(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "open" | "o" => {
                let raw = parts.next().unwrap_or_default();
                match raw.parse::<usize>() {
                    Ok(position) if position > 0 => Command::Open(position),
                    _ => return Err(CommandError::InvalidPosition(raw.to_string())),
                }
            }
            "inc" | "+" => Command::Increment,
            "dec" | "-" => Command::Decrement,
            "add" => Command::Add,
            "close" => Command::Close,
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

pub const HELP: &[&str] = &[
    "list            show the current page",
    "next | prev     move the page window",
    "open <n>        open the n-th product on the page",
    "inc | dec       change the quantity of the open product",
    "add             put the open product in the cart",
    "close           close the open product",
    "reload          fetch the catalog again",
    "quit            leave the storefront",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_commands_and_aliases() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  N ".parse::<Command>(), Ok(Command::Next));
        assert_eq!("prev".parse::<Command>(), Ok(Command::Previous));
        assert_eq!("+".parse::<Command>(), Ok(Command::Increment));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn should_parse_open_position() {
        assert_eq!("open 2".parse::<Command>(), Ok(Command::Open(2)));
    }

    #[test]
    fn should_reject_open_without_valid_position() {
        assert_eq!(
            "open".parse::<Command>(),
            Err(CommandError::InvalidPosition(String::new()))
        );
        assert_eq!(
            "open 0".parse::<Command>(),
            Err(CommandError::InvalidPosition("0".to_string()))
        );
    }

    #[test]
    fn should_reject_unknown_and_empty_input() {
        assert_eq!(
            "checkout".parse::<Command>(),
            Err(CommandError::Unknown("checkout".to_string()))
        );
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
    }
}
