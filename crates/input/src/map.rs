//! Option mapping from scanned menu codes to commands.

use crate::types::{GameAction, QUIT_OPTION};

/// A recognised menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Action(GameAction),
    Quit,
}

/// Parse one integer option from a line of input.
///
/// Leading/trailing whitespace is ignored and only the first token counts.
/// That whole token must be an integer: `"3abc"` is invalid, where a `%d`
/// scan would have read 3.
pub fn parse_option(line: &str) -> Option<i64> {
    line.split_whitespace().next()?.parse().ok()
}

/// Map an option code to a command. Unknown codes return `None`.
pub fn command_for_option(code: i64) -> Option<MenuCommand> {
    if code == QUIT_OPTION {
        return Some(MenuCommand::Quit);
    }
    GameAction::from_option_code(code).map(MenuCommand::Action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("3"), Some(3));
        assert_eq!(parse_option("  5 \n"), Some(5));
        assert_eq!(parse_option("2 junk"), Some(2));
        assert_eq!(parse_option("-1"), Some(-1));
        assert_eq!(parse_option(""), None);
        assert_eq!(parse_option("abc"), None);
    }

    #[test]
    fn test_parse_option_rejects_trailing_garbage_in_token() {
        assert_eq!(parse_option("3abc"), None);
        assert_eq!(parse_option("1.5"), None);
        assert_eq!(parse_option("3abc 4"), None);
    }

    #[test]
    fn test_menu_codes() {
        assert_eq!(command_for_option(0), Some(MenuCommand::Quit));
        assert_eq!(
            command_for_option(1),
            Some(MenuCommand::Action(GameAction::Play))
        );
        assert_eq!(
            command_for_option(2),
            Some(MenuCommand::Action(GameAction::Reserve))
        );
        assert_eq!(
            command_for_option(3),
            Some(MenuCommand::Action(GameAction::UseReserved))
        );
        assert_eq!(
            command_for_option(4),
            Some(MenuCommand::Action(GameAction::SwapCurrent))
        );
        assert_eq!(
            command_for_option(5),
            Some(MenuCommand::Action(GameAction::SwapThree))
        );
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(command_for_option(6), None);
        assert_eq!(command_for_option(-1), None);
        assert_eq!(command_for_option(i64::MAX), None);
    }
}
