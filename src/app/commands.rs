//! Shell commands
//!
//! Line-oriented input for the demo shell, mapped onto widget interactions.

use std::str::FromStr;

use crate::components::pointer::Point;
use crate::components::primitives::listbox::NavKey;
use crate::error::Error;

/// A single user interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppAction {
    /// Click the toggle button
    Toggle,
    /// Key press while the list has focus
    Key(NavKey),
    /// Pointer entered option N
    Hover(usize),
    /// Pointer clicked option N
    Click(usize),
    /// Pointer pressed at a window position
    PointerDown(Point),
    /// Re-render
    Show,
    Quit,
}

/// Far outside any widget
const OUTSIDE: Point = Point {
    x: f32::MAX,
    y: f32::MAX,
};

fn invalid(message: impl Into<String>) -> Error {
    Error::Invalid {
        message: message.into(),
    }
}

fn parse_arg<T: FromStr>(command: &str, arg: Option<&str>) -> Result<T, Error> {
    arg.and_then(|value| value.parse().ok())
        .ok_or_else(|| invalid(format!("`{command}` expects a number")))
}

impl FromStr for AppAction {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err(invalid("empty command"));
        };

        let action = match command.to_ascii_lowercase().as_str() {
            "toggle" | "t" => AppAction::Toggle,
            "up" | "down" | "enter" | "esc" | "escape" => AppAction::Key(NavKey::from_name(command)),
            "hover" => AppAction::Hover(parse_arg(command, parts.next())?),
            "click" => AppAction::Click(parse_arg(command, parts.next())?),
            "tap" => {
                let x = parse_arg(command, parts.next())?;
                let y = parse_arg(command, parts.next())?;
                AppAction::PointerDown(Point::new(x, y))
            }
            "outside" => AppAction::PointerDown(OUTSIDE),
            "show" | "s" => AppAction::Show,
            "quit" | "q" | "exit" => AppAction::Quit,
            other => return Err(invalid(format!("unknown command `{other}`"))),
        };
        Ok(action)
    }
}

/// Help text for the shell
pub fn help() -> &'static str {
    "commands: toggle | up | down | enter | esc | hover N | click N | tap X Y | outside | show | quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("toggle".parse::<AppAction>().ok(), Some(AppAction::Toggle));
        assert_eq!(
            "Down".parse::<AppAction>().ok(),
            Some(AppAction::Key(NavKey::ArrowDown))
        );
        assert_eq!("hover 1".parse::<AppAction>().ok(), Some(AppAction::Hover(1)));
        assert_eq!(
            "tap 3 4.5".parse::<AppAction>().ok(),
            Some(AppAction::PointerDown(Point::new(3.0, 4.5)))
        );
        assert_eq!("q".parse::<AppAction>().ok(), Some(AppAction::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!("".parse::<AppAction>().is_err());
        assert!("click".parse::<AppAction>().is_err());
        assert!("click two".parse::<AppAction>().is_err());
        assert!("dance".parse::<AppAction>().is_err());
    }
}
