use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Command::Up),
                KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Command::Down),
                KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Command::Left),
                KeyCode::Char('d' | 'l') | KeyCode::Right => Some(Command::Right),
                KeyCode::Char('r') => Some(Command::R),
                KeyCode::Char('q') => Some(Command::Q),
                _ => None,
            },
            _ => None,
        }
    }

    /// Return the direction this command steers the snake in, if any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Right, KeyModifiers::SHIFT, Some(Command::Right))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Enter))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::R))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Q))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Up, KeyModifiers::ALT, None)]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Esc, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }

    #[rstest]
    #[case(Command::Up, Some(Direction::Up))]
    #[case(Command::Down, Some(Direction::Down))]
    #[case(Command::Left, Some(Direction::Left))]
    #[case(Command::Right, Some(Direction::Right))]
    #[case(Command::Enter, None)]
    #[case(Command::Q, None)]
    fn test_direction(#[case] cmd: Command, #[case] dir: Option<Direction>) {
        assert_eq!(cmd.direction(), dir);
    }
}
