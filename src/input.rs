use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;
use crate::grid::Direction::*;

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Terminate);
    }

    let command = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Right),
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Terminate,
        _ => return None,
    };

    Some(command)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::Turn(Up)));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::Turn(Down)));
        assert_eq!(command_for(&key(KeyCode::Left)), Some(Command::Turn(Left)));
        assert_eq!(command_for(&key(KeyCode::Right)), Some(Command::Turn(Right)));
        assert_eq!(command_for(&key(KeyCode::Char('w'))), Some(Command::Turn(Up)));
        assert_eq!(command_for(&key(KeyCode::Char('D'))), Some(Command::Turn(Right)));
    }

    #[test]
    fn test_controls() {
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Terminate));
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_ctrl_c_terminates() {
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(command_for(&ctrl_c), Some(Command::Terminate));
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
    }
}
