//! Key mapping from terminal events to session intents.

use crate::types::{Intent, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an intent for the given screen.
///
/// Down keys map to [`Intent::SoftDropStart`]; the caller pairs them with a
/// release (see [`crate::SoftDropLatch`]).
pub fn map_key(phase: Phase, key: KeyEvent) -> Option<Intent> {
    if should_quit(phase, key) {
        return Some(Intent::Quit);
    }

    match phase {
        Phase::Playing => match key.code {
            KeyCode::Left
            | KeyCode::Char('a')
            | KeyCode::Char('A')
            | KeyCode::Char('h')
            | KeyCode::Char('H') => Some(Intent::MoveLeft),
            KeyCode::Right
            | KeyCode::Char('d')
            | KeyCode::Char('D')
            | KeyCode::Char('l')
            | KeyCode::Char('L') => Some(Intent::MoveRight),
            KeyCode::Up
            | KeyCode::Char('w')
            | KeyCode::Char('W')
            | KeyCode::Char('k')
            | KeyCode::Char('K') => Some(Intent::Rotate),
            code if is_soft_drop_key(code) => Some(Intent::SoftDropStart),
            _ => None,
        },

        // "Press any key". Bare modifier presses only show up with keyboard
        // enhancement enabled and do not count.
        Phase::AwaitingStart | Phase::GameOver => match key.code {
            KeyCode::Modifier(_) => None,
            _ => Some(Intent::Acknowledge),
        },

        Phase::NameEntry => match key.code {
            KeyCode::Enter => Some(Intent::Submit),
            KeyCode::Backspace => Some(Intent::Backspace),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Intent::TypeChar(ch))
            }
            _ => None,
        },

        Phase::Exited => None,
    }
}

pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down
            | KeyCode::Char('s')
            | KeyCode::Char('S')
            | KeyCode::Char('j')
            | KeyCode::Char('J')
    )
}

/// Check if key should quit the game.
///
/// `q` types a letter while a name is being entered.
pub fn should_quit(phase: Phase, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    phase != Phase::NameEntry && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

    fn playing(code: KeyCode) -> Option<Intent> {
        map_key(Phase::Playing, KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(playing(KeyCode::Left), Some(Intent::MoveLeft));
        assert_eq!(playing(KeyCode::Right), Some(Intent::MoveRight));
        assert_eq!(playing(KeyCode::Down), Some(Intent::SoftDropStart));

        assert_eq!(playing(KeyCode::Char('H')), Some(Intent::MoveLeft));
        assert_eq!(playing(KeyCode::Char('d')), Some(Intent::MoveRight));
        assert_eq!(playing(KeyCode::Char('j')), Some(Intent::SoftDropStart));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(playing(KeyCode::Up), Some(Intent::Rotate));
        assert_eq!(playing(KeyCode::Char('w')), Some(Intent::Rotate));
        assert_eq!(playing(KeyCode::Char('K')), Some(Intent::Rotate));
    }

    #[test]
    fn test_unbound_keys_while_playing() {
        assert_eq!(playing(KeyCode::Char(' ')), None);
        assert_eq!(playing(KeyCode::Enter), None);
    }

    #[test]
    fn test_any_key_acknowledges() {
        for phase in [Phase::AwaitingStart, Phase::GameOver] {
            assert_eq!(
                map_key(phase, KeyEvent::from(KeyCode::Char('x'))),
                Some(Intent::Acknowledge)
            );
            assert_eq!(
                map_key(phase, KeyEvent::from(KeyCode::Enter)),
                Some(Intent::Acknowledge)
            );
            assert_eq!(
                map_key(
                    phase,
                    KeyEvent::from(KeyCode::Modifier(ModifierKeyCode::LeftShift))
                ),
                None
            );
        }
    }

    #[test]
    fn test_name_entry_keys() {
        let entry = |key| map_key(Phase::NameEntry, key);
        assert_eq!(
            entry(KeyEvent::from(KeyCode::Char('q'))),
            Some(Intent::TypeChar('q'))
        );
        assert_eq!(
            entry(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Intent::TypeChar('A'))
        );
        assert_eq!(entry(KeyEvent::from(KeyCode::Backspace)), Some(Intent::Backspace));
        assert_eq!(entry(KeyEvent::from(KeyCode::Enter)), Some(Intent::Submit));
        assert_eq!(entry(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(Phase::Playing, KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(
            Phase::NameEntry,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(should_quit(Phase::NameEntry, KeyEvent::from(KeyCode::Esc)));
        assert!(!should_quit(Phase::NameEntry, KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(Phase::Playing, KeyEvent::from(KeyCode::Char('x'))));

        assert_eq!(
            map_key(Phase::GameOver, KeyEvent::from(KeyCode::Char('q'))),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_exited_maps_nothing() {
        assert_eq!(map_key(Phase::Exited, KeyEvent::from(KeyCode::Left)), None);
    }
}
