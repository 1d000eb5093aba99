use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};
use crate::page::Section;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    GotoSection(Section),
    NextProject,
    PrevProject,
    OpenGithub,
    OpenDemo,
    ToggleHelp,
    SkipIntro,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Any key ends the intro
    if app.in_intro() {
        return Action::SkipIntro;
    }

    // Any key closes help
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::from_event(&key);

    if app.pending_key == Some('g') {
        if keymap.is_g_prefix(&binding) {
            if let Some(action) = keymap.double_g_action() {
                return *action;
            }
        }
        // Any other key cancels the sequence and is handled normally
    } else if keymap.is_g_prefix(&binding) {
        return Action::PendingG;
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{portfolio::sample_portfolio, AppConfig};

    use crate::theme::Theme;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.intro.enabled = false;
        App::new(config, sample_portfolio(), Theme::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app, &keymap), Action::ScrollDown);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app, &keymap),
            Action::GotoSection(Section::Contact)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('z')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app, &keymap), Action::JumpToTop);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app, &keymap), Action::ScrollDown);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app, &keymap), Action::ExitMode);
    }

    #[test]
    fn test_intro_skips_on_any_key() {
        let app = App::new(AppConfig::default(), sample_portfolio(), Theme::default()).unwrap();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app, &keymap), Action::SkipIntro);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &app, &keymap), Action::Quit);
    }
}
