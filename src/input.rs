use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Back,
    CycleTheme,
    ShowHelp,
    ViewTransfers, // F2: transfer-rate chart view
    Refresh,       // r: reset page state to Loading until the next poll lands
    ToggleDesc,    // D: show/hide field descriptions on the storage page
    None,
}

pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Esc, _)
        | (KeyCode::Char('h'), _) => Action::Back,

        (KeyCode::Char('t'), _) => Action::CycleTheme,
        (KeyCode::Char('r'), _) => Action::Refresh,
        (KeyCode::Char('D'), _) => Action::ToggleDesc,

        (KeyCode::Char('?'), _)
        | (KeyCode::F(1), _) => Action::ShowHelp,

        (KeyCode::F(2), _)
        | (KeyCode::Char('d'), _) => Action::ViewTransfers,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn quit_bindings() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn view_toggles() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::F(2))), Action::ViewTransfers);
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Esc)), Action::Back);
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('x'))), Action::None);
    }
}
