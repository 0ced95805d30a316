use crate::ui::app::{App, Focus};
use crate::ui::employee_form::FormIntent;
use crate::ui::search::SearchIntent;
use crate::ui::table::TableIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to whichever layer currently owns the keyboard.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Confirm => handle_confirm_key(app, key),
        Focus::Form => handle_form_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_confirm_button()
        }
        KeyCode::Enter => app.confirm_delete(),
        KeyCode::Esc => app.cancel_confirm(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if is_text(key) => app.dispatch_form(FormIntent::Input { ch }),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_search(SearchIntent::Blur),
        KeyCode::Enter => app.dispatch_search(SearchIntent::Submit),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_search(SearchIntent::SwitchField),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
        KeyCode::Char(ch) if is_text(key) => app.dispatch_search(SearchIntent::Input { ch }),
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_table(|total| TableIntent::MoveUp { total }),
        KeyCode::Down | KeyCode::Char('j') => {
            app.dispatch_table(|total| TableIntent::MoveDown { total })
        }
        KeyCode::Right | KeyCode::PageDown => {
            app.dispatch_table(|total| TableIntent::NextPage { total })
        }
        KeyCode::Left | KeyCode::PageUp => {
            app.dispatch_table(|total| TableIntent::PrevPage { total })
        }
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('/') => app.dispatch_search(SearchIntent::Focus),
        KeyCode::Char('c') => app.dispatch_search(SearchIntent::Clear),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Printable input, not a shortcut.
fn is_text(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::employee::sample_employees;
    use crate::store::EmployeeState;
    use crate::ui::command::UiCommand;
    use tokio::sync::{mpsc, watch};

    fn app() -> (App, mpsc::Receiver<UiCommand>) {
        let state = EmployeeState {
            employees: sample_employees(),
            loading: false,
            error: None,
        };
        let (_state_tx, state_rx) = watch::channel(state);
        let (command_tx, command_rx) = mpsc::channel(8);
        let mut app = App::new(state_rx, &UiConfig::default());
        app.set_command_sender(command_tx);
        (app, command_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits_from_table_but_types_in_form() {
        let (mut app, _commands) = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert_eq!(app.form_dialog().form().map(|f| f.first_name.as_str()), Some("q"));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let (mut app, _commands) = app();
        press(&mut app, KeyCode::Char('n'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn arrows_move_selection() {
        let (mut app, _commands) = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_employee().map(|e| e.id.as_str()), Some("1234500003"));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_employee().map(|e| e.id.as_str()), Some("1234500002"));
    }

    #[test]
    fn delete_key_then_enter_deletes_selected() {
        let (mut app, mut commands) = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            commands.try_recv().ok(),
            Some(UiCommand::DeleteEmployee {
                id: "1234500002".to_string()
            })
        );
    }

    #[test]
    fn escape_cancels_confirmation() {
        let (mut app, mut commands) = app();
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Esc);
        assert!(!app.confirm_dialog().is_visible());
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn slash_opens_search_and_enter_applies_it() {
        let (mut app, _commands) = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Tab);
        for ch in "ตะวัน".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.search().is_editing());
        let rows = app.visible_employees();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "1234500002");

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.visible_employees().len(), 4);
    }

    #[test]
    fn r_reloads() {
        let (mut app, mut commands) = app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(commands.try_recv().ok(), Some(UiCommand::FetchEmployees));
    }
}
