use crate::ui::app::App;
use crate::ui::carousel::CarouselIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            app.dispatch(CarouselIntent::Previous)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            app.dispatch(CarouselIntent::Next)
        }
        KeyCode::Char('r') => app.reload_config(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
