use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: ConfigStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    let mut events = EventHandler::new(app.tick_rate());
    tracing::info!("card viewer started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(app.tick_rate()) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                // The reader thread owns its tick interval; restart it after a reload.
                if app.tick_rate() != events.tick_rate() {
                    tracing::debug!(tick_rate = ?app.tick_rate(), "restarting input reader");
                    drop(events);
                    events = EventHandler::new(app.tick_rate());
                }
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("card viewer stopped");
    Ok(())
}
