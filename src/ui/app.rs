use crate::catalog::Entry;
use crate::config::ConfigStore;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::mvi::Reducer;
use std::time::Duration;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    carousel: CarouselState,
    config: ConfigStore,
    show_key_hints: bool,
    tick_rate: Duration,
    /// One-shot message shown in place of the key hints.
    status: Option<String>,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        let snapshot = config.get();
        Self {
            should_quit: false,
            carousel: CarouselState::default(),
            show_key_hints: snapshot.ui.show_key_hints,
            tick_rate: snapshot.ui.tick_rate(),
            config,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, intent: CarouselIntent) {
        let before = self.carousel.position();
        dispatch_mvi!(self, carousel, CarouselReducer, intent);
        self.status = None;
        tracing::debug!(
            ?intent,
            from = before,
            to = self.carousel.position(),
            "carousel moved"
        );
    }

    pub fn current(&self) -> &'static Entry {
        self.carousel.current()
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Re-reads the config file. The previous settings stay in effect on failure.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                let snapshot = self.config.get();
                self.show_key_hints = snapshot.ui.show_key_hints;
                self.tick_rate = snapshot.ui.tick_rate();
                tracing::info!(path = %self.config.path().display(), "config reloaded");
                self.status = Some("Config reloaded".to_string());
            }
            Err(err) => {
                tracing::warn!("config reload failed: {err}");
                self.status = Some(format!("Config error: {err}"));
            }
        }
    }
}
