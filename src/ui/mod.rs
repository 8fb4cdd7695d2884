pub mod app;
pub mod carousel;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod resources;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
