//! Fixed character catalog and the circular navigator over it.
//!
//! The catalog is a build-time table of [`Entry`] records. Each record bundles
//! three opaque resource handles that only the presentation layer resolves.
//! [`Navigator`] owns the single piece of mutable state: the current position.

mod characters;
mod entry;
mod navigator;
mod shared;

pub use characters::{CharacterNavigator, CATALOG_SIZE, CHARACTERS};
pub use entry::{Entry, ImageHandle, TextHandle};
pub use navigator::{Navigator, Step};
pub use shared::SharedNavigator;
