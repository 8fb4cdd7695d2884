/// Reference to a bundled image asset, e.g. `sakaki_yumiko`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(&'static str);

impl ImageHandle {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// Reference to a display string, e.g. `name_yumiko`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(&'static str);

impl TextHandle {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// One catalog item. The three handles travel together so they cannot drift
/// apart for a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub image: ImageHandle,
    pub name: TextHandle,
    pub description: TextHandle,
}

impl Entry {
    pub const fn new(image: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            image: ImageHandle::new(image),
            name: TextHandle::new(name),
            description: TextHandle::new(description),
        }
    }
}
