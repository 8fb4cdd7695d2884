use crate::catalog::entry::Entry;
use crate::catalog::navigator::Navigator;

pub const CATALOG_SIZE: usize = 6;

/// The built-in character cards, in display order.
pub static CHARACTERS: [Entry; CATALOG_SIZE] = [
    Entry::new("sakaki_yumiko", "name_yumiko", "description_yumiko"),
    Entry::new("matsushima_michiru", "name_michiru", "description_michiru"),
    Entry::new("komine_sachi", "name_sachi", "description_sachi"),
    Entry::new("suou_amane", "name_amane", "description_amane"),
    Entry::new("irisu_makina", "name_makina", "description_makina"),
    Entry::new("kazami_kazuki", "name_kazuki", "description_kazuki"),
];

pub type CharacterNavigator = Navigator<'static, Entry, CATALOG_SIZE>;

impl Default for CharacterNavigator {
    fn default() -> Self {
        Navigator::new(&CHARACTERS)
    }
}
