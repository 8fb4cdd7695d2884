//! Resolution of catalog handles into displayable content.

use crate::catalog::{ImageHandle, TextHandle, CHARACTERS};

/// Looks up the display text for a handle. Unknown handles render as their key.
pub fn resolve_text(handle: TextHandle) -> &'static str {
    match handle.key() {
        "name_yumiko" => "Yumiko Sakaki",
        "name_michiru" => "Michiru Matsushima",
        "name_sachi" => "Sachi Komine",
        "name_amane" => "Amane Suou",
        "name_makina" => "Makina Irisu",
        "name_kazuki" => "Kazuki Kazami",
        "description_yumiko" => {
            "Quiet, sharp-tongued and usually alone, she carries a box cutter and keeps everyone at arm's length."
        }
        "description_michiru" => {
            "A self-proclaimed tsundere who is loud, clumsy and cheerful, and far more fragile than she lets on."
        }
        "description_sachi" => {
            "The class representative who answers every request with a smile and never refuses an order."
        }
        "description_amane" => {
            "The eldest of the girls, warm and teasing, who cooks for everyone and hides a painful past."
        }
        "description_makina" => {
            "The youngest student, energetic and naive, with a surprising talent for trouble."
        }
        "description_kazuki" => {
            "A brilliant older sister remembered for her kindness, whose fate shaped everyone around her."
        }
        other => other,
    }
}

/// File name of the bundled image asset.
pub fn image_file(handle: ImageHandle) -> String {
    format!("{}.png", handle.key())
}

/// One line per card: `index. name - description`, starting at 1.
pub fn catalog_listing() -> String {
    CHARACTERS
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}. {} - {}",
                idx + 1,
                resolve_text(entry.name),
                resolve_text(entry.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
