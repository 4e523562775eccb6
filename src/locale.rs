//! User-facing strings for each supported language.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Fixed texts shown by the quote screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub failure_text: &'static str,
    pub failure_author: &'static str,
    /// Replaces an empty author. `None` shows the author verbatim.
    pub unknown_author: Option<&'static str>,
    pub button_label: &'static str,
    pub hints: &'static str,
}

const EN: Strings = Strings {
    failure_text: "Failed to load quote",
    failure_author: "System",
    unknown_author: None,
    button_label: "New Quote",
    hints: " Enter/Space/N: New quote │ Click: New quote │ Q/Esc: Quit",
};

const FR: Strings = Strings {
    failure_text: "Impossible de charger une citation. Veuillez réessayer.",
    failure_author: "Système",
    unknown_author: Some("Auteur inconnu"),
    button_label: "Nouvelle citation",
    hints: " Entrée/Espace/N : Nouvelle citation │ Clic : Nouvelle citation │ Q/Échap : Quitter",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }

    /// `maxLength` asked for when the config leaves it unset. The French
    /// screen keeps quotes short.
    pub fn default_max_length(self) -> Option<u32> {
        match self {
            Locale::En => None,
            Locale::Fr => Some(100),
        }
    }
}
