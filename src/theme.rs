//! Light/dark colour scheme.

use log::warn;

const DARK_CLASS: &str = "dark";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => DARK_CLASS,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Operating system preference via `prefers-color-scheme`.
    pub fn detect() -> Theme {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false);
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Toggle the `dark` class on the root element so the stylesheet can switch palettes.
    pub fn apply(self) {
        let root = gloo_utils::document_element();
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, self.is_dark()) {
            warn!("Failed to apply {:?} theme: {:?}", self, e);
        }
    }
}
