// Global key bindings. Key names are DOM `KeyboardEvent.key` strings.

use std::str::FromStr;

use crate::error::GalleryError;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    /// Any printable character, as reported by the browser.
    Char(char),
}

impl FromStr for Key {
    type Err = GalleryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            "Escape" | "Esc" => Ok(Key::Escape),
            "Enter" => Ok(Key::Enter),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(GalleryError::UnknownKey(name.to_string())),
                }
            }
        }
    }
}

/// Carousel reaction to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    NextPage,
    PreviousPage,
    CloseLightbox,
}

/// Carousel bindings; always active while the gallery is mounted.
pub fn gallery_action(key: Key) -> Option<GalleryAction> {
    match key {
        Key::ArrowRight => Some(GalleryAction::NextPage),
        Key::ArrowLeft => Some(GalleryAction::PreviousPage),
        Key::Escape => Some(GalleryAction::CloseLightbox),
        Key::Enter | Key::Char(_) => None,
    }
}

/// Accept bindings for the landing prompt: `y` in either case, or Enter.
pub fn is_accept_key(key: Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Char(c) => c.eq_ignore_ascii_case(&'y'),
        _ => false,
    }
}
