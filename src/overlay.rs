// Landing prompt: a two-state toggle guarding the page, plus the surprise reveal.

use serde::{Deserialize, Serialize};

use crate::celebration::Celebration;
use crate::keyboard::{is_accept_key, Key};

/// Answer buttons on the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Yes,
    Enthusiastic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptState {
    Pending,
    Accepted,
}

#[derive(Debug, Clone)]
pub struct Overlay {
    state: PromptState,
    revealed: bool,
}

impl Overlay {
    pub fn new() -> Self {
        Overlay {
            state: PromptState::Pending,
            revealed: false,
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Accepting also opens the surprise section. Returns the celebration to
    /// fire, or `None` if the prompt was already answered.
    pub fn accept(&mut self, choice: Choice) -> Option<Celebration> {
        if self.state == PromptState::Accepted {
            return None;
        }
        self.state = PromptState::Accepted;
        self.revealed = true;
        log::info!("prompt accepted: {:?}", choice);

        Some(match choice {
            Choice::Yes => Celebration::Standard,
            Choice::Enthusiastic => Celebration::Mega,
        })
    }

    /// Keyboard shortcut, only while the prompt is showing.
    pub fn key_down(&mut self, key: Key) -> Option<Celebration> {
        if self.state == PromptState::Pending && is_accept_key(key) {
            self.accept(Choice::Yes)
        } else {
            None
        }
    }

    /// The "Reveal a Surprise" button. Fires once.
    pub fn reveal(&mut self) -> Option<Celebration> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(Celebration::Reveal)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
