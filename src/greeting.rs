// Page-level state around the gallery: the landing prompt, the floating hearts
// and the celebrations they trigger.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::celebration::{Burst, Celebration};
use crate::error::GalleryError;
use crate::hearts::{Heart, HeartField, HeartSettings};
use crate::keyboard::Key;
use crate::overlay::{Choice, Overlay};

/// Page configuration passed from JS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default)]
    pub hearts: HeartSettings,
    /// RNG seed for the hearts, typically `Math.random() * 2**32` on the host.
    #[serde(default)]
    pub seed: u64,
}

pub struct Greeting {
    overlay: Overlay,
    hearts: HeartField,
}

impl Greeting {
    pub fn new(config: GreetingConfig) -> Self {
        Greeting {
            overlay: Overlay::new(),
            hearts: HeartField::new(config.hearts, config.seed),
        }
    }

    pub fn from_json(config_json: &str) -> Result<Self, GalleryError> {
        let config: GreetingConfig = serde_json::from_str(config_json)
            .map_err(|e| GalleryError::InvalidConfig(e.to_string()))?;
        Ok(Self::new(config))
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn accept(&mut self, choice: Choice) -> Vec<Burst> {
        bursts(self.overlay.accept(choice))
    }

    pub fn reveal(&mut self) -> Vec<Burst> {
        bursts(self.overlay.reveal())
    }

    /// The letter's celebrate button; fires every time.
    pub fn celebrate(&self) -> Vec<Burst> {
        Celebration::Standard.bursts()
    }

    pub fn key_down(&mut self, key: Key) -> Vec<Burst> {
        bursts(self.overlay.key_down(key))
    }

    pub fn tick_hearts(&mut self) -> Vec<Heart> {
        self.hearts.spawn();
        self.hearts.hearts().iter().cloned().collect()
    }

    pub fn heart_interval_ms(&self) -> u32 {
        self.hearts.settings().interval_ms
    }
}

fn bursts(celebration: Option<Celebration>) -> Vec<Burst> {
    celebration.map(Celebration::bursts).unwrap_or_default()
}

// =============================================================================
// WASM Bindings
// =============================================================================

/// WASM-exposed greeting page state.
///
/// Every action returns a JSON array of confetti bursts to hand to the particle
/// library, empty when nothing should fire.
///
/// # Example JSON Config
/// ```json
/// { "hearts": { "max_hearts": 24, "interval_ms": 500 }, "seed": 1234 }
/// ```
#[wasm_bindgen]
pub struct GreetingPage {
    inner: Greeting,
}

#[wasm_bindgen]
impl GreetingPage {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GreetingPage, JsValue> {
        let inner = Greeting::from_json(config_json).map_err(to_js)?;
        Ok(GreetingPage { inner })
    }

    pub fn accept_yes(&mut self) -> Result<String, JsValue> {
        to_json(&self.inner.accept(Choice::Yes))
    }

    pub fn accept_enthusiastic(&mut self) -> Result<String, JsValue> {
        to_json(&self.inner.accept(Choice::Enthusiastic))
    }

    pub fn reveal(&mut self) -> Result<String, JsValue> {
        to_json(&self.inner.reveal())
    }

    pub fn celebrate(&self) -> Result<String, JsValue> {
        to_json(&self.inner.celebrate())
    }

    /// Unknown keys fire nothing.
    pub fn key_down(&mut self, key: &str) -> Result<String, JsValue> {
        let fired = match key.parse::<Key>() {
            Ok(key) => self.inner.key_down(key),
            Err(_) => Vec::new(),
        };
        to_json(&fired)
    }

    pub fn is_accepted(&self) -> bool {
        self.inner.overlay().state() == crate::overlay::PromptState::Accepted
    }

    pub fn is_revealed(&self) -> bool {
        self.inner.overlay().is_revealed()
    }

    pub fn heart_interval_ms(&self) -> u32 {
        self.inner.heart_interval_ms()
    }

    /// Spawn one heart and return the whole visible set.
    pub fn tick_hearts(&mut self) -> Result<String, JsValue> {
        to_json(&self.inner.tick_hearts())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(e.into()))
}

fn to_js(err: GalleryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
