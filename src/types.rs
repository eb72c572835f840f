// Strong typing over strings. Newtypes for pointer ids and display units.
// Configuration arrives from JS as JSON; every tunable has a serde default.

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Number of photos shown together on one carousel page.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Pointer identifier assigned by the host. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(i32);

impl PointerId {
    pub fn new(id: i32) -> Self {
        PointerId(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// Horizontal distance in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct Px(pub f64);

impl Px {
    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }
}

/// An immutable image descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

impl Photo {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Photo {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Input device that raised a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parse a DOM `PointerEvent.pointerType`. Unknown types are treated as touch,
    /// which is what browsers report for unlabelled contacts.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Touch,
        }
    }
}

/// A pointer event forwarded from the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub client_x: Px,
    /// DOM button index. Only meaningful for mouse input.
    pub button: i16,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, client_x: f64, button: i16, kind: PointerKind) -> Self {
        PointerEvent {
            pointer_id,
            client_x: Px(client_x),
            button,
            kind,
        }
    }

    /// Left mouse button, or any touch/pen contact.
    pub fn is_primary(&self) -> bool {
        match self.kind {
            PointerKind::Mouse => self.button == 0,
            PointerKind::Touch | PointerKind::Pen => true,
        }
    }
}

/// Gallery configuration passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub drag: DragSettings,
    /// Duration of the animated slide shift (milliseconds).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
}

impl GalleryConfig {
    pub fn new(photos: Vec<Photo>) -> Self {
        GalleryConfig {
            photos,
            page_size: default_page_size(),
            drag: DragSettings::default(),
            transition_ms: default_transition_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.page_size == 0 {
            return Err(GalleryError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        self.drag.validate()
    }
}

/// Drag gesture thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragSettings {
    /// Movement beyond this turns a tap into a drag.
    #[serde(default = "default_jitter_px")]
    pub jitter_px: f64,
    /// Smallest travel that commits a page change.
    #[serde(default = "default_min_swipe_px")]
    pub min_swipe_px: f64,
    /// Fraction of the viewport width that commits a page change, if larger.
    #[serde(default = "default_swipe_fraction")]
    pub swipe_fraction: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        DragSettings {
            jitter_px: default_jitter_px(),
            min_swipe_px: default_min_swipe_px(),
            swipe_fraction: default_swipe_fraction(),
        }
    }
}

impl DragSettings {
    fn validate(&self) -> Result<(), GalleryError> {
        let fields = [
            ("jitter_px", self.jitter_px),
            ("min_swipe_px", self.min_swipe_px),
            ("swipe_fraction", self.swipe_fraction),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GalleryError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_transition_ms() -> u32 {
    500
}

fn default_jitter_px() -> f64 {
    3.0
}

fn default_min_swipe_px() -> f64 {
    60.0
}

fn default_swipe_fraction() -> f64 {
    0.15
}
