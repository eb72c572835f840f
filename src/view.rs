// Render snapshot handed to the host as JSON. The host paints it verbatim.

use serde::{Deserialize, Serialize};

/// Everything the rendering surface needs for one paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryView {
    /// `translateX` of the slide track, in percent of the viewport width.
    pub offset_percent: f64,
    /// Whether the transform change should animate.
    pub animated: bool,
    pub transition_ms: u32,
    /// 1-based page for the "Page X / N" indicator; 0 when empty.
    pub page: usize,
    pub total_pages: usize,
    pub dragging: bool,
    /// No photos: controls disabled, nothing to page.
    pub disabled: bool,
    pub slides: Vec<SlideView>,
    pub lightbox: Option<LightboxView>,
    /// Host should schedule `setTimeout(0)` and call `run_task`.
    pub wants_task: bool,
    /// Host should schedule `requestAnimationFrame` and call `animation_frame`.
    pub wants_frame: bool,
}

/// One rendered frame of the strip, real page or clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideView {
    pub items: Vec<SlideItem>,
    /// Empty cells that keep a short last page balanced.
    pub placeholders: usize,
    pub is_clone: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideItem {
    pub global_index: usize,
    pub src: String,
    pub alt: String,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightboxView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub has_previous: bool,
    pub has_next: bool,
}
