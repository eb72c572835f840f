// valentine_gallery: Rust/WASM engine for the greeting page.
// All state machines live here; JS forwards DOM events, schedules the callbacks
// the view asks for, and paints the JSON it gets back.

mod celebration;
mod drag;
mod error;
mod gallery;
mod greeting;
mod hearts;
mod keyboard;
mod lightbox;
mod overlay;
mod paging;
mod schedule;
mod types;
mod view;

use wasm_bindgen::prelude::*;

pub use celebration::{Burst, Celebration, Origin};
pub use drag::{DragOutcome, DragSession, DragTracker};
pub use error::GalleryError;
pub use gallery::Gallery;
pub use greeting::{Greeting, GreetingConfig, GreetingPage};
pub use hearts::{Heart, HeartField, HeartSettings};
pub use keyboard::{GalleryAction, Key};
pub use lightbox::Lightbox;
pub use overlay::{Choice, Overlay, PromptState};
pub use paging::{Pager, TransitionOutcome};
pub use schedule::{Deferred, DeferredQueue};
pub use types::*;
pub use view::{GalleryView, LightboxView, SlideItem, SlideView};

/// Initialize panic hook and console logging for the browser.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed, which is fine.
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Carousel engine exposed to JavaScript.
/// Event methods mutate state; `view_json` returns the snapshot to paint.
#[wasm_bindgen]
pub struct GalleryEngine {
    gallery: Gallery,
}

#[wasm_bindgen]
impl GalleryEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GalleryEngine, JsValue> {
        let gallery = Gallery::from_json(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(GalleryEngine { gallery })
    }

    /// Current `clientWidth` of the viewport element.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.gallery.set_viewport_width(width);
    }

    /// Returns true when the host should call `setPointerCapture`.
    pub fn pointer_down(
        &mut self,
        pointer_id: i32,
        client_x: f64,
        button: i16,
        pointer_type: &str,
    ) -> bool {
        let event = pointer_event(pointer_id, client_x, button, pointer_type);
        self.gallery.pointer_down(&event)
    }

    pub fn pointer_move(&mut self, pointer_id: i32, client_x: f64) {
        self.gallery
            .pointer_move(&pointer_event(pointer_id, client_x, 0, ""));
    }

    pub fn pointer_up(&mut self, pointer_id: i32, client_x: f64) {
        self.gallery
            .pointer_up(&pointer_event(pointer_id, client_x, 0, ""));
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32, client_x: f64) {
        self.gallery
            .pointer_cancel(&pointer_event(pointer_id, client_x, 0, ""));
    }

    pub fn next_page(&mut self) {
        self.gallery.next_page();
    }

    pub fn prev_page(&mut self) {
        self.gallery.previous_page();
    }

    /// `transitionend` on the slide track.
    pub fn transition_end(&mut self) {
        self.gallery.transition_end();
    }

    /// `requestAnimationFrame` callback, scheduled when the view sets `wants_frame`.
    pub fn animation_frame(&mut self) {
        self.gallery.animation_frame();
    }

    /// `setTimeout(0)` callback, scheduled when the view sets `wants_task`.
    pub fn run_task(&mut self) {
        self.gallery.run_task();
    }

    /// Window `keydown`. Returns true if the key was handled.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key.parse::<Key>() {
            Ok(key) => self.gallery.key_down(key),
            Err(_) => false,
        }
    }

    /// Photo button click. Returns true if the lightbox opened.
    pub fn click_photo(&mut self, global_index: usize) -> bool {
        self.gallery.click_photo(global_index)
    }

    pub fn open_lightbox(&mut self, index: usize) {
        self.gallery.open_lightbox(index);
    }

    pub fn close_lightbox(&mut self) {
        self.gallery.close_lightbox();
    }

    pub fn lightbox_next(&mut self) {
        self.gallery.lightbox_next();
    }

    pub fn lightbox_prev(&mut self) {
        self.gallery.lightbox_previous();
    }

    /// Snapshot of everything to paint, as JSON.
    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.gallery.view())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

// Move/up/cancel are correlated by id only, so their kind and button never matter.
fn pointer_event(pointer_id: i32, client_x: f64, button: i16, pointer_type: &str) -> PointerEvent {
    PointerEvent::new(
        PointerId::new(pointer_id),
        client_x,
        button,
        PointerKind::from_dom(pointer_type),
    )
}
