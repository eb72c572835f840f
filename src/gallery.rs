// Carousel engine: composes paging, drag gestures, the lightbox and deferred host work.
// Every method runs synchronously inside one host event. Anything that must wait
// for a later turn goes through the DeferredQueue.

use crate::drag::{DragOutcome, DragTracker};
use crate::error::GalleryError;
use crate::keyboard::{gallery_action, GalleryAction, Key};
use crate::lightbox::Lightbox;
use crate::paging::{Pager, TransitionOutcome};
use crate::schedule::{Deferred, DeferredQueue};
use crate::types::*;
use crate::view::{GalleryView, LightboxView, SlideItem, SlideView};

/// Looping photo carousel with drag paging and a lightbox.
#[derive(Debug)]
pub struct Gallery {
    photos: Vec<Photo>,
    transition_ms: u32,
    viewport_width: Px,
    pager: Pager,
    drag: DragTracker,
    lightbox: Lightbox,
    deferred: DeferredQueue,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Result<Self, GalleryError> {
        config.validate()?;
        log::info!(
            "gallery with {} photos, {} per page",
            config.photos.len(),
            config.page_size
        );

        Ok(Gallery {
            pager: Pager::new(&config.photos, config.page_size),
            drag: DragTracker::new(config.drag),
            lightbox: Lightbox::new(config.photos.len()),
            photos: config.photos,
            transition_ms: config.transition_ms,
            viewport_width: Px(0.0),
            deferred: DeferredQueue::new(),
        })
    }

    pub fn from_json(config_json: &str) -> Result<Self, GalleryError> {
        let config: GalleryConfig = serde_json::from_str(config_json)
            .map_err(|e| GalleryError::InvalidConfig(e.to_string()))?;
        Self::new(config)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = Px(width.max(0.0));
    }

    pub fn next_page(&mut self) {
        self.pager.advance();
    }

    pub fn previous_page(&mut self) {
        self.pager.retreat();
    }

    /// Host callback when the slide-shift transition ends.
    pub fn transition_end(&mut self) {
        if let TransitionOutcome::Snapped { .. } = self.pager.on_transition_finished() {
            self.deferred.defer_frame(Deferred::RearmTransition);
        }
    }

    pub fn animation_frame(&mut self) {
        for work in self.deferred.take_frame() {
            self.run_deferred(work);
        }
    }

    pub fn run_task(&mut self) {
        for work in self.deferred.take_tasks() {
            self.run_deferred(work);
        }
    }

    fn run_deferred(&mut self, work: Deferred) {
        match work {
            Deferred::ClearDragMarker => self.drag.clear_drag_marker(),
            Deferred::RearmTransition => self.pager.on_animation_frame(),
        }
    }

    /// Returns true when the host should capture the pointer. Capture failures
    /// on the host side do not affect the gesture.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.pager.is_empty() {
            return false;
        }
        let started = self.drag.pointer_down(event);
        if started {
            // Track the pointer 1:1 while dragging.
            self.pager.set_animated(false);
        }
        started
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        self.drag.pointer_move(event);
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let Some(outcome) = self.drag.pointer_up(event, self.viewport_width) else {
            return;
        };

        self.pager.set_animated(true);
        match outcome {
            DragOutcome::Next => self.pager.advance(),
            DragOutcome::Previous => self.pager.retreat(),
            DragOutcome::SnapBack => {}
        }
        self.deferred.defer_task(Deferred::ClearDragMarker);
    }

    pub fn pointer_cancel(&mut self, event: &PointerEvent) {
        self.pointer_up(event);
    }

    /// Activate a photo. Ignored right after a drag. Returns whether it opened.
    pub fn click_photo(&mut self, global_index: usize) -> bool {
        if self.drag.suppresses_click() {
            log::debug!("suppressing click on photo {} after drag", global_index);
            return false;
        }
        self.lightbox.open(global_index);
        self.lightbox.selection() == Some(global_index)
    }

    /// Returns true if the key was handled.
    pub fn key_down(&mut self, key: Key) -> bool {
        match gallery_action(key) {
            Some(GalleryAction::NextPage) => self.next_page(),
            Some(GalleryAction::PreviousPage) => self.previous_page(),
            Some(GalleryAction::CloseLightbox) => {
                if !self.lightbox.is_open() {
                    return false;
                }
                self.lightbox.close();
            }
            None => return false,
        }
        true
    }

    pub fn open_lightbox(&mut self, index: usize) {
        self.lightbox.open(index);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn lightbox_next(&mut self) {
        self.lightbox.next();
    }

    pub fn lightbox_previous(&mut self) {
        self.lightbox.previous();
    }

    pub fn view(&self) -> GalleryView {
        let total = self.pager.total_pages();
        let drag_percent = self.drag.drag_percent(self.viewport_width);

        let slides = self
            .pager
            .slides()
            .iter()
            .enumerate()
            .map(|(slide_index, page)| SlideView {
                items: page.iter().map(|&i| self.slide_item(i)).collect(),
                placeholders: self.pager.page_size().saturating_sub(page.len()),
                is_clone: slide_index == 0 || slide_index == total + 1,
            })
            .collect();

        let lightbox = self.lightbox.selection().and_then(|index| {
            let photo = self.photos.get(index)?;
            Some(LightboxView {
                index,
                src: photo.src.clone(),
                alt: photo.alt.clone(),
                has_previous: self.lightbox.has_previous(),
                has_next: self.lightbox.has_next(),
            })
        });

        GalleryView {
            offset_percent: self.pager.offset_percent(drag_percent),
            animated: self.pager.is_animated(),
            transition_ms: self.transition_ms,
            page: self.pager.real_page(),
            total_pages: total,
            dragging: self.drag.is_dragging(),
            disabled: total == 0,
            slides,
            lightbox,
            wants_task: self.deferred.wants_task(),
            wants_frame: self.deferred.wants_frame(),
        }
    }

    fn slide_item(&self, global_index: usize) -> SlideItem {
        let photo = &self.photos[global_index];
        SlideItem {
            global_index,
            src: photo.src.clone(),
            alt: photo.alt.clone(),
            aria_label: format!("Open photo {}", global_index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(count: usize) -> Gallery {
        let photos = (1..=count)
            .map(|i| Photo::new(format!("/photos/{}.jpg", i), format!("Us #{}", i)))
            .collect();
        let mut gallery = Gallery::new(GalleryConfig::new(photos)).unwrap();
        gallery.set_viewport_width(400.0);
        gallery
    }

    fn mouse(x: f64) -> PointerEvent {
        PointerEvent::new(PointerId::new(1), x, 0, PointerKind::Mouse)
    }

    fn swipe(gallery: &mut Gallery, from: f64, to: f64) {
        gallery.pointer_down(&mouse(from));
        gallery.pointer_move(&mouse(to));
        gallery.pointer_up(&mouse(to));
    }

    #[test]
    fn initial_view() {
        let view = gallery(11).view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.offset_percent, -100.0);
        assert!(view.animated);
        assert_eq!(view.slides.len(), 5);
        assert!(view.slides[0].is_clone);
        assert_eq!(view.slides[0].placeholders, 1);
        assert_eq!(view.slides[2].items[0].aria_label, "Open photo 5");
        assert!(view.lightbox.is_none());
        assert!(!view.disabled);
    }

    #[test]
    fn empty_gallery_renders_disabled() {
        let mut gallery = gallery(0);
        gallery.next_page();
        gallery.transition_end();
        assert!(!gallery.pointer_down(&mouse(10.0)));
        assert!(!gallery.click_photo(0));

        let view = gallery.view();
        assert!(view.disabled);
        assert_eq!(view.page, 0);
        assert!(view.slides.is_empty());
    }

    #[test]
    fn keyboard_pages_and_wraps() {
        let mut gallery = gallery(11);
        for _ in 0..3 {
            assert!(gallery.key_down(Key::ArrowRight));
            gallery.transition_end();
        }
        let view = gallery.view();
        assert_eq!(view.page, 1);
        assert!(!view.animated);
        assert!(view.wants_frame);

        gallery.animation_frame();
        let view = gallery.view();
        assert!(view.animated);
        assert!(!view.wants_frame);

        assert!(gallery.key_down(Key::ArrowLeft));
        gallery.transition_end();
        assert_eq!(gallery.view().page, 3);
    }

    #[test]
    fn drag_follows_pointer_then_commits() {
        let mut gallery = gallery(11);
        gallery.pointer_down(&mouse(300.0));
        gallery.pointer_move(&mouse(200.0));
        let view = gallery.view();
        assert!(view.dragging);
        assert!(!view.animated);
        assert_eq!(view.offset_percent, -125.0);

        gallery.pointer_up(&mouse(200.0));
        let view = gallery.view();
        assert_eq!(view.page, 2);
        assert!(view.animated);
        assert!(view.wants_task);
        assert_eq!(view.offset_percent, -200.0);
    }

    #[test]
    fn click_after_drag_is_suppressed_until_task_runs() {
        let mut gallery = gallery(11);
        swipe(&mut gallery, 200.0, 230.0);
        assert_eq!(gallery.view().page, 1);

        // pointerup -> click -> marker cleared
        assert!(!gallery.click_photo(2));
        assert!(gallery.lightbox().selection().is_none());
        gallery.run_task();
        assert!(gallery.click_photo(2));
        assert_eq!(gallery.lightbox().selection(), Some(2));
    }

    #[test]
    fn cancel_ends_the_gesture_like_release() {
        let mut gallery = gallery(11);
        gallery.pointer_down(&mouse(100.0));
        gallery.pointer_move(&mouse(300.0));
        gallery.pointer_cancel(&mouse(300.0));
        assert!(!gallery.drag().is_dragging());
        assert_eq!(gallery.view().page, 3);
    }

    #[test]
    fn lightbox_does_not_touch_paging() {
        let mut gallery = gallery(11);
        gallery.next_page();
        gallery.transition_end();
        let before = gallery.pager().position();

        assert!(gallery.click_photo(5));
        gallery.lightbox_next();
        gallery.lightbox_previous();
        gallery.lightbox_previous();
        assert_eq!(gallery.view().lightbox.map(|l| l.index), Some(4));

        assert!(gallery.key_down(Key::Escape));
        assert!(gallery.lightbox().selection().is_none());
        assert_eq!(gallery.pager().position(), before);
        assert!(!gallery.key_down(Key::Escape));
    }

    #[test]
    fn lightbox_view_reports_disabled_controls() {
        let mut gallery = gallery(11);
        gallery.open_lightbox(10);
        let lightbox = gallery.view().lightbox.unwrap();
        assert_eq!(lightbox.src, "/photos/11.jpg");
        assert!(lightbox.has_previous);
        assert!(!lightbox.has_next);
        gallery.close_lightbox();
        assert!(gallery.view().lightbox.is_none());
    }

    #[test]
    fn invalid_json_config_is_rejected() {
        assert!(matches!(
            Gallery::from_json("{"),
            Err(GalleryError::InvalidConfig(_))
        ));
        assert!(Gallery::from_json(r#"{"photos":[],"page_size":0}"#).is_err());
    }
}
