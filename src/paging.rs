// Paging and infinite-loop state machine.
// Slides are [last, pages..., first]; landing on a clone is corrected by a silent
// snap, and animation is re-armed one frame later so the snap itself never animates.

use crate::types::Photo;

/// Page-at-a-time view over the photo list with seamless wrap-around.
#[derive(Debug, Clone)]
pub struct Pager {
    /// Each page is a run of flat photo indices.
    pages: Vec<Vec<usize>>,
    page_size: usize,
    position: usize,
    animated: bool,
    rearm_pending: bool,
}

/// What the host must do after a transition-finished callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Landed on a real page.
    Settled,
    /// Landed on a clone and snapped without animation; re-arm on the next frame.
    Snapped { to: usize },
}

impl Pager {
    pub fn new(photos: &[Photo], page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let pages = chunk_indices(photos.len(), page_size);
        Pager {
            pages,
            page_size,
            position: 1,
            animated: true,
            rearm_pending: false,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pages(&self) -> &[Vec<usize>] {
        &self.pages
    }

    /// Slide sequence with one clone on each side. Empty when there are no pages.
    pub fn slides(&self) -> Vec<&[usize]> {
        let Some(first) = self.pages.first() else {
            return Vec::new();
        };
        let last = &self.pages[self.pages.len() - 1];

        let mut slides = Vec::with_capacity(self.pages.len() + 2);
        slides.push(last.as_slice());
        slides.extend(self.pages.iter().map(Vec::as_slice));
        slides.push(first.as_slice());
        slides
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Explicit animation changes supersede a pending re-arm.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        self.rearm_pending = false;
    }

    pub fn rearm_pending(&self) -> bool {
        self.rearm_pending
    }

    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        // A second step before the previous transition settled would leave the strip.
        if self.position == self.total_pages() + 1 {
            self.position = 1;
        }
        self.set_animated(true);
        self.position += 1;
    }

    pub fn retreat(&mut self) {
        if self.is_empty() {
            return;
        }
        if self.position == 0 {
            self.position = self.total_pages();
        }
        self.set_animated(true);
        self.position -= 1;
    }

    /// Called when the slide-shift animation completes.
    pub fn on_transition_finished(&mut self) -> TransitionOutcome {
        let total = self.total_pages();
        if total == 0 {
            return TransitionOutcome::Settled;
        }

        let target = if self.position == 0 {
            total
        } else if self.position == total + 1 {
            1
        } else {
            return TransitionOutcome::Settled;
        };

        log::debug!("snapping from clone slide {} to page {}", self.position, target);
        self.position = target;
        self.animated = false;
        self.rearm_pending = true;
        TransitionOutcome::Snapped { to: target }
    }

    /// Next-frame callback after a silent snap.
    pub fn on_animation_frame(&mut self) {
        if self.rearm_pending {
            self.rearm_pending = false;
            self.animated = true;
        }
    }

    /// 1-based page number for the indicator; 0 when there are no pages.
    pub fn real_page(&self) -> usize {
        let total = self.total_pages();
        if total == 0 {
            return 0;
        }
        (self.position + total - 1) % total + 1
    }

    /// Horizontal track offset in percent of the viewport width.
    pub fn offset_percent(&self, drag_percent: f64) -> f64 {
        -(self.position as f64 * 100.0) + drag_percent
    }

    /// Flat photo index of an item rendered on `slide_index`.
    pub fn global_index(&self, slide_index: usize, item_index: usize) -> Option<usize> {
        let total = self.total_pages();
        if total == 0 || slide_index > total + 1 {
            return None;
        }
        let page = (slide_index + total - 1) % total;
        self.pages[page].get(item_index).copied()
    }
}

fn chunk_indices(len: usize, size: usize) -> Vec<Vec<usize>> {
    (0..len)
        .step_by(size)
        .map(|start| (start..(start + size).min(len)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn photos(count: usize) -> Vec<Photo> {
        (1..=count)
            .map(|i| Photo::new(format!("/photos/{}.jpg", i), format!("Us #{}", i)))
            .collect()
    }

    #[test]
    fn eleven_photos_make_three_pages() {
        let pager = Pager::new(&photos(11), 4);
        assert_eq!(pager.total_pages(), 3);
        let sizes: Vec<usize> = pager.pages().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 3]);
        assert_eq!(pager.slides().len(), 5);
        assert_eq!(pager.position(), 1);
    }

    #[test]
    fn clones_wrap_the_real_pages() {
        let pager = Pager::new(&photos(11), 4);
        let slides = pager.slides();
        assert_eq!(slides[0], &[8, 9, 10]);
        assert_eq!(slides[4], &[0, 1, 2, 3]);
        assert_eq!(slides[1], slides[4]);
        assert_eq!(slides[3], slides[0]);
    }

    #[test]
    fn advancing_past_last_page_snaps_to_first() {
        let mut pager = Pager::new(&photos(11), 4);
        let mut seen = Vec::new();
        for _ in 0..3 {
            pager.advance();
            seen.push(pager.position());
            pager.on_transition_finished();
        }
        assert_eq!(seen, vec![2, 3, 4]);
        assert_eq!(pager.position(), 1);
        assert_eq!(pager.real_page(), 1);
        assert!(!pager.is_animated());
        assert!(pager.rearm_pending());

        pager.on_animation_frame();
        assert!(pager.is_animated());
        assert!(!pager.rearm_pending());
    }

    #[test]
    fn retreating_before_first_page_snaps_to_last() {
        let mut pager = Pager::new(&photos(11), 4);
        pager.retreat();
        assert_eq!(pager.position(), 0);
        assert_eq!(pager.real_page(), 3);
        assert_eq!(
            pager.on_transition_finished(),
            TransitionOutcome::Snapped { to: 3 }
        );
        assert_eq!(pager.position(), 3);
    }

    #[test]
    fn transition_on_real_page_is_a_no_op() {
        let mut pager = Pager::new(&photos(11), 4);
        pager.advance();
        assert_eq!(pager.on_transition_finished(), TransitionOutcome::Settled);
        assert!(pager.is_animated());
        assert!(!pager.rearm_pending());
    }

    #[test]
    fn stepping_again_from_a_clone_stays_on_the_strip() {
        let mut pager = Pager::new(&photos(11), 4);
        pager.advance();
        pager.advance();
        pager.advance();
        assert_eq!(pager.position(), 4);
        pager.advance();
        assert_eq!(pager.position(), 2);

        let mut pager = Pager::new(&photos(11), 4);
        pager.retreat();
        pager.retreat();
        assert_eq!(pager.position(), 2);
    }

    #[test]
    fn empty_photo_list_is_inert() {
        let mut pager = Pager::new(&[], 4);
        assert_eq!(pager.total_pages(), 0);
        assert!(pager.slides().is_empty());
        pager.advance();
        pager.retreat();
        assert_eq!(pager.on_transition_finished(), TransitionOutcome::Settled);
        assert_eq!(pager.real_page(), 0);
        assert_eq!(pager.global_index(0, 0), None);
    }

    #[test]
    fn global_index_maps_clone_items_to_real_photos() {
        let pager = Pager::new(&photos(11), 4);
        assert_eq!(pager.global_index(0, 0), Some(8));
        assert_eq!(pager.global_index(2, 0), Some(4));
        assert_eq!(pager.global_index(4, 3), Some(3));
        assert_eq!(pager.global_index(3, 3), None);
    }

    #[test]
    fn offset_tracks_position_and_drag() {
        let mut pager = Pager::new(&photos(8), 4);
        assert_eq!(pager.offset_percent(0.0), -100.0);
        pager.advance();
        assert_eq!(pager.offset_percent(12.5), -187.5);
    }

    proptest! {
        #[test]
        fn page_count_is_ceiling(len in 0usize..200) {
            let pager = Pager::new(&photos(len), 4);
            prop_assert_eq!(pager.total_pages(), len.div_ceil(4));
            if len > 0 {
                prop_assert_eq!(pager.slides().len(), pager.total_pages() + 2);
            }
        }

        #[test]
        fn advance_then_retreat_restores_position(len in 1usize..60, steps in 0usize..20) {
            let mut pager = Pager::new(&photos(len), 4);
            for _ in 0..steps {
                pager.advance();
                pager.on_transition_finished();
            }
            let before = pager.position();
            pager.advance();
            pager.on_transition_finished();
            pager.retreat();
            pager.on_transition_finished();
            prop_assert_eq!(pager.position(), before);
        }

        #[test]
        fn full_cycle_returns_to_first_page(len in 1usize..60) {
            let mut pager = Pager::new(&photos(len), 4);
            for _ in 0..pager.total_pages() {
                pager.advance();
                pager.on_transition_finished();
                pager.on_animation_frame();
            }
            prop_assert_eq!(pager.real_page(), 1);
            prop_assert_eq!(pager.position(), 1);
        }
    }
}
