// Pointer drag gesture handling for mouse, touch and pen.
// One gesture at a time, correlated by pointer id. Cancel behaves exactly like release.
// The drag marker outlives the gesture; it is cleared by a deferred task so the
// click that follows the release still sees it.

use crate::types::*;

/// Ephemeral record of an in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    pub origin_x: Px,
    pub delta_x: Px,
}

/// Result of ending a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Leftward swipe past the threshold.
    Next,
    /// Rightward swipe past the threshold.
    Previous,
    /// Released inside the threshold; return to the current page.
    SnapBack,
}

/// Tracks at most one drag session plus the tap-suppression marker.
#[derive(Debug, Clone)]
pub struct DragTracker {
    settings: DragSettings,
    session: Option<DragSession>,
    is_drag: bool,
}

impl DragTracker {
    pub fn new(settings: DragSettings) -> Self {
        DragTracker {
            settings,
            session: None,
            is_drag: false,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// True while clicks on photos must be ignored.
    pub fn suppresses_click(&self) -> bool {
        self.is_drag
    }

    /// Start a gesture. Returns true when the host should capture the pointer.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if !event.is_primary() {
            return false;
        }
        if let Some(active) = &self.session {
            if active.pointer_id != event.pointer_id {
                log::debug!(
                    "ignoring pointer {} while pointer {} is dragging",
                    event.pointer_id.as_i32(),
                    active.pointer_id.as_i32()
                );
                return false;
            }
        }

        self.is_drag = false;
        self.session = Some(DragSession {
            pointer_id: event.pointer_id,
            origin_x: event.client_x,
            delta_x: Px(0.0),
        });
        true
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.pointer_id != event.pointer_id {
            return;
        }

        session.delta_x = Px(event.client_x.0 - session.origin_x.0);
        if session.delta_x.abs().0 > self.settings.jitter_px {
            self.is_drag = true;
        }
    }

    /// End the gesture on release or cancel. `None` if the event does not
    /// belong to the active gesture.
    pub fn pointer_up(&mut self, event: &PointerEvent, viewport_width: Px) -> Option<DragOutcome> {
        match &self.session {
            Some(session) if session.pointer_id == event.pointer_id => {}
            _ => return None,
        }
        let session = self.session.take()?;

        let delta = session.delta_x.0;
        let outcome = if delta.abs() > self.threshold(viewport_width).0 {
            if delta < 0.0 {
                DragOutcome::Next
            } else {
                DragOutcome::Previous
            }
        } else {
            DragOutcome::SnapBack
        };

        log::debug!("drag ended at {:.1}px: {:?}", delta, outcome);
        Some(outcome)
    }

    /// Swipe distance needed to change page.
    pub fn threshold(&self, viewport_width: Px) -> Px {
        Px(self
            .settings
            .min_swipe_px
            .max(viewport_width.0 * self.settings.swipe_fraction))
    }

    /// Live offset correction, in percent of the viewport width.
    pub fn drag_percent(&self, viewport_width: Px) -> f64 {
        match &self.session {
            Some(session) => session.delta_x.0 / viewport_width.0.max(1.0) * 100.0,
            None => 0.0,
        }
    }

    /// Deferred half of gesture end; runs after the click has been dispatched.
    pub fn clear_drag_marker(&mut self) {
        self.is_drag = false;
    }
}
