// Deferred work the host runs on our behalf.
// Tasks map to `setTimeout(0)`, frames to `requestAnimationFrame`. Nothing queued
// here ever runs inside the event that queued it.

use std::collections::VecDeque;

/// Work that must wait for the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Clear the tap-suppression marker once the post-release click has been seen.
    ClearDragMarker,
    /// Re-enable animated transitions after a silent clone snap.
    RearmTransition,
}

/// Two FIFO lanes: next task and next animation frame.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<Deferred>,
    frames: VecDeque<Deferred>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer_task(&mut self, work: Deferred) {
        self.tasks.push_back(work);
    }

    pub fn defer_frame(&mut self, work: Deferred) {
        if !self.frames.contains(&work) {
            self.frames.push_back(work);
        }
    }

    pub fn wants_task(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn wants_frame(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Take what was queued for the current task turn. Work deferred while
    /// running these waits for the following turn.
    pub fn take_tasks(&mut self) -> Vec<Deferred> {
        self.tasks.drain(..).collect()
    }

    pub fn take_frame(&mut self) -> Vec<Deferred> {
        self.frames.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_independent() {
        let mut queue = DeferredQueue::new();
        queue.defer_task(Deferred::ClearDragMarker);
        assert!(queue.wants_task());
        assert!(!queue.wants_frame());

        queue.defer_frame(Deferred::RearmTransition);
        queue.defer_frame(Deferred::RearmTransition);
        assert_eq!(queue.take_frame(), vec![Deferred::RearmTransition]);
        assert_eq!(queue.take_tasks(), vec![Deferred::ClearDragMarker]);
        assert!(!queue.wants_task());
    }
}
