// Full-screen single photo viewer over the flat photo list.
// Navigation clamps at both ends; it never wraps and never touches paging state.

/// Lightbox selection over `photo_count` photos.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    photo_count: usize,
    selection: Option<usize>,
}

impl Lightbox {
    pub fn new(photo_count: usize) -> Self {
        Lightbox {
            photo_count,
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index >= self.photo_count {
            log::warn!(
                "ignoring lightbox open at {} ({} photos)",
                index,
                self.photo_count
            );
            return;
        }
        self.selection = Some(index);
    }

    pub fn close(&mut self) {
        self.selection = None;
    }

    pub fn next(&mut self) {
        if let Some(index) = self.selection {
            self.selection = Some((index + 1).min(self.photo_count.saturating_sub(1)));
        }
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.selection {
            self.selection = Some(index.saturating_sub(1));
        }
    }

    pub fn has_next(&self) -> bool {
        matches!(self.selection, Some(index) if index + 1 < self.photo_count)
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.selection, Some(index) if index > 0)
    }
}
