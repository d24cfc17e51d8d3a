/// Vertical scroll state for a list of fixed-height (one row) items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListViewport {
    pub offset: usize,
    pub visible: usize,
    pub total: usize,
}

impl ListViewport {
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp();
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scrolls the minimum amount needed for `index` to be on screen.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.visible == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index + 1 - self.visible;
        }
        self.clamp();
    }

    pub fn is_scrollable(&self) -> bool {
        self.visible > 0 && self.total > self.visible
    }

    /// Maps a visible row (0-based, relative to the list top) to an item index.
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        if row >= self.visible {
            return None;
        }
        let idx = self.offset + row;
        (idx < self.total).then_some(idx)
    }

    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_when_total_shrinks() {
        let mut v = ListViewport::default();
        v.set_total(10);
        v.set_visible(3);
        v.offset = 7;
        v.set_total(5);
        assert_eq!(v.offset, 2);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut v = ListViewport::default();
        v.set_total(10);
        v.set_visible(3);
        v.ensure_visible(4);
        assert_eq!(v.offset, 2);
        v.ensure_visible(3);
        assert_eq!(v.offset, 2);
        v.ensure_visible(0);
        assert_eq!(v.offset, 0);
    }

    #[test]
    fn index_at_row_respects_offset_and_bounds() {
        let mut v = ListViewport::default();
        v.set_total(4);
        v.set_visible(3);
        v.offset = 1;
        assert_eq!(v.index_at_row(0), Some(1));
        assert_eq!(v.index_at_row(2), Some(3));
        assert_eq!(v.index_at_row(3), None);
    }
}
