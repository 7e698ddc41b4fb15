//! Results table state

/// Table display state: selection and vertical scroll.
pub struct TableState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

impl TableState {
    /// Reset after the visible set changed: select the first row if
    /// any, scroll back to the top.
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_selects_first_row_when_non_empty() {
        let mut table = TableState::default();
        table.selected = Some(7);
        table.scroll_offset = 5;
        table.reset(3);
        assert_eq!(table.selected, Some(0));
        assert_eq!(table.scroll_offset, 0);
    }

    #[test]
    fn reset_clears_selection_when_empty() {
        let mut table = TableState::default();
        table.selected = Some(2);
        table.reset(0);
        assert_eq!(table.selected, None);
    }

    #[test]
    fn next_stops_at_last_row() {
        let mut table = TableState::default();
        table.reset(2);
        table.select_next(2);
        table.select_next(2);
        assert_eq!(table.selected, Some(1));
    }

    #[test]
    fn prev_stops_at_first_row() {
        let mut table = TableState::default();
        table.reset(2);
        table.select_prev();
        assert_eq!(table.selected, Some(0));
    }

    #[test]
    fn scrolling_follows_selection_past_viewport() {
        let mut table = TableState {
            visible_rows: 3,
            ..TableState::default()
        };
        table.reset(10);
        for _ in 0..4 {
            table.select_next(10);
        }
        assert_eq!(table.selected, Some(4));
        assert_eq!(table.scroll_offset, 2);
        table.select_first();
        assert_eq!(table.scroll_offset, 0);
    }
}
