use ratatui::{prelude::*, widgets::*};

/// A table that remembers which row is selected between draws
#[derive(Default)]
pub struct StatefulTable {
    state: TableState,
    last_row_count: usize,
}

impl StatefulTable {
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn next(&mut self) {
        if self.last_row_count == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i >= self.last_row_count - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.last_row_count == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(0) => self.last_row_count - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Keep the selection in range after rows have been removed
    pub fn set_row_count(&mut self, count: usize) {
        self.last_row_count = count;
        match self.state.selected() {
            _ if count == 0 => self.state.select(None),
            Some(i) if i >= count => self.state.select(Some(count - 1)),
            None => self.state.select(Some(0)),
            Some(_) => (),
        }
    }

    pub fn render_to(&mut self, frame: &mut Frame, target: Rect, table: Table, row_count: usize) {
        self.set_row_count(row_count);
        frame.render_stateful_widget(table, target, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::StatefulTable;

    fn with_rows(n: usize) -> StatefulTable {
        let mut t = StatefulTable::default();
        t.set_row_count(n);
        t
    }

    #[test]
    fn selects_first_row() {
        assert_eq!(with_rows(3).selected(), Some(0));
        assert_eq!(with_rows(0).selected(), None);
    }

    #[test]
    fn wraps_around() {
        let mut t = with_rows(3);
        t.previous();
        assert_eq!(t.selected(), Some(2));
        t.next();
        assert_eq!(t.selected(), Some(0));
        t.next();
        assert_eq!(t.selected(), Some(1));
    }

    #[test]
    fn clamps_after_removal() {
        let mut t = with_rows(3);
        t.previous();
        t.set_row_count(2);
        assert_eq!(t.selected(), Some(1));
        t.set_row_count(0);
        assert_eq!(t.selected(), None);
        t.next();
        assert_eq!(t.selected(), None);
    }
}
