// Occupancy grid for greedy row assignment

/// Tracks which (row, column) cells of a week strip are taken. Rows are
/// created lazily and never beyond `max_rows`.
#[derive(Debug)]
pub(super) struct OccupancyGrid {
    columns: usize,
    max_rows: usize,
    rows: Vec<Vec<bool>>,
}

impl OccupancyGrid {
    pub(super) fn new(columns: usize, max_rows: usize) -> Self {
        Self {
            columns,
            max_rows,
            rows: Vec::new(),
        }
    }

    /// Claim the inclusive column range `[first, last]` in the lowest row
    /// where it is entirely free. Returns the row, or `None` when every row
    /// up to `max_rows` already has a conflict.
    pub(super) fn place(&mut self, first: usize, last: usize) -> Option<usize> {
        debug_assert!(first <= last && last < self.columns);
        for row in 0..self.max_rows {
            if row == self.rows.len() {
                self.rows.push(vec![false; self.columns]);
            }
            let cells = &mut self.rows[row];
            if cells[first..=last].iter().all(|taken| !taken) {
                for cell in &mut cells[first..=last] {
                    *cell = true;
                }
                return Some(row);
            }
        }
        None
    }
}
