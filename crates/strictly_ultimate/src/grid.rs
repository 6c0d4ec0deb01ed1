//! Square two-level grid storage shared by sub-boards and the main grid.

use crate::types::GridCoord;

/// An n×n grid stored as rows of values.
///
/// Indexing goes through [`GridCoord`]; out-of-range coordinates yield
/// `None` rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    rows: Vec<Vec<T>>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every slot set to `fill`.
    pub fn filled(size: usize, fill: T) -> Self {
        Self {
            size,
            rows: vec![vec![fill; size]; size],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every coordinate in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(GridCoord) -> T) -> Self {
        let rows = (0..size)
            .map(|row| (0..size).map(|col| f(GridCoord::new(row, col))).collect())
            .collect();
        Self { size, rows }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at `at`.
    pub fn get(&self, at: GridCoord) -> Option<&T> {
        self.rows.get(at.row).and_then(|row| row.get(at.col))
    }

    /// Returns a mutable reference to the value at `at`.
    pub fn get_mut(&mut self, at: GridCoord) -> Option<&mut T> {
        self.rows.get_mut(at.row).and_then(|row| row.get_mut(at.col))
    }

    /// Iterates over every value in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flatten()
    }

    /// Iterates over every coordinate paired with its value.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &T)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, value)| (GridCoord::new(row, col), value))
        })
    }

    /// Returns true if every value on some line satisfies `pred`.
    ///
    /// Lines are the n rows, the n columns, the main diagonal and the
    /// anti-diagonal. An empty grid has no lines.
    pub fn any_line(&self, pred: impl Fn(&T) -> bool) -> bool {
        lines(self.size).any(|line| {
            line.iter()
                .all(|at| self.get(*at).is_some_and(|value| pred(value)))
        })
    }
}

/// All 2n+2 winning lines of an n×n grid.
///
/// Rows come first, then columns, then the main diagonal and the
/// anti-diagonal. Yields nothing when `size` is zero.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<GridCoord>> {
    let rows = (0..size).map(move |r| (0..size).map(|c| GridCoord::new(r, c)).collect::<Vec<_>>());
    let cols = (0..size).map(move |c| (0..size).map(|r| GridCoord::new(r, c)).collect::<Vec<_>>());
    let diagonals = (size > 0)
        .then(|| {
            [
                (0..size).map(|i| GridCoord::new(i, i)).collect::<Vec<_>>(),
                (0..size)
                    .map(|i| GridCoord::new(i, size - 1 - i))
                    .collect::<Vec<_>>(),
            ]
        })
        .into_iter()
        .flatten();
    rows.chain(cols).chain(diagonals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(lines(3).count(), 8);
        assert_eq!(lines(5).count(), 12);
        assert_eq!(lines(0).count(), 0);
    }

    #[test]
    fn test_anti_diagonal() {
        let anti = lines(4).last().unwrap_or_default();
        assert_eq!(
            anti,
            vec![
                GridCoord::new(0, 3),
                GridCoord::new(1, 2),
                GridCoord::new(2, 1),
                GridCoord::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = Grid::filled(3, 0u8);
        assert_eq!(grid.get(GridCoord::new(2, 2)), Some(&0));
        assert_eq!(grid.get(GridCoord::new(3, 0)), None);
    }

    #[test]
    fn test_any_line_column() {
        let mut grid = Grid::filled(4, false);
        for row in 0..4 {
            if let Some(v) = grid.get_mut(GridCoord::new(row, 2)) {
                *v = true;
            }
        }
        assert!(grid.any_line(|v| *v));
        assert!(!Grid::filled(4, false).any_line(|v| *v));
    }

    #[test]
    fn test_from_fn_row_major() {
        let grid = Grid::from_fn(2, |at| at.row * 10 + at.col);
        let values: Vec<_> = grid.values().copied().collect();
        assert_eq!(values, vec![0, 1, 10, 11]);
    }
}
