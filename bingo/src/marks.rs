use std::ops::Deref;

use crate::{CENTER, GRID_SIZE};

/// The chips placed on a card, as a compact set of cells.
///
/// Cell `(row, column)` is bit `row * GRID_SIZE + column`.
///
/// ```
/// use bingo::Marks;
/// let mut marks = Marks::new();
/// // The free space is always marked
/// assert!(marks.is_marked(2, 2));
/// marks.mark(0, 4);
/// marks.mark(0, 4); // Marking a second time has no effect
/// assert_eq!(marks.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marks {
    // Only the low 25 bits are used.
    bits: u32,
}

impl Marks {
    /// Marks with only the free space set, the state at the start of a game.
    pub fn new() -> Self {
        Self::empty().insert(CENTER, CENTER)
    }

    /// Marks without any cell set, not even the free space.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Creates marks from a list of `(row, column)` cells, plus the free space.
    pub fn from_cells(cells: &[(usize, usize)]) -> Self {
        cells
            .iter()
            .fold(Self::new(), |marks, &(row, column)| marks.insert(row, column))
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn is_marked(self, row: usize, column: usize) -> bool {
        (self.bits & bit(row, column)) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, row: usize, column: usize) -> Self {
        Self {
            bits: self.bits | bit(row, column),
        }
    }

    /// Places a chip on a cell.
    pub fn mark(&mut self, row: usize, column: usize) {
        self.bits |= bit(row, column);
    }

    /// The marked state of each of the given cells, in order.
    pub fn vector(self, cells: &[(usize, usize)]) -> MarkVector {
        debug_assert!(cells.len() <= GRID_SIZE);
        let mut values = [false; GRID_SIZE];
        for (value, &(row, column)) in values.iter_mut().zip(cells) {
            *value = self.is_marked(row, column);
        }
        MarkVector {
            values,
            len: cells.len(),
        }
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(row: usize, column: usize) -> u32 {
    debug_assert!(row < GRID_SIZE && column < GRID_SIZE);
    1u32 << (row * GRID_SIZE + column)
}

/// The marked state along one pattern, e.g. a row.
///
/// Dereferences to a `[bool]` slice as long as the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkVector {
    values: [bool; GRID_SIZE],
    len: usize,
}

impl Deref for MarkVector {
    type Target = [bool];

    fn deref(&self) -> &Self::Target {
        &self.values[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marks_only_the_free_space() {
        let marks = Marks::new();
        assert_eq!(marks.len(), 1);
        assert!(marks.is_marked(CENTER, CENTER));
        assert!(!marks.is_marked(0, 0));
        assert!(Marks::empty().is_empty());
        assert_eq!(Marks::default(), marks);
    }

    #[test]
    fn mark_and_insert_agree() {
        let mut marks = Marks::new();
        marks.mark(4, 0);
        assert_eq!(marks, Marks::new().insert(4, 0));
        assert_eq!(marks, Marks::from_cells(&[(4, 0)]));
        assert!(marks.is_marked(4, 0));
        assert!(!marks.is_marked(0, 4));
    }

    #[test]
    fn vectors_follow_cell_order() {
        let marks = Marks::from_cells(&[(0, 0), (4, 4)]);
        let corners = marks.vector(&[(0, 0), (0, 4), (4, 0), (4, 4)]);
        assert_eq!(&*corners, &[true, false, false, true]);
        let diagonal = marks.vector(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(&*diagonal, &[true, false, true, false, true]);
    }
}
