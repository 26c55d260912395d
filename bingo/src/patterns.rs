use serde::{Deserialize, Serialize};

use crate::GRID_SIZE;

/// Number of cells in the four-corners pattern.
pub const CORNER_COUNT: usize = 4;

/// A recognized winning shape on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum Pattern {
    Row(usize),
    Column(usize),
    /// From the top left to the bottom right corner.
    MainDiagonal,
    /// From the bottom left to the top right corner.
    AntiDiagonal,
    FourCorners,
}

static ROWS: [[(usize, usize); GRID_SIZE]; GRID_SIZE] = line_cells(false);
static COLUMNS: [[(usize, usize); GRID_SIZE]; GRID_SIZE] = line_cells(true);
static MAIN_DIAGONAL: [(usize, usize); GRID_SIZE] = diagonal_cells(false);
static ANTI_DIAGONAL: [(usize, usize); GRID_SIZE] = diagonal_cells(true);
static CORNERS: [(usize, usize); CORNER_COUNT] = [
    (0, 0),
    (0, GRID_SIZE - 1),
    (GRID_SIZE - 1, 0),
    (GRID_SIZE - 1, GRID_SIZE - 1),
];

/// The "all marked except one" masks for rows, columns and diagonals.
///
/// Mask `k` has its single `false` at position `GRID_SIZE - 1 - k`.
pub static LINE_MASKS: [[bool; GRID_SIZE]; GRID_SIZE] = one_false_masks();
/// The "all marked except one" masks for the four corners.
pub static CORNER_MASKS: [[bool; CORNER_COUNT]; CORNER_COUNT] = one_false_masks();

const fn one_false_masks<const N: usize>() -> [[bool; N]; N] {
    let mut masks = [[true; N]; N];
    let mut k = 0;
    while k < N {
        masks[k][N - 1 - k] = false;
        k += 1;
    }
    masks
}

const fn line_cells(vertical: bool) -> [[(usize, usize); GRID_SIZE]; GRID_SIZE] {
    let mut lines = [[(0, 0); GRID_SIZE]; GRID_SIZE];
    let mut i = 0;
    while i < GRID_SIZE {
        let mut j = 0;
        while j < GRID_SIZE {
            lines[i][j] = if vertical { (j, i) } else { (i, j) };
            j += 1;
        }
        i += 1;
    }
    lines
}

const fn diagonal_cells(anti: bool) -> [(usize, usize); GRID_SIZE] {
    let mut cells = [(0, 0); GRID_SIZE];
    let mut i = 0;
    while i < GRID_SIZE {
        // The anti-diagonal is listed by column, starting in the bottom left corner
        cells[i] = if anti { (GRID_SIZE - 1 - i, i) } else { (i, i) };
        i += 1;
    }
    cells
}

/// Position of the only unmarked cell in `vector`, if it equals one of the
/// one-false masks for its length.
///
/// Vectors of any other length never match.
pub fn missing_position(vector: &[bool]) -> Option<usize> {
    let mask: Option<&[bool]> = match vector.len() {
        GRID_SIZE => LINE_MASKS
            .iter()
            .find(|mask| mask[..] == *vector)
            .map(|mask| &mask[..]),
        CORNER_COUNT => CORNER_MASKS
            .iter()
            .find(|mask| mask[..] == *vector)
            .map(|mask| &mask[..]),
        _ => None,
    };
    mask.and_then(|mask| mask.iter().position(|&marked| !marked))
}

pub fn is_corner(row: usize, column: usize) -> bool {
    CORNERS.contains(&(row, column))
}

impl Pattern {
    /// The cells making up this pattern, as `(row, column)`.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Row(row) => &ROWS[row],
            Pattern::Column(column) => &COLUMNS[column],
            Pattern::MainDiagonal => &MAIN_DIAGONAL,
            Pattern::AntiDiagonal => &ANTI_DIAGONAL,
            Pattern::FourCorners => &CORNERS,
        }
    }

    /// The patterns running through a cell, in the order they are evaluated:
    /// row, column, main diagonal, anti-diagonal, four corners.
    pub fn candidates(row: usize, column: usize) -> impl Iterator<Item = Pattern> {
        [
            Some(Pattern::Row(row)),
            Some(Pattern::Column(column)),
            (row == column).then_some(Pattern::MainDiagonal),
            (row + column == GRID_SIZE - 1).then_some(Pattern::AntiDiagonal),
            is_corner(row, column).then_some(Pattern::FourCorners),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Row(row) => write!(f, "row {}", row),
            Pattern::Column(column) => write!(f, "column {}", column),
            Pattern::MainDiagonal => write!(f, "main diagonal"),
            Pattern::AntiDiagonal => write!(f, "anti-diagonal"),
            Pattern::FourCorners => write!(f, "four corners"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_tables() {
        assert_eq!(
            LINE_MASKS,
            [
                [true, true, true, true, false],
                [true, true, true, false, true],
                [true, true, false, true, true],
                [true, false, true, true, true],
                [false, true, true, true, true],
            ]
        );
        assert_eq!(
            CORNER_MASKS,
            [
                [true, true, true, false],
                [true, true, false, true],
                [true, false, true, true],
                [false, true, true, true],
            ]
        );
    }

    #[test]
    fn missing_positions() {
        assert_eq!(missing_position(&[true, true, false, true, true]), Some(2));
        assert_eq!(missing_position(&[false, true, true, true]), Some(0));
        assert_eq!(missing_position(&[true; 5]), None);
        assert_eq!(missing_position(&[true, false, false, true, true]), None);
        assert_eq!(missing_position(&[true, false, true]), None);
    }

    #[test]
    fn anti_diagonal_membership() {
        let members: Vec<(usize, usize)> = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |column| (row, column)))
            .filter(|&(row, column)| {
                Pattern::candidates(row, column).any(|p| p == Pattern::AntiDiagonal)
            })
            .collect();
        assert_eq!(members, vec![(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]);
    }

    #[test]
    fn candidate_order() {
        assert_eq!(
            Pattern::candidates(0, 0).collect::<Vec<_>>(),
            vec![
                Pattern::Row(0),
                Pattern::Column(0),
                Pattern::MainDiagonal,
                Pattern::FourCorners
            ]
        );
        assert_eq!(
            Pattern::candidates(4, 0).collect::<Vec<_>>(),
            vec![
                Pattern::Row(4),
                Pattern::Column(0),
                Pattern::AntiDiagonal,
                Pattern::FourCorners
            ]
        );
        assert_eq!(
            Pattern::candidates(1, 2).collect::<Vec<_>>(),
            vec![Pattern::Row(1), Pattern::Column(2)]
        );
    }

    #[test]
    fn pattern_cells() {
        assert_eq!(Pattern::Row(3).cells(), &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4)]);
        assert_eq!(Pattern::Column(1).cells(), &[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
        assert_eq!(
            Pattern::AntiDiagonal.cells(),
            &[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)]
        );
        assert_eq!(Pattern::FourCorners.cells().len(), CORNER_COUNT);
    }
}
