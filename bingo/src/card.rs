use std::ops::RangeInclusive;

use crate::InvalidCard;

/// Number of rows and columns on a card.
pub const GRID_SIZE: usize = 5;
/// Row and column index of the free space.
pub const CENTER: usize = GRID_SIZE / 2;
/// How many numbers belong to each column.
pub const COLUMN_SPAN: u8 = 15;
/// The largest number that can be drawn.
pub const HIGHEST_NUMBER: u8 = COLUMN_SPAN * GRID_SIZE as u8;
/// The value stored in the center cell. It never matches a draw.
pub const FREE_SPACE: u8 = 0;

/// The column a drawn number belongs to, e.g. 1 to 15 is column 0.
///
/// Returns `None` for numbers that can't be drawn at all.
pub fn column_for_number(number: u8) -> Option<usize> {
    if (1..=HIGHEST_NUMBER).contains(&number) {
        Some(usize::from((number - 1) / COLUMN_SPAN))
    } else {
        None
    }
}

/// The numbers allowed in a column.
pub fn column_range(column: usize) -> RangeInclusive<u8> {
    debug_assert!(column < GRID_SIZE);
    let low = COLUMN_SPAN * column as u8 + 1;
    low..=low + COLUMN_SPAN - 1
}

/// A validated 5x5 bingo card.
///
/// Numbers are stored column by column, since that is how cards are
/// generated and how draws are looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    columns: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Card {
    /// Creates a card from its columns, where `columns[c][r]` is the number
    /// in row `r` of column `c`.
    pub fn from_columns(columns: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, InvalidCard> {
        for (column, numbers) in columns.iter().enumerate() {
            for (row, &number) in numbers.iter().enumerate() {
                if (row, column) == (CENTER, CENTER) {
                    if number != FREE_SPACE {
                        return Err(InvalidCard::CenterNotFree { number });
                    }
                    continue;
                }
                if !column_range(column).contains(&number) {
                    return Err(InvalidCard::NumberOutOfColumnRange {
                        row,
                        column,
                        number,
                    });
                }
                if numbers[..row].contains(&number) {
                    return Err(InvalidCard::DuplicateInColumn { column, number });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Creates a card from its rows, where `rows[r][c]` is the number
    /// in row `r` of column `c`.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, InvalidCard> {
        Self::from_columns(transpose(rows))
    }

    pub fn number(&self, row: usize, column: usize) -> u8 {
        self.columns[column][row]
    }

    pub fn column(&self, column: usize) -> [u8; GRID_SIZE] {
        self.columns[column]
    }

    pub fn rows(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        transpose(self.columns)
    }

    /// Where a drawn number sits on this card, as `(row, column)`.
    ///
    /// Only the column the number belongs to is scanned, and since numbers
    /// within a column are distinct there is at most one hit.
    pub fn find(&self, number: u8) -> Option<(usize, usize)> {
        let column = column_for_number(number)?;
        self.columns[column]
            .iter()
            .position(|&n| n == number)
            .map(|row| (row, column))
    }
}

fn transpose(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> [[u8; GRID_SIZE]; GRID_SIZE] {
    let mut result = [[0; GRID_SIZE]; GRID_SIZE];
    for (i, line) in grid.iter().enumerate() {
        for (j, &value) in line.iter().enumerate() {
            result[j][i] = value;
        }
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The free row is 5 20 FREE 50 65.
    pub(crate) fn sample_rows() -> [[u8; GRID_SIZE]; GRID_SIZE] {
        [
            [1, 16, 31, 46, 61],
            [2, 17, 32, 47, 62],
            [5, 20, FREE_SPACE, 50, 65],
            [3, 18, 33, 48, 63],
            [4, 19, 34, 49, 64],
        ]
    }

    #[test]
    fn column_buckets() {
        assert_eq!(column_for_number(0), None);
        assert_eq!(column_for_number(1), Some(0));
        assert_eq!(column_for_number(15), Some(0));
        assert_eq!(column_for_number(16), Some(1));
        assert_eq!(column_for_number(45), Some(2));
        assert_eq!(column_for_number(46), Some(3));
        assert_eq!(column_for_number(75), Some(4));
        assert_eq!(column_for_number(76), None);
        for column in 0..GRID_SIZE {
            for number in column_range(column) {
                assert_eq!(column_for_number(number), Some(column));
            }
        }
    }

    #[test]
    fn rows_are_transposed_columns() {
        let card = Card::from_rows(sample_rows()).unwrap();
        assert_eq!(card.rows(), sample_rows());
        assert_eq!(card.column(0), [1, 2, 5, 3, 4]);
        assert_eq!(card.number(2, 3), 50);
        assert_eq!(card.number(CENTER, CENTER), FREE_SPACE);
    }

    #[test]
    fn find_number() {
        let card = Card::from_rows(sample_rows()).unwrap();
        assert_eq!(card.find(65), Some((2, 4)));
        assert_eq!(card.find(33), Some((3, 2)));
        assert_eq!(card.find(6), None);
        assert_eq!(card.find(FREE_SPACE), None);
    }

    #[test]
    fn rejects_invalid_cards() {
        let mut rows = sample_rows();
        rows[1][0] = 16;
        assert_eq!(
            Card::from_rows(rows),
            Err(InvalidCard::NumberOutOfColumnRange {
                row: 1,
                column: 0,
                number: 16
            })
        );

        let mut rows = sample_rows();
        rows[4][3] = 46;
        assert_eq!(
            Card::from_rows(rows),
            Err(InvalidCard::DuplicateInColumn {
                column: 3,
                number: 46
            })
        );

        let mut rows = sample_rows();
        rows[CENTER][CENTER] = 37;
        assert_eq!(
            Card::from_rows(rows),
            Err(InvalidCard::CenterNotFree { number: 37 })
        );

        let mut rows = sample_rows();
        rows[0][2] = FREE_SPACE;
        assert!(Card::from_rows(rows).is_err());
    }
}
