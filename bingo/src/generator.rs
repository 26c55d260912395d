use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{column_range, Card, DrawStream, CENTER, FREE_SPACE, GRID_SIZE, HIGHEST_NUMBER};

/// Picks the five numbers of one column.
///
/// Numbers are drawn uniformly from the column's range and redrawn while
/// they are already taken. The center of the middle column is the free
/// space and does not take part in the draw.
pub fn generate_column(rng: &mut StdRng, column: usize) -> [u8; GRID_SIZE] {
    let range = column_range(column);
    let mut numbers = [FREE_SPACE; GRID_SIZE];
    let mut chosen = 0;
    for row in 0..GRID_SIZE {
        if (row, column) == (CENTER, CENTER) {
            continue;
        }
        loop {
            let number = rng.gen_range(range.clone());
            if !numbers[..row].contains(&number) {
                numbers[row] = number;
                chosen += 1;
                break;
            }
            // Can't happen with 15 candidates per column, but never spin forever
            if chosen == GRID_SIZE {
                break;
            }
        }
    }
    numbers
}

/// Creates a random card.
pub fn generate_card(rng: &mut StdRng) -> Card {
    let mut columns = [[FREE_SPACE; GRID_SIZE]; GRID_SIZE];
    for (column, numbers) in columns.iter_mut().enumerate() {
        *numbers = generate_column(rng, column);
    }
    Card::from_columns(columns).expect("generated cards follow the column rules")
}

/// Creates a random order for calling all numbers from 1 to 75.
pub fn shuffle_stream(rng: &mut StdRng) -> DrawStream {
    let mut numbers: Vec<u8> = (1..=HIGHEST_NUMBER).collect();
    numbers.shuffle(rng);
    DrawStream::new(numbers).expect("a shuffled range is a permutation")
}
