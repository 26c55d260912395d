use crate::{Card, Marks, CENTER, GRID_SIZE};

const HEADERS: [char; GRID_SIZE] = ['B', 'I', 'N', 'G', 'O'];

/// Draws a card in a box, with a `*` next to every marked number.
pub fn visualize_card(card: &Card, marks: Marks) -> String {
    // Draw the top of the box
    let mut result = String::from(" ");
    for header in HEADERS {
        result += &format!("  {}  ", header);
    }
    result += "\n╭";
    for _ in 0..GRID_SIZE {
        result += "─────";
    }
    result += "╮\n";

    for row in 0..GRID_SIZE {
        result += "│";
        for column in 0..GRID_SIZE {
            if (row, column) == (CENTER, CENTER) {
                result += "FREE ";
                continue;
            }
            let flag = if marks.is_marked(row, column) { '*' } else { ' ' };
            result += &format!(" {:>2}{} ", card.number(row, column), flag);
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "╰";
    for _ in 0..GRID_SIZE {
        result += "─────";
    }
    result += "╯";
    result
}
