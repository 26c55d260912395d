use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::{Card, DrawStream, GameFileError, GRID_SIZE, HIGHEST_NUMBER};

/// A card and a draw stream, as stored on disk.
///
/// The text format has six lines. The first five are the rows of the card,
/// five numbers each, with the free space written as `0`. The sixth line is
/// the draw stream, all 75 numbers in calling order. Numbers are separated by
/// spaces.
///
/// ```text
/// 3 22 40 51 66
/// 9 17 33 48 70
/// 1 30 0 57 61
/// 14 19 45 46 75
/// 7 24 38 60 68
/// 12 54 3 ...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFile {
    pub card: Card,
    pub stream: DrawStream,
}

impl GameFile {
    /// Parses and validates a game file.
    ///
    /// Trailing whitespace on a line and blank lines after the draw stream are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, GameFileError> {
        let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row_idx, row) in rows.iter_mut().enumerate() {
            let (line_no, line) = lines.next().ok_or(GameFileError::MissingLine {
                line_no: row_idx + 1,
            })?;
            let numbers = parse_numbers(line_no, line, GRID_SIZE)?;
            row.copy_from_slice(&numbers);
        }
        let card = Card::from_rows(rows)?;

        let (line_no, line) = lines.next().ok_or(GameFileError::MissingLine {
            line_no: GRID_SIZE + 1,
        })?;
        let stream = DrawStream::new(parse_numbers(line_no, line, usize::from(HIGHEST_NUMBER))?)?;

        if let Some((line_no, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(GameFileError::UnexpectedLine { line_no });
        }

        Ok(Self { card, stream })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read game file '{}'", path.display()))?;
        let game_file = Self::parse(&text)
            .with_context(|| format!("Invalid game file '{}'", path.display()))?;
        Ok(game_file)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_string())
            .with_context(|| format!("Could not write game file '{}'", path.display()))
    }
}

fn parse_numbers(line_no: usize, line: &str, expected: usize) -> Result<Vec<u8>, GameFileError> {
    let numbers = line
        .split_whitespace()
        .map(|token| {
            token.parse::<u8>().map_err(|_| GameFileError::InvalidNumber {
                line_no,
                token: String::from(token),
            })
        })
        .collect::<Result<Vec<u8>, GameFileError>>()?;
    if numbers.len() != expected {
        return Err(GameFileError::WrongTokenCount {
            line_no,
            expected,
            found: numbers.len(),
        });
    }
    Ok(numbers)
}

fn write_numbers(f: &mut std::fmt::Formatter<'_>, numbers: &[u8]) -> std::fmt::Result {
    for (idx, number) in numbers.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", number)?;
    }
    writeln!(f)
}

impl std::fmt::Display for GameFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.card.rows() {
            write_numbers(f, &row)?;
        }
        write_numbers(f, self.stream.as_slice())
    }
}
