/// The error type for [`Card::from_columns()`](crate::Card::from_columns), i.e. for a card
/// that breaks the column rules.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidCard {
    NumberOutOfColumnRange { row: usize, column: usize, number: u8 },
    DuplicateInColumn { column: usize, number: u8 },
    CenterNotFree { number: u8 },
}

impl std::error::Error for InvalidCard {}

impl std::fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCard::NumberOutOfColumnRange { row, column, number } => {
                let range = crate::column_range(*column);
                write!(
                    f,
                    "The number {} in row {}, column {} is outside of the column's range {} to {}",
                    number,
                    row,
                    column,
                    range.start(),
                    range.end()
                )
            }
            InvalidCard::DuplicateInColumn { column, number } => {
                write!(f, "The number {} appears twice in column {}", number, column)
            }
            InvalidCard::CenterNotFree { number } => write!(
                f,
                "The center cell must be the free space ({}), but holds {}",
                crate::FREE_SPACE,
                number
            ),
        }
    }
}

/// The error type for [`DrawStream::new()`](crate::DrawStream::new).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidDrawStream {
    WrongLength { len: usize },
    NumberOutOfRange { draw_idx: usize, number: u8 },
    DuplicateNumber { draw_idx: usize, number: u8 },
}

impl std::error::Error for InvalidDrawStream {}

impl std::fmt::Display for InvalidDrawStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidDrawStream::WrongLength { len } => write!(
                f,
                "A draw stream must contain {} numbers, but this one has {}",
                crate::HIGHEST_NUMBER,
                len
            ),
            InvalidDrawStream::NumberOutOfRange { draw_idx, number } => write!(
                f,
                "Draw {} is {}, which is not between 1 and {}",
                draw_idx,
                number,
                crate::HIGHEST_NUMBER
            ),
            InvalidDrawStream::DuplicateNumber { draw_idx, number } => {
                write!(f, "Draw {} repeats the number {}", draw_idx, number)
            }
        }
    }
}

/// The error type for [`GameFile::parse()`](crate::GameFile::parse).
///
/// Line numbers start at 1, like in a text editor.
#[derive(Debug, PartialEq, Eq)]
pub enum GameFileError {
    MissingLine { line_no: usize },
    UnexpectedLine { line_no: usize },
    WrongTokenCount {
        line_no: usize,
        expected: usize,
        found: usize,
    },
    InvalidNumber { line_no: usize, token: String },
    InvalidCard(InvalidCard),
    InvalidDrawStream(InvalidDrawStream),
}

impl std::error::Error for GameFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameFileError::InvalidCard(err) => Some(err),
            GameFileError::InvalidDrawStream(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameFileError::MissingLine { line_no } => {
                write!(f, "The game file ends before line {}", line_no)
            }
            GameFileError::UnexpectedLine { line_no } => {
                write!(f, "Unexpected content after the draw stream on line {}", line_no)
            }
            GameFileError::WrongTokenCount {
                line_no,
                expected,
                found,
            } => write!(
                f,
                "Line {} should contain {} numbers, but contains {}",
                line_no, expected, found
            ),
            GameFileError::InvalidNumber { line_no, token } => {
                write!(f, "'{}' on line {} is not a valid number", token, line_no)
            }
            GameFileError::InvalidCard(_) => write!(f, "The card in the game file is invalid"),
            GameFileError::InvalidDrawStream(_) => {
                write!(f, "The draw stream in the game file is invalid")
            }
        }
    }
}

impl From<InvalidCard> for GameFileError {
    fn from(err: InvalidCard) -> Self {
        GameFileError::InvalidCard(err)
    }
}

impl From<InvalidDrawStream> for GameFileError {
    fn from(err: InvalidDrawStream) -> Self {
        GameFileError::InvalidDrawStream(err)
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`WinRule`](crate::WinRule).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseWinRuleError {
    pub input: String,
}

impl std::error::Error for ParseWinRuleError {}

impl std::fmt::Display for ParseWinRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown win rule '{}', expected 'completed' or 'one-short'",
            self.input
        )
    }
}
