use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{missing_position, Card, DrawStream, Marks, ParseWinRuleError, Pattern};

/// When a pattern counts as won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinRule {
    /// A pattern is won once all of its cells are marked. The number that
    /// was just drawn is the winning number.
    #[default]
    Completed,
    /// A pattern is won as soon as a mark leaves exactly one of its cells
    /// open. The winning number is the one in that open cell, i.e. the
    /// number that would complete the pattern.
    ///
    /// This is how classic "earliest winning number" checkers behave.
    OneShort,
}

impl std::fmt::Display for WinRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinRule::Completed => write!(f, "completed"),
            WinRule::OneShort => write!(f, "one-short"),
        }
    }
}

impl FromStr for WinRule {
    type Err = ParseWinRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(WinRule::Completed),
            "one-short" => Ok(WinRule::OneShort),
            _ => Err(ParseWinRuleError {
                input: String::from(s),
            }),
        }
    }
}

/// A won game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bingo {
    /// The winning number.
    pub number: u8,
    pub pattern: Pattern,
    /// Where the winning number is on the card, as `(row, column)`.
    pub cell: (usize, usize),
    /// The index of the draw that ended the game.
    pub draw_idx: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// No number has been drawn yet.
    Idle,
    /// Some numbers were drawn, but no pattern is won yet.
    Replaying,
    Won(Bingo),
    /// Every number was drawn without a win.
    Exhausted,
}

/// Summarizes what a single draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The number is not on the card.
    Miss { draw_idx: usize, number: u8 },
    /// The number was marked, but did not win.
    Mark {
        draw_idx: usize,
        number: u8,
        cell: (usize, usize),
    },
    Bingo(Bingo),
    /// The game was already over, nothing was drawn.
    Over,
}

/// Replays a draw stream against a card.
///
/// The game owns its card, marks and stream for its whole lifetime, and the
/// marks are never reset.
#[derive(Clone, Debug)]
pub struct Game {
    card: Card,
    marks: Marks,
    stream: DrawStream,
    rule: WinRule,
    state: GameState,
    next_draw_idx: usize,
}

impl Game {
    pub fn new(card: Card, stream: DrawStream, rule: WinRule) -> Self {
        Self::with_marks(card, stream, rule, Marks::new())
    }

    /// Creates a game where some cells are already marked.
    ///
    /// The free space is marked even if `marks` does not contain it.
    pub fn with_marks(card: Card, stream: DrawStream, rule: WinRule, marks: Marks) -> Self {
        Self {
            card,
            marks: marks.insert(crate::CENTER, crate::CENTER),
            stream,
            rule,
            state: GameState::Idle,
            next_draw_idx: 0,
        }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn marks(&self) -> Marks {
        self.marks
    }

    pub fn stream(&self) -> &DrawStream {
        &self.stream
    }

    pub fn rule(&self) -> WinRule {
        self.rule
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The result of the game, once it is over.
    ///
    /// `None` means either that there was no winner, or that the game is still
    /// running. Use [`Self::state()`] to tell them apart.
    pub fn outcome(&self) -> Option<Bingo> {
        match self.state {
            GameState::Won(bingo) => Some(bingo),
            _ => None,
        }
    }

    /// Draws the next number, marks it and checks for a win.
    pub fn step(&mut self) -> Step {
        if matches!(self.state, GameState::Won(_) | GameState::Exhausted) {
            return Step::Over;
        }
        let draw_idx = self.next_draw_idx;
        let Some(number) = self.stream.get(draw_idx) else {
            self.state = GameState::Exhausted;
            return Step::Over;
        };
        self.next_draw_idx += 1;
        self.state = GameState::Replaying;

        let Some((row, column)) = self.card.find(number) else {
            return Step::Miss { draw_idx, number };
        };
        self.marks.mark(row, column);
        match self.check_at(row, column, draw_idx) {
            Some(bingo) => {
                self.state = GameState::Won(bingo);
                Step::Bingo(bingo)
            }
            None => Step::Mark {
                draw_idx,
                number,
                cell: (row, column),
            },
        }
    }

    /// Draws numbers until a pattern is won or the stream runs out.
    ///
    /// Returns `None` if there was no winner. Once the game is over, this
    /// keeps returning the same result.
    pub fn play(&mut self) -> Option<Bingo> {
        while self.step() != Step::Over {}
        self.outcome()
    }

    /// Whether the mark on `(row, column)` wins a pattern through that cell,
    /// given the current marks.
    ///
    /// Patterns are tried in the order of [`Pattern::candidates()`], the first
    /// one that is won is returned. This does not change the game, and the
    /// returned `draw_idx` is the one of the most recent draw.
    pub fn check(&self, row: usize, column: usize) -> Option<Bingo> {
        self.check_at(row, column, self.next_draw_idx.saturating_sub(1))
    }

    fn check_at(&self, row: usize, column: usize, draw_idx: usize) -> Option<Bingo> {
        Pattern::candidates(row, column).find_map(|pattern| {
            let cell = self.winning_cell(pattern, (row, column))?;
            Some(Bingo {
                number: self.card.number(cell.0, cell.1),
                pattern,
                cell,
                draw_idx,
            })
        })
    }

    fn winning_cell(&self, pattern: Pattern, marked: (usize, usize)) -> Option<(usize, usize)> {
        let cells = pattern.cells();
        let vector = self.marks.vector(cells);
        match self.rule {
            WinRule::Completed => vector.iter().all(|&m| m).then_some(marked),
            WinRule::OneShort => missing_position(&vector).map(|pos| cells[pos]),
        }
    }
}
