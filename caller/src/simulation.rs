use std::collections::BTreeMap;

use bingo::{generate_card, shuffle_stream, Bingo, Game, GameFile, Pattern, Step, WinRule};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::recording::Recorder;

/// Running totals over many games.
#[derive(Debug, Default)]
pub struct Tally {
    pub games: usize,
    /// Games where the stream ran out without a win.
    pub exhausted: usize,
    /// Number of wins for each kind of pattern, e.g. "row".
    pub wins_by_pattern: BTreeMap<&'static str, usize>,
    /// The sum over all won games of how many numbers were drawn.
    pub total_draws: usize,
}

impl Tally {
    pub fn wins(&self) -> usize {
        self.games - self.exhausted
    }

    pub fn record(&mut self, bingo: Option<Bingo>) {
        self.games += 1;
        match bingo {
            Some(bingo) => {
                *self.wins_by_pattern.entry(pattern_kind(bingo.pattern)).or_default() += 1;
                self.total_draws += bingo.draw_idx + 1;
            }
            None => self.exhausted += 1,
        }
    }

    /// How many numbers had to be drawn on average until somebody won.
    pub fn average_draws(&self) -> Option<f32> {
        (self.wins() > 0).then(|| self.total_draws as f32 / self.wins() as f32)
    }
}

pub fn pattern_kind(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Row(_) => "row",
        Pattern::Column(_) => "column",
        Pattern::MainDiagonal | Pattern::AntiDiagonal => "diagonal",
        Pattern::FourCorners => "four corners",
    }
}

/// Plays a game to the end, tracing every draw.
pub fn replay(game: &mut Game) -> Option<Bingo> {
    loop {
        match game.step() {
            Step::Miss { draw_idx, number } => trace!(draw_idx, number, "Not on the card"),
            Step::Mark {
                draw_idx,
                number,
                cell: (row, column),
            } => trace!(draw_idx, number, row, column, "Marked"),
            Step::Bingo(bingo) => {
                debug!(
                    draw_idx = bingo.draw_idx,
                    number = bingo.number,
                    pattern = %bingo.pattern,
                    "Bingo"
                );
            }
            Step::Over => break,
        }
    }
    game.outcome()
}

/// Plays `num_games` games, each with a freshly generated card and stream.
pub fn simulate(
    rng: &mut StdRng,
    num_games: usize,
    rule: WinRule,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Tally> {
    let mut tally = Tally::default();
    for game_idx in 0..num_games {
        let game_file = GameFile {
            card: generate_card(rng),
            stream: shuffle_stream(rng),
        };
        let mut game = Game::new(game_file.card, game_file.stream.clone(), rule);
        let bingo = replay(&mut game);
        match bingo {
            Some(bingo) => debug!(game_idx, number = bingo.number, "Game won"),
            None => debug!(game_idx, "No winner"),
        }
        if let Some(rec) = recorder {
            rec.write_game_recording(&game_file, rule, bingo)?;
        }
        tally.record(bingo);
    }
    Ok(tally)
}
