use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use bingo::{Bingo, GameFile, WinRule, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Writes every simulated game into a directory.
///
/// Game `n` is stored twice: `game_<n>.txt` is a game file that `caller play`
/// can replay, `game_<n>.json` describes the game and its result.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn write_game_recording(
        &mut self,
        game_file: &GameFile,
        rule: WinRule,
        bingo: Option<Bingo>,
    ) -> anyhow::Result<()> {
        let stem = format!("game_{:0>6}", self.num);
        game_file.save(&self.directory.join(format!("{}.txt", stem)))?;

        let report = GameReport {
            rule,
            card: game_file.card.rows(),
            stream: game_file.stream.as_slice().to_vec(),
            bingo,
        };
        let mut writer = BufWriter::new(File::create(self.directory.join(format!("{}.json", stem)))?);
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        self.num += 1;
        Ok(())
    }
}

/// The JSON description of one game.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub rule: WinRule,
    /// The card, row by row, with the free space as 0.
    pub card: [[u8; GRID_SIZE]; GRID_SIZE],
    pub stream: Vec<u8>,
    /// `None` if nobody won.
    pub bingo: Option<Bingo>,
}
