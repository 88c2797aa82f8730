//! JSON-lines log of engine events.
//!
//! One record per [`GameEvent`], tagged with the tick it happened on and the
//! game's seed, so a session can be replayed or inspected offline:
//!
//! ```text
//! {"tick":45,"seed":7,"type":"locked","kind":"O","rotation":0,"position":{"row":18,"col":3}}
//! {"tick":45,"seed":7,"type":"lines_cleared","count":2}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Game, GameEvent};

#[derive(Serialize)]
struct Record<'a> {
    tick: u64,
    seed: u64,
    #[serde(flatten)]
    event: &'a GameEvent,
}

/// Event sink writing one JSON object per line.
pub struct EventLog<W: Write = BufWriter<File>> {
    out: W,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn record(&mut self, tick: u64, seed: u64, event: &GameEvent) -> Result<()> {
        serde_json::to_writer(&mut self.out, &Record { tick, seed, event })?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Record every event the game produced on its most recent step.
    pub fn record_step(&mut self, game: &Game) -> Result<()> {
        for event in game.events() {
            self.record(game.ticks(), game.seed(), event)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Position};

    fn lines(log: EventLog<Vec<u8>>) -> Vec<serde_json::Value> {
        let bytes = log.into_inner();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn records_are_flat_tagged_objects() {
        let mut log = EventLog::new(Vec::new());
        log.record(
            45,
            7,
            &GameEvent::Locked {
                kind: PieceKind::O,
                rotation: 0,
                position: Position::new(18, 3),
            },
        )
        .unwrap();
        log.record(45, 7, &GameEvent::LinesCleared { count: 2 }).unwrap();
        log.record(90, 7, &GameEvent::GameOver).unwrap();

        let records = lines(log);
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            serde_json::json!({
                "tick": 45,
                "seed": 7,
                "type": "locked",
                "kind": "O",
                "rotation": 0,
                "position": {"row": 18, "col": 3}
            })
        );
        assert_eq!(records[1]["type"], "lines_cleared");
        assert_eq!(records[1]["count"], 2);
        assert_eq!(records[2]["type"], "game_over");
    }

    #[test]
    fn record_step_writes_the_initial_spawn() {
        let game = Game::new(3);
        let mut log = EventLog::new(Vec::new());
        log.record_step(&game).unwrap();

        let records = lines(log);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "spawned");
        assert_eq!(records[0]["tick"], 0);
        assert_eq!(records[0]["seed"], 3);
        assert_eq!(records[0]["position"]["row"], 4);
    }
}
