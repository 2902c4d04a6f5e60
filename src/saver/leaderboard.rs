/*
leaderboard.rs

Copyright 2025 The Tower of Cats developers

This file is part of Tower of Cats.

Tower of Cats is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tower of Cats is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tower of Cats. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore the leaderboard.
//!
//! The saved object is a serialization of the [`Leaderboard`] object in JSON format by
//! using [`serde`]: an unsorted array of `{"name": ..., "score": ...}` objects.
//! The file always contains every score. Sorting and truncating only happen for display.

use log::debug;
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::leaderboard::{Leaderboard, LeaderboardEntry};

/// Object to save and restore the leaderboard.
pub struct SaverLeaderboard {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverLeaderboard {
    /// Create a [`SaverLeaderboard`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the leaderboard must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("leaderboard.json");
        debug!("Leaderboard file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Leaderboard`] object from the leaderboard file.
    ///
    /// Return an empty [`Leaderboard`] object if the file does not exist yet.
    pub fn load(&self) -> Result<Leaderboard, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Leaderboard::new()),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let leaderboard: Leaderboard = serde_json::from_reader(reader)?;
        debug!("Loaded {} scores", leaderboard.len());
        Ok(leaderboard)
    }

    /// Save the provided [`Leaderboard`] object.
    pub fn save(&self, leaderboard: &Leaderboard) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, leaderboard)?;
        writer.flush()?;
        Ok(())
    }

    /// Add a score to the leaderboard file and return its position in the displayed board, or
    /// None if the score does not make it to the board.
    ///
    /// The whole file is read, the score is added, and the whole file is written back.
    pub fn append(&self, entry: LeaderboardEntry) -> Result<Option<usize>, Box<dyn Error>> {
        let mut leaderboard: Leaderboard = self.load()?;
        let position: Option<usize> = leaderboard.add_entry(entry);
        self.save(&leaderboard)?;
        Ok(position)
    }

    /// Delete the leaderboard file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_an_empty_board() {
        let dir = TempDir::new().unwrap();
        let saver = SaverLeaderboard::new(dir.path().to_path_buf());
        assert_eq!(saver.load().unwrap().len(), 0);
    }

    #[test]
    fn append_keeps_every_entry() {
        let dir = TempDir::new().unwrap();
        let saver = SaverLeaderboard::new(dir.path().to_path_buf());

        assert_eq!(saver.append(LeaderboardEntry::new("tom", 50)).unwrap(), Some(1));
        assert_eq!(saver.append(LeaderboardEntry::new("kit", 900)).unwrap(), Some(1));
        assert_eq!(saver.append(LeaderboardEntry::new("ash", 300)).unwrap(), Some(2));

        let board: Leaderboard = saver.load().unwrap();
        let on_disk: Vec<i64> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(on_disk, vec![50, 900, 300]);
        let top: Vec<i64> = board.top(2).iter().map(|e| e.score).collect();
        assert_eq!(top, vec![900, 300]);
    }

    #[test]
    fn file_is_never_truncated() {
        let dir = TempDir::new().unwrap();
        let saver = SaverLeaderboard::new(dir.path().to_path_buf());
        for i in 0..15 {
            saver.append(LeaderboardEntry::new("cat", i)).unwrap();
        }
        assert_eq!(saver.load().unwrap().len(), 15);
    }

    #[test]
    fn reads_hand_written_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("leaderboard.json"),
            r#"[{"name": "a", "score": 3}, {"name": "b", "score": 7}]"#,
        )
        .unwrap();
        let saver = SaverLeaderboard::new(dir.path().to_path_buf());
        let board: Leaderboard = saver.load().unwrap();
        assert_eq!(board.top(1), vec![LeaderboardEntry::new("b", 7)]);
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("leaderboard.json"), "not json").unwrap();
        let saver = SaverLeaderboard::new(dir.path().to_path_buf());
        assert!(saver.load().is_err());

        saver.delete_save();
        assert_eq!(saver.load().unwrap().len(), 0);
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let saver = SaverLeaderboard::new(dir.path().join("nested"));
        saver.append(LeaderboardEntry::new("cat", 1)).unwrap();
        assert!(dir.path().join("nested").join("leaderboard.json").exists());
    }
}
