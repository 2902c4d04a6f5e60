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

//! Manage the leaderboard.
//!
//! The main object, [`Leaderboard`], keeps every score in the order the players made them.
//! Scores are only sorted when they are displayed, and only the [`BOARD_SIZE`] best scores are
//! shown.
//! See the [`crate::saver::leaderboard`] module that saves and restores the [`Leaderboard`]
//! object.

use serde::{Deserialize, Serialize};

/// Number of entries displayed in the leaderboard (number of top scores to show).
pub const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Name that the player entered after solving the puzzle.
    pub name: String,

    /// Score computed by [`crate::game::Game::compute_score`].
    pub score: i64,
}

impl LeaderboardEntry {
    /// Create a [`LeaderboardEntry`] object.
    pub fn new(name: &str, score: i64) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}

/// Unsorted list of all the scores.
///
/// The object is serialized as a plain JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Leaderboard {
    /// Scores in the order they were added.
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty [`Leaderboard`] object.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Return all the scores, in the order they were added.
    #[cfg(test)]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Get the number of scores.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return the `n` best scores, the highest first.
    ///
    /// Scores with the same value keep the order they were added in.
    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut sorted: Vec<LeaderboardEntry> = self.entries.clone();
        // `sort_by` is stable
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    /// Add a score and return its position in the displayed board, or None if the score does not
    /// make it to the board.
    ///
    /// The returned position starts at 1 (top score). A new score ranks after the existing
    /// scores with the same value.
    pub fn add_entry(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let position: usize = self
            .entries
            .iter()
            .filter(|e| e.score >= entry.score)
            .count()
            + 1;
        self.entries.push(entry);
        if position <= BOARD_SIZE {
            Some(position)
        } else {
            None
        }
    }
}
