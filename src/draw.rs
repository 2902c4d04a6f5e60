/*
draw.rs

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

//! Render the scenes as text.
//!
//! The board is drawn one row at a time, from the top of the towers to the bottom. Each ring
//! is drawn at the row given by its position in its tower.

use std::fmt::Write;

use crate::errors::StackError;
use crate::game::Game;
use crate::leaderboard::LeaderboardEntry;
use crate::ring::Ring;
use crate::scene::Scene;
use crate::settings::Channel;
use crate::tower::Tower;

/// Character used for the rings.
const RING_CHAR: char = '=';

/// Character used for the ring that the player holds.
const HELD_CHAR: char = '#';

/// Character used for the empty part of a tower.
const POLE_CHAR: char = '|';

/// Return the width of a tower column for a game with `ring_count` rings.
fn column_width(ring_count: usize) -> usize {
    2 * ring_count + 1
}

/// Return the text of a ring, centered in its column.
fn ring_text(ring: &Ring, width: usize, c: char) -> String {
    let len: usize = 2 * ring.size() + 1;
    let pad: usize = (width - len) / 2;
    format!(
        "{}{}{}",
        " ".repeat(pad),
        c.to_string().repeat(len),
        " ".repeat(pad)
    )
}

/// Return the text of an empty row, centered in its column.
fn pole_text(width: usize) -> String {
    let pad: usize = width / 2;
    format!("{}{POLE_CHAR}{}", " ".repeat(pad), " ".repeat(pad))
}

/// Return the rows of a tower, from the top to the bottom.
///
/// When `held` is set, the top ring is drawn with [`HELD_CHAR`].
fn tower_column(
    tower: &Tower,
    height: usize,
    width: usize,
    held: bool,
) -> Result<Vec<String>, StackError> {
    let mut column: Vec<String> = vec![pole_text(width); height];

    // Draw the top ring first
    for ring in tower.rings().iter_rev() {
        let position: usize = tower.position_of(ring)?;
        column[height - 1 - position] = ring_text(ring, width, RING_CHAR);
    }

    if held {
        let position: usize = tower.len().saturating_sub(1);
        let ring: &Ring = tower.rings().at(position)?;
        column[height - 1 - position] = ring_text(ring, width, HELD_CHAR);
    }
    Ok(column)
}

/// Render the game board.
///
/// # Errors
///
/// The method returns an error if a tower is inconsistent (a ring that cannot be found).
pub fn board(game: &Game) -> Result<String, StackError> {
    let mut out: String = String::new();
    let (h, m, s) = game.duration_hms();
    let _ = writeln!(
        out,
        "Moves: {} (minimum {})   Time: {h:02}:{m:02}:{s:02}   Layout: {}",
        game.moves(),
        game.min_moves(),
        game.layout()
    );

    if game.is_paused() {
        out.push_str("\n        PAUSED\n\n[p] resume   [q] quit to the main menu\n");
        return Ok(out);
    }

    let width: usize = column_width(game.ring_count());
    let height: usize = game.ring_count() + 1;
    let columns: Vec<Vec<String>> = game
        .towers()
        .iter()
        .map(|t| tower_column(t, height, width, game.selected() == Some(t.id())))
        .collect::<Result<Vec<Vec<String>>, StackError>>()?;

    out.push('\n');
    for row in 0..height {
        let line: Vec<&str> = columns.iter().map(|c| c[row].as_str()).collect();
        let _ = writeln!(out, " {}", line.join(" "));
    }

    // Tower numbers, with a marker under the selected tower
    let mut labels: Vec<String> = Vec::with_capacity(columns.len());
    for tower in game.towers() {
        let label: String = if game.selected() == Some(tower.id()) {
            format!("[{}]", tower.id().index() + 1)
        } else {
            format!("{}", tower.id().index() + 1)
        };
        labels.push(format!("{label:^width$}"));
    }
    let _ = writeln!(out, " {}", labels.join(" "));

    match game.selected() {
        Some(t) => {
            let _ = writeln!(out, "\nHolding the top ring of tower {}: drop it on", t.index() + 1);
        }
        None => {
            let _ = writeln!(out, "\n<from> <to> move a ring   [p] pause");
        }
    }
    Ok(out)
}

/// Render the top scores.
pub fn leaderboard(entries: &[LeaderboardEntry], highlight: Option<usize>) -> String {
    let mut out: String = String::from("Leaderboard\n\n");
    if entries.is_empty() {
        out.push_str("   No score yet\n");
        return out;
    }
    for (i, entry) in entries.iter().enumerate() {
        let marker: &str = if highlight == Some(i + 1) { ">" } else { " " };
        let _ = writeln!(out, "{marker}{:>3}. {:<20} {:>8}", i + 1, entry.name, entry.score);
    }
    out
}

/// Render the given scene.
///
/// # Errors
///
/// See [`board`].
pub fn scene(scene: &Scene) -> Result<String, StackError> {
    let text: String = match scene {
        Scene::MainMenu => String::from(
            "Tower of Cats\n\n  [1] Play\n  [2] Options\n  [3] Leaderboard\n  [4] Quit\n",
        ),
        Scene::Settings { draft } => format!(
            "Settings\n\n  Background Music: {}\n  Sound Effects: {}\n\n\
             [bgm <0-100>] [sfx <0-100>] [b] back\n",
            draft.volume(Channel::Bgm),
            draft.volume(Channel::Sfx)
        ),
        Scene::GameSelection { rings, layout } => format!(
            "New game\n\n  Rings: {rings}\n  Layout: {layout}\n\n\
             [rings <n>] [ordered] [shuffled] [s] start [b] back\n"
        ),
        Scene::Playing(game) => board(game)?,
        Scene::Won {
            ring_count,
            moves,
            elapsed,
            score,
        } => format!(
            "Solved!\n\n  Rings: {ring_count}\n  Moves: {moves}\n  Time: {elapsed:.1}s\n  \
             Score: {score}\n\nEnter your name:\n"
        ),
        Scene::Leaderboard { entries, highlight } => {
            let mut out: String = leaderboard(entries, *highlight);
            out.push_str("\n[b] back\n");
            out
        }
        Scene::Quit => String::new(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::game::Layout;
    use crate::tower::TowerId;

    #[test]
    fn board_draws_rings_by_position() {
        let mut game = Game::new(2, Layout::Ordered, &mut StdRng::seed_from_u64(0)).unwrap();
        let text: String = board(&game).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert!(rows[0].starts_with("Moves: 0 (minimum 3)"));
        assert!(rows[0].ends_with("Layout: ordered"));
        // Empty row on top, then ring 1, then ring 2
        assert_eq!(rows[2], "   |     |     |  ");
        assert_eq!(rows[3], "  ===    |     |  ");
        assert_eq!(rows[4], " =====   |     |  ");
        assert_eq!(rows[5], "   1     2     3  ");

        game.click(TowerId::Left).unwrap();
        let text: String = board(&game).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[3], "  ###    |     |  ");
        assert_eq!(rows[4], " =====   |     |  ");
        assert!(text.contains("[1]"));
    }

    #[test]
    fn paused_board_is_hidden() {
        let mut game = Game::new(3, Layout::Ordered, &mut StdRng::seed_from_u64(0)).unwrap();
        game.pause();
        let text: String = board(&game).unwrap();
        assert!(text.contains("PAUSED"));
        assert!(!text.contains(RING_CHAR));
    }

    #[test]
    fn settings_show_the_volumes() {
        let scene = Scene::Settings {
            draft: crate::settings::Settings { bgm: 40, sfx: 5 },
        };
        let text: String = super::scene(&scene).unwrap();
        assert!(text.contains("Background Music: 40"));
        assert!(text.contains("Sound Effects: 5"));
    }

    #[test]
    fn leaderboard_marks_the_new_score() {
        let entries = vec![LeaderboardEntry::new("a", 900), LeaderboardEntry::new("b", 300)];
        let text: String = leaderboard(&entries, Some(2));
        assert!(text.contains(">  2. b"));
        assert!(text.contains("   1. a"));
        assert!(leaderboard(&[], None).contains("No score yet"));
    }
}
