/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the three towers and enforces the rules of the puzzle.
//! The player moves a ring in two steps:
//!
//! * [`Game::select_tower`] picks up the top ring of a tower. The ring stays on the tower until
//!   the move is resolved.
//! * [`Game::attempt_move`] drops the held ring on another tower. The move is legal when the
//!   destination tower is empty or when its top ring is larger than the held ring.
//!
//! The presentation layer usually calls [`Game::click`], which performs the right step
//! depending on whether a tower is already selected.

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use std::fmt;

use crate::errors::{GameError, StackError};
use crate::ring::Ring;
use crate::stack::Stack;
use crate::tower::{NUM_TOWERS, Tower, TowerId};

/// Largest number of rings supported by the engine.
pub const MAX_RINGS: usize = 10;

/// Default number of rings.
pub const DEFAULT_RINGS: usize = 3;

/// Tower that must hold all the rings to win.
pub const TARGET_TOWER: TowerId = TowerId::Right;

/// Initial placement of the rings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// All the rings on the left tower, the largest at the bottom.
    #[default]
    Ordered,

    /// Each ring on a random tower.
    ///
    /// A deal where every ring lands on the right tower is dealt again, so the right tower never
    /// starts with all the rings.
    Shuffled,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Layout::Ordered => write!(f, "ordered"),
            Layout::Shuffled => write!(f, "shuffled"),
        }
    }
}

/// How the time term of the score is computed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ScoreRule {
    /// `((time - 1.5 * min_moves) / 1.5) * min_moves * 1000`
    #[default]
    Observed,

    /// `((time - 1.5 * min_moves) / (1.5 * min_moves)) * 1000`
    Grouped,
}

/// Result of an attempt to drop the held ring on a tower.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The ring has been transferred.
    Moved {
        ring: usize,
        from: TowerId,
        to: TowerId,
    },

    /// The destination tower has a smaller (or the same) top ring. Nothing was transferred.
    Illegal,

    /// No tower was selected, the game is paused, or the game is won.
    Ignored,
}

/// Result of a click on a tower.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The top ring of the tower has been picked up.
    Selected(TowerId),

    /// A ring was held and the move has been resolved.
    Resolved(MoveOutcome),
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Number of rings.
    ring_count: usize,

    /// Initial placement of the rings.
    layout: Layout,

    /// Left, middle, and right towers.
    towers: [Tower; NUM_TOWERS],

    /// Number of legal moves so far.
    moves: u64,

    /// Played time in seconds. Paused time is not counted.
    elapsed: f64,

    /// Tower whose top ring is held by the player.
    selected_tower: Option<TowerId>,

    /// Whether the player paused the game. In that case, the game board is hidden.
    paused: bool,

    /// Rule used by [`Game::compute_score`].
    score_rule: ScoreRule,
}

impl Game {
    /// Create a [`Game`] object with `ring_count` rings placed according to `layout`.
    ///
    /// Rings are generated from the largest (size `ring_count`) to the smallest (size 1).
    /// With [`Layout::Shuffled`], each ring goes on a random tower, so that each tower still
    /// receives its rings from the largest to the smallest.
    ///
    /// # Errors
    ///
    /// The method returns [`GameError::InvalidRingCount`] if `ring_count` is 0 or larger than
    /// [`MAX_RINGS`].
    pub fn new<R: Rng + ?Sized>(
        ring_count: usize,
        layout: Layout,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if ring_count == 0 || ring_count > MAX_RINGS {
            return Err(GameError::InvalidRingCount(ring_count));
        }

        let mut game = Self {
            ring_count,
            layout,
            towers: TowerId::ALL.map(|id| Tower::new(id, ring_count)),
            moves: 0,
            elapsed: 0.0,
            selected_tower: None,
            paused: false,
            score_rule: ScoreRule::default(),
        };
        game.deal(rng)?;
        debug!(
            "New game: {ring_count} rings, {layout} layout, minimum moves = {}",
            game.min_moves()
        );
        Ok(game)
    }

    /// Place the rings on the towers.
    fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        loop {
            self.towers = TowerId::ALL.map(|id| Tower::new(id, self.ring_count));

            // Deal from the largest ring to the smallest
            let mut pending: Stack<usize> = (1..=self.ring_count).rev().collect();
            while let Some(size) = pending.pop_front() {
                let id: TowerId = match self.layout {
                    Layout::Ordered => TowerId::Left,
                    Layout::Shuffled => TowerId::ALL[rng.random_range(0..NUM_TOWERS)],
                };
                self.towers[id.index()].place(Ring::new(size, id))?;
            }

            // A shuffled deal could put every ring on the target tower
            if !self.has_won() {
                return Ok(());
            }
            debug!("The deal is already solved: dealing again");
        }
    }

    /// Return the number of rings.
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Return the initial placement of the rings.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Return the three towers, from left to right.
    pub fn towers(&self) -> &[Tower; NUM_TOWERS] {
        &self.towers
    }

    /// Return the given tower.
    pub fn tower(&self, id: TowerId) -> &Tower {
        &self.towers[id.index()]
    }

    /// Return the number of legal moves so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Return the played time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Return the game duration in hours, minutes, and seconds
    pub fn duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.elapsed as u64;
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }

    /// Return the tower whose top ring is held by the player.
    pub fn selected(&self) -> Option<TowerId> {
        self.selected_tower
    }

    /// Whether the game is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Return the total number of rings on the three towers.
    pub fn ring_total(&self) -> usize {
        self.towers.iter().map(Tower::len).sum()
    }

    /// Return the minimum number of moves to solve the puzzle (`2^N - 1`).
    pub fn min_moves(&self) -> u64 {
        (1u64 << self.ring_count) - 1
    }

    /// Whether the puzzle is solved: all the rings are on the right tower.
    pub fn has_won(&self) -> bool {
        self.tower(TARGET_TOWER).len() == self.ring_count
    }

    /// Pick up the top ring of the given tower.
    ///
    /// Return whether the tower is now selected. The selection is refused when the game is
    /// paused or won, when a tower is already selected, or when the tower is empty.
    pub fn select_tower(&mut self, tower: TowerId) -> bool {
        if self.paused || self.has_won() || self.selected_tower.is_some() {
            return false;
        }
        if self.tower(tower).is_empty() {
            return false;
        }
        self.selected_tower = Some(tower);
        debug!("Selected the {tower} tower");
        true
    }

    /// Drop the held ring on the given tower.
    ///
    /// The selection is cleared whether the move is legal or not.
    ///
    /// # Errors
    ///
    /// The method returns an error only if the engine state is corrupted (the selected tower is
    /// empty, or a ring would be placed on a smaller ring).
    pub fn attempt_move(&mut self, target: TowerId) -> Result<MoveOutcome, GameError> {
        if self.paused || self.has_won() {
            return Ok(MoveOutcome::Ignored);
        }
        let Some(from) = self.selected_tower.take() else {
            return Ok(MoveOutcome::Ignored);
        };

        let held: Ring = self.tower(from).top().copied().ok_or(StackError::Empty)?;
        if !self.tower(target).can_accept(&held) {
            debug!(
                "Illegal move of ring {held} from the {from} tower to the {target} tower"
            );
            return Ok(MoveOutcome::Illegal);
        }

        debug_assert_eq!(held.tower(), from);
        let ring: Ring = self.towers[from.index()].take_top()?;
        self.towers[target.index()].place(ring)?;
        self.moves += 1;
        debug_assert_eq!(self.ring_total(), self.ring_count);
        debug_assert!(self.towers.iter().all(Tower::is_well_ordered));
        debug!(
            "Moved ring {ring} from the {from} tower to the {target} tower: moves = {}",
            self.moves
        );
        Ok(MoveOutcome::Moved {
            ring: ring.size(),
            from,
            to: target,
        })
    }

    /// Process a click on a tower: pick up its top ring if no tower is selected, otherwise try to
    /// drop the held ring on it.
    ///
    /// # Errors
    ///
    /// See [`Game::attempt_move`].
    pub fn click(&mut self, tower: TowerId) -> Result<ClickOutcome, GameError> {
        if self.selected_tower.is_some() {
            return Ok(ClickOutcome::Resolved(self.attempt_move(tower)?));
        }
        if self.select_tower(tower) {
            Ok(ClickOutcome::Selected(tower))
        } else {
            Ok(ClickOutcome::Resolved(MoveOutcome::Ignored))
        }
    }

    /// Put the held ring back on its tower. Nothing happens when no ring is held.
    pub fn release(&mut self) {
        if let Some(tower) = self.selected_tower.take() {
            debug!("Released the ring of the {tower} tower");
        }
    }

    /// Add the given number of seconds to the played time.
    pub fn tick(&mut self, delta_seconds: f64) {
        if !self.paused && !self.has_won() && delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
    }

    /// Pause the game. The held ring, if any, is released.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.release();
        self.paused = true;
        debug!("Game paused after {:.1}s", self.elapsed);
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        debug!("Game resumed");
    }

    /// Pause or resume the game.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Set the rule used by [`Game::compute_score`]. The default is [`ScoreRule::Observed`].
    pub fn set_score_rule(&mut self, rule: ScoreRule) {
        self.score_rule = rule;
    }

    /// Return the score with the rule of the game.
    pub fn compute_score(&self) -> i64 {
        self.compute_score_with(self.score_rule)
    }

    /// Return the score.
    ///
    /// `max(0, floor(N*1000 - (moves - min_moves)/min_moves + time_term))`, where the time term
    /// depends on `rule`.
    pub fn compute_score_with(&self, rule: ScoreRule) -> i64 {
        let n: f64 = self.ring_count as f64;
        let moves: f64 = self.moves as f64;
        let min_moves: f64 = self.min_moves() as f64;
        let par_time: f64 = 1.5 * min_moves;

        let move_term: f64 = (moves - min_moves) / min_moves;
        let time_term: f64 = match rule {
            ScoreRule::Observed => (self.elapsed - par_time) / 1.5 * min_moves * 1000.0,
            ScoreRule::Grouped => (self.elapsed - par_time) / par_time * 1000.0,
        };

        let score: f64 = (n * 1000.0 - move_term + time_term).floor();
        if score > 0.0 { score as i64 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::tower::TowerId::{Left, Middle, Right};

    fn ordered(n: usize) -> Game {
        Game::new(n, Layout::Ordered, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    fn sizes(game: &Game, id: TowerId) -> Vec<usize> {
        game.tower(id).rings().iter().map(|r| r.size()).collect()
    }

    fn assert_invariants(game: &Game) {
        assert_eq!(game.ring_total(), game.ring_count());
        for tower in game.towers() {
            assert!(tower.is_well_ordered(), "{:?}", sizes(game, tower.id()));
            assert!(tower.rings().iter().all(|r| r.tower() == tower.id()));
        }
    }

    #[test]
    fn ordered_layout_puts_everything_on_the_left() {
        let game = ordered(3);
        assert_eq!(sizes(&game, Left), vec![3, 2, 1]);
        assert!(game.tower(Middle).is_empty());
        assert!(game.tower(Right).is_empty());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed(), 0.0);
        assert_eq!(game.selected(), None);
        assert!(!game.is_paused());
        assert_invariants(&game);
    }

    #[test]
    fn shuffled_layout_keeps_towers_ordered() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = Game::new(6, Layout::Shuffled, &mut rng).unwrap();
            assert_invariants(&game);
            assert!(!game.has_won());
        }
    }

    #[test]
    fn shuffled_single_ring_never_starts_won() {
        for seed in 0..30 {
            let game = Game::new(1, Layout::Shuffled, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!(game.tower(Right).is_empty());
        }
    }

    #[test]
    fn invalid_ring_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Game::new(0, Layout::Ordered, &mut rng).unwrap_err(),
            GameError::InvalidRingCount(0)
        );
        assert_eq!(
            Game::new(MAX_RINGS + 1, Layout::Ordered, &mut rng).unwrap_err(),
            GameError::InvalidRingCount(MAX_RINGS + 1)
        );
    }

    #[test]
    fn minimum_moves() {
        assert_eq!(ordered(1).min_moves(), 1);
        assert_eq!(ordered(3).min_moves(), 7);
        assert_eq!(ordered(MAX_RINGS).min_moves(), 1023);
    }

    #[test]
    fn scenario_three_rings() {
        let mut game = ordered(3);

        assert!(game.select_tower(Left));
        assert_eq!(
            game.attempt_move(Right).unwrap(),
            MoveOutcome::Moved {
                ring: 1,
                from: Left,
                to: Right
            }
        );
        assert_eq!(sizes(&game, Left), vec![3, 2]);
        assert_eq!(sizes(&game, Right), vec![1]);
        assert_eq!(game.moves(), 1);

        assert!(game.select_tower(Left));
        assert!(matches!(
            game.attempt_move(Middle).unwrap(),
            MoveOutcome::Moved { ring: 2, .. }
        ));
        assert_eq!(sizes(&game, Left), vec![3]);
        assert_eq!(sizes(&game, Middle), vec![2]);
        assert_eq!(game.moves(), 2);

        // Ring 1 onto ring 2 is legal
        assert!(game.select_tower(Right));
        assert!(matches!(
            game.attempt_move(Middle).unwrap(),
            MoveOutcome::Moved { ring: 1, .. }
        ));
        assert_eq!(sizes(&game, Middle), vec![2, 1]);
        assert!(game.tower(Right).is_empty());
        assert_eq!(game.moves(), 3);
        assert_invariants(&game);
    }

    #[test]
    fn illegal_move_is_rejected_and_clears_selection() {
        let mut game = ordered(3);
        game.click(Left).unwrap();
        game.click(Middle).unwrap();
        assert_eq!(sizes(&game, Middle), vec![1]);

        // Ring 2 onto ring 1
        assert!(game.select_tower(Left));
        assert_eq!(game.attempt_move(Middle).unwrap(), MoveOutcome::Illegal);
        assert_eq!(game.selected(), None);
        assert_eq!(game.moves(), 1);
        assert_eq!(sizes(&game, Left), vec![3, 2]);
        assert_eq!(sizes(&game, Middle), vec![1]);
        assert_invariants(&game);
    }

    #[test]
    fn dropping_on_the_same_tower_is_illegal() {
        let mut game = ordered(2);
        assert!(game.select_tower(Left));
        assert_eq!(game.attempt_move(Left).unwrap(), MoveOutcome::Illegal);
        assert_eq!(game.moves(), 0);
        assert_eq!(sizes(&game, Left), vec![2, 1]);
    }

    #[test]
    fn selection_rules() {
        let mut game = ordered(3);
        // Empty tower
        assert!(!game.select_tower(Middle));
        assert_eq!(game.selected(), None);

        assert!(game.select_tower(Left));
        // Already selected
        assert!(!game.select_tower(Left));
        assert_eq!(game.selected(), Some(Left));
    }

    #[test]
    fn move_without_selection_is_ignored() {
        let mut game = ordered(3);
        assert_eq!(game.attempt_move(Right).unwrap(), MoveOutcome::Ignored);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn click_alternates_between_select_and_move() {
        let mut game = ordered(2);
        assert_eq!(game.click(Middle).unwrap(), ClickOutcome::Resolved(MoveOutcome::Ignored));
        assert_eq!(game.click(Left).unwrap(), ClickOutcome::Selected(Left));
        assert!(matches!(
            game.click(Right).unwrap(),
            ClickOutcome::Resolved(MoveOutcome::Moved { ring: 1, .. })
        ));
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn paused_game_ignores_input_and_time() {
        let mut game = ordered(3);
        game.select_tower(Left);
        game.pause();
        assert_eq!(game.selected(), None);

        assert!(!game.select_tower(Left));
        assert_eq!(game.attempt_move(Right).unwrap(), MoveOutcome::Ignored);
        game.tick(5.0);
        assert_eq!(game.elapsed(), 0.0);
        assert_eq!(game.moves(), 0);

        game.resume();
        game.tick(0.5);
        game.tick(0.25);
        assert_eq!(game.elapsed(), 0.75);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut game = ordered(3);
        game.resume();
        assert!(!game.is_paused());

        game.tick(2.0);
        game.pause();
        game.pause();
        assert!(game.is_paused());
        assert_eq!(game.elapsed(), 2.0);

        game.toggle_pause();
        assert!(!game.is_paused());
    }

    #[test]
    fn legality_matches_ring_sizes() {
        // Walk through every pair of towers of a mid-game position
        let mut game = ordered(4);
        for (from, to) in [(Left, Middle), (Left, Right), (Middle, Right)] {
            game.click(from).unwrap();
            game.click(to).unwrap();
        }
        // Left = [4, 3], Middle = [], Right = [2, 1]
        assert_eq!(sizes(&game, Left), vec![4, 3]);
        assert_eq!(sizes(&game, Right), vec![2, 1]);

        for from in TowerId::ALL {
            for to in TowerId::ALL {
                let mut g = game.clone();
                let Some(held) = g.tower(from).top().map(|r| r.size()) else {
                    continue;
                };
                let expected = match g.tower(to).top() {
                    None => true,
                    Some(top) => held < top.size(),
                };
                let before = g.moves();
                g.select_tower(from);
                let outcome = g.attempt_move(to).unwrap();

                assert_eq!(matches!(outcome, MoveOutcome::Moved { .. }), expected);
                assert_eq!(g.moves(), before + u64::from(expected));
                assert_invariants(&g);
            }
        }
    }

    /// Recursive solver used to play complete games.
    fn solve(game: &mut Game, n: usize, from: TowerId, to: TowerId, via: TowerId) {
        if n == 0 {
            return;
        }
        solve(game, n - 1, from, via, to);
        game.click(from).unwrap();
        assert!(matches!(
            game.click(to).unwrap(),
            ClickOutcome::Resolved(MoveOutcome::Moved { .. })
        ));
        assert_invariants(game);
        solve(game, n - 1, via, to, from);
    }

    #[test]
    fn optimal_solution_wins() {
        for n in 1..=5 {
            let mut game = ordered(n);
            solve(&mut game, n, Left, Right, Middle);
            assert!(game.has_won());
            assert_eq!(game.moves(), game.min_moves());

            // The game is over
            assert!(!game.select_tower(Right));
            game.tick(1.0);
            assert_eq!(game.elapsed(), 0.0);
        }
    }

    #[test]
    fn win_needs_every_ring_on_the_right_tower() {
        let mut game = ordered(3);
        solve(&mut game, 2, Left, Right, Middle);
        assert_eq!(game.tower(Right).len(), 2);
        assert!(!game.has_won());
    }

    #[test]
    fn score_formula() {
        let mut game = ordered(3);
        solve(&mut game, 3, Left, Right, Middle);
        // The game is won, so set the time directly
        game.elapsed = 10.5;
        assert_eq!(game.compute_score(), 3000);
        assert_eq!(game.compute_score_with(ScoreRule::Grouped), 3000);

        game.elapsed = 12.0;
        assert_eq!(game.compute_score_with(ScoreRule::Observed), 10000);
        assert_eq!(game.compute_score_with(ScoreRule::Grouped), 3142);

        game.elapsed = 0.0;
        assert_eq!(game.compute_score(), 0);
        assert_eq!(game.compute_score_with(ScoreRule::Grouped), 2000);

        game.elapsed = 10.5;
        game.moves = 14;
        assert_eq!(game.compute_score(), 2999);
    }

    #[test]
    fn score_rule_of_the_game() {
        let mut game = ordered(3);
        solve(&mut game, 3, Left, Right, Middle);
        game.elapsed = 12.0;
        assert_eq!(game.compute_score(), 10000);
        game.set_score_rule(ScoreRule::Grouped);
        assert_eq!(game.compute_score(), 3142);
    }

    #[test]
    fn release_puts_the_ring_back() {
        let mut game = ordered(3);
        assert!(game.select_tower(Left));
        game.release();
        assert_eq!(game.selected(), None);
        assert_eq!(game.moves(), 0);
        assert_eq!(sizes(&game, Left), vec![3, 2, 1]);

        // A new tower can be selected
        assert!(game.select_tower(Left));
        game.release();
        game.release();
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn duration_hms() {
        let mut game = ordered(3);
        game.tick(3725.4);
        assert_eq!(game.duration_hms(), (1, 2, 5));
    }
}
