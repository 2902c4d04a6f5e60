/*
scene.rs

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

//! Scene flow.
//!
//! The application is always in one [`Scene`]: a menu, the game board, the win screen, or the
//! leaderboard. The presentation layer translates the player input into [`Intent`] values and
//! passes them to [`Scene::reduce`], which returns the next scene.
//!
//! The shared resources (preferences, save files, random number generator) live in the
//! [`AppContext`] object that is passed to every call.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::errors::GameError;
use crate::game::{DEFAULT_RINGS, Game, Layout, MAX_RINGS, ScoreRule};
use crate::leaderboard::{BOARD_SIZE, Leaderboard, LeaderboardEntry};
use crate::saver;
use crate::saver::leaderboard::SaverLeaderboard;
use crate::saver::settings::SaverSettings;
use crate::settings::{Channel, Settings};
use crate::tower::TowerId;

/// Longest player name kept in the leaderboard.
pub const MAX_NAME_LEN: usize = 20;

/// Name used when the player does not enter one.
const DEFAULT_NAME: &str = "Anonymous";

/// Resources shared by all the scenes.
pub struct AppContext {
    /// Current user preferences.
    pub settings: Settings,

    /// Save and restore the user preferences.
    saver_settings: SaverSettings,

    /// Save and restore the leaderboard.
    saver_leaderboard: SaverLeaderboard,

    /// Random number generator for the shuffled layouts.
    rng: StdRng,

    /// Score rule for the new games.
    pub score_rule: ScoreRule,
}

impl AppContext {
    /// Create an [`AppContext`] object that stores its files in `data_dir`.
    ///
    /// The user preferences are loaded immediately. If the file is corrupted, then it is
    /// replaced with the default preferences.
    pub fn new(data_dir: PathBuf, rng: StdRng) -> Self {
        let saver_settings: SaverSettings = SaverSettings::new(data_dir.clone());
        let settings: Settings = match saver_settings.load() {
            Ok(s) => s,
            Err(error) => {
                warn!("Error reading the settings: {error}");
                if saver::is_corrupted(error.as_ref()) {
                    // Replace the file in error for the next start
                    saver_settings.delete_save();
                    if let Err(error) = saver_settings.save(&Settings::default()) {
                        warn!("Error saving the default settings: {error}");
                    }
                }
                Settings::default()
            }
        };
        debug!("Settings = {settings:?}");

        Self {
            settings,
            saver_settings,
            saver_leaderboard: SaverLeaderboard::new(data_dir),
            rng,
            score_rule: ScoreRule::default(),
        }
    }

    /// Store and save the given preferences.
    fn save_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if let Err(error) = self.saver_settings.save(&settings) {
            warn!("Error saving the settings: {error}");
        }
    }

    /// Load the leaderboard from the disk.
    pub fn leaderboard(&self) -> Leaderboard {
        match self.saver_leaderboard.load() {
            Ok(l) => l,
            Err(error) => {
                warn!("Error reading the leaderboard: {error}");
                // Only a file that cannot be parsed is lost. Other errors might be temporary.
                if saver::is_corrupted(error.as_ref()) {
                    self.saver_leaderboard.delete_save();
                }
                Leaderboard::new()
            }
        }
    }

    /// Return the scores to display, the highest first.
    pub fn top_scores(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard().top(BOARD_SIZE)
    }

    /// Add a score to the leaderboard file and return its position in the displayed board.
    fn record_score(&self, entry: LeaderboardEntry) -> Option<usize> {
        match self.saver_leaderboard.append(entry) {
            Ok(position) => position,
            Err(error) => {
                warn!("Error saving the score: {error}");
                None
            }
        }
    }
}

/// Scenes that can be reached with [`Intent::NavigateTo`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneKind {
    MainMenu,
    Settings,
    GameSelection,
    Leaderboard,
}

/// Player input, already interpreted by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Go to a menu scene.
    NavigateTo(SceneKind),

    /// Change a volume in the settings scene.
    SetVolume { channel: Channel, value: u8 },

    /// Choose the number of rings in the game selection scene.
    SetRings(usize),

    /// Choose the initial placement in the game selection scene.
    SetLayout(Layout),

    /// Start a game with the choices of the game selection scene.
    StartGame,

    /// Pick up the top ring of a tower.
    SelectTower(TowerId),

    /// Drop the held ring on a tower.
    AttemptMove(TowerId),

    /// Click on a tower (select or move, depending on the current selection).
    ClickTower(TowerId),

    /// Put the held ring back without moving it.
    ReleaseRing,

    /// Pause or resume the game (Escape key).
    TogglePause,

    /// Time spent since the previous tick, in seconds.
    Tick(f64),

    /// Name that the player entered on the win screen.
    SubmitName(String),

    /// Leave the application.
    Quit,
}

/// Application scenes.
#[derive(Debug, Clone)]
pub enum Scene {
    /// Play, Options, Leaderboard, and Quit buttons.
    MainMenu,

    /// Volume sliders. The draft is saved when leaving the scene.
    Settings { draft: Settings },

    /// Number of rings and layout selection.
    GameSelection { rings: usize, layout: Layout },

    /// Game board.
    Playing(Game),

    /// The puzzle is solved and the player can enter their name.
    Won {
        ring_count: usize,
        moves: u64,
        elapsed: f64,
        score: i64,
    },

    /// Top scores. `highlight` is the position of the score that the player just added.
    Leaderboard {
        entries: Vec<LeaderboardEntry>,
        highlight: Option<usize>,
    },

    /// The application must exit.
    Quit,
}

impl Scene {
    /// Return the scene name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Scene::MainMenu => "main menu",
            Scene::Settings { .. } => "settings",
            Scene::GameSelection { .. } => "game selection",
            Scene::Playing(_) => "game",
            Scene::Won { .. } => "win screen",
            Scene::Leaderboard { .. } => "leaderboard",
            Scene::Quit => "quit",
        }
    }

    /// Build the scene for the given kind.
    fn open(kind: SceneKind, ctx: &AppContext) -> Scene {
        match kind {
            SceneKind::MainMenu => Scene::MainMenu,
            SceneKind::Settings => Scene::Settings {
                draft: ctx.settings,
            },
            SceneKind::GameSelection => Scene::GameSelection {
                rings: DEFAULT_RINGS,
                layout: Layout::default(),
            },
            SceneKind::Leaderboard => Scene::Leaderboard {
                entries: ctx.top_scores(),
                highlight: None,
            },
        }
    }

    /// Process an intent and return the next scene.
    ///
    /// Intents that do not apply to the current scene leave it unchanged.
    ///
    /// # Errors
    ///
    /// The method returns an error only if the game engine detects a corrupted state.
    pub fn reduce(self, intent: Intent, ctx: &mut AppContext) -> Result<Scene, GameError> {
        let from: &'static str = self.name();
        let next: Scene = match (self, intent) {
            (_, Intent::Quit) => Scene::Quit,
            (Scene::Quit, _) => Scene::Quit,

            (Scene::MainMenu, Intent::NavigateTo(kind)) => Scene::open(kind, ctx),

            // Leaving the settings saves them
            (Scene::Settings { mut draft }, Intent::SetVolume { channel, value }) => {
                draft.set_volume(channel, value);
                Scene::Settings { draft }
            }
            (Scene::Settings { draft }, Intent::NavigateTo(kind)) => {
                ctx.save_settings(draft);
                Scene::open(kind, ctx)
            }

            (Scene::GameSelection { layout, .. }, Intent::SetRings(n)) => Scene::GameSelection {
                rings: n.clamp(1, MAX_RINGS),
                layout,
            },
            (Scene::GameSelection { rings, .. }, Intent::SetLayout(layout)) => {
                Scene::GameSelection { rings, layout }
            }
            (Scene::GameSelection { rings, layout }, Intent::StartGame) => {
                let mut game: Game = Game::new(rings, layout, &mut ctx.rng)?;
                game.set_score_rule(ctx.score_rule);
                Scene::Playing(game)
            }
            (Scene::GameSelection { .. }, Intent::NavigateTo(kind)) => Scene::open(kind, ctx),

            // Quitting a game is only offered by the pause menu
            (Scene::Playing(game), Intent::NavigateTo(kind)) => {
                if game.is_paused() {
                    Scene::open(kind, ctx)
                } else {
                    Scene::Playing(game)
                }
            }
            (Scene::Playing(game), intent) => Scene::play(game, intent)?,

            (
                Scene::Won {
                    ring_count, score, ..
                },
                Intent::SubmitName(name),
            ) => {
                let name: String = clean_name(&name);
                info!("{name} solved {ring_count} rings with a score of {score}");
                let highlight: Option<usize> =
                    ctx.record_score(LeaderboardEntry::new(&name, score));
                Scene::Leaderboard {
                    entries: ctx.top_scores(),
                    highlight,
                }
            }
            (Scene::Won { .. }, Intent::NavigateTo(kind)) => Scene::open(kind, ctx),

            (Scene::Leaderboard { .. }, Intent::NavigateTo(kind)) => Scene::open(kind, ctx),

            (scene, intent) => {
                debug!("Ignoring {intent:?} in the {from}");
                scene
            }
        };

        if next.name() != from {
            debug!("Scene: {from} -> {}", next.name());
        }
        Ok(next)
    }

    /// Process an intent for the game board.
    fn play(mut game: Game, intent: Intent) -> Result<Scene, GameError> {
        match intent {
            Intent::SelectTower(t) => {
                game.select_tower(t);
            }
            Intent::AttemptMove(t) => {
                game.attempt_move(t)?;
            }
            Intent::ClickTower(t) => {
                game.click(t)?;
            }
            Intent::ReleaseRing => game.release(),
            Intent::TogglePause => game.toggle_pause(),
            Intent::Tick(seconds) => game.tick(seconds),
            _ => (),
        }

        // The presentation layer checks for a win after every update
        if game.has_won() {
            return Ok(Scene::Won {
                ring_count: game.ring_count(),
                moves: game.moves(),
                elapsed: game.elapsed(),
                score: game.compute_score(),
            });
        }
        Ok(Scene::Playing(game))
    }
}

/// Return the name to store in the leaderboard.
fn clean_name(name: &str) -> String {
    let name: &str = name.trim();
    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name.chars().take(MAX_NAME_LEN).collect()
    }
}
