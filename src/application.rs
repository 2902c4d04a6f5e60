/*
application.rs

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

//! Terminal front end.
//!
//! The [`Application`] object reads commands line by line, translates them into
//! [`Intent`] values for the current scene, and renders the next scene.

use clap::ValueEnum;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::draw;
use crate::game::{Layout, ScoreRule};
use crate::scene::{AppContext, Intent, Scene, SceneKind};
use crate::settings::Channel;
use crate::tower::TowerId;

/// Application object.
pub struct Application {
    /// Shared resources.
    ctx: AppContext,

    /// Current scene.
    scene: Scene,

    /// Time of the last update. Used to feed the game timer.
    last_tick: Instant,
}

impl Application {
    /// Create an [`Application`] object.
    ///
    /// When `start` is provided, the menus are skipped and a game with the given number of rings
    /// and layout starts immediately.
    pub fn new(
        data_dir: PathBuf,
        start: Option<(usize, Layout)>,
        score_rule: ScoreRule,
    ) -> Result<Self, Box<dyn Error>> {
        let mut ctx: AppContext = AppContext::new(data_dir, StdRng::from_os_rng());
        ctx.score_rule = score_rule;
        let mut scene: Scene = Scene::MainMenu;

        if let Some((rings, layout)) = start {
            for intent in [
                Intent::NavigateTo(SceneKind::GameSelection),
                Intent::SetRings(rings),
                Intent::SetLayout(layout),
                Intent::StartGame,
            ] {
                scene = scene.reduce(intent, &mut ctx)?;
            }
        }

        Ok(Self {
            ctx,
            scene,
            last_tick: Instant::now(),
        })
    }

    /// Process intents in order.
    fn dispatch(&mut self, intents: Vec<Intent>) -> Result<(), Box<dyn Error>> {
        for intent in intents {
            let scene: Scene = std::mem::replace(&mut self.scene, Scene::Quit);
            self.scene = scene.reduce(intent, &mut self.ctx)?;
        }
        Ok(())
    }

    /// Run the main loop until the player quits or the input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), Box<dyn Error>> {
        let mut lines = input.lines();

        while !matches!(self.scene, Scene::Quit) {
            writeln!(output, "\n{}", draw::scene(&self.scene)?)?;
            write!(output, "> ")?;
            output.flush()?;

            let line: String = match lines.next() {
                Some(l) => l?,
                None => {
                    debug!("End of input");
                    self.dispatch(vec![Intent::Quit])?;
                    break;
                }
            };

            // The game timer counts the time spent thinking between two commands
            let now: Instant = Instant::now();
            let elapsed: f64 = now.duration_since(self.last_tick).as_secs_f64();
            self.last_tick = now;
            if matches!(self.scene, Scene::Playing(_)) {
                self.dispatch(vec![Intent::Tick(elapsed)])?;
            }

            match parse_command(&self.scene, &line) {
                Some(intents) => self.dispatch(intents)?,
                None => writeln!(output, "Unknown command: {}", line.trim())?,
            }
        }
        writeln!(output, "Bye!")?;
        Ok(())
    }
}

/// Translate a tower number typed by the player (1 to 3).
fn parse_tower(word: &str) -> Option<TowerId> {
    let number: usize = word.parse().ok()?;
    TowerId::from_index(number.checked_sub(1)?).ok()
}

/// Translate a command line into intents for the given scene.
///
/// Return None when the command is not valid in that scene.
pub fn parse_command(scene: &Scene, line: &str) -> Option<Vec<Intent>> {
    let line: &str = line.trim();
    let words: Vec<&str> = line.split_whitespace().collect();
    let back: Intent = Intent::NavigateTo(SceneKind::MainMenu);

    let intents: Vec<Intent> = match scene {
        Scene::MainMenu => match line {
            "1" | "play" => vec![Intent::NavigateTo(SceneKind::GameSelection)],
            "2" | "options" => vec![Intent::NavigateTo(SceneKind::Settings)],
            "3" | "leaderboard" => vec![Intent::NavigateTo(SceneKind::Leaderboard)],
            "4" | "q" | "quit" => vec![Intent::Quit],
            _ => return None,
        },

        Scene::Settings { .. } => match words.as_slice() {
            ["b" | "back"] => vec![back],
            [name @ ("bgm" | "sfx"), value] => {
                let channel: Channel = if *name == "bgm" {
                    Channel::Bgm
                } else {
                    Channel::Sfx
                };
                vec![Intent::SetVolume {
                    channel,
                    value: value.parse().ok()?,
                }]
            }
            _ => return None,
        },

        Scene::GameSelection { .. } => match words.as_slice() {
            ["b" | "back"] => vec![back],
            ["s" | "start"] => vec![Intent::StartGame],
            ["rings", n] => vec![Intent::SetRings(n.parse().ok()?)],
            [layout] => vec![Intent::SetLayout(Layout::from_str(layout, true).ok()?)],
            _ => return None,
        },

        Scene::Playing(game) => match words.as_slice() {
            ["p" | "esc" | "r" | "resume"] => vec![Intent::TogglePause],
            ["q" | "quit"] if game.is_paused() => vec![back],
            [tower] => vec![Intent::ClickTower(parse_tower(tower)?)],
            // A ring held by a previous single click is put back first
            [from, to] => vec![
                Intent::ReleaseRing,
                Intent::SelectTower(parse_tower(from)?),
                Intent::AttemptMove(parse_tower(to)?),
            ],
            _ => return None,
        },

        Scene::Won { .. } => vec![Intent::SubmitName(line.to_string())],

        Scene::Leaderboard { .. } => vec![back],

        Scene::Quit => Vec::new(),
    };
    Some(intents)
}
