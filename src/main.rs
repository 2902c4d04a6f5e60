/*
main.rs

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

mod application;
mod cli_options;
mod draw;
mod errors;
mod game;
mod leaderboard;
mod ring;
mod saver;
mod scene;
mod settings;
mod stack;
mod tower;

use self::application::Application;

use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let options: cli_options::Options = match cli_options::parse() {
        Ok(o) => o,
        Err(ret) => return ExitCode::from(ret),
    };

    let app: Result<Application, _> =
        Application::new(options.data_dir, options.start, options.score_rule);
    let mut app: Application = match app {
        Ok(a) => a,
        Err(error) => {
            error!("Cannot start the game: {error}");
            return ExitCode::FAILURE;
        }
    };

    match app.run(io::stdin().lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
