/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Print the leaderboard:
//!
//! ```
//! $ tower-of-cats --leaderboard
//! Leaderboard
//!
//!     1. Whiskers                 2000
//!     2. Anonymous                 415
//! ```
//!
//! Skip the menus and start a game with five shuffled rings:
//!
//! ```
//! $ tower-of-cats --rings 5 --shuffle
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

use crate::draw;
use crate::game::{Layout, MAX_RINGS, ScoreRule};
use crate::saver;
use crate::scene::AppContext;

const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 The Tower of Cats developers\nLicense GPL-3.0-or-later"
);

/// Move a tower of cats from the left post to the right post.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Directory for the settings and the leaderboard files
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print the leaderboard and exit
    #[arg(short, long, default_value_t = false)]
    leaderboard: bool,

    /// Start a game with this number of rings, without going through the menus
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_RINGS as i64))]
    rings: Option<u8>,

    /// Deal the rings randomly between the towers
    #[arg(short, long, default_value_t = false, requires = "rings")]
    shuffle: bool,

    /// How the solving time counts in the score
    #[arg(value_enum, long, default_value_t = ScoreRule::Observed)]
    score_rule: ScoreRule,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options that the application needs to start.
#[derive(Debug)]
pub struct Options {
    /// Directory for the save files.
    pub data_dir: PathBuf,

    /// Number of rings and layout of the game to start immediately.
    pub start: Option<(usize, Layout)>,

    /// Score rule for all the games of the session.
    pub score_rule: ScoreRule,
}

/// Parse and process command-line options.
///
/// Return the exit code in the error variant when the application must stop.
pub fn parse() -> Result<Options, u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: PathBuf = args.data_dir.unwrap_or_else(saver::data_dir);
    debug!("Data directory: {data_dir:?}");

    //
    // Print the leaderboard
    //
    if args.leaderboard {
        let ctx: AppContext = AppContext::new(data_dir, StdRng::from_os_rng());
        print!("{}", draw::leaderboard(&ctx.top_scores(), None));
        return Err(0);
    }

    let start: Option<(usize, Layout)> = args.rings.map(|n| {
        let layout: Layout = if args.shuffle {
            Layout::Shuffled
        } else {
            Layout::Ordered
        };
        (n as usize, layout)
    });
    Ok(Options {
        data_dir,
        start,
        score_rule: args.score_rule,
    })
}
