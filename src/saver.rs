/*
saver.rs

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

//! Save and restore the data that persists between sessions.
//!
//! All the files are stored in JSON format in the same data directory:
//!
//! * `settings.json`: the user preferences (see [`settings`]).
//! * `leaderboard.json`: all the scores (see [`leaderboard`]).

pub mod leaderboard;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

/// Return the platform-specific data directory.
///
/// Follows platform conventions:
/// - Linux: `~/.local/share/tower-of-cats` (or `$XDG_DATA_HOME/tower-of-cats`)
/// - macOS: `~/Library/Application Support/tower-of-cats`
/// - Windows: `%APPDATA%\tower-of-cats\data`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tower-of-cats")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Whether a load error comes from the content of the file (the file can be replaced), and not
/// from accessing it (the file must be left alone).
pub fn is_corrupted(error: &(dyn Error + 'static)) -> bool {
    error
        .downcast_ref::<serde_json::Error>()
        .is_some_and(|e| !e.is_io())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn parse_errors_are_corruptions() {
        let error: Box<dyn Error> = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err().into();
        assert!(is_corrupted(error.as_ref()));
    }

    #[test]
    fn access_errors_are_not_corruptions() {
        let error: Box<dyn Error> = Box::new(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!is_corrupted(error.as_ref()));
    }
}
