/*
settings.rs

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

//! User preferences (music and sound effect volumes).

use serde::{Deserialize, Deserializer, Serialize};

/// Highest volume value.
pub const MAX_VOLUME: u8 = 100;

/// Audio channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channel {
    /// Background music.
    Bgm,

    /// Sound effects.
    Sfx,
}

/// Read a volume from the settings file. Out of range values, including negative values, are
/// brought back to the 0 to [`MAX_VOLUME`] range.
fn deserialize_volume<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value: i64 = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, i64::from(MAX_VOLUME)) as u8)
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Background music volume, from 0 to 100.
    #[serde(deserialize_with = "deserialize_volume")]
    pub bgm: u8,

    /// Sound effects volume, from 0 to 100.
    #[serde(deserialize_with = "deserialize_volume")]
    pub sfx: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bgm: MAX_VOLUME,
            sfx: MAX_VOLUME,
        }
    }
}

impl Settings {
    /// Return the volume of the given channel.
    pub fn volume(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Bgm => self.bgm,
            Channel::Sfx => self.sfx,
        }
    }

    /// Set the volume of the given channel. Values above [`MAX_VOLUME`] are capped.
    pub fn set_volume(&mut self, channel: Channel, value: u8) {
        let value: u8 = value.min(MAX_VOLUME);
        match channel {
            Channel::Bgm => self.bgm = value,
            Channel::Sfx => self.sfx = value,
        }
    }
}
