/*
errors.rs

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

//! Error types raised by the puzzle engine.
//!
//! These errors indicate a bug in the caller (a move requested on a tower that does not exist,
//! a ring placed on a smaller ring, ...). They are not expected during normal play and are
//! propagated to the caller as soon as they occur.

use thiserror::Error;

/// Errors surfaced by the [`crate::stack::Stack`] container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    /// Removing an item from an empty container.
    #[error("the container is empty")]
    Empty,

    /// Looking up the position of an item that is not in the container.
    #[error("item not found in the container")]
    NotFound,

    /// Accessing a position past the end of the container.
    #[error("position {position} is out of range for a container of length {len}")]
    IndexOutOfRange { position: usize, len: usize },
}

/// Errors surfaced by the puzzle engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Stack(#[from] StackError),

    /// Placing a ring on top of a smaller (or equal) ring.
    #[error("cannot place ring {ring} on top of ring {top}")]
    IllegalPlacement { ring: usize, top: usize },

    /// The requested number of rings is not supported.
    #[error("unsupported number of rings: {0}")]
    InvalidRingCount(usize),

    /// The presentation layer referenced a tower that does not exist.
    #[error("unknown tower index: {0}")]
    UnknownTower(usize),
}
