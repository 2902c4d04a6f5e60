/*
tower.rs

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

//! Towers (pegs) and the pile of rings they hold.
//!
//! A tower keeps its rings bottom to top. At any time, a ring is always smaller than the ring
//! below it. [`Tower::place`] verifies that rule every time a ring is added, so that a tower can
//! never hold an illegal pile, whatever the caller does.

use std::fmt;
use strum_macros::FromRepr;

use crate::errors::{GameError, StackError};
use crate::ring::Ring;
use crate::stack::Stack;

/// Number of towers in the game.
pub const NUM_TOWERS: usize = 3;

/// Tower identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum TowerId {
    Left,
    Middle,
    Right,
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TowerId::Left => write!(f, "left"),
            TowerId::Middle => write!(f, "middle"),
            TowerId::Right => write!(f, "right"),
        }
    }
}

impl TowerId {
    /// All the towers, from left to right.
    pub const ALL: [TowerId; NUM_TOWERS] = [TowerId::Left, TowerId::Middle, TowerId::Right];

    /// Return the [`TowerId`] for the given index (0 is the left tower).
    ///
    /// # Errors
    ///
    /// The method returns [`GameError::UnknownTower`] if the index is not 0, 1, or 2.
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        TowerId::from_repr(index).ok_or(GameError::UnknownTower(index))
    }

    /// Return the index of the tower (0 is the left tower).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Tower object.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    /// Tower identifier.
    id: TowerId,

    /// Rings, from the bottom to the top.
    rings: Stack<Ring>,
}

impl Tower {
    /// Create an empty [`Tower`] object.
    pub fn new(id: TowerId, capacity: usize) -> Self {
        Self {
            id,
            rings: Stack::with_capacity(capacity),
        }
    }

    /// Return the tower identifier.
    pub fn id(&self) -> TowerId {
        self.id
    }

    /// Return the rings, from the bottom to the top.
    pub fn rings(&self) -> &Stack<Ring> {
        &self.rings
    }

    /// Get the number of rings on the tower.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Whether the tower has no ring.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Return the top ring (the last ring placed on the tower).
    pub fn top(&self) -> Option<&Ring> {
        self.rings.last()
    }

    /// Return the position of the given ring in the tower (0 is the bottom).
    ///
    /// The position is only used to compute where to draw the ring.
    ///
    /// # Errors
    ///
    /// The method returns [`StackError::NotFound`] if the ring is not on the tower.
    pub fn position_of(&self, ring: &Ring) -> Result<usize, StackError> {
        self.rings.index_of(ring)
    }

    /// Whether the given ring can be placed on top of the tower.
    pub fn can_accept(&self, ring: &Ring) -> bool {
        match self.top() {
            Some(top) => top.size() > ring.size(),
            None => true,
        }
    }

    /// Place a ring on top of the tower.
    ///
    /// # Errors
    ///
    /// The method returns [`GameError::IllegalPlacement`] if the top ring is not larger than the
    /// given ring. The tower is not modified in that case.
    pub fn place(&mut self, mut ring: Ring) -> Result<(), GameError> {
        if let Some(top) = self.top()
            && top.size() <= ring.size()
        {
            return Err(GameError::IllegalPlacement {
                ring: ring.size(),
                top: top.size(),
            });
        }
        ring.set_tower(self.id);
        self.rings.push(ring);
        Ok(())
    }

    /// Remove and return the top ring.
    ///
    /// # Errors
    ///
    /// The method returns [`StackError::Empty`] if the tower has no ring.
    pub fn take_top(&mut self) -> Result<Ring, StackError> {
        self.rings.try_pop()
    }

    /// Whether the ring sizes strictly decrease from the bottom to the top.
    pub fn is_well_ordered(&self) -> bool {
        self.rings
            .iter()
            .zip(self.rings.iter().skip(1))
            .all(|(below, above)| below.size() > above.size())
    }
}
