/*
ring.rs

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

//! Ring (the movable disk).

use std::cmp::Ordering;
use std::fmt;

use crate::tower::TowerId;

/// Ring object.
///
/// Rings are identified by their size: in a game with N rings, the sizes go from 1 (the
/// smallest ring) to N (the largest ring) and no two rings share the same size.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    /// Ring size.
    size: usize,

    /// Tower that currently holds the ring.
    /// The tower's stack is the source of truth; this is only a back reference.
    tower: TowerId,
}

impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}

impl Eq for Ring {}

impl PartialOrd for Ring {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ring {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size.cmp(&other.size)
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.size)
    }
}

impl Ring {
    /// Create a [`Ring`] object held by the given tower.
    pub fn new(size: usize, tower: TowerId) -> Self {
        Self { size, tower }
    }

    /// Return the ring size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the tower that holds the ring.
    pub fn tower(&self) -> TowerId {
        self.tower
    }

    /// Update the back reference to the holding tower.
    pub(crate) fn set_tower(&mut self, tower: TowerId) {
        self.tower = tower;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_compare_by_size_only() {
        let a = Ring::new(2, TowerId::Left);
        let b = Ring::new(2, TowerId::Right);
        let c = Ring::new(3, TowerId::Left);

        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(a.tower(), TowerId::Left);
        assert_eq!(b.tower(), TowerId::Right);
    }
}
