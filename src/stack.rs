/*
stack.rs

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

//! Ordered container used to store the rings of a tower.
//!
//! Items are kept in insertion order: the first item is the bottom of the pile and the last
//! item is the top.

use std::fmt;
use std::iter::Rev;
use std::slice::Iter;

use crate::errors::StackError;

/// Stack object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// Items, from the bottom (first) to the top (last).
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty [`Stack`] object.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty [`Stack`] object that can hold `capacity` items without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Add an item at the end (top) of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the last item, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove and return the last item.
    ///
    /// # Errors
    ///
    /// The method returns [`StackError::Empty`] if the stack has no items.
    pub fn try_pop(&mut self) -> Result<T, StackError> {
        self.pop().ok_or(StackError::Empty)
    }

    /// Remove and return the first item, or None if the stack is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Return the item at the given position (0 is the bottom of the stack).
    ///
    /// # Errors
    ///
    /// The method returns [`StackError::IndexOutOfRange`] if `position` is past the end.
    pub fn at(&self, position: usize) -> Result<&T, StackError> {
        self.items.get(position).ok_or(StackError::IndexOutOfRange {
            position,
            len: self.items.len(),
        })
    }

    /// Return the last (top) item.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items from the bottom to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate over the items from the top to the bottom.
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Return the position of the given item (0 is the bottom of the stack).
    ///
    /// # Errors
    ///
    /// The method returns [`StackError::NotFound`] if the item is not in the stack.
    pub fn index_of(&self, item: &T) -> Result<usize, StackError> {
        self.items
            .iter()
            .position(|i| i == item)
            .ok_or(StackError::NotFound)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.items {
            write!(f, "{item}->")?;
        }
        Ok(())
    }
}
