//! Last-in/first-out collection

use serde::{Deserialize, Serialize};

/// LIFO stack backed by a `Vec`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the stack holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push an item onto the top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Top item without removing it, `None` when empty
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Remove and return the top item, `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}
