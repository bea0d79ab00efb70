use std::collections::VecDeque;

use crate::producible::Producible;

/// Source over an owned, ordered buffer. Every eager combinator re-wraps its
/// materialized output in one of these.
#[derive(Debug, Clone)]
pub struct ArraySource<T> {
    pending: VecDeque<T>,
    cursor: usize,
}

impl<T> ArraySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        ArraySource {
            pending: VecDeque::from(items),
            cursor: 0,
        }
    }

    /// Number of elements pulled so far. Never decreases.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of elements the source was built with.
    pub fn len(&self) -> usize {
        self.cursor + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl<T> Producible for ArraySource<T> {
    type Item = T;

    fn pull_next(&mut self) -> Option<T> {
        let item = self.pending.pop_front()?;
        self.cursor += 1;
        Some(item)
    }
}

impl<T> From<Vec<T>> for ArraySource<T> {
    fn from(items: Vec<T>) -> Self {
        ArraySource::new(items)
    }
}

/// Source over a borrowed slice, yielding references into it.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a, T> {
    data: &'a [T],
    cursor: usize,
}

impl<'a, T> SliceSource<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceSource { data, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a, T> Producible for SliceSource<'a, T> {
    type Item = &'a T;

    fn pull_next(&mut self) -> Option<&'a T> {
        let item = self.data.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}
