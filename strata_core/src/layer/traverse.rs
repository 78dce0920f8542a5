// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack traversal utilities.

use super::id::{INVALID, LayerId};
use super::store::LayerStack;

/// An iterator that follows `below` links from a starting layer down to the
/// bottom of the stack.
///
/// The starting layer is yielded first. Created by
/// [`LayerStack::descend`].
#[derive(Debug)]
pub struct Descend<'a> {
    stack: &'a LayerStack,
    current: u32,
}

impl<'a> Descend<'a> {
    pub(crate) fn new(stack: &'a LayerStack, start: u32) -> Self {
        Self {
            stack,
            current: start,
        }
    }
}

impl Iterator for Descend<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.stack.below[idx as usize];
        Some(self.stack.handle(idx))
    }
}

/// An iterator over every layer, bottom to top.
///
/// Created by [`LayerStack::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: &'a LayerStack,
    inner: core::slice::Iter<'a, u32>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(stack: &'a LayerStack) -> Self {
        Self {
            stack,
            inner: stack.order.iter(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        self.inner.next().map(|&idx| self.stack.handle(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<LayerId> {
        self.inner.next_back().map(|&idx| self.stack.handle(idx))
    }
}

impl ExactSizeIterator for Iter<'_> {}
