// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage with allocation, ordering, and neighbor
//! links.

use alloc::vec::Vec;

use crate::element::ElementId;
use crate::error::Error;
use crate::grid::Position;

use super::id::{INVALID, LayerId};
use super::traverse::{Descend, Iter};

/// Struct-of-arrays storage for an ordered stack of layers.
///
/// Layers are addressed by [`LayerId`] handles. Each layer occupies a slot in
/// parallel arrays; `order` lists the occupied slots from bottom to top.
/// Removed layers are recycled via a free list, and generation counters
/// prevent stale handle access.
///
/// The `below`/`above` links and each slot's position in `order` are
/// recomputed from `order` after every append, swap, and removal. That relink
/// is O(n) per mutation.
#[derive(Debug, Default)]
pub struct LayerStack {
    // -- Per-layer properties --
    pub(crate) element: Vec<ElementId>,
    pub(crate) position: Vec<Position>,

    // -- Neighbor links (derived from `order`) --
    pub(crate) below: Vec<u32>,
    pub(crate) above: Vec<u32>,
    pub(crate) order_index: Vec<u32>,

    // -- Ordering, bottom to top --
    pub(crate) order: Vec<u32>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
}

impl LayerStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of layers in the stack.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the stack holds no layers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // -- Mutation API --

    /// Places a new layer showing `element` at `position` on top of the
    /// stack and returns its handle.
    pub fn append_top(&mut self, element: ElementId, position: Position) -> LayerId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot; its generation was bumped on removal.
            self.element[idx as usize] = element;
            self.position[idx as usize] = position;
            idx
        } else {
            let idx = u32::try_from(self.element.len()).unwrap_or(INVALID);
            assert!(idx != INVALID, "layer slot count exceeds u32 range");
            self.element.push(element);
            self.position.push(position);
            self.below.push(INVALID);
            self.above.push(INVALID);
            self.order_index.push(INVALID);
            self.generation.push(0);
            idx
        };

        self.order.push(idx);
        self.relink();

        let id = self.handle(idx);
        log::debug!(
            "appended {id:?} ({element:?} at {position:?}), {} layers",
            self.order.len()
        );
        id
    }

    /// Exchanges `layer` with the layer immediately below it.
    ///
    /// Fails with [`Error::AlreadyAtBottom`] if `layer` is the bottom-most
    /// layer, and with [`Error::LayerNotFound`] if the handle is stale. The
    /// stack is unchanged on failure.
    pub fn swap_with_below(&mut self, layer: LayerId) -> Result<(), Error> {
        let at = self.index_of(layer)?;
        if at == 0 {
            return Err(Error::AlreadyAtBottom(layer));
        }
        self.order.swap(at - 1, at);
        self.relink();
        log::debug!("moved {layer:?} from index {at} to {}", at - 1);
        Ok(())
    }

    /// Returns the position of `layer` in bottom-to-top order.
    pub fn index_of(&self, layer: LayerId) -> Result<usize, Error> {
        self.check(layer)?;
        Ok(self.order_index[layer.idx as usize] as usize)
    }

    /// Removes `layer` from the stack, freeing its slot for reuse.
    ///
    /// The handle (and any copy of it) becomes stale.
    pub fn remove(&mut self, layer: LayerId) -> Result<(), Error> {
        let at = self.index_of(layer)?;
        let idx = layer.idx;
        self.order.remove(at);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.below[idx as usize] = INVALID;
        self.above[idx as usize] = INVALID;
        self.order_index[idx as usize] = INVALID;
        self.free_list.push(idx);

        self.relink();
        log::debug!("removed {layer:?}, {} layers", self.order.len());
        Ok(())
    }

    // -- Queries --

    /// Returns whether the given handle refers to a live layer.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        self.check(id).is_ok()
    }

    /// Returns the bottom-most layer, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<LayerId> {
        self.order.first().map(|&idx| self.handle(idx))
    }

    /// Returns the top-most layer, if any.
    #[must_use]
    pub fn top(&self) -> Option<LayerId> {
        self.order.last().map(|&idx| self.handle(idx))
    }

    /// Returns the layer directly below `id`, or `None` for the bottom.
    #[must_use]
    pub fn below(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        self.link(self.below[id.idx as usize])
    }

    /// Returns the layer directly above `id`, or `None` for the top.
    #[must_use]
    pub fn above(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        self.link(self.above[id.idx as usize])
    }

    /// Returns the element a layer shows.
    #[must_use]
    pub fn element(&self, id: LayerId) -> ElementId {
        self.validate(id);
        self.element[id.idx as usize]
    }

    /// Returns the placement of a layer.
    #[must_use]
    pub fn position(&self, id: LayerId) -> Position {
        self.validate(id);
        self.position[id.idx as usize]
    }

    /// Returns an iterator over all layers from bottom to top.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns an iterator from `id` down to the bottom, following `below`
    /// links. `id` itself comes first.
    #[must_use]
    pub fn descend(&self, id: LayerId) -> Descend<'_> {
        self.validate(id);
        Descend::new(self, id.idx)
    }

    // -- Internal helpers --

    pub(crate) fn handle(&self, idx: u32) -> LayerId {
        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    fn link(&self, idx: u32) -> Option<LayerId> {
        (idx != INVALID).then(|| self.handle(idx))
    }

    /// Returns `LayerNotFound` if the handle is stale.
    fn check(&self, id: LayerId) -> Result<(), Error> {
        let live = (id.idx as usize) < self.generation.len()
            && self.generation[id.idx as usize] == id.generation
            && self.order_index[id.idx as usize] != INVALID;
        if live {
            Ok(())
        } else {
            Err(Error::LayerNotFound(id))
        }
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: LayerId) {
        assert!(
            self.check(id).is_ok(),
            "stale LayerId: {id:?} (current gen: {})",
            self.generation
                .get(id.idx as usize)
                .copied()
                .unwrap_or(u32::MAX)
        );
    }

    /// Recomputes every live layer's neighbor links and order index from
    /// `order`.
    fn relink(&mut self) {
        for (pos, i) in (0_u32..).zip(0..self.order.len()) {
            let slot = self.order[i] as usize;
            self.below[slot] = if i > 0 { self.order[i - 1] } else { INVALID };
            self.above[slot] = self.order.get(i + 1).copied().unwrap_or(INVALID);
            self.order_index[slot] = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    const E0: ElementId = ElementId(0);
    const E1: ElementId = ElementId(1);

    fn stack_of(n: usize) -> (LayerStack, Vec<LayerId>) {
        let mut stack = LayerStack::new();
        let ids = (0..n)
            .map(|i| stack.append_top(E0, Position::new(0, i32::try_from(i).unwrap())))
            .collect();
        (stack, ids)
    }

    /// Checks the neighbor-link invariants against the bottom-to-top order.
    fn assert_linked(stack: &LayerStack, expected: &[LayerId]) {
        assert_eq!(stack.iter().collect::<Vec<_>>(), expected, "order");
        assert_eq!(stack.bottom(), expected.first().copied(), "bottom");
        assert_eq!(stack.top(), expected.last().copied(), "top");
        for (i, &id) in expected.iter().enumerate() {
            let below = i.checked_sub(1).map(|b| expected[b]);
            let above = expected.get(i + 1).copied();
            assert_eq!(stack.below(id), below, "below of {id:?}");
            assert_eq!(stack.above(id), above, "above of {id:?}");
            assert_eq!(stack.index_of(id).unwrap(), i, "index of {id:?}");
        }
        let bottoms = expected.iter().filter(|&&id| stack.below(id).is_none());
        assert_eq!(bottoms.count(), usize::from(!expected.is_empty()), "one bottom");
        let tops = expected.iter().filter(|&&id| stack.above(id).is_none());
        assert_eq!(tops.count(), usize::from(!expected.is_empty()), "one top");
    }

    #[test]
    fn append_links_new_layer_on_top() {
        let mut stack = LayerStack::new();
        let a = stack.append_top(E0, Position::ORIGIN);
        assert_linked(&stack, &[a]);

        let b = stack.append_top(E1, Position::new(2, 3));
        assert_linked(&stack, &[a, b]);
        assert_eq!(stack.element(b), E1);
        assert_eq!(stack.position(b), Position::new(2, 3));
    }

    #[test]
    fn following_above_visits_every_layer_once() {
        let (stack, ids) = stack_of(6);
        let mut seen = Vec::new();
        let mut cur = stack.bottom();
        while let Some(id) = cur {
            seen.push(id);
            cur = stack.above(id);
        }
        assert_eq!(seen, ids);
    }

    #[test]
    fn swap_with_below_exchanges_neighbors() {
        let (mut stack, ids) = stack_of(3);
        let [a, b, c] = [ids[0], ids[1], ids[2]];
        stack.swap_with_below(c).unwrap();
        assert_linked(&stack, &[a, c, b]);
        stack.swap_with_below(c).unwrap();
        assert_linked(&stack, &[c, a, b]);
    }

    #[test]
    fn swap_is_undone_by_swapping_the_new_upper_neighbor() {
        let (mut stack, ids) = stack_of(4);
        for at in 1..ids.len() {
            let layer = ids[at];
            stack.swap_with_below(layer).unwrap();
            let upper = stack.above(layer).unwrap();
            stack.swap_with_below(upper).unwrap();
            assert_linked(&stack, &ids);
        }
    }

    #[test]
    fn swap_bottom_reports_already_at_bottom() {
        let (mut stack, ids) = stack_of(3);
        let err = stack.swap_with_below(ids[0]).unwrap_err();
        assert!(matches!(err, Error::AlreadyAtBottom(id) if id == ids[0]));
        assert_linked(&stack, &ids);
    }

    #[test]
    fn swap_single_layer_reports_already_at_bottom() {
        let (mut stack, ids) = stack_of(1);
        assert!(matches!(
            stack.swap_with_below(ids[0]),
            Err(Error::AlreadyAtBottom(_))
        ));
    }

    #[test]
    fn descend_walks_down_from_any_layer() {
        let (stack, ids) = stack_of(4);
        let down: Vec<_> = stack.descend(ids[2]).collect();
        assert_eq!(down, vec![ids[2], ids[1], ids[0]]);
        assert_eq!(stack.descend(ids[0]).count(), 1);
    }

    #[test]
    fn remove_relinks_and_stales_handle() {
        let (mut stack, ids) = stack_of(3);
        stack.remove(ids[1]).unwrap();
        assert_linked(&stack, &[ids[0], ids[2]]);
        assert!(!stack.is_alive(ids[1]));
        assert!(matches!(
            stack.index_of(ids[1]),
            Err(Error::LayerNotFound(id)) if id == ids[1]
        ));
        assert!(matches!(
            stack.swap_with_below(ids[1]),
            Err(Error::LayerNotFound(_))
        ));
        assert!(matches!(stack.remove(ids[1]), Err(Error::LayerNotFound(_))));
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut stack = LayerStack::new();
        let id1 = stack.append_top(E0, Position::ORIGIN);
        stack.remove(id1).unwrap();
        let id2 = stack.append_top(E1, Position::ORIGIN);
        // id2 reuses the same slot but has a different generation.
        assert!(!stack.is_alive(id1));
        assert!(stack.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
        assert_eq!(stack.element(id2), E1);
    }

    #[test]
    fn unknown_handle_is_not_found() {
        let (stack, _) = stack_of(2);
        let foreign = LayerId {
            idx: 7,
            generation: 0,
        };
        assert!(matches!(
            stack.index_of(foreign),
            Err(Error::LayerNotFound(_))
        ));
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn removed_handle_panics_on_below() {
        let (mut stack, ids) = stack_of(2);
        stack.remove(ids[1]).unwrap();
        let _ = stack.below(ids[1]);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn removed_handle_panics_on_position() {
        let (mut stack, ids) = stack_of(1);
        stack.remove(ids[0]).unwrap();
        let _ = stack.position(ids[0]);
    }
}
