// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-keyed element storage.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::element::{Element, ElementId};
use crate::error::Error;

/// Owns every element of an editing session and maps names to handles.
///
/// Names are unique. Elements are never removed, so every [`ElementId`]
/// handed out stays valid.
#[derive(Debug, Default)]
pub struct Registry {
    names: BTreeMap<String, ElementId>,
    elements: Vec<Element>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if an element named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Fails with [`Error::DuplicateName`] if `name` is taken.
    pub fn ensure_vacant(&self, name: &str) -> Result<(), Error> {
        if self.contains(name) {
            Err(Error::DuplicateName(name.into()))
        } else {
            Ok(())
        }
    }

    /// Registers `element` under its own name.
    ///
    /// Fails with [`Error::DuplicateName`] if the name is taken; the existing
    /// element is left untouched.
    pub fn insert(&mut self, element: Element) -> Result<ElementId, Error> {
        self.ensure_vacant(element.name())?;
        let id = ElementId(u32::try_from(self.elements.len()).unwrap_or(u32::MAX));
        assert!(id.0 != u32::MAX, "element count exceeds u32 range");
        self.names.insert(element.name().into(), id);
        self.elements.push(element);
        Ok(id)
    }

    /// Returns the handle of the element named `name`.
    pub fn id_of(&self, name: &str) -> Result<ElementId, Error> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownElement(name.into()))
    }

    /// Returns the element for a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different registry and is out of range.
    #[must_use]
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0 as usize]
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0 as usize]
    }

    /// Borrows `dst` mutably and `src` shared at the same time.
    ///
    /// Returns `None` when both handles name the same element.
    pub(crate) fn split_mut(
        &mut self,
        dst: ElementId,
        src: ElementId,
    ) -> Option<(&mut Element, &Element)> {
        let (d, s) = (dst.0 as usize, src.0 as usize);
        if d < s {
            let (lo, hi) = self.elements.split_at_mut(s);
            Some((&mut lo[d], &hi[0]))
        } else if s < d {
            let (lo, hi) = self.elements.split_at_mut(d);
            Some((&mut hi[0], &lo[s]))
        } else {
            None
        }
    }

    /// Returns the element named `name`, if any.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Element> {
        self.names.get(name).map(|&id| self.get(id))
    }

    /// Returns an iterator over all elements in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> + '_ {
        (0_u32..)
            .zip(&self.elements)
            .map(|(idx, element)| (ElementId(idx), element))
    }
}
