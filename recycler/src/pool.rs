use alloc::vec::Vec;
use core::ops::Range;

use crate::{Effect, Error, ItemRenderer, SlotId};

/// Space left after a slot. Zero-height slots (hidden placeholders, empty rows) take no gap, so
/// an empty pool never opens with a double margin.
pub(crate) fn gap_after(height: f64, margin: f64) -> f64 {
    if height > 0.0 { margin } else { 0.0 }
}

#[derive(Clone, Debug)]
pub(crate) struct Slot<E> {
    pub(crate) element: E,
    pub(crate) logical_order: usize,
    pub(crate) translate_y: f64,
    pub(crate) height: f64,
    pub(crate) visible: bool,
}

impl<E> Slot<E> {
    /// Offset at which the slot right below this one starts.
    pub(crate) fn next_offset(&self, margin: f64) -> f64 {
        self.translate_y + self.height + gap_after(self.height, margin)
    }

    pub(crate) fn place_effect(&self, id: SlotId) -> Effect {
        Effect::Place {
            slot: id,
            translate_y: self.translate_y,
            visible: self.visible,
        }
    }
}

/// A read-only view of one pool slot.
#[derive(Debug)]
pub struct SlotView<'a, E> {
    pub id: SlotId,
    pub logical_order: usize,
    /// Vertical offset from the top of the container, in pixels.
    pub translate_y: f64,
    /// Rendered height; `0.0` for hidden slots.
    pub height: f64,
    pub visible: bool,
    pub element: &'a E,
}

impl<E> Clone for SlotView<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SlotView<'_, E> {}

impl<E> SlotView<'_, E> {
    pub fn bottom(&self) -> f64 {
        self.translate_y + self.height
    }
}

/// The slot arena.
///
/// `slots` is indexed by [`SlotId`] and never reordered; `order` lists the same ids sorted by
/// logical order, so `order[0]` is always the topmost slot.
#[derive(Clone, Debug)]
pub(crate) struct Pool<E> {
    slots: Vec<Slot<E>>,
    order: Vec<SlotId>,
    capacity: usize,
}

impl<E> Pool<E> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub(crate) fn order(&self) -> &[SlotId] {
        &self.order
    }

    pub(crate) fn get(&self, id: SlotId) -> Option<&Slot<E>> {
        self.slots.get(id.0)
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> Result<&mut Slot<E>, Error> {
        self.slots.get_mut(id.0).ok_or(Error::UnknownSlot(id))
    }

    pub(crate) fn first(&self) -> Option<&Slot<E>> {
        self.order.first().and_then(|&id| self.get(id))
    }

    pub(crate) fn last(&self) -> Option<&Slot<E>> {
        self.order.last().and_then(|&id| self.get(id))
    }

    pub(crate) fn view(&self, id: SlotId) -> Option<SlotView<'_, E>> {
        let slot = self.get(id)?;
        Some(SlotView {
            id,
            logical_order: slot.logical_order,
            translate_y: slot.translate_y,
            height: slot.height,
            visible: slot.visible,
            element: &slot.element,
        })
    }

    pub(crate) fn views(&self) -> impl Iterator<Item = SlotView<'_, E>> + '_ {
        self.order.iter().filter_map(|&id| self.view(id))
    }

    pub(crate) fn place_effects(&self, effects: &mut Vec<Effect>) {
        for &id in &self.order {
            if let Some(slot) = self.get(id) {
                effects.push(slot.place_effect(id));
            }
        }
    }

    /// Re-establishes ascending logical order after slots were reassigned.
    pub(crate) fn sort(&mut self) {
        let slots = &self.slots;
        self.order
            .sort_unstable_by_key(|id| slots.get(id.0).map_or(usize::MAX, |s| s.logical_order));
    }

    /// Moves every slot down by `delta` pixels.
    pub(crate) fn shift_all(&mut self, delta: f64) {
        for slot in &mut self.slots {
            slot.translate_y += delta;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    /// Materializes one slot per logical order in `orders`.
    ///
    /// Items missing from `chunk` become hidden placeholders. Offsets chain after the current
    /// tail, or from `seed` when the pool is empty. Nothing is attached unless every element
    /// renders.
    pub(crate) fn grow<T, R>(
        &mut self,
        renderer: &mut R,
        chunk: &[T],
        orders: Range<usize>,
        seed: f64,
        margin: f64,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Error>
    where
        R: ItemRenderer<T, Element = E>,
    {
        let mut next_y = self.last().map_or(seed, |tail| tail.next_offset(margin));
        let mut fresh = Vec::with_capacity(orders.len());
        for (i, logical_order) in orders.enumerate() {
            let item = chunk.get(i);
            let element = renderer
                .render(item)
                .ok_or(Error::MissingRoot { logical_order })?;
            let visible = item.is_some();
            let height = if visible { renderer.height(&element) } else { 0.0 };
            let slot = Slot {
                element,
                logical_order,
                translate_y: next_y,
                height,
                visible,
            };
            next_y = slot.next_offset(margin);
            fresh.push(slot);
        }

        for slot in fresh {
            let id = SlotId(self.slots.len());
            effects.push(Effect::Mount(id));
            effects.push(slot.place_effect(id));
            self.slots.push(slot);
            self.order.push(id);
        }
        self.sort();
        Ok(())
    }
}
