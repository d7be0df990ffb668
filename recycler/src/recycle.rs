use alloc::vec::Vec;

use crate::pool::{Pool, gap_after};
use crate::{Effect, Error, ItemRenderer};

impl<E> Pool<E> {
    /// Reassigns the first `shift` slots to the items after the current tail.
    ///
    /// Slot `i` takes logical order `first_order + i` and `chunk[i]`. When the chunk runs out, the
    /// remaining slots are hidden but still chained after the running tail, so offsets stay
    /// monotonic in logical order.
    pub(crate) fn recycle_down<T, R>(
        &mut self,
        renderer: &mut R,
        chunk: &[T],
        shift: usize,
        first_order: usize,
        margin: f64,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Error>
    where
        R: ItemRenderer<T, Element = E>,
    {
        let mut next_y = self
            .last()
            .map(|tail| tail.next_offset(margin))
            .ok_or(Error::EmptyPool)?;
        let shift = shift.min(self.len());

        for i in 0..shift {
            let id = self.order()[i];
            let item = chunk.get(i);
            let slot = self.slot_mut(id)?;
            slot.logical_order = first_order + i;
            renderer.update(&mut slot.element, item);
            slot.visible = item.is_some();
            slot.height = if slot.visible {
                renderer.height(&slot.element)
            } else {
                0.0
            };
            slot.translate_y = next_y;
            next_y = slot.next_offset(margin);
            effects.push(slot.place_effect(id));
        }

        self.sort();
        Ok(())
    }

    /// Reassigns the last `shift` slots to the items right above the current head.
    ///
    /// Walks bottom-up so every offset is derived from the slot below it, which has already been
    /// placed. Slot `j` (counted from the start of the recycled range) takes logical order
    /// `first_order + j` and `chunk[j]`; missing items hide their slot with zero height.
    pub(crate) fn recycle_up<T, R>(
        &mut self,
        renderer: &mut R,
        chunk: &[T],
        shift: usize,
        first_order: usize,
        margin: f64,
        effects: &mut Vec<Effect>,
    ) -> Result<(), Error>
    where
        R: ItemRenderer<T, Element = E>,
    {
        let mut lead_y = self
            .first()
            .map(|head| head.translate_y)
            .ok_or(Error::EmptyPool)?;
        let len = self.len();
        let shift = shift.min(len);
        let base = len - shift;

        for j in (0..shift).rev() {
            let id = self.order()[base + j];
            let item = chunk.get(j);
            let slot = self.slot_mut(id)?;
            slot.logical_order = first_order + j;
            renderer.update(&mut slot.element, item);
            slot.visible = item.is_some();
            slot.height = if slot.visible {
                renderer.height(&slot.element)
            } else {
                0.0
            };
            slot.translate_y = lead_y - gap_after(slot.height, margin) - slot.height;
            lead_y = slot.translate_y;
            effects.push(slot.place_effect(id));
        }

        self.sort();
        Ok(())
    }
}
