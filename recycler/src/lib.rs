//! A headless windowed list engine for bidirectionally paged data.
//!
//! Only a bounded window of a logically unbounded sequence is materialized. The list keeps a
//! fixed pool of `2 * page_size` reusable slots and, as either edge of the window comes into
//! view, fetches one page and reassigns the slots that scrolled out on the other side. Container
//! padding and two boundary sentinels are re-derived after every move so the scrollbar and the
//! visible rows never jump.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a [`Loader`] that fetches `(start, limit)` pages
//! - an [`ItemRenderer`] that renders, updates and measures the elements backing slots
//! - boundary notifications (when a sentinel intersects the viewport)
//!
//! and to apply the returned [`Effect`]s (slot offsets, padding, sentinel offsets, scroll
//! compensation) to its own view tree.
//!
//! For sentinel event channels, persistence stores and grid loading, see the `recycler-adapter`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod list;
mod loader;
mod options;
mod pool;
mod recycle;
mod render;
mod state;
mod sync;
mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, LoadError};
pub use list::VirtualList;
pub use loader::Loader;
pub use options::{AfterInitCallback, ListOptions};
pub use pool::SlotView;
pub use render::ItemRenderer;
pub use state::ListSnapshot;
pub use types::{
    Boundary, Commit, Effect, FetchKind, FetchRequest, Padding, Page, Sentinels, SlotId,
    WindowState,
};
