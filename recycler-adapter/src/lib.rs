//! Host-side wiring for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on the window, pool and padding math. This
//! crate provides the small, framework-neutral pieces a host needs around it:
//!
//! - A boundary channel that turns sentinel intersection reports into list updates
//! - Scroll-position and query-parameter stores for resuming where the user left off
//! - A grid loader that pages rows of `columns` items, with width breakpoints
//! - A [`Controller`] tying all of the above to a [`recycler::VirtualList`]
//!
//! This crate is intentionally framework-agnostic (no DOM or GUI toolkit bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod grid;
mod observer;
mod store;


pub use controller::{Controller, Mounted, Pumped};
pub use grid::{Breakpoints, GridLoader};
pub use observer::{
    BoundaryEvent, BoundaryReceiver, BoundarySender, DEFAULT_THRESHOLD, boundary_channel,
};
pub use store::{
    MemoryQueryParams, MemoryScrollStore, PAGE_PARAM, QueryParamStore, ScrollPositionStore,
};
