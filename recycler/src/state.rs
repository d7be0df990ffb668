use crate::{Padding, Sentinels, WindowState};

/// A lightweight, serializable snapshot of the list geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Element contents are not part of the snapshot; it is meant for diagnostics and for hosts that
/// persist where the window was alongside their own scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListSnapshot {
    pub window: WindowState,
    pub padding: Padding,
    pub sentinels: Sentinels,
    pub pool_len: usize,
    /// Distance from the top of the first slot to the bottom of the last one.
    pub rendered_height: f64,
}

impl ListSnapshot {
    /// Total height the container reports: padding plus the rendered window.
    pub fn virtual_height(&self) -> f64 {
        self.padding.top + self.rendered_height + self.padding.bottom
    }
}
