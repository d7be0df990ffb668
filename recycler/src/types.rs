use alloc::vec::Vec;

/// One of the two edges of the rendered window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Earlier items (scrolling backward).
    Top,
    /// Later items (scrolling forward).
    Bottom,
}

/// A page of logical items returned by a [`crate::Loader`].
///
/// With `feature = "serde"`, the wire format is `{chunk, prev_cursor, next_cursor, size}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    pub chunk: Vec<T>,
    /// Logical offset of the first item in `chunk`.
    pub prev_cursor: usize,
    /// `None` when no further forward data exists.
    pub next_cursor: Option<usize>,
    /// Number of items actually returned; must equal `chunk.len()`.
    pub size: usize,
}

impl<T> Page<T> {
    /// Builds a page starting at `start`, deriving `size` and `next_cursor` from the chunk.
    ///
    /// `has_more` decides whether `next_cursor` points past the chunk or is `None`.
    pub fn new(chunk: Vec<T>, start: usize, has_more: bool) -> Self {
        let size = chunk.len();
        Self {
            chunk,
            prev_cursor: start,
            next_cursor: has_more.then_some(start + size),
            size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chunk.is_empty()
    }
}

/// The window of logical indexes currently backed by pool slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub start: usize,
    pub end: usize, // exclusive
    pub prev_cursor: usize,
    pub next_cursor: Option<usize>,
}

impl WindowState {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, logical_order: usize) -> bool {
        logical_order >= self.start && logical_order < self.end
    }
}

/// Container padding standing in for content above/below the rendered window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn total(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Offsets of the two zero-height boundary markers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentinels {
    pub top: f64,
    pub bottom: f64,
}

impl Sentinels {
    pub fn offset(&self, boundary: Boundary) -> f64 {
        match boundary {
            Boundary::Top => self.top,
            Boundary::Bottom => self.bottom,
        }
    }
}

/// Stable index of a slot in the pool arena.
///
/// Ids never change once a slot is materialized, so hosts can key their own element tables by
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a pending fetch is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Boundary(Boundary),
}

/// A fetch issued by [`crate::VirtualList`] and not yet committed.
///
/// Hand it back to `commit` with the loaded page, or to `abort` if the load failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub(crate) ticket: u64,
    pub kind: FetchKind,
    pub start: usize,
    pub limit: usize,
}

/// A host-visible change produced by a commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// A new slot was materialized; the host attaches its element.
    Mount(SlotId),
    /// A slot's data, offset or visibility changed.
    Place {
        slot: SlotId,
        translate_y: f64,
        visible: bool,
    },
    Padding(Padding),
    Sentinels(Sentinels),
    /// Content above the viewport grew by this many pixels; the host scrolls by the same amount
    /// to keep the visible rows in place.
    ScrollBy(f64),
    Cursors {
        prev_cursor: usize,
        next_cursor: Option<usize>,
    },
    /// The initial layout is committed.
    Initialized,
}

/// Result of handing a page to [`crate::VirtualList::commit`].
#[derive(Clone, Debug, PartialEq)]
pub enum Commit {
    /// The page was applied; effects are listed in application order.
    Applied(Vec<Effect>),
    /// No fetch was issued (terminal boundary, fetch already in flight, or not ready).
    Skipped,
    /// The window moved while the fetch was in flight; the page was dropped.
    Stale,
    /// The list was destroyed while the fetch was in flight; the page was dropped.
    Discarded,
}

impl Commit {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            Self::Applied(effects) => effects,
            _ => &[],
        }
    }

    pub fn into_effects(self) -> Vec<Effect> {
        match self {
            Self::Applied(effects) => effects,
            _ => Vec::new(),
        }
    }
}
