use crate::SlotId;

/// Errors raised by the list itself.
///
/// Apart from `InvalidOptions`, every variant is a broken contract between the list and one of
/// its collaborators. They are fatal: the list refuses the operation rather than guess.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),

    #[error("renderer produced no root element for logical order {logical_order}")]
    MissingRoot { logical_order: usize },

    #[error("loader returned {len} items for a request limited to {limit}")]
    ChunkOverflow { len: usize, limit: usize },

    #[error("page reports size {size} but carries {len} items")]
    SizeMismatch { size: usize, len: usize },

    #[error("pool has no slots to position")]
    EmptyPool,

    #[error("slot {0:?} is not part of the pool")]
    UnknownSlot(SlotId),

    #[error("fetch ticket {ticket} does not match any in-flight request")]
    UnknownFetch { ticket: u64 },
}

/// Error returned by the async entry points, which also drive the loader.
#[derive(Debug, thiserror::Error)]
pub enum LoadError<E> {
    /// The loader rejected the fetch. The list is unchanged and the boundary can fire again.
    #[error("loader failed: {0}")]
    Loader(E),

    #[error(transparent)]
    List(#[from] Error),
}

impl<E> LoadError<E> {
    pub fn loader_error(&self) -> Option<&E> {
        match self {
            Self::Loader(e) => Some(e),
            Self::List(_) => None,
        }
    }
}
