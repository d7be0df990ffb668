use alloc::sync::Arc;

use crate::Error;

/// A callback fired once the initial layout has been committed.
///
/// Hosts typically use it to restore a persisted scroll position.
pub type AfterInitCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::VirtualList`].
///
/// Built once, validated by `VirtualList::new`/`initialize`, and never changed afterwards. The
/// callback is stored in an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct ListOptions {
    /// Number of items fetched per boundary crossing. The pool holds twice this many slots.
    pub page_size: usize,
    /// Vertical space between two rendered items, in pixels.
    pub item_margin: f64,
    /// Logical offset to resume at. The initial fetch is centered on it so scrolling can start in
    /// either direction.
    pub start_page: Option<usize>,
    pub after_init: Option<AfterInitCallback>,
}

impl ListOptions {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            item_margin: 0.0,
            start_page: None,
            after_init: None,
        }
    }

    pub fn with_item_margin(mut self, item_margin: f64) -> Self {
        self.item_margin = item_margin;
        self
    }

    pub fn with_start_page(mut self, start_page: Option<usize>) -> Self {
        self.start_page = start_page;
        self
    }

    pub fn with_after_init(mut self, after_init: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.after_init = after_init.map(|f| Arc::new(f) as _);
        self
    }

    /// Number of slots in a fully grown pool.
    pub fn capacity(&self) -> usize {
        self.page_size.saturating_mul(2)
    }

    /// The `(start, limit)` of the first fetch.
    pub fn initial_range(&self) -> (usize, usize) {
        match self.start_page {
            Some(page) => {
                let start = page.saturating_sub(self.page_size);
                let end = page.saturating_add(self.page_size);
                (start, end - start)
            }
            None => (0, self.page_size),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.page_size == 0 {
            return Err(Error::InvalidOptions("page_size must be positive"));
        }
        if !self.item_margin.is_finite() || self.item_margin < 0.0 {
            return Err(Error::InvalidOptions(
                "item_margin must be a finite, non-negative number of pixels",
            ));
        }
        Ok(())
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("page_size", &self.page_size)
            .field("item_margin", &self.item_margin)
            .field("start_page", &self.start_page)
            .field("after_init", &self.after_init.as_ref().map(|_| ".."))
            .finish()
    }
}
