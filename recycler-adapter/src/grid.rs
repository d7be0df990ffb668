use core::future::Future;

use recycler::{Loader, Page};

/// Adapts an item loader to a row loader, `columns` items per row.
///
/// The list then pages, recycles and measures whole rows. Offsets and cursors are converted at
/// the boundary: row `r` starts at item `r * columns`.
#[derive(Clone, Debug)]
pub struct GridLoader<L> {
    inner: L,
    columns: usize,
}

impl<L> GridLoader<L> {
    /// `columns` is clamped to at least 1.
    pub fn new(inner: L, columns: usize) -> Self {
        Self {
            inner,
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<T, L: Loader<T>> Loader<Vec<T>> for GridLoader<L> {
    type Error = L::Error;

    fn load(
        &self,
        start: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Page<Vec<T>>, Self::Error>> {
        let columns = self.columns;
        let items = self
            .inner
            .load(start.saturating_mul(columns), limit.saturating_mul(columns));
        async move { items.await.map(|page| into_rows(page, columns)) }
    }
}

/// Splits an item page into rows. Only the last row may be short.
fn into_rows<T>(page: Page<T>, columns: usize) -> Page<Vec<T>> {
    let mut rows: Vec<Vec<T>> = Vec::with_capacity(page.chunk.len().div_ceil(columns));
    let mut items = page.chunk.into_iter().peekable();
    while items.peek().is_some() {
        rows.push(items.by_ref().take(columns).collect());
    }

    let size = rows.len();
    Page {
        chunk: rows,
        prev_cursor: page.prev_cursor / columns,
        // A partial row is still a row; round up so it is not fetched again.
        next_cursor: page.next_cursor.map(|c| c.div_ceil(columns)),
        size,
    }
}

/// Viewport width breakpoints deciding how many columns a grid row holds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// `(min_width, columns)`, widest first.
    steps: Vec<(f64, usize)>,
    fallback: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(2).with_step(640.0, 3).with_step(1024.0, 4)
    }
}

impl Breakpoints {
    /// A table with no steps; every width gets `fallback` columns.
    pub fn new(fallback: usize) -> Self {
        Self {
            steps: Vec::new(),
            fallback: fallback.max(1),
        }
    }

    /// Widths of at least `min_width` get `columns` columns, unless a wider step applies.
    pub fn with_step(mut self, min_width: f64, columns: usize) -> Self {
        let at = self
            .steps
            .iter()
            .position(|&(w, _)| w < min_width)
            .unwrap_or(self.steps.len());
        self.steps.insert(at, (min_width, columns.max(1)));
        self
    }

    pub fn columns_for(&self, width: f64) -> usize {
        self.steps
            .iter()
            .find(|&&(min_width, _)| width >= min_width)
            .map_or(self.fallback, |&(_, columns)| columns)
    }
}
