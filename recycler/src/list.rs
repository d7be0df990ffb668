use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::pool::{Pool, SlotView};
use crate::sync;
use crate::{
    Boundary, Commit, Effect, Error, FetchKind, FetchRequest, ItemRenderer, ListOptions,
    ListSnapshot, LoadError, Loader, Padding, Page, Sentinels, SlotId, WindowState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Built, waiting for the first page.
    Pending,
    Ready,
    Destroyed,
}

#[derive(Clone, Copy, Debug, Default)]
struct InFlight {
    initial: Option<u64>,
    top: Option<u64>,
    bottom: Option<u64>,
}

impl InFlight {
    fn get(&self, kind: FetchKind) -> Option<u64> {
        match kind {
            FetchKind::Initial => self.initial,
            FetchKind::Boundary(Boundary::Top) => self.top,
            FetchKind::Boundary(Boundary::Bottom) => self.bottom,
        }
    }

    fn guard(&mut self, kind: FetchKind) -> &mut Option<u64> {
        match kind {
            FetchKind::Initial => &mut self.initial,
            FetchKind::Boundary(Boundary::Top) => &mut self.top,
            FetchKind::Boundary(Boundary::Bottom) => &mut self.bottom,
        }
    }
}

/// A windowed list over a paged data source.
///
/// The list keeps a pool of at most `2 * page_size` slots. Boundary crossings fetch one page
/// and either grow the pool (until it is full) or recycle the slots that scrolled out of view on
/// the opposite side. Every commit re-derives container padding and sentinel offsets so the
/// scrollbar never jumps.
///
/// Fetching is split in two so hosts can keep both directions in flight at once:
/// - `request`/`request_initial` hand out a [`FetchRequest`] and arm the per-direction guard;
/// - `commit` applies the loaded page atomically, `abort` releases the guard after a failure.
///
/// `initialize` and `update` wrap both halves around a [`Loader`] for the common case.
pub struct VirtualList<T, R: ItemRenderer<T>> {
    options: ListOptions,
    renderer: R,
    window: WindowState,
    pool: Pool<R::Element>,
    padding: Padding,
    sentinels: Sentinels,
    phase: Phase,
    in_flight: InFlight,
    next_ticket: u64,
    after_init_done: bool,
    _items: PhantomData<fn(&T)>,
}

impl<T, R: ItemRenderer<T>> VirtualList<T, R> {
    /// Creates an empty list. Nothing is rendered until the initial page is committed.
    pub fn new(options: ListOptions, renderer: R) -> Result<Self, Error> {
        options.validate()?;
        rdebug!(
            page_size = options.page_size,
            item_margin = options.item_margin,
            start_page = ?options.start_page,
            "VirtualList::new"
        );
        Ok(Self {
            pool: Pool::new(options.capacity()),
            options,
            renderer,
            window: WindowState::default(),
            padding: Padding::default(),
            sentinels: Sentinels::default(),
            phase: Phase::Pending,
            in_flight: InFlight::default(),
            next_ticket: 0,
            after_init_done: false,
            _items: PhantomData,
        })
    }

    /// Builds a list and loads its first page (or the range centered on `start_page`).
    ///
    /// Returns the ready list together with the effects of the initial layout. The `after_init`
    /// callback runs once the initial page is committed, right before this returns.
    pub async fn initialize<L>(
        options: ListOptions,
        renderer: R,
        loader: &L,
    ) -> Result<(Self, Vec<Effect>), LoadError<L::Error>>
    where
        L: Loader<T>,
    {
        let mut list = Self::new(options, renderer)?;
        let effects = match list.request_initial() {
            Some(request) => list.run(request, loader).await?.into_effects(),
            None => Vec::new(),
        };
        list.run_after_init();
        Ok((list, effects))
    }

    /// Handles a boundary crossing end to end: request, load, commit.
    ///
    /// Returns [`Commit::Skipped`] without calling the loader when the boundary is terminal or a
    /// fetch for it is already in flight.
    pub async fn update<L>(
        &mut self,
        boundary: Boundary,
        loader: &L,
    ) -> Result<Commit, LoadError<L::Error>>
    where
        L: Loader<T>,
    {
        let Some(request) = self.request(boundary) else {
            return Ok(Commit::Skipped);
        };
        self.run(request, loader).await
    }

    async fn run<L>(
        &mut self,
        request: FetchRequest,
        loader: &L,
    ) -> Result<Commit, LoadError<L::Error>>
    where
        L: Loader<T>,
    {
        match loader.load(request.start, request.limit).await {
            Ok(page) => Ok(self.commit(request, page)?),
            Err(e) => {
                rwarn!(
                    kind = ?request.kind,
                    start = request.start,
                    limit = request.limit,
                    "loader failed"
                );
                self.abort(&request);
                Err(LoadError::Loader(e))
            }
        }
    }

    /// Issues the initial fetch. Returns `None` once the list is past its pending phase or the
    /// initial fetch is already out.
    pub fn request_initial(&mut self) -> Option<FetchRequest> {
        if self.phase != Phase::Pending || self.in_flight.get(FetchKind::Initial).is_some() {
            return None;
        }
        let (start, limit) = self.options.initial_range();
        Some(self.issue(FetchKind::Initial, start, limit))
    }

    /// Issues a fetch for `boundary`, or returns `None` when there is nothing to do.
    ///
    /// `None` covers the terminal states (`start == 0` at the top, no `next_cursor` at the
    /// bottom), a fetch for the same boundary still in flight, and a list that is not ready.
    pub fn request(&mut self, boundary: Boundary) -> Option<FetchRequest> {
        if self.phase != Phase::Ready {
            rtrace!(?boundary, phase = ?self.phase, "request: list not ready");
            return None;
        }
        if self.is_in_flight(boundary) {
            rtrace!(?boundary, "request: fetch already in flight");
            return None;
        }

        let page_size = self.options.page_size;
        match boundary {
            Boundary::Top => {
                if self.window.start == 0 {
                    return None;
                }
                let start = self.window.start.saturating_sub(page_size);
                let limit = self.window.start - start;
                Some(self.issue(FetchKind::Boundary(boundary), start, limit))
            }
            Boundary::Bottom => {
                if self.window.next_cursor.is_none() {
                    return None;
                }
                let limit = if self.pool.is_full() {
                    page_size
                } else {
                    page_size.min(self.pool.capacity() - self.pool.len())
                };
                Some(self.issue(FetchKind::Boundary(boundary), self.window.end, limit))
            }
        }
    }

    fn issue(&mut self, kind: FetchKind, start: usize, limit: usize) -> FetchRequest {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        *self.in_flight.guard(kind) = Some(ticket);
        rtrace!(?kind, start, limit, ticket, "fetch issued");
        FetchRequest {
            ticket,
            kind,
            start,
            limit,
        }
    }

    /// Releases the guard of a fetch that will never be committed (e.g. the loader failed).
    ///
    /// Returns `false` if `request` was not the fetch in flight.
    pub fn abort(&mut self, request: &FetchRequest) -> bool {
        let guard = self.in_flight.guard(request.kind);
        if *guard != Some(request.ticket) {
            return false;
        }
        *guard = None;
        true
    }

    /// Applies a loaded page.
    ///
    /// The window, pool, padding and sentinels change together or not at all. A page that no
    /// longer lines up with the window (the opposite boundary committed first) comes back as
    /// [`Commit::Stale`]; after `destroy` every page comes back as [`Commit::Discarded`].
    pub fn commit(&mut self, request: FetchRequest, page: Page<T>) -> Result<Commit, Error> {
        if self.phase == Phase::Destroyed {
            rdebug!(kind = ?request.kind, "commit after destroy discarded");
            return Ok(Commit::Discarded);
        }

        if !self.abort(&request) {
            return Err(Error::UnknownFetch {
                ticket: request.ticket,
            });
        }

        if page.size != page.chunk.len() {
            return Err(Error::SizeMismatch {
                size: page.size,
                len: page.chunk.len(),
            });
        }
        if page.chunk.len() > request.limit {
            return Err(Error::ChunkOverflow {
                len: page.chunk.len(),
                limit: request.limit,
            });
        }

        let effects = match request.kind {
            FetchKind::Initial => self.commit_initial(&request, &page)?,
            FetchKind::Boundary(Boundary::Top) => {
                if request.start + request.limit != self.window.start {
                    rdebug!(
                        start = request.start,
                        window_start = self.window.start,
                        "stale top page dropped"
                    );
                    return Ok(Commit::Stale);
                }
                self.commit_top(&request, &page)?
            }
            FetchKind::Boundary(Boundary::Bottom) => {
                if request.start != self.window.end {
                    rdebug!(
                        start = request.start,
                        window_end = self.window.end,
                        "stale bottom page dropped"
                    );
                    return Ok(Commit::Stale);
                }
                self.commit_bottom(&request, &page)?
            }
        };

        rtrace!(
            kind = ?request.kind,
            size = page.size,
            start = self.window.start,
            end = self.window.end,
            "page committed"
        );
        Ok(Commit::Applied(effects))
    }

    fn commit_initial(
        &mut self,
        request: &FetchRequest,
        page: &Page<T>,
    ) -> Result<Vec<Effect>, Error> {
        let mut effects = Vec::with_capacity(request.limit * 2 + 4);
        let orders = request.start..request.start + request.limit;
        self.pool.grow(
            &mut self.renderer,
            &page.chunk,
            orders,
            self.padding.top,
            self.options.item_margin,
            &mut effects,
        )?;

        self.window = WindowState {
            start: request.start,
            end: request.start + request.limit,
            prev_cursor: page.prev_cursor,
            next_cursor: page.next_cursor,
        };
        self.phase = Phase::Ready;
        self.synchronize(&mut effects)?;
        effects.push(self.cursor_effect());
        effects.push(Effect::Initialized);
        Ok(effects)
    }

    fn commit_top(&mut self, request: &FetchRequest, page: &Page<T>) -> Result<Vec<Effect>, Error> {
        let mut effects = Vec::with_capacity(request.limit + 3);
        self.pool.recycle_up(
            &mut self.renderer,
            &page.chunk,
            request.limit,
            request.start,
            self.options.item_margin,
            &mut effects,
        )?;

        self.window.start = request.start;
        self.window.end -= request.limit;
        self.record_cursors(page);

        if let Some(overflow) = sync::rebase(&mut self.pool, &mut self.padding) {
            rdebug!(overflow, "pool rebased below container top");
            effects.clear();
            self.pool.place_effects(&mut effects);
            effects.push(Effect::ScrollBy(overflow));
        }
        self.synchronize(&mut effects)?;
        effects.push(self.cursor_effect());
        Ok(effects)
    }

    fn commit_bottom(
        &mut self,
        request: &FetchRequest,
        page: &Page<T>,
    ) -> Result<Vec<Effect>, Error> {
        let mut effects = Vec::with_capacity(request.limit * 2 + 3);
        if self.pool.is_full() {
            self.pool.recycle_down(
                &mut self.renderer,
                &page.chunk,
                request.limit,
                request.start,
                self.options.item_margin,
                &mut effects,
            )?;
            self.window.start += request.limit;
        } else {
            let orders = request.start..request.start + request.limit;
            self.pool.grow(
                &mut self.renderer,
                &page.chunk,
                orders,
                self.padding.top,
                self.options.item_margin,
                &mut effects,
            )?;
        }
        self.window.end += request.limit;
        self.record_cursors(page);

        self.synchronize(&mut effects)?;
        effects.push(self.cursor_effect());
        Ok(effects)
    }

    fn record_cursors(&mut self, page: &Page<T>) {
        self.window.prev_cursor = page.prev_cursor;
        self.window.next_cursor = page.next_cursor;
    }

    fn cursor_effect(&self) -> Effect {
        Effect::Cursors {
            prev_cursor: self.window.prev_cursor,
            next_cursor: self.window.next_cursor,
        }
    }

    fn synchronize(&mut self, effects: &mut Vec<Effect>) -> Result<(), Error> {
        sync::synchronize(&self.pool, &mut self.padding, &mut self.sentinels)?;
        effects.push(Effect::Padding(self.padding));
        effects.push(Effect::Sentinels(self.sentinels));
        Ok(())
    }

    /// Runs the `after_init` callback if the initial layout is committed and it has not run yet.
    ///
    /// `initialize` calls this itself. Hosts driving `request_initial`/`commit` by hand call it
    /// once they have applied the initial effects. Returns whether the callback ran.
    pub fn run_after_init(&mut self) -> bool {
        if self.phase != Phase::Ready || self.after_init_done {
            return false;
        }
        self.after_init_done = true;
        match &self.options.after_init {
            Some(after_init) => {
                after_init();
                true
            }
            None => false,
        }
    }

    /// Tears the list down. Elements are dropped and any page still in flight will be discarded
    /// on commit.
    pub fn destroy(&mut self) {
        rdebug!(pool_len = self.pool.len(), "VirtualList::destroy");
        self.phase = Phase::Destroyed;
        self.pool.clear();
        self.in_flight = InFlight::default();
        self.window = WindowState::default();
        self.padding = Padding::default();
        self.sentinels = Sentinels::default();
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn sentinels(&self) -> Sentinels {
        self.sentinels
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    pub fn is_in_flight(&self, boundary: Boundary) -> bool {
        self.in_flight.get(FetchKind::Boundary(boundary)).is_some()
    }

    /// Number of materialized slots, visible or not.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.pool.is_full()
    }

    /// Iterates over the slots from top to bottom.
    pub fn slots(&self) -> impl Iterator<Item = SlotView<'_, R::Element>> + '_ {
        self.pool.views()
    }

    /// Calls `f` for each slot from top to bottom.
    pub fn for_each_slot(&self, mut f: impl FnMut(SlotView<'_, R::Element>)) {
        for view in self.pool.views() {
            f(view);
        }
    }

    pub fn slot(&self, id: SlotId) -> Option<SlotView<'_, R::Element>> {
        self.pool.view(id)
    }

    /// Returns the slot currently assigned to `logical_order`, if it is inside the window.
    pub fn slot_for(&self, logical_order: usize) -> Option<SlotView<'_, R::Element>> {
        if !self.window.contains(logical_order) {
            return None;
        }
        let id = *self.pool.order().get(logical_order - self.window.start)?;
        self.pool.view(id)
    }

    /// Distance from the top of the first slot to the bottom of the last one.
    pub fn rendered_height(&self) -> f64 {
        match (self.pool.first(), self.pool.last()) {
            (Some(first), Some(last)) => last.translate_y + last.height - first.translate_y,
            _ => 0.0,
        }
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            window: self.window,
            padding: self.padding,
            sentinels: self.sentinels,
            pool_len: self.pool.len(),
            rendered_height: self.rendered_height(),
        }
    }
}

impl<T, R: ItemRenderer<T>> core::fmt::Debug for VirtualList<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualList")
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("window", &self.window)
            .field("padding", &self.padding)
            .field("sentinels", &self.sentinels)
            .field("pool_len", &self.pool.len())
            .finish_non_exhaustive()
    }
}
