use futures::future::join;
use recycler::{
    Boundary, Commit, Effect, Error, FetchRequest, ItemRenderer, ListOptions, LoadError, Loader,
    Page, VirtualList,
};

use crate::{BoundaryReceiver, PAGE_PARAM, QueryParamStore, ScrollPositionStore};

/// What the host applies right after mounting.
#[derive(Clone, Debug, PartialEq)]
pub struct Mounted {
    pub effects: Vec<Effect>,
    /// Persisted scroll offset to restore once the initial layout is in place.
    pub restore_scroll: Option<f64>,
}

/// Outcome of one [`Controller::pump`].
#[derive(Debug)]
pub struct Pumped<E> {
    /// Effects of every applied page, in commit order.
    pub effects: Vec<Effect>,
    /// Boundaries whose load failed. The list is unchanged for them and they fire again on the
    /// next crossing.
    pub failed: Vec<(Boundary, E)>,
    /// Boundaries whose page was dropped because the window moved (or the list was destroyed)
    /// while it loaded. The host reports them again if their sentinel is still in view.
    pub stale: Vec<Boundary>,
}

impl<E> Pumped<E> {
    fn new() -> Self {
        Self {
            effects: Vec::new(),
            failed: Vec::new(),
            stale: Vec::new(),
        }
    }

    /// `true` when nothing fired or every fired boundary was a no-op.
    pub fn is_idle(&self) -> bool {
        self.effects.is_empty() && self.failed.is_empty() && self.stale.is_empty()
    }
}

/// A framework-neutral controller that wires a [`VirtualList`] to its surroundings.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` once, applying the returned effects and restoring the returned scroll offset
/// - `pump` whenever sentinel events may have been reported through the [`BoundaryReceiver`]
/// - `save_scroll_position` before the page goes away
/// - `destroy` when the list is torn down
///
/// The resume offset round-trips through the `page` query parameter: it is read on mount and
/// rewritten with the window's `prev_cursor` after every applied page.
pub struct Controller<T, R: ItemRenderer<T>, L, S, Q> {
    list: VirtualList<T, R>,
    loader: L,
    events: BoundaryReceiver,
    scroll: S,
    params: Q,
}

impl<T, R, L, S, Q> Controller<T, R, L, S, Q>
where
    R: ItemRenderer<T>,
    L: Loader<T>,
    S: ScrollPositionStore,
    Q: QueryParamStore,
{
    /// Builds the list and loads the initial range.
    ///
    /// A valid `page` query parameter overrides `options.start_page`.
    pub async fn mount(
        options: ListOptions,
        renderer: R,
        loader: L,
        events: BoundaryReceiver,
        scroll: S,
        params: Q,
    ) -> Result<(Self, Mounted), LoadError<L::Error>> {
        let start_page = resume_offset(&params).or(options.start_page);
        let options = options.with_start_page(start_page);
        let (list, effects) = VirtualList::initialize(options, renderer, &loader).await?;

        let restore_scroll = scroll.load().filter(|&offset| offset > 0.0);
        adebug!(?start_page, ?restore_scroll, "Controller::mount");

        let controller = Self {
            list,
            loader,
            events,
            scroll,
            params,
        };
        Ok((
            controller,
            Mounted {
                effects,
                restore_scroll,
            },
        ))
    }

    /// Handles every boundary crossing reported since the last call.
    ///
    /// At most one fetch per direction is issued; both loads run together and each page is
    /// committed on its own. A page overtaken by the opposite direction is dropped as stale.
    ///
    /// Loader failures are collected in [`Pumped::failed`]. A list error is returned as is, after
    /// every request still pending in this pump has been aborted, so both boundaries can fire
    /// again.
    pub async fn pump(&mut self) -> Result<Pumped<L::Error>, Error> {
        let mut top = None;
        let mut bottom = None;
        for boundary in self.events.drain() {
            let request = self.list.request(boundary);
            match boundary {
                Boundary::Top => top = request,
                Boundary::Bottom => bottom = request,
            }
        }

        let mut pumped = Pumped::new();
        if top.is_none() && bottom.is_none() {
            return Ok(pumped);
        }

        let (top_page, bottom_page) =
            join(fetch(&self.loader, top), fetch(&self.loader, bottom)).await;

        let mut fetched = [
            (Boundary::Top, top, top_page),
            (Boundary::Bottom, bottom, bottom_page),
        ]
        .into_iter();
        while let Some((boundary, request, page)) = fetched.next() {
            let (Some(request), Some(page)) = (request, page) else {
                continue;
            };
            match page {
                Ok(page) => match self.list.commit(request, page) {
                    Ok(Commit::Applied(effects)) => {
                        pumped.effects.extend(effects);
                        self.write_page_param();
                    }
                    Ok(_) => {
                        adebug!(?boundary, start = request.start, "page not applied");
                        pumped.stale.push(boundary);
                    }
                    Err(e) => {
                        awarn!(?boundary, error = %e, "commit failed");
                        for (_, pending, _) in fetched {
                            if let Some(pending) = pending {
                                self.list.abort(&pending);
                            }
                        }
                        return Err(e);
                    }
                },
                Err(e) => {
                    awarn!(?boundary, start = request.start, "loader failed");
                    self.list.abort(&request);
                    pumped.failed.push((boundary, e));
                }
            }
        }
        Ok(pumped)
    }

    fn write_page_param(&mut self) {
        let prev_cursor = self.list.window().prev_cursor;
        self.params.set(PAGE_PARAM, Some(&prev_cursor.to_string()));
    }

    /// Persists the current scroll offset so the next `mount` can restore it.
    pub fn save_scroll_position(&mut self, offset: f64) {
        self.scroll.save(offset);
    }

    /// Tears the list down. Loads still in flight are discarded when they land.
    pub fn destroy(&mut self) {
        adebug!("Controller::destroy");
        self.list.destroy();
    }

    pub fn list(&self) -> &VirtualList<T, R> {
        &self.list
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn scroll_store(&self) -> &S {
        &self.scroll
    }

    pub fn query_params(&self) -> &Q {
        &self.params
    }
}

async fn fetch<T, L: Loader<T>>(
    loader: &L,
    request: Option<FetchRequest>,
) -> Option<Result<Page<T>, L::Error>> {
    match request {
        Some(request) => Some(loader.load(request.start, request.limit).await),
        None => None,
    }
}

fn resume_offset<Q: QueryParamStore>(params: &Q) -> Option<usize> {
    let raw = params.get(PAGE_PARAM)?;
    match raw.trim().parse() {
        Ok(page) => Some(page),
        Err(_) => {
            awarn!(%raw, "ignoring malformed page parameter");
            None
        }
    }
}
