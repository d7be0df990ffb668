use crate::*;

use alloc::vec::Vec;
use core::cell::Cell;
use core::convert::Infallible;
use core::future::{Future, ready};
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Row {
    serial: usize,
    item: Option<u64>,
}

struct Rows {
    height: f64,
    height_of: Option<fn(u64) -> f64>,
    rendered: usize,
    updates: usize,
    fail_at: Option<usize>,
}

impl Rows {
    fn uniform(height: f64) -> Self {
        Self {
            height,
            height_of: None,
            rendered: 0,
            updates: 0,
            fail_at: None,
        }
    }

    fn with_heights(height_of: fn(u64) -> f64) -> Self {
        Self {
            height_of: Some(height_of),
            ..Self::uniform(0.0)
        }
    }
}

impl ItemRenderer<u64> for Rows {
    type Element = Row;

    fn render(&mut self, item: Option<&u64>) -> Option<Row> {
        if self.fail_at == Some(self.rendered) {
            return None;
        }
        let serial = self.rendered;
        self.rendered += 1;
        Some(Row {
            serial,
            item: item.copied(),
        })
    }

    fn update(&mut self, element: &mut Row, item: Option<&u64>) {
        self.updates += 1;
        element.item = item.copied();
    }

    fn height(&self, element: &Row) -> f64 {
        match (element.item, self.height_of) {
            (None, _) => 0.0,
            (Some(item), Some(height_of)) => height_of(item),
            (Some(_), None) => self.height,
        }
    }
}

/// A finite sequence `0..len` served synchronously.
struct Source {
    len: usize,
    calls: Cell<usize>,
    offline: Cell<bool>,
}

impl Source {
    fn new(len: usize) -> Self {
        Self {
            len,
            calls: Cell::new(0),
            offline: Cell::new(false),
        }
    }

    fn page(&self, start: usize, limit: usize) -> Page<u64> {
        let end = (start + limit).min(self.len);
        let chunk: Vec<u64> = (start.min(end)..end).map(|i| i as u64).collect();
        Page::new(chunk, start, start + limit < self.len)
    }
}

impl Loader<u64> for Source {
    type Error = &'static str;

    fn load(
        &self,
        start: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Page<u64>, Self::Error>> {
        self.calls.set(self.calls.get() + 1);
        let result = if self.offline.get() {
            Err("offline")
        } else {
            Ok(self.page(start, limit))
        };
        ready(result)
    }
}

type List = VirtualList<u64, Rows>;

fn init(options: ListOptions, rows: Rows, source: &Source) -> (List, Vec<Effect>) {
    pollster::block_on(List::initialize(options, rows, source)).unwrap()
}

fn trigger(list: &mut List, boundary: Boundary, source: &Source) -> Commit {
    pollster::block_on(list.update(boundary, source)).unwrap()
}

fn orders(list: &List) -> Vec<usize> {
    list.slots().map(|s| s.logical_order).collect()
}

fn offsets(list: &List) -> Vec<f64> {
    list.slots().map(|s| s.translate_y).collect()
}

fn assert_invariants(list: &List) {
    let w = list.window();
    assert!(w.start <= w.end);
    assert_eq!(w.end - w.start, list.len());
    assert!(list.len() <= list.capacity());
    assert_eq!(orders(list), (w.start..w.end).collect::<Vec<_>>());

    let ys = offsets(list);
    for pair in ys.windows(2) {
        assert!(pair[0] <= pair[1], "offsets not monotonic: {ys:?}");
    }
    if let (Some(first), Some(last)) = (ys.first(), ys.last()) {
        assert!(*first >= 0.0);
        assert_eq!(list.padding().top, *first);
        assert_eq!(list.sentinels().top, *first);
        assert_eq!(list.sentinels().bottom, *last);
    }
    assert!(list.padding().bottom >= 0.0);
}

#[test]
fn options_are_validated() {
    let err = List::new(ListOptions::new(0), Rows::uniform(100.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));

    let err = List::new(
        ListOptions::new(5).with_item_margin(-1.0),
        Rows::uniform(100.0),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));

    let err = List::new(
        ListOptions::new(5).with_item_margin(f64::NAN),
        Rows::uniform(100.0),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));

    assert!(List::new(ListOptions::new(5).with_item_margin(16.0), Rows::uniform(100.0)).is_ok());
}

#[test]
fn initial_range_centers_on_start_page() {
    assert_eq!(ListOptions::new(5).initial_range(), (0, 5));
    assert_eq!(ListOptions::new(5).with_start_page(Some(12)).initial_range(), (7, 10));
    assert_eq!(ListOptions::new(5).with_start_page(Some(3)).initial_range(), (0, 8));
    assert_eq!(ListOptions::new(5).with_start_page(Some(0)).initial_range(), (0, 5));
    assert_eq!(ListOptions::new(5).capacity(), 10);
}

#[test]
fn initial_effects_mount_every_slot() {
    let source = Source::new(100);
    let (list, effects) = init(ListOptions::new(5), Rows::uniform(100.0), &source);

    let mounts = effects
        .iter()
        .filter(|e| matches!(e, Effect::Mount(_)))
        .count();
    assert_eq!(mounts, 5);
    assert_eq!(effects.last(), Some(&Effect::Initialized));
    assert!(effects.contains(&Effect::Cursors {
        prev_cursor: 0,
        next_cursor: Some(5),
    }));
    assert!(list.is_ready());
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn grows_until_full_then_recycles_forward() {
    let source = Source::new(100);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    assert_eq!(list.window().start, 0);
    assert_eq!(list.window().end, 5);
    assert_eq!(list.window().next_cursor, Some(5));
    assert!(!list.is_full());

    assert!(trigger(&mut list, Boundary::Bottom, &source).is_applied());
    assert_eq!(list.window().start, 0);
    assert_eq!(list.window().end, 10);
    assert!(list.is_full());

    assert!(trigger(&mut list, Boundary::Bottom, &source).is_applied());
    assert_eq!(list.window().start, 5);
    assert_eq!(list.window().end, 15);
    assert_eq!(list.len(), 10);
    assert_invariants(&list);
}

#[test]
fn pool_size_is_constant_once_full() {
    let source = Source::new(1_000);
    let (mut list, _) = init(ListOptions::new(4), Rows::uniform(100.0), &source);
    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(list.len(), 8);

    for _ in 0..20 {
        trigger(&mut list, Boundary::Bottom, &source);
        assert_eq!(list.len(), 8);
    }
    for _ in 0..7 {
        trigger(&mut list, Boundary::Top, &source);
        assert_eq!(list.len(), 8);
    }
    assert_eq!(list.renderer().rendered, 8);
    assert_invariants(&list);
}

#[test]
fn recycling_reuses_elements() {
    let source = Source::new(1_000);
    let (mut list, _) = init(ListOptions::new(3), Rows::uniform(100.0), &source);
    for _ in 0..5 {
        trigger(&mut list, Boundary::Bottom, &source);
    }

    let mut serials: Vec<usize> = list.slots().map(|s| s.element.serial).collect();
    serials.sort_unstable();
    assert_eq!(serials, (0..6).collect::<Vec<_>>());
    assert_eq!(list.renderer().updates, 4 * 3);

    for slot in list.slots() {
        assert_eq!(slot.element.item, Some(slot.logical_order as u64));
    }
}

#[test]
fn offsets_chain_by_height_plus_margin() {
    let source = Source::new(100);
    let (mut list, _) = init(
        ListOptions::new(5).with_item_margin(16.0),
        Rows::uniform(100.0),
        &source,
    );
    trigger(&mut list, Boundary::Bottom, &source);

    let ys = offsets(&list);
    for pair in ys.windows(2) {
        assert_eq!(pair[1] - pair[0], 116.0);
    }
    assert_eq!(ys[0], 0.0);
}

#[test]
fn recycle_up_chains_variable_heights_from_below() {
    let source = Source::new(100);
    let rows = Rows::with_heights(|item| 20.0 + (item % 7) as f64 * 10.0);
    let (mut list, _) = init(ListOptions::new(5).with_item_margin(4.0), rows, &source);
    trigger(&mut list, Boundary::Bottom, &source);
    trigger(&mut list, Boundary::Bottom, &source);
    trigger(&mut list, Boundary::Top, &source);
    assert_eq!(list.window().start, 0);

    let slots: Vec<_> = list.slots().collect();
    for pair in slots.windows(2) {
        let (upper, lower) = (pair[0], pair[1]);
        assert_eq!(lower.translate_y, upper.translate_y + upper.height + 4.0);
    }
    assert_invariants(&list);
}

#[test]
fn padding_is_conserved_when_revisiting() {
    let source = Source::new(100);
    let (mut list, _) = init(
        ListOptions::new(5).with_item_margin(10.0),
        Rows::uniform(100.0),
        &source,
    );
    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(list.padding(), Padding { top: 0.0, bottom: 0.0 });

    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(
        list.padding(),
        Padding {
            top: 550.0,
            bottom: 0.0
        }
    );
    let before = list.padding().total() + list.rendered_height();

    trigger(&mut list, Boundary::Top, &source);
    assert_eq!(
        list.padding(),
        Padding {
            top: 0.0,
            bottom: 550.0
        }
    );
    assert_eq!(list.padding().total() + list.rendered_height(), before);

    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(
        list.padding(),
        Padding {
            top: 550.0,
            bottom: 0.0
        }
    );
    assert_eq!(list.padding().total() + list.rendered_height(), before);
    assert_eq!(list.snapshot().virtual_height(), before);
}

#[test]
fn sentinels_bracket_the_window() {
    let source = Source::new(100);
    let (mut list, _) = init(
        ListOptions::new(5).with_item_margin(10.0),
        Rows::uniform(100.0),
        &source,
    );
    assert_eq!(list.sentinels(), Sentinels { top: 0.0, bottom: 440.0 });

    trigger(&mut list, Boundary::Bottom, &source);
    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(
        list.sentinels(),
        Sentinels {
            top: 550.0,
            bottom: 1540.0
        }
    );
}

#[test]
fn resume_places_start_page_mid_pool() {
    let source = Source::new(100);
    let (list, _) = init(
        ListOptions::new(5)
            .with_item_margin(10.0)
            .with_start_page(Some(12)),
        Rows::uniform(100.0),
        &source,
    );
    assert_eq!(list.window().start, 7);
    assert_eq!(list.window().end, 17);
    assert!(list.is_full());

    let position = list.slots().position(|s| s.logical_order == 12);
    assert_eq!(position, Some(5));
    let slot = list.slot_for(12).unwrap();
    assert_eq!(slot.translate_y, 550.0);
    assert_eq!(slot.element.item, Some(12));
    assert!(list.slot_for(17).is_none());
}

#[test]
fn backward_recycle_after_resume_rebases_and_compensates_scroll() {
    let source = Source::new(100);
    let (mut list, _) = init(
        ListOptions::new(5)
            .with_item_margin(10.0)
            .with_start_page(Some(12)),
        Rows::uniform(100.0),
        &source,
    );

    let commit = trigger(&mut list, Boundary::Top, &source);
    assert!(commit.effects().contains(&Effect::ScrollBy(550.0)));
    assert_eq!(list.window().start, 2);
    assert_eq!(list.window().end, 12);
    assert_eq!(list.slot_for(2).unwrap().translate_y, 0.0);
    assert_eq!(list.slot_for(7).unwrap().translate_y, 550.0);
    assert_eq!(
        list.padding(),
        Padding {
            top: 0.0,
            bottom: 550.0
        }
    );

    // The remaining two items above are fetched with a short limit.
    let request = list.request(Boundary::Top).unwrap();
    assert_eq!((request.start, request.limit), (0, 2));
    let page = source.page(request.start, request.limit);
    let commit = list.commit(request, page).unwrap();
    assert!(commit.effects().contains(&Effect::ScrollBy(220.0)));
    assert_eq!(list.window().start, 0);
    assert_eq!(list.window().end, 10);
    assert_invariants(&list);
}

#[test]
fn top_boundary_at_start_is_a_no_op() {
    let source = Source::new(100);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    let before = list.snapshot();

    assert_eq!(trigger(&mut list, Boundary::Top, &source), Commit::Skipped);
    assert_eq!(source.calls.get(), 1);
    assert_eq!(list.snapshot(), before);
}

#[test]
fn short_forward_page_hides_surplus_and_stops() {
    let source = Source::new(17);
    let (mut list, _) = init(
        ListOptions::new(5).with_item_margin(10.0),
        Rows::uniform(100.0),
        &source,
    );
    trigger(&mut list, Boundary::Bottom, &source);
    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(list.window().next_cursor, Some(15));

    let commit = trigger(&mut list, Boundary::Bottom, &source);
    assert!(commit.is_applied());
    assert_eq!(list.window().start, 10);
    assert_eq!(list.window().end, 20);
    assert_eq!(list.window().next_cursor, None);

    let hidden: Vec<usize> = list
        .slots()
        .filter(|s| !s.visible)
        .map(|s| s.logical_order)
        .collect();
    assert_eq!(hidden, [17, 18, 19]);
    assert_eq!(offsets(&list)[7..], [1870.0, 1870.0, 1870.0]);
    assert_eq!(list.sentinels().bottom, 1870.0);
    assert_invariants(&list);

    let calls = source.calls.get();
    let before = list.snapshot();
    for _ in 0..3 {
        assert_eq!(trigger(&mut list, Boundary::Bottom, &source), Commit::Skipped);
    }
    assert_eq!(source.calls.get(), calls);
    assert_eq!(list.snapshot(), before);
}

#[test]
fn scrolling_back_from_the_end_reenables_the_bottom() {
    let source = Source::new(17);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    for _ in 0..3 {
        trigger(&mut list, Boundary::Bottom, &source);
    }
    assert_eq!(list.window().next_cursor, None);

    trigger(&mut list, Boundary::Top, &source);
    assert_eq!(list.window().start, 5);
    assert!(list.slots().all(|s| s.visible));
    assert!(list.window().next_cursor.is_some());

    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(list.window().start, 10);
    assert_eq!(list.slots().filter(|s| s.visible).count(), 7);
    assert_invariants(&list);
}

#[test]
fn empty_source_renders_hidden_placeholders() {
    let source = Source::new(0);
    let (mut list, _) = init(
        ListOptions::new(5).with_item_margin(16.0),
        Rows::uniform(100.0),
        &source,
    );
    assert_eq!(list.len(), 5);
    assert!(list.slots().all(|s| !s.visible && s.translate_y == 0.0));
    assert_eq!(list.window().next_cursor, None);
    assert_eq!(list.rendered_height(), 0.0);
    assert_eq!(trigger(&mut list, Boundary::Bottom, &source), Commit::Skipped);
}

#[test]
fn loader_failure_leaves_state_untouched() {
    let source = Source::new(100);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    let before = list.snapshot();

    source.offline.set(true);
    let err = pollster::block_on(list.update(Boundary::Bottom, &source)).unwrap_err();
    assert_eq!(err.loader_error(), Some(&"offline"));
    assert_eq!(list.snapshot(), before);
    assert!(!list.is_in_flight(Boundary::Bottom));

    source.offline.set(false);
    assert!(trigger(&mut list, Boundary::Bottom, &source).is_applied());
    assert_eq!(list.window().end, 10);
}

#[test]
fn initial_loader_failure_is_reported() {
    let source = Source::new(100);
    source.offline.set(true);
    let result = pollster::block_on(List::initialize(
        ListOptions::new(5),
        Rows::uniform(100.0),
        &source,
    ));
    assert!(matches!(result, Err(LoadError::Loader("offline"))));
}

#[test]
fn same_boundary_is_not_requested_twice() {
    let source = Source::new(100);
    let (mut list, _) = init(
        ListOptions::new(5).with_start_page(Some(20)),
        Rows::uniform(100.0),
        &source,
    );

    let bottom = list.request(Boundary::Bottom).unwrap();
    assert!(list.is_in_flight(Boundary::Bottom));
    assert_eq!(list.request(Boundary::Bottom), None);

    let top = list.request(Boundary::Top).unwrap();
    assert_eq!((top.start, top.limit), (10, 5));
    assert_eq!((bottom.start, bottom.limit), (25, 5));
    assert_eq!(list.request(Boundary::Top), None);

    assert!(list.abort(&bottom));
    assert!(!list.abort(&bottom));
    assert!(list.request(Boundary::Bottom).is_some());
}

#[test]
fn opposite_fetches_commit_atomically() {
    let source = Source::new(100);
    let (mut list, _) = init(
        ListOptions::new(5).with_start_page(Some(20)),
        Rows::uniform(100.0),
        &source,
    );
    assert_eq!((list.window().start, list.window().end), (15, 25));

    let top = list.request(Boundary::Top).unwrap();
    let bottom = list.request(Boundary::Bottom).unwrap();

    let applied = list
        .commit(bottom, source.page(bottom.start, bottom.limit))
        .unwrap();
    assert!(applied.is_applied());
    assert_eq!((list.window().start, list.window().end), (20, 30));
    let after_bottom = list.snapshot();

    let stale = list.commit(top, source.page(top.start, top.limit)).unwrap();
    assert_eq!(stale, Commit::Stale);
    assert_eq!(list.snapshot(), after_bottom);
    assert!(!list.is_in_flight(Boundary::Top));

    let retry = list.request(Boundary::Top).unwrap();
    assert_eq!((retry.start, retry.limit), (15, 5));
    assert_invariants(&list);
}

#[test]
fn commit_after_destroy_is_discarded() {
    let source = Source::new(100);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    let request = list.request(Boundary::Bottom).unwrap();

    list.destroy();
    assert!(list.is_destroyed());
    assert!(list.is_empty());

    let commit = list
        .commit(request, source.page(request.start, request.limit))
        .unwrap();
    assert_eq!(commit, Commit::Discarded);
    assert!(list.is_empty());
    assert_eq!(list.request(Boundary::Bottom), None);
}

#[test]
fn missing_root_element_fails_without_partial_pool() {
    let source = Source::new(100);
    let mut rows = Rows::uniform(100.0);
    rows.fail_at = Some(3);
    let mut list = List::new(ListOptions::new(5), rows).unwrap();

    let request = list.request_initial().unwrap();
    let err = list
        .commit(request, source.page(request.start, request.limit))
        .unwrap_err();
    assert_eq!(err, Error::MissingRoot { logical_order: 3 });
    assert!(list.is_empty());
    assert!(!list.is_ready());
    assert!(list.request_initial().is_some());
}

#[test]
fn oversized_or_inconsistent_pages_are_rejected() {
    let source = Source::new(100);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    let before = list.snapshot();

    let request = list.request(Boundary::Bottom).unwrap();
    let err = list.commit(request, source.page(5, 6)).unwrap_err();
    assert_eq!(err, Error::ChunkOverflow { len: 6, limit: 5 });
    assert_eq!(list.snapshot(), before);

    let request = list.request(Boundary::Bottom).unwrap();
    let mut page = source.page(5, 5);
    page.size = 4;
    let err = list.commit(request, page).unwrap_err();
    assert_eq!(err, Error::SizeMismatch { size: 4, len: 5 });
    assert_eq!(list.snapshot(), before);
}

#[test]
fn committing_twice_is_an_unknown_fetch() {
    let source = Source::new(100);
    let (mut list, _) = init(ListOptions::new(5), Rows::uniform(100.0), &source);
    let request = list.request(Boundary::Bottom).unwrap();
    list.commit(request, source.page(5, 5)).unwrap();

    let err = list.commit(request, source.page(5, 5)).unwrap_err();
    assert!(matches!(err, Error::UnknownFetch { .. }));
}

#[test]
fn after_init_runs_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let source = Source::new(100);
    let options = ListOptions::new(5).with_after_init(Some(|| {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }));
    let (mut list, _) = init(options, Rows::uniform(100.0), &source);
    trigger(&mut list, Boundary::Bottom, &source);
    trigger(&mut list, Boundary::Bottom, &source);
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(list.request_initial(), None);
    assert!(!list.run_after_init());
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn after_init_waits_for_the_host_when_committing_by_hand() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let source = Source::new(100);
    let options = ListOptions::new(5).with_after_init(Some(|| {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }));
    let mut list = List::new(options, Rows::uniform(100.0)).unwrap();
    assert!(!list.run_after_init());

    let request = list.request_initial().unwrap();
    let commit = list
        .commit(request, source.page(request.start, request.limit))
        .unwrap();
    assert_eq!(commit.effects().last(), Some(&Effect::Initialized));
    assert_eq!(CALLS.load(Ordering::SeqCst), 0);

    assert!(list.run_after_init());
    assert!(!list.run_after_init());
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn closures_can_be_loaders() {
    let loader = |start: usize, limit: usize| {
        let chunk: Vec<u64> = (start..start + limit).map(|i| i as u64 * 2).collect();
        ready(Ok::<_, Infallible>(Page::new(chunk, start, true)))
    };
    let (mut list, _) = pollster::block_on(List::initialize(
        ListOptions::new(2),
        Rows::uniform(100.0),
        &loader,
    ))
    .unwrap();
    pollster::block_on(list.update(Boundary::Bottom, &loader)).unwrap();
    let items: Vec<_> = list.slots().map(|s| s.element.item).collect();
    assert_eq!(items, [Some(0), Some(2), Some(4), Some(6)]);
}

#[test]
fn random_trigger_sequences_keep_the_window_consistent() {
    let mut rng = Lcg::new(0x5eed);
    for round in 0..40 {
        let len = rng.gen_range_usize(0, 120);
        let page_size = rng.gen_range_usize(1, 7);
        let start_page = rng.gen_bool().then(|| rng.gen_range_usize(0, 120));
        let source = Source::new(len);
        let options = ListOptions::new(page_size)
            .with_item_margin(rng.gen_range_usize(0, 20) as f64)
            .with_start_page(start_page);
        let (mut list, _) = init(options, Rows::uniform(40.0), &source);
        assert_invariants(&list);

        for _ in 0..60 {
            let boundary = if rng.gen_bool() {
                Boundary::Top
            } else {
                Boundary::Bottom
            };
            let was_full = list.is_full();
            trigger(&mut list, boundary, &source);
            assert_invariants(&list);
            if was_full {
                assert!(list.is_full(), "round {round}: pool shrank");
            }
        }
        assert_eq!(list.renderer().rendered, list.len());
    }
}

#[cfg(feature = "serde")]
#[test]
fn page_decodes_from_wire_format() {
    let json = r#"{"chunk":[7,8],"prev_cursor":7,"next_cursor":null,"size":2}"#;
    let page: Page<u64> = serde_json::from_str(json).unwrap();
    assert_eq!(page, Page::new(alloc::vec![7, 8], 7, false));

    let snapshot = ListSnapshot::default();
    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: ListSnapshot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, snapshot);
}
