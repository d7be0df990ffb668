// Example: a 1000-item feed scrolled forward, then back, with the effects a host would apply.
use core::future::ready;
use core::convert::Infallible;

use recycler::{Boundary, Effect, ItemRenderer, ListOptions, Page, VirtualList};

struct Labels;

impl ItemRenderer<u32> for Labels {
    type Element = String;

    fn render(&mut self, item: Option<&u32>) -> Option<String> {
        Some(item.map(|i| format!("item #{i}")).unwrap_or_default())
    }

    fn update(&mut self, element: &mut String, item: Option<&u32>) {
        *element = item.map(|i| format!("item #{i}")).unwrap_or_default();
    }

    fn height(&self, _element: &String) -> f64 {
        48.0
    }
}

fn main() {
    let loader = |start: usize, limit: usize| {
        let end = (start + limit).min(1_000);
        let chunk: Vec<u32> = (start as u32..end as u32).collect();
        ready(Ok::<_, Infallible>(Page::new(chunk, start, end < 1_000)))
    };

    let options = ListOptions::new(10)
        .with_item_margin(8.0)
        .with_after_init(Some(|| println!("initial layout committed")));
    let (mut list, effects) =
        pollster::block_on(VirtualList::initialize(options, Labels, &loader)).unwrap();
    let mounts = effects.iter().filter(|e| matches!(e, Effect::Mount(_))).count();
    println!("mounted {mounts} slots, window={:?}", list.window());

    for _ in 0..5 {
        pollster::block_on(list.update(Boundary::Bottom, &loader)).unwrap();
    }
    println!("after scrolling down: {:?}", list.snapshot());

    let commit = pollster::block_on(list.update(Boundary::Top, &loader)).unwrap();
    println!("scroll up produced {} effects", commit.effects().len());
    list.for_each_slot(|slot| println!("  {:>7.1}px  {}", slot.translate_y, slot.element));
}
