// Example: a product grid resumed from `?page=`, driven by sentinel reports.
use core::convert::Infallible;
use core::future::ready;

use recycler::{Boundary, ItemRenderer, ListOptions, Page};
use recycler_adapter::{
    Breakpoints, Controller, DEFAULT_THRESHOLD, GridLoader, MemoryQueryParams, MemoryScrollStore,
    PAGE_PARAM, QueryParamStore, boundary_channel,
};

struct RowCards;

impl ItemRenderer<Vec<u32>> for RowCards {
    type Element = Vec<u32>;

    fn render(&mut self, row: Option<&Vec<u32>>) -> Option<Vec<u32>> {
        Some(row.cloned().unwrap_or_default())
    }

    fn update(&mut self, element: &mut Vec<u32>, row: Option<&Vec<u32>>) {
        *element = row.cloned().unwrap_or_default();
    }

    fn height(&self, _element: &Vec<u32>) -> f64 {
        320.0
    }
}

fn products(start: usize, limit: usize) -> core::future::Ready<Result<Page<u32>, Infallible>> {
    let end = (start + limit).min(250);
    let chunk = (start as u32..end.max(start) as u32).collect();
    ready(Ok(Page::new(chunk, start, end < 250)))
}

fn main() {
    let columns = Breakpoints::default().columns_for(800.0);
    let (sender, receiver) = boundary_channel(DEFAULT_THRESHOLD);
    let params = MemoryQueryParams::new().with(PAGE_PARAM, "12");

    let (mut controller, mounted) = pollster::block_on(Controller::<Vec<u32>, _, _, _, _>::mount(
        ListOptions::new(5).with_item_margin(16.0),
        RowCards,
        GridLoader::new(products, columns),
        receiver,
        MemoryScrollStore::new(Some(2400.0)),
        params,
    ))
    .unwrap();
    println!(
        "{columns} columns, window={:?}, restore scroll to {:?}",
        controller.list().window(),
        mounted.restore_scroll
    );

    sender.report(Boundary::Bottom, 0.4);
    let pumped = pollster::block_on(controller.pump()).unwrap();
    println!(
        "bottom crossing: {} effects, ?page={:?}",
        pumped.effects.len(),
        controller.query_params().get(PAGE_PARAM)
    );

    controller.save_scroll_position(3120.0);
    controller.destroy();
}
