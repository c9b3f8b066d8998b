//! Externally paginated grid: a server-side authority owns the page.
//!
//! The grid mirrors the server's current page, relays page-change
//! requests through the registered hook, and never slices the supplied
//! records because they already are the correct page.
//!
//! Run with: `cargo run --example server_paging`

#![allow(clippy::unwrap_used)]

use datagrid::{Column, Grid, Record, Schema, TableState};
use std::sync::{Arc, Mutex};

const TOTAL_ON_SERVER: usize = 100;
const PAGE_SIZE: usize = 10;

/// Pretend server: returns one page of records.
fn fetch_page(page: usize) -> Vec<Record> {
    let start = (page - 1) * PAGE_SIZE;
    (start..(start + PAGE_SIZE).min(TOTAL_ON_SERVER))
        .map(|i| {
            Record::new()
                .field("id", i as i32)
                .field("name", format!("row-{i:03}"))
        })
        .collect()
}

fn main() {
    let schema = Schema::new(vec![
        Column::new("id", "ID").sortable(),
        Column::new("name", "Name"),
    ])
    .unwrap();

    let requested_page = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&requested_page);

    let mut current_page = 2;
    let state = TableState::new(schema, "remote-table")
        .records(fetch_page(current_page))
        .controlled_page(current_page, move |page| {
            // a real host would kick off a fetch here
            *sink.lock().unwrap() = Some(page);
        })
        .controlled_page_size(PAGE_SIZE, |size| {
            println!("[hook] page-size change requested: {size}");
        })
        .external_total(TOTAL_ON_SERVER);

    let mut grid = Grid::new(state);
    let view = grid.view();
    println!(
        "serving page {}/{} ({} records total on the server)",
        view.current_page, view.total_pages, view.total_records
    );

    // user clicks "page 5": the grid only notifies; the mirror is untouched
    grid.state_mut().request_page(5);
    let requested = requested_page.lock().unwrap().take().unwrap();
    assert_eq!(grid.state().current_page(), 2);
    println!("host received page-change request: {requested}");

    // the host fetches and pushes the new page back in
    current_page = requested;
    grid.state_mut().set_records(fetch_page(current_page));
    grid.state_mut().sync_page(current_page);

    let view = grid.view();
    println!(
        "now serving page {} — first row {}",
        view.current_page,
        view.rows[0].value_or_null("name").display()
    );
}
