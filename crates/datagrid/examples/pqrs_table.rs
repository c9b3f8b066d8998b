//! Basic grid over an in-memory dataset, with a custom actions column.
//!
//! Run with: `cargo run --example pqrs_table`

#![allow(clippy::unwrap_used)]

use datagrid::{BrowserStore, Column, Grid, Record, Schema, TableState};

fn main() {
    let schema = Schema::new(vec![
        Column::new("radicado", "Radicado").sortable(),
        Column::new("tipo", "Tipo").sortable(),
        Column::new("estado", "Estado").sortable().class("status"),
        Column::new("dias", "Días abiertos")
            .sortable()
            .render(|value, _| format!("{} días", value.display())),
    ])
    .unwrap();

    let records: Vec<Record> = (1..=12)
        .map(|i| {
            Record::new()
                .field("radicado", format!("PQRS-{i:04}"))
                .field("tipo", if i % 3 == 0 { "Queja" } else { "Petición" })
                .field("estado", if i % 2 == 0 { "Abierto" } else { "Cerrado" })
                .field("dias", i * 3)
        })
        .collect();

    let state = TableState::new(schema, "pqrs-table")
        .store(Box::new(BrowserStore::local()))
        .records(records)
        .default_page_size(5)
        .on_refresh(|| println!("[hook] refresh requested"))
        .on_view(|record| {
            println!(
                "[hook] view details for {}",
                record.value_or_null("radicado").display()
            );
        })
        .actions_renderer(|record| {
            format!(
                r#"<a href="/pqrs/{}">abrir</a>"#,
                record.value_or_null("radicado").display()
            )
        });

    let mut grid = Grid::new(state);

    println!("=== initial render ===");
    let view = grid.view();
    println!(
        "page {}/{} — showing {}..{} of {}",
        view.current_page,
        view.total_pages,
        view.start + 1,
        view.end,
        view.total_records
    );

    grid.state_mut().set_search("queja");
    grid.state_mut().toggle_sort("dias");
    let view = grid.view();
    println!("\n=== after search + sort ===");
    println!(
        "{} matches across {} pages",
        view.total_records, view.total_pages
    );
    for record in &view.rows {
        println!(
            "  {} | {}",
            record.value_or_null("radicado").display(),
            record.value_or_null("dias").display()
        );
    }

    // row action hooks fire against the current page
    grid.state_mut().set_search("");
    grid.state_mut().view_row(0);

    println!("\n=== rendered component ({} bytes) ===", grid.render().len());
    println!("{}", grid.render());
}
