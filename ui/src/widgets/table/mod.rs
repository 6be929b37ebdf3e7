//! Table rendering for a collection view.
//!
//! - `columns`: column sizing
//! - `header`: header row with one bold label per column
//! - `row`: body rows keyed by the record's row key and position

mod columns;
mod header;
mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use octofit_business::CollectionView;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_column};
use header::render_table_header;
use row::render_table_row;

/// Draws the view's title and its table.
///
/// A spinner sits next to the title while the mount fetch is in flight. A
/// failed fetch looks exactly like an empty collection here; the failure is
/// only reported in the log.
pub fn collection_table(ui: &mut Ui, view: &CollectionView) {
    let table = view.render();

    ui.horizontal(|ui| {
        ui.heading(table.title.as_str());
        if view.is_loading() {
            ui.spinner();
        }
    });
    ui.add_space(8.0);

    TableBuilder::new(ui)
        .id_salt(table.title.as_str())
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(table_column(), table.headers.len())
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, &table.headers);
        })
        .body(|mut body| {
            for (index, row) in table.rows.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut table_row| {
                    render_table_row(&mut table_row, index, row);
                });
            }
        });
}
