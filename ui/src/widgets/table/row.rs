use egui::Ui;
use egui_extras::TableRow as EguiRow;
use octofit_business::{RowKey, TableRow};

/// Renders a body row, one label per cell.
///
/// Cell widgets are scoped under the row key and position. Keys come from the
/// API and are not guaranteed unique (`1` and `"1"`, or repeated ids).
#[inline]
pub fn render_table_row(row: &mut EguiRow<'_, '_>, index: usize, data: &TableRow) {
    for (column, cell) in data.cells.iter().enumerate() {
        row.col(|ui| {
            ui.push_id(cell_id_salt(&data.key, index, column), |ui| {
                render_cell(ui, cell);
            });
        });
    }
}

#[inline]
fn cell_id_salt(key: &RowKey, index: usize, column: usize) -> (&RowKey, usize, usize) {
    (key, index, column)
}

#[inline]
fn render_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}
