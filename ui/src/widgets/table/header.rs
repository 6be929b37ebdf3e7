use egui::Ui;
use egui_extras::TableRow;

/// Renders one bold label per column.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, labels: &[impl AsRef<str>]) {
    for label in labels {
        header.col(|ui| {
            render_header_cell(ui, label.as_ref());
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
