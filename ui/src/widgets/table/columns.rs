use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Every column shares the remaining width equally.
#[inline]
pub fn table_column() -> Column {
    Column::remainder().at_least(MIN_COLUMN_WIDTH).clip(true)
}
