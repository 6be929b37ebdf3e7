mod resource_tabs;
pub mod table;

pub use resource_tabs::resource_tabs;
pub use table::collection_table;
