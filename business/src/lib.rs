//! Business layer for the OctoFit collection views.
//!
//! A [`CollectionView`] fetches one JSON array from its endpoint when mounted
//! and renders it into a [`TableModel`]. [`Resource`] lists the concrete
//! views (activities, teams, users, ...) as pure configuration.

pub mod column;
pub mod config;
pub mod error;
pub mod http;
pub mod record;
pub mod resources;
pub mod source;
pub mod table;
pub mod view;

pub use column::ColumnDef;
pub use config::BusinessConfig;
pub use error::FetchFailure;
pub use record::{Collection, Record, RowKey};
pub use resources::Resource;
pub use source::{CollectionSource, FetchFuture, HttpSource, StaticSource};
pub use table::{TableModel, TableRow};
pub use view::{CollectionView, ViewConfig, ViewPhase, ViewState};
