//! Generic "fetch a collection once, then show it as a table" view.
//!
//! ## Lifecycle
//! 1) `CollectionView::new(config, source)`: `Loading`, empty collection.
//! 2) `on_mount()`: spawns the single fetch for this mount.
//! 3) every frame, `sync()`: applies the fetch result once it arrives and
//!    moves the view to `Loaded`. Returns `true` when a re-render is due.
//! 4) `render()`: pure projection of the current state into a [`TableModel`].
//!
//! Dropping the view cancels the in-flight fetch; a late result is discarded.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use octofit_states::{StateCell, TaskHandle, spawn};
use ustr::Ustr;

use crate::column::ColumnDef;
use crate::error::FetchFailure;
use crate::record::{Collection, Record, RowKey};
use crate::source::{CollectionSource, HttpSource};
use crate::table::TableModel;

type FetchOutcome = Result<Collection, FetchFailure>;

/// Fixed inputs of a view.
#[derive(Clone)]
pub struct ViewConfig {
    pub title: Ustr,
    pub endpoint: Ustr,
    pub columns: Vec<ColumnDef>,
    pub row_key: fn(&Record, usize) -> RowKey,
}

impl ViewConfig {
    /// Config keyed by [`RowKey::for_record`].
    pub fn new(title: impl AsRef<str>, endpoint: Ustr, columns: Vec<ColumnDef>) -> Self {
        Self {
            title: Ustr::from(title.as_ref()),
            endpoint,
            columns,
            row_key: RowKey::for_record,
        }
    }
}

impl fmt::Debug for ViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfig")
            .field("title", &self.title)
            .field("endpoint", &self.endpoint)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Waiting for the mount fetch to resolve.
    #[default]
    Loading,
    /// The fetch resolved, successfully or not.
    Loaded,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub phase: ViewPhase,
    pub collection: Collection,
    pub last_error: Option<FetchFailure>,
    pub loaded_at: Option<DateTime<Utc>>,
}

pub struct CollectionView {
    config: ViewConfig,
    source: Arc<dyn CollectionSource>,
    state: ViewState,
    outcome: StateCell<Option<FetchOutcome>>,
    task: Option<TaskHandle>,
}

impl CollectionView {
    pub fn new(config: ViewConfig, source: Arc<dyn CollectionSource>) -> Self {
        Self {
            config,
            source,
            state: ViewState::default(),
            outcome: StateCell::new(None),
            task: None,
        }
    }

    /// View backed by [`HttpSource`].
    pub fn http(config: ViewConfig) -> Self {
        Self::new(config, Arc::new(HttpSource))
    }

    /// Starts the one fetch of this mount. Later calls are ignored.
    pub fn on_mount(&mut self) {
        if self.task.is_some() {
            debug!(
                "CollectionView[{}]: already mounted, not fetching again",
                self.config.title
            );
            return;
        }

        let handle = TaskHandle::new();
        let updater = self.outcome.updater(handle.cancellation_token());
        let fetch = self.source.fetch(&self.config.endpoint);
        let title = self.config.title;

        info!(
            "CollectionView[{title}]: fetching {} (task {})",
            self.config.endpoint,
            handle.id().generation()
        );

        spawn(async move {
            let cancel = updater.cancellation_token();
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("CollectionView[{title}]: unmounted before fetch resolved");
                }
                result = fetch => updater.set(Some(result)),
            }
        });

        self.task = Some(handle);
    }

    /// Applies a finished fetch. Returns `true` when the view must re-render.
    pub fn sync(&mut self) -> bool {
        if !self.outcome.sync() {
            return false;
        }

        match self.outcome.get_mut().take() {
            Some(result) => {
                self.apply(result);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, result: FetchOutcome) {
        match result {
            Ok(collection) => {
                info!(
                    "CollectionView[{}]: loaded {} records",
                    self.config.title,
                    collection.len()
                );
                self.state.collection = collection;
                self.state.last_error = None;
            }
            Err(failure) => {
                error!(
                    "CollectionView[{}]: error fetching {}: {failure}",
                    self.config.title, self.config.endpoint
                );
                self.state.last_error = Some(failure);
            }
        }

        self.state.phase = ViewPhase::Loaded;
        self.state.loaded_at = Some(Utc::now());
    }

    /// Headers from the columns, one keyed row per record in received order.
    pub fn render(&self) -> TableModel {
        TableModel::build(
            self.config.title,
            &self.config.columns,
            self.config.row_key,
            &self.state.collection,
        )
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.phase
    }

    pub fn is_loading(&self) -> bool {
        self.state.phase == ViewPhase::Loading
    }

    pub fn is_mounted(&self) -> bool {
        self.task.is_some()
    }

    pub fn collection(&self) -> &[Record] {
        &self.state.collection
    }

    pub fn last_error(&self) -> Option<&FetchFailure> {
        self.state.last_error.as_ref()
    }
}

impl fmt::Debug for CollectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionView")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl Drop for CollectionView {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.cancel();
        }
    }
}
