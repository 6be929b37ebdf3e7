use octofit_business::{BusinessConfig, CollectionView, Resource};

/// The main application state.
///
/// Holds one view per [`Resource`], created up front but only mounted (and
/// therefore fetched) the first time its tab is shown.
#[derive(Debug)]
pub struct State {
    pub config: BusinessConfig,
    /// The resource whose table is currently displayed.
    pub active: Resource,
    views: Vec<(Resource, CollectionView)>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let views = Resource::ALL
            .iter()
            .map(|&resource| (resource, resource.view(&config)))
            .collect();

        Self {
            config,
            active: Resource::Activities,
            views,
        }
    }

    /// State whose views all read from `base_url`, e.g. a mock server.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    pub fn view(&self, resource: Resource) -> Option<&CollectionView> {
        self.views
            .iter()
            .find(|(r, _)| *r == resource)
            .map(|(_, view)| view)
    }

    pub fn view_mut(&mut self, resource: Resource) -> Option<&mut CollectionView> {
        self.views
            .iter_mut()
            .find(|(r, _)| *r == resource)
            .map(|(_, view)| view)
    }

    /// Mounts the active view if this is the first time it is displayed.
    pub fn mount_active(&mut self) {
        if let Some(view) = self.view_mut(self.active)
            && !view.is_mounted()
        {
            view.on_mount();
        }
    }

    /// Applies finished fetches. Returns `true` if any view changed.
    pub fn sync_views(&mut self) -> bool {
        self.views
            .iter_mut()
            .fold(false, |changed, (_, view)| view.sync() || changed)
    }

    /// True while a mounted view still waits for its fetch.
    pub fn has_pending_fetch(&self) -> bool {
        self.views
            .iter()
            .any(|(_, view)| view.is_mounted() && view.is_loading())
    }
}
